use mailfiles_reader::*;

#[test]
fn test_html_link_and_inline_image() {
    let html = r#"<p>Hi <a href="http://x.com">click</a></p><img src="data:image/png;base64,AAAA">"#;
    let conversion = html_to_text(html);

    assert_eq!(conversion.text, "Hi click [Inline image 1 removed]");
    assert_eq!(
        conversion.links,
        vec![ExtractedLink {
            href: "http://x.com".into(),
            text: "click".into(),
        }]
    );
    assert_eq!(
        conversion.images,
        vec![ExtractedImage {
            image: "data:image/png;base64,AAAA".into(),
            index: 0,
        }]
    );
}

#[test]
fn test_html_strips_script_and_style() {
    let html = "<style>p { color: red; }</style><p>Visible</p><script>alert('x')</script>";
    let conversion = html_to_text(html);

    assert_eq!(conversion.text, "Visible");
}

#[test]
fn test_html_br_becomes_space() {
    let conversion = html_to_text("line one<br>line two<BR/>line three<br />end");

    assert_eq!(conversion.text, "line one line two line three end");
}

#[test]
fn test_html_block_elements_are_separated() {
    let conversion = html_to_text("<div>first</div><div>second</div><ul><li>a</li><li>b</li></ul>");

    assert_eq!(conversion.text, "first second a b");
}

#[test]
fn test_html_empty_anchor_gets_label() {
    let html = r#"<a name="top">Top</a> <a href="http://one.example"></a> <a href="http://two.example">  </a>"#;
    let conversion = html_to_text(html);

    assert_eq!(conversion.links.len(), 2);
    assert_eq!(conversion.links[0].href, "http://one.example");
    assert_eq!(conversion.links[0].text, "Link 2");
    assert_eq!(conversion.links[1].text, "Link 3");
    assert_eq!(conversion.text, "Top Link 2 Link 3");
}

#[test]
fn test_html_anchor_without_href_left_as_text() {
    let conversion = html_to_text(r#"<p>Jump <a id="here">here</a></p>"#);

    assert!(conversion.links.is_empty());
    assert_eq!(conversion.text, "Jump here");
}

#[test]
fn test_html_links_in_document_order() {
    let html = r#"<div><a href="http://a.example">A</a><p><a href="http://b.example">B</a></p></div><a href="http://c.example">C</a>"#;
    let conversion = html_to_text(html);

    let hrefs: Vec<&str> = conversion.links.iter().map(|l| l.href.as_str()).collect();
    assert_eq!(hrefs, vec!["http://a.example", "http://b.example", "http://c.example"]);
}

#[test]
fn test_html_images_in_document_order() {
    let html = concat!(
        r#"<img src="data:image/png;base64,FIRST">"#,
        r#"<a href="http://x.example"><img src="data:image/gif;base64,SECOND"></a>"#,
        r#"<div style="background:url(data:image/jpeg;base64,THIRD)">text</div>"#,
    );
    let conversion = html_to_text(html);

    let images: Vec<(&str, usize)> = conversion
        .images
        .iter()
        .map(|i| (i.image.as_str(), i.index))
        .collect();
    assert_eq!(
        images,
        vec![
            ("data:image/png;base64,FIRST", 0),
            ("data:image/gif;base64,SECOND", 1),
            ("data:image/jpeg;base64,THIRD)", 2),
        ]
    );
    assert_eq!(conversion.links[0].text, "Link 1");
    assert_eq!(
        conversion.text,
        "[Inline image 1 removed] Link 1 [Inline image 2 removed] [Inline image 3 removed] text"
    );
}

#[test]
fn test_html_image_only_anchor_gets_label() {
    let conversion =
        html_to_text(r#"<a href="http://x.example"><img src="data:image/gif;base64,QQ"></a>"#);

    assert_eq!(
        conversion.links,
        vec![ExtractedLink {
            href: "http://x.example".into(),
            text: "Link 1".into(),
        }]
    );
    assert_eq!(conversion.images.len(), 1);
    assert_eq!(conversion.images[0].image, "data:image/gif;base64,QQ");
    assert_eq!(conversion.text, "Link 1 [Inline image 1 removed]");
}

#[test]
fn test_html_anchor_label_skips_images() {
    let html = r#"<a href="http://shop.example">Our<img src="data:image/png;base64,AAAA">shop</a>today"#;
    let conversion = html_to_text(html);

    assert_eq!(conversion.links[0].text, "Our shop");
    assert_eq!(conversion.text, "Our shop [Inline image 1 removed] today");
}

#[test]
fn test_html_wrapped_data_uri() {
    let html = "<p>Before</p><img src=\"data:image/png;base64,AAAA\nBBBB\"><p>After</p>";
    let conversion = html_to_text(html);

    assert_eq!(conversion.images.len(), 1);
    assert_eq!(conversion.images[0].image, "data:image/png;base64,AAAA\nBBBB");
    assert_eq!(conversion.text, "Before [Inline image 1 removed] After");
}

#[test]
fn test_html_entities_become_spaces() {
    let conversion = html_to_text("<p>a&nbsp;b</p><p>literal &amp;copy; here</p>");

    assert_eq!(conversion.text, "a b literal   here");
}

#[test]
fn test_html_plain_text_input() {
    let conversion = html_to_text("just text\nover lines");

    assert_eq!(conversion.text, "just text over lines");
    assert!(conversion.links.is_empty());
    assert!(conversion.images.is_empty());
}

#[test]
fn test_html_conversion_is_stable() {
    let html = r#"<p>Hi <a href="http://x.com">click</a></p><img src="data:image/png;base64,AAAA">"#;
    let first = html_to_text(html);
    let second = html_to_text(&first.text);

    assert_eq!(second.text, first.text);
    assert!(second.links.is_empty());
    assert!(second.images.is_empty());
}

#[test]
fn test_deeply_nested_markup_falls_back() {
    let html = format!("{}deep<br>text{}", "<div>".repeat(300), "</div>".repeat(300));
    let conversion = html_to_text(&html);

    assert!(conversion.links.is_empty());
    assert!(conversion.images.is_empty());
    assert!(conversion.text.starts_with("<div><div>"));
    assert!(conversion.text.contains("deep text"));
}
