//! Link and inline image extraction from message text

use crate::types::{ExtractedImage, ExtractedLink};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Regex patterns
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

static IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data:image/[a-zA-Z]+;base64,[^"]+"#).unwrap()
});

static ANCHOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a [^>]*href="([^"]+)"[^>]*>(.*?)</a>"#).unwrap()
});

/// Remove every bare `http(s)://` URL from `text`, recording each in order.
///
/// Matches are deleted outright, so the surrounding spaces stay behind.
pub fn strip_bare_links(text: &str, links: &mut Vec<ExtractedLink>) -> String {
    URL_REGEX
        .replace_all(text, |caps: &Captures| {
            links.push(ExtractedLink::bare(&caps[0]));
            ""
        })
        .into_owned()
}

/// Replace every inline base64 image in `text` with its placeholder.
///
/// Indices continue from the number of images already recorded.
pub fn strip_images(text: &str, images: &mut Vec<ExtractedImage>) -> String {
    IMAGE_REGEX
        .replace_all(text, |caps: &Captures| {
            let image = ExtractedImage {
                image: caps[0].to_string(),
                index: images.len(),
            };
            let placeholder = image.placeholder();
            images.push(image);
            placeholder
        })
        .into_owned()
}

/// Remove inline base64 images from `text` without leaving a placeholder
#[must_use]
pub fn without_images(text: &str) -> String {
    IMAGE_REGEX.replace_all(text, "").into_owned()
}

/// Collect the inline base64 images of `markup` without modifying it
#[must_use]
pub fn find_images(markup: &str) -> Vec<ExtractedImage> {
    IMAGE_REGEX
        .find_iter(markup)
        .enumerate()
        .map(|(index, m)| ExtractedImage {
            image: m.as_str().to_string(),
            index,
        })
        .collect()
}

/// Regex pass over raw markup: remove `<a href="...">text</a>` elements and
/// bare URLs, recording both in left-to-right order.
///
/// Tolerates malformed markup; anchors without a quoted `href` are left as
/// text and only their bare URLs, if any, are picked up.
pub fn strip_anchor_links(text: &str, links: &mut Vec<ExtractedLink>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in ANCHOR_REGEX.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };

        out.push_str(&strip_bare_links(&text[last..whole.start()], links));
        links.push(ExtractedLink {
            href: caps[1].to_string(),
            text: caps[2].to_string(),
        });
        last = whole.end();
    }

    out.push_str(&strip_bare_links(&text[last..], links));
    out
}

/// Check whether `text` still holds anything the extractors would remove
#[must_use]
pub fn has_extractable(text: &str) -> bool {
    URL_REGEX.is_match(text) || IMAGE_REGEX.is_match(text)
}
