//! HTML body to plain text conversion
//!
//! The markup is parsed into a tree once and replayed into a text buffer.
//! Nothing is removed from the tree while walking it: `script`/`style`
//! subtrees are skipped, anchors are emitted as their visible text, and
//! inline images are emitted as placeholders. Links and images are recorded
//! as they are met, so their order is document order.

use crate::error::{ReaderError, Result};
use crate::extracted::{find_images, strip_images, without_images};
use crate::normalize::normalize;
use crate::types::{ExtractedImage, ExtractedLink};
use regex::Regex;
use scraper::{ElementRef, Html, Node};
use std::sync::LazyLock;
use tracing::{debug, warn};

static BR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&[a-z]+;").unwrap());

/// Deepest element nesting the walker accepts
const MAX_DEPTH: usize = 256;

const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "dd",
    "div",
    "dl",
    "dt",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tr",
    "ul",
];

/// Text rendering of an HTML body plus what was pulled out of it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlConversion {
    pub text: String,
    pub images: Vec<ExtractedImage>,
    pub links: Vec<ExtractedLink>,
}

/// Convert an HTML fragment to single-line text.
///
/// Never fails: if the tree cannot be walked, the `<br>`-substituted markup is
/// normalized and returned as is, with no links or images.
#[must_use]
pub fn html_to_text(html: &str) -> HtmlConversion {
    let markup = BR_REGEX.replace_all(html, "\n");

    match convert_tree(&markup) {
        Ok(conversion) => conversion,
        Err(e) => {
            warn!("Error parsing HTML content, using raw text: {e}");
            HtmlConversion {
                text: normalize(&markup),
                ..HtmlConversion::default()
            }
        }
    }
}

fn convert_tree(markup: &str) -> Result<HtmlConversion> {
    let document = Html::parse_fragment(markup);
    if !document.errors.is_empty() {
        debug!("Recovered from {} HTML parse errors", document.errors.len());
    }

    let mut renderer = Renderer::default();
    renderer.walk(document.root_element(), 0)?;

    Ok(HtmlConversion {
        text: finish(&renderer.text),
        images: renderer.images,
        links: renderer.links,
    })
}

fn finish(text: &str) -> String {
    let text = normalize(text).replace("&nbsp;", " ").replace('\u{a0}', " ");
    ENTITY_REGEX.replace_all(&text, " ").trim().to_string()
}

#[derive(Default)]
struct Renderer {
    text: String,
    images: Vec<ExtractedImage>,
    links: Vec<ExtractedLink>,
    anchors: usize,

    /// Visible text of the anchor being walked, without image placeholders
    label: Option<String>,
}

impl Renderer {
    fn walk(&mut self, element: ElementRef<'_>, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(ReaderError::ParseFailure(format!(
                "markup nested deeper than {MAX_DEPTH} elements"
            )));
        }

        let name = element.value().name();
        if matches!(name, "script" | "style") {
            return Ok(());
        }

        for (_, value) in element.value().attrs() {
            self.attribute_images(value);
        }

        let block = BLOCK_ELEMENTS.contains(&name);
        if block {
            self.line_break();
        }

        if name == "a" {
            self.anchors += 1;
            match element.value().attr("href") {
                Some(href) => self.anchor(element, href, depth)?,
                None => self.children(element, depth)?,
            }
        } else {
            self.children(element, depth)?;
        }

        if block {
            self.line_break();
        }
        Ok(())
    }

    fn children(&mut self, element: ElementRef<'_>, depth: usize) -> Result<()> {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => {
                    if let Some(label) = self.label.as_mut() {
                        label.push_str(&without_images(text));
                    }
                    let cleaned = strip_images(text, &mut self.images);
                    self.text.push_str(&cleaned);
                }
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        self.walk(child, depth + 1)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Emit an anchor as its visible text and record the link.
    ///
    /// Images inside the anchor are recorded as usual; their placeholders
    /// follow the link text instead of becoming part of it.
    fn anchor(&mut self, element: ElementRef<'_>, href: &str, depth: usize) -> Result<()> {
        let number = self.anchors;
        let first_image = self.images.len();
        let outer = std::mem::take(&mut self.text);
        self.label = Some(String::new());
        let walked = self.children(element, depth);
        self.text = outer;
        let label = self.label.take().unwrap_or_default();
        walked?;

        let visible = normalize(&label);
        let text = if visible.is_empty() {
            format!("Link {number}")
        } else {
            visible
        };

        self.text.push_str(&text);
        for image in &self.images[first_image..] {
            self.text.push('\n');
            self.text.push_str(&image.placeholder());
        }
        if self.images.len() > first_image {
            self.text.push('\n');
        }

        self.links.push(ExtractedLink {
            href: href.to_string(),
            text,
        });
        Ok(())
    }

    fn attribute_images(&mut self, value: &str) {
        for mut image in find_images(value) {
            image.index = self.images.len();
            self.line_break();
            self.text.push_str(&image.placeholder());
            self.line_break();
            self.images.push(image);
        }
    }

    fn line_break(&mut self) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        if let Some(label) = self.label.as_mut() {
            label.push('\n');
        }
    }
}
