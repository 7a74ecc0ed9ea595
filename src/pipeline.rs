//! Message content pipeline: the three result shapes served per message

use crate::extracted::{find_images, strip_anchor_links, strip_bare_links};
use crate::html::html_to_text;
use crate::normalize::{join_lines, normalize, squeeze};
use crate::types::{ContentResult, EmailBody, EmailContent, MessageRecord};
use tracing::debug;

const NO_BODY: &str = "No body content found";
const NO_PLAIN_BODY: &str = "No plain text body content found";
const NO_SUBJECT: &str = "No Subject";
const UNKNOWN_SENDER: &str = "Unknown sender";
const UNKNOWN_RECIPIENT: &str = "Unknown recipient";
const NO_CC: &str = "No CC";
const NO_DATE: &str = "No Date";
const UNKNOWN_ORIGINAL_RECIPIENT: &str = "Unknown original recipient";

/// Raw body passthrough: plain text, else unconverted HTML
#[must_use]
pub fn body_only(record: &MessageRecord, file_name: &str) -> EmailContent {
    let body = record.plain().or_else(|| record.html()).unwrap_or(NO_BODY);

    EmailContent {
        file_name: file_name.to_string(),
        body: body.to_string(),
    }
}

/// Full parse: header fields, a cleaned plain body and a converted HTML body.
///
/// Links found in the plain body come first, followed by the links and
/// images of the HTML body in document order. The same URL appearing in
/// both bodies is recorded twice.
#[must_use]
pub fn full_parse(record: &MessageRecord, file_name: &str) -> ContentResult {
    let mut links = Vec::new();
    let plain = normalize(record.plain().unwrap_or(NO_PLAIN_BODY));
    let plain_text_body = squeeze(&strip_bare_links(&plain, &mut links));

    let (html_body_as_text, images) = match record.html() {
        Some(html) => {
            let conversion = html_to_text(html);
            links.extend(conversion.links);
            (conversion.text, conversion.images)
        }
        None => (String::new(), Vec::new()),
    };

    debug!(
        "Parsed {file_name}: {} links, {} inline images",
        links.len(),
        images.len()
    );

    ContentResult {
        file_name: file_name.to_string(),
        subject: field_or(record.subject.as_deref(), NO_SUBJECT),
        from: field_or(record.from.as_deref(), UNKNOWN_SENDER),
        to: field_or(record.to.as_deref(), UNKNOWN_RECIPIENT),
        cc: field_or(record.cc.as_deref(), NO_CC),
        date: record
            .date
            .map_or_else(|| NO_DATE.to_string(), |d| d.to_rfc3339()),
        original_recipient: original_recipient(record),
        plain_text_body,
        html_body_as_text,
        images,
        links,
    }
}

/// Extraction over a single body using regex matching on the raw string.
///
/// Cruder than [`full_parse`]: anchors and images are matched in the markup
/// text without building a tree, so malformed HTML never fails here. Images
/// are collected from the HTML body even when the plain body is the one
/// being cleaned.
#[must_use]
pub fn extraction_only(record: &MessageRecord, file_name: &str) -> EmailBody {
    let html = record.html();
    let body = record.plain().or(html).unwrap_or(NO_BODY);
    let mut text = normalize(body);
    let mut links = Vec::new();

    let images = match html {
        Some(markup) => {
            let images = find_images(markup);
            // The working text is normalized, so a wrapped URI is matched joined
            for image in &images {
                text = text.replacen(&join_lines(&image.image), &image.placeholder(), 1);
            }
            text = strip_anchor_links(&text, &mut links);
            images
        }
        None => {
            text = strip_bare_links(&text, &mut links);
            Vec::new()
        }
    };

    EmailBody {
        file_name: file_name.to_string(),
        is_html: html.is_some(),
        extracted_text: squeeze(&text),
        images,
        links,
    }
}

/// `Delivered-To`, falling back to `X-Original-To`
#[must_use]
pub fn original_recipient(record: &MessageRecord) -> String {
    ["delivered-to", "x-original-to"]
        .iter()
        .find_map(|name| record.headers.get(name).filter(|v| !v.trim().is_empty()))
        .map_or_else(
            || UNKNOWN_ORIGINAL_RECIPIENT.to_string(),
            |v| v.trim().to_string(),
        )
}

fn field_or(value: Option<&str>, fallback: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback).to_string()
}
