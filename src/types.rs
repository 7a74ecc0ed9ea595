//! Core types for messages, extraction results and directory listings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured fields of one decoded message, produced by the MIME parser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Subject header
    pub subject: Option<String>,

    /// From header, as written
    pub from: Option<String>,

    /// To header, as written
    pub to: Option<String>,

    /// Cc header, as written
    pub cc: Option<String>,

    /// Date header
    pub date: Option<DateTime<Utc>>,

    /// First `text/plain` body part
    pub plain_body: Option<String>,

    /// First `text/html` body part
    pub html_body: Option<String>,

    /// All headers
    pub headers: Headers,
}

impl MessageRecord {
    /// Plain body, treating an empty part as absent
    #[must_use]
    pub fn plain(&self) -> Option<&str> {
        self.plain_body.as_deref().filter(|s| !s.is_empty())
    }

    /// HTML body, treating an empty part as absent
    #[must_use]
    pub fn html(&self) -> Option<&str> {
        self.html_body.as_deref().filter(|s| !s.is_empty())
    }
}

/// Header list with case-insensitive lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Headers {
    /// (lowercased name, value) pairs in message order
    pub all: Vec<(String, String)>,
}

impl Headers {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            all: pairs
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
                .collect(),
        }
    }

    /// First value for `name`, matched case-insensitively
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.all
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A hyperlink pulled out of message text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedLink {
    pub href: String,
    pub text: String,
}

impl ExtractedLink {
    /// A bare URL found in plain text labels itself
    pub fn bare(url: impl Into<String>) -> Self {
        let href = url.into();
        Self {
            text: href.clone(),
            href,
        }
    }
}

/// An inline base64 image pulled out of message markup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedImage {
    /// Full `data:image/...;base64,...` URI
    pub image: String,

    /// Zero-based occurrence order
    pub index: usize,
}

impl ExtractedImage {
    /// Text left in place of the image
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("[Inline image {} removed]", self.index + 1)
    }
}

/// `/emails/content` result: the raw body, unconverted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailContent {
    pub file_name: String,
    pub body: String,
}

/// `/emails/parse` result: headers, both renderings and everything extracted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentResult {
    pub file_name: String,
    pub subject: String,
    pub from: String,
    pub to: String,
    pub cc: String,

    /// RFC 3339 timestamp, or a sentinel when the message has no date
    pub date: String,

    /// `Delivered-To`, else `X-Original-To`
    pub original_recipient: String,

    /// Normalized plain body with bare URLs removed
    pub plain_text_body: String,

    /// HTML body converted to text
    #[serde(rename = "htmlBody")]
    pub html_body_as_text: String,

    #[serde(rename = "base64Images")]
    pub images: Vec<ExtractedImage>,

    #[serde(rename = "extractedLinks")]
    pub links: Vec<ExtractedLink>,
}

/// `/emails/body` result: one body with regex-based extraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailBody {
    pub file_name: String,
    pub is_html: bool,
    pub extracted_text: String,
    #[serde(rename = "base64Images")]
    pub images: Vec<ExtractedImage>,
    #[serde(rename = "extractedLinks")]
    pub links: Vec<ExtractedLink>,
}

/// One entry of the message directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub filename: String,
    pub modified_at: DateTime<Utc>,

    /// Filename carries the seen flag
    pub read: bool,
}

/// One page of a directory listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub current_page: usize,
    pub total_pages: usize,
    pub limit: usize,

    /// Entries surviving the filters, across all pages
    pub total_files: usize,

    pub total_size_bytes: u64,

    /// `total_size_bytes` rendered with 1024-based units
    pub total_size: String,

    pub files: Vec<FileEntry>,
    pub next_page_token: Option<String>,
    pub prev_page_token: Option<String>,
}
