// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::significant_drop_tightening)]

//! Maildir Message Reader
//!
//! Lists messages stored one-per-file in a Maildir directory and turns each
//! message into display-ready content.
//!
//! # Features
//!
//! - Read/unread classification from the Maildir seen flag
//! - Filtering, newest-first sorting and pagination of listings
//! - Plain-text rendering of HTML bodies
//! - Hyperlink extraction from plain text and HTML
//! - Inline base64 image extraction with positional placeholders
//!
//! # Example
//!
//! ```rust
//! use mailfiles_reader::{MessageRecord, full_parse};
//!
//! let record = MessageRecord {
//!     plain_body: Some("See https://a.co/x now".into()),
//!     ..MessageRecord::default()
//! };
//! let result = full_parse(&record, "1700000000.M1P1.host:2,S");
//!
//! assert_eq!(result.plain_text_body, "See now");
//! assert_eq!(result.links[0].href, "https://a.co/x");
//! ```

mod config;
mod error;
mod extracted;
mod html;
mod maildir;
mod normalize;
mod pager;
mod parser;
mod pipeline;
mod service;
mod types;

pub use config::{DIRECTORY_ENV, ReaderConfig};
pub use error::{ReaderError, Result};
pub use extracted::*;
pub use html::{HtmlConversion, html_to_text};
pub use maildir::{MaildirScanner, SEEN_MARKER, is_read};
pub use normalize::{format_size, join_lines, normalize, squeeze};
pub use pager::{DEFAULT_LIMIT, DEFAULT_PAGE, Filter, PageQuery, page};
pub use parser::parse_message;
pub use pipeline::{body_only, extraction_only, full_parse, original_recipient};
pub use service::MailService;
pub use types::*;
