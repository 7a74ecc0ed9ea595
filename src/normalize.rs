//! Whitespace normalization and size formatting shared by the extractors

use regex::Regex;
use std::sync::LazyLock;

static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Replace every run of newlines with a single space and trim the result.
///
/// Idempotent: a normalized string has no newlines and no outer whitespace.
#[must_use]
pub fn normalize(text: &str) -> String {
    join_lines(text).trim().to_string()
}

/// Replace every run of newlines with a single space, keeping outer spacing
#[must_use]
pub fn join_lines(text: &str) -> String {
    NEWLINE_RUN.replace_all(text, " ").into_owned()
}

/// Collapse every whitespace run to a single space and trim.
///
/// Used after link removal, which leaves the surrounding spaces behind.
#[must_use]
pub fn squeeze(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Render a byte count with 1024-based units and at most two decimals
///
/// ```
/// use mailfiles_reader::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}
