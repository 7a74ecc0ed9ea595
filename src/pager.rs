//! Filtering, sorting and pagination of directory listings

use crate::error::Result;
use crate::normalize::format_size;
use crate::types::{FileEntry, PageResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Read-state selection for a listing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    Read,
    Unread,
    #[default]
    All,
}

impl Filter {
    /// Parse a query value; anything but exactly `read`/`unread` selects everything
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("read") => Self::Read,
            Some("unread") => Self::Unread,
            _ => Self::All,
        }
    }

    #[must_use]
    pub const fn matches(self, entry: &FileEntry) -> bool {
        match self {
            Self::Read => entry.read,
            Self::Unread => !entry.read,
            Self::All => true,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Read => "read",
            Self::Unread => "unread",
            Self::All => "all",
        };
        write!(f, "{name}")
    }
}

/// Listing parameters, already validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub filter: Filter,

    /// Keep only entries modified within this many days
    pub modified_since_days: Option<u32>,

    /// One-based page number
    pub page: usize,

    /// Page size, at least 1
    pub limit: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            filter: Filter::All,
            modified_since_days: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageQuery {
    /// Build a query from raw query-string values.
    ///
    /// Missing, non-numeric or non-positive `page`/`limit` fall back to the
    /// defaults; `modified_since` is kept only when it is a positive integer.
    #[must_use]
    pub fn from_params(
        page: Option<&str>,
        limit: Option<&str>,
        filter: Option<&str>,
        modified_since: Option<&str>,
    ) -> Self {
        Self {
            filter: Filter::from_param(filter),
            modified_since_days: positive(modified_since),
            page: positive(page).unwrap_or(DEFAULT_PAGE),
            limit: positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Relative URL for another page of this listing
    #[must_use]
    pub fn page_url(&self, page: usize) -> String {
        let mut url = format!(
            "/emails?page={page}&limit={}&filter={}",
            self.limit, self.filter
        );
        if let Some(days) = self.modified_since_days {
            url.push_str(&format!("&modifiedSince={days}"));
        }
        url
    }
}

fn positive<T: std::str::FromStr + Default + PartialOrd>(value: Option<&str>) -> Option<T> {
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
}

/// Filter, sort and slice `entries` into one page.
///
/// `size_of` is called once for every entry that survives filtering, so the
/// reported total covers all pages, not just the returned one.
pub fn page<F>(
    entries: Vec<FileEntry>,
    query: &PageQuery,
    now: DateTime<Utc>,
    mut size_of: F,
) -> Result<PageResult>
where
    F: FnMut(&FileEntry) -> Result<u64>,
{
    let limit = query.limit.max(1);
    let current_page = query.page.max(1);

    let cutoff = query
        .modified_since_days
        .map(|days| now - Duration::days(i64::from(days)));
    if let Some(cutoff) = cutoff {
        debug!("Filtering files modified since: {cutoff}");
    }

    let mut files: Vec<FileEntry> = entries
        .into_iter()
        .filter(|entry| query.filter.matches(entry))
        .filter(|entry| cutoff.is_none_or(|c| entry.modified_at >= c))
        .collect();
    files.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));

    let total_files = files.len();
    debug!("Total filtered files: {total_files}");

    let mut total_size_bytes = 0;
    for entry in &files {
        total_size_bytes += size_of(entry)?;
    }

    let total_pages = total_files.div_ceil(limit);
    let start = (current_page - 1).saturating_mul(limit);
    let files: Vec<FileEntry> = files.into_iter().skip(start).take(limit).collect();
    debug!("Paginating results: page {current_page}, limit {limit}, {} items", files.len());

    let query = PageQuery {
        page: current_page,
        limit,
        ..*query
    };

    Ok(PageResult {
        current_page,
        total_pages,
        limit,
        total_files,
        total_size_bytes,
        total_size: format_size(total_size_bytes),
        files,
        next_page_token: (current_page < total_pages).then(|| query.page_url(current_page + 1)),
        prev_page_token: (current_page > 1).then(|| query.page_url(current_page - 1)),
    })
}
