//! Maildir directory scanning

use crate::error::{ReaderError, Result};
use crate::types::FileEntry;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filename marker for a message flagged as seen
pub const SEEN_MARKER: &str = ":2,S";

/// Whether a Maildir filename carries the seen flag
#[must_use]
pub fn is_read(filename: &str) -> bool {
    filename.contains(SEEN_MARKER)
}

/// Lists one message directory, non-recursively
#[derive(Debug, Clone)]
pub struct MaildirScanner {
    dir: PathBuf,
}

impl MaildirScanner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every entry of the directory with its read flag and modification time
    pub fn scan(&self) -> Result<Vec<FileEntry>> {
        let entries = fs::read_dir(&self.dir).map_err(|source| self.unreadable(source))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| self.unreadable(source))?;
            let filename = entry.file_name().to_string_lossy().into_owned();
            let modified = fs::metadata(entry.path())
                .and_then(|m| m.modified())
                .map_err(|source| self.unreadable(source))?;

            files.push(FileEntry {
                read: is_read(&filename),
                modified_at: DateTime::<Utc>::from(modified),
                filename,
            });
        }

        let read = files.iter().filter(|f| f.read).count();
        debug!(
            "Total files: {}, read: {read}, unread: {}",
            files.len(),
            files.len() - read
        );

        Ok(files)
    }

    /// Current size in bytes of a scanned entry
    pub fn size_of(&self, entry: &FileEntry) -> Result<u64> {
        fs::metadata(self.dir.join(&entry.filename))
            .map(|m| m.len())
            .map_err(|source| self.unreadable(source))
    }

    fn unreadable(&self, source: std::io::Error) -> ReaderError {
        ReaderError::DirectoryUnreadable {
            path: self.dir.clone(),
            source,
        }
    }
}
