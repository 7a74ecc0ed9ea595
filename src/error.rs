//! Error types for listing and reading messages

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while serving a message request
#[derive(Error, Debug)]
pub enum ReaderError {
    /// The request did not name a message file
    #[error("No file name provided")]
    MissingInput,

    /// The named message file is not in the store
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The message directory could not be listed or stat'ed
    #[error("Error reading directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading, MIME decoding or HTML conversion failed
    #[error("Error parsing email content: {0}")]
    ParseFailure(String),
}

impl ReaderError {
    /// Conventional HTTP status class for this fault
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingInput => 400,
            Self::NotFound(_) => 404,
            Self::DirectoryUnreadable { .. } | Self::ParseFailure(_) => 500,
        }
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ReaderError>;
