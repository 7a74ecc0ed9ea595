//! Configuration types.

use std::path::PathBuf;

/// Environment variable naming the message directory.
pub const DIRECTORY_ENV: &str = "DIRECTORY_PATH";

const DEFAULT_DIRECTORY: &str = "/emails";

/// Reader configuration, passed to the service at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Maildir directory holding one message per file.
    pub directory: PathBuf,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
        }
    }
}

impl ReaderConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Read `DIRECTORY_PATH`, falling back to the default directory.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var_os(DIRECTORY_ENV)
            .filter(|v| !v.is_empty())
            .map_or_else(Self::default, Self::new)
    }
}
