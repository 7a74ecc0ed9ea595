//! Request-level operations over the message directory

use crate::config::ReaderConfig;
use crate::error::{ReaderError, Result};
use crate::maildir::MaildirScanner;
use crate::pager::{PageQuery, page};
use crate::parser::parse_message;
use crate::pipeline::{body_only, extraction_only, full_parse};
use crate::types::{ContentResult, EmailBody, EmailContent, MessageRecord, PageResult};
use chrono::Utc;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{error, info, warn};

/// Serves listings and message content from one Maildir directory.
///
/// Every call recomputes from the files on disk; nothing is cached.
#[derive(Debug, Clone)]
pub struct MailService {
    scanner: MaildirScanner,
}

impl MailService {
    #[must_use]
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            scanner: MaildirScanner::new(config.directory),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        self.scanner.dir()
    }

    /// `GET /emails`
    pub fn list_emails(&self, query: &PageQuery) -> Result<PageResult> {
        info!(
            "Listing emails - page: {}, limit: {}, filter: {}, modified since: {:?}",
            query.page, query.limit, query.filter, query.modified_since_days
        );

        let entries = self.scanner.scan().inspect_err(|e| error!("{e}"))?;
        page(entries, query, Utc::now(), |entry| self.scanner.size_of(entry))
    }

    /// `POST /emails/content`
    pub fn email_content(&self, file: Option<&str>) -> Result<EmailContent> {
        let (file_name, record) = self.load(file)?;
        Ok(body_only(&record, file_name))
    }

    /// `POST /emails/parse`
    pub fn parse_email(&self, file: Option<&str>) -> Result<ContentResult> {
        let (file_name, record) = self.load(file)?;
        let result = full_parse(&record, file_name);
        info!(
            "Extracted email details - subject: {}, from: {}, to: {}",
            result.subject, result.from, result.to
        );
        Ok(result)
    }

    /// `POST /emails/body`
    pub fn email_body(&self, file: Option<&str>) -> Result<EmailBody> {
        let (file_name, record) = self.load(file)?;
        Ok(extraction_only(&record, file_name))
    }

    fn load<'a>(&self, file: Option<&'a str>) -> Result<(&'a str, MessageRecord)> {
        let Some(file_name) = file.filter(|f| !f.is_empty()) else {
            warn!("No file name provided in the request");
            return Err(ReaderError::MissingInput);
        };

        let path = self.resolve(file_name)?;
        info!("Parsing content of file: {file_name}");

        let raw = fs::read(&path).map_err(|e| {
            error!("Error reading {}: {e}", path.display());
            ReaderError::ParseFailure(e.to_string())
        })?;
        let record = parse_message(&raw).inspect_err(|e| error!("{e}"))?;
        Ok((file_name, record))
    }

    /// Path of a message file, only if it names a file directly in the directory
    fn resolve(&self, file_name: &str) -> Result<PathBuf> {
        let relative = Path::new(file_name);
        let path = self.directory().join(relative);

        let plain_name = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
            && relative.components().count() == 1;

        if !plain_name || !path.is_file() {
            warn!("File not found: {}", path.display());
            return Err(ReaderError::NotFound(path));
        }
        Ok(path)
    }
}
