//! MIME decoding of raw message files into `MessageRecord`

use crate::error::{ReaderError, Result};
use crate::types::{Headers, MessageRecord};
use chrono::{DateTime, Utc};
use mailparse::{DispositionType, MailHeader, ParsedMail};
use tracing::debug;

/// Parse raw message bytes into the structured fields the pipeline consumes
pub fn parse_message(raw: &[u8]) -> Result<MessageRecord> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ReaderError::ParseFailure(e.to_string()))?;

    let headers = Headers::new(parsed.headers.iter().map(|h| (h.get_key(), h.get_value())));
    let (plain_body, html_body) = extract_body_parts(&parsed);

    let record = MessageRecord {
        subject: header_value(&parsed.headers, "subject"),
        from: header_value(&parsed.headers, "from"),
        to: header_value(&parsed.headers, "to"),
        cc: header_value(&parsed.headers, "cc"),
        date: extract_date(&parsed.headers),
        plain_body,
        html_body,
        headers,
    };

    debug!(
        "Parsed message: subject {:?}, plain {}, html {}",
        record.subject,
        record.plain_body.is_some(),
        record.html_body.is_some()
    );

    Ok(record)
}

fn header_value(headers: &[MailHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case(name))
        .map(MailHeader::get_value)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn extract_date(headers: &[MailHeader]) -> Option<DateTime<Utc>> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case("date"))
        .and_then(|h| DateTime::parse_from_rfc2822(h.get_value().trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn extract_body_parts(parsed: &ParsedMail) -> (Option<String>, Option<String>) {
    let mut text = None;
    let mut html = None;

    if parsed.subparts.is_empty() {
        if let Ok(body) = parsed.get_body() {
            if parsed.ctype.mimetype.eq_ignore_ascii_case("text/html") {
                html = Some(body);
            } else {
                text = Some(body);
            }
        }
    } else {
        extract_body_recursive(parsed, &mut text, &mut html);
    }

    (text, html)
}

fn extract_body_recursive(parsed: &ParsedMail, text: &mut Option<String>, html: &mut Option<String>) {
    for part in &parsed.subparts {
        if !part.subparts.is_empty() {
            extract_body_recursive(part, text, html);
            continue;
        }

        if part.get_content_disposition().disposition == DispositionType::Attachment {
            continue;
        }

        let content_type = part.ctype.mimetype.to_lowercase();
        if let Ok(body) = part.get_body() {
            if content_type == "text/plain" && text.is_none() {
                *text = Some(body);
            } else if content_type == "text/html" && html.is_none() {
                *html = Some(body);
            }
        }
    }
}
