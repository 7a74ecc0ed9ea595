use mailfiles_reader::parse_message;

#[test]
fn test_parse_simple_message() {
    let raw = b"From: John Doe <john@example.com>\r\n\
                To: recipient@example.com\r\n\
                Cc: copy@example.com\r\n\
                Subject: Test Email\r\n\
                Date: Thu, 02 Jan 2025 12:00:00 +0000\r\n\
                Delivered-To: inbox@example.com\r\n\
                \r\n\
                Hello, this is a test email.";

    let record = parse_message(raw).unwrap();

    assert_eq!(record.subject.as_deref(), Some("Test Email"));
    assert_eq!(record.from.as_deref(), Some("John Doe <john@example.com>"));
    assert_eq!(record.to.as_deref(), Some("recipient@example.com"));
    assert_eq!(record.cc.as_deref(), Some("copy@example.com"));
    assert_eq!(
        record.date.unwrap().to_rfc3339(),
        "2025-01-02T12:00:00+00:00"
    );
    assert!(record.plain_body.unwrap().contains("test email"));
    assert!(record.html_body.is_none());
    assert_eq!(record.headers.get("delivered-to"), Some("inbox@example.com"));
    assert_eq!(record.headers.get("DELIVERED-TO"), Some("inbox@example.com"));
}

#[test]
fn test_parse_missing_headers() {
    let raw = b"X-Custom: 1\r\n\r\nbody only";
    let record = parse_message(raw).unwrap();

    assert!(record.subject.is_none());
    assert!(record.from.is_none());
    assert!(record.date.is_none());
    assert_eq!(record.plain_body.as_deref().map(str::trim), Some("body only"));
}

#[test]
fn test_parse_html_only() {
    let raw = b"From: sender@example.com\r\n\
                Subject: Test\r\n\
                Content-Type: text/html\r\n\
                \r\n\
                <html><body><p>World</p></body></html>";

    let record = parse_message(raw).unwrap();

    assert!(record.plain_body.is_none());
    assert!(record.html_body.unwrap().contains("<p>World</p>"));
}

#[test]
fn test_parse_multipart_alternative() {
    let raw = b"From: sender@example.com\r\n\
                Subject: Both\r\n\
                MIME-Version: 1.0\r\n\
                Content-Type: multipart/alternative; boundary=\"XYZ\"\r\n\
                \r\n\
                --XYZ\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                Plain part\r\n\
                --XYZ\r\n\
                Content-Type: text/html; charset=utf-8\r\n\
                \r\n\
                <p>Html part</p>\r\n\
                --XYZ--\r\n";

    let record = parse_message(raw).unwrap();

    assert!(record.plain_body.unwrap().contains("Plain part"));
    assert!(record.html_body.unwrap().contains("<p>Html part</p>"));
}

#[test]
fn test_parse_skips_text_attachments() {
    let raw = b"From: sender@example.com\r\n\
                Subject: Attachment\r\n\
                MIME-Version: 1.0\r\n\
                Content-Type: multipart/mixed; boundary=\"B\"\r\n\
                \r\n\
                --B\r\n\
                Content-Type: text/plain\r\n\
                Content-Disposition: attachment; filename=\"notes.txt\"\r\n\
                \r\n\
                attached notes\r\n\
                --B\r\n\
                Content-Type: text/plain\r\n\
                \r\n\
                real body\r\n\
                --B--\r\n";

    let record = parse_message(raw).unwrap();

    assert!(record.plain_body.unwrap().contains("real body"));
}
