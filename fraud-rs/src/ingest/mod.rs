//! Email file ingestion
//!
//! Turns an uploaded or on-disk `.txt` / `.eml` file into the raw text the
//! engine scores. Plain text is read as UTF-8 with a Latin-1 fallback; MIME
//! messages contribute every `text/plain` part.

use mail_parser::{MessageParser, MimeHeaders, PartType};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{FraudError, Result};

/// Supported input formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Eml,
}

impl FileKind {
    /// Detect the kind from a file name (case-insensitive extension)
    pub fn from_name(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("txt") => Ok(FileKind::Text),
            Some("eml") => Ok(FileKind::Eml),
            _ => {
                warn!(file_name, "Rejected unsupported file type");
                Err(FraudError::UnsupportedFileType(file_name.to_string()))
            }
        }
    }
}

/// Read a `.txt` or `.eml` file from disk
pub fn read_email_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let name = path.to_string_lossy();
    let kind = FileKind::from_name(&name)?;
    let bytes = std::fs::read(path)?;
    extract(kind, &name, &bytes)
}

/// Extract text from uploaded bytes; `file_name` selects the format
pub fn read_email_bytes(file_name: &str, bytes: &[u8]) -> Result<String> {
    let kind = FileKind::from_name(file_name)?;
    extract(kind, file_name, bytes)
}

fn extract(kind: FileKind, name: &str, bytes: &[u8]) -> Result<String> {
    let text = match kind {
        FileKind::Text => decode_text(bytes),
        FileKind::Eml => plain_text_parts(name, bytes)?,
    };
    debug!(file = name, ?kind, chars = text.len(), "Extracted email text");
    Ok(text)
}

fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        // every byte is a valid Latin-1 code point
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn plain_text_parts(name: &str, bytes: &[u8]) -> Result<String> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(FraudError::MalformedEmail(format!("{} is empty", name)));
    }

    let message = MessageParser::default()
        .parse(bytes)
        .ok_or_else(|| FraudError::MalformedEmail(format!("{} could not be parsed", name)))?;

    let parts: Vec<&str> = message
        .parts
        .iter()
        .filter_map(|part| match &part.body {
            PartType::Text(text) if is_text_plain(part.content_type()) => Some(&**text),
            _ => None,
        })
        .collect();

    Ok(parts.join("\n").trim().to_string())
}

/// A part without a Content-Type header defaults to `text/plain`
fn is_text_plain(content_type: Option<&mail_parser::ContentType>) -> bool {
    match content_type {
        Some(ct) => {
            ct.ctype().eq_ignore_ascii_case("text")
                && ct.subtype().map_or(true, |s| s.eq_ignore_ascii_case("plain"))
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MULTIPART: &str = "From: Alerts <alerts@example.com>\r\n\
To: you@example.com\r\n\
Subject: Account notice\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/alternative; boundary=\"XYZ\"\r\n\
\r\n\
--XYZ\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
Your account has been restricted.\r\n\
--XYZ\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
<p>HTML only</p>\r\n\
--XYZ\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
Please verify your identity.\r\n\
--XYZ--\r\n";

    #[test]
    fn test_file_kind() {
        assert_eq!(FileKind::from_name("mail.txt").unwrap(), FileKind::Text);
        assert_eq!(FileKind::from_name("MAIL.EML").unwrap(), FileKind::Eml);
        assert!(matches!(
            FileKind::from_name("mail.pdf"),
            Err(FraudError::UnsupportedFileType(_))
        ));
        assert!(FileKind::from_name("txt").is_err());
    }

    #[test]
    fn test_txt_utf8() {
        let text = read_email_bytes("a.txt", "Café meeting at noon".as_bytes()).unwrap();
        assert_eq!(text, "Café meeting at noon");
    }

    #[test]
    fn test_txt_latin1_fallback() {
        let text = read_email_bytes("a.txt", b"Caf\xe9 meeting").unwrap();
        assert_eq!(text, "Café meeting");
    }

    #[test]
    fn test_eml_joins_plain_parts() {
        let text = read_email_bytes("notice.eml", MULTIPART.as_bytes()).unwrap();
        assert!(text.contains("Your account has been restricted."));
        assert!(text.contains("Please verify your identity."));
        assert!(!text.contains("HTML only"));
    }

    #[test]
    fn test_eml_single_part() {
        let raw = "From: a@example.com\r\nSubject: Hi\r\n\r\nSee you at the meeting.\r\n";
        let text = read_email_bytes("hi.eml", raw.as_bytes()).unwrap();
        assert_eq!(text, "See you at the meeting.");
    }

    #[test]
    fn test_eml_empty_is_malformed() {
        assert!(matches!(
            read_email_bytes("empty.eml", b""),
            Err(FraudError::MalformedEmail(_))
        ));
    }

    #[test]
    fn test_read_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Sample.TXT");
        fs::write(&path, "hello there").unwrap();
        assert_eq!(read_email_file(&path).unwrap(), "hello there");

        let missing = dir.path().join("missing.eml");
        assert!(matches!(read_email_file(&missing), Err(FraudError::Io(_))));
    }
}
