//! Claim documents and text reading
//!
//! Formats are detected from magic bytes, never from the filename: an
//! uploaded `claim.txt` that starts with `%PDF` is a PDF.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::IntakeError;

/// Default character budget for text handed to an extractor
pub const DEFAULT_MAX_TEXT_CHARS: usize = 15_000;

const UTF8_BOM: &str = "\u{feff}";

/// An uploaded claim document held in memory
#[derive(Debug, Clone)]
pub struct Document {
    filename: String,
    bytes: Vec<u8>,
}

impl Document {
    /// Creates a document from its filename hint and contents
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Filename hint supplied by the uploader
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Raw contents
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the document has no contents
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Detected format of the contents
    pub fn format(&self) -> DocumentFormat {
        detect_format(&self.bytes)
    }
}

/// Broad document categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Image,
    Archive,
    Binary,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain_text",
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Archive => "archive",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detects the document format from its leading bytes
pub fn detect_format(bytes: &[u8]) -> DocumentFormat {
    match bytes {
        [0x25, 0x50, 0x44, 0x46, ..] => DocumentFormat::Pdf,
        [0x89, 0x50, 0x4E, 0x47, ..] => DocumentFormat::Image,
        [0xFF, 0xD8, 0xFF, ..] => DocumentFormat::Image,
        [0x47, 0x49, 0x46, 0x38, ..] => DocumentFormat::Image,
        [0x49, 0x49, 0x2A, 0x00, ..] | [0x4D, 0x4D, 0x00, 0x2A, ..] => DocumentFormat::Image,
        // ZIP container, which also covers .docx and .xlsx
        [0x50, 0x4B, 0x03, 0x04, ..] => DocumentFormat::Archive,
        _ if bytes.contains(&0) => DocumentFormat::Binary,
        _ if std::str::from_utf8(bytes).is_err() => DocumentFormat::Binary,
        _ => DocumentFormat::PlainText,
    }
}

/// Turns a document into raw text
pub trait DocumentReader: Send + Sync {
    /// Reads the document's text
    ///
    /// # Errors
    ///
    /// Returns `IntakeError` if the document is empty or in a format the
    /// reader cannot handle.
    fn read_text(&self, document: &Document) -> Result<String, IntakeError>;
}

/// Reader for UTF-8 plain-text documents
///
/// Strips a byte-order mark, normalises line endings to `\n`, and truncates
/// the text to a character budget on a character boundary.
#[derive(Debug, Clone)]
pub struct PlainTextReader {
    max_chars: usize,
}

impl Default for PlainTextReader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_CHARS)
    }
}

impl PlainTextReader {
    /// Creates a reader with the given character budget
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl DocumentReader for PlainTextReader {
    fn read_text(&self, document: &Document) -> Result<String, IntakeError> {
        if document.is_empty() {
            return Err(IntakeError::EmptyDocument(document.filename().to_string()));
        }

        let format = document.format();
        if format != DocumentFormat::PlainText {
            return Err(IntakeError::UnsupportedFormat {
                filename: document.filename().to_string(),
                format,
            });
        }

        let raw = String::from_utf8_lossy(document.bytes());
        let mut text = raw
            .strip_prefix(UTF8_BOM)
            .unwrap_or(&*raw)
            .replace("\r\n", "\n")
            .replace('\r', "\n");

        if text.trim().is_empty() {
            return Err(IntakeError::EmptyDocument(document.filename().to_string()));
        }

        if let Some((cut, _)) = text.char_indices().nth(self.max_chars) {
            text.truncate(cut);
        }

        Ok(text)
    }
}
