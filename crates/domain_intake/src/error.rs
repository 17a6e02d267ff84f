//! Intake domain errors

use thiserror::Error;

use crate::document::DocumentFormat;

/// Errors that can occur while ingesting a claim document
///
/// Extraction never fails (it degrades to an empty record) and triage never
/// fails, so every error here comes from reading the document itself.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Document is empty: {0}")]
    EmptyDocument(String),

    #[error("Unsupported document format {format} for {filename}")]
    UnsupportedFormat {
        filename: String,
        format: DocumentFormat,
    },

    #[error("Document too large: {size} bytes exceeds limit of {max} bytes")]
    DocumentTooLarge { size: usize, max: usize },
}
