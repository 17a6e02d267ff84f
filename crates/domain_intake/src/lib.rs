//! Claim Intake Domain
//!
//! This crate carries a claim document from raw bytes to a routing decision:
//!
//! ```text
//! Document -> DocumentReader -> raw text -> FieldExtractor -> ClaimRecord -> TriageEngine
//! ```
//!
//! Readers and extractors sit behind traits so that other implementations
//! can be plugged in. The shipped reader handles plain text; the shipped
//! extractor reads `Label: value` lines from first-notice-of-loss forms.

pub mod document;
pub mod extractor;
pub mod service;
pub mod error;

pub use document::{detect_format, Document, DocumentFormat, DocumentReader, PlainTextReader};
pub use extractor::{FieldExtractor, LabelFieldExtractor};
pub use service::{IntakeOutcome, IntakeService};
pub use error::IntakeError;
