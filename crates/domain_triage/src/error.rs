//! Triage domain errors

use thiserror::Error;

/// Errors that can occur while loading or validating a triage rule table
///
/// Evaluating a claim never fails; only building the policy table can.
#[derive(Debug, Error)]
pub enum RulesError {
    /// Failed to parse rules JSON
    #[error("Failed to parse rules: {0}")]
    ParseError(String),

    /// Rules file could not be read
    #[error("Rules file not found: {0}")]
    FileNotFound(String),

    /// A keyword list contains an empty entry, which would match every claim
    #[error("Empty keyword in {0} keyword list")]
    EmptyKeyword(&'static str),

    /// The same mandatory field is listed more than once
    #[error("Duplicate mandatory field: {0}")]
    DuplicateMandatoryField(String),

    /// Fast-track threshold is negative
    #[error("Invalid fast-track threshold: {0}")]
    InvalidThreshold(String),
}
