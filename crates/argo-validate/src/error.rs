//! Error types for validation runs.

use argo_model::FieldError;
use thiserror::Error;

/// A validation run could not complete.
///
/// Diagnostics about the record's content are never errors; they go into the
/// report. This type covers failures to read the record at all.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidateError {
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Validation precondition failures.
///
/// A refused record is not examined and produces no diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Refusal {
    #[error("record has not passed format verification")]
    NotVerified,
    #[error("unknown DAC name: '{name}'")]
    UnknownDac { name: String },
}

/// Result type for validation runs.
pub type Result<T> = std::result::Result<T, ValidateError>;
