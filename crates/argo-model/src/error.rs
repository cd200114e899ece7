//! Field access errors.
//!
//! These describe operational failures reading a record. They are never turned
//! into validation diagnostics: a record that cannot be read cannot be judged.

use thiserror::Error;

/// Failure reading a field from a record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FieldError {
    /// Underlying I/O failure (file read, metadata access).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record has no field or dimension with this name.
    #[error("Field not found: {name}")]
    MissingField {
        /// Field or dimension name.
        name: String,
    },

    /// The field exists but does not have the requested shape.
    #[error("Field '{name}' is not a {expected}")]
    WrongShape {
        /// Field name.
        name: String,
        /// Shape the caller asked for.
        expected: &'static str,
    },
}

impl FieldError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingField { name: name.into() }
    }

    pub fn wrong_shape(name: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongShape {
            name: name.into(),
            expected,
        }
    }
}

/// Result type for field access.
pub type Result<T> = std::result::Result<T, FieldError>;
