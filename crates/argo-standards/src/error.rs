//! Error types for building parameter tables and loading policy.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building standards tables or loading policy.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// A parameter name definition has a malformed `<template>` placeholder.
    #[error("Invalid template placeholder in '{definition}': {message}")]
    InvalidTemplatePattern {
        definition: String,
        message: &'static str,
    },

    /// A value rule or compiled name pattern is not a valid regex.
    #[error("Invalid regex for '{subject}': {source}")]
    InvalidRuleRegex {
        subject: String,
        #[source]
        source: regex::Error,
    },

    /// Failed to read a policy file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Policy document is not valid TOML for [`crate::ValidationPolicy`].
    #[error("Failed to parse policy {origin}: {source}")]
    PolicyParse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn regex(subject: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidRuleRegex {
            subject: subject.into(),
            source,
        }
    }

    pub(crate) fn template(definition: impl Into<String>, message: &'static str) -> Self {
        Self::InvalidTemplatePattern {
            definition: definition.into(),
            message,
        }
    }
}

/// Result type for standards operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
