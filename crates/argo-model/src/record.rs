//! Record field access.
//!
//! Validation never opens files itself. It reads through [`FieldAccessor`], which a
//! format reader implements for an open file. [`MemoryRecord`] is an in-memory
//! implementation for callers that already hold the field values.

use std::collections::BTreeMap;
use std::io;

use chrono::{DateTime, Utc};

use crate::error::{FieldError, Result};

/// Field and dimension names read by the validator.
pub mod fields {
    pub const DATE_CREATION: &str = "DATE_CREATION";
    pub const DATE_UPDATE: &str = "DATE_UPDATE";
    pub const PLATFORM_NUMBER: &str = "PLATFORM_NUMBER";
    pub const DATA_CENTRE: &str = "DATA_CENTRE";
    pub const TECHNICAL_PARAMETER_NAME: &str = "TECHNICAL_PARAMETER_NAME";
    pub const TECHNICAL_PARAMETER_VALUE: &str = "TECHNICAL_PARAMETER_VALUE";
    /// Dimension: number of technical parameter rows.
    pub const N_TECH_PARAM: &str = "N_TECH_PARAM";
}

/// Strip fixed-width padding from a text value.
///
/// Character fields are padded with blanks or NULs, so every character at or
/// below U+0020 is removed from both ends.
///
/// ```
/// use argo_model::trim_field;
///
/// assert_eq!(trim_field(" 1901234\0\0"), "1901234");
/// assert_eq!(trim_field("CT\0D\0"), "CT\0D");
/// ```
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Read access to an open technical record.
pub trait FieldAccessor {
    /// Whether the record passed the independent format-verification step.
    fn is_format_verified(&self) -> bool;

    /// Read a scalar text field.
    fn read_text(&self, name: &str) -> Result<String>;

    /// Read a one-dimensional array of strings.
    fn read_text_array(&self, name: &str) -> Result<Vec<String>>;

    /// Length of a named dimension.
    fn dimension(&self, name: &str) -> Result<usize>;

    /// Last-modification time of the underlying file.
    fn last_modified(&self) -> Result<DateTime<Utc>>;

    /// Names of every text field (scalar or array) in the record.
    fn text_field_names(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TextValue {
    Scalar(String),
    Array(Vec<String>),
}

/// In-memory record.
///
/// # Example
///
/// ```
/// use argo_model::{FieldAccessor, MemoryRecord};
///
/// let record = MemoryRecord::new()
///     .with_text("PLATFORM_NUMBER", "1901234")
///     .with_text_array("TECHNICAL_PARAMETER_NAME", ["CLOCK_Offset_seconds"]);
/// assert_eq!(record.read_text("PLATFORM_NUMBER").unwrap(), "1901234");
/// assert_eq!(record.dimension("N_TECH_PARAM").unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryRecord {
    verified: bool,
    text: BTreeMap<String, TextValue>,
    dimensions: BTreeMap<String, usize>,
    modified: Option<DateTime<Utc>>,
}

impl Default for MemoryRecord {
    fn default() -> Self {
        Self {
            verified: true,
            text: BTreeMap::new(),
            dimensions: BTreeMap::new(),
            modified: None,
        }
    }
}

impl MemoryRecord {
    /// Create an empty record marked as format-verified.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    #[must_use]
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.text
            .insert(name.into(), TextValue::Scalar(value.into()));
        self
    }

    /// Set an array field.
    ///
    /// Setting `TECHNICAL_PARAMETER_NAME` also sets `N_TECH_PARAM` to the array
    /// length unless the dimension was set explicitly.
    #[must_use]
    pub fn with_text_array<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if name == fields::TECHNICAL_PARAMETER_NAME {
            self.dimensions
                .entry(fields::N_TECH_PARAM.to_string())
                .or_insert(values.len());
        }
        self.text.insert(name, TextValue::Array(values));
        self
    }

    #[must_use]
    pub fn with_dimension(mut self, name: impl Into<String>, len: usize) -> Self {
        self.dimensions.insert(name.into(), len);
        self
    }

    #[must_use]
    pub fn with_last_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }
}

impl FieldAccessor for MemoryRecord {
    fn is_format_verified(&self) -> bool {
        self.verified
    }

    fn read_text(&self, name: &str) -> Result<String> {
        match self.text.get(name) {
            Some(TextValue::Scalar(value)) => Ok(value.clone()),
            Some(TextValue::Array(_)) => Err(FieldError::wrong_shape(name, "scalar text field")),
            None => Err(FieldError::missing(name)),
        }
    }

    fn read_text_array(&self, name: &str) -> Result<Vec<String>> {
        match self.text.get(name) {
            Some(TextValue::Array(values)) => Ok(values.clone()),
            Some(TextValue::Scalar(_)) => Err(FieldError::wrong_shape(name, "text array")),
            None => Err(FieldError::missing(name)),
        }
    }

    fn dimension(&self, name: &str) -> Result<usize> {
        self.dimensions
            .get(name)
            .copied()
            .ok_or_else(|| FieldError::missing(name))
    }

    fn last_modified(&self) -> Result<DateTime<Utc>> {
        self.modified.ok_or_else(|| {
            FieldError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "record has no modification time",
            ))
        })
    }

    fn text_field_names(&self) -> Vec<String> {
        self.text.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_mis_shaped_fields_are_errors() {
        let record = MemoryRecord::new()
            .with_text("DATA_CENTRE", "AO")
            .with_text_array("TECHNICAL_PARAMETER_NAME", ["A_b"]);

        assert!(matches!(
            record.read_text("PLATFORM_NUMBER"),
            Err(FieldError::MissingField { .. })
        ));
        assert!(matches!(
            record.read_text("TECHNICAL_PARAMETER_NAME"),
            Err(FieldError::WrongShape { .. })
        ));
        assert!(matches!(
            record.read_text_array("DATA_CENTRE"),
            Err(FieldError::WrongShape { .. })
        ));
        assert!(matches!(record.last_modified(), Err(FieldError::Io(_))));
    }

    #[test]
    fn explicit_dimension_wins_over_array_length() {
        let record = MemoryRecord::new()
            .with_dimension(fields::N_TECH_PARAM, 1)
            .with_text_array(fields::TECHNICAL_PARAMETER_NAME, ["A_b", "C_d"]);
        assert_eq!(record.dimension(fields::N_TECH_PARAM).unwrap(), 1);
    }

    #[test]
    fn text_field_names_are_sorted() {
        let record = MemoryRecord::new()
            .with_text("PLATFORM_NUMBER", "12345")
            .with_text("DATA_CENTRE", "AO");
        assert_eq!(
            record.text_field_names(),
            vec!["DATA_CENTRE".to_string(), "PLATFORM_NUMBER".to_string()]
        );
    }
}
