//! Validation issue types.
//!
//! The Issue enum provides type-safe diagnostic creation where each variant
//! carries only its needed data. Severity is decided by the check that raises
//! the issue, not by the issue itself, because transitional rules move between
//! warning and error under policy control.

use serde::{Deserialize, Serialize};

/// Text appended to a warning whose rule is scheduled to become an error.
pub const ESCALATION_MARKER: &str = " *** WILL BECOME AN ERROR ***";

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Policy violation that should block acceptance
    Error,
    /// Advisory, non-blocking
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Escalation state of a transitional rule category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Escalation {
    /// Reported as a warning carrying [`ESCALATION_MARKER`].
    #[default]
    Pending,
    /// Reported as an error.
    Enforced,
}

/// Which timestamp field a date issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateField {
    Creation,
    Update,
}

impl DateField {
    /// Record field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creation => "DATE_CREATION",
            Self::Update => "DATE_UPDATE",
        }
    }
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Identity checks
    /// Platform number matches neither WMO numbering scheme
    InvalidPlatformNumber { value: String },
    /// Data centre code not registered for the requested DAC
    DataCentreNotInDac { code: String, dac: String },
    /// Data centre code not registered for any DAC
    UnknownDataCentre { code: String },

    // Date checks
    /// Timestamp field is blank
    DateNotSet { field: DateField },
    /// Timestamp field cannot be parsed
    InvalidDate { field: DateField, value: String },
    /// Timestamp precedes the program's earliest valid date
    DateBeforeEarliest {
        field: DateField,
        value: String,
        earliest: String,
    },
    /// Timestamp is later than the file's modification time (plus tolerance)
    DateAfterFileTime {
        field: DateField,
        value: String,
        file_time: String,
    },
    /// DATE_UPDATE precedes DATE_CREATION
    UpdateBeforeCreation { value: String, creation: String },

    // Technical parameter checks (row is 1-based)
    /// Identifier cannot be split into parameter name and unit
    MalformedParamName { row: usize, name: String },
    /// Parameter name is not active, deprecated, or covered by a template
    InvalidParamName { row: usize, param: String },
    /// Parameter name is deprecated
    DeprecatedParamName { row: usize, param: String },
    /// A template matched but its captured value failed the template rule
    InvalidTemplateValue {
        row: usize,
        template: String,
        value: String,
        param: String,
    },
    /// Captured short sensor name is not in the vocabulary
    InvalidShortSensorName {
        row: usize,
        value: String,
        param: String,
    },
    /// Unit is deprecated but still accepted
    DeprecatedUnit {
        row: usize,
        unit: String,
        name: String,
    },
    /// Unit is neither active nor deprecated
    InvalidUnit {
        row: usize,
        unit: String,
        name: String,
    },

    // String checks
    /// Text field holds a NUL followed by further characters
    EmbeddedNul { field: String, element: Option<usize> },
}

const TECH_PARAM_NAME: &str = "TECHNICAL_PARAMETER_NAME";

impl Issue {
    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::InvalidPlatformNumber { value } => {
                format!("PLATFORM_NUMBER: '{value}': Invalid")
            }
            Issue::DataCentreNotInDac { code, dac } => {
                format!("DATA_CENTRE: '{code}': Invalid for DAC {dac}")
            }
            Issue::UnknownDataCentre { code } => {
                format!("DATA_CENTRE: '{code}': Invalid (for all DACs)")
            }

            Issue::DateNotSet { field } => format!("{}: Not set", field.as_str()),
            Issue::InvalidDate { field, value } => {
                format!("{}: '{value}': Invalid date", field.as_str())
            }
            Issue::DateBeforeEarliest {
                field,
                value,
                earliest,
            } => format!(
                "{}: '{value}': Before allowed date ('{earliest}')",
                field.as_str()
            ),
            Issue::DateAfterFileTime {
                field,
                value,
                file_time,
            } => format!(
                "{}: '{value}': After system file time ('{file_time}')",
                field.as_str()
            ),
            Issue::UpdateBeforeCreation { value, creation } => {
                format!("DATE_UPDATE: '{value}': Before DATE_CREATION ('{creation}')")
            }

            Issue::MalformedParamName { row, name } => {
                format!("{TECH_PARAM_NAME}[{row}]: Incorrectly formed name '{name}'")
            }
            Issue::InvalidParamName { row, param } => {
                format!("{TECH_PARAM_NAME}[{row}]: Invalid name '{param}'")
            }
            Issue::DeprecatedParamName { row, param } => {
                format!("{TECH_PARAM_NAME}[{row}]: Deprecated name '{param}'")
            }
            Issue::InvalidTemplateValue {
                row,
                template,
                value,
                param,
            } => format!(
                "{TECH_PARAM_NAME}[{row}]: Invalid template/value '{template}'/'{value}' in '{param}'"
            ),
            Issue::InvalidShortSensorName { row, value, param } => format!(
                "{TECH_PARAM_NAME}[{row}]: Invalid short_sensor_name '{value}' in '{param}'"
            ),
            Issue::DeprecatedUnit { row, unit, name } => {
                format!("{TECH_PARAM_NAME}[{row}]: Deprecated unit '{unit}' in '{name}'")
            }
            Issue::InvalidUnit { row, unit, name } => {
                format!("{TECH_PARAM_NAME}[{row}]: Invalid unit '{unit}' in '{name}'")
            }

            Issue::EmbeddedNul { field, element } => match element {
                Some(n) => format!("{field}[{n}]: Contains embedded NUL characters"),
                None => format!("{field}: Contains embedded NUL characters"),
            },
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
