//! Validation policy.
//!
//! Controls the optional value check and which transitional rules have been
//! escalated from pending warnings to errors. Loadable from TOML:
//!
//! ```toml
//! check_technical_values = false
//!
//! [escalation]
//! invalid_param_name = "pending"
//! invalid_template_value = "enforced"
//! invalid_short_sensor_name = "pending"
//! ```

use std::path::Path;

use argo_model::Escalation;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StandardsError};

/// Escalation state of each transitional rule category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EscalationPolicy {
    pub invalid_param_name: Escalation,
    pub invalid_template_value: Escalation,
    pub invalid_short_sensor_name: Escalation,
}

impl EscalationPolicy {
    /// Every transitional rule reported as an error.
    pub fn all_enforced() -> Self {
        Self {
            invalid_param_name: Escalation::Enforced,
            invalid_template_value: Escalation::Enforced,
            invalid_short_sensor_name: Escalation::Enforced,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationPolicy {
    /// Read `TECHNICAL_PARAMETER_VALUE` and pass it to the value check.
    pub check_technical_values: bool,
    pub escalation: EscalationPolicy,
}

impl ValidationPolicy {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        parse(contents, "<string>")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        parse(&contents, &path.display().to_string())
    }
}

fn parse(contents: &str, origin: &str) -> Result<ValidationPolicy> {
    toml::from_str(contents).map_err(|source| StandardsError::PolicyParse {
        origin: origin.to_string(),
        source,
    })
}
