//! Result of resolving a bare parameter name against the technical parameter table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Template name whose captured values must come from the short sensor name
/// vocabulary.
pub const SHORT_SENSOR_NAME_TEMPLATE: &str = "short_sensor_name";

/// How a parameter name matched the table.
///
/// A name that matches nothing at all is represented by `None` at the provider
/// boundary, not by an empty `TemplateMatch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMatch {
    pub is_active: bool,
    pub is_deprecated: bool,
    /// Template -> captured value, where the value failed the template's rule.
    pub failed_templates: BTreeMap<String, String>,
    /// Template -> captured value, for templates without a per-value rule.
    pub unmatched_templates: BTreeMap<String, String>,
}

impl TemplateMatch {
    /// Exact match on an active name.
    pub fn active() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    /// Exact match on a deprecated name.
    pub fn deprecated() -> Self {
        Self {
            is_deprecated: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_failed(mut self, template: impl Into<String>, value: impl Into<String>) -> Self {
        self.failed_templates.insert(template.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_unmatched(mut self, template: impl Into<String>, value: impl Into<String>) -> Self {
        self.unmatched_templates
            .insert(template.into(), value.into());
        self
    }
}
