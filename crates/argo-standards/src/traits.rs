//! Provider interfaces consulted by the validator.
//!
//! The validator depends only on these traits, so reference data and parameter
//! tables can come from any source (built-in tables, a loaded table release, or a
//! test double).

use std::collections::BTreeSet;

use argo_model::{Dac, TemplateMatch};
use chrono::{DateTime, Utc};

/// Controlled vocabularies and constants from the reference tables.
pub trait ReferenceData {
    /// Resolve a DAC name to its enumerated constant.
    fn resolve_dac(&self, name: &str) -> Option<Dac> {
        name.parse().ok()
    }

    /// `DATA_CENTRE` codes registered for a DAC.
    fn dac_codes(&self, dac: Dac) -> BTreeSet<&str>;

    /// Union of the codes of every DAC.
    fn all_dac_codes(&self) -> BTreeSet<&str> {
        Dac::ALL
            .into_iter()
            .flat_map(|dac| self.dac_codes(dac))
            .collect()
    }

    /// Earliest date a file timestamp may carry.
    fn earliest_date(&self) -> DateTime<Utc>;

    /// Whether a value belongs to the short sensor name vocabulary.
    fn is_short_sensor_name(&self, value: &str) -> bool;
}

/// Technical parameter name and unit table.
pub trait TechParamSpec {
    /// Match a bare parameter name (no unit suffix).
    ///
    /// `None` means the name is neither active, deprecated, nor covered by a
    /// template.
    fn resolve_param(&self, name: &str) -> Option<TemplateMatch>;

    fn is_active_unit(&self, unit: &str) -> bool;

    fn is_deprecated_unit(&self, unit: &str) -> bool;
}
