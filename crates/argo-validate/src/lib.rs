//! Validation of Argo technical file metadata.
//!
//! [`TechFileValidator`] runs four checks over a record exposed through
//! [`FieldAccessor`]:
//!
//! 1. an optional embedded NUL scan over every text field,
//! 2. platform number and data centre identity,
//! 3. creation/update date consistency,
//! 4. technical parameter names and units.
//!
//! Results accumulate in a [`ValidationReport`] created fresh for every call.
//!
//! # Example
//!
//! ```
//! use argo_model::MemoryRecord;
//! use argo_standards::{ReferenceTables, TechParamTable, ValidationPolicy};
//! use argo_validate::TechFileValidator;
//! use chrono::{TimeZone, Utc};
//!
//! let reference = ReferenceTables::argo_default();
//! let params = TechParamTable::builder()
//!     .active_names(["CLOCK_Offset"])
//!     .active_units(["seconds"])
//!     .build()?;
//! let validator = TechFileValidator::new(&reference, &params, ValidationPolicy::default());
//!
//! let record = MemoryRecord::new()
//!     .with_text("PLATFORM_NUMBER", "1901234")
//!     .with_text("DATA_CENTRE", "IF")
//!     .with_text("DATE_CREATION", "20200101000000")
//!     .with_text("DATE_UPDATE", "20200102000000")
//!     .with_text_array("TECHNICAL_PARAMETER_NAME", ["CLOCK_Offset_seconds"])
//!     .with_last_modified(Utc.with_ymd_and_hms(2020, 1, 3, 0, 0, 0).unwrap());
//!
//! let outcome = validator.validate(&record, Some("CORIOLIS"), false)?;
//! assert!(outcome.is_performed());
//! assert!(outcome.report().is_some_and(|report| report.is_clean()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod checks;
mod error;

use std::time::Instant;

use argo_model::{Dac, FieldAccessor, ValidationReport};
use argo_standards::{ReferenceData, TechParamSpec, ValidationPolicy};
use tracing::{info, info_span, warn};

use crate::checks::CheckContext;

pub use error::{Refusal, Result, ValidateError};

/// Result of a validation call that could read the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// All checks ran.
    Completed(ValidationReport),
    /// A precondition failed; nothing was checked.
    Refused(Refusal),
}

impl ValidationOutcome {
    /// Whether validation was performed.
    pub fn is_performed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Refused(_) => None,
        }
    }

    pub fn into_report(self) -> Option<ValidationReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Refused(_) => None,
        }
    }

    pub fn refusal(&self) -> Option<&Refusal> {
        match self {
            Self::Completed(_) => None,
            Self::Refused(refusal) => Some(refusal),
        }
    }
}

/// Technical file validator.
///
/// Holds shared references to its providers and no per-run state, so one
/// validator can check any number of records.
#[derive(Debug)]
pub struct TechFileValidator<'a, R: ?Sized, P: ?Sized> {
    reference: &'a R,
    params: &'a P,
    policy: ValidationPolicy,
}

impl<'a, R, P> TechFileValidator<'a, R, P>
where
    R: ReferenceData + ?Sized,
    P: TechParamSpec + ?Sized,
{
    pub fn new(reference: &'a R, params: &'a P, policy: ValidationPolicy) -> Self {
        Self {
            reference,
            params,
            policy,
        }
    }

    /// Validate one record.
    ///
    /// `organization` names the DAC the file is submitted under. `None` or a
    /// blank name means the data centre may belong to any DAC. `check_nulls`
    /// enables the embedded NUL scan.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError`] when a required field cannot be read. Content
    /// problems are reported in the returned report instead.
    pub fn validate(
        &self,
        record: &dyn FieldAccessor,
        organization: Option<&str>,
        check_nulls: bool,
    ) -> Result<ValidationOutcome> {
        let organization = organization.map(str::trim).filter(|name| !name.is_empty());
        let span = info_span!("validate", organization = organization.unwrap_or("*"));
        let _guard = span.enter();
        let start = Instant::now();

        let dac = match self.preconditions(record, organization) {
            Ok(dac) => dac,
            Err(refusal) => {
                warn!(%refusal, "validation refused");
                return Ok(ValidationOutcome::Refused(refusal));
            }
        };

        let ctx = CheckContext {
            reference: self.reference,
            params: self.params,
            policy: &self.policy,
            dac,
            check_nulls,
        };
        let report = checks::run_all(record, &ctx)?;

        info!(
            errors = report.error_count(),
            warnings = report.warning_count(),
            duration_ms = start.elapsed().as_millis(),
            "validation complete"
        );
        Ok(ValidationOutcome::Completed(report))
    }

    fn preconditions(
        &self,
        record: &dyn FieldAccessor,
        organization: Option<&str>,
    ) -> std::result::Result<Option<Dac>, Refusal> {
        if !record.is_format_verified() {
            return Err(Refusal::NotVerified);
        }
        organization
            .map(|name| {
                self.reference
                    .resolve_dac(name)
                    .ok_or_else(|| Refusal::UnknownDac {
                        name: name.to_string(),
                    })
            })
            .transpose()
    }
}
