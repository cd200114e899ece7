//! Data model for Argo technical file validation.
//!
//! - [`issue`]: typed diagnostics and their messages
//! - [`report`]: the per-run diagnostic sink
//! - [`identifier`]: `<param>_<unit>` decomposition
//! - [`template`]: parameter table match results
//! - [`record`]: field access to an open record
//! - [`dac`]: Data Assembly Centers

pub mod dac;
pub mod error;
pub mod identifier;
pub mod issue;
pub mod record;
pub mod report;
pub mod template;

pub use dac::Dac;
pub use error::{FieldError, Result};
pub use identifier::{MalformedIdentifier, ParamIdentifier};
pub use issue::{DateField, ESCALATION_MARKER, Escalation, Issue, Severity};
pub use record::{FieldAccessor, MemoryRecord, fields, trim_field};
pub use report::{Finding, ValidationReport};
pub use template::{SHORT_SENSOR_NAME_TEMPLATE, TemplateMatch};
