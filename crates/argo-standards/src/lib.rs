//! Reference data, technical parameter tables, and validation policy for Argo
//! technical files.
//!
//! The validator consumes these through the [`ReferenceData`] and
//! [`TechParamSpec`] traits, so any of them can be replaced by another source.
//!
//! # Example
//!
//! ```
//! use argo_standards::{ReferenceData, ReferenceTables, TechParamSpec, TechParamTable};
//!
//! let reference = ReferenceTables::argo_default();
//! assert!(reference.all_dac_codes().contains("IF"));
//!
//! let table = TechParamTable::builder()
//!     .active_names(["NUMBER_<short_sensor_name>Resets"])
//!     .active_units(["COUNT"])
//!     .build()?;
//! assert!(table.resolve_param("NUMBER_CTDResets").is_some());
//! # Ok::<(), argo_standards::StandardsError>(())
//! ```

pub mod error;
pub mod policy;
pub mod reference;
pub mod tech_params;
pub mod traits;

pub use error::{Result, StandardsError};
pub use policy::{EscalationPolicy, ValidationPolicy};
pub use reference::ReferenceTables;
pub use tech_params::{NamePattern, TechParamTable, TechParamTableBuilder, ValueRule};
pub use traits::{ReferenceData, TechParamSpec};
