//! Validation check modules.
//!
//! Each module performs one check and appends to the shared report. Field read
//! failures propagate and abort the run.

pub mod dates;
pub mod identity;
pub mod nulls;
pub mod tech_params;

use argo_model::{Dac, FieldAccessor, ValidationReport};
use argo_standards::{ReferenceData, TechParamSpec, ValidationPolicy};

use crate::error::Result;

/// Inputs shared by every check in one run.
pub(crate) struct CheckContext<'a, R: ?Sized, P: ?Sized> {
    pub reference: &'a R,
    pub params: &'a P,
    pub policy: &'a ValidationPolicy,
    pub dac: Option<Dac>,
    pub check_nulls: bool,
}

/// Run all checks in reporting order.
pub(crate) fn run_all<R, P>(
    record: &dyn FieldAccessor,
    ctx: &CheckContext<'_, R, P>,
) -> Result<ValidationReport>
where
    R: ReferenceData + ?Sized,
    P: TechParamSpec + ?Sized,
{
    let mut report = ValidationReport::new();

    // 1. Embedded NULs in any text field
    if ctx.check_nulls {
        nulls::check(record, &mut report)?;
    }

    // 2. Platform number and data centre
    identity::check(record, ctx.reference, ctx.dac, &mut report)?;

    // 3. Creation/update dates
    dates::check(record, ctx.reference, &mut report)?;

    // 4. Technical parameter names and units
    tech_params::check(record, ctx.reference, ctx.params, ctx.policy, &mut report)?;

    Ok(report)
}
