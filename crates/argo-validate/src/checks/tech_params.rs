//! Technical parameter name and unit validation.
//!
//! Each `TECHNICAL_PARAMETER_NAME` row is an identifier `<param>_<unit>`. The
//! same names and units recur across many rows, so both halves are memoized for
//! the duration of one run: a distinct name or unit produces its diagnostics
//! once, on the first row it appears in.

use std::collections::{BTreeMap, BTreeSet};

use argo_model::{
    FieldAccessor, Issue, MalformedIdentifier, ParamIdentifier, SHORT_SENSOR_NAME_TEMPLATE,
    ValidationReport, fields,
};
use argo_standards::{ReferenceData, TechParamSpec, ValidationPolicy};
use tracing::{debug, trace};

use crate::error::Result;

/// Per-run memo state.
#[derive(Debug, Default)]
struct ParamMemo {
    /// Malformed identifiers already reported.
    malformed: BTreeSet<String>,
    /// Bare parameter names already checked.
    checked_params: BTreeSet<String>,
    /// Unit token -> validity.
    unit_validity: BTreeMap<String, bool>,
}

pub fn check<R, P>(
    record: &dyn FieldAccessor,
    reference: &R,
    params: &P,
    policy: &ValidationPolicy,
    report: &mut ValidationReport,
) -> Result<()>
where
    R: ReferenceData + ?Sized,
    P: TechParamSpec + ?Sized,
{
    let n_rows = record.dimension(fields::N_TECH_PARAM)?;
    let names = record.read_text_array(fields::TECHNICAL_PARAMETER_NAME)?;
    let values = if policy.check_technical_values {
        Some(record.read_text_array(fields::TECHNICAL_PARAMETER_VALUE)?)
    } else {
        None
    };

    let mut memo = ParamMemo::default();
    for (index, raw) in names.iter().take(n_rows).enumerate() {
        let row = index + 1;
        let id = match ParamIdentifier::parse(raw) {
            Ok(id) => id,
            Err(MalformedIdentifier(full)) => {
                if memo.malformed.insert(full.to_string()) {
                    report.error(Issue::MalformedParamName {
                        row,
                        name: full.to_string(),
                    });
                }
                continue;
            }
        };

        if memo.checked_params.insert(id.param().to_string()) {
            check_param_name(row, id.param(), reference, params, policy, report);
        } else {
            trace!(row, param = id.param(), "parameter name already checked");
        }

        let unit_valid = check_unit(row, &id, params, &mut memo.unit_validity, report);

        if let Some(values) = &values {
            check_value(row, &id, values.get(index).map(String::as_str), unit_valid);
        }
    }

    debug!(
        rows = n_rows.min(names.len()),
        distinct_params = memo.checked_params.len(),
        distinct_units = memo.unit_validity.len(),
        malformed = memo.malformed.len(),
        "technical parameter check done"
    );
    report.set_unit_validity(memo.unit_validity);
    Ok(())
}

/// Resolve a bare name and report what the table says about it.
fn check_param_name<R, P>(
    row: usize,
    param: &str,
    reference: &R,
    params: &P,
    policy: &ValidationPolicy,
    report: &mut ValidationReport,
) where
    R: ReferenceData + ?Sized,
    P: TechParamSpec + ?Sized,
{
    let escalation = &policy.escalation;
    let Some(matched) = params.resolve_param(param) else {
        report.transitional(
            Issue::InvalidParamName {
                row,
                param: param.to_string(),
            },
            escalation.invalid_param_name,
        );
        return;
    };

    if matched.is_deprecated {
        report.warning(Issue::DeprecatedParamName {
            row,
            param: param.to_string(),
        });
    }

    for (template, value) in &matched.failed_templates {
        report.transitional(
            Issue::InvalidTemplateValue {
                row,
                template: template.clone(),
                value: value.clone(),
                param: param.to_string(),
            },
            escalation.invalid_template_value,
        );
    }

    for (template, value) in &matched.unmatched_templates {
        if template == SHORT_SENSOR_NAME_TEMPLATE && !reference.is_short_sensor_name(value) {
            report.transitional(
                Issue::InvalidShortSensorName {
                    row,
                    value: value.clone(),
                    param: param.to_string(),
                },
                escalation.invalid_short_sensor_name,
            );
        }
    }
}

/// Decide unit validity, consulting the table only for units not seen yet.
fn check_unit<P>(
    row: usize,
    id: &ParamIdentifier<'_>,
    params: &P,
    unit_validity: &mut BTreeMap<String, bool>,
    report: &mut ValidationReport,
) -> bool
where
    P: TechParamSpec + ?Sized,
{
    let unit = id.unit();
    if let Some(valid) = unit_validity.get(unit) {
        return *valid;
    }

    let valid = if params.is_active_unit(unit) {
        true
    } else if params.is_deprecated_unit(unit) {
        report.warning(Issue::DeprecatedUnit {
            row,
            unit: unit.to_string(),
            name: id.full().to_string(),
        });
        true
    } else {
        report.error(Issue::InvalidUnit {
            row,
            unit: unit.to_string(),
            name: id.full().to_string(),
        });
        false
    };
    trace!(row, unit, valid, "unit evaluated");
    unit_validity.insert(unit.to_string(), valid);
    valid
}

/// Per-row value check. Values are read and passed through but no value rules
/// exist yet, so nothing is reported.
fn check_value(row: usize, id: &ParamIdentifier<'_>, value: Option<&str>, unit_valid: bool) {
    trace!(row, name = id.full(), value, unit_valid, "technical value accepted");
}
