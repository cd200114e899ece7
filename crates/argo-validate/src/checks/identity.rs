//! Metadata identity: platform number and data centre code.

use std::sync::LazyLock;

use argo_model::{Dac, FieldAccessor, Issue, ValidationReport, fields, trim_field};
use argo_standards::ReferenceData;
use regex::Regex;
use tracing::debug;

use crate::error::Result;

/// WMO platform numbers: five digits, or seven digits with a 9 in second place.
static PLATFORM_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[1-9][0-9]{4}|[1-9]9[0-9]{5})$").expect("Invalid platform number regex")
});

pub fn is_valid_platform_number(value: &str) -> bool {
    PLATFORM_NUMBER_REGEX.is_match(value)
}

/// Check `PLATFORM_NUMBER` and `DATA_CENTRE`.
///
/// With a DAC the data centre must belong to it; without one, to any DAC.
pub fn check<R>(
    record: &dyn FieldAccessor,
    reference: &R,
    dac: Option<Dac>,
    report: &mut ValidationReport,
) -> Result<()>
where
    R: ReferenceData + ?Sized,
{
    let platform = record.read_text(fields::PLATFORM_NUMBER)?;
    let platform = trim_field(&platform);
    if !is_valid_platform_number(platform) {
        report.error(Issue::InvalidPlatformNumber {
            value: platform.to_string(),
        });
    }

    let centre = record.read_text(fields::DATA_CENTRE)?;
    let centre = trim_field(&centre);
    match dac {
        Some(dac) => {
            if !reference.dac_codes(dac).contains(centre) {
                report.error(Issue::DataCentreNotInDac {
                    code: centre.to_string(),
                    dac: dac.to_string(),
                });
            }
        }
        None => {
            if !reference.all_dac_codes().contains(centre) {
                report.error(Issue::UnknownDataCentre {
                    code: centre.to_string(),
                });
            }
        }
    }

    debug!(platform, centre, ?dac, "identity check done");
    Ok(())
}
