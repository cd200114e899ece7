//! `DATE_CREATION` / `DATE_UPDATE` consistency.
//!
//! Both timestamps use `YYYYMMDDHHMISS` in UTC. They are checked against the
//! program's earliest valid date, the file's modification time, and each other.

use argo_model::{DateField, FieldAccessor, Issue, ValidationReport, fields, trim_field};
use argo_standards::ReferenceData;
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use tracing::{debug, trace};

use crate::error::Result;

/// Timestamp layout of the date fields.
pub const DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Allowance for dates ahead of the file's modification time (24 hours).
const FILE_TIME_TOLERANCE_MS: i64 = 86_400_000;

/// Parse a `YYYYMMDDHHMISS` timestamp.
///
/// Anything other than exactly fourteen ASCII digits forming a real date and
/// time is rejected.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if value.len() != 14 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub fn check<R>(
    record: &dyn FieldAccessor,
    reference: &R,
    report: &mut ValidationReport,
) -> Result<()>
where
    R: ReferenceData + ?Sized,
{
    let creation = record.read_text(fields::DATE_CREATION)?;
    let update = record.read_text(fields::DATE_UPDATE)?;
    let file_time = record.last_modified()?;
    let latest = file_time + TimeDelta::milliseconds(FILE_TIME_TOLERANCE_MS);
    let file_time_text = format_timestamp(&file_time);

    // DATE_CREATION
    let creation = trim_field(&creation);
    let creation_date = parse_field(DateField::Creation, creation, report);
    if let Some(date) = creation_date {
        let earliest = reference.earliest_date();
        if date < earliest {
            report.error(Issue::DateBeforeEarliest {
                field: DateField::Creation,
                value: creation.to_string(),
                earliest: format_timestamp(&earliest),
            });
        }
        if date > latest {
            report.error(Issue::DateAfterFileTime {
                field: DateField::Creation,
                value: creation.to_string(),
                file_time: file_time_text.clone(),
            });
        }
    }

    // DATE_UPDATE
    let update = trim_field(&update);
    if let Some(date) = parse_field(DateField::Update, update, report) {
        if let Some(created) = creation_date
            && date < created
        {
            report.error(Issue::UpdateBeforeCreation {
                value: update.to_string(),
                creation: creation.to_string(),
            });
        }
        if date > latest {
            report.error(Issue::DateAfterFileTime {
                field: DateField::Update,
                value: update.to_string(),
                file_time: file_time_text,
            });
        }
    }

    debug!(creation, update, file_time = %file_time, "date check done");
    Ok(())
}

/// Report a blank or unparseable value; return the parsed date otherwise.
fn parse_field(
    field: DateField,
    value: &str,
    report: &mut ValidationReport,
) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        trace!(field = field.as_str(), "date not set");
        report.error(Issue::DateNotSet { field });
        return None;
    }
    let parsed = parse_timestamp(value);
    if parsed.is_none() {
        report.error(Issue::InvalidDate {
            field,
            value: value.to_string(),
        });
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_fourteen_digit_timestamps() {
        assert_eq!(
            parse_timestamp("20050102030405"),
            Some(Utc.with_ymd_and_hms(2005, 1, 2, 3, 4, 5).unwrap())
        );
    }

    #[test]
    fn rejects_malformed_timestamps() {
        for value in [
            "2005010203040",
            "200501020304050",
            "20051301000000",
            "20050230000000",
            "2005-01-02T03:0",
            "+2005010203040",
            "abcdefghijklmn",
        ] {
            assert_eq!(parse_timestamp(value), None, "{value}");
        }
    }

    #[test]
    fn formats_back_to_field_layout() {
        let date = Utc.with_ymd_and_hms(1997, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&date), "19970101000000");
    }
}
