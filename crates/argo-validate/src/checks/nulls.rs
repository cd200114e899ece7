//! Embedded NUL character scan over every text field.
//!
//! Fixed-width character fields are padded with trailing NULs, which is fine.
//! A NUL followed by any other character means the content itself is broken.

use argo_model::{FieldAccessor, FieldError, Issue, ValidationReport};
use tracing::debug;

use crate::error::Result;

/// True when a NUL is followed by a non-NUL character.
pub fn has_embedded_nul(value: &str) -> bool {
    value
        .find('\0')
        .is_some_and(|start| value[start..].chars().any(|c| c != '\0'))
}

pub fn check(record: &dyn FieldAccessor, report: &mut ValidationReport) -> Result<()> {
    let names = record.text_field_names();
    let mut flagged = 0usize;

    for name in &names {
        match record.read_text(name) {
            Ok(value) => {
                if has_embedded_nul(&value) {
                    flagged += 1;
                    report.error(Issue::EmbeddedNul {
                        field: name.clone(),
                        element: None,
                    });
                }
            }
            Err(FieldError::WrongShape { .. }) => {
                for (index, value) in record.read_text_array(name)?.iter().enumerate() {
                    if has_embedded_nul(value) {
                        flagged += 1;
                        report.error(Issue::EmbeddedNul {
                            field: name.clone(),
                            element: Some(index + 1),
                        });
                    }
                }
            }
            Err(err) => return Err(err.into()),
        }
    }

    debug!(fields = names.len(), flagged, "null scan done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_padding_is_not_embedded() {
        assert!(!has_embedded_nul("CTD"));
        assert!(!has_embedded_nul("CTD\0\0\0"));
        assert!(!has_embedded_nul(""));
        assert!(has_embedded_nul("CT\0D"));
        assert!(has_embedded_nul("\0\0X\0"));
    }
}
