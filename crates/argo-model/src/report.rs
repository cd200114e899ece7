//! Validation report: the diagnostic sink for one validation run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::issue::{ESCALATION_MARKER, Escalation, Issue, Severity};

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub issue: Issue,
    pub severity: Severity,
    /// Warning for a rule that is scheduled to become an error.
    pub pending_escalation: bool,
    /// Rendered message, including the escalation marker when pending.
    pub message: String,
}

impl Finding {
    fn new(issue: Issue, severity: Severity, pending_escalation: bool) -> Self {
        let mut message = issue.message();
        if pending_escalation {
            message.push_str(ESCALATION_MARKER);
        }
        Self {
            issue,
            severity,
            pending_escalation,
            message,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity.label(), self.message)
    }
}

/// Errors and warnings accumulated during one validation run.
///
/// Both sequences are append-only; insertion order is reporting order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
    /// Unit token -> validity, as evaluated during the run.
    unit_validity: BTreeMap<String, bool>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn error(&mut self, issue: Issue) {
        self.errors.push(Finding::new(issue, Severity::Error, false));
    }

    /// Record a warning.
    pub fn warning(&mut self, issue: Issue) {
        self.warnings
            .push(Finding::new(issue, Severity::Warning, false));
    }

    /// Record an issue from a transitional rule category.
    ///
    /// Pending categories produce a marked warning; enforced ones an error.
    pub fn transitional(&mut self, issue: Issue, escalation: Escalation) {
        match escalation {
            Escalation::Pending => {
                self.warnings
                    .push(Finding::new(issue, Severity::Warning, true));
            }
            Escalation::Enforced => self.error(issue),
        }
    }

    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    /// Error messages in reporting order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|f| f.message.clone()).collect()
    }

    /// Warning messages in reporting order.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|f| f.message.clone()).collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when neither errors nor warnings were recorded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Unit validity decided during the run.
    pub fn unit_validity(&self) -> &BTreeMap<String, bool> {
        &self.unit_validity
    }

    /// Store the unit validity memo of a completed technical parameter scan.
    pub fn set_unit_validity(&mut self, units: BTreeMap<String, bool>) {
        self.unit_validity = units;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_name(row: usize) -> Issue {
        Issue::InvalidParamName {
            row,
            param: "FOO".to_string(),
        }
    }

    #[test]
    fn pending_transitional_is_marked_warning() {
        let mut report = ValidationReport::new();
        report.transitional(invalid_name(1), Escalation::Pending);

        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 1);
        let finding = &report.warnings()[0];
        assert!(finding.pending_escalation);
        assert_eq!(
            finding.message,
            "TECHNICAL_PARAMETER_NAME[1]: Invalid name 'FOO' *** WILL BECOME AN ERROR ***"
        );
    }

    #[test]
    fn enforced_transitional_is_plain_error() {
        let mut report = ValidationReport::new();
        report.transitional(invalid_name(2), Escalation::Enforced);

        assert!(report.has_errors());
        assert_eq!(report.warning_count(), 0);
        assert_eq!(
            report.error_messages(),
            vec!["TECHNICAL_PARAMETER_NAME[2]: Invalid name 'FOO'".to_string()]
        );
    }

    #[test]
    fn preserves_insertion_order() {
        let mut report = ValidationReport::new();
        for row in [3, 1, 2] {
            report.error(invalid_name(row));
        }
        let rows: Vec<_> = report
            .errors()
            .iter()
            .map(|f| match f.issue {
                Issue::InvalidParamName { row, .. } => row,
                _ => 0,
            })
            .collect();
        assert_eq!(rows, vec![3, 1, 2]);
        assert!(!report.is_clean());
    }

    #[test]
    fn finding_display_carries_severity_label() {
        let mut report = ValidationReport::new();
        report.transitional(invalid_name(4), Escalation::Pending);
        report.error(invalid_name(5));
        assert_eq!(
            report.warnings()[0].to_string(),
            "Warning: TECHNICAL_PARAMETER_NAME[4]: Invalid name 'FOO' *** WILL BECOME AN ERROR ***"
        );
        assert_eq!(
            report.errors()[0].to_string(),
            "Error: TECHNICAL_PARAMETER_NAME[5]: Invalid name 'FOO'"
        );
    }
}
