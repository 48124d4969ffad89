use serde::{Deserialize, Serialize};
use wfdoc_core::{IssueSeverity, Violation, ViolationKind};

/// Outcome of validating one document. Invalid means at least one
/// error-severity violation; warnings alone keep a document valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn from_violations(mut violations: Vec<Violation>) -> Self {
        Violation::sort_stable(&mut violations);
        let valid = !violations.iter().any(Violation::is_error);
        Self { valid, violations }
    }

    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        let mut merged = std::mem::take(&mut self.violations);
        merged.extend(violations);
        *self = Self::from_violations(merged);
    }

    pub fn count(&self, severity: IssueSeverity) -> usize {
        self.violations
            .iter()
            .filter(|violation| violation.severity == severity)
            .count()
    }

    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.kind == kind)
    }
}
