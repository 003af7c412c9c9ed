//! Per-component verification records.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::iso_now;

/// Rolled-up verification state of one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    NotTested,
    InTesting,
    Verified,
    Failed,
    NotApplicable,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationStatus::NotTested => write!(f, "NOT_TESTED"),
            VerificationStatus::InTesting => write!(f, "IN_TESTING"),
            VerificationStatus::Verified => write!(f, "VERIFIED"),
            VerificationStatus::Failed => write!(f, "FAILED"),
            VerificationStatus::NotApplicable => write!(f, "NOT_APPLICABLE"),
        }
    }
}

/// Mutable verification record for one component, owned by the engine.
///
/// `completed_tests` is always the disjoint union of `passed_tests` and
/// `failed_tests`; [`ComponentVerification::update_status`] maintains that
/// invariant along with the status derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentVerification {
    pub component_id: String,
    pub component_name: String,
    pub part_number: Option<String>,
    pub verification_status: VerificationStatus,
    pub required_tests: Vec<String>,
    pub completed_tests: Vec<String>,
    pub passed_tests: Vec<String>,
    pub failed_tests: Vec<String>,
    /// ISO 8601 timestamp, set on the transition into `VERIFIED`.
    pub verification_date: Option<String>,
    pub notes: String,
    /// Informational; rederived on every status update.
    pub completion_percentage: f64,
}

impl ComponentVerification {
    pub fn new(
        component_id: impl Into<String>,
        component_name: impl Into<String>,
        part_number: Option<String>,
        required_tests: Vec<String>,
    ) -> Self {
        let mut record = ComponentVerification {
            component_id: component_id.into(),
            component_name: component_name.into(),
            part_number,
            verification_status: VerificationStatus::NotTested,
            required_tests,
            completed_tests: Vec::new(),
            passed_tests: Vec::new(),
            failed_tests: Vec::new(),
            verification_date: None,
            notes: String::new(),
            completion_percentage: 0.0,
        };
        record.update_status();
        record
    }

    /// Rederive `verification_status`, `completed_tests`, and the completion
    /// percentage from the pass/fail sets and `required_tests`.
    ///
    /// Ordering matters: no-requirements beats everything, untouched beats
    /// failed, failed beats verified.
    pub fn update_status(&mut self) {
        self.completed_tests = self
            .passed_tests
            .iter()
            .chain(self.failed_tests.iter())
            .cloned()
            .collect();

        let required: BTreeSet<&str> = self.required_tests.iter().map(String::as_str).collect();
        let passed: BTreeSet<&str> = self.passed_tests.iter().map(String::as_str).collect();
        let failed: BTreeSet<&str> = self.failed_tests.iter().map(String::as_str).collect();
        let completed: BTreeSet<&str> = self.completed_tests.iter().map(String::as_str).collect();

        let next = if required.is_empty() {
            VerificationStatus::NotApplicable
        } else if completed.is_disjoint(&required) && failed.is_disjoint(&required) {
            VerificationStatus::NotTested
        } else if !failed.is_empty() {
            VerificationStatus::Failed
        } else if required.is_subset(&passed) {
            VerificationStatus::Verified
        } else {
            VerificationStatus::InTesting
        };

        if next == VerificationStatus::Verified
            && self.verification_status != VerificationStatus::Verified
        {
            self.verification_date = Some(iso_now());
        }
        self.verification_status = next;

        self.completion_percentage = if required.is_empty() {
            100.0
        } else {
            let done = required.intersection(&completed).count();
            done as f64 / required.len() as f64 * 100.0
        };
    }

    /// Record a passing execution of `test_id`. A test that previously failed
    /// moves from the fail set to the pass set.
    pub fn record_pass(&mut self, test_id: &str) {
        self.failed_tests.retain(|t| t != test_id);
        if !self.passed_tests.iter().any(|t| t == test_id) {
            self.passed_tests.push(test_id.to_string());
        }
        self.update_status();
    }

    /// Record a failing execution of `test_id`.
    pub fn record_fail(&mut self, test_id: &str) {
        self.passed_tests.retain(|t| t != test_id);
        if !self.failed_tests.iter().any(|t| t == test_id) {
            self.failed_tests.push(test_id.to_string());
        }
        self.update_status();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(required: &[&str]) -> ComponentVerification {
        ComponentVerification::new(
            "40KHZ_TRANSDUCERS",
            "40kHz Transducers",
            None,
            required.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn no_requirements_is_not_applicable() {
        let v = record(&[]);
        assert_eq!(v.verification_status, VerificationStatus::NotApplicable);
        assert_eq!(v.completion_percentage, 100.0);
    }

    #[test]
    fn fresh_record_not_tested() {
        let v = record(&["TE-001", "TE-002"]);
        assert_eq!(v.verification_status, VerificationStatus::NotTested);
        assert_eq!(v.completion_percentage, 0.0);
    }

    #[test]
    fn partial_required_passes_is_in_testing() {
        let mut v = record(&["TE-001", "TE-002"]);
        v.record_pass("TE-001");
        assert_eq!(v.verification_status, VerificationStatus::InTesting);
        assert_eq!(v.completion_percentage, 50.0);
    }

    #[test]
    fn all_required_passed_is_verified() {
        let mut v = record(&["TE-001", "TE-002"]);
        v.record_pass("TE-001");
        assert!(v.verification_date.is_none());
        v.record_pass("TE-002");
        assert_eq!(v.verification_status, VerificationStatus::Verified);
        assert!(v.verification_date.is_some());
        assert_eq!(v.completion_percentage, 100.0);
    }

    #[test]
    fn any_failure_beats_verified() {
        let mut v = record(&["TE-001", "TE-002"]);
        v.record_pass("TE-001");
        v.record_pass("TE-002");
        v.record_fail("TE-002");
        assert_eq!(v.verification_status, VerificationStatus::Failed);
        assert!(!v.failed_tests.is_empty());
    }

    #[test]
    fn retest_clears_failure() {
        let mut v = record(&["TE-001"]);
        v.record_fail("TE-001");
        assert_eq!(v.verification_status, VerificationStatus::Failed);
        v.record_pass("TE-001");
        assert_eq!(v.verification_status, VerificationStatus::Verified);
        assert!(v.failed_tests.is_empty());
        assert_eq!(v.completed_tests, vec!["TE-001"]);
    }

    #[test]
    fn completed_is_union_of_passed_and_failed() {
        let mut v = record(&["TE-001", "TE-002", "TE-003"]);
        v.record_pass("TE-001");
        v.record_fail("TE-002");
        let mut completed = v.completed_tests.clone();
        completed.sort();
        assert_eq!(completed, vec!["TE-001", "TE-002"]);
    }

    #[test]
    fn optional_failure_leaves_untouched_required_not_tested() {
        // F ≠ ∅ but F ∩ R = ∅ and C ∩ R = ∅: the record stays
        // NOT_TESTED rather than dropping to FAILED.
        let mut v = record(&["TE-001"]);
        v.record_fail("TE-099");
        assert_eq!(v.verification_status, VerificationStatus::NotTested);
    }

    #[test]
    fn status_serializes_symbolically() {
        assert_eq!(
            serde_json::to_string(&VerificationStatus::NotApplicable).unwrap(),
            "\"NOT_APPLICABLE\""
        );
    }
}
