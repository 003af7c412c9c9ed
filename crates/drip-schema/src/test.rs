//! Verification test definitions and mutable execution records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of evidence a test produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationType {
    Feasibility,
    Functional,
    Performance,
    Integration,
    Acceptance,
    Environmental,
    Endurance,
    Safety,
}

impl fmt::Display for VerificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationType::Feasibility => write!(f, "FEASIBILITY"),
            VerificationType::Functional => write!(f, "FUNCTIONAL"),
            VerificationType::Performance => write!(f, "PERFORMANCE"),
            VerificationType::Integration => write!(f, "INTEGRATION"),
            VerificationType::Acceptance => write!(f, "ACCEPTANCE"),
            VerificationType::Environmental => write!(f, "ENVIRONMENTAL"),
            VerificationType::Endurance => write!(f, "ENDURANCE"),
            VerificationType::Safety => write!(f, "SAFETY"),
        }
    }
}

/// Administrative state of a test execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    NotStarted,
    InProgress,
    Complete,
    Failed,
    Blocked,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::NotStarted => write!(f, "NOT_STARTED"),
            TestStatus::InProgress => write!(f, "IN_PROGRESS"),
            TestStatus::Complete => write!(f, "COMPLETE"),
            TestStatus::Failed => write!(f, "FAILED"),
            TestStatus::Blocked => write!(f, "BLOCKED"),
        }
    }
}

/// Outcome of a completed test execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestResult {
    Pass,
    Fail,
    Conditional,
    NotTested,
    Aborted,
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestResult::Pass => write!(f, "PASS"),
            TestResult::Fail => write!(f, "FAIL"),
            TestResult::Conditional => write!(f, "CONDITIONAL"),
            TestResult::NotTested => write!(f, "NOT_TESTED"),
            TestResult::Aborted => write!(f, "ABORTED"),
        }
    }
}

/// An immutable test definition from the verification catalog.
///
/// `prerequisite_tests` and `enables_tests` are mirror images: if A lists B
/// as a prerequisite, B lists A in its enables. The registry asserts the
/// symmetry (and acyclicity) at load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestDefinition {
    /// Unique id, pattern `TE-NNN`.
    pub test_id: String,
    pub test_name: String,
    pub test_purpose: String,
    /// Component names this test produces evidence for.
    pub target_components: Vec<String>,
    pub verification_type: VerificationType,
    pub prerequisite_tests: Vec<String>,
    pub enables_tests: Vec<String>,
    pub estimated_duration_hours: f64,
    pub required_equipment: Vec<String>,
    pub procedure_reference: String,
    pub acceptance_criteria: String,
}

impl TestDefinition {
    pub fn new(
        test_id: impl Into<String>,
        test_name: impl Into<String>,
        verification_type: VerificationType,
        estimated_duration_hours: f64,
    ) -> Self {
        TestDefinition {
            test_id: test_id.into(),
            test_name: test_name.into(),
            test_purpose: String::new(),
            target_components: Vec::new(),
            verification_type,
            prerequisite_tests: Vec::new(),
            enables_tests: Vec::new(),
            estimated_duration_hours,
            required_equipment: Vec::new(),
            procedure_reference: String::new(),
            acceptance_criteria: String::new(),
        }
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.test_purpose = purpose.into();
        self
    }

    pub fn targets<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_components = components.into_iter().map(Into::into).collect();
        self
    }

    pub fn prerequisites<I, S>(mut self, tests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisite_tests = tests.into_iter().map(Into::into).collect();
        self
    }

    pub fn enables<I, S>(mut self, tests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enables_tests = tests.into_iter().map(Into::into).collect();
        self
    }

    pub fn equipment<I, S>(mut self, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_equipment = equipment.into_iter().map(Into::into).collect();
        self
    }

    pub fn procedure(mut self, reference: impl Into<String>) -> Self {
        self.procedure_reference = reference.into();
        self
    }

    pub fn criteria(mut self, criteria: impl Into<String>) -> Self {
        self.acceptance_criteria = criteria.into();
        self
    }
}

/// Mutable execution record for one test, owned by the verification engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestExecution {
    pub test_id: String,
    pub status: TestStatus,
    pub result: TestResult,
    /// ISO 8601 timestamp, set when the test transitions to `COMPLETE`.
    pub date_executed: Option<String>,
    pub test_engineer: Option<String>,
    pub report_path: Option<String>,
    pub notes: String,
    pub issues_found: Vec<String>,
}

impl TestExecution {
    /// A fresh record in the pre-execution state.
    pub fn new(test_id: impl Into<String>) -> Self {
        TestExecution {
            test_id: test_id.into(),
            status: TestStatus::NotStarted,
            result: TestResult::NotTested,
            date_executed: None,
            test_engineer: None,
            report_path: None,
            notes: String::new(),
            issues_found: Vec::new(),
        }
    }

    /// True when the test finished and its result is a pass.
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Complete && self.result == TestResult::Pass
    }

    /// True when the test finished with a failing result.
    pub fn failed(&self) -> bool {
        self.status == TestStatus::Complete && self.result == TestResult::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_execution_state() {
        let exec = TestExecution::new("TE-001");
        assert_eq!(exec.status, TestStatus::NotStarted);
        assert_eq!(exec.result, TestResult::NotTested);
        assert!(exec.date_executed.is_none());
        assert!(!exec.passed());
        assert!(!exec.failed());
    }

    #[test]
    fn passed_requires_complete_and_pass() {
        let mut exec = TestExecution::new("TE-001");
        exec.result = TestResult::Pass;
        assert!(!exec.passed());
        exec.status = TestStatus::Complete;
        assert!(exec.passed());
        exec.result = TestResult::Conditional;
        assert!(!exec.passed());
        assert!(!exec.failed());
    }

    #[test]
    fn status_serializes_symbolically() {
        assert_eq!(
            serde_json::to_string(&TestStatus::NotStarted).unwrap(),
            "\"NOT_STARTED\""
        );
        assert_eq!(
            serde_json::to_string(&TestResult::Conditional).unwrap(),
            "\"CONDITIONAL\""
        );
        assert_eq!(
            serde_json::to_string(&VerificationType::Feasibility).unwrap(),
            "\"FEASIBILITY\""
        );
    }

    #[test]
    fn unknown_status_rejected() {
        assert!(serde_json::from_str::<TestStatus>("\"DONE\"").is_err());
    }

    #[test]
    fn definition_builder() {
        let def = TestDefinition::new(
            "TE-002",
            "Transducer Array Phasing",
            VerificationType::Functional,
            4.0,
        )
        .targets(["40kHz Transducers", "Phase Array Controller"])
        .prerequisites(["TE-001"])
        .enables(["TE-087"]);

        assert_eq!(def.prerequisite_tests, vec!["TE-001"]);
        assert_eq!(def.target_components.len(), 2);
        assert_eq!(def.verification_type, VerificationType::Functional);
    }
}
