//! The verification engine.
//!
//! The only stateful object in the system. Owns the execution and
//! verification stores, transitions them through `update_test_status`,
//! and answers progress queries. Every successful update persists both
//! stores before the in-memory state changes, so a failed update leaves
//! the engine exactly where it was.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use drip_registry::{DataCore, GATEWAY_TEST_ID};
use drip_schema::{
    component_key, time::iso_now, ComponentVerification, TestDefinition, TestExecution,
    TestResult, TestStatus, VerificationStatus,
};

use crate::error::{Result, VerifyError};
use crate::store;

/// One `update_test_status` request. Fields beyond the status are optional;
/// issues are appended to whatever the record already carries.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: TestStatus,
    pub result: Option<TestResult>,
    pub engineer: Option<String>,
    pub notes: Option<String>,
    pub issues: Vec<String>,
}

impl StatusUpdate {
    pub fn new(status: TestStatus) -> Self {
        StatusUpdate {
            status,
            result: None,
            engineer: None,
            notes: None,
            issues: Vec::new(),
        }
    }

    pub fn with_result(mut self, result: TestResult) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_engineer(mut self, engineer: impl Into<String>) -> Self {
        self.engineer = Some(engineer.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issues.push(issue.into());
        self
    }
}

/// Counts for `verification_summary`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationSummary {
    pub components_by_status: BTreeMap<String, usize>,
    pub tests_complete: usize,
    pub tests_in_progress: usize,
    pub tests_not_started: usize,
    pub tests_blocked: usize,
    pub tests_failed: usize,
}

/// Per-subsystem progress roll-up.
#[derive(Debug, Clone, Serialize)]
pub struct SubsystemStatus {
    pub subsystem: String,
    pub total_tests: usize,
    pub completed_tests: usize,
    pub passed_tests: usize,
    pub completion_percentage: f64,
    pub pass_percentage: f64,
}

/// Flat per-component snapshot row for downstream renderers.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
    pub component_id: String,
    pub component_name: String,
    pub part_number: Option<String>,
    pub verification_status: VerificationStatus,
    pub required_count: usize,
    pub completed_count: usize,
    pub passed_count: usize,
    pub failed_count: usize,
    pub completion_percentage: f64,
    pub verification_date: Option<String>,
}

pub struct VerificationEngine {
    core: DataCore,
    state_dir: PathBuf,
    executions: store::ExecutionStore,
    /// Keyed by component KEY, same as the persisted file.
    verifications: store::VerificationStore,
    /// Component key → registry name.
    key_to_name: HashMap<String, String>,
}

impl VerificationEngine {
    /// Build the engine over the given registries, loading any persisted
    /// state from `state_dir` and filling the gaps with initial records:
    /// one execution per test, one verification per registry component.
    pub fn new(core: DataCore, state_dir: impl AsRef<Path>) -> Result<Self> {
        let state_dir = state_dir.as_ref().to_path_buf();
        let key_to_name: HashMap<String, String> = core
            .components
            .all()
            .iter()
            .map(|c| (c.key(), c.name.clone()))
            .collect();

        let (mut executions, mut verifications) = store::load(
            &state_dir,
            |test_id| core.tests.contains(test_id),
            |key| key_to_name.contains_key(key),
        )?;

        for test in core.tests.all() {
            executions
                .entry(test.test_id.clone())
                .or_insert_with(|| TestExecution::new(&test.test_id));
        }
        for component in core.components.all() {
            verifications
                .entry(component.key())
                .or_insert_with(|| {
                    let required = core
                        .test_map
                        .get(&component.name)
                        .map(|a| a.required_tests.clone())
                        .unwrap_or_default();
                    ComponentVerification::new(
                        component.key(),
                        &component.name,
                        component.part_number.clone(),
                        required,
                    )
                });
        }

        Ok(VerificationEngine {
            core,
            state_dir,
            executions,
            verifications,
            key_to_name,
        })
    }

    pub fn core(&self) -> &DataCore {
        &self.core
    }

    pub fn execution(&self, test_id: &str) -> Option<&TestExecution> {
        self.executions.get(test_id)
    }

    /// Verification record by component NAME.
    pub fn verification(&self, component: &str) -> Option<&ComponentVerification> {
        self.verifications.get(&component_key(component))
    }

    /// Apply one status update: mutate the execution record, recompute every
    /// affected component from scratch, persist both stores, and only then
    /// install the new state in memory. All-or-nothing per call.
    pub fn update_test_status(&mut self, test_id: &str, update: StatusUpdate) -> Result<()> {
        let definition = self
            .core
            .tests
            .get(test_id)
            .ok_or_else(|| VerifyError::UnknownTest(test_id.to_string()))?;

        let mut new_executions = self.executions.clone();
        let execution = new_executions
            .get_mut(test_id)
            .ok_or_else(|| VerifyError::UnknownTest(test_id.to_string()))?;

        execution.status = update.status;
        if update.status == TestStatus::Complete {
            execution.date_executed = Some(iso_now());
            execution.result = update.result.unwrap_or(TestResult::Pass);
        } else if let Some(result) = update.result {
            execution.result = result;
        }
        if let Some(engineer) = update.engineer {
            execution.test_engineer = Some(engineer);
        }
        if let Some(notes) = update.notes {
            execution.notes = notes;
        }
        execution.issues_found.extend(update.issues);

        // targets plus everything mapped to this test, deduplicated
        let mut affected: Vec<&str> = definition
            .target_components
            .iter()
            .map(String::as_str)
            .collect();
        for name in self.core.test_map.components_for_test(test_id) {
            if !affected.contains(&name) {
                affected.push(name);
            }
        }

        let mut new_verifications = self.verifications.clone();
        for name in affected {
            let key = component_key(name);
            if let Some(record) = self.recompute(name, &new_executions) {
                new_verifications.insert(key, record);
            }
        }

        store::save(&self.state_dir, &new_executions, &new_verifications)?;
        self.executions = new_executions;
        self.verifications = new_verifications;
        Ok(())
    }

    /// Rebuild one component's verification record from the execution store.
    /// From scratch every time; idempotent. Returns `None` for names not in
    /// the component registry.
    fn recompute(
        &self,
        component: &str,
        executions: &store::ExecutionStore,
    ) -> Option<ComponentVerification> {
        let record = self.core.components.get(component)?;
        let key = record.key();

        let (required, tracked): (Vec<String>, Vec<String>) = match self.core.test_map.get(component)
        {
            Some(assignment) => (
                assignment.required_tests.clone(),
                assignment.tracked_tests().map(str::to_string).collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let mut fresh = ComponentVerification::new(
            key.clone(),
            component,
            record.part_number.clone(),
            required,
        );
        for test_id in &tracked {
            let Some(execution) = executions.get(test_id) else {
                continue;
            };
            if execution.passed() {
                fresh.record_pass(test_id);
            } else if execution.failed() {
                fresh.record_fail(test_id);
            }
        }

        // carry over the original verification date and notes so that
        // recomputation is idempotent for already-verified components
        if let Some(previous) = self.verifications.get(&key) {
            fresh.notes = previous.notes.clone();
            if fresh.verification_status == VerificationStatus::Verified
                && previous.verification_status == VerificationStatus::Verified
            {
                fresh.verification_date = previous.verification_date.clone();
            }
        }
        Some(fresh)
    }

    /// True when every prerequisite of the test is `COMPLETE`.
    pub fn prerequisites_met(&self, test_id: &str) -> Result<bool> {
        let definition = self
            .core
            .tests
            .get(test_id)
            .ok_or_else(|| VerifyError::UnknownTest(test_id.to_string()))?;
        Ok(definition.prerequisite_tests.iter().all(|prereq| {
            self.executions
                .get(prereq)
                .is_some_and(|e| e.status == TestStatus::Complete)
        }))
    }

    /// The gateway rule: `TE-000` is either absent from the registry or
    /// complete with a passing result.
    pub fn gateway_ok(&self) -> bool {
        if !self.core.tests.contains(GATEWAY_TEST_ID) {
            return true;
        }
        self.executions
            .get(GATEWAY_TEST_ID)
            .is_some_and(TestExecution::passed)
    }

    /// Priority-ordered next tests: required tests of critical-path
    /// components first, then integration tests of critical-path components
    /// whose required set is fully complete. Only `NOT_STARTED` tests with
    /// met prerequisites qualify. While the gateway is not passed the only
    /// candidate is the gateway itself.
    pub fn next_required_tests(&self, limit: usize) -> Vec<(String, &TestDefinition)> {
        if !self.gateway_ok() {
            return self
                .core
                .tests
                .get(GATEWAY_TEST_ID)
                .map(|def| (def.test_id.clone(), def))
                .into_iter()
                .take(limit)
                .collect();
        }

        // required tests of critical-path components, in path order, then
        // their integration tests once the required set is complete
        let mut candidates: Vec<&str> = Vec::new();
        for component in self.core.test_map.critical_path() {
            let Some(assignment) = self.core.test_map.get(component) else {
                continue;
            };
            for test_id in &assignment.required_tests {
                if !candidates.contains(&test_id.as_str()) {
                    candidates.push(test_id);
                }
            }
        }
        for component in self.core.test_map.critical_path() {
            let Some(assignment) = self.core.test_map.get(component) else {
                continue;
            };
            let required_done = assignment.required_tests.iter().all(|t| {
                self.executions
                    .get(t)
                    .is_some_and(|e| e.status == TestStatus::Complete)
            });
            if !required_done {
                continue;
            }
            for test_id in &assignment.integration_tests {
                if !candidates.contains(&test_id.as_str()) {
                    candidates.push(test_id);
                }
            }
        }

        candidates
            .into_iter()
            .filter(|test_id| {
                self.executions
                    .get(*test_id)
                    .is_some_and(|e| e.status == TestStatus::NotStarted)
                    && self.prerequisites_met(test_id).unwrap_or(false)
            })
            .filter_map(|test_id| {
                self.core
                    .tests
                    .get(test_id)
                    .map(|def| (def.test_id.clone(), def))
            })
            .take(limit)
            .collect()
    }

    /// Every `NOT_STARTED` test with unmet prerequisites, paired with the
    /// incomplete blockers, in registry order.
    pub fn blocked_tests(&self) -> Vec<(String, Vec<String>)> {
        self.core
            .tests
            .all()
            .iter()
            .filter(|def| {
                self.executions
                    .get(&def.test_id)
                    .is_some_and(|e| e.status == TestStatus::NotStarted)
            })
            .filter_map(|def| {
                let blockers: Vec<String> = def
                    .prerequisite_tests
                    .iter()
                    .filter(|prereq| {
                        !self
                            .executions
                            .get(*prereq)
                            .is_some_and(|e| e.status == TestStatus::Complete)
                    })
                    .cloned()
                    .collect();
                if blockers.is_empty() {
                    None
                } else {
                    Some((def.test_id.clone(), blockers))
                }
            })
            .collect()
    }

    /// Counts of components by verification status and tests by computed
    /// status bucket. A `NOT_STARTED` test with unmet prerequisites counts
    /// as blocked, not as not-started.
    pub fn verification_summary(&self) -> VerificationSummary {
        let mut summary = VerificationSummary::default();
        for record in self.verifications.values() {
            *summary
                .components_by_status
                .entry(record.verification_status.to_string())
                .or_default() += 1;
        }
        for (test_id, execution) in &self.executions {
            match execution.status {
                TestStatus::Complete => summary.tests_complete += 1,
                TestStatus::InProgress => summary.tests_in_progress += 1,
                TestStatus::Failed => summary.tests_failed += 1,
                TestStatus::Blocked => summary.tests_blocked += 1,
                TestStatus::NotStarted => {
                    if self.prerequisites_met(test_id).unwrap_or(true) {
                        summary.tests_not_started += 1;
                    } else {
                        summary.tests_blocked += 1;
                    }
                }
            }
        }
        summary
    }

    /// Per-subsystem roll-up over the declarative grouping. A subsystem
    /// with no tracked tests reports 100% on both axes.
    pub fn subsystem_status(&self) -> Vec<SubsystemStatus> {
        self.core
            .test_map
            .subsystems()
            .iter()
            .map(|(name, components)| {
                let mut tests: HashSet<&str> = HashSet::new();
                for component in components {
                    if let Some(assignment) = self.core.test_map.get(component) {
                        tests.extend(assignment.tracked_tests());
                    }
                }
                let total = tests.len();
                let completed = tests
                    .iter()
                    .filter(|t| {
                        self.executions
                            .get(**t)
                            .is_some_and(|e| e.status == TestStatus::Complete)
                    })
                    .count();
                let passed = tests
                    .iter()
                    .filter(|t| self.executions.get(**t).is_some_and(TestExecution::passed))
                    .count();
                let percentage = |count: usize| {
                    if total == 0 {
                        100.0
                    } else {
                        count as f64 / total as f64 * 100.0
                    }
                };
                SubsystemStatus {
                    subsystem: name.clone(),
                    total_tests: total,
                    completed_tests: completed,
                    passed_tests: passed,
                    completion_percentage: percentage(completed),
                    pass_percentage: percentage(passed),
                }
            })
            .collect()
    }

    /// Flat snapshot of every component's verification record, in registry
    /// order.
    pub fn verification_matrix(&self) -> Vec<MatrixRow> {
        self.core
            .components
            .all()
            .iter()
            .filter_map(|component| {
                let record = self.verifications.get(&component.key())?;
                Some(MatrixRow {
                    component_id: record.component_id.clone(),
                    component_name: record.component_name.clone(),
                    part_number: record.part_number.clone(),
                    verification_status: record.verification_status,
                    required_count: record.required_tests.len(),
                    completed_count: record.completed_tests.len(),
                    passed_count: record.passed_tests.len(),
                    failed_count: record.failed_tests.len(),
                    completion_percentage: record.completion_percentage,
                    verification_date: record.verification_date.clone(),
                })
            })
            .collect()
    }

    /// Name lookup for a persisted component key.
    pub fn component_name(&self, key: &str) -> Option<&str> {
        self.key_to_name.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn engine() -> (VerificationEngine, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let engine = VerificationEngine::new(DataCore::builtin(), dir.path()).unwrap();
        (engine, dir)
    }

    fn pass(engine: &mut VerificationEngine, test_id: &str) {
        engine
            .update_test_status(
                test_id,
                StatusUpdate::new(TestStatus::Complete).with_result(TestResult::Pass),
            )
            .unwrap();
    }

    #[test]
    fn initial_state_covers_all_records() {
        let (engine, _dir) = engine();
        assert_eq!(engine.executions.len(), engine.core.tests.len());
        assert_eq!(engine.verifications.len(), engine.core.components.len());
        let exec = engine.execution("TE-001").unwrap();
        assert_eq!(exec.status, TestStatus::NotStarted);
        // unmapped pseudo-component has no requirements
        let system = engine.verification("Complete System").unwrap();
        assert_eq!(
            system.verification_status,
            VerificationStatus::NotApplicable
        );
        assert_eq!(system.completion_percentage, 100.0);
    }

    #[test]
    fn gateway_blocks_next_tests() {
        let (mut engine, _dir) = engine();
        assert!(!engine.gateway_ok());
        let next = engine.next_required_tests(5);
        assert!(next.len() <= 1);
        if let Some((test_id, _)) = next.first() {
            assert_eq!(test_id, "TE-000");
        }

        pass(&mut engine, "TE-000");
        assert!(engine.gateway_ok());
        let next = engine.next_required_tests(5);
        assert_eq!(next.len(), 5);
        assert!(next.iter().all(|(id, _)| id != "TE-000"));
    }

    #[test]
    fn single_transducer_pass_is_in_testing() {
        let (mut engine, _dir) = engine();
        pass(&mut engine, "TE-000");
        pass(&mut engine, "TE-001");

        let record = engine.verification("40kHz Transducers").unwrap();
        assert!(record.required_tests.contains(&"TE-001".to_string()));
        assert!(record.passed_tests.contains(&"TE-001".to_string()));
        // three more required tests outstanding
        assert_eq!(record.verification_status, VerificationStatus::InTesting);
        assert_eq!(record.completion_percentage, 25.0);
    }

    #[test]
    fn full_required_set_verifies_component() {
        let (mut engine, _dir) = engine();
        for test_id in ["TE-000", "TE-001", "TE-002", "TE-004", "TE-015"] {
            pass(&mut engine, test_id);
        }
        let record = engine.verification("40kHz Transducers").unwrap();
        assert_eq!(record.verification_status, VerificationStatus::Verified);
        assert!(record.verification_date.is_some());

        // recomputation keeps the original date
        let date = record.verification_date.clone();
        pass(&mut engine, "TE-087");
        let record = engine.verification("40kHz Transducers").unwrap();
        assert_eq!(record.verification_status, VerificationStatus::Verified);
        assert_eq!(record.verification_date, date);
    }

    #[test]
    fn failed_required_test_fails_component() {
        let (mut engine, _dir) = engine();
        pass(&mut engine, "TE-000");
        engine
            .update_test_status(
                "TE-001",
                StatusUpdate::new(TestStatus::Complete)
                    .with_result(TestResult::Fail)
                    .with_issue("cracked horn on unit 7"),
            )
            .unwrap();

        let record = engine.verification("40kHz Transducers").unwrap();
        assert_eq!(record.verification_status, VerificationStatus::Failed);
        assert_eq!(record.failed_tests, vec!["TE-001"]);
        let exec = engine.execution("TE-001").unwrap();
        assert_eq!(exec.issues_found, vec!["cracked horn on unit 7"]);
        assert!(exec.date_executed.is_some());
    }

    #[test]
    fn complete_defaults_result_to_pass() {
        let (mut engine, _dir) = engine();
        engine
            .update_test_status("TE-000", StatusUpdate::new(TestStatus::Complete))
            .unwrap();
        assert!(engine.execution("TE-000").unwrap().passed());
    }

    #[test]
    fn conditional_result_does_not_advance_component() {
        let (mut engine, _dir) = engine();
        pass(&mut engine, "TE-000");
        engine
            .update_test_status(
                "TE-001",
                StatusUpdate::new(TestStatus::Complete).with_result(TestResult::Conditional),
            )
            .unwrap();

        // a conditional completion is neither a pass nor a fail, so the
        // component's evidence sets stay empty until the test is re-run
        let record = engine.verification("40kHz Transducers").unwrap();
        assert!(record.passed_tests.is_empty());
        assert!(record.failed_tests.is_empty());
        assert!(record.completed_tests.is_empty());
        assert_eq!(record.verification_status, VerificationStatus::NotTested);

        pass(&mut engine, "TE-001");
        let record = engine.verification("40kHz Transducers").unwrap();
        assert_eq!(record.verification_status, VerificationStatus::InTesting);
    }

    #[test]
    fn unknown_test_leaves_state_unchanged() {
        let (mut engine, _dir) = engine();
        let before = engine.executions.clone();
        let err = engine
            .update_test_status("TE-999", StatusUpdate::new(TestStatus::Complete))
            .unwrap_err();
        assert!(matches!(err, VerifyError::UnknownTest(_)));
        assert_eq!(engine.executions, before);
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let (mut engine, _dir) = engine();
        pass(&mut engine, "TE-000");
        pass(&mut engine, "TE-001");
        let first = engine.verification("40kHz Transducers").unwrap().clone();
        pass(&mut engine, "TE-001");
        let second = engine.verification("40kHz Transducers").unwrap();
        assert_eq!(first.verification_status, second.verification_status);
        assert_eq!(first.passed_tests, second.passed_tests);
        assert_eq!(first.completed_tests, second.completed_tests);
    }

    #[test]
    fn blocked_tests_name_their_blockers() {
        let (engine, _dir) = engine();
        let blocked = engine.blocked_tests();
        let te002 = blocked.iter().find(|(id, _)| id == "TE-002").unwrap();
        assert_eq!(te002.1, vec!["TE-001"]);
        // tests with no prerequisites are never blocked
        assert!(!blocked.iter().any(|(id, _)| id == "TE-001"));
    }

    #[test]
    fn prerequisites_met_rules() {
        let (mut engine, _dir) = engine();
        assert!(engine.prerequisites_met("TE-001").unwrap());
        assert!(!engine.prerequisites_met("TE-002").unwrap());
        pass(&mut engine, "TE-001");
        assert!(engine.prerequisites_met("TE-002").unwrap());
        assert!(matches!(
            engine.prerequisites_met("TE-999"),
            Err(VerifyError::UnknownTest(_))
        ));
    }

    #[test]
    fn summary_buckets_blocked_separately() {
        let (mut engine, _dir) = engine();
        let summary = engine.verification_summary();
        let total = summary.tests_complete
            + summary.tests_in_progress
            + summary.tests_not_started
            + summary.tests_blocked
            + summary.tests_failed;
        assert_eq!(total, engine.core.tests.len());
        assert!(summary.tests_blocked > 0);

        pass(&mut engine, "TE-000");
        pass(&mut engine, "TE-001");
        let summary = engine.verification_summary();
        assert_eq!(summary.tests_complete, 2);
        assert!(summary.components_by_status.contains_key("IN_TESTING"));
    }

    #[test]
    fn subsystem_rollup_moves_with_progress() {
        let (mut engine, _dir) = engine();
        let before = engine
            .subsystem_status()
            .into_iter()
            .find(|s| s.subsystem == "Acoustic Levitation")
            .unwrap();
        assert_eq!(before.completed_tests, 0);
        assert_eq!(before.completion_percentage, 0.0);

        pass(&mut engine, "TE-001");
        let after = engine
            .subsystem_status()
            .into_iter()
            .find(|s| s.subsystem == "Acoustic Levitation")
            .unwrap();
        assert_eq!(after.completed_tests, 1);
        assert!(after.completion_percentage > 0.0);
        assert_eq!(after.total_tests, before.total_tests);
    }

    #[test]
    fn state_round_trips_across_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut engine =
                VerificationEngine::new(DataCore::builtin(), dir.path()).unwrap();
            pass(&mut engine, "TE-000");
            pass(&mut engine, "TE-001");
        }
        let reloaded = VerificationEngine::new(DataCore::builtin(), dir.path()).unwrap();
        assert!(reloaded.execution("TE-001").unwrap().passed());
        let record = reloaded.verification("40kHz Transducers").unwrap();
        assert_eq!(record.verification_status, VerificationStatus::InTesting);
        assert!(record.passed_tests.contains(&"TE-001".to_string()));
    }

    #[test]
    fn matrix_covers_every_component() {
        let (engine, _dir) = engine();
        let matrix = engine.verification_matrix();
        assert_eq!(matrix.len(), engine.core.components.len());
        let row = matrix
            .iter()
            .find(|r| r.component_name == "40kHz Transducers")
            .unwrap();
        assert_eq!(row.component_id, "40KHZ_TRANSDUCERS");
        assert_eq!(row.required_count, 4);
    }

    #[test]
    fn verification_invariants_hold_after_updates() {
        let (mut engine, _dir) = engine();
        pass(&mut engine, "TE-000");
        pass(&mut engine, "TE-001");
        engine
            .update_test_status(
                "TE-003",
                StatusUpdate::new(TestStatus::Complete).with_result(TestResult::Fail),
            )
            .unwrap();

        for record in engine.verifications.values() {
            let mut expected: Vec<&String> =
                record.passed_tests.iter().chain(&record.failed_tests).collect();
            expected.sort();
            let mut completed: Vec<&String> = record.completed_tests.iter().collect();
            completed.sort();
            assert_eq!(completed, expected, "{}", record.component_name);

            if record.verification_status == VerificationStatus::Verified {
                assert!(record
                    .required_tests
                    .iter()
                    .all(|t| record.passed_tests.contains(t)));
            }
            if record.verification_status == VerificationStatus::Failed {
                assert!(!record.failed_tests.is_empty());
            }
        }
    }
}
