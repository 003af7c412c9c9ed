//! Verification test registry.
//!
//! Immutable after load. The prerequisite graph is validated for
//! acyclicity, referential integrity, and prerequisite/enables symmetry
//! when the registry is built; queries after that never fail on graph
//! structure.

use std::collections::{HashMap, HashSet};

use drip_schema::{TestDefinition, VerificationType};

use crate::error::{RegistryError, Result};

/// Id of the gateway test that guards all other testing.
pub const GATEWAY_TEST_ID: &str = "TE-000";

#[derive(Debug, Clone)]
pub struct TestRegistry {
    tests: Vec<TestDefinition>,
    by_id: HashMap<String, usize>,
}

impl TestRegistry {
    /// Build from caller-supplied definitions, enforcing the load-time
    /// invariants: unique ids, prerequisite/enables ids resolve, the
    /// prerequisite graph is acyclic, and prerequisites mirror enables.
    pub fn from_tests(tests: Vec<TestDefinition>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(tests.len());
        for (idx, test) in tests.iter().enumerate() {
            if by_id.insert(test.test_id.clone(), idx).is_some() {
                return Err(RegistryError::DataIntegrity(format!(
                    "duplicate test id: {}",
                    test.test_id
                )));
            }
        }

        for test in &tests {
            for prereq in &test.prerequisite_tests {
                let Some(&idx) = by_id.get(prereq) else {
                    return Err(RegistryError::DataIntegrity(format!(
                        "{} lists unknown prerequisite {}",
                        test.test_id, prereq
                    )));
                };
                if !tests[idx].enables_tests.contains(&test.test_id) {
                    return Err(RegistryError::DataIntegrity(format!(
                        "{} lists prerequisite {} but {} does not enable it back",
                        test.test_id, prereq, prereq
                    )));
                }
            }
            for enabled in &test.enables_tests {
                let Some(&idx) = by_id.get(enabled) else {
                    return Err(RegistryError::DataIntegrity(format!(
                        "{} enables unknown test {}",
                        test.test_id, enabled
                    )));
                };
                if !tests[idx].prerequisite_tests.contains(&test.test_id) {
                    return Err(RegistryError::DataIntegrity(format!(
                        "{} enables {} but {} does not list it as a prerequisite",
                        test.test_id, enabled, enabled
                    )));
                }
            }
        }

        let registry = TestRegistry { tests, by_id };
        registry.assert_acyclic()?;
        Ok(registry)
    }

    /// The builtin verification catalog, `TE-000` through `TE-100`.
    pub fn builtin() -> Self {
        match Self::from_tests(crate::tests_catalog::tests()) {
            Ok(registry) => registry,
            Err(err) => unreachable!("builtin test catalog invalid: {err}"),
        }
    }

    /// Depth-first cycle check over the prerequisite edges.
    fn assert_acyclic(&self) -> Result<()> {
        // 0 = unvisited, 1 = on stack, 2 = done
        let mut state = vec![0u8; self.tests.len()];
        for start in 0..self.tests.len() {
            if state[start] != 0 {
                continue;
            }
            let mut stack = vec![(start, 0usize)];
            state[start] = 1;
            while let Some(frame) = stack.last_mut() {
                let (idx, edge) = *frame;
                let prereqs = &self.tests[idx].prerequisite_tests;
                if edge == prereqs.len() {
                    state[idx] = 2;
                    stack.pop();
                    continue;
                }
                frame.1 += 1;
                // ids were resolved before the cycle check
                let Some(&next) = self.by_id.get(&prereqs[edge]) else {
                    continue;
                };
                match state[next] {
                    0 => {
                        state[next] = 1;
                        stack.push((next, 0));
                    }
                    1 => {
                        return Err(RegistryError::DataIntegrity(format!(
                            "cyclic prerequisites through {}",
                            self.tests[next].test_id
                        )));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn all(&self) -> &[TestDefinition] {
        &self.tests
    }

    pub fn get(&self, test_id: &str) -> Option<&TestDefinition> {
        self.by_id.get(test_id).map(|&idx| &self.tests[idx])
    }

    pub fn contains(&self, test_id: &str) -> bool {
        self.by_id.contains_key(test_id)
    }

    /// Lookup that surfaces a miss as `UnknownTest`.
    pub fn require(&self, test_id: &str) -> Result<&TestDefinition> {
        self.get(test_id)
            .ok_or_else(|| RegistryError::UnknownTest(test_id.to_string()))
    }

    pub fn by_type(&self, kind: VerificationType) -> impl Iterator<Item = &TestDefinition> {
        self.tests.iter().filter(move |t| t.verification_type == kind)
    }

    /// Tests whose `target_components` include the named component.
    pub fn tests_for_component<'a>(
        &'a self,
        component: &'a str,
    ) -> impl Iterator<Item = &'a TestDefinition> {
        self.tests
            .iter()
            .filter(move |t| t.target_components.iter().any(|c| c == component))
    }

    /// Full prerequisite chain of a test: depth-first, dependencies before
    /// dependents, each test listed once, the queried test excluded.
    pub fn prerequisite_chain(&self, test_id: &str) -> Result<Vec<&TestDefinition>> {
        let root = self.require(test_id)?;
        let mut seen: HashSet<&str> = HashSet::new();
        let mut chain = Vec::new();
        self.walk_prerequisites(root, &mut seen, &mut chain);
        Ok(chain)
    }

    fn walk_prerequisites<'a>(
        &'a self,
        test: &'a TestDefinition,
        seen: &mut HashSet<&'a str>,
        chain: &mut Vec<&'a TestDefinition>,
    ) {
        for prereq_id in &test.prerequisite_tests {
            // graph is validated at load, so the id resolves
            if let Some(prereq) = self.get(prereq_id) {
                if seen.insert(prereq.test_id.as_str()) {
                    self.walk_prerequisites(prereq, seen, chain);
                    chain.push(prereq);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drip_schema::VerificationType::{Functional, Integration, Performance};

    fn def(id: &str, prereqs: &[&str], enables: &[&str]) -> TestDefinition {
        TestDefinition::new(id, format!("Test {id}"), Functional, 1.0)
            .prerequisites(prereqs.iter().copied())
            .enables(enables.iter().copied())
    }

    fn chain_ids(registry: &TestRegistry, id: &str) -> Vec<String> {
        registry
            .prerequisite_chain(id)
            .unwrap()
            .iter()
            .map(|t| t.test_id.clone())
            .collect()
    }

    #[test]
    fn symmetry_violation_rejected() {
        let err = TestRegistry::from_tests(vec![
            def("TE-001", &[], &[]),
            def("TE-002", &["TE-001"], &[]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("does not enable"));
    }

    #[test]
    fn unknown_prerequisite_rejected() {
        let err = TestRegistry::from_tests(vec![def("TE-002", &["TE-001"], &[])]).unwrap_err();
        assert!(matches!(err, RegistryError::DataIntegrity(_)));
    }

    #[test]
    fn cycle_rejected() {
        let err = TestRegistry::from_tests(vec![
            def("TE-001", &["TE-003"], &["TE-002"]),
            def("TE-002", &["TE-001"], &["TE-003"]),
            def("TE-003", &["TE-002"], &["TE-001"]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("cyclic"));
    }

    #[test]
    fn chain_is_deduplicated_dependency_order() {
        // diamond: 004 <- {002, 003} <- 001
        let registry = TestRegistry::from_tests(vec![
            def("TE-001", &[], &["TE-002", "TE-003"]),
            def("TE-002", &["TE-001"], &["TE-004"]),
            def("TE-003", &["TE-001"], &["TE-004"]),
            def("TE-004", &["TE-002", "TE-003"], &[]),
        ])
        .unwrap();
        assert_eq!(
            chain_ids(&registry, "TE-004"),
            vec!["TE-001", "TE-002", "TE-003"]
        );
        assert!(chain_ids(&registry, "TE-001").is_empty());
    }

    #[test]
    fn lookup_errors() {
        let registry = TestRegistry::from_tests(vec![def("TE-001", &[], &[])]).unwrap();
        assert!(matches!(
            registry.require("TE-999"),
            Err(RegistryError::UnknownTest(_))
        ));
        assert!(matches!(
            registry.prerequisite_chain("TE-999"),
            Err(RegistryError::UnknownTest(_))
        ));
    }

    #[test]
    fn builtin_catalog_loads() {
        let registry = TestRegistry::builtin();
        assert_eq!(registry.len(), 101);
        assert!(registry.contains(GATEWAY_TEST_ID));
        assert!(registry.contains("TE-100"));
        assert!(registry
            .tests_for_component("40kHz Transducers")
            .any(|t| t.test_id == "TE-001"));
        assert!(registry.by_type(Performance).count() > 0);
        assert!(registry.by_type(Integration).count() > 0);

        // TE-100 pulls in the whole acceptance chain
        let chain = registry.prerequisite_chain("TE-100").unwrap();
        assert!(chain.iter().any(|t| t.test_id == "TE-096"));
        assert!(chain.iter().any(|t| t.test_id == "TE-081"));
    }
}
