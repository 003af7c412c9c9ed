//! Component-to-test mapping.
//!
//! The sole bridge from components back to the tests that verify them.
//! Components absent from the map have no verification requirements and
//! roll up as `NOT_APPLICABLE`.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{RegistryError, Result};

/// Test sets assigned to one component.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestAssignment {
    /// Must all pass for the component to verify.
    pub required_tests: Vec<String>,
    /// Count toward progress but cannot verify on their own.
    pub integration_tests: Vec<String>,
    /// Tracked but never affect verification status.
    pub optional_tests: Vec<String>,
    pub verification_criteria: String,
}

impl TestAssignment {
    fn new(
        required: &[&str],
        integration: &[&str],
        optional: &[&str],
        criteria: &str,
    ) -> Self {
        let ids = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        TestAssignment {
            required_tests: ids(required),
            integration_tests: ids(integration),
            optional_tests: ids(optional),
            verification_criteria: criteria.to_string(),
        }
    }

    /// Required and integration ids, the sets verification reads.
    pub fn tracked_tests(&self) -> impl Iterator<Item = &str> {
        self.required_tests
            .iter()
            .chain(self.integration_tests.iter())
            .map(String::as_str)
    }

    /// All three sets.
    pub fn all_tests(&self) -> impl Iterator<Item = &str> {
        self.tracked_tests()
            .chain(self.optional_tests.iter().map(String::as_str))
    }
}

/// Completion roll-up for one component against a set of passed tests.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TestCoverage {
    pub required_total: usize,
    pub required_complete: usize,
    pub integration_total: usize,
    pub integration_complete: usize,
    pub optional_total: usize,
    pub optional_complete: usize,
    /// Completed over total across all three sets, percent; 100 when the
    /// component has no tests at all.
    pub overall_percentage: f64,
}

#[derive(Debug, Clone)]
pub struct ComponentTestMap {
    entries: Vec<(String, TestAssignment)>,
    by_component: HashMap<String, usize>,
    subsystems: Vec<(String, Vec<String>)>,
    critical_path: Vec<String>,
}

impl ComponentTestMap {
    /// Build from caller-supplied parts. The two critical-path lists are
    /// reconciled by union; a disagreement is logged, not rejected.
    pub fn from_parts(
        entries: Vec<(String, TestAssignment)>,
        subsystems: Vec<(String, Vec<String>)>,
        critical_a: Vec<String>,
        critical_b: Vec<String>,
    ) -> Result<Self> {
        let mut by_component = HashMap::with_capacity(entries.len());
        for (idx, (name, _)) in entries.iter().enumerate() {
            if by_component.insert(name.clone(), idx).is_some() {
                return Err(RegistryError::DataIntegrity(format!(
                    "duplicate component-test-map entry: {name}"
                )));
            }
        }

        let a: HashSet<&str> = critical_a.iter().map(String::as_str).collect();
        let b: HashSet<&str> = critical_b.iter().map(String::as_str).collect();
        if a != b {
            let only_a: Vec<&&str> = a.difference(&b).collect();
            let only_b: Vec<&&str> = b.difference(&a).collect();
            log::warn!(
                "critical-path lists disagree (only first: {only_a:?}, only second: {only_b:?}); using the union"
            );
        }
        let mut critical_path = critical_a;
        for name in critical_b {
            if !critical_path.contains(&name) {
                critical_path.push(name);
            }
        }

        Ok(ComponentTestMap {
            entries,
            by_component,
            subsystems,
            critical_path,
        })
    }

    /// The builtin map, subsystem grouping, and critical path.
    pub fn builtin() -> Self {
        match crate::test_map::builtin_parts() {
            Ok(map) => map,
            Err(err) => unreachable!("builtin component-test map invalid: {err}"),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn all(&self) -> impl Iterator<Item = (&str, &TestAssignment)> {
        self.entries.iter().map(|(name, a)| (name.as_str(), a))
    }

    pub fn get(&self, component: &str) -> Option<&TestAssignment> {
        self.by_component
            .get(component)
            .map(|&idx| &self.entries[idx].1)
    }

    /// Components whose assignment references the test in any of the three
    /// sets, in map order.
    pub fn components_for_test(&self, test_id: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, a)| a.all_tests().any(|t| t == test_id))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Subsystem grouping used by progress roll-ups.
    pub fn subsystems(&self) -> &[(String, Vec<String>)] {
        &self.subsystems
    }

    /// Union of the declared critical-path lists.
    pub fn critical_path(&self) -> &[String] {
        &self.critical_path
    }

    pub fn is_critical(&self, component: &str) -> bool {
        self.critical_path.iter().any(|c| c == component)
    }

    /// Coverage of one component given the ids of completed tests, or
    /// `None` when the component is not in the map.
    pub fn test_coverage(&self, component: &str, completed: &HashSet<&str>) -> Option<TestCoverage> {
        let assignment = self.get(component)?;
        let count = |list: &[String]| {
            list.iter()
                .filter(|t| completed.contains(t.as_str()))
                .count()
        };
        let required_complete = count(&assignment.required_tests);
        let integration_complete = count(&assignment.integration_tests);
        let optional_complete = count(&assignment.optional_tests);
        let total = assignment.required_tests.len()
            + assignment.integration_tests.len()
            + assignment.optional_tests.len();
        let complete = required_complete + integration_complete + optional_complete;
        Some(TestCoverage {
            required_total: assignment.required_tests.len(),
            required_complete,
            integration_total: assignment.integration_tests.len(),
            integration_complete,
            optional_total: assignment.optional_tests.len(),
            optional_complete,
            overall_percentage: if total == 0 {
                100.0
            } else {
                complete as f64 / total as f64 * 100.0
            },
        })
    }
}

fn builtin_parts() -> Result<ComponentTestMap> {
    let e = |name: &str, req: &[&str], int: &[&str], opt: &[&str], criteria: &str| {
        (name.to_string(), TestAssignment::new(req, int, opt, criteria))
    };

    let entries = vec![
        // acoustic
        e(
            "40kHz Transducers",
            &["TE-001", "TE-002", "TE-004", "TE-015"],
            &["TE-005", "TE-087"],
            &[],
            "Resonance, phasing, and field mapping within spec",
        ),
        e(
            "6-Channel Amplifiers",
            &["TE-003", "TE-007", "TE-008", "TE-009"],
            &["TE-004", "TE-079"],
            &[],
            "Full drive power with protection limits verified",
        ),
        e(
            "Transducer Array Layer",
            &["TE-010", "TE-011"],
            &["TE-004"],
            &[],
            "Dimensions and seat alignment within tolerance",
        ),
        e(
            "Acoustic Cylinder",
            &["TE-005", "TE-015"],
            &["TE-006", "TE-076"],
            &[],
            "Standing wave and node stability demonstrated",
        ),
        e(
            "Phase Array Controller",
            &["TE-012", "TE-013"],
            &["TE-056", "TE-077", "TE-087"],
            &["TE-014"],
            "Phase resolution and closed-loop control verified",
        ),
        // thermal
        e(
            "Thermal Cameras",
            &["TE-051"],
            &["TE-055", "TE-056", "TE-058", "TE-059"],
            &[],
            "Radiometric calibration against blackbody source",
        ),
        e("Thermocouples Type K", &["TE-016"], &["TE-029"], &["TE-093"], "Calibration within class tolerance"),
        e("RTD PT100 Sensors", &["TE-020"], &[], &["TE-093"], "Calibration within class A tolerance"),
        e(
            "Heated Build Platform",
            &["TE-017", "TE-018"],
            &["TE-058", "TE-076"],
            &[],
            "Uniformity at working temperature",
        ),
        e("Silicon Heating Plates", &["TE-019"], &[], &[], "Rated output at nominal voltage"),
        e(
            "Temperature Controllers",
            &["TE-021", "TE-022"],
            &["TE-029"],
            &[],
            "Tuned loops track setpoint within spec",
        ),
        e("Pyrometers", &["TE-057"], &[], &[], "Agreement with contact measurement"),
        // cooling
        e("Water Pumps", &["TE-024", "TE-025"], &["TE-023"], &["TE-089"], "Nominal flow sustained"),
        e("Radiator Fans", &["TE-026"], &["TE-027"], &[], "Rated airflow delivered"),
        e("Water Cooling Blocks", &["TE-023"], &["TE-027"], &["TE-089"], "Loop balanced, heat rejected"),
        e("Flow Regulators", &["TE-023"], &[], &[], "Loop balanced at nominal flow"),
        // insulation
        e("Ceramic Fiber Blanket", &["TE-028"], &["TE-029"], &[], "Installed per thermal design"),
        e("Ceramic Insulation Plates", &["TE-028"], &["TE-029"], &[], "Installed per thermal design"),
        e("Thermal Isolation Tube", &["TE-030"], &["TE-076"], &[], "Cold-side temperature within limit"),
        // crucible
        e(
            "Graphite Crucibles",
            &["TE-031", "TE-033", "TE-038"],
            &["TE-083"],
            &["TE-040", "TE-088"],
            "Melt capability and cycle life demonstrated",
        ),
        e(
            "Induction Heater Module",
            &["TE-032", "TE-036"],
            &["TE-048", "TE-083"],
            &["TE-039"],
            "Power sweep and supply integration verified",
        ),
        e("Induction Coils", &["TE-034"], &["TE-033", "TE-059"], &["TE-091"], "Coupling within design range"),
        e(
            "Piezo Droplet Dispensers",
            &["TE-035", "TE-037"],
            &["TE-078"],
            &["TE-094"],
            "Repeatable droplet formation",
        ),
        e("Piezo Drivers", &["TE-037"], &[], &[], "Droplet formation with production drivers"),
        e("Magnetic Shielding", &["TE-039"], &[], &[], "Field at cabinet within limit"),
        // power
        e(
            "Mean Well RSP-10000-48",
            &["TE-041", "TE-042"],
            &["TE-048", "TE-079"],
            &["TE-049"],
            "Regulation and integration under machine load",
        ),
        e("DC-DC 48V to 24V Converters", &["TE-043"], &[], &[], "Rated output verified"),
        e("DC-DC 48V to 12V Converters", &["TE-043"], &[], &[], "Rated output verified"),
        e("UPS 3kVA", &["TE-044"], &[], &["TE-086"], "Transfer without controller reset"),
        e("Circuit Breakers 3-Phase 100A", &["TE-050"], &[], &[], "Coordination verified"),
        e(
            "Emergency Stop System",
            &["TE-045", "TE-046"],
            &["TE-047", "TE-069"],
            &["TE-080"],
            "Chain integrity and reaction time verified",
        ),
        // sensing
        e("Load Cells 50kg", &["TE-052"], &["TE-055"], &[], "Calibration within class"),
        e("Accelerometers 3-Axis", &["TE-053"], &["TE-055"], &[], "Sensitivity verified per axis"),
        e("Humidity Sensors", &["TE-060"], &[], &[], "Readings plausible against reference"),
        e("Gas Flow Sensors", &["TE-054"], &["TE-075"], &[], "Calibration on argon"),
        // control
        e(
            "STM32F7 Controllers",
            &["TE-061", "TE-065", "TE-066"],
            &["TE-063"],
            &[],
            "Bring-up, watchdog, and loop timing verified",
        ),
        e("Raspberry Pi 4 8GB", &["TE-062"], &["TE-063"], &[], "Provisioned image boots and joins network"),
        e(
            "Control System",
            &["TE-068", "TE-070"],
            &["TE-047", "TE-055", "TE-069", "TE-077"],
            &["TE-090"],
            "Cabinet integration and fault handling verified",
        ),
        e("Ethernet Switches", &["TE-063"], &[], &[], "All links negotiate at rated speed"),
        e("HMI Touch Screen 15 inch", &["TE-067"], &["TE-098"], &[], "Operator walkthrough complete"),
        e("SSD 1TB Industrial", &["TE-064"], &[], &[], "Endurance check clean"),
        // chamber
        e("Aluminum Chamber Walls", &["TE-071"], &[], &[], "Leak rate within limit"),
        e("Chamber Door Seals", &["TE-071"], &[], &[], "Leak rate within limit"),
        e("HEPA Filters MERV 13", &["TE-074"], &[], &[], "Airflow mapped with filters installed"),
        e("Exhaust Blowers", &["TE-072"], &["TE-074"], &["TE-092"], "Rated flow delivered"),
        e("Dampers Motorized", &["TE-073"], &[], &[], "Full travel under control"),
        e("Gas Manifolds", &["TE-075"], &[], &[], "Purge reaches atmosphere spec"),
    ];

    let group = |name: &str, components: &[&str]| {
        (
            name.to_string(),
            components.iter().map(|s| s.to_string()).collect(),
        )
    };
    let subsystems = vec![
        group(
            "Acoustic Levitation",
            &[
                "40kHz Transducers",
                "6-Channel Amplifiers",
                "Transducer Array Layer",
                "Acoustic Cylinder",
                "Phase Array Controller",
            ],
        ),
        group(
            "Thermal Management",
            &[
                "Heated Build Platform",
                "Silicon Heating Plates",
                "Temperature Controllers",
                "Thermocouples Type K",
                "RTD PT100 Sensors",
                "Pyrometers",
            ],
        ),
        group(
            "Cooling",
            &["Water Pumps", "Radiator Fans", "Water Cooling Blocks", "Flow Regulators"],
        ),
        group(
            "Insulation",
            &["Ceramic Fiber Blanket", "Ceramic Insulation Plates", "Thermal Isolation Tube"],
        ),
        group(
            "Crucible & Deposition",
            &[
                "Graphite Crucibles",
                "Induction Heater Module",
                "Induction Coils",
                "Piezo Droplet Dispensers",
                "Piezo Drivers",
                "Magnetic Shielding",
            ],
        ),
        group(
            "Power Distribution",
            &[
                "Mean Well RSP-10000-48",
                "DC-DC 48V to 24V Converters",
                "DC-DC 48V to 12V Converters",
                "UPS 3kVA",
                "Circuit Breakers 3-Phase 100A",
                "Emergency Stop System",
            ],
        ),
        group(
            "Sensing",
            &[
                "Thermal Cameras",
                "Load Cells 50kg",
                "Accelerometers 3-Axis",
                "Humidity Sensors",
                "Gas Flow Sensors",
            ],
        ),
        group(
            "Control & Compute",
            &[
                "STM32F7 Controllers",
                "Raspberry Pi 4 8GB",
                "Control System",
                "Ethernet Switches",
                "HMI Touch Screen 15 inch",
                "SSD 1TB Industrial",
            ],
        ),
        group(
            "Chamber & Atmosphere",
            &[
                "Aluminum Chamber Walls",
                "Chamber Door Seals",
                "HEPA Filters MERV 13",
                "Exhaust Blowers",
                "Dampers Motorized",
                "Gas Manifolds",
            ],
        ),
    ];

    // The two planning documents never agreed on this list; the union is
    // what the engine treats as the critical path.
    let critical_a = [
        "40kHz Transducers",
        "Phase Array Controller",
        "Thermal Cameras",
        "Control System",
        "Mean Well RSP-10000-48",
        "Graphite Crucibles",
        "Piezo Droplet Dispensers",
    ];
    let critical_b = [
        "40kHz Transducers",
        "Phase Array Controller",
        "Thermal Cameras",
        "Mean Well RSP-10000-48",
        "STM32F7 Controllers",
        "Graphite Crucibles",
        "Induction Heater Module",
    ];

    ComponentTestMap::from_parts(
        entries,
        subsystems,
        critical_a.iter().map(|s| s.to_string()).collect(),
        critical_b.iter().map(|s| s.to_string()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_map_shape() {
        let map = ComponentTestMap::builtin();
        assert!(map.len() >= 40);
        let transducers = map.get("40kHz Transducers").unwrap();
        assert!(transducers.required_tests.contains(&"TE-001".to_string()));
        assert!(transducers.required_tests.len() >= 2);
        assert!(map.get("Complete System").is_none());
        assert_eq!(map.subsystems().len(), 9);
    }

    #[test]
    fn critical_path_is_union() {
        let map = ComponentTestMap::builtin();
        // present in only one source list each
        assert!(map.is_critical("Piezo Droplet Dispensers"));
        assert!(map.is_critical("Induction Heater Module"));
        assert!(map.is_critical("40kHz Transducers"));
        assert!(!map.is_critical("Humidity Sensors"));
    }

    #[test]
    fn reverse_lookup() {
        let map = ComponentTestMap::builtin();
        let users = map.components_for_test("TE-023");
        assert!(users.contains(&"Water Pumps"));
        assert!(users.contains(&"Flow Regulators"));
        assert!(map.components_for_test("TE-999").is_empty());
    }

    #[test]
    fn coverage_counts_per_set() {
        let map = ComponentTestMap::builtin();
        let completed: HashSet<&str> = ["TE-001", "TE-002", "TE-087"].into_iter().collect();
        let coverage = map.test_coverage("40kHz Transducers", &completed).unwrap();
        assert_eq!(coverage.required_total, 4);
        assert_eq!(coverage.required_complete, 2);
        assert_eq!(coverage.integration_complete, 1);
        assert!(coverage.overall_percentage > 0.0);
        assert!(map.test_coverage("Nonexistent", &completed).is_none());
    }

    #[test]
    fn duplicate_entry_rejected() {
        let entry = (
            "Water Pumps".to_string(),
            TestAssignment::new(&["TE-024"], &[], &[], ""),
        );
        let err = ComponentTestMap::from_parts(
            vec![entry.clone(), entry],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::DataIntegrity(_)));
    }
}
