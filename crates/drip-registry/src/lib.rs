//! Declarative registries for the DRIP engineering data core.
//!
//! Four immutable registries loaded from builtin catalogs (or from
//! caller-supplied data): components, interface control documents,
//! verification tests, and the component-to-test map. On top of them,
//! pure derivations: cost roll-ups, level scaling, raw and dual-domain
//! power budgets, and thermal validation.
//!
//! Everything here is read-only after load. The only mutable state in the
//! system lives in the verification engine (`drip-verify`).

mod catalog;
mod icds;
mod tests_catalog;

pub mod components;
pub mod error;
pub mod interfaces;
pub mod levels;
pub mod power;
pub mod test_map;
pub mod testdefs;
pub mod thermal;

pub use components::{ComponentRegistry, CostTotals};
pub use error::{RegistryError, Result};
pub use interfaces::InterfaceRegistry;
pub use levels::LevelConfig;
pub use power::{
    dual_domain_power, power_architecture_issues, raw_power_budget, DomainSummary,
    DualDomainParams, DualDomainPower, PowerBudget, PowerBudgetLine, PsuSummary,
};
pub use test_map::{ComponentTestMap, TestAssignment, TestCoverage};
pub use testdefs::{TestRegistry, GATEWAY_TEST_ID};
pub use thermal::{validate_thermal, CoolingDemand, ThermalReport};

/// The four registries bundled and cross-validated.
///
/// Construction enforces the cross-registry invariants the individual
/// registries cannot see: every test target names a registered component,
/// and every component-test-map entry references registered components and
/// known test ids. Interface endpoints are deliberately exempt; a dangling
/// endpoint is a validator finding.
#[derive(Debug, Clone)]
pub struct DataCore {
    pub components: ComponentRegistry,
    pub interfaces: InterfaceRegistry,
    pub tests: TestRegistry,
    pub test_map: ComponentTestMap,
}

impl DataCore {
    pub fn new(
        components: ComponentRegistry,
        interfaces: InterfaceRegistry,
        tests: TestRegistry,
        test_map: ComponentTestMap,
    ) -> Result<Self> {
        for test in tests.all() {
            for target in &test.target_components {
                if !components.contains(target) {
                    return Err(RegistryError::UnknownComponent(format!(
                        "{target} (target of {})",
                        test.test_id
                    )));
                }
            }
        }
        for (name, assignment) in test_map.all() {
            if !components.contains(name) {
                return Err(RegistryError::UnknownComponent(format!(
                    "{name} (component-test map entry)"
                )));
            }
            for test_id in assignment.all_tests() {
                if !tests.contains(test_id) {
                    return Err(RegistryError::UnknownTest(format!(
                        "{test_id} (mapped for {name})"
                    )));
                }
            }
        }
        Ok(DataCore {
            components,
            interfaces,
            tests,
            test_map,
        })
    }

    /// All four builtin catalogs, cross-validated.
    pub fn builtin() -> Self {
        match Self::new(
            ComponentRegistry::builtin(),
            InterfaceRegistry::builtin(),
            TestRegistry::builtin(),
            ComponentTestMap::builtin(),
        ) {
            Ok(core) => core,
            Err(err) => unreachable!("builtin catalogs inconsistent: {err}"),
        }
    }
}
