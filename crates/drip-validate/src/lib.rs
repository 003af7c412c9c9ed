//! Interface validation.
//!
//! Pure: reads one interface and the component registry, returns findings.
//! Findings are never errors. An interface validates iff it produced no
//! issues; warnings flag thin data without disqualifying the interface.

use drip_registry::ComponentRegistry;
use drip_schema::{Component, CoolingRegime, Interface, InterfaceType};
use serde::Serialize;

/// Combined thermal load above which an interface needs active cooling, W.
const ACTIVE_COOLING_THRESHOLD_W: f64 = 1000.0;
/// Combined weight above which vibration-sensitive parts are at risk, kg.
const HEAVY_INTERFACE_KG: f64 = 50.0;
/// Current above which wire gauge needs explicit verification, A.
const HIGH_CURRENT_A: f64 = 100.0;
/// Boundary between the low-voltage and high-voltage partitions, V.
const LOW_VOLTAGE_BOUNDARY: f64 = 24.0;
/// Data-rate nominal above which signal integrity needs design work.
const SIGNAL_INTEGRITY_RATE: f64 = 1_000_000.0;
/// Acoustic frequency tolerance as a fraction of the reference.
const FREQUENCY_TOLERANCE: f64 = 0.10;
/// Sides touching parts rated under this need isolation from hot sides, °C.
const LOW_TEMP_LIMIT_C: f64 = 100.0;
/// Sides reaching past this count as hot, °C.
const HIGH_TEMP_LIMIT_C: f64 = 500.0;

/// Validation outcome for one interface.
#[derive(Debug, Clone, Serialize)]
pub struct InterfaceValidation {
    pub icd_number: String,
    /// True iff `issues` is empty.
    pub valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

/// Roll-up over a whole interface registry.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub results: Vec<InterfaceValidation>,
}

/// Validate one interface against the registry.
pub fn validate_interface(
    interface: &Interface,
    registry: &ComponentRegistry,
) -> InterfaceValidation {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    let missing: Vec<&str> = interface
        .all_components()
        .filter(|name| !registry.contains(name))
        .collect();
    if !missing.is_empty() {
        issues.push(format!("Components not found: {}", missing.join(", ")));
    }

    let side_a: Vec<&Component> = resolve(&interface.side_a_components, registry);
    let side_b: Vec<&Component> = resolve(&interface.side_b_components, registry);
    let both: Vec<&Component> = side_a.iter().chain(side_b.iter()).copied().collect();

    if interface.has_type(InterfaceType::Thermal) {
        check_thermal(&side_a, &side_b, &both, &mut issues);
    }
    check_power(&both, &mut issues, &mut warnings);
    if interface.has_type(InterfaceType::Mechanical) {
        check_mechanical(&both, &mut issues);
    }
    if interface.has_type(InterfaceType::Electrical) {
        check_electrical(&both, &mut issues);
    }
    if interface.has_type(InterfaceType::Data) {
        check_data(interface, &mut issues);
    }
    if interface.has_type(InterfaceType::Acoustic) {
        check_acoustic(&both, &mut issues);
    }

    spec_coverage_warnings(interface, &both, &mut warnings);

    InterfaceValidation {
        icd_number: interface.icd_number.clone(),
        valid: issues.is_empty(),
        issues,
        warnings,
    }
}

/// Validate every interface in a registry.
pub fn validate_all(
    interfaces: &drip_registry::InterfaceRegistry,
    registry: &ComponentRegistry,
) -> ValidationSummary {
    let results: Vec<InterfaceValidation> = interfaces
        .all()
        .iter()
        .map(|i| validate_interface(i, registry))
        .collect();
    ValidationSummary {
        total: results.len(),
        valid: results.iter().filter(|r| r.valid).count(),
        results,
    }
}

fn resolve<'a>(names: &[String], registry: &'a ComponentRegistry) -> Vec<&'a Component> {
    names.iter().filter_map(|name| registry.get(name)).collect()
}

fn check_thermal(
    side_a: &[&Component],
    side_b: &[&Component],
    both: &[&Component],
    issues: &mut Vec<String>,
) {
    let temps = |side: &[&Component]| -> Vec<f64> {
        side.iter()
            .filter_map(|c| c.tech_specs.as_ref().and_then(|s| s.max_temp))
            .collect()
    };
    let a = temps(side_a);
    let b = temps(side_b);
    let cold_hot = |cold: &[f64], hot: &[f64]| {
        let coldest = cold.iter().cloned().fold(f64::INFINITY, f64::min);
        let hottest = hot.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        !cold.is_empty()
            && !hot.is_empty()
            && coldest < LOW_TEMP_LIMIT_C
            && hottest > HIGH_TEMP_LIMIT_C
    };
    if cold_hot(&a, &b) || cold_hot(&b, &a) {
        issues.push(
            "High-temp component interfaces with low-temp component; thermal isolation required"
                .to_string(),
        );
    }

    let load: f64 = both
        .iter()
        .filter_map(|c| c.tech_specs.as_ref().and_then(|s| s.thermal_load(c.quantity)))
        .sum();
    let has_active_cooling = both.iter().any(|c| {
        c.tech_specs
            .as_ref()
            .and_then(|s| s.cooling_required)
            .is_some_and(|regime| regime.is_active())
    });
    if load > ACTIVE_COOLING_THRESHOLD_W && !has_active_cooling {
        issues.push(format!(
            "Thermal load {load:.0} W across interface with no active cooling on either side"
        ));
    }
}

fn check_power(both: &[&Component], issues: &mut Vec<String>, warnings: &mut Vec<String>) {
    let consumption: f64 = both
        .iter()
        .filter_map(|c| {
            c.tech_specs
                .as_ref()
                .and_then(|s| s.power_consumption)
                .map(|w| w * f64::from(c.quantity))
        })
        .sum();
    let supply: f64 = both
        .iter()
        .filter_map(|c| {
            c.tech_specs
                .as_ref()
                .and_then(|s| s.power_supply)
                .map(|w| w * f64::from(c.quantity))
        })
        .sum();
    if supply > 0.0 {
        if consumption > supply {
            issues.push(format!("Power deficit: {:.0} W", consumption - supply));
        }
        if consumption > 0.8 * supply {
            warnings.push(format!(
                "Low power margin: {consumption:.0} W draw against {supply:.0} W supply"
            ));
        }
    }
}

fn check_mechanical(both: &[&Component], issues: &mut Vec<String>) {
    let mut mounts: Vec<&str> = both
        .iter()
        .filter_map(|c| c.tech_specs.as_ref().and_then(|s| s.mounting_type.as_deref()))
        .collect();
    mounts.sort_unstable();
    mounts.dedup();
    if mounts.len() > 2 {
        issues.push(format!(
            "Too many distinct mounting types across interface: {}",
            mounts.join(", ")
        ));
    }

    let weight: f64 = both
        .iter()
        .filter_map(|c| {
            c.tech_specs
                .as_ref()
                .and_then(|s| s.weight)
                .map(|kg| kg * f64::from(c.quantity))
        })
        .sum();
    let vibration_sensitive = both
        .iter()
        .any(|c| c.tech_specs.as_ref().and_then(|s| s.accuracy).is_some());
    if weight > HEAVY_INTERFACE_KG && vibration_sensitive {
        issues.push(format!(
            "Heavy interface ({weight:.0} kg) with vibration-sensitive components"
        ));
    }
}

fn check_electrical(both: &[&Component], issues: &mut Vec<String>) {
    let mut voltages: Vec<f64> = both
        .iter()
        .filter_map(|c| c.tech_specs.as_ref().and_then(|s| s.voltage_nominal))
        .collect();
    voltages.sort_by(f64::total_cmp);
    voltages.dedup();
    let low: Vec<f64> = voltages
        .iter()
        .copied()
        .filter(|&v| v <= LOW_VOLTAGE_BOUNDARY)
        .collect();
    let high: Vec<f64> = voltages
        .iter()
        .copied()
        .filter(|&v| v > LOW_VOLTAGE_BOUNDARY)
        .collect();
    if low.len() > 1 || high.len() > 1 {
        issues.push(format!("Incompatible voltage levels: {voltages:?}"));
    }

    let current: f64 = both
        .iter()
        .filter_map(|c| {
            c.tech_specs
                .as_ref()
                .and_then(|s| s.current_draw)
                .map(|a| a * f64::from(c.quantity))
        })
        .sum();
    if current > HIGH_CURRENT_A {
        issues.push(format!(
            "High current interface ({current:.0} A): verify wire gauge"
        ));
    }
}

fn check_data(interface: &Interface, issues: &mut Vec<String>) {
    for requirement in &interface.requirements {
        let is_data_rate = requirement.parameter.to_lowercase().contains("data rate");
        if is_data_rate && requirement.nominal > SIGNAL_INTEGRITY_RATE {
            issues.push(format!(
                "Data rate {} {} on {}: signal integrity design required",
                requirement.nominal, requirement.units, requirement.parameter
            ));
        }
    }
}

fn check_acoustic(both: &[&Component], issues: &mut Vec<String>) {
    let frequencies: Vec<(&str, f64)> = both
        .iter()
        .filter_map(|c| {
            c.tech_specs
                .as_ref()
                .and_then(|s| s.frequency)
                .map(|f| (c.name.as_str(), f))
        })
        .collect();
    let Some(&(_, reference)) = frequencies.first() else {
        return;
    };
    for &(name, frequency) in &frequencies[1..] {
        if (frequency - reference).abs() > FREQUENCY_TOLERANCE * reference {
            issues.push(format!(
                "Acoustic frequency mismatch: {name} at {frequency:.0} Hz vs reference {reference:.0} Hz"
            ));
        }
    }
}

fn spec_coverage_warnings(
    interface: &Interface,
    both: &[&Component],
    warnings: &mut Vec<String>,
) {
    for component in both {
        let specs = component.tech_specs.as_ref();
        if interface.has_type(InterfaceType::Thermal)
            && specs.and_then(|s| s.max_temp).is_none()
        {
            warnings.push(format!(
                "{} missing thermal specifications",
                component.name
            ));
        }
        if interface.has_type(InterfaceType::Electrical)
            && specs.and_then(|s| s.power_consumption).is_none()
        {
            warnings.push(format!(
                "{} missing electrical specifications",
                component.name
            ));
        }
    }
    if interface.requirements.len() < 2 {
        warnings.push(format!(
            "{} declares fewer than 2 requirements",
            interface.icd_number
        ));
    }
}
