//! Thermal budget and cooling validation.

use std::collections::BTreeMap;

use serde::Serialize;

use drip_schema::{ComponentCategory, CoolingRegime};

use crate::components::ComponentRegistry;

/// Heat the warning rules treat as "high" for the whole machine, W.
const TOTAL_HEAT_WARNING_W: f64 = 5000.0;
/// Heat the warning rules treat as "high" inside the acoustic column, W.
const ACOUSTIC_HEAT_WARNING_W: f64 = 100.0;
/// Components rated below this survive only with managed cooling, °C.
const CRITICAL_MAX_TEMP_C: f64 = 100.0;
/// Recommended minimum coolant flow when any liquid loop exists, L/min.
const LIQUID_FLOW_MINIMUM: f64 = 5.0;
/// CFM of airflow recommended per 3 W of forced-air heat load.
const AIRFLOW_WATTS_PER_CFM: f64 = 3.0;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CoolingDemand {
    pub component_count: usize,
    /// Aggregate heat handled by this regime, W.
    pub heat_load: f64,
}

/// Full thermal validation report.
#[derive(Debug, Clone, Serialize)]
pub struct ThermalReport {
    /// Σ waste heat over all consuming components, W.
    pub total_heat_generation: f64,
    pub cooling_requirements: BTreeMap<CoolingRegime, CoolingDemand>,
    /// Components whose `max_temp` is below 100 °C.
    pub critical_components: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Derive the thermal report from the registry.
pub fn validate_thermal(registry: &ComponentRegistry) -> ThermalReport {
    let mut total_heat = 0.0;
    let mut acoustic_heat = 0.0;
    let mut cooling: BTreeMap<CoolingRegime, CoolingDemand> = BTreeMap::new();
    let mut critical = Vec::new();

    for component in registry.all() {
        let Some(specs) = &component.tech_specs else {
            continue;
        };
        let heat = specs.thermal_load(component.quantity).unwrap_or(0.0);
        total_heat += heat;
        if component.category == ComponentCategory::Acoustic {
            acoustic_heat += heat;
        }
        if let Some(regime) = specs.cooling_required {
            let demand = cooling.entry(regime).or_default();
            demand.component_count += 1;
            demand.heat_load += heat;
        }
        if let Some(max_temp) = specs.max_temp {
            if max_temp < CRITICAL_MAX_TEMP_C {
                critical.push(component.name.clone());
            }
        }
    }

    let mut warnings = Vec::new();
    if total_heat > TOTAL_HEAT_WARNING_W {
        warnings.push(format!(
            "High total heat generation: {total_heat:.0} W exceeds {TOTAL_HEAT_WARNING_W:.0} W"
        ));
    }
    if acoustic_heat > ACOUSTIC_HEAT_WARNING_W {
        warnings.push(format!(
            "Acoustic subsystem heat {acoustic_heat:.0} W exceeds {ACOUSTIC_HEAT_WARNING_W:.0} W"
        ));
    }

    let mut recommendations = Vec::new();
    if cooling.contains_key(&CoolingRegime::Liquid) {
        recommendations.push(format!(
            "Liquid cooling loop: maintain at least {LIQUID_FLOW_MINIMUM:.0} L/min coolant flow"
        ));
    }
    if let Some(forced) = cooling.get(&CoolingRegime::ForcedAir) {
        recommendations.push(format!(
            "Forced-air cooling: provide {:.0} CFM airflow",
            forced.heat_load / AIRFLOW_WATTS_PER_CFM
        ));
    }

    ThermalReport {
        total_heat_generation: total_heat,
        cooling_requirements: cooling,
        critical_components: critical,
        warnings,
        recommendations,
    }
}
