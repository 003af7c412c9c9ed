//! Machine capability levels and scaling queries.
//!
//! Levels 1 through 4 describe the planned scale-up path. Cost and power
//! scale multiplicatively from the level-1 baseline; transducer count and
//! build volume are absolute figures per level.

use serde::Serialize;

use crate::components::ComponentRegistry;
use crate::error::{RegistryError, Result};
use crate::power;

/// Fixed sizing margin applied on top of scaled power draw.
const PSU_CAPACITY_MARGIN: f64 = 1.20;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LevelConfig {
    pub level: u32,
    pub cost_multiplier: f64,
    pub power_multiplier: f64,
    pub transducers: u32,
    /// Build envelope in cm³.
    pub build_volume: f64,
    pub materials: &'static [&'static str],
    /// Deposition rate in cm³/h.
    pub build_rate: f64,
}

const LEVELS: [LevelConfig; 4] = [
    LevelConfig {
        level: 1,
        cost_multiplier: 1.0,
        power_multiplier: 1.0,
        transducers: 18,
        build_volume: 125.0,
        materials: &["Aluminum"],
        build_rate: 1.0,
    },
    LevelConfig {
        level: 2,
        cost_multiplier: 2.5,
        power_multiplier: 2.0,
        transducers: 36,
        build_volume: 1000.0,
        materials: &["Aluminum", "Steel"],
        build_rate: 5.0,
    },
    LevelConfig {
        level: 3,
        cost_multiplier: 4.0,
        power_multiplier: 3.0,
        transducers: 36,
        build_volume: 1000.0,
        materials: &["Aluminum", "Steel", "Titanium"],
        build_rate: 10.0,
    },
    LevelConfig {
        level: 4,
        cost_multiplier: 8.0,
        power_multiplier: 3.75,
        transducers: 72,
        build_volume: 8000.0,
        materials: &["Aluminum", "Steel", "Titanium", "Inconel", "Copper"],
        build_rate: 25.0,
    },
];

/// Table entry for `level`, or `InvalidLevel` outside 1..=4.
pub fn config(level: u32) -> Result<&'static LevelConfig> {
    match level {
        1..=4 => Ok(&LEVELS[(level - 1) as usize]),
        other => Err(RegistryError::InvalidLevel(other)),
    }
}

/// Registry grand total scaled by the level's cost multiplier.
pub fn scaled_cost(registry: &ComponentRegistry, level: u32) -> Result<f64> {
    Ok(registry.grand_totals().total * config(level)?.cost_multiplier)
}

/// System active power scaled by the level's power multiplier.
pub fn scaled_total_power(registry: &ComponentRegistry, level: u32) -> Result<f64> {
    let budget = power::raw_power_budget(registry);
    Ok(budget.total.active_power * config(level)?.power_multiplier)
}

/// Scaled power draw plus the fixed 20% sizing margin.
pub fn required_psu_capacity(registry: &ComponentRegistry, level: u32) -> Result<f64> {
    Ok(scaled_total_power(registry, level)? * PSU_CAPACITY_MARGIN)
}

pub fn transducer_count(level: u32) -> Result<u32> {
    Ok(config(level)?.transducers)
}

pub fn build_volume(level: u32) -> Result<f64> {
    Ok(config(level)?.build_volume)
}

pub fn materials(level: u32) -> Result<&'static [&'static str]> {
    Ok(config(level)?.materials)
}

pub fn build_rate(level: u32) -> Result<f64> {
    Ok(config(level)?.build_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drip_schema::{Component, ComponentCategory, ComponentType, TechnicalSpecs};

    fn registry() -> ComponentRegistry {
        ComponentRegistry::from_components(vec![
            Component::new(
                "Heater",
                ComponentCategory::HeatedBed,
                ComponentType::Cots,
                "",
                1,
                100.0,
            )
            .with_specs(TechnicalSpecs::new().with_power_consumption(1000.0)),
            Component::new(
                "Frame Plate",
                ComponentCategory::Frame,
                ComponentType::Custom,
                "",
                2,
                50.0,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn out_of_range_level_rejected() {
        assert!(matches!(config(0), Err(RegistryError::InvalidLevel(0))));
        assert!(matches!(config(5), Err(RegistryError::InvalidLevel(5))));
        assert!(config(4).is_ok());
    }

    #[test]
    fn cost_and_power_scale_from_baseline() {
        let registry = registry();
        assert_eq!(scaled_cost(&registry, 1).unwrap(), 200.0);
        assert_eq!(scaled_cost(&registry, 2).unwrap(), 500.0);
        assert_eq!(scaled_total_power(&registry, 1).unwrap(), 1000.0);
        assert_eq!(scaled_total_power(&registry, 3).unwrap(), 3000.0);
    }

    #[test]
    fn psu_capacity_carries_margin() {
        let registry = registry();
        assert_eq!(required_psu_capacity(&registry, 1).unwrap(), 1200.0);
    }

    #[test]
    fn absolute_columns() {
        assert_eq!(transducer_count(1).unwrap(), 18);
        assert_eq!(transducer_count(4).unwrap(), 72);
        assert_eq!(build_volume(2).unwrap(), 1000.0);
        assert_eq!(materials(4).unwrap().len(), 5);
        assert_eq!(build_rate(3).unwrap(), 10.0);
    }

    #[test]
    fn no_power_data_scales_to_zero() {
        let registry = ComponentRegistry::from_components(vec![Component::new(
            "Bracket",
            ComponentCategory::Frame,
            ComponentType::Cots,
            "",
            4,
            2.0,
        )])
        .unwrap();
        assert_eq!(scaled_total_power(&registry, 4).unwrap(), 0.0);
        assert_eq!(required_psu_capacity(&registry, 4).unwrap(), 0.0);
    }
}
