//! Technical specification records.
//!
//! Every field of [`TechnicalSpecs`] is optional: absence means the source
//! data does not specify the value, which is distinct from an explicit zero.
//! Derivations downstream (power budget, thermal budget, interface
//! validation) must preserve that distinction — a component with no
//! `efficiency` falls through to a documented default, a component with
//! `efficiency: 100.0` does not.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fraction of consumed power assumed lost as heat when a component declares
/// neither `thermal_dissipation` nor `efficiency`.
pub const DEFAULT_HEAT_LOSS_FRACTION: f64 = 0.20;

/// Which electrical domain a component draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerType {
    /// Mains-fed; bypasses the DC power supply entirely.
    Ac,
    /// Fed from the PSU-backed DC distribution.
    Dc,
    /// Draws from both domains (e.g., a PSU itself).
    Dual,
}

impl fmt::Display for PowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerType::Ac => write!(f, "AC"),
            PowerType::Dc => write!(f, "DC"),
            PowerType::Dual => write!(f, "DUAL"),
        }
    }
}

/// Cooling regime a component requires to stay inside its thermal envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoolingRegime {
    None,
    Passive,
    ForcedAir,
    Liquid,
}

impl CoolingRegime {
    /// True for regimes that move heat actively.
    pub fn is_active(&self) -> bool {
        matches!(self, CoolingRegime::ForcedAir | CoolingRegime::Liquid)
    }
}

impl fmt::Display for CoolingRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoolingRegime::None => write!(f, "NONE"),
            CoolingRegime::Passive => write!(f, "PASSIVE"),
            CoolingRegime::ForcedAir => write!(f, "FORCED_AIR"),
            CoolingRegime::Liquid => write!(f, "LIQUID"),
        }
    }
}

/// Typed technical specification bag attached to a component.
///
/// Units are fixed per field (W, V, A, kg, °C, Hz, %) except
/// `thermal_dissipation`, which the source data overloads: W for heat
/// sources, W/m·K for insulation materials. The numeric is preserved as
/// given; context lives in the component's notes. Derivations only read it
/// for components that also declare `power_consumption`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSpecs {
    /// Continuous draw in W.
    pub power_consumption: Option<f64>,
    /// Supply capability in W (PSUs, DC-DC converters).
    pub power_supply: Option<f64>,
    /// Electrical domain; unset means "not specified", classified by a
    /// configurable default at the dual-domain split.
    pub power_type: Option<PowerType>,
    /// Nominal supply voltage in V for domain binning.
    pub power_voltage: Option<f64>,
    /// Nominal operating voltage in V (electrical compatibility checks).
    pub voltage_nominal: Option<f64>,
    /// Acceptable voltage range (min, max) in V.
    pub voltage_range: Option<(f64, f64)>,
    /// Current draw in A.
    pub current_draw: Option<f64>,
    /// Mass in kg per unit.
    pub weight: Option<f64>,
    /// Named dimension scalars in mm (e.g. "L"/"W"/"H" or "D"/"H").
    pub dimensions: Option<BTreeMap<String, f64>>,
    pub mounting_type: Option<String>,
    pub material_spec: Option<String>,
    /// Operating temperature range (min, max) in °C.
    pub operating_temp: Option<(f64, f64)>,
    /// Maximum survivable temperature in °C.
    pub max_temp: Option<f64>,
    /// Heat figure; unit is context-dependent (see type docs).
    pub thermal_dissipation: Option<f64>,
    pub cooling_required: Option<CoolingRegime>,
    /// Conversion or electroacoustic efficiency in percent (0–100).
    pub efficiency: Option<f64>,
    /// Operating frequency in Hz.
    pub frequency: Option<f64>,
    /// Accuracy as ± scalar in the component's native units.
    pub accuracy: Option<f64>,
    /// Flow rate in native units (L/min for liquid, CFM for air).
    pub flow_rate: Option<f64>,
    /// Connector / port designators.
    pub connections: Vec<String>,
    pub control_signal: Option<String>,
}

impl TechnicalSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimated waste heat in W for `quantity` units, or `None` when the
    /// component declares no power consumption.
    ///
    /// Prefers the declared `thermal_dissipation`; otherwise derives the
    /// loss from `efficiency`; otherwise applies the 20% default.
    pub fn thermal_load(&self, quantity: u32) -> Option<f64> {
        let consumption = self.power_consumption?;
        let qty = f64::from(quantity);
        if let Some(dissipation) = self.thermal_dissipation {
            return Some(dissipation * qty);
        }
        if let Some(efficiency) = self.efficiency {
            return Some(consumption * qty * (1.0 - efficiency / 100.0));
        }
        Some(consumption * qty * DEFAULT_HEAT_LOSS_FRACTION)
    }

    // Builder-style setters, used by the declarative catalogs.

    pub fn with_power_consumption(mut self, watts: f64) -> Self {
        self.power_consumption = Some(watts);
        self
    }

    pub fn with_power_supply(mut self, watts: f64) -> Self {
        self.power_supply = Some(watts);
        self
    }

    pub fn with_power(mut self, power_type: PowerType, voltage: f64) -> Self {
        self.power_type = Some(power_type);
        self.power_voltage = Some(voltage);
        self
    }

    pub fn with_voltage_nominal(mut self, volts: f64) -> Self {
        self.voltage_nominal = Some(volts);
        self
    }

    pub fn with_voltage_range(mut self, min: f64, max: f64) -> Self {
        self.voltage_range = Some((min, max));
        self
    }

    pub fn with_current_draw(mut self, amps: f64) -> Self {
        self.current_draw = Some(amps);
        self
    }

    pub fn with_weight(mut self, kg: f64) -> Self {
        self.weight = Some(kg);
        self
    }

    pub fn with_dimensions<I, S>(mut self, dims: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.dimensions = Some(dims.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    pub fn with_mounting_type(mut self, mounting: impl Into<String>) -> Self {
        self.mounting_type = Some(mounting.into());
        self
    }

    pub fn with_material_spec(mut self, spec: impl Into<String>) -> Self {
        self.material_spec = Some(spec.into());
        self
    }

    pub fn with_operating_temp(mut self, min: f64, max: f64) -> Self {
        self.operating_temp = Some((min, max));
        self
    }

    pub fn with_max_temp(mut self, celsius: f64) -> Self {
        self.max_temp = Some(celsius);
        self
    }

    pub fn with_thermal_dissipation(mut self, value: f64) -> Self {
        self.thermal_dissipation = Some(value);
        self
    }

    pub fn with_cooling(mut self, regime: CoolingRegime) -> Self {
        self.cooling_required = Some(regime);
        self
    }

    pub fn with_efficiency(mut self, percent: f64) -> Self {
        self.efficiency = Some(percent);
        self
    }

    pub fn with_frequency(mut self, hz: f64) -> Self {
        self.frequency = Some(hz);
        self
    }

    pub fn with_accuracy(mut self, plus_minus: f64) -> Self {
        self.accuracy = Some(plus_minus);
        self
    }

    pub fn with_flow_rate(mut self, rate: f64) -> Self {
        self.flow_rate = Some(rate);
        self
    }

    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_control_signal(mut self, signal: impl Into<String>) -> Self {
        self.control_signal = Some(signal.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thermal_load_prefers_declared_dissipation() {
        let specs = TechnicalSpecs::new()
            .with_power_consumption(100.0)
            .with_efficiency(90.0)
            .with_thermal_dissipation(7.0);
        assert_eq!(specs.thermal_load(2), Some(14.0));
    }

    #[test]
    fn thermal_load_from_efficiency() {
        let specs = TechnicalSpecs::new()
            .with_power_consumption(100.0)
            .with_efficiency(80.0);
        let load = specs.thermal_load(1).unwrap();
        assert!((load - 20.0).abs() < 1e-9);
    }

    #[test]
    fn thermal_load_default_fraction() {
        let specs = TechnicalSpecs::new().with_power_consumption(50.0);
        assert_eq!(specs.thermal_load(2), Some(20.0));
    }

    #[test]
    fn thermal_load_requires_consumption() {
        let specs = TechnicalSpecs::new().with_thermal_dissipation(500.0);
        assert_eq!(specs.thermal_load(1), None);
    }

    #[test]
    fn explicit_full_efficiency_is_not_defaulted() {
        // efficiency == 100 means zero loss, not "unspecified"
        let specs = TechnicalSpecs::new()
            .with_power_consumption(100.0)
            .with_efficiency(100.0);
        assert_eq!(specs.thermal_load(1), Some(0.0));
    }

    #[test]
    fn power_type_serializes_symbolically() {
        assert_eq!(serde_json::to_string(&PowerType::Ac).unwrap(), "\"AC\"");
        assert_eq!(serde_json::to_string(&PowerType::Dual).unwrap(), "\"DUAL\"");
        assert_eq!(
            serde_json::to_string(&CoolingRegime::ForcedAir).unwrap(),
            "\"FORCED_AIR\""
        );
    }

    #[test]
    fn unknown_enum_name_rejected() {
        assert!(serde_json::from_str::<PowerType>("\"MAINS\"").is_err());
    }
}
