//! Component records and category/type enumerations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::specs::TechnicalSpecs;

/// The five physical subsystem categories every component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentCategory {
    Frame,
    HeatedBed,
    Acoustic,
    Crucible,
    PowerControl,
}

impl ComponentCategory {
    /// All categories in declaration order.
    pub const ALL: [ComponentCategory; 5] = [
        ComponentCategory::Frame,
        ComponentCategory::HeatedBed,
        ComponentCategory::Acoustic,
        ComponentCategory::Crucible,
        ComponentCategory::PowerControl,
    ];

    /// Human-readable subsystem label.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentCategory::Frame => "Frame Subsystem",
            ComponentCategory::HeatedBed => "Heated Bed Subsystem",
            ComponentCategory::Acoustic => "Acoustic Cylinder Subsystem",
            ComponentCategory::Crucible => "Crucible Subsystem",
            ComponentCategory::PowerControl => "Power/Control Subsystem",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Commercial off-the-shelf vs. custom-fabricated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Cots,
    Custom,
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentType::Cots => write!(f, "COTS"),
            ComponentType::Custom => write!(f, "CUSTOM"),
        }
    }
}

/// Derive the persistence key for a component name: upper-cased, whitespace
/// replaced with underscores (`"40kHz Transducers"` → `"40KHZ_TRANSDUCERS"`).
pub fn component_key(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect::<String>()
        .to_uppercase()
}

/// One physical part in the master registry.
///
/// `total_cost` is declared by the source data, not rederived; the registry
/// checks `total_cost == quantity × unit_cost` at load and treats a mismatch
/// as a data error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique name within the registry.
    pub name: String,
    pub category: ComponentCategory,
    pub kind: ComponentType,
    /// Free-form specification line from the BOM.
    pub specification: String,
    pub quantity: u32,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub notes: String,
    pub part_number: Option<String>,
    pub supplier: Option<String>,
    pub lead_time_weeks: Option<u32>,
    pub material: Option<String>,
    pub process: Option<String>,
    /// Flagged by data authors when the part needs redesign for scaling.
    pub requires_expansion: bool,
    pub expansion_notes: String,
    pub tech_specs: Option<TechnicalSpecs>,
}

impl Component {
    /// Create a component with `total_cost` derived from quantity × unit cost.
    pub fn new(
        name: impl Into<String>,
        category: ComponentCategory,
        kind: ComponentType,
        specification: impl Into<String>,
        quantity: u32,
        unit_cost: f64,
    ) -> Self {
        Component {
            name: name.into(),
            category,
            kind,
            specification: specification.into(),
            quantity,
            unit_cost,
            total_cost: unit_cost * f64::from(quantity),
            notes: String::new(),
            part_number: None,
            supplier: None,
            lead_time_weeks: None,
            material: None,
            process: None,
            requires_expansion: false,
            expansion_notes: String::new(),
            tech_specs: None,
        }
    }

    /// Persistence key derived from the name.
    pub fn key(&self) -> String {
        component_key(&self.name)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_part_number(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = Some(part_number.into());
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    pub fn with_lead_time_weeks(mut self, weeks: u32) -> Self {
        self.lead_time_weeks = Some(weeks);
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_process(mut self, process: impl Into<String>) -> Self {
        self.process = Some(process.into());
        self
    }

    /// Override the declared total cost (for source rows that round).
    pub fn with_total_cost(mut self, total: f64) -> Self {
        self.total_cost = total;
        self
    }

    pub fn with_specs(mut self, specs: TechnicalSpecs) -> Self {
        self.tech_specs = Some(specs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_derivation() {
        assert_eq!(component_key("40kHz Transducers"), "40KHZ_TRANSDUCERS");
        assert_eq!(
            component_key("Fittings 1/2 NPT to 3/8 Barb"),
            "FITTINGS_1/2_NPT_TO_3/8_BARB"
        );
        assert_eq!(component_key("Frame"), "FRAME");
    }

    #[test]
    fn total_cost_derived_by_default() {
        let c = Component::new(
            "Water Pumps",
            ComponentCategory::HeatedBed,
            ComponentType::Cots,
            "24V centrifugal, 8 L/min",
            2,
            85.0,
        );
        assert_eq!(c.total_cost, 170.0);
        assert_eq!(c.key(), "WATER_PUMPS");
    }

    #[test]
    fn category_serializes_symbolically() {
        let json = serde_json::to_string(&ComponentCategory::PowerControl).unwrap();
        assert_eq!(json, "\"POWER_CONTROL\"");
        assert_eq!(ComponentCategory::Acoustic.label(), "Acoustic Cylinder Subsystem");
    }
}
