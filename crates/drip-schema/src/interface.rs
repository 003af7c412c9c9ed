//! Interface control document records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical domain of a declared interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterfaceType {
    Mechanical,
    Electrical,
    Thermal,
    Data,
    Fluid,
    Acoustic,
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceType::Mechanical => write!(f, "MECHANICAL"),
            InterfaceType::Electrical => write!(f, "ELECTRICAL"),
            InterfaceType::Thermal => write!(f, "THERMAL"),
            InterfaceType::Data => write!(f, "DATA"),
            InterfaceType::Fluid => write!(f, "FLUID"),
            InterfaceType::Acoustic => write!(f, "ACOUSTIC"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterfaceCriticality {
    High,
    Medium,
    Low,
}

impl fmt::Display for InterfaceCriticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceCriticality::High => write!(f, "HIGH"),
            InterfaceCriticality::Medium => write!(f, "MEDIUM"),
            InterfaceCriticality::Low => write!(f, "LOW"),
        }
    }
}

/// A single quantitative requirement on an interface.
///
/// Invariant (checked at registry load): `min ≤ nominal ≤ max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceRequirement {
    pub parameter: String,
    pub nominal: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub units: String,
    pub verification_method: String,
}

impl InterfaceRequirement {
    pub fn new(
        parameter: impl Into<String>,
        nominal: f64,
        min_value: f64,
        max_value: f64,
        units: impl Into<String>,
        verification_method: impl Into<String>,
    ) -> Self {
        InterfaceRequirement {
            parameter: parameter.into(),
            nominal,
            min_value,
            max_value,
            units: units.into(),
            verification_method: verification_method.into(),
        }
    }

    /// True when `min ≤ nominal ≤ max`.
    pub fn range_is_valid(&self) -> bool {
        self.min_value <= self.nominal && self.nominal <= self.max_value
    }
}

/// One declared interface between two sets of components.
///
/// Endpoints reference components by name; resolution against the component
/// registry happens in the validator, so a dangling name is a finding, not a
/// construction error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    /// Unique key, pattern `ICD-NNN`.
    pub icd_number: String,
    pub name: String,
    pub side_a_subsystem: String,
    pub side_a_components: Vec<String>,
    pub side_b_subsystem: String,
    pub side_b_components: Vec<String>,
    /// Nonempty subset of the interface-type enum.
    pub interface_types: Vec<InterfaceType>,
    pub criticality: InterfaceCriticality,
    pub requirements: Vec<InterfaceRequirement>,
    /// Free-form physical detail bags keyed by parameter name.
    pub mechanical_details: BTreeMap<String, String>,
    pub electrical_details: BTreeMap<String, String>,
    pub thermal_details: BTreeMap<String, String>,
    pub verification_procedure: String,
    pub test_equipment: Vec<String>,
    pub revision: String,
    pub date: String,
    pub status: String,
    pub approved_by: Vec<String>,
}

impl Interface {
    pub fn new(
        icd_number: impl Into<String>,
        name: impl Into<String>,
        criticality: InterfaceCriticality,
    ) -> Self {
        Interface {
            icd_number: icd_number.into(),
            name: name.into(),
            side_a_subsystem: String::new(),
            side_a_components: Vec::new(),
            side_b_subsystem: String::new(),
            side_b_components: Vec::new(),
            interface_types: Vec::new(),
            criticality,
            requirements: Vec::new(),
            mechanical_details: BTreeMap::new(),
            electrical_details: BTreeMap::new(),
            thermal_details: BTreeMap::new(),
            verification_procedure: String::new(),
            test_equipment: Vec::new(),
            revision: "1.0".to_string(),
            date: String::new(),
            status: "Draft".to_string(),
            approved_by: Vec::new(),
        }
    }

    pub fn side_a<I, S>(mut self, subsystem: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.side_a_subsystem = subsystem.into();
        self.side_a_components = components.into_iter().map(Into::into).collect();
        self
    }

    pub fn side_b<I, S>(mut self, subsystem: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.side_b_subsystem = subsystem.into();
        self.side_b_components = components.into_iter().map(Into::into).collect();
        self
    }

    pub fn types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = InterfaceType>,
    {
        self.interface_types = types.into_iter().collect();
        self
    }

    pub fn requirement(mut self, requirement: InterfaceRequirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    pub fn mechanical_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.mechanical_details.insert(key.into(), value.into());
        self
    }

    pub fn electrical_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.electrical_details.insert(key.into(), value.into());
        self
    }

    pub fn thermal_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.thermal_details.insert(key.into(), value.into());
        self
    }

    pub fn procedure(mut self, procedure: impl Into<String>) -> Self {
        self.verification_procedure = procedure.into();
        self
    }

    pub fn equipment<I, S>(mut self, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_equipment = equipment.into_iter().map(Into::into).collect();
        self
    }

    pub fn dated(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Iterate component names on both sides, A before B.
    pub fn all_components(&self) -> impl Iterator<Item = &str> {
        self.side_a_components
            .iter()
            .chain(self.side_b_components.iter())
            .map(String::as_str)
    }

    /// True when either side references the component.
    pub fn references(&self, component_name: &str) -> bool {
        self.all_components().any(|c| c == component_name)
    }

    pub fn has_type(&self, interface_type: InterfaceType) -> bool {
        self.interface_types.contains(&interface_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_range_check() {
        let ok = InterfaceRequirement::new("Supply Voltage", 48.0, 45.0, 52.0, "VDC", "DMM");
        assert!(ok.range_is_valid());
        let bad = InterfaceRequirement::new("Supply Voltage", 48.0, 50.0, 46.0, "VDC", "DMM");
        assert!(!bad.range_is_valid());
    }

    #[test]
    fn builder_and_lookups() {
        let icd = Interface::new("ICD-101", "Test Interface", InterfaceCriticality::Medium)
            .side_a("Acoustic", ["40kHz Transducers"])
            .side_b("Power", ["Mean Well RSP-10000-48"])
            .types([InterfaceType::Electrical, InterfaceType::Acoustic]);

        assert!(icd.references("40kHz Transducers"));
        assert!(icd.references("Mean Well RSP-10000-48"));
        assert!(!icd.references("Graphite Crucibles"));
        assert!(icd.has_type(InterfaceType::Acoustic));
        assert!(!icd.has_type(InterfaceType::Thermal));
        assert_eq!(icd.all_components().count(), 2);
    }

    #[test]
    fn criticality_serializes_symbolically() {
        let json = serde_json::to_string(&InterfaceCriticality::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
    }
}
