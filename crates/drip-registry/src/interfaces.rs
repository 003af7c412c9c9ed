//! Interface control document registry.

use std::collections::HashMap;

use drip_schema::Interface;

use crate::error::{RegistryError, Result};

/// Registry of every declared interface, ordered by declaration.
#[derive(Debug, Clone)]
pub struct InterfaceRegistry {
    interfaces: Vec<Interface>,
    by_icd: HashMap<String, usize>,
}

impl InterfaceRegistry {
    /// Build from caller-supplied interfaces. Load-time invariants: unique
    /// ICD numbers; every requirement satisfies `min ≤ nominal ≤ max`.
    ///
    /// Endpoint component names are deliberately NOT resolved here: a
    /// dangling endpoint is a validator finding, not a load error.
    pub fn from_interfaces(interfaces: Vec<Interface>) -> Result<Self> {
        let mut by_icd = HashMap::with_capacity(interfaces.len());
        for (idx, interface) in interfaces.iter().enumerate() {
            if by_icd.insert(interface.icd_number.clone(), idx).is_some() {
                return Err(RegistryError::DataIntegrity(format!(
                    "duplicate interface id: {}",
                    interface.icd_number
                )));
            }
            for requirement in &interface.requirements {
                if !requirement.range_is_valid() {
                    return Err(RegistryError::DataIntegrity(format!(
                        "{} requirement {}: nominal {} outside [{}, {}]",
                        interface.icd_number,
                        requirement.parameter,
                        requirement.nominal,
                        requirement.min_value,
                        requirement.max_value
                    )));
                }
            }
        }
        Ok(InterfaceRegistry {
            interfaces,
            by_icd,
        })
    }

    /// The builtin ICD catalog.
    pub fn builtin() -> Self {
        match Self::from_interfaces(crate::icds::interfaces()) {
            Ok(registry) => registry,
            Err(err) => unreachable!("builtin interface catalog invalid: {err}"),
        }
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    pub fn all(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn get(&self, icd_number: &str) -> Option<&Interface> {
        self.by_icd.get(icd_number).map(|&idx| &self.interfaces[idx])
    }

    /// ICD lookup that surfaces a miss as `UnknownInterface`.
    pub fn require(&self, icd_number: &str) -> Result<&Interface> {
        self.get(icd_number)
            .ok_or_else(|| RegistryError::UnknownInterface(icd_number.to_string()))
    }

    /// Interfaces with either endpoint in the named subsystem.
    pub fn by_subsystem<'a>(&'a self, subsystem: &'a str) -> impl Iterator<Item = &'a Interface> {
        self.interfaces
            .iter()
            .filter(move |i| i.side_a_subsystem == subsystem || i.side_b_subsystem == subsystem)
    }

    /// Interfaces referencing the component on either side.
    pub fn by_component<'a>(&'a self, component: &'a str) -> impl Iterator<Item = &'a Interface> {
        self.interfaces.iter().filter(move |i| i.references(component))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drip_schema::{InterfaceCriticality, InterfaceRequirement, InterfaceType};

    fn sample() -> Vec<Interface> {
        vec![
            Interface::new("ICD-001", "Acoustic to Thermal", InterfaceCriticality::High)
                .side_a("Acoustic", ["Acoustic Cylinder"])
                .side_b("Thermal", ["Thermal Isolation Tube"])
                .types([InterfaceType::Mechanical, InterfaceType::Thermal]),
            Interface::new("ICD-002", "Control to Power", InterfaceCriticality::High)
                .side_a("Control", ["Control System"])
                .side_b("Power", ["Mean Well RSP-10000-48"])
                .types([InterfaceType::Electrical, InterfaceType::Data]),
        ]
    }

    #[test]
    fn lookups() {
        let registry = InterfaceRegistry::from_interfaces(sample()).unwrap();
        assert!(registry.get("ICD-001").is_some());
        assert!(registry.get("ICD-099").is_none());
        assert!(matches!(
            registry.require("ICD-099"),
            Err(RegistryError::UnknownInterface(_))
        ));
        assert_eq!(registry.by_subsystem("Control").count(), 1);
        assert_eq!(registry.by_component("Acoustic Cylinder").count(), 1);
        assert_eq!(registry.by_component("Nonexistent").count(), 0);
    }

    #[test]
    fn invalid_requirement_range_is_data_error() {
        let mut interfaces = sample();
        interfaces[0] = interfaces[0].clone().requirement(InterfaceRequirement::new(
            "Thermal Leakage",
            200.0,
            0.0,
            100.0,
            "W",
            "Calorimetry",
        ));
        let err = InterfaceRegistry::from_interfaces(interfaces).unwrap_err();
        assert!(matches!(err, RegistryError::DataIntegrity(_)));
        assert!(err.to_string().contains("Thermal Leakage"));
    }

    #[test]
    fn duplicate_icd_is_data_error() {
        let mut interfaces = sample();
        interfaces[1].icd_number = "ICD-001".to_string();
        assert!(matches!(
            InterfaceRegistry::from_interfaces(interfaces),
            Err(RegistryError::DataIntegrity(_))
        ));
    }

    #[test]
    fn builtin_catalog_loads() {
        let registry = InterfaceRegistry::builtin();
        assert!(registry.len() >= 8);
        let icd = registry.require("ICD-001").unwrap();
        assert!(!icd.requirements.is_empty());
        assert!(registry.by_component("40kHz Transducers").count() >= 2);
    }
}
