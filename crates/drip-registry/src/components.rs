//! Component registry and cost roll-ups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use drip_schema::{Component, ComponentCategory, ComponentType};

use crate::error::{RegistryError, Result};

/// Tolerance for the declared-vs-derived total-cost check; source BOM rows
/// carry currency values with two decimals.
const COST_TOLERANCE: f64 = 0.005;

/// COTS / custom cost partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostTotals {
    pub cots: f64,
    pub custom: f64,
    pub total: f64,
}

impl CostTotals {
    fn add(&mut self, kind: ComponentType, cost: f64) {
        match kind {
            ComponentType::Cots => self.cots += cost,
            ComponentType::Custom => self.custom += cost,
        }
        self.total += cost;
    }
}

/// Insertion-ordered registry of every component in the machine.
///
/// Logically immutable after load except for the expansion-planning flags,
/// which annotate components without affecting any derivation.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    components: Vec<Component>,
    by_name: HashMap<String, usize>,
}

impl ComponentRegistry {
    /// Build a registry from caller-supplied components, enforcing the
    /// load-time invariants: unique names and `total_cost = quantity ×
    /// unit_cost` (within currency rounding).
    pub fn from_components(components: Vec<Component>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(components.len());
        for (idx, component) in components.iter().enumerate() {
            if by_name.insert(component.name.clone(), idx).is_some() {
                return Err(RegistryError::DataIntegrity(format!(
                    "duplicate component name: {}",
                    component.name
                )));
            }
            let derived = component.unit_cost * f64::from(component.quantity);
            if (component.total_cost - derived).abs() > COST_TOLERANCE {
                return Err(RegistryError::DataIntegrity(format!(
                    "component {}: total_cost {} != quantity {} x unit_cost {}",
                    component.name, component.total_cost, component.quantity, component.unit_cost
                )));
            }
        }
        Ok(ComponentRegistry {
            components,
            by_name,
        })
    }

    /// The full builtin catalog.
    pub fn builtin() -> Self {
        match Self::from_components(crate::catalog::components()) {
            Ok(registry) => registry,
            // The builtin catalog is validated by tests; a violation here is
            // a bug in this crate, not caller data.
            Err(err) => unreachable!("builtin component catalog invalid: {err}"),
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// All components in insertion order.
    pub fn all(&self) -> &[Component] {
        &self.components
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.by_name.get(name).map(|&idx| &self.components[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Lookup that surfaces a miss as `UnknownComponent`.
    pub fn require(&self, name: &str) -> Result<&Component> {
        self.get(name)
            .ok_or_else(|| RegistryError::UnknownComponent(name.to_string()))
    }

    pub fn by_category(
        &self,
        category: ComponentCategory,
    ) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.category == category)
    }

    pub fn by_type(&self, kind: ComponentType) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind == kind)
    }

    /// Grand totals over the whole registry, partitioned COTS vs custom.
    pub fn grand_totals(&self) -> CostTotals {
        let mut totals = CostTotals::default();
        for component in &self.components {
            totals.add(component.kind, component.total_cost);
        }
        totals
    }

    /// Per-category totals, same partitioning, in category declaration order.
    pub fn category_totals(&self) -> Vec<(ComponentCategory, CostTotals)> {
        ComponentCategory::ALL
            .iter()
            .map(|&category| {
                let mut totals = CostTotals::default();
                for component in self.by_category(category) {
                    totals.add(component.kind, component.total_cost);
                }
                (category, totals)
            })
            .collect()
    }

    /// Flag a component as needing redesign for scaling.
    pub fn mark_for_expansion(&mut self, name: &str, notes: &str) -> Result<()> {
        let idx = *self
            .by_name
            .get(name)
            .ok_or_else(|| RegistryError::UnknownComponent(name.to_string()))?;
        let component = &mut self.components[idx];
        component.requires_expansion = true;
        component.expansion_notes = notes.to_string();
        Ok(())
    }

    /// Replace the expansion notes on an already-registered component.
    pub fn update_expansion_notes(&mut self, name: &str, notes: &str) -> Result<()> {
        let idx = *self
            .by_name
            .get(name)
            .ok_or_else(|| RegistryError::UnknownComponent(name.to_string()))?;
        self.components[idx].expansion_notes = notes.to_string();
        Ok(())
    }

    /// Components flagged for expansion, in insertion order.
    pub fn components_requiring_expansion(&self) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|c| c.requires_expansion)
            .collect()
    }
}
