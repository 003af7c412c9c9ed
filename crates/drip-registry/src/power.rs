//! Power budget derivations.
//!
//! Two views of the same registry: the raw per-category budget (active
//! draw, supply capability, net, waste heat) and the dual-domain AC/DC
//! split used for PSU sizing. Both are pure functions of the component
//! list; components without power figures simply do not contribute.

use std::collections::BTreeMap;

use serde::Serialize;

use drip_schema::{ComponentCategory, PowerType};

use crate::components::ComponentRegistry;

/// One row of the raw power budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PowerBudgetLine {
    /// Σ power_consumption × quantity, W.
    pub active_power: f64,
    /// Σ power_supply × quantity, W.
    pub power_supply: f64,
    /// active − supply, W. Negative means the category is a net source.
    pub net_power: f64,
    /// Estimated waste heat, W.
    pub thermal_load: f64,
    /// Components contributing power figures.
    pub component_count: usize,
}

/// Per-category budget plus the element-wise `TOTAL` row.
#[derive(Debug, Clone, Serialize)]
pub struct PowerBudget {
    pub by_category: Vec<(ComponentCategory, PowerBudgetLine)>,
    pub total: PowerBudgetLine,
}

impl PowerBudget {
    /// The budget row for one category; every category has a row.
    pub fn category(&self, category: ComponentCategory) -> PowerBudgetLine {
        self.by_category
            .iter()
            .find(|(c, _)| *c == category)
            .map(|&(_, line)| line)
            .unwrap_or_default()
    }
}

/// Compute the raw power budget over every component.
pub fn raw_power_budget(registry: &ComponentRegistry) -> PowerBudget {
    let mut lines: BTreeMap<ComponentCategory, PowerBudgetLine> = ComponentCategory::ALL
        .iter()
        .map(|&c| (c, PowerBudgetLine::default()))
        .collect();

    for component in registry.all() {
        let Some(specs) = &component.tech_specs else {
            continue;
        };
        let qty = f64::from(component.quantity);
        let line = lines.entry(component.category).or_default();
        let mut contributes = false;

        if let Some(consumption) = specs.power_consumption {
            line.active_power += consumption * qty;
            contributes = true;
        }
        if let Some(supply) = specs.power_supply {
            line.power_supply += supply * qty;
            contributes = true;
        }
        if let Some(heat) = specs.thermal_load(component.quantity) {
            line.thermal_load += heat;
        }
        if contributes {
            line.component_count += 1;
        }
        line.net_power = line.active_power - line.power_supply;
    }

    let mut total = PowerBudgetLine::default();
    for line in lines.values() {
        total.active_power += line.active_power;
        total.power_supply += line.power_supply;
        total.thermal_load += line.thermal_load;
        total.component_count += line.component_count;
    }
    total.net_power = total.active_power - total.power_supply;

    // emit rows in category declaration order
    let by_category = ComponentCategory::ALL
        .iter()
        .map(|&c| (c, lines.get(&c).copied().unwrap_or_default()))
        .collect();

    PowerBudget { by_category, total }
}

/// Parameters of the dual-domain split. The PSU figures are declared, not
/// derived; `default_domain` classifies components with no `power_type`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DualDomainParams {
    /// DC supply capacity, W.
    pub psu_capacity: f64,
    /// PSU conversion efficiency, percent.
    pub psu_efficiency: f64,
    pub default_domain: PowerType,
}

impl Default for DualDomainParams {
    fn default() -> Self {
        DualDomainParams {
            psu_capacity: 10_000.0,
            psu_efficiency: 91.0,
            default_domain: PowerType::Dc,
        }
    }
}

/// One electrical domain of the split.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DomainSummary {
    pub components: Vec<String>,
    /// Σ consumption in this domain, W.
    pub total: f64,
    /// Subtotals keyed by nominal voltage (V, rounded).
    pub voltage_groups: BTreeMap<u32, f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PsuSummary {
    pub capacity: f64,
    pub dc_load: f64,
    pub efficiency: f64,
    pub margin: f64,
    pub utilization: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DualDomainPower {
    pub ac: DomainSummary,
    pub dc: DomainSummary,
    pub psu: PsuSummary,
}

/// Split consuming components into mains-fed (AC) and PSU-fed (DC) domains.
///
/// `DUAL`-typed consumers are counted on the DC side: their draw flows
/// through the PSU and belongs in its load figure.
pub fn dual_domain_power(registry: &ComponentRegistry, params: &DualDomainParams) -> DualDomainPower {
    let mut ac = DomainSummary::default();
    let mut dc = DomainSummary::default();

    for component in registry.all() {
        let Some(specs) = &component.tech_specs else {
            continue;
        };
        let Some(consumption) = specs.power_consumption else {
            continue;
        };
        let draw = consumption * f64::from(component.quantity);
        let domain = specs.power_type.unwrap_or(params.default_domain);
        let summary = match domain {
            PowerType::Ac => &mut ac,
            PowerType::Dc | PowerType::Dual => &mut dc,
        };
        summary.components.push(component.name.clone());
        summary.total += draw;
        if let Some(voltage) = specs.power_voltage {
            *summary.voltage_groups.entry(voltage.round() as u32).or_default() += draw;
        }
    }

    let dc_load = dc.total;
    let psu = PsuSummary {
        capacity: params.psu_capacity,
        dc_load,
        efficiency: params.psu_efficiency,
        margin: params.psu_capacity - dc_load,
        utilization: if params.psu_capacity > 0.0 {
            dc_load / params.psu_capacity * 100.0
        } else {
            0.0
        },
    };

    DualDomainPower { ac, dc, psu }
}

/// Architecture-level power findings: deficits, overloaded PSU, and
/// power/control components with no power figures at all.
pub fn power_architecture_issues(
    registry: &ComponentRegistry,
    params: &DualDomainParams,
) -> Vec<String> {
    let mut issues = Vec::new();
    let budget = raw_power_budget(registry);

    if budget.total.active_power > budget.total.power_supply {
        issues.push(format!(
            "Net power deficit: consumption {:.0} W exceeds supply capability {:.0} W",
            budget.total.active_power, budget.total.power_supply
        ));
    }

    let split = dual_domain_power(registry, params);
    if split.psu.dc_load > split.psu.capacity {
        issues.push(format!(
            "PSU overload: DC load {:.0} W exceeds capacity {:.0} W",
            split.psu.dc_load, split.psu.capacity
        ));
    }

    let unspecified: Vec<&str> = registry
        .by_category(ComponentCategory::PowerControl)
        .filter(|c| {
            c.tech_specs
                .as_ref()
                .map_or(true, |s| s.power_consumption.is_none() && s.power_supply.is_none())
        })
        .map(|c| c.name.as_str())
        .collect();
    if !unspecified.is_empty() {
        issues.push(format!(
            "Power/control components without power figures: {}",
            unspecified.join(", ")
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use drip_schema::{Component, ComponentType, TechnicalSpecs};

    fn component(
        name: &str,
        category: ComponentCategory,
        quantity: u32,
        specs: TechnicalSpecs,
    ) -> Component {
        Component::new(name, category, ComponentType::Cots, "", quantity, 1.0).with_specs(specs)
    }

    #[test]
    fn budget_sums_per_category() {
        let registry = ComponentRegistry::from_components(vec![
            component(
                "Heater",
                ComponentCategory::HeatedBed,
                2,
                TechnicalSpecs::new()
                    .with_power_consumption(250.0)
                    .with_efficiency(90.0),
            ),
            component(
                "PSU",
                ComponentCategory::PowerControl,
                1,
                TechnicalSpecs::new().with_power_supply(10_000.0),
            ),
        ])
        .unwrap();

        let budget = raw_power_budget(&registry);
        let heated = budget.category(ComponentCategory::HeatedBed);
        assert_eq!(heated.active_power, 500.0);
        // 500 W at 90% efficiency; the loss fraction is not exactly representable
        assert!((heated.thermal_load - 50.0).abs() < 1e-9);
        assert_eq!(heated.component_count, 1);
        assert_eq!(budget.total.active_power, 500.0);
        assert_eq!(budget.total.power_supply, 10_000.0);
        assert_eq!(budget.total.net_power, -9_500.0);
        assert_eq!(budget.total.component_count, 2);
    }

    #[test]
    fn empty_power_data_gives_zero_totals() {
        let registry = ComponentRegistry::from_components(vec![Component::new(
            "Bracket",
            ComponentCategory::Frame,
            ComponentType::Cots,
            "",
            3,
            1.0,
        )])
        .unwrap();
        let budget = raw_power_budget(&registry);
        assert_eq!(budget.total.active_power, 0.0);
        assert_eq!(budget.total.thermal_load, 0.0);
        assert_eq!(budget.total.component_count, 0);
    }

    #[test]
    fn dual_domain_split_literal() {
        // one AC/240 consumer at 3000 W, one DC/48 consumer at 100 W qty 2
        let registry = ComponentRegistry::from_components(vec![
            component(
                "Induction Heater",
                ComponentCategory::Crucible,
                1,
                TechnicalSpecs::new()
                    .with_power_consumption(3000.0)
                    .with_power(PowerType::Ac, 240.0),
            ),
            component(
                "Amplifier",
                ComponentCategory::Acoustic,
                2,
                TechnicalSpecs::new()
                    .with_power_consumption(100.0)
                    .with_power(PowerType::Dc, 48.0),
            ),
        ])
        .unwrap();

        let params = DualDomainParams::default();
        let split = dual_domain_power(&registry, &params);
        assert_eq!(split.ac.total, 3000.0);
        assert_eq!(split.ac.voltage_groups[&240], 3000.0);
        assert_eq!(split.dc.total, 200.0);
        assert_eq!(split.psu.dc_load, 200.0);
        assert_eq!(split.psu.utilization, 200.0 / 10_000.0 * 100.0);
        assert_eq!(split.psu.margin, 9_800.0);
    }

    #[test]
    fn unspecified_power_type_uses_default_domain() {
        let registry = ComponentRegistry::from_components(vec![component(
            "Mystery Sensor",
            ComponentCategory::PowerControl,
            1,
            TechnicalSpecs::new().with_power_consumption(5.0),
        )])
        .unwrap();

        let split = dual_domain_power(&registry, &DualDomainParams::default());
        assert_eq!(split.dc.total, 5.0);
        assert_eq!(split.ac.total, 0.0);

        let ac_default = DualDomainParams {
            default_domain: PowerType::Ac,
            ..DualDomainParams::default()
        };
        let split = dual_domain_power(&registry, &ac_default);
        assert_eq!(split.ac.total, 5.0);
        assert_eq!(split.dc.total, 0.0);
    }

    #[test]
    fn architecture_issues_flag_overload_and_gaps() {
        let registry = ComponentRegistry::from_components(vec![
            component(
                "Big Load",
                ComponentCategory::Crucible,
                1,
                TechnicalSpecs::new()
                    .with_power_consumption(600.0)
                    .with_power(PowerType::Dc, 48.0),
            ),
            component(
                "Unrated Relay",
                ComponentCategory::PowerControl,
                1,
                TechnicalSpecs::new().with_max_temp(70.0),
            ),
        ])
        .unwrap();

        let params = DualDomainParams {
            psu_capacity: 500.0,
            ..DualDomainParams::default()
        };
        let issues = power_architecture_issues(&registry, &params);
        assert!(issues.iter().any(|i| i.starts_with("Net power deficit")));
        assert!(issues.iter().any(|i| i.starts_with("PSU overload")));
        assert!(issues.iter().any(|i| i.contains("Unrated Relay")));
    }

    #[test]
    fn builtin_catalog_dc_load_within_psu() {
        let registry = ComponentRegistry::builtin();
        let split = dual_domain_power(&registry, &DualDomainParams::default());
        assert!(split.psu.dc_load > 0.0);
        assert!(split.psu.dc_load < split.psu.capacity);
        assert!(split.ac.voltage_groups.contains_key(&240));
    }
}
