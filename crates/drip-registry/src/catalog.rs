//! Builtin component catalog.
//!
//! One entry per physical part in the machine BOM, plus the `Complete
//! System` pseudo-component that system-level acceptance tests target.
//! Costs are USD; every row satisfies `total_cost = quantity × unit_cost`.

use drip_schema::{
    Component, ComponentCategory, ComponentType, CoolingRegime, PowerType, TechnicalSpecs,
};

use ComponentCategory::{Acoustic, Crucible, Frame, HeatedBed, PowerControl};
use ComponentType::{Cots, Custom};

fn cots(
    name: &str,
    category: ComponentCategory,
    specification: &str,
    quantity: u32,
    unit_cost: f64,
) -> Component {
    Component::new(name, category, Cots, specification, quantity, unit_cost)
}

fn custom(
    name: &str,
    category: ComponentCategory,
    specification: &str,
    quantity: u32,
    unit_cost: f64,
) -> Component {
    Component::new(name, category, Custom, specification, quantity, unit_cost)
}

/// The full builtin catalog, insertion-ordered by subsystem.
pub(crate) fn components() -> Vec<Component> {
    let mut parts = Vec::with_capacity(54);
    acoustic(&mut parts);
    heated_bed(&mut parts);
    crucible(&mut parts);
    power_control(&mut parts);
    frame(&mut parts);
    parts
}

fn acoustic(parts: &mut Vec<Component>) {
    parts.push(
        cots("40kHz Transducers", Acoustic, "40 kHz ultrasonic, 16mm", 18, 2.50)
            .with_notes("6 per ring x 3 rings")
            .with_supplier("Manorshi")
            .with_specs(
                TechnicalSpecs::new()
                    .with_power_consumption(10.0)
                    .with_power(PowerType::Dc, 48.0)
                    .with_frequency(40_000.0)
                    .with_efficiency(80.0)
                    .with_max_temp(60.0)
                    .with_cooling(CoolingRegime::Passive),
            ),
    );
    parts.push(
        cots("6-Channel Amplifiers", Acoustic, "Class D, 6x100W", 4, 15.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(350.0)
                .with_power(PowerType::Dc, 48.0)
                .with_voltage_nominal(48.0)
                .with_efficiency(65.0)
                .with_max_temp(85.0)
                .with_cooling(CoolingRegime::ForcedAir),
        ),
    );
    parts.push(
        custom("Transducer Array Layer", Acoustic, "Machined ring, 6 transducer seats", 3, 400.0)
            .with_material("Aluminum 6061")
            .with_process("CNC milling"),
    );
    parts.push(
        custom("Acoustic Cylinder", Acoustic, "Resonant chamber housing", 1, 600.0)
            .with_material("Aluminum 6061")
            .with_process("CNC turning")
            .with_specs(
                TechnicalSpecs::new()
                    .with_max_temp(150.0)
                    .with_weight(8.5)
                    .with_dimensions([("D", 220.0), ("H", 340.0)]),
            ),
    );
    parts.push(
        custom("Phase Array Controller", Acoustic, "18-channel phase/amplitude driver", 1, 450.0)
            .with_specs(
                TechnicalSpecs::new()
                    .with_power_consumption(25.0)
                    .with_power(PowerType::Dc, 12.0)
                    .with_max_temp(70.0)
                    .with_control_signal("SPI"),
            ),
    );
}

fn heated_bed(parts: &mut Vec<Component>) {
    parts.push(
        cots("Thermal Cameras", HeatedBed, "LWIR 640x480, GigE", 2, 2900.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(10.0)
                .with_power(PowerType::Dc, 24.0)
                .with_accuracy(2.0)
                .with_max_temp(50.0),
        ),
    );
    parts.push(
        cots("Thermocouples Type K", HeatedBed, "Type K, glass braid, 2m", 8, 12.0).with_specs(
            TechnicalSpecs::new().with_max_temp(800.0).with_accuracy(1.5),
        ),
    );
    parts.push(
        cots("RTD PT100 Sensors", HeatedBed, "PT100 class A, 4-wire", 6, 18.0).with_specs(
            TechnicalSpecs::new().with_max_temp(400.0).with_accuracy(0.3),
        ),
    );
    parts.push(
        custom("Heated Build Platform", HeatedBed, "Cast heater plate, 300mm", 1, 450.0)
            .with_material("Aluminum MIC-6")
            .with_specs(
                TechnicalSpecs::new()
                    .with_power_consumption(2000.0)
                    .with_power(PowerType::Ac, 240.0)
                    .with_max_temp(500.0)
                    .with_thermal_dissipation(100.0),
            ),
    );
    parts.push(
        cots("Silicon Heating Plates", HeatedBed, "Silicone pad, 200x200mm", 4, 35.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(250.0)
                .with_power(PowerType::Ac, 120.0)
                .with_max_temp(230.0),
        ),
    );
    parts.push(
        cots("Temperature Controllers", HeatedBed, "PID, SSR output", 4, 45.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(5.0)
                .with_power(PowerType::Ac, 120.0)
                .with_max_temp(55.0)
                .with_accuracy(0.5),
        ),
    );
    parts.push(
        cots("Pyrometers", HeatedBed, "2-color ratio, 250-2000C", 2, 1250.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(4.0)
                .with_power(PowerType::Dc, 24.0)
                .with_accuracy(1.0)
                .with_max_temp(65.0),
        ),
    );
    parts.push(
        cots("Water Pumps", HeatedBed, "24V centrifugal, 8 L/min", 2, 85.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(60.0)
                .with_power(PowerType::Dc, 24.0)
                .with_flow_rate(8.0)
                .with_max_temp(60.0),
        ),
    );
    parts.push(
        cots("Radiator Fans", HeatedBed, "120mm PWM", 6, 12.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(6.0)
                .with_power(PowerType::Dc, 12.0)
                .with_max_temp(70.0),
        ),
    );
    parts.push(
        cots("Water Cooling Blocks", HeatedBed, "Copper cold plate, 40x80mm", 4, 28.0)
            .with_material("Copper C110")
            .with_specs(TechnicalSpecs::new().with_max_temp(110.0)),
    );
    parts.push(
        cots("Flow Regulators", HeatedBed, "Needle valve with meter", 2, 42.0)
            .with_specs(TechnicalSpecs::new().with_flow_rate(10.0)),
    );
    parts.push(cots(
        "Fittings 1/2 NPT to 3/8 Barb",
        HeatedBed,
        "Brass hose fitting",
        24,
        2.25,
    ));
    parts.push(
        cots("Ceramic Fiber Blanket", HeatedBed, "25mm, 128 kg/m3", 2, 65.0)
            // thermal_dissipation here is conductivity in W/m.K, not watts
            .with_notes("Thermal conductivity 0.12 W/m.K at 600C")
            .with_specs(
                TechnicalSpecs::new()
                    .with_max_temp(1260.0)
                    .with_thermal_dissipation(0.12),
            ),
    );
    parts.push(
        cots("Ceramic Insulation Plates", HeatedBed, "Calcium silicate, 20mm", 6, 22.0)
            .with_specs(TechnicalSpecs::new().with_max_temp(1000.0)),
    );
    parts.push(
        custom("Thermal Isolation Tube", HeatedBed, "Layered ceramic standoff", 1, 350.0)
            .with_material("Alumina / calcium silicate")
            .with_specs(TechnicalSpecs::new().with_max_temp(900.0)),
    );
}

fn crucible(parts: &mut Vec<Component>) {
    parts.push(
        cots("Graphite Crucibles", Crucible, "High-purity graphite, 250ml", 3, 95.0)
            .with_material("Graphite")
            .with_specs(
                TechnicalSpecs::new().with_max_temp(3000.0).with_weight(1.2),
            ),
    );
    parts.push(
        cots("Induction Heater Module", Crucible, "3 kW ZVS induction driver", 1, 700.0)
            .with_specs(
                TechnicalSpecs::new()
                    .with_power_consumption(3000.0)
                    .with_power(PowerType::Ac, 240.0)
                    .with_efficiency(85.0)
                    .with_max_temp(65.0)
                    .with_weight(9.0)
                    .with_cooling(CoolingRegime::Liquid),
            ),
    );
    parts.push(
        custom("Induction Coils", Crucible, "Water-cooled copper coil set", 1, 250.0)
            .with_material("Copper C110")
            .with_process("Tube winding")
            .with_specs(
                TechnicalSpecs::new()
                    .with_max_temp(200.0)
                    .with_cooling(CoolingRegime::Liquid),
            ),
    );
    parts.push(
        cots("Piezo Droplet Dispensers", Crucible, "Piezo jetting head", 25, 32.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(8.0)
                .with_power(PowerType::Dc, 48.0)
                .with_frequency(1500.0)
                .with_max_temp(120.0)
                .with_accuracy(0.05),
        ),
    );
    parts.push(
        cots("Piezo Drivers", Crucible, "High-voltage pulse driver", 5, 48.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(40.0)
                .with_power(PowerType::Dc, 48.0)
                .with_max_temp(70.0),
        ),
    );
    parts.push(
        cots("Material Wire Feeders", Crucible, "Stepper-driven wire feed", 2, 180.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(50.0)
                .with_power(PowerType::Dc, 24.0)
                .with_max_temp(60.0),
        ),
    );
    parts.push(
        cots("Linear Actuators", Crucible, "Ball-screw, 100mm stroke", 4, 75.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(30.0)
                .with_power(PowerType::Dc, 24.0)
                .with_accuracy(0.1)
                .with_max_temp(65.0),
        ),
    );
    parts.push(
        custom("Magnetic Shielding", Crucible, "Mu-metal enclosure panels", 1, 220.0)
            .with_material("Mu-metal")
            .with_specs(TechnicalSpecs::new().with_max_temp(350.0)),
    );
}

fn power_control(parts: &mut Vec<Component>) {
    parts.push(
        cots("Mean Well RSP-10000-48", PowerControl, "10 kW 48V PSU", 1, 1850.0)
            .with_part_number("RSP-10000-48")
            .with_supplier("Mean Well")
            .with_specs(
                TechnicalSpecs::new()
                    .with_power_supply(10_000.0)
                    .with_power(PowerType::Ac, 240.0)
                    .with_efficiency(91.0)
                    .with_max_temp(70.0)
                    .with_weight(16.0)
                    .with_cooling(CoolingRegime::ForcedAir),
            ),
    );
    parts.push(
        cots("DC-DC 48V to 24V Converters", PowerControl, "480W isolated", 3, 40.0).with_specs(
            TechnicalSpecs::new()
                .with_power_supply(480.0)
                .with_voltage_nominal(24.0)
                .with_efficiency(92.0),
        ),
    );
    parts.push(
        cots("DC-DC 48V to 12V Converters", PowerControl, "240W isolated", 2, 35.0).with_specs(
            TechnicalSpecs::new()
                .with_power_supply(240.0)
                .with_voltage_nominal(12.0)
                .with_efficiency(90.0),
        ),
    );
    parts.push(
        cots("UPS 3kVA", PowerControl, "Online double-conversion", 1, 950.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(100.0)
                .with_power(PowerType::Ac, 240.0)
                .with_max_temp(40.0)
                .with_weight(28.0),
        ),
    );
    parts.push(
        cots("Circuit Breakers 3-Phase 100A", PowerControl, "C-curve, DIN rail", 2, 120.0)
            .with_specs(TechnicalSpecs::new().with_voltage_nominal(240.0)),
    );
    parts.push(cots("Fuses 250V 10A", PowerControl, "Ceramic cartridge", 12, 1.50));
    parts.push(
        custom("Emergency Stop System", PowerControl, "Dual-channel safety relay loop", 1, 280.0)
            .with_specs(
                TechnicalSpecs::new()
                    .with_power_consumption(5.0)
                    .with_power(PowerType::Dc, 24.0),
            ),
    );
    parts.push(cots("Power Cables AWG 2", PowerControl, "Welding cable, per meter", 10, 18.0));
    parts.push(cots(
        "Anderson Connectors 175A",
        PowerControl,
        "SB175 grey",
        8,
        9.50,
    ));
    parts.push(
        cots("Load Cells 50kg", PowerControl, "Strain gauge, C3", 3, 45.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(0.5)
                .with_power(PowerType::Dc, 5.0)
                .with_accuracy(0.02),
        ),
    );
    parts.push(
        cots("Accelerometers 3-Axis", PowerControl, "MEMS, ±16g", 4, 28.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(0.2)
                .with_power(PowerType::Dc, 5.0)
                .with_accuracy(0.01),
        ),
    );
    parts.push(
        cots("Humidity Sensors", PowerControl, "RH/T combined, I2C", 2, 15.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(0.1)
                .with_power(PowerType::Dc, 5.0),
        ),
    );
    parts.push(
        cots("Gas Flow Sensors", PowerControl, "Thermal mass flow, argon", 2, 85.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(1.5)
                .with_power(PowerType::Dc, 24.0)
                .with_flow_rate(50.0)
                .with_accuracy(2.0),
        ),
    );
    parts.push(
        cots("STM32F7 Controllers", PowerControl, "Cortex-M7 board", 3, 25.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(3.0)
                .with_power(PowerType::Dc, 5.0),
        ),
    );
    parts.push(
        cots("Raspberry Pi 4 8GB", PowerControl, "SBC, 8GB RAM", 2, 75.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(15.0)
                .with_power(PowerType::Dc, 5.0)
                .with_max_temp(85.0),
        ),
    );
    parts.push(
        custom("Control System", PowerControl, "Main control cabinet assembly", 1, 1200.0)
            .with_specs(
                TechnicalSpecs::new()
                    .with_power_consumption(150.0)
                    .with_power(PowerType::Dc, 48.0)
                    .with_max_temp(45.0)
                    .with_cooling(CoolingRegime::ForcedAir),
            ),
    );
    parts.push(
        cots("Ethernet Switches", PowerControl, "8-port gigabit, industrial", 2, 65.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(12.0)
                .with_power(PowerType::Dc, 12.0)
                .with_max_temp(70.0),
        ),
    );
    parts.push(
        cots("HMI Touch Screen 15 inch", PowerControl, "Capacitive, IP65 front", 1, 320.0)
            .with_specs(
                TechnicalSpecs::new()
                    .with_power_consumption(30.0)
                    .with_power(PowerType::Dc, 12.0)
                    .with_max_temp(50.0),
            ),
    );
    parts.push(
        cots("SSD 1TB Industrial", PowerControl, "SATA, wide temp", 2, 140.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(4.0)
                .with_power(PowerType::Dc, 5.0)
                .with_max_temp(70.0),
        ),
    );
}

fn frame(parts: &mut Vec<Component>) {
    parts.push(
        custom("Aluminum Chamber Walls", Frame, "Welded 6mm plate enclosure", 1, 850.0)
            .with_material("Aluminum 5083")
            .with_process("TIG welding")
            .with_specs(
                TechnicalSpecs::new().with_weight(24.0).with_max_temp(200.0),
            ),
    );
    parts.push(
        cots("Chamber Door Seals", Frame, "Silicone extrusion, per door", 2, 38.0)
            .with_material("Silicone")
            .with_specs(TechnicalSpecs::new().with_max_temp(230.0)),
    );
    parts.push(
        cots("HEPA Filters MERV 13", Frame, "305x305mm panel", 2, 48.0)
            .with_specs(TechnicalSpecs::new().with_flow_rate(400.0)),
    );
    parts.push(
        cots("Exhaust Blowers", Frame, "Backward-curved, 350 CFM", 2, 95.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(180.0)
                .with_power(PowerType::Ac, 120.0)
                .with_flow_rate(350.0)
                .with_max_temp(60.0),
        ),
    );
    parts.push(
        cots("Dampers Motorized", Frame, "150mm, spring return", 2, 55.0).with_specs(
            TechnicalSpecs::new()
                .with_power_consumption(8.0)
                .with_power(PowerType::Dc, 24.0),
        ),
    );
    parts.push(
        custom("Gas Manifolds", Frame, "Argon distribution block", 1, 340.0)
            .with_material("Stainless 316")
            .with_specs(TechnicalSpecs::new().with_max_temp(300.0)),
    );
    // Target for system-level acceptance tests; carries no hardware cost.
    parts.push(custom(
        "Complete System",
        Frame,
        "Integrated machine, all subsystems",
        1,
        0.0,
    ));
}
