//! Builtin interface control document catalog.

use drip_schema::{Interface, InterfaceCriticality, InterfaceRequirement, InterfaceType};

use InterfaceCriticality::{High, Medium};
use InterfaceType::{Acoustic, Data, Electrical, Fluid, Mechanical, Thermal};

fn req(
    parameter: &str,
    nominal: f64,
    min: f64,
    max: f64,
    units: &str,
    method: &str,
) -> InterfaceRequirement {
    InterfaceRequirement::new(parameter, nominal, min, max, units, method)
}

/// The declared interface set, `ICD-001` through `ICD-008`.
pub(crate) fn interfaces() -> Vec<Interface> {
    vec![
        Interface::new("ICD-001", "Acoustic Cylinder to Thermal Isolation", High)
            .side_a(
                "Acoustic",
                ["Acoustic Cylinder", "Transducer Array Layer", "40kHz Transducers"],
            )
            .side_b("Frame", ["Aluminum Chamber Walls", "Thermal Isolation Tube"])
            .types([Mechanical, Thermal, Acoustic])
            .requirement(req(
                "Acoustic Transmission",
                85.0,
                80.0,
                100.0,
                "%",
                "Hydrophone survey",
            ))
            .requirement(req("Thermal Leakage", 50.0, 0.0, 100.0, "W", "Calorimetry"))
            .requirement(req(
                "Transducer Temperature",
                40.0,
                20.0,
                60.0,
                "C",
                "Thermocouple log",
            ))
            .mechanical_detail("Mount", "3-point kinematic, M6")
            .thermal_detail("Isolation", "Ceramic standoff ring")
            .procedure("VP-ICD-001")
            .equipment(["Hydrophone array", "Thermal camera"])
            .dated("2026-02-10"),
        Interface::new("ICD-002", "Control to Power Distribution", High)
            .side_a("Control", ["STM32F7 Controllers", "Raspberry Pi 4 8GB"])
            .side_b(
                "Power",
                [
                    "Mean Well RSP-10000-48",
                    "DC-DC 48V to 24V Converters",
                    "DC-DC 48V to 12V Converters",
                ],
            )
            .types([Electrical, Data])
            .requirement(req("Supply Voltage", 48.0, 45.0, 52.0, "VDC", "DMM"))
            .requirement(req("Peak Current", 100.0, 0.0, 150.0, "A", "Clamp meter"))
            .requirement(req("Telemetry Rate", 1000.0, 100.0, 5000.0, "kbps", "Bus analyzer"))
            .electrical_detail("Bus", "48 VDC primary, CAN telemetry")
            .procedure("VP-ICD-002")
            .equipment(["Electronic load", "CAN analyzer"])
            .dated("2026-02-10"),
        Interface::new("ICD-003", "Thermal Imaging to Control", Medium)
            .side_a("Sensors", ["Thermal Cameras"])
            .side_b("Control", ["Control System"])
            .types([Data, Electrical])
            .requirement(req("Frame Rate", 30.0, 9.0, 60.0, "Hz", "Capture log"))
            .requirement(req("Supply Voltage", 24.0, 21.0, 26.0, "VDC", "DMM"))
            .electrical_detail("Link", "GigE, PoE")
            .procedure("VP-ICD-003")
            .equipment(["GigE frame grabber"])
            .dated("2026-02-12"),
        Interface::new("ICD-004", "Induction Coil to Crucible", High)
            .side_a("Crucible", ["Induction Coils"])
            .side_b("Crucible", ["Graphite Crucibles"])
            .types([Thermal, Electrical, Mechanical])
            .requirement(req("Coupling Gap", 8.0, 5.0, 12.0, "mm", "Gauge"))
            .requirement(req("Melt Temperature", 700.0, 400.0, 900.0, "C", "Pyrometer"))
            .thermal_detail("Cooling", "Shared liquid loop with coil")
            .procedure("VP-ICD-004")
            .equipment(["Pyrometer", "LCR meter"])
            .dated("2026-02-15"),
        Interface::new("ICD-005", "Amplifier to Transducer Array", High)
            .side_a("Acoustic", ["6-Channel Amplifiers"])
            .side_b("Acoustic", ["40kHz Transducers", "Transducer Array Layer"])
            .types([Electrical, Acoustic])
            .requirement(req(
                "Drive Frequency",
                40_000.0,
                39_000.0,
                41_000.0,
                "Hz",
                "Oscilloscope",
            ))
            .requirement(req("Drive Voltage", 48.0, 0.0, 60.0, "Vpp", "Oscilloscope"))
            .electrical_detail("Wiring", "Twisted pair per channel")
            .procedure("VP-ICD-005")
            .equipment(["Oscilloscope", "Impedance analyzer"])
            .dated("2026-02-15"),
        Interface::new("ICD-006", "Crucible Assembly to Chamber", High)
            .side_a("Crucible", ["Graphite Crucibles", "Magnetic Shielding"])
            .side_b("Frame", ["Aluminum Chamber Walls", "Gas Manifolds"])
            .types([Mechanical, Thermal])
            .requirement(req("Mount Load", 15.0, 0.0, 40.0, "kg", "Load cell"))
            .requirement(req("Wall Temperature", 80.0, 0.0, 150.0, "C", "Thermocouple log"))
            .mechanical_detail("Mount", "Ceramic standoff, 4x M8")
            .procedure("VP-ICD-006")
            .equipment(["Load cells", "Thermocouples"])
            .dated("2026-02-18"),
        Interface::new("ICD-007", "Liquid Cooling Loop", High)
            .side_a(
                "Cooling",
                ["Water Pumps", "Water Cooling Blocks", "Flow Regulators"],
            )
            .side_b("Loads", ["6-Channel Amplifiers", "Induction Heater Module"])
            .types([Fluid, Thermal, Mechanical])
            .requirement(req("Coolant Flow", 8.0, 5.0, 12.0, "L/min", "Flow meter"))
            .requirement(req("Coolant Temperature", 35.0, 15.0, 50.0, "C", "RTD log"))
            .mechanical_detail("Fittings", "3/8 barb, clamped")
            .procedure("VP-ICD-007")
            .equipment(["Flow meter", "RTD logger"])
            .dated("2026-02-18"),
        Interface::new("ICD-008", "Control to Chamber Airflow", Medium)
            .side_a("Control", ["Control System"])
            .side_b(
                "Frame",
                ["Exhaust Blowers", "Dampers Motorized", "HEPA Filters MERV 13"],
            )
            .types([Data, Electrical])
            .requirement(req("Exhaust Flow", 350.0, 200.0, 400.0, "CFM", "Anemometer"))
            .requirement(req("Damper Response", 5.0, 0.0, 10.0, "s", "Step test"))
            .electrical_detail("Control", "0-10V damper, relay blowers")
            .procedure("VP-ICD-008")
            .equipment(["Anemometer"])
            .dated("2026-02-20"),
    ]
}
