//! Builtin verification test catalog, `TE-000` through `TE-100`.
//!
//! Organized in subsystem blocks: acoustic (001-015), thermal (016-030),
//! crucible (031-040), power (041-050), sensing (051-060), control
//! (061-070), chamber (071-075), integration (076-080), performance
//! (081-090), endurance (091-094), validation (095-100). `TE-000` is the
//! physics-validation gateway that guards everything else.
//!
//! Every prerequisite edge has its mirror in the enabling test's
//! `enables_tests`; the registry asserts the symmetry at load.

use drip_schema::{TestDefinition, VerificationType};

use VerificationType::{
    Acceptance, Endurance, Environmental, Feasibility, Functional, Integration, Performance,
    Safety,
};

fn t(id: &str, name: &str, kind: VerificationType, hours: f64) -> TestDefinition {
    TestDefinition::new(id, name, kind, hours)
}

pub(crate) fn tests() -> Vec<TestDefinition> {
    let mut all = Vec::with_capacity(101);
    all.push(
        t("TE-000", "Physics Validation", Feasibility, 40.0)
            .purpose("Demonstrate stable acoustic levitation of a molten droplet at bench scale")
            .targets(["Complete System"])
            .criteria("Droplet held within 0.5 mm of node center for 60 s at 700 C"),
    );
    acoustic(&mut all);
    thermal(&mut all);
    crucible(&mut all);
    power(&mut all);
    sensing(&mut all);
    control(&mut all);
    chamber(&mut all);
    integration(&mut all);
    performance(&mut all);
    endurance_validation(&mut all);
    all
}

fn acoustic(all: &mut Vec<TestDefinition>) {
    all.push(
        t("TE-001", "Single Transducer Characterization", Functional, 2.0)
            .purpose("Measure resonance, impedance, and output of individual transducers")
            .targets(["40kHz Transducers"])
            .enables(["TE-002", "TE-004", "TE-005"])
            .equipment(["Impedance analyzer", "Laser vibrometer"])
            .criteria("Resonance 40 kHz +/- 1 kHz, all units within 3 dB of reference"),
    );
    all.push(
        t("TE-002", "Transducer Array Phasing", Functional, 4.0)
            .purpose("Verify per-channel phase control across the full array")
            .targets(["40kHz Transducers", "Phase Array Controller"])
            .prerequisites(["TE-001"])
            .enables(["TE-087"])
            .criteria("Phase error under 5 degrees on every channel"),
    );
    all.push(
        t("TE-003", "Amplifier Channel Bring-Up", Functional, 2.0)
            .targets(["6-Channel Amplifiers"])
            .enables(["TE-004", "TE-008"])
            .criteria("All channels deliver rated drive into dummy load"),
    );
    all.push(
        t("TE-004", "Array Drive Integration", Integration, 4.0)
            .targets(["40kHz Transducers", "6-Channel Amplifiers"])
            .prerequisites(["TE-001", "TE-003"]),
    );
    all.push(
        t("TE-005", "Standing Wave Formation", Feasibility, 6.0)
            .purpose("Establish a stable standing wave in the cylinder")
            .targets(["Acoustic Cylinder", "40kHz Transducers"])
            .prerequisites(["TE-001"])
            .enables(["TE-006"])
            .equipment(["Hydrophone array"])
            .criteria("Node pressure ratio above 10:1"),
    );
    all.push(
        t("TE-006", "Levitation Node Stability", Performance, 8.0)
            .targets(["Acoustic Cylinder", "Phase Array Controller"])
            .prerequisites(["TE-005"])
            .enables(["TE-056", "TE-076"])
            .criteria("Test bead held within 0.5 mm RMS for 10 min"),
    );
    all.push(
        t("TE-007", "Amplifier Thermal Soak", Endurance, 8.0)
            .targets(["6-Channel Amplifiers"])
            .enables(["TE-008", "TE-009"])
            .criteria("Heatsink under 85 C at full drive, no derating"),
    );
    all.push(
        t("TE-008", "Amplifier Full-Power Drive", Performance, 4.0)
            .targets(["6-Channel Amplifiers"])
            .prerequisites(["TE-003", "TE-007"])
            .enables(["TE-015"]),
    );
    all.push(
        t("TE-009", "Amplifier Protection Limits", Safety, 2.0)
            .targets(["6-Channel Amplifiers"])
            .prerequisites(["TE-007"])
            .enables(["TE-079"])
            .criteria("Overcurrent and overtemp trips fire within spec"),
    );
    all.push(
        t("TE-010", "Array Layer Dimensional Inspection", Functional, 2.0)
            .targets(["Transducer Array Layer"])
            .enables(["TE-011"])
            .equipment(["CMM"]),
    );
    all.push(
        t("TE-011", "Array Layer Seat Alignment", Functional, 3.0)
            .targets(["Transducer Array Layer"])
            .prerequisites(["TE-010"])
            .criteria("Seat normal within 0.5 degrees of design axis"),
    );
    all.push(
        t("TE-012", "Phase Controller Bring-Up", Functional, 2.0)
            .targets(["Phase Array Controller"])
            .enables(["TE-013"]),
    );
    all.push(
        t("TE-013", "Phase Resolution Sweep", Performance, 4.0)
            .targets(["Phase Array Controller"])
            .prerequisites(["TE-012"])
            .enables(["TE-014", "TE-015", "TE-056", "TE-078"])
            .criteria("Phase step resolution 1 degree or finer on all 18 channels"),
    );
    all.push(
        t("TE-014", "Phase Drift Over Temperature", Environmental, 8.0)
            .targets(["Phase Array Controller"])
            .prerequisites(["TE-013"]),
    );
    all.push(
        t("TE-015", "Acoustic Field Mapping", Performance, 8.0)
            .purpose("Map the pressure field through the full working volume")
            .targets(["Acoustic Cylinder", "40kHz Transducers"])
            .prerequisites(["TE-008", "TE-013"])
            .equipment(["Hydrophone array", "3-axis positioner"]),
    );
}

fn thermal(all: &mut Vec<TestDefinition>) {
    all.push(
        t("TE-016", "Thermocouple Calibration", Functional, 2.0)
            .targets(["Thermocouples Type K"])
            .enables(["TE-017", "TE-093"])
            .equipment(["Dry-block calibrator"]),
    );
    all.push(
        t("TE-017", "Platform Heater Bring-Up", Functional, 3.0)
            .targets(["Heated Build Platform"])
            .prerequisites(["TE-016"])
            .enables(["TE-018", "TE-058", "TE-059"]),
    );
    all.push(
        t("TE-018", "Platform Temperature Uniformity", Performance, 6.0)
            .targets(["Heated Build Platform"])
            .prerequisites(["TE-017"])
            .enables(["TE-030", "TE-057", "TE-076"])
            .criteria("Surface spread under 10 C at 400 C setpoint"),
    );
    all.push(
        t("TE-019", "Silicone Heater Verification", Functional, 2.0)
            .targets(["Silicon Heating Plates"])
            .enables(["TE-021", "TE-058"]),
    );
    all.push(
        t("TE-020", "RTD Calibration", Functional, 2.0)
            .targets(["RTD PT100 Sensors"])
            .equipment(["Dry-block calibrator"]),
    );
    all.push(
        t("TE-021", "PID Loop Tuning", Functional, 4.0)
            .targets(["Temperature Controllers"])
            .prerequisites(["TE-019"])
            .enables(["TE-022", "TE-029"]),
    );
    all.push(
        t("TE-022", "PID Setpoint Tracking", Performance, 4.0)
            .targets(["Temperature Controllers"])
            .prerequisites(["TE-021"])
            .criteria("Overshoot under 2 C, settling under 120 s"),
    );
    all.push(
        t("TE-023", "Coolant Loop Flow Balance", Integration, 4.0)
            .targets(["Flow Regulators", "Water Cooling Blocks"])
            .prerequisites(["TE-024", "TE-025"])
            .enables(["TE-089"]),
    );
    all.push(
        t("TE-024", "Pump Bring-Up", Functional, 1.0)
            .targets(["Water Pumps"])
            .enables(["TE-023", "TE-025"]),
    );
    all.push(
        t("TE-025", "Pump Endurance Run", Endurance, 24.0)
            .targets(["Water Pumps"])
            .prerequisites(["TE-024"])
            .enables(["TE-023"])
            .criteria("Flow within 10% of nominal after 24 h continuous"),
    );
    all.push(
        t("TE-026", "Radiator Airflow Verification", Functional, 2.0)
            .targets(["Radiator Fans"])
            .enables(["TE-027", "TE-074"]),
    );
    all.push(
        t("TE-027", "Radiator Heat Rejection", Performance, 4.0)
            .targets(["Radiator Fans", "Water Cooling Blocks"])
            .prerequisites(["TE-026"]),
    );
    all.push(
        t("TE-028", "Insulation Installation Check", Functional, 2.0)
            .targets(["Ceramic Fiber Blanket", "Ceramic Insulation Plates"])
            .enables(["TE-029", "TE-030"]),
    );
    all.push(
        t("TE-029", "Thermal Gradient Survey", Performance, 6.0)
            .targets(["Temperature Controllers", "Thermocouples Type K"])
            .prerequisites(["TE-028", "TE-021"]),
    );
    all.push(
        t("TE-030", "Isolation Tube Soak", Environmental, 8.0)
            .targets(["Thermal Isolation Tube"])
            .prerequisites(["TE-028", "TE-018"])
            .criteria("Cold-side face under 80 C with bed at 500 C"),
    );
}

fn crucible(all: &mut Vec<TestDefinition>) {
    all.push(
        t("TE-031", "Crucible Receiving Inspection", Functional, 1.0)
            .targets(["Graphite Crucibles"])
            .enables(["TE-032", "TE-033", "TE-038"]),
    );
    all.push(
        t("TE-032", "Induction Module Bring-Up", Functional, 3.0)
            .targets(["Induction Heater Module"])
            .prerequisites(["TE-031"])
            .enables(["TE-036", "TE-039", "TE-048"]),
    );
    all.push(
        t("TE-033", "Crucible Melt Trial", Feasibility, 6.0)
            .purpose("First melt of aluminum charge under argon")
            .targets(["Graphite Crucibles", "Induction Coils"])
            .prerequisites(["TE-031", "TE-034"])
            .enables(["TE-037"])
            .criteria("Full melt of 50 g charge within 8 min, no arcing"),
    );
    all.push(
        t("TE-034", "Coil Coupling Measurement", Functional, 2.0)
            .targets(["Induction Coils"])
            .enables(["TE-033", "TE-059", "TE-091"])
            .equipment(["LCR meter"]),
    );
    all.push(
        t("TE-035", "Dispenser Receiving Test", Functional, 2.0)
            .targets(["Piezo Droplet Dispensers"])
            .enables(["TE-037", "TE-094"]),
    );
    all.push(
        t("TE-036", "Induction Power Sweep", Performance, 4.0)
            .targets(["Induction Heater Module"])
            .prerequisites(["TE-032"]),
    );
    all.push(
        t("TE-037", "Droplet Formation Trial", Feasibility, 8.0)
            .purpose("Produce repeatable molten droplets on demand")
            .targets(["Piezo Droplet Dispensers", "Piezo Drivers"])
            .prerequisites(["TE-033", "TE-035"])
            .criteria("Droplet mass CV under 5% over 100 ejections"),
    );
    all.push(
        t("TE-038", "Crucible Thermal Cycling", Endurance, 24.0)
            .targets(["Graphite Crucibles"])
            .prerequisites(["TE-031"])
            .enables(["TE-040", "TE-088"]),
    );
    all.push(
        t("TE-039", "Induction EMI Survey", Environmental, 4.0)
            .targets(["Induction Heater Module", "Magnetic Shielding"])
            .prerequisites(["TE-032"])
            .criteria("Field at control cabinet under 50 uT"),
    );
    all.push(
        t("TE-040", "Crucible Life Assessment", Endurance, 48.0)
            .targets(["Graphite Crucibles"])
            .prerequisites(["TE-038"])
            .enables(["TE-083"]),
    );
}

fn power(all: &mut Vec<TestDefinition>) {
    all.push(
        t("TE-041", "PSU Bring-Up", Functional, 2.0)
            .targets(["Mean Well RSP-10000-48"])
            .enables(["TE-042", "TE-043", "TE-044", "TE-050"]),
    );
    all.push(
        t("TE-042", "PSU Load Regulation", Performance, 4.0)
            .targets(["Mean Well RSP-10000-48"])
            .prerequisites(["TE-041"])
            .enables(["TE-048", "TE-079"])
            .equipment(["Electronic load"])
            .criteria("Output within 2% from 10% to 100% load"),
    );
    all.push(
        t("TE-043", "DC-DC Converter Verification", Functional, 2.0)
            .targets(["DC-DC 48V to 24V Converters", "DC-DC 48V to 12V Converters"])
            .prerequisites(["TE-041"]),
    );
    all.push(
        t("TE-044", "UPS Transfer Test", Functional, 2.0)
            .targets(["UPS 3kVA"])
            .prerequisites(["TE-041"])
            .enables(["TE-086"])
            .criteria("Transfer under 10 ms, no controller reset"),
    );
    all.push(
        t("TE-045", "E-Stop Chain Verification", Safety, 2.0)
            .targets(["Emergency Stop System"])
            .enables(["TE-046", "TE-047"]),
    );
    all.push(
        t("TE-046", "E-Stop Reaction Timing", Safety, 2.0)
            .targets(["Emergency Stop System"])
            .prerequisites(["TE-045"])
            .enables(["TE-047", "TE-069"])
            .criteria("All hazardous outputs dead within 200 ms"),
    );
    all.push(
        t("TE-047", "Safety Interlock Integration", Integration, 4.0)
            .targets(["Emergency Stop System", "Control System"])
            .prerequisites(["TE-045", "TE-046"])
            .enables(["TE-080"]),
    );
    all.push(
        t("TE-048", "Induction Supply Integration", Integration, 4.0)
            .targets(["Mean Well RSP-10000-48", "Induction Heater Module"])
            .prerequisites(["TE-042", "TE-032"])
            .enables(["TE-049"]),
    );
    all.push(
        t("TE-049", "Full-Load Power Soak", Endurance, 12.0)
            .targets(["Mean Well RSP-10000-48"])
            .prerequisites(["TE-048"]),
    );
    all.push(
        t("TE-050", "Breaker Coordination Check", Safety, 2.0)
            .targets(["Circuit Breakers 3-Phase 100A"])
            .prerequisites(["TE-041"]),
    );
}

fn sensing(all: &mut Vec<TestDefinition>) {
    all.push(
        t("TE-051", "Thermal Camera Calibration", Functional, 3.0)
            .targets(["Thermal Cameras"])
            .enables(["TE-055", "TE-056"])
            .equipment(["Blackbody source"]),
    );
    all.push(
        t("TE-052", "Load Cell Calibration", Functional, 2.0)
            .targets(["Load Cells 50kg"])
            .enables(["TE-055"]),
    );
    all.push(
        t("TE-053", "Accelerometer Verification", Functional, 2.0)
            .targets(["Accelerometers 3-Axis"])
            .enables(["TE-055"]),
    );
    all.push(
        t("TE-054", "Gas Flow Sensor Calibration", Functional, 2.0)
            .targets(["Gas Flow Sensors"])
            .enables(["TE-055", "TE-075"]),
    );
    all.push(
        t("TE-055", "Sensor Fusion Integration", Integration, 6.0)
            .targets(["Control System", "Thermal Cameras"])
            .prerequisites(["TE-051", "TE-052", "TE-053", "TE-054"])
            .enables(["TE-060"]),
    );
    all.push(
        t("TE-056", "Droplet Tracking Validation", Performance, 8.0)
            .purpose("Track a levitated droplet optically against phase commands")
            .targets(["Thermal Cameras", "Phase Array Controller"])
            .prerequisites(["TE-006", "TE-013", "TE-051"])
            .criteria("Position solution within 0.2 mm of vibrometer reference"),
    );
    all.push(
        t("TE-057", "Pyrometer Cross-Check", Functional, 3.0)
            .targets(["Pyrometers"])
            .prerequisites(["TE-018"]),
    );
    all.push(
        t("TE-058", "Bed Thermography Survey", Performance, 4.0)
            .targets(["Thermal Cameras", "Heated Build Platform"])
            .prerequisites(["TE-017", "TE-019"]),
    );
    all.push(
        t("TE-059", "Melt Pool Imaging", Performance, 6.0)
            .targets(["Thermal Cameras", "Induction Coils"])
            .prerequisites(["TE-034", "TE-017"]),
    );
    all.push(
        t("TE-060", "Humidity Monitoring Check", Functional, 1.0)
            .targets(["Humidity Sensors"])
            .prerequisites(["TE-055"]),
    );
}

fn control(all: &mut Vec<TestDefinition>) {
    all.push(
        t("TE-061", "Controller Board Bring-Up", Functional, 2.0)
            .targets(["STM32F7 Controllers"])
            .enables(["TE-063", "TE-065", "TE-070"]),
    );
    all.push(
        t("TE-062", "Host Computer Provisioning", Functional, 2.0)
            .targets(["Raspberry Pi 4 8GB"])
            .enables(["TE-063", "TE-064", "TE-067", "TE-070"]),
    );
    all.push(
        t("TE-063", "Control Network Integration", Integration, 3.0)
            .targets(["STM32F7 Controllers", "Raspberry Pi 4 8GB", "Ethernet Switches"])
            .prerequisites(["TE-061", "TE-062"]),
    );
    all.push(
        t("TE-064", "Storage Endurance Check", Endurance, 8.0)
            .targets(["SSD 1TB Industrial"])
            .prerequisites(["TE-062"])
            .enables(["TE-070"]),
    );
    all.push(
        t("TE-065", "Firmware Watchdog Test", Safety, 2.0)
            .targets(["STM32F7 Controllers"])
            .prerequisites(["TE-061"])
            .enables(["TE-066", "TE-068", "TE-069"]),
    );
    all.push(
        t("TE-066", "Real-Time Loop Timing", Performance, 4.0)
            .targets(["STM32F7 Controllers"])
            .prerequisites(["TE-065"])
            .enables(["TE-077"])
            .criteria("Control loop jitter under 50 us at 10 kHz"),
    );
    all.push(
        t("TE-067", "HMI Functional Walkthrough", Functional, 3.0)
            .targets(["HMI Touch Screen 15 inch"])
            .prerequisites(["TE-062"])
            .enables(["TE-098"]),
    );
    all.push(
        t("TE-068", "Fault Injection Campaign", Safety, 6.0)
            .targets(["Control System"])
            .prerequisites(["TE-065"])
            .enables(["TE-090"]),
    );
    all.push(
        t("TE-069", "Safe-State Entry Verification", Safety, 3.0)
            .targets(["Control System", "Emergency Stop System"])
            .prerequisites(["TE-046", "TE-065"])
            .enables(["TE-080"]),
    );
    all.push(
        t("TE-070", "Control Cabinet Integration", Integration, 6.0)
            .targets(["Control System"])
            .prerequisites(["TE-061", "TE-062", "TE-064"])
            .enables(["TE-076", "TE-077"]),
    );
}

fn chamber(all: &mut Vec<TestDefinition>) {
    all.push(
        t("TE-071", "Chamber Leak Check", Functional, 3.0)
            .targets(["Aluminum Chamber Walls", "Chamber Door Seals"])
            .enables(["TE-074"])
            .criteria("Pressure decay under 5% over 30 min at 50 mbar"),
    );
    all.push(
        t("TE-072", "Exhaust Blower Verification", Functional, 2.0)
            .targets(["Exhaust Blowers"])
            .enables(["TE-073", "TE-092"]),
    );
    all.push(
        t("TE-073", "Damper Control Check", Functional, 2.0)
            .targets(["Dampers Motorized"])
            .prerequisites(["TE-072"]),
    );
    all.push(
        t("TE-074", "Chamber Airflow Mapping", Performance, 4.0)
            .targets(["Exhaust Blowers", "HEPA Filters MERV 13"])
            .prerequisites(["TE-026", "TE-071"]),
    );
    all.push(
        t("TE-075", "Argon Purge Validation", Functional, 4.0)
            .targets(["Gas Manifolds", "Gas Flow Sensors"])
            .prerequisites(["TE-054"])
            .criteria("Oxygen under 100 ppm within 5 min of purge start"),
    );
}

fn integration(all: &mut Vec<TestDefinition>) {
    all.push(
        t("TE-076", "Levitation Under Heat", Integration, 8.0)
            .purpose("Hold a levitated bead above the bed at working temperature")
            .targets(["Acoustic Cylinder", "Heated Build Platform"])
            .prerequisites(["TE-006", "TE-018", "TE-070"])
            .enables(["TE-081"]),
    );
    all.push(
        t("TE-077", "Closed-Loop Positioning", Integration, 8.0)
            .targets(["Phase Array Controller", "Control System"])
            .prerequisites(["TE-070", "TE-066"])
            .enables(["TE-078", "TE-081"]),
    );
    all.push(
        t("TE-078", "Droplet Placement Trial", Integration, 8.0)
            .targets(["Piezo Droplet Dispensers", "Phase Array Controller"])
            .prerequisites(["TE-013", "TE-077"])
            .criteria("Placement error under 0.3 mm over 50 droplets"),
    );
    all.push(
        t("TE-079", "Power Fault Ride-Through", Integration, 4.0)
            .targets(["Mean Well RSP-10000-48", "6-Channel Amplifiers"])
            .prerequisites(["TE-009", "TE-042"]),
    );
    all.push(
        t("TE-080", "Emergency Shutdown Drill", Safety, 4.0)
            .targets(["Complete System"])
            .prerequisites(["TE-069", "TE-047"]),
    );
}

fn performance(all: &mut Vec<TestDefinition>) {
    all.push(
        t("TE-081", "First Article Build", Performance, 12.0)
            .purpose("Build the first complete test article end to end")
            .targets(["Complete System"])
            .prerequisites(["TE-076", "TE-077"])
            .enables(["TE-082", "TE-083", "TE-084", "TE-095"]),
    );
    all.push(
        t("TE-082", "Dimensional Accuracy Assessment", Performance, 6.0)
            .targets(["Complete System"])
            .prerequisites(["TE-081"])
            .enables(["TE-085"])
            .equipment(["CMM"]),
    );
    all.push(
        t("TE-083", "Crucible Duty-Cycle Validation", Performance, 8.0)
            .targets(["Graphite Crucibles", "Induction Heater Module"])
            .prerequisites(["TE-040", "TE-081"])
            .enables(["TE-095"]),
    );
    all.push(
        t("TE-084", "Build Rate Benchmark", Performance, 8.0)
            .targets(["Complete System"])
            .prerequisites(["TE-081"])
            .criteria("Sustained 1 cm3/h deposition over a 4 h build"),
    );
    all.push(
        t("TE-085", "Surface Finish Evaluation", Performance, 4.0)
            .targets(["Complete System"])
            .prerequisites(["TE-082"])
            .enables(["TE-095"]),
    );
    all.push(
        t("TE-086", "UPS Runtime Validation", Endurance, 4.0)
            .targets(["UPS 3kVA"])
            .prerequisites(["TE-044"]),
    );
    all.push(
        t("TE-087", "Array Long-Run Stability", Endurance, 24.0)
            .targets(["40kHz Transducers", "Phase Array Controller"])
            .prerequisites(["TE-002"]),
    );
    all.push(
        t("TE-088", "Crucible Replacement Procedure", Functional, 2.0)
            .targets(["Graphite Crucibles"])
            .prerequisites(["TE-038"]),
    );
    all.push(
        t("TE-089", "Cooling Loop Endurance", Endurance, 48.0)
            .targets(["Water Pumps", "Water Cooling Blocks"])
            .prerequisites(["TE-023"]),
    );
    all.push(
        t("TE-090", "Fault Recovery Endurance", Endurance, 12.0)
            .targets(["Control System"])
            .prerequisites(["TE-068"]),
    );
}

fn endurance_validation(all: &mut Vec<TestDefinition>) {
    all.push(
        t("TE-091", "Coil Thermal Endurance", Endurance, 24.0)
            .targets(["Induction Coils"])
            .prerequisites(["TE-034"]),
    );
    all.push(
        t("TE-092", "Blower Endurance Run", Endurance, 24.0)
            .targets(["Exhaust Blowers"])
            .prerequisites(["TE-072"]),
    );
    all.push(
        t("TE-093", "Sensor Drift Assessment", Endurance, 24.0)
            .targets(["Thermocouples Type K", "RTD PT100 Sensors"])
            .prerequisites(["TE-016"]),
    );
    all.push(
        t("TE-094", "Dispenser Life Test", Endurance, 48.0)
            .targets(["Piezo Droplet Dispensers"])
            .prerequisites(["TE-035"])
            .criteria("No nozzle degradation after 1e6 ejections"),
    );
    all.push(
        t("TE-095", "Process Qualification Run", Acceptance, 24.0)
            .targets(["Complete System"])
            .prerequisites(["TE-081", "TE-083", "TE-085"])
            .enables(["TE-096"]),
    );
    all.push(
        t("TE-096", "System Acceptance Build", Acceptance, 24.0)
            .purpose("Full acceptance build against the customer article spec")
            .targets(["Complete System"])
            .prerequisites(["TE-095"])
            .enables(["TE-097", "TE-100"]),
    );
    all.push(
        t("TE-097", "Customer Witness Build", Acceptance, 8.0)
            .targets(["Complete System"])
            .prerequisites(["TE-096"])
            .enables(["TE-100"]),
    );
    all.push(
        t("TE-098", "Operator Training Validation", Acceptance, 4.0)
            .targets(["HMI Touch Screen 15 inch", "Complete System"])
            .prerequisites(["TE-067"])
            .enables(["TE-100"]),
    );
    all.push(
        t("TE-099", "Documentation Audit", Acceptance, 4.0)
            .targets(["Complete System"])
            .enables(["TE-100"]),
    );
    all.push(
        t("TE-100", "Final Acceptance Review", Acceptance, 4.0)
            .targets(["Complete System"])
            .prerequisites(["TE-096", "TE-097", "TE-098", "TE-099"]),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn catalog_shape() {
        let all = tests();
        assert_eq!(all.len(), 101);
        assert_eq!(all[0].test_id, "TE-000");
        for (idx, test) in all.iter().enumerate() {
            assert_eq!(test.test_id, format!("TE-{idx:03}"), "ids in order");
            assert!(test.estimated_duration_hours > 0.0, "{}", test.test_id);
            assert!(!test.target_components.is_empty(), "{}", test.test_id);
        }
    }

    #[test]
    fn prerequisites_mirror_enables() {
        let all = tests();
        let by_id: HashMap<&str, &TestDefinition> =
            all.iter().map(|t| (t.test_id.as_str(), t)).collect();
        for test in &all {
            for prereq in &test.prerequisite_tests {
                let other = by_id[prereq.as_str()];
                assert!(
                    other.enables_tests.contains(&test.test_id),
                    "{} -> {}",
                    test.test_id,
                    prereq
                );
            }
            for enabled in &test.enables_tests {
                let other = by_id[enabled.as_str()];
                assert!(
                    other.prerequisite_tests.contains(&test.test_id),
                    "{} enables {}",
                    test.test_id,
                    enabled
                );
            }
        }
    }

    #[test]
    fn gateway_has_no_graph_edges() {
        let all = tests();
        let gateway = &all[0];
        assert!(gateway.prerequisite_tests.is_empty());
        assert!(gateway.enables_tests.is_empty());
    }
}
