//! Type schema for the DRIP acoustic-manufacturing engineering data core.
//!
//! Defines the enumerations and record types shared by every layer of the
//! toolchain: component categories and technical specifications, interface
//! control documents, verification test definitions, and the mutable
//! execution/verification records owned by the verification engine.
//!
//! Everything here is plain data. Registries, derivations, and the state
//! machine live in the `drip-registry`, `drip-validate`, and `drip-verify`
//! crates.

pub mod component;
pub mod interface;
pub mod specs;
pub mod test;
pub mod time;
pub mod verification;

pub use component::{component_key, Component, ComponentCategory, ComponentType};
pub use interface::{Interface, InterfaceCriticality, InterfaceRequirement, InterfaceType};
pub use specs::{CoolingRegime, PowerType, TechnicalSpecs};
pub use test::{TestDefinition, TestExecution, TestResult, TestStatus, VerificationType};
pub use verification::{ComponentVerification, VerificationStatus};
