//! Stateful verification engine for the DRIP engineering data core.
//!
//! Tracks test executions and per-component verification records over the
//! immutable registries in `drip-registry`, persists both stores as JSON
//! under a state directory, and answers progress queries (next tests,
//! blocked tests, subsystem roll-ups, the verification matrix).

pub mod engine;
pub mod error;
pub mod store;

pub use engine::{
    MatrixRow, StatusUpdate, SubsystemStatus, VerificationEngine, VerificationSummary,
};
pub use error::{Result, VerifyError};
