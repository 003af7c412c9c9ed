//! Registry error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown component: {0}")]
    UnknownComponent(String),

    #[error("unknown interface: {0}")]
    UnknownInterface(String),

    #[error("unknown test: {0}")]
    UnknownTest(String),

    /// Level-scaling queries accept levels 1 through 4 only.
    #[error("invalid level {0}: expected 1..=4")]
    InvalidLevel(u32),

    /// Load-time violation of a declarative-data invariant.
    #[error("data integrity: {0}")]
    DataIntegrity(String),
}
