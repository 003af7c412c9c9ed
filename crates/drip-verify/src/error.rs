//! Verification engine error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VerifyError>;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("unknown test: {0}")]
    UnknownTest(String),

    #[error("unknown component: {0}")]
    UnknownComponent(String),

    /// I/O failure on the state store. The in-memory stores are unchanged.
    #[error("persistence failure at {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Persisted state that cannot be interpreted (malformed JSON, unknown
    /// enum name). Unknown KEYS are discarded with a diagnostic instead.
    #[error("malformed state at {path}: {detail}")]
    StateFormat { path: PathBuf, detail: String },
}
