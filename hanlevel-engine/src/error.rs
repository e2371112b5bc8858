//! Layered error types

use hanlevel_core::{CoreError, LadderKind};
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A ladder was supplied in the slot of the other scheme
    #[error("ladder mismatch: expected {expected}, got {found}")]
    LadderMismatch {
        /// Ladder kind the slot requires
        expected: LadderKind,
        /// Ladder kind that was supplied
        found: LadderKind,
    },

    /// Worker pool could not be built
    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
