//! Core error types (deterministic only)
//!
//! Classification itself never fails: an unsegmentable sentence is a valid
//! outcome. These errors only arise while shaping ladders or asking for a
//! level view that does not exist.

use thiserror::Error;

use crate::vocabulary::LadderKind;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A level outside `1..=max` was requested
    #[error("{ladder} level {level} is out of range (1..={max})")]
    LevelOutOfRange {
        /// Ladder the level was requested from
        ladder: LadderKind,
        /// Requested level
        level: u8,
        /// Highest level of the ladder
        max: u8,
    },

    /// Levels handed to a ladder do not line up with its numbering
    #[error("malformed {ladder} ladder: {reason}")]
    LadderShape {
        /// Ladder being built
        ladder: LadderKind,
        /// What was wrong with the supplied levels
        reason: String,
    },

    /// Ladder name that is neither HSK nor TOCFL
    #[error("unknown ladder: {0}")]
    UnknownLadder(String),
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
