//! Batch orchestration for HSK/TOCFL level classification
//!
//! This crate pairs the two vocabulary ladders into a [`LevelClassifier`],
//! runs it over batches of sentences with a sequential or rayon-backed
//! executor, and tabulates per-level counts.

#![warn(missing_docs)]

pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod stats;

// Re-export key types
pub use classifier::{LevelClassifier, SentenceLevels};
pub use config::EngineConfig;
pub use dispatcher::{AdaptiveDispatcher, BatchOutput};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor, ProgressSink};
pub use stats::{BatchReport, LevelBreakdown};

// Re-export from core for convenience
pub use hanlevel_core::{
    Ladder, LadderKind, LevelClassification, ScriptPolicy, Segmentation, SegmenterConfig, Token,
    TokenKind, VocabularyLevel,
};
