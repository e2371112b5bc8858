//! Vocabulary-driven level classification for Chinese sentences
//!
//! Given per-level word lists for a proficiency scheme (HSK 1–7 or
//! TOCFL 1–5), this crate finds the lowest level whose cumulative vocabulary
//! can cover a sentence.
//!
//! # Architecture
//!
//! - [`classifier`]: byte length and target-script test for a UTF-8 position
//! - [`vocabulary`]: levels, ladders, and cumulative membership views
//! - [`segmenter`]: the greedy leftmost-longest walk
//! - [`resolver`]: forward scan over level ceilings
//!
//! The crate performs no I/O and keeps no global state. Every classification
//! is a pure function of the sentence and the ladder.
//!
//! # Example
//!
//! ```rust
//! use hanlevel_core::{Ladder, LadderKind, LevelClassification, LevelResolver};
//!
//! let mut hsk = Ladder::new(LadderKind::Hsk);
//! hsk.level_mut(1).unwrap().extend(["我", "是"]);
//! hsk.level_mut(2).unwrap().insert("学生");
//!
//! let resolver = LevelResolver::default();
//! assert_eq!(
//!     resolver.minimal_level("我是学生。", &hsk),
//!     LevelClassification::Level(2)
//! );
//! ```

#![warn(missing_docs)]

pub mod classifier;
pub mod error;
pub mod resolver;
pub mod segmenter;
pub mod vocabulary;

pub use classifier::{utf8_len, CharInfo, CharacterClassifier, ScriptPolicy};
pub use error::{CoreError, Result};
pub use resolver::{LevelClassification, LevelResolver};
pub use segmenter::{Segmentation, Segmenter, SegmenterConfig, Token, TokenKind};
pub use vocabulary::{CumulativeVocabulary, Ladder, LadderKind, Lexicon, VocabularyLevel};

/// Word buffer size, terminator included; candidates are one byte shorter
pub const DEFAULT_MAX_WORD_BYTES: usize = 100;

/// Longest stored word and longest candidate run under the default bound
pub const MAX_STORED_WORD_BYTES: usize = DEFAULT_MAX_WORD_BYTES - 1;

/// Shortest run tried by the longest-match loop
pub const MIN_CANDIDATE_BYTES: usize = 3;
