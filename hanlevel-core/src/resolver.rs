//! Minimal sufficient level search
//!
//! Vocabulary only grows as the ceiling rises, so segmentability is monotonic
//! in the level. A forward scan from level 1 therefore stops at the true
//! minimum.

use std::fmt;

use crate::error::{CoreError, Result};
use crate::segmenter::{Segmentation, Segmenter};
use crate::vocabulary::{Ladder, LadderKind};

/// Lowest level whose cumulative vocabulary covers a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LevelClassification {
    /// Covered at this level (1-based)
    Level(u8),
    /// No level of the ladder suffices
    Unreachable,
}

impl LevelClassification {
    /// Numeric form used in reports and CSV columns; 0 for unreachable
    pub fn as_number(&self) -> u8 {
        match self {
            LevelClassification::Level(level) => *level,
            LevelClassification::Unreachable => 0,
        }
    }

    /// Inverse of [`LevelClassification::as_number`]. The number is not
    /// checked against any ladder; use [`LevelClassification::for_ladder`]
    /// when the ladder is known.
    pub fn from_number(number: u8) -> Self {
        match number {
            0 => LevelClassification::Unreachable,
            level => LevelClassification::Level(level),
        }
    }

    /// Like [`LevelClassification::from_number`], rejecting levels above the
    /// ladder's highest
    pub fn for_ladder(number: u8, kind: LadderKind) -> Result<Self> {
        if number > kind.max_level() {
            return Err(CoreError::LevelOutOfRange {
                ladder: kind,
                level: number,
                max: kind.max_level(),
            });
        }
        Ok(Self::from_number(number))
    }

    /// The level, if one sufficed
    pub fn level(&self) -> Option<u8> {
        match self {
            LevelClassification::Level(level) => Some(*level),
            LevelClassification::Unreachable => None,
        }
    }
}

impl fmt::Display for LevelClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_number())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LevelClassification {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.as_number())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LevelClassification {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let number = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        let highest = LadderKind::ALL
            .iter()
            .map(LadderKind::max_level)
            .max()
            .unwrap_or_default();
        if number > highest {
            return Err(serde::de::Error::custom(format!(
                "level {number} exceeds the highest ladder level {highest}"
            )));
        }
        Ok(Self::from_number(number))
    }
}

/// Drives the segmenter across increasing level ceilings
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelResolver {
    segmenter: Segmenter,
}

impl LevelResolver {
    /// Create a resolver around a segmenter
    pub fn new(segmenter: Segmenter) -> Self {
        Self { segmenter }
    }

    /// Segmenter used for each attempt
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// First level L in 1..=N whose vocabulary union segments `sentence`
    pub fn minimal_level(
        &self,
        sentence: impl AsRef<[u8]>,
        ladder: &Ladder,
    ) -> LevelClassification {
        let sentence = sentence.as_ref();

        (1..=ladder.max_level())
            .find(|&level| {
                ladder
                    .upto(level)
                    .is_ok_and(|known| self.segmenter.can_segment(sentence, &known))
            })
            .map_or(LevelClassification::Unreachable, LevelClassification::Level)
    }

    /// Segmentation of `sentence` with the vocabulary known at `level`
    pub fn segment_at(
        &self,
        sentence: impl AsRef<[u8]>,
        ladder: &Ladder,
        level: u8,
    ) -> Result<Segmentation> {
        let known = ladder.upto(level)?;
        Ok(self.segmenter.segment(sentence, &known))
    }
}
