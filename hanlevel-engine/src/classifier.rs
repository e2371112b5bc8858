//! Per-sentence classification against both ladders

use hanlevel_core::{
    Ladder, LadderKind, LevelClassification, LevelResolver, Segmentation, Segmenter,
    SegmenterConfig,
};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// HSK and TOCFL levels of one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentenceLevels {
    /// Minimal HSK level, 0 when none of 1..=7 suffices
    pub hsk: LevelClassification,
    /// Minimal TOCFL level, 0 when none of 1..=5 suffices
    pub tocfl: LevelClassification,
}

impl SentenceLevels {
    /// Level for the given ladder
    pub fn get(&self, kind: LadderKind) -> LevelClassification {
        match kind {
            LadderKind::Hsk => self.hsk,
            LadderKind::Tocfl => self.tocfl,
        }
    }
}

/// Immutable vocabulary pair plus the resolver that walks it.
///
/// Shared by reference across worker threads; classification takes `&self`.
#[derive(Debug, Clone)]
pub struct LevelClassifier {
    hsk: Ladder,
    tocfl: Ladder,
    resolver: LevelResolver,
}

impl LevelClassifier {
    /// Create a classifier, checking that each ladder sits in its own slot
    pub fn new(hsk: Ladder, tocfl: Ladder, segmenter: SegmenterConfig) -> Result<Self> {
        for (expected, ladder) in [(LadderKind::Hsk, &hsk), (LadderKind::Tocfl, &tocfl)] {
            if ladder.kind() != expected {
                return Err(EngineError::LadderMismatch {
                    expected,
                    found: ladder.kind(),
                });
            }
        }

        log::debug!(
            "classifier ready: {} HSK words, {} TOCFL words, policy {}",
            hsk.word_count(),
            tocfl.word_count(),
            segmenter.policy.as_str()
        );

        Ok(Self {
            hsk,
            tocfl,
            resolver: LevelResolver::new(Segmenter::new(segmenter)),
        })
    }

    /// Ladder for the given scheme
    pub fn ladder(&self, kind: LadderKind) -> &Ladder {
        match kind {
            LadderKind::Hsk => &self.hsk,
            LadderKind::Tocfl => &self.tocfl,
        }
    }

    /// Resolver shared by both ladders
    pub fn resolver(&self) -> &LevelResolver {
        &self.resolver
    }

    /// Resolve both ladders for one sentence
    pub fn classify(&self, sentence: impl AsRef<[u8]>) -> SentenceLevels {
        let sentence = sentence.as_ref();
        SentenceLevels {
            hsk: self.resolver.minimal_level(sentence, &self.hsk),
            tocfl: self.resolver.minimal_level(sentence, &self.tocfl),
        }
    }

    /// Tokenization of `sentence` on one ladder, at `level` or, when `None`,
    /// at the sentence's minimal level (the top level if none suffices)
    pub fn explain(
        &self,
        sentence: impl AsRef<[u8]>,
        kind: LadderKind,
        level: Option<u8>,
    ) -> Result<(u8, Segmentation)> {
        let sentence = sentence.as_ref();
        let ladder = self.ladder(kind);
        let level = match level {
            Some(level) => level,
            None => self
                .resolver
                .minimal_level(sentence, ladder)
                .level()
                .unwrap_or(ladder.max_level()),
        };

        let segmentation = self.resolver.segment_at(sentence, ladder, level)?;
        Ok((level, segmentation))
    }
}
