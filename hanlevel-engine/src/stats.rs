//! Level breakdown tabulation

use hanlevel_core::{LadderKind, LevelClassification};
use serde::Serialize;

use crate::classifier::SentenceLevels;

/// Sentence counts per level for one ladder; index 0 is "no level"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelBreakdown {
    ladder: LadderKind,
    counts: Vec<usize>,
}

impl LevelBreakdown {
    /// Create an empty breakdown with slots 0..=N
    pub fn new(ladder: LadderKind) -> Self {
        Self {
            ladder,
            counts: vec![0; usize::from(ladder.max_level()) + 1],
        }
    }

    /// Ladder being tabulated
    pub fn ladder(&self) -> LadderKind {
        self.ladder
    }

    /// Count one sentence. Levels above the ladder's top are clamped into
    /// the "no level" slot.
    pub fn record(&mut self, classification: LevelClassification) {
        let slot = usize::from(classification.as_number());
        match self.counts.get_mut(slot) {
            Some(count) => *count += 1,
            None => self.counts[0] += 1,
        }
    }

    /// Sentences at `level` (0 = no level)
    pub fn count(&self, level: u8) -> usize {
        self.counts.get(usize::from(level)).copied().unwrap_or(0)
    }

    /// Sentences counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of sentences at `level`, in percent. An empty breakdown reports
    /// 0.0 everywhere.
    pub fn percentage(&self, level: u8) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(level) as f64 / total as f64 * 100.0
    }

    /// `(level, count)` pairs from "no level" up to the top level
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(level, count)| (level as u8, *count))
    }

    /// Add another breakdown of the same ladder into this one
    pub fn merge(&mut self, other: &LevelBreakdown) {
        debug_assert_eq!(self.ladder, other.ladder);
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
    }
}

/// Breakdowns for both ladders over a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// HSK breakdown
    pub hsk: LevelBreakdown,
    /// TOCFL breakdown
    pub tocfl: LevelBreakdown,
}

impl Default for BatchReport {
    fn default() -> Self {
        Self {
            hsk: LevelBreakdown::new(LadderKind::Hsk),
            tocfl: LevelBreakdown::new(LadderKind::Tocfl),
        }
    }
}

impl BatchReport {
    /// Tabulate a slice of results
    pub fn from_results(results: &[SentenceLevels]) -> Self {
        let mut report = Self::default();
        for levels in results {
            report.record(levels);
        }
        report
    }

    /// Count one sentence on both ladders
    pub fn record(&mut self, levels: &SentenceLevels) {
        self.hsk.record(levels.hsk);
        self.tocfl.record(levels.tocfl);
    }

    /// Breakdown for one ladder
    pub fn breakdown(&self, kind: LadderKind) -> &LevelBreakdown {
        match kind {
            LadderKind::Hsk => &self.hsk,
            LadderKind::Tocfl => &self.tocfl,
        }
    }

    /// Sentences counted
    pub fn total(&self) -> usize {
        self.hsk.total()
    }

    /// Combine with the report of another batch
    pub fn merge(&mut self, other: &BatchReport) {
        self.hsk.merge(&other.hsk);
        self.tocfl.merge(&other.tocfl);
    }
}
