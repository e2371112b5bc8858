//! Level-indexed vocabulary tables
//!
//! A [`Ladder`] holds one [`VocabularyLevel`] per proficiency level. Levels are
//! built once and never mutated while sentences are classified. "Known at
//! level L" always means the union of levels 1..=L, exposed through
//! [`Ladder::upto`] as a borrowed [`CumulativeVocabulary`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::MAX_STORED_WORD_BYTES;

/// Exact-match word membership
pub trait Lexicon {
    /// Whether `word` is present, byte for byte
    fn contains(&self, word: &[u8]) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &[u8]) -> bool {
        (**self).contains(word)
    }
}

impl Lexicon for HashSet<Vec<u8>> {
    fn contains(&self, word: &[u8]) -> bool {
        HashSet::contains(self, word)
    }
}

/// Proficiency scheme a ladder belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LadderKind {
    /// HSK, levels 1 through 7
    Hsk,
    /// TOCFL, levels 1 through 5
    Tocfl,
}

impl LadderKind {
    /// Both ladders, in reporting order
    pub const ALL: [LadderKind; 2] = [LadderKind::Hsk, LadderKind::Tocfl];

    /// Highest level of the scheme
    pub fn max_level(&self) -> u8 {
        match self {
            LadderKind::Hsk => 7,
            LadderKind::Tocfl => 5,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            LadderKind::Hsk => "HSK",
            LadderKind::Tocfl => "TOCFL",
        }
    }

    /// Lowercase stem used in vocabulary file names
    pub fn file_stem(&self) -> &'static str {
        match self {
            LadderKind::Hsk => "hsk",
            LadderKind::Tocfl => "tocfl",
        }
    }
}

impl fmt::Display for LadderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LadderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hsk" => Ok(LadderKind::Hsk),
            "tocfl" => Ok(LadderKind::Tocfl),
            _ => Err(CoreError::UnknownLadder(s.to_string())),
        }
    }
}

/// Words introduced at one level of a ladder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyLevel {
    level: u8,
    words: HashSet<Vec<u8>>,
}

impl VocabularyLevel {
    /// Create an empty level
    pub fn new(level: u8) -> Self {
        Self {
            level,
            words: HashSet::new(),
        }
    }

    /// Build a level from an iterator of words
    pub fn from_words<I, W>(level: u8, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let mut vocabulary = Self::new(level);
        vocabulary.extend(words);
        vocabulary
    }

    /// Level number (1-based)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Add a word. Words longer than [`MAX_STORED_WORD_BYTES`] are cut to it,
    /// possibly mid-character.
    ///
    /// Returns `false` if the (possibly truncated) word was already present.
    pub fn insert(&mut self, word: impl AsRef<[u8]>) -> bool {
        let word = word.as_ref();
        let word = &word[..word.len().min(MAX_STORED_WORD_BYTES)];
        self.words.insert(word.to_vec())
    }

    /// Add every word from an iterator
    pub fn extend<I, W>(&mut self, words: I)
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        for word in words {
            self.insert(word);
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the level has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for VocabularyLevel {
    fn contains(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }
}

/// Ordered vocabulary levels 1..=N for one proficiency scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    kind: LadderKind,
    levels: Vec<VocabularyLevel>,
}

impl Ladder {
    /// Create a ladder whose levels are all empty
    pub fn new(kind: LadderKind) -> Self {
        let levels = (1..=kind.max_level()).map(VocabularyLevel::new).collect();
        Self { kind, levels }
    }

    /// Create a ladder from fully built levels.
    ///
    /// Exactly `kind.max_level()` levels are required, numbered 1..=N in order.
    pub fn with_levels(kind: LadderKind, levels: Vec<VocabularyLevel>) -> Result<Self> {
        if levels.len() != usize::from(kind.max_level()) {
            return Err(CoreError::LadderShape {
                ladder: kind,
                reason: format!(
                    "expected {} levels, got {}",
                    kind.max_level(),
                    levels.len()
                ),
            });
        }

        for (index, level) in levels.iter().enumerate() {
            let expected = index + 1;
            if usize::from(level.level()) != expected {
                return Err(CoreError::LadderShape {
                    ladder: kind,
                    reason: format!(
                        "level at position {expected} is numbered {}",
                        level.level()
                    ),
                });
            }
        }

        Ok(Self { kind, levels })
    }

    /// Proficiency scheme of this ladder
    pub fn kind(&self) -> LadderKind {
        self.kind
    }

    /// Highest level (N)
    pub fn max_level(&self) -> u8 {
        self.kind.max_level()
    }

    /// All levels, lowest first
    pub fn levels(&self) -> &[VocabularyLevel] {
        &self.levels
    }

    /// The words introduced at `level`
    pub fn level(&self, level: u8) -> Result<&VocabularyLevel> {
        let index = self.index_of(level)?;
        Ok(&self.levels[index])
    }

    /// Mutable access for loaders filling the ladder
    pub fn level_mut(&mut self, level: u8) -> Result<&mut VocabularyLevel> {
        let index = self.index_of(level)?;
        Ok(&mut self.levels[index])
    }

    /// Total words across all levels (duplicates between levels count twice)
    pub fn word_count(&self) -> usize {
        self.levels.iter().map(VocabularyLevel::len).sum()
    }

    /// Vocabulary known at `level`: the union of levels 1..=level
    pub fn upto(&self, level: u8) -> Result<CumulativeVocabulary<'_>> {
        let index = self.index_of(level)?;
        Ok(CumulativeVocabulary {
            levels: &self.levels[..=index],
        })
    }

    fn index_of(&self, level: u8) -> Result<usize> {
        if level == 0 || level > self.max_level() {
            return Err(CoreError::LevelOutOfRange {
                ladder: self.kind,
                level,
                max: self.max_level(),
            });
        }
        Ok(usize::from(level) - 1)
    }
}

/// Borrowed union of the lowest levels of a ladder
#[derive(Debug, Clone, Copy)]
pub struct CumulativeVocabulary<'a> {
    levels: &'a [VocabularyLevel],
}

impl CumulativeVocabulary<'_> {
    /// Highest level included in the union
    pub fn ceiling(&self) -> u8 {
        self.levels.last().map_or(0, VocabularyLevel::level)
    }
}

impl Lexicon for CumulativeVocabulary<'_> {
    fn contains(&self, word: &[u8]) -> bool {
        self.levels.iter().any(|level| level.contains(word))
    }
}
