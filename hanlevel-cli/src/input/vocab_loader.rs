//! Per-level vocabulary file loading

use std::path::{Path, PathBuf};

use anyhow::Result;
use hanlevel_core::{Ladder, LadderKind, VocabularyLevel};

use super::records::byte_lines;
use super::FileReader;
use crate::config::VocabularyConfig;

/// Loads `{dir}/{pattern}` files into ladders
#[derive(Debug, Clone)]
pub struct VocabularyLoader {
    dir: PathBuf,
    file_pattern: String,
}

impl VocabularyLoader {
    /// Create a loader for `dir` using `file_pattern`, where `{ladder}` is
    /// replaced by `hsk`/`tocfl` and `{level}` by the level number
    pub fn new(dir: impl Into<PathBuf>, file_pattern: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_pattern: file_pattern.into(),
        }
    }

    /// Create a loader from the `[vocabulary]` table
    pub fn from_config(config: &VocabularyConfig) -> Self {
        Self::new(&config.dir, &config.file_pattern)
    }

    /// Path of the word list for one level
    pub fn path_for(&self, kind: LadderKind, level: u8) -> PathBuf {
        let name = self
            .file_pattern
            .replace("{ladder}", kind.file_stem())
            .replace("{level}", &level.to_string());
        self.dir.join(name)
    }

    /// Load every level of one ladder. Missing files leave their level empty.
    pub fn load_ladder(&self, kind: LadderKind) -> Result<Ladder> {
        let levels = (1..=kind.max_level())
            .map(|level| self.load_level(&self.path_for(kind, level), level))
            .collect::<Result<Vec<_>>>()?;

        let ladder = Ladder::with_levels(kind, levels)?;
        log::info!("{} vocabulary: {} words", kind, ladder.word_count());
        for level in ladder.levels() {
            log::info!("  Level {}: {} words", level.level(), level.len());
        }
        Ok(ladder)
    }

    /// Load one level file
    pub fn load_level(&self, path: &Path, level: u8) -> Result<VocabularyLevel> {
        if !path.exists() {
            log::warn!("Could not open {}, level {level} is empty", path.display());
            return Ok(VocabularyLevel::new(level));
        }

        let content = FileReader::read_bytes(path)?;
        Ok(parse_level(&content, level))
    }
}

/// Parse a word list: skip the header, keep the bytes before the first comma
/// of every other line, ignore lines without a comma. Words are stored as
/// raw bytes, so a stray invalid byte only affects its own line.
pub fn parse_level(content: impl AsRef<[u8]>, level: u8) -> VocabularyLevel {
    let mut vocabulary = VocabularyLevel::new(level);
    for line in byte_lines(content.as_ref()).skip(1) {
        if let Some(comma) = line.iter().position(|&byte| byte == b',') {
            vocabulary.insert(&line[..comma]);
        }
    }
    vocabulary
}
