//! Vocab command implementation

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use hanlevel_engine::{LadderKind, LevelClassifier};

use super::VocabularyArgs;

/// Arguments for the vocab command
#[derive(Debug, Args)]
pub struct VocabArgs {
    #[command(flatten)]
    pub vocabulary: VocabularyArgs,
}

impl VocabArgs {
    /// Execute the vocab command
    pub fn execute(&self) -> Result<()> {
        let config = self.vocabulary.load_config()?;
        let classifier = self.vocabulary.build_classifier(&config)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_summary(&mut out, &classifier)?;
        out.flush()?;
        Ok(())
    }
}

/// Per-level word counts for both ladders
pub fn write_summary(out: &mut dyn Write, classifier: &LevelClassifier) -> Result<()> {
    for kind in LadderKind::ALL {
        let ladder = classifier.ladder(kind);
        writeln!(out, "{kind} vocabulary:")?;
        for level in ladder.levels() {
            writeln!(out, "  Level {}: {} words", level.level(), level.len())?;
        }
        writeln!(out, "  Total: {} words", ladder.word_count())?;
        writeln!(out)?;
    }
    Ok(())
}
