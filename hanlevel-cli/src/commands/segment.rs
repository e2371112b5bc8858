//! Segment command implementation

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use hanlevel_engine::{LadderKind, Segmentation, TokenKind};

use super::{LadderArg, VocabularyArgs};
use crate::error::CliError;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Sentence to segment
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Ladder to segment against
    #[arg(long, value_enum, default_value = "hsk")]
    pub ladder: LadderArg,

    /// Vocabulary ceiling (default: the sentence's minimal level)
    #[arg(short, long, value_name = "N")]
    pub level: Option<u8>,

    #[command(flatten)]
    pub vocabulary: VocabularyArgs,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        let config = self.vocabulary.load_config()?;
        let classifier = self.vocabulary.build_classifier(&config)?;
        let kind = LadderKind::from(self.ladder);

        let (level, segmentation) = classifier
            .explain(&self.sentence, kind, self.level)
            .map_err(CliError::from)?;
        let minimal = match classifier
            .resolver()
            .minimal_level(&self.sentence, classifier.ladder(kind))
            .level()
        {
            Some(level) => level.to_string(),
            None => "none".to_string(),
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{kind} minimal level: {minimal}")?;
        writeln!(out, "Segmentation at level {level}:")?;
        render(&mut out, self.sentence.as_bytes(), &segmentation)?;
        out.flush()?;
        Ok(())
    }
}

/// Write one line per token, then the outcome
pub fn render(out: &mut dyn Write, sentence: &[u8], segmentation: &Segmentation) -> Result<()> {
    for token in &segmentation.tokens {
        let kind = match token.kind {
            TokenKind::Passthrough => "pass",
            TokenKind::Word => "word",
            TokenKind::Character => "char",
        };
        writeln!(
            out,
            "  {:>4}..{:<4} {:<5} {}",
            token.start,
            token.end(),
            kind,
            String::from_utf8_lossy(token.bytes(sentence))
        )?;
    }

    match segmentation.failed_at {
        None => writeln!(out, "Complete")?,
        Some(at) => {
            let rest = String::from_utf8_lossy(&sentence[at..]);
            let stuck: String = rest.chars().take(1).collect();
            writeln!(out, "No vocabulary entry at byte {at}: {stuck}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanlevel_core::{Ladder, LadderKind, LevelResolver};

    fn render_to_string(sentence: &str, words: &[&str]) -> String {
        let mut ladder = Ladder::new(LadderKind::Hsk);
        ladder.level_mut(1).unwrap().extend(words.iter().copied());
        let segmentation = LevelResolver::default()
            .segment_at(sentence, &ladder, 1)
            .unwrap();

        let mut buffer: Vec<u8> = Vec::new();
        render(&mut buffer, sentence.as_bytes(), &segmentation).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_render_complete() {
        let output = render_to_string("我是学生。", &["我", "是", "学生"]);

        assert!(output.contains("word  学生"));
        assert!(output.contains("pass  。"));
        assert!(output.ends_with("Complete\n"));
    }

    #[test]
    fn test_render_failure_names_character() {
        let output = render_to_string("我喜欢", &["我"]);

        assert!(output.contains("No vocabulary entry at byte 3: 喜"));
    }
}
