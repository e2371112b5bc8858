//! Plain text report formatter

use super::ReportFormatter;
use anyhow::Result;
use hanlevel_engine::LevelBreakdown;
use std::io::Write;

const RULE: &str = "========================================================";
const THIN_RULE: &str = "--------------------------------------------------------";

/// Banner-style breakdown, one block per ladder, followed by a note on how
/// levels are assigned
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn format_breakdown(&mut self, breakdown: &LevelBreakdown) -> Result<()> {
        let w = &mut self.writer;
        writeln!(w)?;
        writeln!(w, "{RULE}")?;
        writeln!(w, "{} LEVEL BREAKDOWN (Bottom-Up)", breakdown.ladder())?;
        writeln!(w, "{RULE}")?;

        for (level, count) in breakdown.iter() {
            let label = match level {
                0 => "No level:".to_string(),
                n => format!("Level {n}:"),
            };
            writeln!(
                w,
                "{label:<15}{count:>5} sentences ({:>5.2}%)",
                breakdown.percentage(level)
            )?;
        }

        writeln!(w, "{THIN_RULE}")?;
        writeln!(w, "{:<15}{:>5} sentences", "Total:", breakdown.total())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{RULE}")?;
        writeln!(
            self.writer,
            "Note: Sentences assigned to LOWEST level that can"
        )?;
        writeln!(self.writer, "      segment all words in the sentence.")?;
        writeln!(self.writer, "{RULE}")?;
        self.writer.flush()?;
        Ok(())
    }
}
