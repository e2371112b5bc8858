//! Markdown report formatter

use super::ReportFormatter;
use anyhow::Result;
use hanlevel_engine::LevelBreakdown;
use std::io::Write;

/// Markdown formatter - one table per ladder
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new Markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for MarkdownFormatter<W> {
    fn format_breakdown(&mut self, breakdown: &LevelBreakdown) -> Result<()> {
        let w = &mut self.writer;
        writeln!(w, "## {} level breakdown", breakdown.ladder())?;
        writeln!(w)?;
        writeln!(w, "| Level | Sentences | Share |")?;
        writeln!(w, "|-------|----------:|------:|")?;

        for (level, count) in breakdown.iter() {
            let label = match level {
                0 => "No level".to_string(),
                n => n.to_string(),
            };
            writeln!(
                w,
                "| {label} | {count} | {:.2}% |",
                breakdown.percentage(level)
            )?;
        }

        writeln!(w, "| **Total** | {} | |", breakdown.total())?;
        writeln!(w)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "*Sentences are assigned to the lowest level whose vocabulary covers every word.*"
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
