//! JSON report formatter

use super::ReportFormatter;
use anyhow::Result;
use hanlevel_engine::{LadderKind, LevelBreakdown};
use serde::Serialize;
use std::io::Write;

/// Count and share of one level; level 0 means no level suffices
#[derive(Debug, Serialize)]
struct LevelEntry {
    level: u8,
    count: usize,
    percentage: f64,
}

#[derive(Debug, Serialize)]
struct LadderEntry {
    ladder: LadderKind,
    total: usize,
    levels: Vec<LevelEntry>,
}

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    ladders: &'a [LadderEntry],
}

/// JSON formatter - collects every ladder and writes one document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    ladders: Vec<LadderEntry>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            ladders: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn format_breakdown(&mut self, breakdown: &LevelBreakdown) -> Result<()> {
        self.ladders.push(LadderEntry {
            ladder: breakdown.ladder(),
            total: breakdown.total(),
            levels: breakdown
                .iter()
                .map(|(level, count)| LevelEntry {
                    level,
                    count,
                    percentage: breakdown.percentage(level),
                })
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = ReportDocument {
            ladders: &self.ladders,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::output::test_support::{render, sample_report};
    use crate::output::ReportFormat;

    #[test]
    fn test_json_document_shape() {
        let json = render(ReportFormat::Json, &sample_report());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let ladders = value["ladders"].as_array().unwrap();
        assert_eq!(ladders.len(), 2);
        assert_eq!(ladders[0]["ladder"], "hsk");
        assert_eq!(ladders[0]["total"], 4);
        assert_eq!(ladders[0]["levels"].as_array().unwrap().len(), 8);
        assert_eq!(ladders[1]["ladder"], "tocfl");
        assert_eq!(ladders[1]["levels"].as_array().unwrap().len(), 6);
        assert_eq!(ladders[1]["levels"][0]["count"], 2);
        assert_eq!(ladders[1]["levels"][0]["percentage"], 50.0);
    }
}
