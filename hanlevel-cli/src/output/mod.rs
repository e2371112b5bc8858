//! Output formatting module
//!
//! Two kinds of output leave the CLI: the annotated sentence table
//! ([`RecordWriter`]) and the level breakdown report, rendered by one of the
//! [`ReportFormatter`] implementations.

use std::io::Write;

use anyhow::Result;
use hanlevel_engine::{BatchReport, LadderKind, LevelBreakdown};
use serde::{Deserialize, Serialize};

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format the breakdown of one ladder
    fn format_breakdown(&mut self, breakdown: &LevelBreakdown) -> Result<()>;

    /// Finalize output (e.g., close the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod records;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use records::RecordWriter;
pub use text::TextFormatter;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Banner-style plain text breakdown
    Text,
    /// JSON document with counts and percentages
    Json,
    /// Markdown tables
    Markdown,
}

/// Build the formatter for `format` over `writer`
pub fn create_formatter<'a, W: Write + 'a>(
    format: ReportFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn ReportFormatter + 'a> {
    match format {
        ReportFormat::Text => Box::new(TextFormatter::new(writer)),
        ReportFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        ReportFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Render both ladders of `report`, HSK first
pub fn write_report(formatter: &mut dyn ReportFormatter, report: &BatchReport) -> Result<()> {
    for kind in LadderKind::ALL {
        formatter.format_breakdown(report.breakdown(kind))?;
    }
    formatter.finish()
}
