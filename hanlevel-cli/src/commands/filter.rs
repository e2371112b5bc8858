//! Filter command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use hanlevel_engine::LadderKind;

use super::LadderArg;
use crate::error::CliError;
use crate::input::records::{byte_lines, split_fields};
use crate::input::FileReader;

/// Arguments for the filter command
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Annotated sentence file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Ladder column to filter on
    #[arg(long, value_enum, default_value = "tocfl")]
    pub ladder: LadderArg,

    /// Level to keep; 0 selects sentences no level covers
    #[arg(short, long, value_name = "N")]
    pub level: u8,

    /// Keep every covered level up to and including --level
    #[arg(long)]
    pub at_most: bool,
}

/// Which annotated rows to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelFilter {
    /// Ladder whose column is read
    pub ladder: LadderKind,
    /// Level compared against
    pub level: u8,
    /// Accept `1..=level` instead of exactly `level`
    pub at_most: bool,
}

impl LevelFilter {
    /// Whether a row annotated with `value` is kept. Level 0 never passes
    /// an `at_most` filter unless `level` itself is 0.
    pub fn accepts(&self, value: u8) -> bool {
        value == self.level || (self.at_most && (1..=self.level).contains(&value))
    }

    /// Header column holding this ladder's levels
    pub fn column_name(&self) -> String {
        format!("{} Level", self.ladder)
    }

    /// Copy the header and every accepted row of `content` to `out`.
    /// Returns `(kept, skipped)`; rows that are not UTF-8 or whose level cell
    /// is missing or not a number count as skipped.
    pub fn apply(
        &self,
        content: impl AsRef<[u8]>,
        out: &mut dyn Write,
    ) -> Result<(usize, usize)> {
        let mut lines = byte_lines(content.as_ref());
        let header = lines.next().ok_or(CliError::EmptyInput)?;

        let column_name = self.column_name();
        let column = split_fields(&String::from_utf8_lossy(header), usize::MAX)
            .iter()
            .position(|name| name.trim() == column_name)
            .ok_or_else(|| CliError::MissingColumn(column_name.clone()))?;

        out.write_all(header)?;
        writeln!(out)?;
        let (mut kept, mut skipped) = (0, 0);
        for line in lines.filter(|line| !line.is_empty()) {
            let value = std::str::from_utf8(line).ok().and_then(|line| {
                split_fields(line, column + 1)
                    .get(column)
                    .and_then(|cell| cell.trim().parse::<u8>().ok())
            });
            match value {
                Some(value) if self.accepts(value) => {
                    out.write_all(line)?;
                    writeln!(out)?;
                    kept += 1;
                }
                Some(_) => {}
                None => skipped += 1,
            }
        }

        Ok((kept, skipped))
    }
}

impl FilterArgs {
    /// Execute the filter command
    pub fn execute(&self) -> Result<()> {
        let filter = LevelFilter {
            ladder: self.ladder.into(),
            level: self.level,
            at_most: self.at_most,
        };
        let content = FileReader::read_bytes(&self.input)?;

        let (kept, skipped) = match &self.output {
            Some(path) => {
                let mut out = BufWriter::new(create(path)?);
                let counts = filter.apply(&content, &mut out)?;
                out.flush()
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                counts
            }
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                let counts = filter.apply(&content, &mut out)?;
                out.flush()?;
                counts
            }
        };

        if skipped > 0 {
            log::warn!("Skipped {skipped} rows without a readable {}", filter.column_name());
        }
        log::info!(
            "Kept {kept} rows at {} level {}{}",
            filter.ladder,
            filter.level,
            if filter.at_most { " or below" } else { "" }
        );
        Ok(())
    }
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create {}", path.display()))
}
