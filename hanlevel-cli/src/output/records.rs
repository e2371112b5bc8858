//! Annotated sentence table writer

use std::borrow::Cow;
use std::io::Write;

use anyhow::Result;
use hanlevel_engine::SentenceLevels;

use crate::input::SentenceRecord;

/// Writes `sentence,pinyin,meaning,hsk,tocfl` rows
pub struct RecordWriter<W: Write> {
    writer: W,
    rows: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Create a new record writer
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0 }
    }

    /// Write the header line as is
    pub fn write_header(&mut self, header: &str) -> Result<()> {
        writeln!(self.writer, "{header}")?;
        Ok(())
    }

    /// Write one record with its levels; 0 stands for no level
    pub fn write_record(&mut self, record: &SentenceRecord, levels: &SentenceLevels) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{},{}",
            escape_field(&record.sentence),
            escape_field(&record.pinyin),
            escape_field(&record.meaning),
            levels.hsk,
            levels.tocfl
        )?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush the underlying writer
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Quote a field that holds a comma, quote or line break, doubling quotes
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
