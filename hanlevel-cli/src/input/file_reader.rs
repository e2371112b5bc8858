//! File reading and in-place rewriting

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// File access helpers with contextual errors
pub struct FileReader;

impl FileReader {
    /// Read a file as raw bytes; rows are decoded one at a time by the parsers
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        let content =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Write through `write` into a temporary sibling of `path`, then rename
    /// it over `path`. The original is untouched if `write` fails, and an
    /// existing file keeps its permissions.
    pub fn replace_with<F>(path: &Path, write: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            write(&mut writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write {}", temp.path().display()))?;
        }

        if let Ok(metadata) = fs::metadata(path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .with_context(|| {
                    format!("Failed to set permissions on {}", temp.path().display())
                })?;
        }

        temp.persist(path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }
}
