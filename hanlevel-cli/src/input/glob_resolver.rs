//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::CliError;

/// Expand every pattern and return the matching regular files, sorted and
/// without duplicates. A literal path is a pattern that matches itself.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for pattern in patterns {
        let matches = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for entry in matches {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.insert(path);
            } else {
                log::debug!("Skipping {}: not a regular file", path.display());
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles(patterns.join(", ")).into());
    }

    log::debug!("Resolved {} input files", files.len());
    Ok(files.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_glob_and_dedups() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.csv"), "").unwrap();
        fs::write(temp_dir.path().join("a.csv"), "").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

        let dir = temp_dir.path().display();
        let files = resolve_patterns(&[
            format!("{dir}/*.csv"),
            format!("{dir}/a.csv"),
        ])
        .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_no_match_is_reported() {
        let err = resolve_patterns(&["/nonexistent/*.csv".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("No input files match"));
    }

    #[test]
    fn test_bad_pattern_is_rejected() {
        let err = resolve_patterns(&["[unclosed".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern"));
    }

    #[test]
    fn test_directories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub.csv")).unwrap();

        let pattern = format!("{}/*.csv", temp_dir.path().display());
        assert!(resolve_patterns(&[pattern]).is_err());
    }
}
