//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hanlevel_core::{ScriptPolicy, DEFAULT_MAX_WORD_BYTES};
use hanlevel_engine::{EngineConfig, ExecutionMode, SegmenterConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::ReportFormat;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Vocabulary file locations
    #[serde(default)]
    pub vocabulary: VocabularyConfig,

    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Where the per-level word lists live
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Directory holding the level files
    pub dir: PathBuf,

    /// File name pattern with `{ladder}` and `{level}` placeholders
    pub file_pattern: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("vocabCsv"),
            file_pattern: "{ladder}_level{level}_sorted.csv".to_string(),
        }
    }
}

/// Processing-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Which characters must be covered by vocabulary
    pub script_policy: ScriptPolicy,

    /// Candidate word length bound in bytes (candidates are one shorter)
    pub max_word_bytes: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            script_policy: ScriptPolicy::default(),
            max_word_bytes: DEFAULT_MAX_WORD_BYTES,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format
    pub report_format: ReportFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_format: ReportFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Sentence count at which adaptive mode switches to the worker pool
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 2_000,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load `path` when given, otherwise the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Segmenter settings derived from `[processing]`
    pub fn segmenter_config(&self) -> SegmenterConfig {
        SegmenterConfig {
            max_word_bytes: self.processing.max_word_bytes,
            policy: self.processing.script_policy,
        }
    }

    /// Engine settings derived from `[performance]` and `[processing]`.
    /// `force_parallel` and `threads` come from the command line and win
    /// over the file.
    pub fn engine_config(&self, force_parallel: bool, threads: Option<usize>) -> EngineConfig {
        let threads = threads.or(match self.performance.worker_threads {
            0 => None,
            n => Some(n),
        });

        EngineConfig {
            execution_mode: if force_parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Adaptive
            },
            threads,
            parallel_threshold: self.performance.parallel_threshold,
            segmenter: self.segmenter_config(),
        }
    }
}
