//! Configuration types for the engine

use hanlevel_core::{SegmenterConfig, DEFAULT_MAX_WORD_BYTES, MIN_CANDIDATE_BYTES};

use crate::error::{EngineError, Result};
use crate::ExecutionMode;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum number of sentences before adaptive mode goes parallel
    pub parallel_threshold: usize,
    /// Segmenter settings shared by every classification
    pub segmenter: SegmenterConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 2_000,
            segmenter: SegmenterConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Configuration that switches to the worker pool early
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 256,
            ..Self::default()
        }
    }

    /// Check values that would make classification meaningless
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }

        if self.segmenter.max_candidate_bytes() < MIN_CANDIDATE_BYTES {
            return Err(EngineError::Config(format!(
                "max_word_bytes must be greater than {MIN_CANDIDATE_BYTES}, got {}",
                self.segmenter.max_word_bytes
            )));
        }

        // Stored words are cut to DEFAULT_MAX_WORD_BYTES - 1, so longer runs never match
        if self.segmenter.max_word_bytes > DEFAULT_MAX_WORD_BYTES {
            return Err(EngineError::Config(format!(
                "max_word_bytes must be at most {DEFAULT_MAX_WORD_BYTES}, got {}",
                self.segmenter.max_word_bytes
            )));
        }

        Ok(())
    }

    /// Worker count the parallel executor will use
    pub fn effective_threads(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.threads.unwrap_or_else(num_cpus::get)
        }

        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(EngineConfig::default().parallel_threshold, 2_000);
        assert_eq!(
            EngineConfig::sequential().execution_mode,
            ExecutionMode::Sequential
        );
        assert_eq!(EngineConfig::fast().parallel_threshold, 256);
    }

    #[test]
    fn test_validate_rejects_zero_threads() {
        let config = EngineConfig {
            threads: Some(0),
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_tiny_word_bound() {
        let mut config = EngineConfig::default();
        config.segmenter.max_word_bytes = 3;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_word_bytes"));

        config.segmenter.max_word_bytes = 4;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_word_bound_above_stored_length() {
        let mut config = EngineConfig::default();
        config.segmenter.max_word_bytes = 100;
        assert!(config.validate().is_ok());

        config.segmenter.max_word_bytes = 101;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at most 100"));
    }
}
