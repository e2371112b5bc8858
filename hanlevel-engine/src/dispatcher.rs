//! Adaptive execution dispatcher
//!
//! Selects between sequential and parallel classification based on batch
//! size and the engine configuration.

use std::time::{Duration, Instant};

use crate::{
    classifier::{LevelClassifier, SentenceLevels},
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, ProgressSink, SequentialExecutor},
    stats::BatchReport,
};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Results of one batch plus how they were produced
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// Levels per sentence, in input order
    pub levels: Vec<SentenceLevels>,
    /// Counts per level for both ladders
    pub report: BatchReport,
    /// Mode that actually ran
    pub mode_used: ExecutionMode,
    /// Wall time spent classifying
    pub elapsed: Duration,
}

/// Adaptive execution dispatcher
pub struct AdaptiveDispatcher {
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: ParallelExecutor,
    config: EngineConfig,
}

impl AdaptiveDispatcher {
    /// Create a new dispatcher with the given configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sequential_executor: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel_executor: ParallelExecutor::new(config.threads),
            config,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mode that would run for a batch of `sentence_count` sentences
    pub fn select_mode(&self, sentence_count: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(sentence_count, self.config.parallel_threshold),
            mode => mode,
        }
    }

    /// Classify a batch, picking the executor by batch size
    pub fn classify_batch<S>(
        &self,
        classifier: &LevelClassifier,
        sentences: &[S],
        progress: &dyn ProgressSink,
    ) -> Result<BatchOutput>
    where
        S: AsRef<[u8]> + Sync,
    {
        let mode = self.select_mode(sentences.len());
        let start = Instant::now();

        let levels = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                self.parallel_executor
                    .classify_batch(classifier, sentences, progress)?
            }
            _ => self
                .sequential_executor
                .classify_batch(classifier, sentences, progress)?,
        };

        let elapsed = start.elapsed();
        let mode_used = if cfg!(feature = "parallel") && mode == ExecutionMode::Parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        };
        log::info!(
            "classified {} sentences in {:.2?} ({:?})",
            levels.len(),
            elapsed,
            mode_used
        );

        Ok(BatchOutput {
            report: BatchReport::from_results(&levels),
            levels,
            mode_used,
            elapsed,
        })
    }
}
