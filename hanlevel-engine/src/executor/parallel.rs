//! Parallel execution strategy
//!
//! Sentences are independent, so the batch is mapped over a rayon pool. The
//! indexed parallel iterator collects back into input order, which keeps the
//! written records aligned with the source file.

use rayon::prelude::*;

use crate::{
    classifier::{LevelClassifier, SentenceLevels},
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor, ProgressSink},
};

/// Parallel multi-threaded executor
#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    threads: usize,
}

impl ParallelExecutor {
    /// Create a new parallel executor (None = one worker per CPU)
    pub fn new(threads: Option<usize>) -> Self {
        Self {
            threads: threads.unwrap_or_else(num_cpus::get).max(1),
        }
    }

    /// Number of workers in the pool
    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl Executor for ParallelExecutor {
    fn classify_batch<S>(
        &self,
        classifier: &LevelClassifier,
        sentences: &[S],
        progress: &dyn ProgressSink,
    ) -> Result<Vec<SentenceLevels>>
    where
        S: AsRef<[u8]> + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        log::debug!(
            "classifying {} sentences on {} threads",
            sentences.len(),
            self.threads
        );

        let results = pool.install(|| {
            sentences
                .par_iter()
                .map(|sentence| {
                    let levels = classifier.classify(sentence);
                    progress.advance(1);
                    levels
                })
                .collect()
        });

        Ok(results)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
