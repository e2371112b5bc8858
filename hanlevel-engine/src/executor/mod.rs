//! Execution strategies for sentence batches

use crate::classifier::{LevelClassifier, SentenceLevels};
use crate::error::Result;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded, one sentence after another
    Sequential,
    /// Worker pool over sentences
    Parallel,
    /// Choose by batch size
    Adaptive,
}

/// Receives one tick per classified sentence
pub trait ProgressSink: Sync {
    /// `count` more sentences are done
    fn advance(&self, count: u64);
}

impl ProgressSink for () {
    fn advance(&self, _count: u64) {}
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Classify every sentence, returning results in input order
    fn classify_batch<S>(
        &self,
        classifier: &LevelClassifier,
        sentences: &[S],
        progress: &dyn ProgressSink,
    ) -> Result<Vec<SentenceLevels>>
    where
        S: AsRef<[u8]> + Sync;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on batch size
pub fn auto_select(sentence_count: usize, threshold: usize) -> ExecutionMode {
    if sentence_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
