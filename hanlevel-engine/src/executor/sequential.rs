//! Sequential execution strategy

use crate::{
    classifier::{LevelClassifier, SentenceLevels},
    error::Result,
    executor::{ExecutionMode, Executor, ProgressSink},
};

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn classify_batch<S>(
        &self,
        classifier: &LevelClassifier,
        sentences: &[S],
        progress: &dyn ProgressSink,
    ) -> Result<Vec<SentenceLevels>>
    where
        S: AsRef<[u8]> + Sync,
    {
        let mut results = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            results.push(classifier.classify(sentence));
            progress.advance(1);
        }

        Ok(results)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
