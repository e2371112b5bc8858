//! Progress reporting module

use hanlevel_engine::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for sentence classification
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar for one file's sentences
    pub fn init_sentences(&mut self, total_sentences: u64, filename: &str) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} sentences {msg}")
            .map(|style| style.progress_chars("##-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());

        let pb = ProgressBar::new(total_sentences);
        pb.set_style(style);
        pb.set_message(filename.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Sentences counted so far on the current bar
    pub fn position(&self) -> u64 {
        self.progress_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

impl ProgressSink for ProgressReporter {
    fn advance(&self, count: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_sentences(10, "sentences.csv");
        reporter.advance(3);
        reporter.finish();
        assert_eq!(reporter.position(), 0);
    }

    #[test]
    fn test_reporter_counts_sentences() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_sentences(10, "sentences.csv");
        reporter.advance(3);
        reporter.advance(4);
        assert_eq!(reporter.position(), 7);
        reporter.finish();
    }
}
