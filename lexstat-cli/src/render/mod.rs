//! Live progress reporting over a running pipeline

use indicatif::{ProgressBar, ProgressStyle};
use lexstat_core::PipelineStats;
use std::sync::Arc;
use std::time::Duration;

/// Polls pipeline statistics on a fixed cadence, driving a progress bar
/// until the analyzer reports completion.
pub struct LiveRenderer {
    progress_bar: Option<ProgressBar>,
    refresh: Duration,
    quiet: bool,
}

impl LiveRenderer {
    /// Create a new renderer polling every `refresh`
    pub fn new(refresh: Duration, quiet: bool) -> Self {
        Self {
            progress_bar: None,
            refresh,
            quiet,
        }
    }

    /// Initialize the progress bar for an expected character total
    pub fn init(&mut self, expected_chars: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(expected_chars);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} chars {msg}")
                .unwrap()
                .progress_chars("##-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Poll `stats` until the analyzer is done.
    ///
    /// Each poll takes one snapshot; the maps may lag the live totals by a
    /// publication interval, which is fine for display. After the analyzer
    /// flag flips, the caller takes one final read for exact results.
    pub fn watch(&self, stats: &Arc<PipelineStats>) {
        while !stats.analyzer_done() {
            if let Some(pb) = &self.progress_bar {
                let snap = stats.snapshot();
                pb.set_position(snap.total_chars);
                pb.set_message(format!(
                    "{} words, {} unique",
                    snap.total_words,
                    snap.unique_words()
                ));
            }
            std::thread::sleep(self.refresh);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_renderer_has_no_bar() {
        let mut renderer = LiveRenderer::new(Duration::from_millis(10), true);
        renderer.init(1000);
        assert!(renderer.progress_bar.is_none());
        renderer.finish();
    }

    #[test]
    fn test_watch_returns_once_analyzer_done() {
        use lexstat_core::{Pipeline, StrSource};

        let pipeline = Pipeline::with_defaults();
        let handle = pipeline
            .spawn(Box::new(StrSource::new("watch me finish.")))
            .unwrap();
        let stats = handle.stats();

        // watch() must observe the completion flag and return.
        let renderer = LiveRenderer::new(Duration::from_millis(1), true);
        renderer.watch(&stats);

        assert!(stats.analyzer_done());
        handle.join().unwrap();
    }
}
