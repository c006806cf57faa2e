//! Pipeline orchestration: wires the feeder and analyzer threads together

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::analyzer::FrequencyAnalyzer;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::feeder::StreamFeeder;
use crate::queue::char_queue;
use crate::source::TextSource;
use crate::stats::{PipelineStats, StatsSnapshot};
use crate::tally::FrequencyTally;

/// A configured frequency-analysis pipeline
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a pipeline with default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// The pipeline's configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Spawn the feeder and analyzer threads over `source`.
    ///
    /// Statistics become observable immediately through
    /// [`PipelineHandle::stats`]; completion is reported by
    /// [`PipelineHandle::join`].
    pub fn spawn(&self, source: Box<dyn TextSource + Send>) -> Result<PipelineHandle> {
        let (sender, receiver) = char_queue(self.config.queue_capacity);
        let stats = Arc::new(PipelineStats::new());

        let feeder = StreamFeeder::new(
            source,
            sender,
            Arc::clone(&stats),
            self.config.batch_size,
        );
        let feeder_handle = thread::Builder::new()
            .name("lexstat-feeder".into())
            .spawn(move || feeder.run())
            .map_err(|e| Error::Worker(format!("failed to spawn feeder: {e}")))?;

        let analyzer = FrequencyAnalyzer::new(
            receiver,
            Arc::clone(&stats),
            self.config.poll_interval,
            self.config.publish_every,
        );
        let analyzer_handle = thread::Builder::new()
            .name("lexstat-analyzer".into())
            .spawn(move || analyzer.run())
            .map_err(|e| Error::Worker(format!("failed to spawn analyzer: {e}")))?;

        Ok(PipelineHandle {
            stats,
            feeder: feeder_handle,
            analyzer: analyzer_handle,
        })
    }

    /// Spawn over `source` and block until completion
    pub fn run(&self, source: Box<dyn TextSource + Send>) -> Result<PipelineOutcome> {
        self.spawn(source)?.join()
    }
}

/// Handle to a running pipeline
pub struct PipelineHandle {
    stats: Arc<PipelineStats>,
    feeder: JoinHandle<Result<()>>,
    analyzer: JoinHandle<FrequencyTally>,
}

impl PipelineHandle {
    /// Live statistics handle for observers
    pub fn stats(&self) -> Arc<PipelineStats> {
        Arc::clone(&self.stats)
    }

    /// Whether both pipeline stages have finished
    pub fn is_complete(&self) -> bool {
        self.stats.analyzer_done()
    }

    /// Wait for both threads and collect the outcome.
    ///
    /// A source failure does not abort the analyzer; it is carried in
    /// [`PipelineOutcome::source_error`] next to the complete statistics for
    /// everything read before the failure.
    pub fn join(self) -> Result<PipelineOutcome> {
        let feed_result = self
            .feeder
            .join()
            .map_err(|_| Error::Worker("feeder thread panicked".into()))?;
        self.analyzer
            .join()
            .map_err(|_| Error::Worker("analyzer thread panicked".into()))?;

        Ok(PipelineOutcome {
            snapshot: self.stats.snapshot(),
            source_error: feed_result.err(),
        })
    }
}

/// Final result of a pipeline run
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Final statistics (complete and exact)
    pub snapshot: StatsSnapshot,
    /// Preserved source failure, if the stream ended abnormally
    pub source_error: Option<Error>,
}
