//! Error types for the pipeline

use thiserror::Error;

/// Error type for pipeline operations
///
/// Normal source exhaustion is not an error; it is the expected way a
/// pipeline run ends.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The text source reported a failure distinct from exhaustion.
    ///
    /// The feeder treats this like end-of-stream for progress purposes (the
    /// trailing delimiter is still enqueued and the analyzer still drains to
    /// completion), but the error is preserved and surfaced through
    /// [`PipelineOutcome`](crate::pipeline::PipelineOutcome).
    #[error("Source read error: {0}")]
    SourceRead(String),

    /// A pipeline thread panicked
    #[error("Worker thread failure: {0}")]
    Worker(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
