//! Pipeline configuration

use crate::error::{Error, Result};
use std::time::Duration;

/// Default configuration constants
pub mod defaults {
    use std::time::Duration;

    /// Characters read from the source per batch
    pub const BATCH_SIZE: usize = 5000;

    /// Queue capacity as a multiple of the batch size
    pub const CAPACITY_BATCHES: usize = 20;

    /// Analyzer poll timeout and suggested observer cadence
    pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

    /// Characters processed between frequency-map publications
    pub const PUBLISH_EVERY: u64 = 4096;
}

/// Processing configuration for a [`Pipeline`](crate::pipeline::Pipeline)
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub(crate) batch_size: usize,
    pub(crate) queue_capacity: usize,
    pub(crate) poll_interval: Duration,
    pub(crate) publish_every: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::BATCH_SIZE,
            queue_capacity: defaults::BATCH_SIZE * defaults::CAPACITY_BATCHES,
            poll_interval: defaults::POLL_INTERVAL,
            publish_every: defaults::PUBLISH_EVERY,
        }
    }
}

impl PipelineConfig {
    /// Create a configuration builder
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Characters read from the source per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Capacity of the bounded hand-off queue
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::Configuration(
                "batch_size must be greater than 0".into(),
            ));
        }

        if self.queue_capacity == 0 {
            return Err(Error::Configuration(
                "queue_capacity must be greater than 0".into(),
            ));
        }

        if self.publish_every == 0 {
            return Err(Error::Configuration(
                "publish_every must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`PipelineConfig`]
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    batch_size: Option<usize>,
    queue_capacity: Option<usize>,
    poll_interval: Option<Duration>,
    publish_every: Option<u64>,
}

impl PipelineConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source read batch size in characters.
    ///
    /// Unless [`queue_capacity`](Self::queue_capacity) is set explicitly, the
    /// queue capacity follows as `batch_size * 20`.
    pub fn batch_size(mut self, chars: usize) -> Self {
        self.batch_size = Some(chars);
        self
    }

    /// Set the hand-off queue capacity in characters
    pub fn queue_capacity(mut self, chars: usize) -> Self {
        self.queue_capacity = Some(chars);
        self
    }

    /// Set the analyzer poll timeout
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Set the number of processed characters between map publications
    pub fn publish_every(mut self, chars: u64) -> Self {
        self.publish_every = Some(chars);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<PipelineConfig> {
        let mut config = PipelineConfig::default();

        if let Some(size) = self.batch_size {
            config.batch_size = size;
            config.queue_capacity = size.saturating_mul(defaults::CAPACITY_BATCHES);
        }

        if let Some(capacity) = self.queue_capacity {
            config.queue_capacity = capacity;
        }

        if let Some(interval) = self.poll_interval {
            config.poll_interval = interval;
        }

        if let Some(every) = self.publish_every {
            config.publish_every = every;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.batch_size, 5000);
        assert_eq!(config.queue_capacity, 100_000);
    }

    #[test]
    fn test_capacity_follows_batch_size() {
        let config = PipelineConfig::builder().batch_size(100).build().unwrap();
        assert_eq!(config.queue_capacity, 2000);
    }

    #[test]
    fn test_explicit_capacity_wins() {
        let config = PipelineConfig::builder()
            .batch_size(100)
            .queue_capacity(64)
            .build()
            .unwrap();
        assert_eq!(config.queue_capacity, 64);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let result = PipelineConfig::builder().batch_size(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_zero_publish_interval_rejected() {
        let result = PipelineConfig::builder().publish_every(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
