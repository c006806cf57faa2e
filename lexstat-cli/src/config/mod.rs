//! Configuration module

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Synthetic source configuration
    #[serde(default)]
    pub source: SourceConfig,

    /// Pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineSection,

    /// Render configuration
    #[serde(default)]
    pub render: RenderConfig,
}

/// Synthetic source configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Kilobytes of synthetic text to generate
    pub size_kb: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { size_kb: 500_000 }
    }
}

/// Pipeline-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct PipelineSection {
    /// Characters read from the source per batch
    pub batch_size: usize,

    /// Hand-off queue capacity (0 = batch_size * 20)
    pub queue_capacity: usize,

    /// Characters processed between statistics publications
    pub publish_every: u64,
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            batch_size: 5000,
            queue_capacity: 0,
            publish_every: 4096,
        }
    }
}

/// Render-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Milliseconds between statistics polls
    pub refresh_ms: u64,

    /// Number of most-frequent words to display
    pub top_words: usize,

    /// Number of largest/smallest words to display
    pub extreme_words: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            refresh_ms: 100,
            top_words: 10,
            extreme_words: 5,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Serialize the configuration to TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialize configuration")
    }
}
