//! Output formatting module

use anyhow::Result;
use lexstat_core::StatsSnapshot;

/// Display settings shared by the formatters
#[derive(Debug, Clone, Copy)]
pub struct DisplayLimits {
    /// Number of most-frequent words to include
    pub top_words: usize,
    /// Number of largest/smallest words to include
    pub extreme_words: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            top_words: 10,
            extreme_words: 5,
        }
    }
}

/// Trait for final-statistics formatters
pub trait StatsFormatter {
    /// Format and write the final statistics
    fn format_stats(&mut self, snapshot: &StatsSnapshot, limits: DisplayLimits) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
