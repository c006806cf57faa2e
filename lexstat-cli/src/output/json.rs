//! JSON output formatter

use super::{DisplayLimits, StatsFormatter};
use anyhow::Result;
use lexstat_core::StatsSnapshot;
use serde::Serialize;
use std::io::{self, Write};

/// JSON formatter - emits the snapshot plus derived rankings
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
struct StatsReport<'a> {
    snapshot: &'a StatsSnapshot,
    most_frequent_words: Vec<(String, u64)>,
    largest_words: Vec<(String, u64)>,
    smallest_words: Vec<(String, u64)>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl JsonFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StatsFormatter for JsonFormatter<W> {
    fn format_stats(&mut self, snapshot: &StatsSnapshot, limits: DisplayLimits) -> Result<()> {
        let report = StatsReport {
            snapshot,
            most_frequent_words: snapshot.most_frequent_words(limits.top_words),
            largest_words: snapshot.largest_words(limits.extreme_words),
            smallest_words: snapshot.smallest_words(limits.extreme_words),
        };
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_parses_back() {
        let snapshot = StatsSnapshot {
            total_chars: 5,
            total_words: 1,
            feeder_done: true,
            analyzer_done: true,
            char_freq: [('a', 4), (' ', 1)].into_iter().collect(),
            word_freq: [("aaaa".to_string(), 1)].into_iter().collect(),
        };

        let mut out = Vec::new();
        JsonFormatter::new(&mut out)
            .format_stats(&snapshot, DisplayLimits::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["snapshot"]["total_chars"], 5);
        assert_eq!(value["most_frequent_words"][0][0], "aaaa");
    }
}
