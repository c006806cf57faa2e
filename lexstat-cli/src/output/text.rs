//! Plain text output formatter

use super::{DisplayLimits, StatsFormatter};
use anyhow::Result;
use lexstat_core::StatsSnapshot;
use std::io::{self, Write};

/// Plain text formatter - aligned statistics tables
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

/// Render a word for display; the empty word shows as `""`
fn display_word(word: &str) -> String {
    if word.is_empty() {
        "\"\"".to_string()
    } else {
        word.to_string()
    }
}

impl<W: Write> TextFormatter<W> {
    fn write_word_list(&mut self, title: &str, entries: &[(String, u64)]) -> Result<()> {
        writeln!(self.writer, "{title}:")?;
        for (rank, (word, count)) in entries.iter().enumerate() {
            writeln!(
                self.writer,
                "  #{} - {} ({} times)",
                rank + 1,
                display_word(word),
                count
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> StatsFormatter for TextFormatter<W> {
    fn format_stats(&mut self, snapshot: &StatsSnapshot, limits: DisplayLimits) -> Result<()> {
        writeln!(self.writer, "TOTALS:")?;
        writeln!(self.writer, "  WORDS:        {}", snapshot.total_words)?;
        writeln!(self.writer, "  UNIQUE WORDS: {}", snapshot.unique_words())?;
        writeln!(self.writer, "  CHARS:        {}", snapshot.total_chars)?;
        writeln!(self.writer, "  UNIQUE CHARS: {}", snapshot.unique_chars())?;
        writeln!(self.writer)?;

        self.write_word_list(
            &format!("{} MOST FREQUENT WORDS", limits.top_words),
            &snapshot.most_frequent_words(limits.top_words),
        )?;
        self.write_word_list(
            &format!("{} LARGEST WORDS", limits.extreme_words),
            &snapshot.largest_words(limits.extreme_words),
        )?;
        self.write_word_list(
            &format!("{} SMALLEST WORDS", limits.extreme_words),
            &snapshot.smallest_words(limits.extreme_words),
        )?;

        writeln!(self.writer, "CHARACTER FREQUENCY (descending):")?;
        for (column, (ch, count)) in snapshot.char_frequency_desc().iter().enumerate() {
            write!(self.writer, "  [{}]:{}", ch.escape_default(), count)?;
            // 7 columns per row
            if (column + 1) % 7 == 0 {
                writeln!(self.writer)?;
            }
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
