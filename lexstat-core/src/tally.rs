//! The word-boundary state machine and frequency accumulator
//!
//! [`FrequencyTally`] is the sequential heart of the analyzer: a pure state
//! machine that reconstructs words from a character stream and maintains
//! running character and word frequency counts. It has no threading concerns
//! of its own, which makes it directly testable and usable as the reference
//! implementation against the concurrent pipeline.

use std::collections::HashMap;

/// Word-boundary delimiters: space and period
pub fn is_delimiter(c: char) -> bool {
    c == ' ' || c == '.'
}

/// Lowercase a word and strip everything outside `{a-z, ', -}`.
///
/// Case mapping happens before filtering, so uppercase letters survive as
/// their lowercase forms while digits and punctuation are dropped. The
/// result may be empty.
pub fn cleanup(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c == '\'' || c == '-')
        .collect()
}

/// Running frequency statistics over a character stream
#[derive(Debug, Default, Clone)]
pub struct FrequencyTally {
    word_buffer: String,
    char_freq: HashMap<char, u64>,
    word_freq: HashMap<String, u64>,
    chars_processed: u64,
    words_processed: u64,
}

impl FrequencyTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one character through the state machine.
    ///
    /// A delimiter counts itself and every buffered character into the
    /// character frequencies, then flushes the cleaned word buffer into the
    /// word frequencies. Every delimiter flushes, so a run of consecutive
    /// delimiters records the empty word once per extra delimiter. Any other
    /// character is buffered untouched; filtering and case-folding happen
    /// only at flush time.
    pub fn observe(&mut self, c: char) {
        self.chars_processed += 1;

        if is_delimiter(c) {
            *self.char_freq.entry(c).or_insert(0) += 1;

            for buffered in self.word_buffer.chars() {
                *self.char_freq.entry(buffered).or_insert(0) += 1;
            }

            let cleaned = cleanup(&self.word_buffer);
            *self.word_freq.entry(cleaned).or_insert(0) += 1;
            self.words_processed += 1;
            self.word_buffer.clear();
        } else {
            self.word_buffer.push(c);
        }
    }

    /// Feed every character of `text` through the state machine
    pub fn observe_all(&mut self, text: impl IntoIterator<Item = char>) {
        for c in text {
            self.observe(c);
        }
    }

    /// Total characters observed, regardless of classification
    pub fn chars_processed(&self) -> u64 {
        self.chars_processed
    }

    /// Total word flushes (one per delimiter observed)
    pub fn words_processed(&self) -> u64 {
        self.words_processed
    }

    /// Character frequencies counted so far.
    ///
    /// Characters still sitting in the word buffer are not yet reflected;
    /// they are counted when the next delimiter flushes them.
    pub fn char_freq(&self) -> &HashMap<char, u64> {
        &self.char_freq
    }

    /// Cleaned-word frequencies counted so far
    pub fn word_freq(&self) -> &HashMap<String, u64> {
        &self.word_freq
    }

    /// Characters buffered since the last delimiter
    pub fn pending_word(&self) -> &str {
        &self.word_buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_drops_punctuation() {
        assert_eq!(cleanup("Hello,"), "hello");
    }

    #[test]
    fn test_cleanup_keeps_apostrophe_and_hyphen() {
        assert_eq!(cleanup("DON'T-STOP"), "don't-stop");
    }

    #[test]
    fn test_cleanup_may_be_empty() {
        assert_eq!(cleanup("123!?"), "");
        assert_eq!(cleanup(""), "");
    }

    #[test]
    fn test_cleanup_lowercases_before_filtering() {
        assert_eq!(cleanup("MiXeD"), "mixed");
    }

    #[test]
    fn test_scenario_cat_cat_dog() {
        let mut tally = FrequencyTally::new();
        tally.observe_all("cat cat dog.".chars());

        assert_eq!(tally.words_processed(), 3);
        assert_eq!(tally.chars_processed(), 12);
        assert_eq!(tally.word_freq().get("cat"), Some(&2));
        assert_eq!(tally.word_freq().get("dog"), Some(&1));
        assert_eq!(tally.word_freq().len(), 2);

        assert_eq!(tally.char_freq().get(&' '), Some(&2));
        assert_eq!(tally.char_freq().get(&'.'), Some(&1));
        assert_eq!(tally.char_freq().get(&'c'), Some(&2));
        assert_eq!(tally.char_freq().get(&'a'), Some(&2));
        assert_eq!(tally.char_freq().get(&'t'), Some(&2));
        assert_eq!(tally.char_freq().get(&'d'), Some(&1));
        assert_eq!(tally.char_freq().get(&'o'), Some(&1));
        assert_eq!(tally.char_freq().get(&'g'), Some(&1));
    }

    #[test]
    fn test_consecutive_delimiters_record_empty_word() {
        let mut tally = FrequencyTally::new();
        tally.observe_all("a  b.".chars());

        // "a", "", "b" — the double space flushes an empty buffer.
        assert_eq!(tally.words_processed(), 3);
        assert_eq!(tally.word_freq().get("a"), Some(&1));
        assert_eq!(tally.word_freq().get(""), Some(&1));
        assert_eq!(tally.word_freq().get("b"), Some(&1));
    }

    #[test]
    fn test_lone_delimiter_flushes_empty_word() {
        let mut tally = FrequencyTally::new();
        tally.observe(' ');
        assert_eq!(tally.chars_processed(), 1);
        assert_eq!(tally.words_processed(), 1);
        assert_eq!(tally.word_freq().get(""), Some(&1));
    }

    #[test]
    fn test_buffered_chars_not_counted_until_flush() {
        let mut tally = FrequencyTally::new();
        tally.observe_all("cat".chars());

        assert_eq!(tally.chars_processed(), 3);
        assert_eq!(tally.words_processed(), 0);
        assert!(tally.char_freq().is_empty());
        assert_eq!(tally.pending_word(), "cat");

        tally.observe(' ');
        assert_eq!(tally.char_freq().get(&'c'), Some(&1));
        assert_eq!(tally.pending_word(), "");
    }

    #[test]
    fn test_raw_buffer_counts_uppercase_separately() {
        let mut tally = FrequencyTally::new();
        tally.observe_all("Cat cat ".chars());

        // Char frequency sees the raw stream; word frequency the cleaned one.
        assert_eq!(tally.char_freq().get(&'C'), Some(&1));
        assert_eq!(tally.char_freq().get(&'c'), Some(&1));
        assert_eq!(tally.word_freq().get("cat"), Some(&2));
    }

    #[test]
    fn test_period_is_a_delimiter_not_a_word_char() {
        let mut tally = FrequencyTally::new();
        tally.observe_all("end.start ".chars());

        assert_eq!(tally.words_processed(), 2);
        assert_eq!(tally.word_freq().get("end"), Some(&1));
        assert_eq!(tally.word_freq().get("start"), Some(&1));
    }
}
