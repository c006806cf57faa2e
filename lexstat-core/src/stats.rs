//! Shared pipeline statistics and the observer-facing snapshot
//!
//! The analyzer is the single writer: totals are bumped live through
//! atomics, frequency maps are published as whole copies at intervals and at
//! completion. Observers only ever clone under a read lock, so a snapshot
//! may lag the live totals by up to one publication interval but is never a
//! torn view of either map.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Shared statistics handle for a running pipeline
#[derive(Debug, Default)]
pub struct PipelineStats {
    total_chars: AtomicU64,
    total_words: AtomicU64,
    feeder_done: AtomicBool,
    analyzer_done: AtomicBool,
    char_freq: RwLock<HashMap<char, u64>>,
    word_freq: RwLock<HashMap<String, u64>>,
}

impl PipelineStats {
    /// Create an empty statistics handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Every character dequeued by the analyzer, regardless of classification
    pub fn total_chars(&self) -> u64 {
        self.total_chars.load(Ordering::Acquire)
    }

    /// Every completed word flush, including empty-word flushes
    pub fn total_words(&self) -> u64 {
        self.total_words.load(Ordering::Acquire)
    }

    /// Whether the feeder has enqueued its last character
    pub fn feeder_done(&self) -> bool {
        self.feeder_done.load(Ordering::Acquire)
    }

    /// Whether the analyzer has drained the queue and finished
    pub fn analyzer_done(&self) -> bool {
        self.analyzer_done.load(Ordering::Acquire)
    }

    /// Point-in-time copy of all counters, maps, and completion flags
    pub fn snapshot(&self) -> StatsSnapshot {
        // Read-lock poisoning would require a panicked writer; the analyzer
        // has no panic path, but an observer must not crash either way.
        let char_freq = self
            .char_freq
            .read()
            .map(|m| m.clone())
            .unwrap_or_default();
        let word_freq = self
            .word_freq
            .read()
            .map(|m| m.clone())
            .unwrap_or_default();

        StatsSnapshot {
            total_chars: self.total_chars(),
            total_words: self.total_words(),
            feeder_done: self.feeder_done(),
            analyzer_done: self.analyzer_done(),
            char_freq,
            word_freq,
        }
    }

    pub(crate) fn add_chars(&self, n: u64) {
        self.total_chars.fetch_add(n, Ordering::AcqRel);
    }

    pub(crate) fn add_words(&self, n: u64) {
        self.total_words.fetch_add(n, Ordering::AcqRel);
    }

    pub(crate) fn mark_feeder_done(&self) {
        self.feeder_done.store(true, Ordering::Release);
    }

    pub(crate) fn mark_analyzer_done(&self) {
        self.analyzer_done.store(true, Ordering::Release);
    }

    /// Replace the published maps with fresh copies from the analyzer
    pub(crate) fn publish_maps(
        &self,
        char_freq: &HashMap<char, u64>,
        word_freq: &HashMap<String, u64>,
    ) {
        if let Ok(mut published) = self.char_freq.write() {
            published.clone_from(char_freq);
        }
        if let Ok(mut published) = self.word_freq.write() {
            published.clone_from(word_freq);
        }
    }
}

/// Read-only statistics snapshot handed to observers
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StatsSnapshot {
    /// Total characters processed by the analyzer
    pub total_chars: u64,
    /// Total word flushes
    pub total_words: u64,
    /// Feeder completion flag
    pub feeder_done: bool,
    /// Analyzer completion flag
    pub analyzer_done: bool,
    /// Character frequency as of the last publication
    pub char_freq: HashMap<char, u64>,
    /// Cleaned-word frequency as of the last publication
    pub word_freq: HashMap<String, u64>,
}

impl StatsSnapshot {
    /// Number of distinct cleaned words seen
    pub fn unique_words(&self) -> usize {
        self.word_freq.len()
    }

    /// Number of distinct characters counted
    pub fn unique_chars(&self) -> usize {
        self.char_freq.len()
    }

    /// The `n` most frequent words, descending by count.
    ///
    /// Ties break ascending by word so the ordering is deterministic.
    pub fn most_frequent_words(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<_> = self
            .word_freq
            .iter()
            .map(|(w, &c)| (w.clone(), c))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// The `n` longest words, descending by character length then by word
    pub fn largest_words(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<_> = self
            .word_freq
            .iter()
            .map(|(w, &c)| (w.clone(), c))
            .collect();
        entries.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| b.0.cmp(&a.0))
        });
        entries.truncate(n);
        entries
    }

    /// The `n` shortest words, ascending by character length then by word
    pub fn smallest_words(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<_> = self
            .word_freq
            .iter()
            .map(|(w, &c)| (w.clone(), c))
            .collect();
        entries.sort_by(|a, b| {
            a.0.chars()
                .count()
                .cmp(&b.0.chars().count())
                .then_with(|| a.0.cmp(&b.0))
        });
        entries.truncate(n);
        entries
    }

    /// All character counts, descending by frequency with character tie-break
    pub fn char_frequency_desc(&self) -> Vec<(char, u64)> {
        let mut entries: Vec<_> = self.char_freq.iter().map(|(&ch, &c)| (ch, c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}
