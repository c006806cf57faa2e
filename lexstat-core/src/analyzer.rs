//! Frequency analyzer: drains the queue through the tally state machine

use std::sync::Arc;
use std::time::Duration;

use crate::queue::{CharReceiver, Popped};
use crate::stats::PipelineStats;
use crate::tally::FrequencyTally;

/// Consumes the character queue, driving a [`FrequencyTally`] and publishing
/// its results through the shared [`PipelineStats`].
///
/// Totals are bumped per character; the frequency maps are published as
/// copies every `publish_every` characters and once more at completion, so
/// the final published state is always exact. The analyzer has no failure
/// path: it runs until the feeder's queue half is dropped and the queue is
/// drained, then marks itself done.
pub struct FrequencyAnalyzer {
    receiver: CharReceiver,
    stats: Arc<PipelineStats>,
    poll_interval: Duration,
    publish_every: u64,
}

impl FrequencyAnalyzer {
    /// Create an analyzer over the consuming queue half
    pub fn new(
        receiver: CharReceiver,
        stats: Arc<PipelineStats>,
        poll_interval: Duration,
        publish_every: u64,
    ) -> Self {
        Self {
            receiver,
            stats,
            poll_interval,
            publish_every,
        }
    }

    /// Run the drain loop to completion and return the final tally
    pub fn run(self) -> FrequencyTally {
        let mut tally = FrequencyTally::new();
        let mut since_publish: u64 = 0;

        loop {
            match self.receiver.recv_timeout(self.poll_interval) {
                Popped::Char(c) => {
                    let words_before = tally.words_processed();
                    tally.observe(c);

                    self.stats.add_chars(1);
                    self.stats
                        .add_words(tally.words_processed() - words_before);

                    since_publish += 1;
                    if since_publish >= self.publish_every {
                        self.stats.publish_maps(tally.char_freq(), tally.word_freq());
                        since_publish = 0;
                    }
                }
                // Still connected; the feeder is either throttled by a slow
                // source or has simply not produced yet. Wait again.
                Popped::Empty => {}
                Popped::Disconnected => break,
            }
        }

        self.stats.publish_maps(tally.char_freq(), tally.word_freq());
        self.stats.mark_analyzer_done();
        log::debug!(
            "analyzer done: {} chars, {} words",
            tally.chars_processed(),
            tally.words_processed()
        );

        tally
    }
}
