//! Stream feeder: pumps the text source into the hand-off queue

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::queue::CharSender;
use crate::source::TextSource;
use crate::stats::PipelineStats;

/// Drains a [`TextSource`] into the character queue in batches.
///
/// After the source is exhausted (or fails), one trailing space is enqueued
/// so the analyzer always flushes the final partial word, then the feeder
/// marks itself done and drops its queue half. Backpressure is handled by
/// the queue itself: a full queue blocks the batch push until the analyzer
/// catches up.
pub struct StreamFeeder {
    source: Box<dyn TextSource + Send>,
    sender: CharSender,
    stats: Arc<PipelineStats>,
    batch_size: usize,
}

impl StreamFeeder {
    /// Create a feeder over `source`
    pub fn new(
        source: Box<dyn TextSource + Send>,
        sender: CharSender,
        stats: Arc<PipelineStats>,
        batch_size: usize,
    ) -> Self {
        Self {
            source,
            sender,
            stats,
            batch_size,
        }
    }

    /// Run the feed loop to completion.
    ///
    /// Returns `Err(SourceRead)` if the source failed mid-stream; the
    /// hand-off still completes normally in that case so the analyzer sees a
    /// well-terminated stream.
    pub fn run(mut self) -> Result<()> {
        let mut buf = vec!['\0'; self.batch_size];
        let mut fed: u64 = 0;
        let mut source_error: Option<Error> = None;

        while self.source.can_continue() {
            let count = match self.source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    log::warn!("text source failed after {fed} chars: {e}");
                    source_error = Some(e);
                    break;
                }
            };

            for &c in &buf[..count] {
                if !self.sender.send(c) {
                    // Analyzer dropped its half; nothing left to feed.
                    log::warn!("character queue closed early after {fed} chars");
                    self.stats.mark_feeder_done();
                    return source_error.map_or(Ok(()), Err);
                }
                fed += 1;
            }
        }

        // Terminating delimiter so the last partial word is flushed even
        // when the source does not end on one.
        self.sender.send(' ');
        fed += 1;

        self.stats.mark_feeder_done();
        log::debug!("feeder done, {fed} chars enqueued");

        // Dropping self.sender disconnects the queue, which is the
        // analyzer's termination signal.
        source_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::char_queue;
    use crate::source::StrSource;

    fn run_feeder(text: &str, batch_size: usize) -> (Vec<char>, Arc<PipelineStats>) {
        let (tx, rx) = char_queue(1024);
        let stats = Arc::new(PipelineStats::new());
        let feeder = StreamFeeder::new(
            Box::new(StrSource::new(text)),
            tx,
            Arc::clone(&stats),
            batch_size,
        );
        feeder.run().unwrap();

        let mut out = Vec::new();
        while let Some(c) = rx.try_pop() {
            out.push(c);
        }
        (out, stats)
    }

    #[test]
    fn test_feeds_in_order_with_trailing_space() {
        let (chars, stats) = run_feeder("abc", 2);
        assert_eq!(chars, vec!['a', 'b', 'c', ' ']);
        assert!(stats.feeder_done());
    }

    #[test]
    fn test_empty_source_feeds_only_trailing_space() {
        let (chars, stats) = run_feeder("", 5);
        assert_eq!(chars, vec![' ']);
        assert!(stats.feeder_done());
    }

    #[test]
    fn test_batch_boundary_preserves_order() {
        let (chars, _) = run_feeder("abcdefg", 3);
        assert_eq!(chars, "abcdefg ".chars().collect::<Vec<_>>());
    }

    struct FailingSource {
        fed: usize,
    }

    impl TextSource for FailingSource {
        fn read(&mut self, buf: &mut [char]) -> Result<usize> {
            if self.fed == 0 {
                self.fed = 1;
                buf[0] = 'x';
                Ok(1)
            } else {
                Err(Error::SourceRead("stream broke".into()))
            }
        }

        fn can_continue(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_source_error_still_terminates_stream() {
        let (tx, rx) = char_queue(16);
        let stats = Arc::new(PipelineStats::new());
        let feeder =
            StreamFeeder::new(Box::new(FailingSource { fed: 0 }), tx, Arc::clone(&stats), 4);

        let result = feeder.run();
        assert!(matches!(result, Err(Error::SourceRead(_))));

        // The chars read before the failure plus the trailing space made it
        // through, and the feeder still marked itself done.
        let mut out = Vec::new();
        while let Some(c) = rx.try_pop() {
            out.push(c);
        }
        assert_eq!(out, vec!['x', ' ']);
        assert!(stats.feeder_done());
    }
}
