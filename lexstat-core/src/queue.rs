//! Bounded single-producer/single-consumer character queue
//!
//! The feeder and analyzer threads communicate exclusively through this
//! queue. It is a thin wrapper over a bounded `crossbeam-channel`, which
//! gives the two properties the hand-off needs without any explicit locking:
//!
//! - a full queue blocks the producer, so memory pressure on the buffer is
//!   genuinely bounded instead of advisory,
//! - every character sent before the producer half is dropped is still
//!   delivered before the consumer observes disconnection, so "producer done
//!   and queue empty" can never be observed while characters are in flight.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Create a bounded character queue, returning its two halves.
///
/// Capacity must be greater than zero. FIFO order is preserved: characters
/// are received in exactly the order they were sent.
pub fn char_queue(capacity: usize) -> (CharSender, CharReceiver) {
    let (tx, rx) = bounded(capacity);
    (CharSender { tx }, CharReceiver { rx })
}

/// The producing half of the character queue
pub struct CharSender {
    tx: Sender<char>,
}

impl CharSender {
    /// Append a character, blocking while the queue is at capacity.
    ///
    /// Returns `false` if the receiving half has been dropped.
    pub fn send(&self, c: char) -> bool {
        self.tx.send(c).is_ok()
    }

    /// Current number of queued characters
    pub fn len(&self) -> usize {
        self.tx.len()
    }

    /// Whether the queue is currently empty
    pub fn is_empty(&self) -> bool {
        self.tx.is_empty()
    }
}

/// The consuming half of the character queue
pub struct CharReceiver {
    rx: Receiver<char>,
}

/// Result of a timed pop from the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popped {
    /// The oldest queued character
    Char(char),
    /// Nothing arrived within the timeout; the producer is still connected
    Empty,
    /// The producer half was dropped and the queue is fully drained
    Disconnected,
}

impl CharReceiver {
    /// Remove and return the oldest character, blocking until one is
    /// available or the producer half is dropped and the queue drained.
    pub fn recv(&self) -> Option<char> {
        self.rx.recv().ok()
    }

    /// Remove and return the oldest character if one is queued
    pub fn try_pop(&self) -> Option<char> {
        self.rx.try_recv().ok()
    }

    /// Timed pop, distinguishing a temporarily empty queue from a
    /// disconnected producer.
    pub fn recv_timeout(&self, timeout: Duration) -> Popped {
        match self.rx.recv_timeout(timeout) {
            Ok(c) => Popped::Char(c),
            Err(RecvTimeoutError::Timeout) => Popped::Empty,
            Err(RecvTimeoutError::Disconnected) => Popped::Disconnected,
        }
    }

    /// Current number of queued characters
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether the queue is currently empty
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fifo_order() {
        let (tx, rx) = char_queue(16);
        for c in "abc".chars() {
            assert!(tx.send(c));
        }
        assert_eq!(rx.try_pop(), Some('a'));
        assert_eq!(rx.try_pop(), Some('b'));
        assert_eq!(rx.try_pop(), Some('c'));
        assert_eq!(rx.try_pop(), None);
    }

    #[test]
    fn test_len_and_is_empty() {
        let (tx, rx) = char_queue(8);
        assert!(rx.is_empty());
        tx.send('x');
        tx.send('y');
        assert_eq!(rx.len(), 2);
        assert!(!rx.is_empty());
        rx.try_pop();
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn test_disconnect_after_drain() {
        let (tx, rx) = char_queue(8);
        tx.send('z');
        drop(tx);

        // Queued character is still delivered before disconnection.
        assert_eq!(rx.recv_timeout(Duration::from_millis(10)), Popped::Char('z'));
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(10)),
            Popped::Disconnected
        );
        assert_eq!(rx.recv(), None);
    }

    #[test]
    fn test_timeout_while_connected() {
        let (tx, rx) = char_queue(8);
        assert_eq!(rx.recv_timeout(Duration::from_millis(5)), Popped::Empty);
        drop(tx);
    }

    #[test]
    fn test_full_queue_blocks_producer() {
        let (tx, rx) = char_queue(2);
        tx.send('a');
        tx.send('b');

        let producer = thread::spawn(move || {
            // Blocks until the consumer makes room.
            tx.send('c');
        });

        thread::sleep(Duration::from_millis(20));
        assert_eq!(rx.len(), 2);
        assert_eq!(rx.try_pop(), Some('a'));

        producer.join().unwrap();
        assert_eq!(rx.recv(), Some('b'));
        assert_eq!(rx.recv(), Some('c'));
    }
}
