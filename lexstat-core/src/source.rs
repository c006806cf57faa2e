//! Text source abstraction and the synthetic lorem-ipsum generator

use crate::error::Result;

/// A finite, ordered producer of decoded characters.
///
/// The pipeline treats any encoding concern as already resolved: sources
/// hand over Unicode scalar values, never raw bytes.
pub trait TextSource {
    /// Fill `buf` from the front with up to `buf.len()` characters and
    /// return how many were written. Returning 0 signals exhaustion.
    fn read(&mut self, buf: &mut [char]) -> Result<usize>;

    /// Whether the source expects to produce more characters.
    ///
    /// A `true` here is advisory; the next [`read`](Self::read) may still
    /// return 0.
    fn can_continue(&self) -> bool;
}

/// The fixed corpus cycled by [`LoremIpsumSource`]
const LOREM_CORPUS: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim \
veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo \
consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum \
dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, \
sunt in culpa qui officia deserunt mollit anim id est laborum. ";

/// Deterministic synthetic text source.
///
/// Cycles a lorem-ipsum corpus until the requested number of kilobytes of
/// characters has been produced. Two sources constructed with the same size
/// emit the identical character sequence.
pub struct LoremIpsumSource {
    corpus: Vec<char>,
    cursor: usize,
    remaining: usize,
}

impl LoremIpsumSource {
    /// Create a source that will produce `kilobytes * 1024` characters
    pub fn new(kilobytes: usize) -> Self {
        Self {
            corpus: LOREM_CORPUS.chars().collect(),
            cursor: 0,
            remaining: kilobytes * 1024,
        }
    }

    /// Create a source producing exactly `chars` characters
    pub fn with_char_count(chars: usize) -> Self {
        Self {
            corpus: LOREM_CORPUS.chars().collect(),
            cursor: 0,
            remaining: chars,
        }
    }
}

impl TextSource for LoremIpsumSource {
    fn read(&mut self, buf: &mut [char]) -> Result<usize> {
        let count = buf.len().min(self.remaining);
        for slot in &mut buf[..count] {
            *slot = self.corpus[self.cursor];
            self.cursor = (self.cursor + 1) % self.corpus.len();
        }
        self.remaining -= count;
        Ok(count)
    }

    fn can_continue(&self) -> bool {
        self.remaining > 0
    }
}

/// Source over the characters of an in-memory string
pub struct StrSource {
    chars: Vec<char>,
    position: usize,
}

impl StrSource {
    /// Create a source over the characters of `text`
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            chars: text.as_ref().chars().collect(),
            position: 0,
        }
    }
}

impl TextSource for StrSource {
    fn read(&mut self, buf: &mut [char]) -> Result<usize> {
        let remaining = self.chars.len() - self.position;
        let count = buf.len().min(remaining);
        buf[..count].copy_from_slice(&self.chars[self.position..self.position + count]);
        self.position += count;
        Ok(count)
    }

    fn can_continue(&self) -> bool {
        self.position < self.chars.len()
    }
}
