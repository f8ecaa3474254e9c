//! Circular delay line for time-based effects.
//!
//! [`DelayLine`] holds the most recent `len()` samples in a fixed-capacity
//! buffer addressed by a modulo cursor. The cursor survives across
//! `process` calls, so the delay tap lines up no matter how the caller sizes
//! its blocks.
//!
//! # Memory
//!
//! The buffer is allocated only by [`resize_silent`](DelayLine::resize_silent).
//! Reads and writes never allocate.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Fixed-length circular buffer of 16-bit samples.
///
/// A freshly constructed line has length 0 ("not yet allocated"); reads from
/// it return silence and writes are dropped.
///
/// # Example
///
/// ```rust
/// use ripple_core::DelayLine;
///
/// let mut line = DelayLine::new();
/// line.resize_silent(3);
///
/// // Three writes fill the line; the fourth read sees the first write.
/// for s in [10, 20, 30] {
///     assert_eq!(line.read(), 0);
///     line.write_advance(s);
/// }
/// assert_eq!(line.read(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DelayLine {
    buffer: Vec<i16>,
    cursor: usize,
}

impl DelayLine {
    /// Creates an unallocated delay line.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
        }
    }

    /// Creates a silent delay line of `len` samples.
    pub fn with_len(len: usize) -> Self {
        Self {
            buffer: vec![0; len],
            cursor: 0,
        }
    }

    /// Replaces the buffer with `len` samples of silence and rewinds the cursor.
    ///
    /// Previous content is discarded, not resampled.
    pub fn resize_silent(&mut self, len: usize) {
        self.buffer = vec![0; len];
        self.cursor = 0;
    }

    /// Returns the sample written `len()` writes ago.
    #[inline]
    pub fn read(&self) -> i16 {
        self.buffer.get(self.cursor).copied().unwrap_or(0)
    }

    /// Overwrites the slot under the cursor and advances it.
    #[inline]
    pub fn write_advance(&mut self, sample: i16) {
        let len = self.buffer.len();
        if len == 0 {
            return;
        }
        self.buffer[self.cursor] = sample;
        self.cursor += 1;
        if self.cursor == len {
            self.cursor = 0;
        }
    }

    /// Sets every slot to silence and rewinds the cursor. Length is kept.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
        self.cursor = 0;
    }

    /// Length in samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True until the line has been sized.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current cursor position.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True if every slot holds silence.
    pub fn is_silent(&self) -> bool {
        self.buffer.iter().all(|&s| s == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unallocated_line_is_silent_and_ignores_writes() {
        let mut line = DelayLine::new();
        assert!(line.is_empty());
        line.write_advance(100);
        assert_eq!(line.read(), 0);
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn delays_by_exactly_len_writes() {
        let mut line = DelayLine::with_len(4);
        let input = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut out = vec![];
        for &s in &input {
            out.push(line.read());
            line.write_advance(s);
        }
        assert_eq!(out, vec![0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn cursor_wraps() {
        let mut line = DelayLine::with_len(3);
        for s in 0..7 {
            line.write_advance(s);
        }
        assert_eq!(line.cursor(), 1);
    }

    #[test]
    fn resize_discards_history() {
        let mut line = DelayLine::with_len(4);
        for s in 1..=6 {
            line.write_advance(s);
        }
        line.resize_silent(8);
        assert_eq!(line.len(), 8);
        assert_eq!(line.cursor(), 0);
        assert!(line.is_silent());
    }

    #[test]
    fn clear_keeps_length() {
        let mut line = DelayLine::with_len(5);
        line.write_advance(9);
        line.clear();
        assert_eq!(line.len(), 5);
        assert!(line.is_silent());
        assert_eq!(line.cursor(), 0);
    }
}
