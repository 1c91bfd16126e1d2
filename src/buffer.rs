//! Byte buffer with per-position elision flags.
//!
//! Passes delete content by *eliding* positions rather than shifting the
//! tail on every deletion. An elided position keeps its byte but is logically
//! gone; [`Buffer::compact`] physically removes elided positions between
//! pipeline stages. The deleted flag lives in a parallel `Vec<bool>`, so no
//! byte value is reserved as a sentinel and arbitrary input (including NUL
//! bytes) round-trips safely.

use std::ops::RangeInclusive;

/// An owned, mutable byte sequence with a notion of elided positions.
///
/// Indices passed to the accessors are *physical* positions into the
/// original (or last-compacted) sequence. [`Buffer::len`] counts only
/// surviving positions; [`Buffer::raw_len`] counts all of them.
#[derive(Debug, Clone)]
pub struct Buffer {
    bytes: Vec<u8>,
    elided: Vec<bool>,
    live: usize,
}

impl Buffer {
    /// Create a buffer holding a copy of `input`, with nothing elided.
    pub fn new(input: &[u8]) -> Self {
        Self {
            bytes: input.to_vec(),
            elided: vec![false; input.len()],
            live: input.len(),
        }
    }

    /// Number of surviving (non-elided) positions.
    pub fn len(&self) -> usize {
        self.live
    }

    /// True if no positions survive.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of physical positions, elided or not.
    pub fn raw_len(&self) -> usize {
        self.bytes.len()
    }

    /// The byte at physical position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn byte(&self, i: usize) -> u8 {
        self.bytes[i]
    }

    /// The byte at physical position `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<u8> {
        self.bytes.get(i).copied()
    }

    /// Whether physical position `i` has been elided.
    pub fn is_elided(&self, i: usize) -> bool {
        self.elided[i]
    }

    /// Mark position `i` as deleted. Eliding twice is a no-op.
    pub fn elide(&mut self, i: usize) {
        if !self.elided[i] {
            self.elided[i] = true;
            self.live -= 1;
        }
    }

    /// Elide an inclusive range of positions.
    pub fn elide_range(&mut self, range: RangeInclusive<usize>) {
        for i in range {
            self.elide(i);
        }
    }

    /// Overwrite the byte at position `i` in place.
    pub fn set(&mut self, i: usize, b: u8) {
        self.bytes[i] = b;
    }

    /// Nearest surviving position strictly before `i`, if any.
    pub fn prev_live(&self, i: usize) -> Option<usize> {
        (0..i).rev().find(|&j| !self.elided[j])
    }

    /// Nearest surviving position at or after `i`, if any.
    pub fn next_live(&self, i: usize) -> Option<usize> {
        (i..self.bytes.len()).find(|&j| !self.elided[j])
    }

    /// True if no positions are elided.
    ///
    /// Every pass requires this on entry; the pipeline restores it by
    /// calling [`Buffer::compact`] after any pass that changed something.
    pub fn is_compact(&self) -> bool {
        self.live == self.bytes.len()
    }

    /// Physically remove all elided positions, preserving survivor order.
    pub fn compact(&mut self) {
        if self.is_compact() {
            return;
        }
        let mut to = 0;
        for from in 0..self.bytes.len() {
            if !self.elided[from] {
                self.bytes[to] = self.bytes[from];
                to += 1;
            }
        }
        self.bytes.truncate(to);
        self.elided.clear();
        self.elided.resize(to, false);
        self.live = to;
    }

    /// The surviving bytes as a contiguous slice. Requires a compact buffer.
    pub fn as_bytes(&self) -> &[u8] {
        debug_assert!(self.is_compact());
        &self.bytes
    }

    /// Consume the buffer, yielding the surviving bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.compact();
        self.bytes
    }

    /// Find the next occurrence of `needle` at or after physical position
    /// `from`. Only meaningful on a compact buffer.
    pub fn find(&self, needle: &[u8], from: usize) -> Option<usize> {
        if needle.is_empty() || from >= self.bytes.len() {
            return None;
        }
        self.bytes[from..]
            .windows(needle.len())
            .position(|w| w == needle)
            .map(|p| from + p)
    }
}
