// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Text utilities
//!
//! Strings embedded in payloads are transported as packed little-endian words
//! and terminated by a NUL byte, if they are shorter than the space reserved
//! for them. [`Packed`] reassembles such strings. [`Bounded`] is a fixed-size
//! [`fmt::Write`] sink for environments without an allocator.

use core::fmt::{self, Write};

/// String packed into payload words
///
/// The string holds at most `N` bytes. It ends at the first NUL byte, if any.
/// Bytes are displayed as the corresponding Latin-1 characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Packed<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> Packed<N> {
    /// Assemble a string from the given words
    ///
    /// Words beyond the capacity are ignored. If the words don't fill the
    /// capacity, the remaining bytes are zero.
    pub fn from_words(words: &[u32]) -> Self {
        let mut bytes = [0u8; N];
        bytes
            .chunks_mut(4)
            .zip(words)
            .for_each(|(c, w)| c.copy_from_slice(&w.to_le_bytes()[..c.len()]));
        Self { bytes }
    }

    /// Retrieve the bytes up to, excluding, the first NUL
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.bytes.iter().position(|b| *b == 0).unwrap_or(N);
        &self.bytes[..len]
    }
}

impl<const N: usize> fmt::Display for Packed<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_bytes()
            .iter()
            .try_for_each(|b| f.write_char(char::from(*b)))
    }
}

/// Single character carried in the least significant byte of a word
///
/// A NUL byte is rendered as `.`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ByteChar(pub u32);

impl fmt::Display for ByteChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 as u8 {
            0 => f.write_char('.'),
            b => f.write_char(char::from(b)),
        }
    }
}

/// Fixed-capacity text sink
///
/// Text written to this sink is truncated silently at character boundaries
/// once the capacity of `N` bytes is exhausted. Writing never fails.
///
/// # Example
///
/// ```
/// use core::fmt::Write;
/// use smem_log::text::Bounded;
///
/// let mut buf = Bounded::<8>::new();
/// write!(buf, "APPS:READY").unwrap();
/// assert_eq!(buf.as_str(), "APPS:REA");
/// assert!(buf.is_truncated());
/// ```
#[derive(Clone, Debug)]
pub struct Bounded<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> Bounded<N> {
    /// Create a new, empty sink
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            truncated: false,
        }
    }

    /// Retrieve the text written so far
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    /// Whether any text was dropped
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Discard all text
    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }
}

impl<const N: usize> Default for Bounded<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for Bounded<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let space = N - self.len;
        let mut take = s.len().min(space);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        self.truncated |= take < s.len();
        Ok(())
    }
}

impl<const N: usize> fmt::Display for Bounded<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
