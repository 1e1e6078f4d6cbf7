//! Fixed-size bitvector: the storage layer under both summary layouts.

use alloc::boxed::Box;
use alloc::vec;
use core::fmt;

use crate::bitmap;
use crate::constants::WORD_BITS;
use crate::error::{Result, SetError};
use crate::index::words_for;

/// Fixed-length vector of bits packed into `u64` words.
///
/// Allocated once, zeroed, and never resized. Bit `i` is stored
/// most-significant-first in word `i / 64`.
///
/// # Memory Layout
/// - `words`: `ceil(len / 64)` words, at least one
/// - `len`: logical bit count; bits past `len` in the last word stay zero
///
/// # Example
/// ```rust
/// use bvtree::BitVector;
///
/// let mut bits = BitVector::new(100);
/// bits.set(42).unwrap();
/// assert!(bits.get(42).unwrap());
/// assert!(bits.get(100).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BitVector {
    words: Box<[u64]>,
    len: u64,
}

impl BitVector {
    /// Create a zeroed bitvector holding `len` bits.
    pub fn new(len: u64) -> Self {
        Self {
            words: vec![0u64; words_for(len)].into_boxed_slice(),
            len,
        }
    }

    /// Logical number of bits.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// `true` if the vector holds zero bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated bit count (always a multiple of 64).
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.words.len() as u64 * WORD_BITS
    }

    /// Backing words.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Read bit `idx`.
    ///
    /// # Errors
    /// [`SetError::OutOfRange`] if `idx >= len()`.
    #[inline]
    pub fn get(&self, idx: u64) -> Result<bool> {
        self.check(idx)?;
        Ok(self.test(idx))
    }

    /// Set bit `idx`.
    ///
    /// # Errors
    /// [`SetError::OutOfRange`] if `idx >= len()`.
    #[inline]
    pub fn set(&mut self, idx: u64) -> Result<()> {
        self.check(idx)?;
        self.mark(idx);
        Ok(())
    }

    /// Clear bit `idx`.
    ///
    /// # Errors
    /// [`SetError::OutOfRange`] if `idx >= len()`.
    #[inline]
    pub fn clear(&mut self, idx: u64) -> Result<()> {
        self.check(idx)?;
        self.unmark(idx);
        Ok(())
    }

    /// Lowest set index in `[from, to)`, with `to` clamped to `len()`.
    #[inline]
    pub fn first_set(&self, from: u64, to: u64) -> Option<u64> {
        bitmap::next_set_bit(&self.words, from, to.min(self.len))
    }

    /// Highest set index in `[from, to)`, with `to` clamped to `len()`.
    #[inline]
    pub fn last_set(&self, from: u64, to: u64) -> Option<u64> {
        bitmap::prev_set_bit(&self.words, from, to.min(self.len))
    }

    /// `true` if no bit in `[from, to)` is set.
    #[inline]
    pub fn is_range_empty(&self, from: u64, to: u64) -> bool {
        bitmap::is_range_empty(&self.words, from, to.min(self.len))
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> u64 {
        bitmap::count_range(&self.words, 0, self.len)
    }

    /// Clear every bit, keeping the allocation.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Write one `0`/`1` row of 64 characters per word, most significant bit first.
    pub fn write_rows(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for word in self.words.iter() {
            writeln!(out, "{word:064b}")?;
        }
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn check(&self, idx: u64) -> Result<()> {
        if idx < self.len {
            Ok(())
        } else {
            Err(SetError::out_of_range(idx, self.len))
        }
    }

    // Unchecked accessors for callers that validated the index already.

    #[inline(always)]
    pub(crate) fn test(&self, idx: u64) -> bool {
        debug_assert!(idx < self.len);
        bitmap::is_set(&self.words, idx)
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, idx: u64) {
        debug_assert!(idx < self.len);
        bitmap::set_bit(&mut self.words, idx);
    }

    #[inline(always)]
    pub(crate) fn unmark(&mut self, idx: u64) {
        debug_assert!(idx < self.len);
        bitmap::clear_bit(&mut self.words, idx);
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("ones", &self.count_ones())
            .finish()
    }
}
