//! Search operations for finding set bits in a range of a word slice.

use crate::bitmap::{leading_zeros, trailing_zeros};
use crate::constants::WORD_BITS;
use crate::index::span_mask;

/// Words touched by the non-empty bit range `[from, to)`.
#[inline]
pub(crate) fn word_span(from: u64, to: u64) -> (usize, usize) {
    ((from / WORD_BITS) as usize, ((to - 1) / WORD_BITS) as usize)
}

/// Word `w` of the slice with every bit outside `[from, to)` cleared.
#[inline]
pub(crate) fn masked_word(words: &[u64], from: u64, to: u64, w: usize) -> u64 {
    let (first, last) = word_span(from, to);
    let lo = if w == first { from % WORD_BITS } else { 0 };
    let hi = if w == last {
        (to - 1) % WORD_BITS + 1
    } else {
        WORD_BITS
    };
    words[w] & span_mask(lo, hi)
}

/// Find the lowest set index in `[from, to)`.
///
/// # Returns
/// Index of the first set bit, or `None` if the range is empty or has no set bit
///
/// # Performance
/// O(words in range) - one LZCNT per non-zero word
#[inline]
pub fn next_set_bit(words: &[u64], from: u64, to: u64) -> Option<u64> {
    if from >= to {
        return None;
    }
    let (first, last) = word_span(from, to);
    for w in first..=last {
        let masked = masked_word(words, from, to, w);
        if masked != 0 {
            return Some(w as u64 * WORD_BITS + leading_zeros(masked) as u64);
        }
    }
    None
}

/// Find the highest set index in `[from, to)`.
///
/// # Returns
/// Index of the last set bit, or `None` if the range is empty or has no set bit
///
/// # Performance
/// O(words in range) - one TZCNT per non-zero word
#[inline]
pub fn prev_set_bit(words: &[u64], from: u64, to: u64) -> Option<u64> {
    if from >= to {
        return None;
    }
    let (first, last) = word_span(from, to);
    for w in (first..=last).rev() {
        let masked = masked_word(words, from, to, w);
        if masked != 0 {
            return Some(w as u64 * WORD_BITS + (WORD_BITS - 1) - trailing_zeros(masked) as u64);
        }
    }
    None
}
