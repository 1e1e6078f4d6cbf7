//! CPU intrinsic operations for word-level bit scanning.
//!
//! With most-significant-first numbering, `leading_zeros` of a masked word is
//! the in-word position of its lowest set index and `63 - trailing_zeros` the
//! position of its highest.

/// Count leading zeros (lowest set index in a word).
///
/// # Returns
/// Number of leading zeros (0-64)
///
/// # Performance
/// O(1) - single CPU instruction (LZCNT)
#[inline]
pub fn leading_zeros(word: u64) -> u32 {
    word.leading_zeros()
}

/// Count trailing zeros (highest set index in a word, counted from the end).
///
/// # Returns
/// Number of trailing zeros (0-64)
///
/// # Performance
/// O(1) - single CPU instruction (TZCNT)
#[inline]
pub fn trailing_zeros(word: u64) -> u32 {
    word.trailing_zeros()
}

/// Count set bits in a word.
///
/// # Performance
/// O(1) - single CPU instruction (POPCNT)
#[inline]
pub fn popcount(word: u64) -> u32 {
    word.count_ones()
}
