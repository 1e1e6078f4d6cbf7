//! Index arithmetic shared by the bitvector and both summary layouts.
//!
//! Everything here is pure: a key goes in, word/bit/node coordinates come out.
//! Bits are numbered most-significant-first, so bit 0 of the abstract vector is
//! the top bit of word 0 and ascending indices always mean descending bit
//! significance within a word.

use crate::constants::{MIN_BLOCK_SIDE, MIN_TREE_UNIVERSE, WORD_BITS};

/// Split a bit index into its word index and single-bit mask.
///
/// # Examples
/// ```text
/// word_offset(0)  == (0, 1 << 63)
/// word_offset(63) == (0, 1)
/// word_offset(64) == (1, 1 << 63)
/// ```
#[inline(always)]
pub fn word_offset(idx: u64) -> (usize, u64) {
    let word = (idx / WORD_BITS) as usize;
    let bit = idx % WORD_BITS;
    (word, 1u64 << (WORD_BITS - 1 - bit))
}

/// Mask selecting in-word bit positions `[lo, hi)`.
///
/// Requires `lo < hi <= 64`.
#[inline(always)]
pub fn span_mask(lo: u64, hi: u64) -> u64 {
    debug_assert!(lo < hi && hi <= WORD_BITS, "invalid span {lo}..{hi}");
    let head = u64::MAX >> lo;
    let tail = u64::MAX.checked_shr(hi as u32).unwrap_or(0);
    head & !tail
}

/// Number of words needed to hold `bits` bits (at least one).
#[inline]
pub fn words_for(bits: u64) -> usize {
    bits.div_ceil(WORD_BITS).max(1) as usize
}

/// Effective universe of a binary-summary set: next power of two, at least 2.
#[inline]
pub fn tree_universe(requested: u64) -> u64 {
    requested.max(MIN_TREE_UNIVERSE).next_power_of_two()
}

/// First summary-tree index on the lowest internal level.
#[inline(always)]
pub fn tree_leaf_base(universe: u64) -> u64 {
    universe / 2 - 1
}

/// Lowest-level summary node covering `key`.
#[inline(always)]
pub fn tree_leaf_index(universe: u64, key: u64) -> u64 {
    tree_leaf_base(universe) + key / 2
}

/// The pair of base keys `(k, k + 1)` under a lowest-level summary node.
#[inline(always)]
pub fn tree_leaf_keys(universe: u64, node: u64) -> (u64, u64) {
    let k = (node - tree_leaf_base(universe)) * 2;
    (k, k + 1)
}

/// Parent of a non-root summary node.
#[inline(always)]
pub fn parent(node: u64) -> u64 {
    debug_assert!(node > 0, "root has no parent");
    (node - 1) / 2
}

/// Left child of a summary node.
#[inline(always)]
pub fn left(node: u64) -> u64 {
    node * 2 + 1
}

/// Right child of a summary node.
#[inline(always)]
pub fn right(node: u64) -> u64 {
    node * 2 + 2
}

/// Whether a non-root node is the left child of its parent.
#[inline(always)]
pub fn is_left_child(node: u64) -> bool {
    node % 2 == 1
}

/// Block side of a block-summary set.
///
/// Smallest power of two `B >= 8` with `B * B >= requested`.
#[inline]
pub fn block_side(requested: u64) -> u64 {
    let mut side = MIN_BLOCK_SIDE;
    while side * side < requested {
        side *= 2;
    }
    side
}

/// Effective universe of a block-summary set: `B * B`.
#[inline]
pub fn block_universe(requested: u64) -> u64 {
    let side = block_side(requested);
    side * side
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_offset_msb_first() {
        assert_eq!(word_offset(0), (0, 1 << 63));
        assert_eq!(word_offset(1), (0, 1 << 62));
        assert_eq!(word_offset(63), (0, 1));
        assert_eq!(word_offset(64), (1, 1 << 63));
        assert_eq!(word_offset(130), (2, 1 << 61));
    }

    #[test]
    fn test_span_mask() {
        assert_eq!(span_mask(0, 64), u64::MAX);
        assert_eq!(span_mask(0, 1), 1 << 63);
        assert_eq!(span_mask(63, 64), 1);
        assert_eq!(span_mask(4, 8), 0x0F00_0000_0000_0000);
        assert_eq!(span_mask(1, 63), u64::MAX >> 1 & !1);
    }

    #[test]
    fn test_words_for() {
        assert_eq!(words_for(0), 1);
        assert_eq!(words_for(1), 1);
        assert_eq!(words_for(64), 1);
        assert_eq!(words_for(65), 2);
        assert_eq!(words_for(16384), 256);
    }

    #[test]
    fn test_tree_universe() {
        assert_eq!(tree_universe(0), 2);
        assert_eq!(tree_universe(1), 2);
        assert_eq!(tree_universe(2), 2);
        assert_eq!(tree_universe(3), 4);
        assert_eq!(tree_universe(64), 64);
        assert_eq!(tree_universe(65), 128);
        assert_eq!(tree_universe(14336), 16384);
    }

    #[test]
    fn test_tree_navigation() {
        // Universe 8: nodes 0..7, lowest level starts at 3.
        assert_eq!(tree_leaf_base(8), 3);
        assert_eq!(tree_leaf_index(8, 0), 3);
        assert_eq!(tree_leaf_index(8, 1), 3);
        assert_eq!(tree_leaf_index(8, 7), 6);
        assert_eq!(tree_leaf_keys(8, 3), (0, 1));
        assert_eq!(tree_leaf_keys(8, 6), (6, 7));

        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(6), 2);
        assert_eq!(left(0), 1);
        assert_eq!(right(0), 2);
        assert_eq!(left(2), 5);
        assert!(is_left_child(1));
        assert!(!is_left_child(2));
        assert!(is_left_child(5));
    }

    #[test]
    fn test_smallest_tree_root_is_leaf() {
        assert_eq!(tree_leaf_base(2), 0);
        assert_eq!(tree_leaf_index(2, 1), 0);
        assert_eq!(tree_leaf_keys(2, 0), (0, 1));
    }

    #[test]
    fn test_block_side() {
        assert_eq!(block_side(0), 8);
        assert_eq!(block_side(64), 8);
        assert_eq!(block_side(65), 16);
        assert_eq!(block_side(256), 16);
        assert_eq!(block_side(14336), 128);
        assert_eq!(block_universe(14336), 16384);
        assert_eq!(block_universe(1), 64);
    }
}
