//! Core constants shared by the bitvector and both summary layouts.

/// Number of bits in one storage word.
pub const WORD_BITS: u64 = 64;

/// Smallest universe a binary-summary set is rounded up to.
///
/// A complete binary summary needs at least one internal node, which covers
/// a pair of keys.
pub const MIN_TREE_UNIVERSE: u64 = 2;

/// Smallest block side of a block-summary set.
///
/// `8 * 8 = 64`, so the smallest block layout fills exactly one base word.
pub const MIN_BLOCK_SIDE: u64 = 8;

/// Largest universe either layout accepts.
///
/// Keeps `B * B` and `next_power_of_two` from overflowing `u64`.
pub const MAX_UNIVERSE: u64 = 1 << 62;
