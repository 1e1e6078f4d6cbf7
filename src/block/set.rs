//! Block-summary set structure and construction.

use core::fmt;

use crate::bitvec::BitVector;
use crate::constants::MAX_UNIVERSE;
use crate::dynamic_set::DynamicSet;
use crate::error::Result;
use crate::index::block_side;

/// Ordered integer set with a one-level block summary over its bitvector.
///
/// The universe is `B * B` keys split into `B` contiguous blocks of `B` keys.
/// Summary bit `s` is set iff block `[s * B, (s + 1) * B)` has a member, so a
/// search touches at most two partial blocks and one summary scan, each done a
/// word at a time.
///
/// # Performance Characteristics
/// - Contains/Insert: O(1)
/// - Remove: O(B / 64) - rescans the key's block to decide its summary bit
/// - Min/Max/Successor/Predecessor: O(B / 64) word scans
/// - Memory: `U + sqrt(U)` bits
///
/// # Example
/// ```rust
/// use bvtree::{BlockSet, DynamicSet};
///
/// let mut set = BlockSet::new(14336);
/// assert_eq!(set.universe(), 16384);
/// assert_eq!(set.block_side(), 128);
///
/// set.insert(418).unwrap();
/// set.insert(13567).unwrap();
/// assert_eq!(set.successor(418), Ok(13567));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSet {
    /// One bit per key; ground truth of membership
    pub(super) bits: BitVector,

    /// One bit per block: "block has a member"
    pub(super) summary: BitVector,

    /// Keys per block and number of blocks (power of two, at least 8)
    pub(super) side: u64,

    /// Number of members
    pub(super) len: u64,
}

impl BlockSet {
    /// Create an empty set covering at least `[0, universe)`.
    ///
    /// The block side is the smallest power of two `B >= 8` with
    /// `B * B >= universe`; the effective universe is `B * B`.
    ///
    /// # Panics
    /// If `universe` exceeds [`MAX_UNIVERSE`].
    pub fn new(universe: u64) -> Self {
        assert!(
            universe <= MAX_UNIVERSE,
            "universe {universe} exceeds {MAX_UNIVERSE}"
        );
        let side = block_side(universe);
        let bits = BitVector::new(side * side);
        let summary = BitVector::new(side);

        tracing::debug!(
            requested = universe,
            universe = side * side,
            block_side = side,
            base_words = bits.words().len(),
            summary_words = summary.words().len(),
            "built block-summary set"
        );

        Self {
            bits,
            summary,
            side,
            len: 0,
        }
    }

    /// Effective universe size (`block_side()` squared).
    #[inline]
    pub fn universe(&self) -> u64 {
        self.side * self.side
    }

    /// Keys per block, which is also the number of blocks.
    #[inline]
    pub fn block_side(&self) -> u64 {
        self.side
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Membership test.
    ///
    /// # Performance
    /// O(1) - direct base-bit read
    #[inline]
    pub fn contains(&self, key: u64) -> Result<bool> {
        self.bits.check(key)?;
        Ok(self.bits.test(key))
    }

    /// Remove every member, keeping both bitvectors allocated.
    pub fn clear(&mut self) {
        self.bits.clear_all();
        self.summary.clear_all();
        self.len = 0;
    }

    /// Summary index covering `key`.
    #[inline(always)]
    pub(super) fn block_of(&self, key: u64) -> u64 {
        key / self.side
    }

    /// Base range `[start, end)` covered by summary index `block`.
    #[inline(always)]
    pub(super) fn block_range(&self, block: u64) -> (u64, u64) {
        (block * self.side, (block + 1) * self.side)
    }

    /// Check every summary bit against a scan of its block.
    pub fn is_consistent(&self) -> bool {
        let blocks_ok = (0..self.side).all(|block| {
            let (start, end) = self.block_range(block);
            self.summary.test(block) == !self.bits.is_range_empty(start, end)
        });
        blocks_ok && self.bits.count_ones() == self.len
    }

    /// Write the summary and the base bitvector, one word per line.
    pub fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "summary ({} blocks of {})", self.side, self.side)?;
        self.summary.write_rows(out)?;
        writeln!(out, "bitvector ({} keys)", self.bits.len())?;
        self.bits.write_rows(out)
    }
}

impl DynamicSet for BlockSet {
    fn universe(&self) -> u64 {
        BlockSet::universe(self)
    }

    fn len(&self) -> u64 {
        self.len
    }

    fn contains(&self, key: u64) -> Result<bool> {
        BlockSet::contains(self, key)
    }

    fn insert(&mut self, key: u64) -> Result<bool> {
        BlockSet::insert(self, key)
    }

    fn remove(&mut self, key: u64) -> Result<bool> {
        BlockSet::remove(self, key)
    }

    fn predecessor(&self, key: u64) -> Result<u64> {
        BlockSet::predecessor(self, key)
    }

    fn successor(&self, key: u64) -> Result<u64> {
        BlockSet::successor(self, key)
    }

    fn min(&self) -> Result<u64> {
        BlockSet::min(self)
    }

    fn max(&self) -> Result<u64> {
        BlockSet::max(self)
    }

    fn clear(&mut self) {
        BlockSet::clear(self)
    }

    fn is_consistent(&self) -> bool {
        BlockSet::is_consistent(self)
    }

    fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        BlockSet::dump(self, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SetError;
    use alloc::string::String;

    #[test]
    fn test_new_rounding() {
        let set = BlockSet::new(0);
        assert_eq!(set.block_side(), 8);
        assert_eq!(set.universe(), 64);

        let set = BlockSet::new(65);
        assert_eq!(set.block_side(), 16);
        assert_eq!(set.universe(), 256);

        let set = BlockSet::new(14336);
        assert_eq!(set.block_side(), 128);
        assert_eq!(set.universe(), 16384);
        assert_eq!(set.bits.words().len(), 256);
        assert_eq!(set.summary.words().len(), 2);
    }

    #[test]
    fn test_block_mapping() {
        let set = BlockSet::new(256);
        assert_eq!(set.block_of(0), 0);
        assert_eq!(set.block_of(15), 0);
        assert_eq!(set.block_of(16), 1);
        assert_eq!(set.block_of(255), 15);
        assert_eq!(set.block_range(0), (0, 16));
        assert_eq!(set.block_range(15), (240, 256));
    }

    #[test]
    fn test_contains_out_of_range() {
        let set = BlockSet::new(64);
        assert_eq!(set.contains(63), Ok(false));
        assert_eq!(
            set.contains(64),
            Err(SetError::OutOfRange {
                key: 64,
                universe: 64
            })
        );
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut set = BlockSet::new(1024);
        for key in [0, 31, 32, 1023] {
            set.insert(key).unwrap();
        }
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.max(), Err(SetError::EmptySet));
        assert_eq!(set.summary.count_ones(), 0);
        assert!(set.is_consistent());
    }

    #[test]
    fn test_is_consistent_detects_stale_flag() {
        let mut set = BlockSet::new(64);
        set.insert(12).unwrap();
        assert!(set.is_consistent());

        set.bits.unmark(12);
        set.len = 0;
        assert!(!set.is_consistent());
    }

    #[test]
    fn test_dump_layout() {
        let mut set = BlockSet::new(256);
        set.insert(255).unwrap();

        let mut out = String::new();
        set.dump(&mut out).unwrap();
        let lines: alloc::vec::Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "summary (16 blocks of 16)");
        assert_eq!(lines[2], "bitvector (256 keys)");
        // 1 summary row + 4 base rows + 2 headers
        assert_eq!(lines.len(), 7);
        assert!(lines[6].ends_with('1'));
    }
}
