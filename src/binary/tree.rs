//! Binary-summary set structure and construction.

use core::fmt;

use crate::bitvec::BitVector;
use crate::constants::MAX_UNIVERSE;
use crate::dynamic_set::DynamicSet;
use crate::error::Result;
use crate::index::{left, right, tree_leaf_base, tree_leaf_keys, tree_universe};

/// Ordered integer set with a binary summary tree over its bitvector.
///
/// The summary is a complete binary tree of `U - 1` flags stored as a second
/// bitvector in heap order: node `i` has children `2i + 1` and `2i + 2`, and the
/// lowest internal level (starting at `U/2 - 1`) covers adjacent key pairs.
/// A node's flag is set iff some key under it is a member, so the root flag
/// doubles as the "non-empty" flag.
///
/// # Performance Characteristics
/// - Contains: O(1) - one base-bit read
/// - Insert/Remove: O(log U) - one flag per level, stops early
/// - Min/Max/Successor/Predecessor: O(log U) - one root-to-leaf walk
/// - Memory: about `2U` bits
///
/// # Example
/// ```rust
/// use bvtree::{BinaryTreeSet, DynamicSet, SetError};
///
/// let mut set = BinaryTreeSet::new(64);
/// set.insert(10).unwrap();
/// set.insert(40).unwrap();
/// assert_eq!(set.successor(10), Ok(40));
/// assert_eq!(set.predecessor(40), Ok(10));
/// assert!(matches!(set.successor(40), Err(SetError::BoundaryViolation { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTreeSet {
    /// One bit per key; ground truth of membership
    pub(super) bits: BitVector,

    /// Heap-ordered "subtree non-empty" flags, `universe - 1` nodes
    pub(super) summary: BitVector,

    /// Effective universe (power of two, at least 2)
    pub(super) universe: u64,

    /// Number of members
    pub(super) len: u64,
}

impl BinaryTreeSet {
    /// Create an empty set covering at least `[0, universe)`.
    ///
    /// The universe is rounded up to the next power of two (minimum 2).
    ///
    /// # Panics
    /// If `universe` exceeds [`MAX_UNIVERSE`].
    pub fn new(universe: u64) -> Self {
        assert!(
            universe <= MAX_UNIVERSE,
            "universe {universe} exceeds {MAX_UNIVERSE}"
        );
        let effective = tree_universe(universe);
        let bits = BitVector::new(effective);
        let summary = BitVector::new(effective - 1);

        tracing::debug!(
            requested = universe,
            universe = effective,
            base_words = bits.words().len(),
            summary_words = summary.words().len(),
            "built binary-summary set"
        );

        Self {
            bits,
            summary,
            universe: effective,
            len: 0,
        }
    }

    /// Effective universe size.
    #[inline]
    pub fn universe(&self) -> u64 {
        self.universe
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

    /// Check every summary flag against the flags (or keys) directly below it.
    ///
    /// Local agreement at every node implies the global invariant by induction
    /// from the lowest level up.
    pub fn is_consistent(&self) -> bool {
        let leaf_base = tree_leaf_base(self.universe);
        let nodes_ok = (0..self.universe - 1).all(|node| {
            let below = if node >= leaf_base {
                let (lo, hi) = tree_leaf_keys(self.universe, node);
                self.bits.test(lo) || self.bits.test(hi)
            } else {
                self.summary.test(left(node)) || self.summary.test(right(node))
            };
            self.summary.test(node) == below
        });
        nodes_ok && self.bits.count_ones() == self.len
    }

    /// Write the summary tree and the base bitvector, one word per line.
    pub fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "summary ({} nodes)", self.summary.len())?;
        self.summary.write_rows(out)?;
        writeln!(out, "bitvector ({} keys)", self.bits.len())?;
        self.bits.write_rows(out)
    }
}

impl DynamicSet for BinaryTreeSet {
    fn universe(&self) -> u64 {
        self.universe
    }

    fn len(&self) -> u64 {
        self.len
    }

    fn contains(&self, key: u64) -> Result<bool> {
        BinaryTreeSet::contains(self, key)
    }

    fn insert(&mut self, key: u64) -> Result<bool> {
        BinaryTreeSet::insert(self, key)
    }

    fn remove(&mut self, key: u64) -> Result<bool> {
        BinaryTreeSet::remove(self, key)
    }

    fn predecessor(&self, key: u64) -> Result<u64> {
        BinaryTreeSet::predecessor(self, key)
    }

    fn successor(&self, key: u64) -> Result<u64> {
        BinaryTreeSet::successor(self, key)
    }

    fn min(&self) -> Result<u64> {
        BinaryTreeSet::min(self)
    }

    fn max(&self) -> Result<u64> {
        BinaryTreeSet::max(self)
    }

    fn clear(&mut self) {
        BinaryTreeSet::clear(self)
    }

    fn is_consistent(&self) -> bool {
        BinaryTreeSet::is_consistent(self)
    }

    fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        BinaryTreeSet::dump(self, out)
    }
}
