//! Min/max and neighbour queries for the binary-summary set.

use crate::binary::BinaryTreeSet;
use crate::error::{Direction, Result, SetError};
use crate::index::{
    is_left_child, left, parent, right, tree_leaf_base, tree_leaf_index, tree_leaf_keys,
};

impl BinaryTreeSet {
    /// Smallest member.
    ///
    /// # Errors
    /// [`SetError::EmptySet`] if the set has no members.
    ///
    /// # Performance
    /// O(log U) - one root-to-leaf descent
    pub fn min(&self) -> Result<u64> {
        if !self.summary.test(0) {
            return Err(SetError::empty());
        }
        Ok(self.descend_first(0))
    }

    /// Largest member.
    ///
    /// # Errors
    /// [`SetError::EmptySet`] if the set has no members.
    ///
    /// # Performance
    /// O(log U) - one root-to-leaf descent
    pub fn max(&self) -> Result<u64> {
        if !self.summary.test(0) {
            return Err(SetError::empty());
        }
        Ok(self.descend_last(0))
    }

    /// Smallest member strictly greater than `key`.
    ///
    /// # Algorithm
    /// 1. If `key` is the left half of its pair, check the right half directly
    /// 2. Climb from the key's lowest-level node; at each left child, test the
    ///    right sibling's flag
    /// 3. Descend into the first populated right sibling, preferring left
    ///
    /// # Errors
    /// * [`SetError::OutOfRange`] if `key >= universe()`
    /// * [`SetError::EmptySet`] if the set has no members
    /// * [`SetError::BoundaryViolation`] if no member is greater than `key`
    ///
    /// # Performance
    /// O(log U)
    pub fn successor(&self, key: u64) -> Result<u64> {
        self.bits.check(key)?;
        if !self.summary.test(0) {
            return Err(SetError::empty());
        }

        if key % 2 == 0 && self.bits.test(key + 1) {
            return Ok(key + 1);
        }

        let mut node = tree_leaf_index(self.universe, key);
        while node != 0 {
            if is_left_child(node) && self.summary.test(node + 1) {
                return Ok(self.descend_first(node + 1));
            }
            node = parent(node);
        }

        Err(SetError::boundary(key, Direction::Successor))
    }

    /// Largest member strictly smaller than `key`.
    ///
    /// Mirror image of [`successor`](Self::successor): climbs looking for a
    /// populated left sibling, then descends preferring right.
    ///
    /// # Errors
    /// * [`SetError::OutOfRange`] if `key >= universe()`
    /// * [`SetError::EmptySet`] if the set has no members
    /// * [`SetError::BoundaryViolation`] if no member is smaller than `key`
    ///
    /// # Performance
    /// O(log U)
    pub fn predecessor(&self, key: u64) -> Result<u64> {
        self.bits.check(key)?;
        if !self.summary.test(0) {
            return Err(SetError::empty());
        }

        if key % 2 == 1 && self.bits.test(key - 1) {
            return Ok(key - 1);
        }

        let mut node = tree_leaf_index(self.universe, key);
        while node != 0 {
            if !is_left_child(node) && self.summary.test(node - 1) {
                return Ok(self.descend_last(node - 1));
            }
            node = parent(node);
        }

        Err(SetError::boundary(key, Direction::Predecessor))
    }

    /// Lowest key under a node whose flag is set.
    fn descend_first(&self, mut node: u64) -> u64 {
        let leaf_base = tree_leaf_base(self.universe);
        while node < leaf_base {
            let l = left(node);
            node = if self.summary.test(l) { l } else { right(node) };
        }
        let (lo, hi) = tree_leaf_keys(self.universe, node);
        if self.bits.test(lo) {
            lo
        } else {
            hi
        }
    }

    /// Highest key under a node whose flag is set.
    fn descend_last(&self, mut node: u64) -> u64 {
        let leaf_base = tree_leaf_base(self.universe);
        while node < leaf_base {
            let r = right(node);
            node = if self.summary.test(r) { r } else { left(node) };
        }
        let (lo, hi) = tree_leaf_keys(self.universe, node);
        if self.bits.test(hi) {
            hi
        } else {
            lo
        }
    }
}
