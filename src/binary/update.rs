//! Insert and remove for the binary-summary set.

use crate::binary::BinaryTreeSet;
use crate::error::Result;
use crate::index::{left, parent, right, tree_leaf_index, tree_leaf_keys};

impl BinaryTreeSet {
    /// Insert `key`.
    ///
    /// Sets the base bit, then sets summary flags from the key's lowest-level
    /// node toward the root. Stops at the first flag already set: its
    /// ancestors are set too.
    ///
    /// # Returns
    /// * `Ok(true)` if the key was newly inserted
    /// * `Ok(false)` if it was already a member (nothing changes)
    ///
    /// # Errors
    /// [`SetError::OutOfRange`](crate::SetError::OutOfRange) if `key >= universe()`.
    ///
    /// # Performance
    /// O(log U) worst case, O(1) when a sibling pair is already populated
    pub fn insert(&mut self, key: u64) -> Result<bool> {
        self.bits.check(key)?;
        if self.bits.test(key) {
            return Ok(false);
        }

        self.bits.mark(key);
        self.len += 1;

        let mut node = tree_leaf_index(self.universe, key);
        while !self.summary.test(node) {
            self.summary.mark(node);
            if node == 0 {
                break;
            }
            node = parent(node);
        }

        Ok(true)
    }

    /// Remove `key`.
    ///
    /// Clears the base bit, then walks toward the root clearing each flag whose
    /// children are now all empty. Stops at the first node that still has a
    /// populated child; its ancestors stay set.
    ///
    /// # Returns
    /// * `Ok(true)` if the key was a member
    /// * `Ok(false)` if it was absent (nothing changes)
    ///
    /// # Errors
    /// [`SetError::OutOfRange`](crate::SetError::OutOfRange) if `key >= universe()`.
    ///
    /// # Performance
    /// O(log U) worst case
    pub fn remove(&mut self, key: u64) -> Result<bool> {
        self.bits.check(key)?;
        if !self.bits.test(key) {
            return Ok(false);
        }

        self.bits.unmark(key);
        self.len -= 1;

        // Lowest level: children are base bits.
        let mut node = tree_leaf_index(self.universe, key);
        let (lo, hi) = tree_leaf_keys(self.universe, node);
        if self.bits.test(lo) || self.bits.test(hi) {
            return Ok(true);
        }
        self.summary.unmark(node);

        // Upper levels: children are summary flags.
        while node != 0 {
            node = parent(node);
            if self.summary.test(left(node)) || self.summary.test(right(node)) {
                break;
            }
            self.summary.unmark(node);
        }

        Ok(true)
    }
}
