//! Insert and remove for the block-summary set.

use crate::block::BlockSet;
use crate::error::Result;

impl BlockSet {
    /// Insert `key`, marking its block non-empty.
    ///
    /// # Returns
    /// * `Ok(true)` if the key was newly inserted
    /// * `Ok(false)` if it was already a member (nothing changes)
    ///
    /// # Errors
    /// [`SetError::OutOfRange`](crate::SetError::OutOfRange) if `key >= universe()`.
    ///
    /// # Performance
    /// O(1) - two bit writes
    pub fn insert(&mut self, key: u64) -> Result<bool> {
        self.bits.check(key)?;
        if self.bits.test(key) {
            return Ok(false);
        }

        self.bits.mark(key);
        self.summary.mark(self.block_of(key));
        self.len += 1;
        Ok(true)
    }

    /// Remove `key`, clearing its block's summary bit if the block empties.
    ///
    /// # Returns
    /// * `Ok(true)` if the key was a member
    /// * `Ok(false)` if it was absent (nothing changes)
    ///
    /// # Errors
    /// [`SetError::OutOfRange`](crate::SetError::OutOfRange) if `key >= universe()`.
    ///
    /// # Performance
    /// O(B / 64) - rescans the block a word at a time
    pub fn remove(&mut self, key: u64) -> Result<bool> {
        self.bits.check(key)?;
        if !self.bits.test(key) {
            return Ok(false);
        }

        self.bits.unmark(key);
        self.len -= 1;

        let block = self.block_of(key);
        let (start, end) = self.block_range(block);
        if self.bits.is_range_empty(start, end) {
            self.summary.unmark(block);
        }
        Ok(true)
    }
}
