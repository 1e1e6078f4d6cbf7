//! Min/max and neighbour queries for the block-summary set.

use crate::block::BlockSet;
use crate::error::{Direction, Result, SetError};

impl BlockSet {
    /// Smallest member.
    ///
    /// Finds the first non-empty block in the summary, then the first member in
    /// that block.
    ///
    /// # Errors
    /// [`SetError::EmptySet`] if the set has no members.
    ///
    /// # Performance
    /// O(B / 64) - two word scans
    pub fn min(&self) -> Result<u64> {
        self.summary
            .first_set(0, self.side)
            .and_then(|block| self.first_in_block(block))
            .ok_or_else(SetError::empty)
    }

    /// Largest member.
    ///
    /// # Errors
    /// [`SetError::EmptySet`] if the set has no members.
    ///
    /// # Performance
    /// O(B / 64) - two word scans
    pub fn max(&self) -> Result<u64> {
        self.summary
            .last_set(0, self.side)
            .and_then(|block| self.last_in_block(block))
            .ok_or_else(SetError::empty)
    }

    /// Smallest member strictly greater than `key`.
    ///
    /// # Algorithm
    /// 1. Scan the rest of `key`'s own block
    /// 2. Otherwise find the next non-empty block in the summary
    /// 3. Return that block's first member
    ///
    /// # Errors
    /// * [`SetError::OutOfRange`] if `key >= universe()`
    /// * [`SetError::EmptySet`] if the set has no members
    /// * [`SetError::BoundaryViolation`] if no member is greater than `key`
    ///
    /// # Performance
    /// O(B / 64) - at most three word scans
    pub fn successor(&self, key: u64) -> Result<u64> {
        self.bits.check(key)?;
        if self.len == 0 {
            return Err(SetError::empty());
        }

        let block = self.block_of(key);
        let (_, end) = self.block_range(block);
        if let Some(found) = self.bits.first_set(key + 1, end) {
            return Ok(found);
        }

        self.summary
            .first_set(block + 1, self.side)
            .and_then(|next| self.first_in_block(next))
            .ok_or_else(|| SetError::boundary(key, Direction::Successor))
    }

    /// Largest member strictly smaller than `key`.
    ///
    /// Mirror image of [`successor`](Self::successor), scanning downward.
    ///
    /// # Errors
    /// * [`SetError::OutOfRange`] if `key >= universe()`
    /// * [`SetError::EmptySet`] if the set has no members
    /// * [`SetError::BoundaryViolation`] if no member is smaller than `key`
    ///
    /// # Performance
    /// O(B / 64) - at most three word scans
    pub fn predecessor(&self, key: u64) -> Result<u64> {
        self.bits.check(key)?;
        if self.len == 0 {
            return Err(SetError::empty());
        }

        let block = self.block_of(key);
        let (start, _) = self.block_range(block);
        if let Some(found) = self.bits.last_set(start, key) {
            return Ok(found);
        }

        self.summary
            .last_set(0, block)
            .and_then(|prev| self.last_in_block(prev))
            .ok_or_else(|| SetError::boundary(key, Direction::Predecessor))
    }

    #[inline]
    fn first_in_block(&self, block: u64) -> Option<u64> {
        let (start, end) = self.block_range(block);
        self.bits.first_set(start, end)
    }

    #[inline]
    fn last_in_block(&self, block: u64) -> Option<u64> {
        let (start, end) = self.block_range(block);
        self.bits.last_set(start, end)
    }
}

#[cfg(test)]
mod tests {
    use crate::block::BlockSet;
    use crate::error::{Direction, SetError};

    fn with_keys(universe: u64, keys: &[u64]) -> BlockSet {
        let mut set = BlockSet::new(universe);
        for &key in keys {
            set.insert(key).unwrap();
        }
        set
    }

    #[test]
    fn test_min_max_empty() {
        let set = BlockSet::new(64);
        assert_eq!(set.min(), Err(SetError::EmptySet));
        assert_eq!(set.max(), Err(SetError::EmptySet));
        assert_eq!(set.successor(0), Err(SetError::EmptySet));
        assert_eq!(set.predecessor(63), Err(SetError::EmptySet));
    }

    #[test]
    fn test_min_max() {
        let set = with_keys(64, &[0, 1, 2, 63]);
        assert_eq!(set.min(), Ok(0));
        assert_eq!(set.max(), Ok(63));

        let set = with_keys(16384, &[9000]);
        assert_eq!(set.min(), Ok(9000));
        assert_eq!(set.max(), Ok(9000));
    }

    #[test]
    fn test_successor_within_and_across_blocks() {
        // Side 8: blocks are 0..8, 8..16, ...
        let set = with_keys(64, &[0, 1, 2, 63]);
        assert_eq!(set.successor(0), Ok(1));
        assert_eq!(set.successor(1), Ok(2));
        assert_eq!(set.successor(2), Ok(63));
        assert_eq!(set.successor(7), Ok(63));
        assert_eq!(
            set.successor(63),
            Err(SetError::BoundaryViolation {
                key: 63,
                direction: Direction::Successor
            })
        );
    }

    #[test]
    fn test_predecessor_within_and_across_blocks() {
        let set = with_keys(64, &[0, 1, 2, 63]);
        assert_eq!(set.predecessor(63), Ok(2));
        assert_eq!(set.predecessor(56), Ok(2));
        assert_eq!(set.predecessor(2), Ok(1));
        assert_eq!(set.predecessor(1), Ok(0));
        assert_eq!(
            set.predecessor(0),
            Err(SetError::BoundaryViolation {
                key: 0,
                direction: Direction::Predecessor
            })
        );
    }

    #[test]
    fn test_block_edges() {
        // Side 16: key 15 ends block 0, key 16 opens block 1.
        let set = with_keys(256, &[15, 16, 255]);
        assert_eq!(set.successor(15), Ok(16));
        assert_eq!(set.predecessor(16), Ok(15));
        assert_eq!(set.successor(16), Ok(255));
        assert_eq!(set.predecessor(255), Ok(16));
    }

    #[test]
    fn test_blocks_spanning_words() {
        // Side 128: blocks are two words wide.
        let set = with_keys(16384, &[63, 64, 191, 5000]);
        assert_eq!(set.successor(63), Ok(64));
        assert_eq!(set.successor(64), Ok(191));
        assert_eq!(set.successor(191), Ok(5000));
        assert_eq!(set.predecessor(5000), Ok(191));
        assert_eq!(set.predecessor(191), Ok(64));
        assert_eq!(set.predecessor(64), Ok(63));
    }

    #[test]
    fn test_beyond_max_is_boundary_violation() {
        let set = with_keys(256, &[10]);
        assert!(matches!(
            set.successor(200),
            Err(SetError::BoundaryViolation { key: 200, .. })
        ));
        assert!(matches!(
            set.predecessor(5),
            Err(SetError::BoundaryViolation { key: 5, .. })
        ));
    }

    #[test]
    fn test_neighbour_out_of_range() {
        let set = with_keys(64, &[1]);
        assert_eq!(
            set.predecessor(64),
            Err(SetError::OutOfRange {
                key: 64,
                universe: 64
            })
        );
    }
}
