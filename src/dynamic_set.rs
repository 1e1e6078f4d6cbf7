//! The ordered-set contract shared by every summary layout.

use alloc::boxed::Box;
use core::fmt;

use crate::error::Result;
use crate::iter::Iter;
use crate::{BinaryTreeSet, BlockSet};

/// Ordered set of integers drawn from a fixed universe `[0, universe())`.
///
/// Implementations differ only in how they summarize the base bitvector; the
/// observable behavior of every operation is identical across layouts.
///
/// # Errors
/// Any key argument outside the universe yields
/// [`SetError::OutOfRange`](crate::SetError::OutOfRange). Queries on an empty
/// set yield `EmptySet`, and neighbour queries with no answer yield
/// `BoundaryViolation`. An `Err` never leaves the set modified.
///
/// # Example
/// ```rust
/// use bvtree::{BlockSet, DynamicSet};
///
/// let mut set = BlockSet::new(64);
/// for key in [0, 1, 2, 63] {
///     set.insert(key).unwrap();
/// }
/// assert_eq!(set.min(), Ok(0));
/// assert_eq!(set.successor(2), Ok(63));
/// ```
pub trait DynamicSet {
    /// Effective universe size after rounding.
    fn universe(&self) -> u64;

    /// Number of members.
    fn len(&self) -> u64;

    /// `true` if the set has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership test.
    fn contains(&self, key: u64) -> Result<bool>;

    /// Add `key`; returns `true` if it was not already a member.
    fn insert(&mut self, key: u64) -> Result<bool>;

    /// Remove `key`; returns `true` if it was a member.
    fn remove(&mut self, key: u64) -> Result<bool>;

    /// Largest member strictly below `key`.
    fn predecessor(&self, key: u64) -> Result<u64>;

    /// Smallest member strictly above `key`.
    fn successor(&self, key: u64) -> Result<u64>;

    /// Smallest member.
    fn min(&self) -> Result<u64>;

    /// Largest member.
    fn max(&self) -> Result<u64>;

    /// Remove every member without releasing storage.
    fn clear(&mut self);

    /// Verify that every summary bit is set iff its covered range has a member.
    ///
    /// Diagnostic only. Walks the whole structure.
    fn is_consistent(&self) -> bool;

    /// Write the summary and base bitvectors, one word per line.
    ///
    /// Diagnostic only; the format is not part of the set's contract.
    fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Members in ascending order.
    fn iter(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

/// Summary layout selector for [`build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryKind {
    /// Complete binary tree of "subtree non-empty" flags ([`BinaryTreeSet`]).
    Binary,
    /// One flag per block of roughly `sqrt(U)` keys ([`BlockSet`]).
    #[default]
    Block,
}

impl SummaryKind {
    /// Universe a set of this kind would actually cover for `requested`.
    pub fn effective_universe(self, requested: u64) -> u64 {
        match self {
            SummaryKind::Binary => crate::index::tree_universe(requested),
            SummaryKind::Block => crate::index::block_universe(requested),
        }
    }
}

/// Construct an empty set of the given layout covering at least `[0, universe)`.
///
/// # Example
/// ```rust
/// use bvtree::{build, SummaryKind};
///
/// let mut set = build(SummaryKind::Binary, 100);
/// assert_eq!(set.universe(), 128);
/// set.insert(99).unwrap();
/// assert_eq!(set.max(), Ok(99));
/// ```
pub fn build(kind: SummaryKind, universe: u64) -> Box<dyn DynamicSet> {
    match kind {
        SummaryKind::Binary => Box::new(BinaryTreeSet::new(universe)),
        SummaryKind::Block => Box::new(BlockSet::new(universe)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SetError;

    #[test]
    fn test_effective_universe() {
        assert_eq!(SummaryKind::Binary.effective_universe(14336), 16384);
        assert_eq!(SummaryKind::Block.effective_universe(14336), 16384);
        assert_eq!(SummaryKind::Binary.effective_universe(3), 4);
        assert_eq!(SummaryKind::Block.effective_universe(3), 64);
        assert_eq!(SummaryKind::default(), SummaryKind::Block);
    }

    #[test]
    fn test_build_matches_kind() {
        for kind in [SummaryKind::Binary, SummaryKind::Block] {
            let set = build(kind, 1000);
            assert_eq!(set.universe(), kind.effective_universe(1000));
            assert!(set.is_empty());
            assert_eq!(set.min(), Err(SetError::EmptySet));
        }
    }

    #[test]
    fn test_trait_object_usage() {
        for kind in [SummaryKind::Binary, SummaryKind::Block] {
            let mut set = build(kind, 64);
            assert_eq!(set.insert(5), Ok(true));
            assert_eq!(set.insert(5), Ok(false));
            assert_eq!(set.len(), 1);
            assert_eq!(set.contains(5), Ok(true));
            assert_eq!(set.remove(5), Ok(true));
            assert_eq!(set.remove(5), Ok(false));
            assert!(set.is_empty());
            assert!(set.is_consistent());
        }
    }
}
