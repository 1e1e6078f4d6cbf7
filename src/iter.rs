//! Ordered iteration over any [`DynamicSet`].
//!
//! Walks the set with `min`/`successor` from the front and `max`/`predecessor`
//! from the back, so it works unchanged for every summary layout and through
//! trait objects.

use crate::dynamic_set::DynamicSet;

/// Iterator over members in ascending order.
///
/// Double-ended: the front and back cursors close in on each other and the
/// iterator is exhausted once they meet.
///
/// # Performance
/// One `successor` (or `predecessor`) call per element.
///
/// # Example
/// ```rust
/// use bvtree::{build, BinaryTreeSet, DynamicSet, Iter, SummaryKind};
///
/// let mut set = BinaryTreeSet::new(64);
/// for key in [30, 10, 20] {
///     set.insert(key).unwrap();
/// }
/// let keys: Vec<u64> = set.iter().collect();
/// assert_eq!(keys, vec![10, 20, 30]);
///
/// let boxed = build(SummaryKind::Block, 64);
/// assert_eq!(Iter::new(&*boxed).count(), 0);
/// ```
pub struct Iter<'a, S: DynamicSet + ?Sized> {
    set: &'a S,
    /// Next key to yield from the front, `None` once exhausted
    front: Option<u64>,
    /// Next key to yield from the back, `None` once exhausted
    back: Option<u64>,
}

impl<'a, S: DynamicSet + ?Sized> Iter<'a, S> {
    /// Create an iterator positioned at the set's minimum and maximum.
    pub fn new(set: &'a S) -> Self {
        Self {
            set,
            front: set.min().ok(),
            back: set.max().ok(),
        }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl<S: DynamicSet + ?Sized> Iterator for Iter<'_, S> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let key = self.front?;
        if Some(key) == self.back {
            self.finish();
        } else {
            self.front = self.set.successor(key).ok();
        }
        Some(key)
    }
}

impl<S: DynamicSet + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<u64> {
        let key = self.back?;
        if Some(key) == self.front {
            self.finish();
        } else {
            self.back = self.set.predecessor(key).ok();
        }
        Some(key)
    }
}

impl<S: DynamicSet + ?Sized> core::iter::FusedIterator for Iter<'_, S> {}
