//! Error types for set operations.

use core::fmt;

/// Direction of a neighbour query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Next greater member.
    Successor,
    /// Next smaller member.
    Predecessor,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Successor => f.write_str("successor"),
            Direction::Predecessor => f.write_str("predecessor"),
        }
    }
}

/// Contract violations reported by [`DynamicSet`](crate::DynamicSet) operations.
///
/// Every variant describes a caller mistake detected before any state is
/// touched, so the set is always left unchanged when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    /// `min` or `max` (or a neighbour query) on a set with no members.
    #[error("set is empty")]
    EmptySet,

    /// No member lies strictly beyond `key` in the requested direction.
    ///
    /// Raised for `successor` at or above the maximum and `predecessor` at or
    /// below the minimum.
    #[error("no {direction} for key {key}")]
    BoundaryViolation { key: u64, direction: Direction },

    /// Key outside `[0, universe)`.
    #[error("key {key} is outside the universe [0, {universe})")]
    OutOfRange { key: u64, universe: u64 },
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, SetError>;

impl SetError {
    pub(crate) fn empty() -> Self {
        tracing::trace!("query on an empty set");
        SetError::EmptySet
    }

    pub(crate) fn boundary(key: u64, direction: Direction) -> Self {
        tracing::trace!(key, %direction, "no member beyond key");
        SetError::BoundaryViolation { key, direction }
    }

    pub(crate) fn out_of_range(key: u64, universe: u64) -> Self {
        tracing::trace!(key, universe, "key outside universe");
        SetError::OutOfRange { key, universe }
    }
}
