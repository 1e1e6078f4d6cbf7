//! # bvtree
//!
//! Ordered sets of integers from a fixed universe `[0, U)`, stored as a
//! bit-packed vector plus a summary bitvector that lets searches skip empty
//! regions. No per-element pointers.
//!
//! ## Layouts
//! - [`BinaryTreeSet`]: complete binary tree of "subtree non-empty" flags.
//!   O(log U) insert, remove, min, max, successor, predecessor.
//! - [`BlockSet`]: one flag per `sqrt(U)`-key block. O(1) insert, word-level
//!   block scans for everything else.
//!
//! Both implement [`DynamicSet`]; [`build`] picks one from a [`SummaryKind`].
//!
//! ## Features
//! - no_std compatible (requires alloc)
//! - `std`: enables `tracing`'s std support
//!
//! ```rust
//! use bvtree::{build, DynamicSet, SetError, SummaryKind};
//!
//! let mut set = build(SummaryKind::default(), 64);
//! for key in [0, 1, 2, 63] {
//!     set.insert(key)?;
//! }
//! assert_eq!(set.min()?, 0);
//! assert_eq!(set.successor(2)?, 63);
//! assert_eq!(set.successor(63), Err(SetError::BoundaryViolation {
//!     key: 63,
//!     direction: bvtree::Direction::Successor,
//! }));
//! # Ok::<(), SetError>(())
//! ```

#![no_std]

extern crate alloc;

mod binary;
mod bitmap;
mod bitvec;
mod block;
mod constants;
mod dynamic_set;
mod error;
mod index;
mod iter;

pub use binary::BinaryTreeSet;
pub use bitvec::BitVector;
pub use block::BlockSet;
pub use constants::{MAX_UNIVERSE, MIN_BLOCK_SIDE, MIN_TREE_UNIVERSE, WORD_BITS};
pub use dynamic_set::{build, DynamicSet, SummaryKind};
pub use error::{Direction, Result, SetError};
pub use iter::Iter;
