//! Binary-summary ordered set.
//!
//! A complete binary tree of "subtree non-empty" flags overlaid on the base
//! bitvector. Every mutation and query is a single walk between the root and
//! the lowest internal level.

mod search;
mod tree;
mod update;

pub use tree::BinaryTreeSet;
