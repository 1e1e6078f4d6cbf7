//! Block-summary ordered set.
//!
//! The base bitvector is cut into `sqrt(U)`-sized blocks with one summary bit
//! each. Queries scan at most the tail of one block, the summary, and one more
//! block.

mod search;
mod set;
mod update;

pub use set::BlockSet;
