//! Low-level bitmap operations over `u64` word slices.
//!
//! Bits are numbered most-significant-first within each word (see
//! [`crate::index::word_offset`]). Every scan in the crate goes through these
//! functions so ascending and descending searches agree at word boundaries.

mod basic;
mod check;
mod intrinsics;
mod search;

pub use basic::{clear_bit, is_set, set_bit};
pub use check::{count_range, is_range_empty};
pub use intrinsics::{leading_zeros, popcount, trailing_zeros};
pub use search::{next_set_bit, prev_set_bit};
