//! Check operations for validating bitmap state over a range.

use crate::bitmap::popcount;
use crate::bitmap::search::{masked_word, word_span};

/// Check if no bit in `[from, to)` is set.
///
/// # Returns
/// `true` for an empty range or a range without set bits
///
/// # Performance
/// O(words in range) - one AND per word, stops at the first non-zero word
#[inline]
pub fn is_range_empty(words: &[u64], from: u64, to: u64) -> bool {
    if from >= to {
        return true;
    }
    let (first, last) = word_span(from, to);
    (first..=last).all(|w| masked_word(words, from, to, w) == 0)
}

/// Count set bits in `[from, to)`.
///
/// # Performance
/// O(words in range) - one POPCNT per word
#[inline]
pub fn count_range(words: &[u64], from: u64, to: u64) -> u64 {
    if from >= to {
        return 0;
    }
    let (first, last) = word_span(from, to);
    (first..=last)
        .map(|w| popcount(masked_word(words, from, to, w)) as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::set_bit;

    #[test]
    fn test_is_range_empty() {
        let mut words = [0u64; 4];
        assert!(is_range_empty(&words, 0, 256));

        set_bit(&mut words, 100);
        assert!(!is_range_empty(&words, 0, 256));
        assert!(is_range_empty(&words, 0, 100));
        assert!(is_range_empty(&words, 101, 256));
        assert!(!is_range_empty(&words, 100, 101));

        // Empty range
        assert!(is_range_empty(&words, 100, 100));
    }

    #[test]
    fn test_count_range() {
        let mut words = [0u64; 4];
        for idx in 60..70 {
            set_bit(&mut words, idx);
        }

        assert_eq!(count_range(&words, 0, 256), 10);
        assert_eq!(count_range(&words, 60, 70), 10);
        assert_eq!(count_range(&words, 62, 68), 6);
        assert_eq!(count_range(&words, 0, 64), 4);
        assert_eq!(count_range(&words, 64, 128), 6);
        assert_eq!(count_range(&words, 70, 256), 0);
        assert_eq!(count_range(&words, 10, 10), 0);
    }
}
