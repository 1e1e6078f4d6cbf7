//! Single-bit operations over word slices.
//!
//! Callers are responsible for keeping `idx` inside the slice; the public,
//! range-checked surface is [`BitVector`](crate::BitVector).

use crate::index::word_offset;

/// Set the bit at `idx`.
///
/// # Performance
/// O(1) - one word read-modify-write
#[inline]
pub fn set_bit(words: &mut [u64], idx: u64) {
    let (word, mask) = word_offset(idx);
    words[word] |= mask;
}

/// Clear the bit at `idx`.
///
/// # Performance
/// O(1) - one word read-modify-write
#[inline]
pub fn clear_bit(words: &mut [u64], idx: u64) {
    let (word, mask) = word_offset(idx);
    words[word] &= !mask;
}

/// Check whether the bit at `idx` is set.
///
/// # Performance
/// O(1) - one word load and AND
#[inline]
pub fn is_set(words: &[u64], idx: u64) -> bool {
    let (word, mask) = word_offset(idx);
    words[word] & mask != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_bit() {
        let mut words = [0u64; 2];
        set_bit(&mut words, 0);
        assert_eq!(words[0], 1u64 << 63);

        set_bit(&mut words, 63);
        assert_eq!(words[0], (1u64 << 63) | 1);

        set_bit(&mut words, 64);
        assert_eq!(words[1], 1u64 << 63);
    }

    #[test]
    fn test_clear_bit() {
        let mut words = [!0u64; 2];
        clear_bit(&mut words, 0);
        assert_eq!(words[0], !(1u64 << 63));

        clear_bit(&mut words, 127);
        assert_eq!(words[1], !1u64);
    }

    #[test]
    fn test_is_set() {
        let mut words = [0u64; 2];
        assert!(!is_set(&words, 42));

        set_bit(&mut words, 42);
        assert!(is_set(&words, 42));
        assert!(!is_set(&words, 41));
        assert!(!is_set(&words, 43));
    }

    #[test]
    fn test_word_boundaries() {
        let mut words = [0u64; 3];
        for idx in [63, 64, 127, 128] {
            set_bit(&mut words, idx);
        }
        assert!(is_set(&words, 63));
        assert!(is_set(&words, 64));
        assert!(is_set(&words, 127));
        assert!(is_set(&words, 128));
        assert!(!is_set(&words, 62));
        assert!(!is_set(&words, 129));
    }
}
