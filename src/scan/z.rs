//! Z-algorithm scanner with wildcard support.
//!
//! The Z-array of `pattern ++ separator ++ text` gives, for every text
//! position, how far the text matches the pattern prefix literally. A full
//! match is a hit outright; a shorter match is still a hit if every
//! remaining pattern byte either is the wildcard or agrees with the text.
//! The separator is the reserved terminator byte, so it can never extend a
//! Z-box from the pattern into the text.

use crate::types::{TERMINATOR, WILDCARD};

use super::z_array;

/// Find every wildcard-tolerant occurrence of `pattern` in `text`.
///
/// Returns unique 0-based offsets in ascending order; empty when the
/// pattern is empty or longer than the text.
pub fn find_matches(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut matches = Vec::new();
    if m == 0 || m > n {
        return matches;
    }

    let mut combined = Vec::with_capacity(m + 1 + n);
    combined.extend_from_slice(pattern);
    combined.push(TERMINATOR);
    combined.extend_from_slice(text);

    let z = z_array(&combined);

    // The text starts at m + 1; stop where a full pattern no longer fits.
    for i in (m + 1)..=(combined.len() - m) {
        let matched = z[i];
        // Bytes past the literal Z-match must be wildcards or agree.
        let tail_ok = (matched..m)
            .all(|j| pattern[j] == WILDCARD || pattern[j] == combined[i + j]);
        if tail_ok {
            matches.push(i - m - 1);
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_occurrences() {
        assert_eq!(find_matches(b"banana", b"ana"), vec![1, 3]);
    }

    #[test]
    fn wildcard_in_the_middle() {
        // "a#a": text byte between the two a's is free.
        assert_eq!(find_matches(b"abcaba", b"a#a"), vec![3]);
    }

    #[test]
    fn leading_wildcard() {
        // "#a" matches every position followed by an 'a'.
        assert_eq!(find_matches(b"banana", b"#a"), vec![0, 2, 4]);
    }

    #[test]
    fn all_wildcards_match_every_window() {
        assert_eq!(find_matches(b"abcd", b"##"), vec![0, 1, 2]);
    }

    #[test]
    fn empty_pattern_and_overlong_pattern() {
        assert!(find_matches(b"abc", b"").is_empty());
        assert!(find_matches(b"ab", b"abc").is_empty());
        assert!(find_matches(b"", b"a").is_empty());
    }

    #[test]
    fn wildcard_does_not_rescue_a_literal_mismatch() {
        assert_eq!(find_matches(b"axbyc", b"a#c"), Vec::<usize>::new());
    }
}
