//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It holds
//! the canonical brute-force oracle that every engine must agree with.

#![doc(hidden)]

use crate::types::WILDCARD;

/// Reference matcher: check every window of the text directly.
///
/// Quadratic and proud of it; the engines are correct exactly when they
/// reproduce this output.
pub fn naive_wildcard_matches(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || n == 0 || m > n {
        return Vec::new();
    }
    (0..=n - m)
        .filter(|&k| {
            pattern
                .iter()
                .enumerate()
                .all(|(j, &p)| p == WILDCARD || text[k + j] == p)
        })
        .collect()
}

/// Reference matcher without wildcard semantics, for the exact-only scanner.
pub fn naive_exact_matches(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || n == 0 || m > n {
        return Vec::new();
    }
    (0..=n - m).filter(|&k| &text[k..k + m] == pattern).collect()
}
