//! Index-free scanners over the same match-offset contract as the BWT
//! engine.
//!
//! Both walk the text directly instead of building tables, which makes them
//! the cheap choice for one-shot queries and the natural cross-checks for
//! the index-backed engine:
//!
//! - [`z`] finds wildcard-tolerant occurrences from the Z-array of
//!   `pattern ++ separator ++ text`.
//! - [`reverse_bm`] is a reverse Boyer-Moore scan with bad-character and
//!   good-prefix heuristics; exact patterns only.
//!
//! All scanners return unique 0-based offsets in ascending order.

pub mod reverse_bm;
pub mod z;

/// Z-array of `s`: `z[i]` is the length of the longest substring starting
/// at `i` that matches a prefix of `s` (`z[0]` is left at 0).
pub(crate) fn z_array(s: &[u8]) -> Vec<usize> {
    let n = s.len();
    let mut z = vec![0usize; n];
    let (mut l, mut r) = (0usize, 0usize);
    for i in 1..n {
        if i <= r {
            z[i] = (r - i + 1).min(z[i - l]);
        }
        while i + z[i] < n && s[z[i]] == s[i + z[i]] {
            l = i;
            r = i + z[i];
            z[i] += 1;
        }
    }
    z
}
