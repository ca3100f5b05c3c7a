//! Reverse Boyer-Moore scanner.
//!
//! The mirror image of the classic algorithm: the pattern starts aligned at
//! the right end of the text, each alignment is compared left-to-right, and
//! the window shifts leftward. The two shift heuristics mirror accordingly:
//!
//! - **Extended bad character**: on a mismatch at pattern position `j`
//!   against text byte `c`, jump so that the leftmost occurrence of `c` in
//!   `pattern[j + 1..]` lines up with `c`; if there is none, jump past the
//!   mismatch entirely.
//! - **Good prefix**: the matched prefix of length `j` must reoccur at the
//!   new alignment. The minimal reoccurrence start comes from the Z-array;
//!   when the prefix never reoccurs, fall back to its longest border.
//!
//! Exact matching only; the wildcard-capable engines are the BWT index and
//! the Z scanner.

use super::z_array;

/// Find every exact occurrence of `pattern` in `text`.
///
/// Returns unique 0-based offsets in ascending order; empty when either
/// input is empty or the pattern is longer than the text.
pub fn find_matches(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || n == 0 || m > n {
        return Vec::new();
    }

    let bad_char = bad_char_table(pattern);
    let good_prefix = good_prefix_shifts(pattern);

    let mut matches = Vec::new();
    let mut start = n - m;
    loop {
        let mut j = 0;
        while j < m && pattern[j] == text[start + j] {
            j += 1;
        }

        let shift = if j == m {
            matches.push(start);
            good_prefix[m].max(1)
        } else {
            let c = text[start + j];
            // Leftmost occurrence of c strictly right of the mismatch.
            let bc_shift = match bad_char[c as usize][j] {
                Some(k) => k - j,
                None => m - j,
            };
            let gp_shift = if j > 0 { good_prefix[j] } else { 1 };
            bc_shift.max(gp_shift).max(1)
        };

        if shift > start {
            break;
        }
        start -= shift;
    }

    // Alignments were visited right-to-left.
    matches.reverse();
    matches
}

/// `table[c][j]` = leftmost index of byte `c` in `pattern[j + 1..]`.
///
/// The scan direction is left-to-right, so the useful occurrence is the
/// leftmost one to the *right* of the mismatch, not the classic rightmost
/// one to the left.
fn bad_char_table(pattern: &[u8]) -> Vec<Vec<Option<usize>>> {
    let m = pattern.len();
    let mut table = vec![vec![None; m + 1]; 256];
    let mut next_pos: [Option<usize>; 256] = [None; 256];
    for j in (0..m).rev() {
        for c in 0..256 {
            table[c][j] = next_pos[c];
        }
        next_pos[pattern[j] as usize] = Some(j);
    }
    table
}

/// Border lengths from the Z-array: `pi[t]` = longest proper prefix of
/// `pattern[..=t]` that is also its suffix. Each position is assigned at
/// most once, so the conversion stays O(m).
fn borders_from_z(z: &[usize]) -> Vec<usize> {
    let n = z.len();
    let mut pi = vec![0usize; n];
    for i in 1..n {
        let mut k = z[i];
        // Assign descending lengths over [i, i + k - 1] until a position
        // already holds a value.
        while k > 0 {
            let pos = i + k - 1;
            if pi[pos] == 0 {
                pi[pos] = k;
                k -= 1;
            } else {
                break;
            }
        }
    }
    pi
}

/// Good-prefix shifts: `shifts[j]` for a matched prefix of length `j`,
/// `shifts[m]` for a full match.
fn good_prefix_shifts(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    if m == 0 {
        return vec![1];
    }
    let z = z_array(pattern);

    // Minimal start of a reoccurrence of each prefix length.
    let mut best_shift = vec![usize::MAX; m + 1];
    for p in 1..m {
        let len = z[p];
        if len > 0 && best_shift[len] > p {
            best_shift[len] = p;
        }
    }
    // A reoccurrence of a longer prefix also reoccurs every shorter one.
    for len in (1..m).rev() {
        if best_shift[len] > best_shift[len + 1] {
            best_shift[len] = best_shift[len + 1];
        }
    }

    let pi = borders_from_z(&z);
    let border = |prefix_len: usize| if prefix_len == 0 { 0 } else { pi[prefix_len - 1] };

    let mut shifts = vec![1usize; m + 1];
    for j in 1..m {
        shifts[j] = if best_shift[j] != usize::MAX {
            best_shift[j]
        } else {
            (j - border(j)).max(1)
        };
    }
    // Full match: shift by the period of the pattern.
    shifts[m] = m - border(m);
    shifts
}
