//! Suffix array and Burrows-Wheeler transform construction.
//!
//! # Algorithm
//!
//! ```text
//! Input: "banana"
//!
//! Step 1: Append the terminator (0x00, shown as $)
//!         b a n a n a $
//!
//! Step 2: Sort all 7 rotation start offsets. The terminator is unique and
//!         smaller than every text byte, so comparing two rotations never
//!         reads past it: rotation order == suffix order of "banana$".
//!
//!         row  offset  suffix      bwt (byte before the suffix)
//!          0      6    $           a
//!          1      5    a$          n
//!          2      3    ana$        n
//!          3      1    anana$      b
//!          4      0    banana$     $
//!          5      4    na$         a
//!          6      2    nana$       a
//!
//! Output: bwt = "annb$aa", suffix_array = [6, 5, 3, 1, 0, 4, 2]
//! ```
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_SORTED**: rotations are in full lexicographic order,
//!    terminator lowest
//! 2. **SUFFIX_ARRAY_COMPLETE**: the suffix array is a permutation of
//!    `[0, text.len()]`
//! 3. **BWT_CONSISTENT**: `bwt[i]` is the byte cyclically preceding rotation
//!    `suffix_array[i]`
//!
//! The comparator sort is a correctness baseline, not a performance target;
//! any replacement must produce bit-identical output.

use crate::tables::OccurrenceTables;
use crate::types::{Index, TERMINATOR};
use crate::verify::ValidationError;

/// Build the BWT and suffix array for `text`.
///
/// Returns both with length `text.len() + 1`. Fails if the text is empty or
/// already contains the terminator byte.
pub fn build_bwt(text: &[u8]) -> Result<(Vec<u8>, Vec<usize>), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    if let Some(position) = text.iter().position(|&b| b == TERMINATOR) {
        return Err(ValidationError::TerminatorInText { position });
    }

    let mut extended = Vec::with_capacity(text.len() + 1);
    extended.extend_from_slice(text);
    extended.push(TERMINATOR);
    let len = extended.len();

    // INVARIANT: SUFFIX_ARRAY_SORTED
    // Comparing suffixes of the extended text is equivalent to comparing
    // full rotations: the unique, smallest terminator decides any
    // comparison before it would wrap around.
    let mut suffix_array: Vec<usize> = (0..len).collect();
    suffix_array.sort_by(|&a, &b| extended[a..].cmp(&extended[b..]));

    // INVARIANT: BWT_CONSISTENT
    // The last byte of rotation p is the byte cyclically preceding offset p.
    let bwt = suffix_array
        .iter()
        .map(|&p| extended[(p + len - 1) % len])
        .collect();

    Ok((bwt, suffix_array))
}

/// Build a complete search index for `text`.
///
/// Fails with [`ValidationError::EmptyText`] or
/// [`ValidationError::TerminatorInText`]; any successfully built index
/// satisfies every invariant checked by [`Index::verify`].
pub fn build_index(text: &[u8]) -> Result<Index, ValidationError> {
    let (bwt, suffix_array) = build_bwt(text)?;
    let tables = OccurrenceTables::build(&bwt);
    Ok(Index {
        text: text.to_vec(),
        bwt,
        suffix_array,
        tables,
    })
}
