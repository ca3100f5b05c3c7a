//! Match collection: terminal suffix-array intervals to text offsets.
//!
//! The backward search yields intervals of suffix-array rows; this module
//! maps each row back to its rotation start offset, discards candidates
//! that would run past the end of the text into the terminator, and returns
//! the surviving offsets deduplicated and ascending. Distinct wildcard
//! branches cover disjoint intervals, so duplicates can only arise from the
//! union of ranges, never from re-adding the same row.

use std::collections::BTreeSet;

use crate::types::SearchRange;

/// Resolve terminal intervals into the ordered, unique match offsets.
pub(crate) fn collect_matches(
    ranges: &[SearchRange],
    suffix_array: &[usize],
    pattern_len: usize,
    text_len: usize,
) -> Vec<usize> {
    let mut offsets = BTreeSet::new();
    for range in ranges {
        for row in range.lo..=range.hi {
            let candidate = suffix_array[row];
            // A match starting here must fit before the terminator.
            if candidate + pattern_len <= text_len {
                offsets.insert(candidate);
            }
        }
    }
    offsets.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rows_through_the_suffix_array() {
        let sa = vec![6, 5, 3, 1, 0, 4, 2];
        let ranges = vec![SearchRange { lo: 2, hi: 3 }];
        assert_eq!(collect_matches(&ranges, &sa, 3, 6), vec![1, 3]);
    }

    #[test]
    fn filters_offsets_that_overrun_the_text() {
        let sa = vec![6, 5, 3, 1, 0, 4, 2];
        // Rows 1..=3 are offsets 5, 3, 1; with m = 3 the offset 5 overruns.
        let ranges = vec![SearchRange { lo: 1, hi: 3 }];
        assert_eq!(collect_matches(&ranges, &sa, 3, 6), vec![1, 3]);
    }

    #[test]
    fn union_of_ranges_is_deduplicated_and_sorted() {
        let sa = vec![4, 2, 0, 3, 1];
        let ranges = vec![
            SearchRange { lo: 3, hi: 4 },
            SearchRange { lo: 0, hi: 1 },
            SearchRange { lo: 1, hi: 2 },
        ];
        assert_eq!(collect_matches(&ranges, &sa, 1, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(collect_matches(&[], &[0], 1, 0), Vec::<usize>::new());
    }
}
