//! Property-based tests using proptest.
//!
//! Every engine must agree with the brute-force oracle, and the index
//! invariants must hold for arbitrary inputs, not just the worked examples.

mod common;

use common::{
    assert_index_well_formed, bwt_matches, naive_exact_matches, naive_wildcard_matches,
};
use proptest::prelude::*;
use wildex::scan;
use wildex::{build_index, Traversal};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small-alphabet texts keep wildcard fan-out interesting: narrow alphabets
/// produce many overlapping occurrences.
fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 1..60)
}

/// Patterns over the same alphabet plus the wildcard byte.
fn pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'#']), 1..8)
}

/// Exact patterns (no wildcard) for the reverse Boyer-Moore scanner.
fn exact_pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 1..8)
}

/// Wider-alphabet printable texts, so slot mapping is exercised beyond
/// three symbols.
fn printable_text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(32u8..127, 1..40)
}

// ============================================================================
// INDEX INVARIANTS
// ============================================================================

proptest! {
    #[test]
    fn index_invariants_hold(text in text_strategy()) {
        assert_index_well_formed(&text);
    }

    #[test]
    fn index_invariants_hold_for_printable_bytes(text in printable_text_strategy()) {
        assert_index_well_formed(&text);
    }

    #[test]
    fn suffix_array_is_a_permutation(text in text_strategy()) {
        let index = build_index(&text).unwrap();
        let mut offsets = index.suffix_array.clone();
        offsets.sort_unstable();
        let expected: Vec<usize> = (0..=text.len()).collect();
        prop_assert_eq!(offsets, expected);
    }

    #[test]
    fn rank_totals_count_the_bwt(text in text_strategy()) {
        let index = build_index(&text).unwrap();
        for &symbol in index.tables.alphabet() {
            let slot = index.tables.slot(symbol).unwrap();
            let total = index.bwt.iter().filter(|&&b| b == symbol).count();
            prop_assert_eq!(index.tables.count(slot), total);
        }
    }

    #[test]
    fn first_occurrence_partitions_the_bwt(text in text_strategy()) {
        let index = build_index(&text).unwrap();
        let mut cursor = 0usize;
        for slot in 0..index.tables.alphabet_len() {
            prop_assert_eq!(index.tables.first(slot), cursor);
            cursor += index.tables.count(slot);
        }
        prop_assert_eq!(cursor, index.bwt_len());
    }
}

// ============================================================================
// ENGINE AGREEMENT
// ============================================================================

proptest! {
    #[test]
    fn backward_search_matches_the_oracle(
        text in text_strategy(),
        pattern in pattern_strategy(),
    ) {
        let expected = naive_wildcard_matches(&text, &pattern);
        prop_assert_eq!(bwt_matches(&text, &pattern, Traversal::default()), expected);
    }

    #[test]
    fn z_scanner_matches_the_oracle(
        text in text_strategy(),
        pattern in pattern_strategy(),
    ) {
        let expected = naive_wildcard_matches(&text, &pattern);
        prop_assert_eq!(scan::z::find_matches(&text, &pattern), expected);
    }

    #[test]
    fn reverse_bm_matches_the_exact_oracle(
        text in text_strategy(),
        pattern in exact_pattern_strategy(),
    ) {
        let expected = naive_exact_matches(&text, &pattern);
        prop_assert_eq!(scan::reverse_bm::find_matches(&text, &pattern), expected);
    }

    #[test]
    fn traversal_order_is_immaterial(
        text in text_strategy(),
        pattern in pattern_strategy(),
    ) {
        let depth = bwt_matches(&text, &pattern, Traversal::DepthFirst);
        let breadth = bwt_matches(&text, &pattern, Traversal::BreadthFirst);
        prop_assert_eq!(depth, breadth);
    }

    #[test]
    fn exact_substrings_are_always_found(
        text in text_strategy(),
        start_frac in 0.0f64..1.0,
        len in 1usize..6,
    ) {
        let start = ((text.len() - 1) as f64 * start_frac) as usize;
        let end = (start + len).min(text.len());
        prop_assume!(end > start);
        let pattern = text[start..end].to_vec();
        let matches = bwt_matches(&text, &pattern, Traversal::default());
        prop_assert!(matches.contains(&start));
    }

    #[test]
    fn full_wildcard_pattern_covers_every_window(
        text in text_strategy(),
        len in 1usize..6,
    ) {
        prop_assume!(len <= text.len());
        let pattern = vec![b'#'; len];
        let expected: Vec<usize> = (0..=text.len() - len).collect();
        prop_assert_eq!(bwt_matches(&text, &pattern, Traversal::default()), expected);
    }
}
