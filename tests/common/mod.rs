//! Shared helpers for integration and property tests.

use wildex::driver::Engine;
use wildex::{build_index, search_with, Traversal};

pub use wildex::testing::{naive_exact_matches, naive_wildcard_matches};

/// Engines that implement the wildcard contract.
pub const WILDCARD_ENGINES: &[Engine] = &[Engine::Bwt, Engine::Z];

/// All engines, exact-only scanner included.
pub const ALL_ENGINES: &[Engine] = &[Engine::Bwt, Engine::Z, Engine::ReverseBm];

/// Build an index and run the backward search, panicking on validation
/// errors (tests only ever feed well-formed inputs here).
pub fn bwt_matches(text: &[u8], pattern: &[u8], traversal: Traversal) -> Vec<usize> {
    let index = build_index(text).expect("test text builds an index");
    search_with(&index, pattern, traversal).expect("built index is valid")
}

/// Assert a built index passes the full invariant suite.
pub fn assert_index_well_formed(text: &[u8]) {
    let index = build_index(text).expect("test text builds an index");
    index
        .verify()
        .unwrap_or_else(|e| panic!("index for {:?} violates invariants: {}", text, e));
}
