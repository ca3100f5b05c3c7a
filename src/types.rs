//! The building blocks of a wildcard search index.
//!
//! These types define how the text, its Burrows-Wheeler transform, the suffix
//! array, and the occurrence tables fit together. Everything here is built
//! once by [`crate::build_index`] and immutable afterwards, so an [`Index`]
//! can be shared read-only across threads while each query keeps its own
//! worklist.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Index**: `bwt.len() = suffix_array.len() = text.len() + 1`
//!   The extra slot is the terminator rotation. Off-by-one here means
//!   garbage results.
//!
//! - **Suffix array**: a permutation of `[0, text.len()]`. Every rotation of
//!   the extended text appears exactly once.
//!
//! - **SearchRange**: inclusive on both ends, empty iff `lo > hi`.
//!
//! Rather than trusting yourself to remember these, call [`Index::verify`]
//! which checks the full suite from `verify.rs`.

use serde::{Deserialize, Serialize};

use crate::tables::OccurrenceTables;
use crate::verify::{self, ValidationError};

/// Synthetic terminator byte appended to the text before rotation sorting.
///
/// It must not occur in the input (enforced by [`crate::build_index`]) and
/// sorts below every other byte, which makes the rotation order coincide
/// with the suffix order of the extended text.
pub const TERMINATOR: u8 = 0x00;

/// Pattern byte that matches any text byte except the terminator.
///
/// Only the pattern side is special: a `#` occurring in the *text* is an
/// ordinary alphabet symbol.
pub const WILDCARD: u8 = b'#';

/// A built search index: the text plus every derived structure needed for
/// backward search.
///
/// Construction goes through [`crate::build_index`]; the fields are public
/// for inspection and serialization but must not be mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    /// The original text, without the terminator.
    pub text: Vec<u8>,
    /// Burrows-Wheeler transform of the extended text, length `text.len() + 1`.
    pub bwt: Vec<u8>,
    /// Start offsets of the sorted rotations, length `text.len() + 1`.
    pub suffix_array: Vec<usize>,
    /// Per-symbol rank arrays and first-occurrence offsets over the BWT.
    pub tables: OccurrenceTables,
}

impl Index {
    /// Length of the original text (n).
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Length of the BWT (n + 1).
    pub fn bwt_len(&self) -> usize {
        self.bwt.len()
    }

    /// Run the full invariant suite against this index.
    ///
    /// Checks that the suffix array is a permutation, that the rank arrays
    /// follow the counting recurrence, that the first-occurrence intervals
    /// partition the BWT, and that the BWT itself is consistent with the
    /// suffix array. O(n * alphabet) and intended for tests and `inspect`,
    /// not the per-query hot path.
    pub fn verify(&self) -> Result<(), ValidationError> {
        verify::verify_index(self)
    }
}

/// An inclusive interval of suffix-array rows sharing the pattern suffix
/// matched so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRange {
    /// First suffix-array row of the interval.
    pub lo: usize,
    /// Last suffix-array row of the interval (inclusive).
    pub hi: usize,
}

impl SearchRange {
    /// Number of suffix-array rows covered.
    pub fn len(&self) -> usize {
        if self.lo > self.hi {
            0
        } else {
            self.hi - self.lo + 1
        }
    }

    /// True iff the interval covers no rows.
    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }
}

/// Order in which the backward search explores wildcard branches.
///
/// The branches of the search cover disjoint suffix-array intervals, so the
/// final match set is identical either way; the choice is exposed so that
/// order independence is a testable property instead of an accident of the
/// call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Worklist behaves as a stack (the original recursive shape).
    #[default]
    DepthFirst,
    /// Worklist behaves as a queue.
    BreadthFirst,
}
