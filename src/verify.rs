//! Index validation: the invariants the rest of the crate leans on.
//!
//! Instead of hoping every table stayed consistent, check it. The cheap
//! structural checks run on every query ([`check_structure`]); the full
//! O(n * alphabet) suite ([`verify_index`]) backs `Index::verify` and the
//! property tests.

use std::fmt;

use crate::tables::OccurrenceTables;
use crate::types::{Index, TERMINATOR};

/// Error type for rejected inputs and malformed indexes.
///
/// Every variant is surfaced immediately and never retried; empty results
/// (empty pattern, no occurrences, pruned branches) are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input text was empty; there is nothing to index.
    EmptyText,
    /// The input text already contains the reserved terminator byte.
    TerminatorInText { position: usize },
    /// BWT and suffix array lengths disagree.
    MismatchedBwtSuffixArray { bwt_len: usize, sa_len: usize },
    /// BWT length is not text length + 1.
    MismatchedTextBwt { text_len: usize, bwt_len: usize },
    /// Table slot arrays (symbols, ranks, first) are not aligned.
    MismatchedTableSlots {
        symbols: usize,
        ranks: usize,
        first: usize,
    },
    /// A rank array does not have `bwt.len() + 1` entries.
    MismatchedRankWidth {
        symbol: u8,
        rank_len: usize,
        expected: usize,
    },
    /// A suffix-array entry points outside the extended text.
    SuffixArrayOutOfRange { row: usize, offset: usize },
    /// The suffix array repeats an offset; it must be a permutation.
    DuplicateSuffixOffset { offset: usize },
    /// A rank array breaks the counting recurrence against the BWT.
    RankMismatch { symbol: u8, position: usize },
    /// A rank array's final entry disagrees with the symbol's total count.
    RankTotalMismatch {
        symbol: u8,
        claimed: usize,
        actual: usize,
    },
    /// First-occurrence offsets leave a gap or overlap in `[0, bwt.len())`.
    FirstOccurrenceMismatch {
        symbol: u8,
        expected: usize,
        actual: usize,
    },
    /// The BWT byte at a row is not the byte cyclically preceding that
    /// row's rotation.
    BwtMismatch { row: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyText => write!(f, "text is empty"),
            ValidationError::TerminatorInText { position } => {
                write!(f, "text contains the terminator byte at offset {}", position)
            }
            ValidationError::MismatchedBwtSuffixArray { bwt_len, sa_len } => {
                write!(f, "bwt.len() {} != suffix_array.len() {}", bwt_len, sa_len)
            }
            ValidationError::MismatchedTextBwt { text_len, bwt_len } => {
                write!(f, "bwt.len() {} != text.len() {} + 1", bwt_len, text_len)
            }
            ValidationError::MismatchedTableSlots {
                symbols,
                ranks,
                first,
            } => {
                write!(
                    f,
                    "table slots misaligned: {} symbols, {} rank arrays, {} first offsets",
                    symbols, ranks, first
                )
            }
            ValidationError::MismatchedRankWidth {
                symbol,
                rank_len,
                expected,
            } => {
                write!(
                    f,
                    "rank array for {:#04x} has {} entries, expected {}",
                    symbol, rank_len, expected
                )
            }
            ValidationError::SuffixArrayOutOfRange { row, offset } => {
                write!(f, "suffix_array[{}] = {} is out of range", row, offset)
            }
            ValidationError::DuplicateSuffixOffset { offset } => {
                write!(f, "suffix array repeats offset {}", offset)
            }
            ValidationError::RankMismatch { symbol, position } => {
                write!(
                    f,
                    "rank array for {:#04x} breaks the recurrence at position {}",
                    symbol, position
                )
            }
            ValidationError::RankTotalMismatch {
                symbol,
                claimed,
                actual,
            } => {
                write!(
                    f,
                    "rank total for {:#04x} is {} but the BWT holds {}",
                    symbol, claimed, actual
                )
            }
            ValidationError::FirstOccurrenceMismatch {
                symbol,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "first occurrence of {:#04x} should be {} but is {}",
                    symbol, expected, actual
                )
            }
            ValidationError::BwtMismatch { row } => {
                write!(f, "bwt[{}] disagrees with the suffix array", row)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Cheap structural checks run before every query.
///
/// Length alignment only; content-level invariants live in
/// [`verify_index`].
pub fn check_structure(index: &Index) -> Result<(), ValidationError> {
    let bwt_len = index.bwt.len();
    if bwt_len != index.suffix_array.len() {
        return Err(ValidationError::MismatchedBwtSuffixArray {
            bwt_len,
            sa_len: index.suffix_array.len(),
        });
    }
    if bwt_len != index.text.len() + 1 {
        return Err(ValidationError::MismatchedTextBwt {
            text_len: index.text.len(),
            bwt_len,
        });
    }

    let (symbols, _, ranks, first) = index.tables.parts();
    if symbols.len() != ranks.len() || symbols.len() != first.len() {
        return Err(ValidationError::MismatchedTableSlots {
            symbols: symbols.len(),
            ranks: ranks.len(),
            first: first.len(),
        });
    }
    let expected = OccurrenceTables::expected_rank_width(bwt_len);
    for (slot, rank) in ranks.iter().enumerate() {
        if rank.len() != expected {
            return Err(ValidationError::MismatchedRankWidth {
                symbol: symbols[slot],
                rank_len: rank.len(),
                expected,
            });
        }
    }
    Ok(())
}

/// The full invariant suite behind `Index::verify`.
pub fn verify_index(index: &Index) -> Result<(), ValidationError> {
    check_structure(index)?;

    let bwt_len = index.bwt.len();

    // Suffix array is a permutation of [0, text.len()].
    let mut seen = vec![false; bwt_len];
    for (row, &offset) in index.suffix_array.iter().enumerate() {
        if offset >= bwt_len {
            return Err(ValidationError::SuffixArrayOutOfRange { row, offset });
        }
        if seen[offset] {
            return Err(ValidationError::DuplicateSuffixOffset { offset });
        }
        seen[offset] = true;
    }

    // BWT content agrees with the suffix array over the extended text.
    for (row, &offset) in index.suffix_array.iter().enumerate() {
        let preceding = (offset + bwt_len - 1) % bwt_len;
        let expected = if preceding == index.text.len() {
            TERMINATOR
        } else {
            index.text[preceding]
        };
        if index.bwt[row] != expected {
            return Err(ValidationError::BwtMismatch { row });
        }
    }

    // Rank arrays follow the counting recurrence and land on the totals.
    let (symbols, _, _, _) = index.tables.parts();
    for (slot, &symbol) in symbols.iter().enumerate() {
        for (position, &byte) in index.bwt.iter().enumerate() {
            let step = usize::from(byte == symbol);
            if index.tables.rank(slot, position + 1) != index.tables.rank(slot, position) + step {
                return Err(ValidationError::RankMismatch { symbol, position });
            }
        }
        let actual = index.bwt.iter().filter(|&&b| b == symbol).count();
        let claimed = index.tables.rank(slot, bwt_len);
        if claimed != actual {
            return Err(ValidationError::RankTotalMismatch {
                symbol,
                claimed,
                actual,
            });
        }
    }

    // First-occurrence intervals partition [0, bwt_len) in slot order.
    let mut cursor = 0usize;
    for (slot, &symbol) in symbols.iter().enumerate() {
        let actual = index.tables.first(slot);
        if actual != cursor {
            return Err(ValidationError::FirstOccurrenceMismatch {
                symbol,
                expected: cursor,
                actual,
            });
        }
        cursor += index.tables.count(slot);
    }
    if cursor != bwt_len {
        return Err(ValidationError::FirstOccurrenceMismatch {
            symbol: symbols.last().copied().unwrap_or(TERMINATOR),
            expected: bwt_len,
            actual: cursor,
        });
    }

    Ok(())
}
