//! Backward search over the BWT index, with wildcard branching.
//!
//! The pattern is consumed right-to-left. Each worklist item is a
//! suffix-array interval whose rotations all start with the pattern suffix
//! consumed so far, plus a count of pattern bytes still to match. A literal
//! byte narrows the interval with one LF-mapping step; a wildcard fans the
//! item out into one child per alphabet symbol, terminator excluded. Items
//! that have consumed the whole pattern are terminal: every row in their
//! interval is a confirmed match.
//!
//! The worklist is explicit rather than recursive, so a pattern made
//! entirely of wildcards cannot overflow the stack and the exploration
//! order is a parameter ([`Traversal`]) instead of a call-stack artifact.
//! Branches cover disjoint intervals, which makes the union of terminal
//! rows independent of that order; `tests/property.rs` holds us to it.
//!
//! Each step strictly decreases the remaining-byte count, so a query
//! performs at most `pattern.len() * alphabet` narrowing steps.

use std::collections::VecDeque;

use crate::collect::collect_matches;
use crate::tables::OccurrenceTables;
use crate::types::{Index, SearchRange, Traversal, WILDCARD};
use crate::verify::{self, ValidationError};

/// A worklist item: an interval plus the number of pattern bytes left to
/// consume. `remaining == 0` is terminal.
#[derive(Debug, Clone, Copy)]
struct Branch {
    range: SearchRange,
    remaining: usize,
}

/// Find every occurrence of `pattern` in the indexed text.
///
/// `#` in the pattern matches any single text byte. Returns unique 0-based
/// offsets in ascending order. A zero-length pattern, or one longer than
/// the text, yields an empty result rather than an error; a structurally
/// malformed index fails with [`ValidationError`].
pub fn search(index: &Index, pattern: &[u8]) -> Result<Vec<usize>, ValidationError> {
    search_with(index, pattern, Traversal::default())
}

/// [`search`] with an explicit wildcard exploration order.
///
/// Depth-first and breadth-first produce identical results; the parameter
/// exists so that claim stays testable.
pub fn search_with(
    index: &Index,
    pattern: &[u8],
    traversal: Traversal,
) -> Result<Vec<usize>, ValidationError> {
    verify::check_structure(index)?;

    let text_len = index.text_len();
    if pattern.is_empty() || pattern.len() > text_len {
        return Ok(Vec::new());
    }

    let ranges = backward_search(&index.tables, pattern, index.bwt_len(), traversal);
    Ok(collect_matches(
        &ranges,
        &index.suffix_array,
        pattern.len(),
        text_len,
    ))
}

/// Run the worklist to exhaustion and return every terminal interval.
fn backward_search(
    tables: &OccurrenceTables,
    pattern: &[u8],
    bwt_len: usize,
    traversal: Traversal,
) -> Vec<SearchRange> {
    let mut terminal = Vec::new();
    let mut worklist = VecDeque::new();
    worklist.push_back(Branch {
        range: SearchRange {
            lo: 0,
            hi: bwt_len - 1,
        },
        remaining: pattern.len(),
    });

    while let Some(branch) = match traversal {
        Traversal::DepthFirst => worklist.pop_back(),
        Traversal::BreadthFirst => worklist.pop_front(),
    } {
        if branch.remaining == 0 {
            terminal.push(branch.range);
            continue;
        }

        let next = branch.remaining - 1;
        match pattern[next] {
            WILDCARD => {
                // Fan out over the real alphabet. Slot 0 is the terminator,
                // which a wildcard never matches.
                for slot in 1..tables.alphabet_len() {
                    if let Some(range) = narrow(tables, branch.range, slot) {
                        worklist.push_back(Branch {
                            range,
                            remaining: next,
                        });
                    }
                }
            }
            byte => {
                // A byte absent from the alphabet kills the branch.
                if let Some(slot) = tables.slot(byte) {
                    if let Some(range) = narrow(tables, branch.range, slot) {
                        worklist.push_back(Branch {
                            range,
                            remaining: next,
                        });
                    }
                }
            }
        }
    }

    terminal
}

/// One LF-mapping step: the interval of rotations starting with
/// `symbols[slot]` followed by the current interval's shared suffix.
///
/// Returns `None` when the narrowed interval is empty (branch pruning).
fn narrow(tables: &OccurrenceTables, range: SearchRange, slot: usize) -> Option<SearchRange> {
    let rank_hi = tables.rank(slot, range.hi + 1);
    if rank_hi == 0 {
        return None;
    }
    let lo = tables.first(slot) + tables.rank(slot, range.lo);
    let hi = tables.first(slot) + rank_hi - 1;
    (lo <= hi).then_some(SearchRange { lo, hi })
}
