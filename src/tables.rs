//! Occurrence tables: per-symbol rank arrays and first-occurrence offsets.
//!
//! The backward search never touches the text or the BWT directly; every
//! LF-mapping step is two lookups in these tables. Symbols are mapped to
//! dense slots through a fixed 256-entry table so lookups stay O(1) and the
//! alphabet enumeration order is the byte order, never a hash artifact.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **RANK_RECURRENCE**: `rank[slot][0] = 0` and
//!    `rank[slot][i + 1] = rank[slot][i] + (bwt[i] == symbols[slot])`
//! 2. **FIRST_PARTITION**: the intervals
//!    `[first[slot], first[slot] + count(slot))`, taken in slot order,
//!    partition `[0, bwt.len())` with no gap or overlap
//! 3. **SLOT_ORDER**: `symbols` is strictly ascending, so slot order is
//!    lexicographic byte order and the terminator (0x00) is always slot 0

use serde::{Deserialize, Serialize};

/// Slot-map entry for bytes absent from the BWT.
const NO_SLOT: u16 = u16::MAX;

/// Rank and first-occurrence tables over a BWT.
///
/// Built once per index by [`OccurrenceTables::build`]; immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccurrenceTables {
    /// Alphabet of the BWT in ascending byte order; slot i holds symbols[i].
    symbols: Vec<u8>,
    /// 256-entry byte-to-slot map; `NO_SLOT` marks absent bytes.
    slots: Vec<u16>,
    /// ranks[slot][i] = occurrences of symbols[slot] in bwt[..i].
    /// Each array has length `bwt.len() + 1`.
    ranks: Vec<Vec<u32>>,
    /// first[slot] = count of BWT bytes strictly smaller than symbols[slot].
    first: Vec<usize>,
}

impl OccurrenceTables {
    /// Build rank and first-occurrence tables from a BWT.
    pub fn build(bwt: &[u8]) -> Self {
        // Enumerate the alphabet in fixed byte order via a counting pass.
        let mut counts = [0usize; 256];
        for &b in bwt {
            counts[b as usize] += 1;
        }

        let symbols: Vec<u8> = (0u16..256)
            .filter(|&b| counts[b as usize] > 0)
            .map(|b| b as u8)
            .collect();

        let mut slots = vec![NO_SLOT; 256];
        for (slot, &sym) in symbols.iter().enumerate() {
            slots[sym as usize] = slot as u16;
        }

        // INVARIANT: RANK_RECURRENCE
        let mut ranks: Vec<Vec<u32>> = symbols
            .iter()
            .map(|_| Vec::with_capacity(bwt.len() + 1))
            .collect();
        let mut running = vec![0u32; symbols.len()];
        for rank in &mut ranks {
            rank.push(0);
        }
        for &b in bwt {
            running[slots[b as usize] as usize] += 1;
            for (slot, rank) in ranks.iter_mut().enumerate() {
                rank.push(running[slot]);
            }
        }

        // INVARIANT: FIRST_PARTITION
        // Running sum of the counts of strictly smaller symbols.
        let mut first = Vec::with_capacity(symbols.len());
        let mut cumulative = 0usize;
        for &sym in &symbols {
            first.push(cumulative);
            cumulative += counts[sym as usize];
        }

        Self {
            symbols,
            slots,
            ranks,
            first,
        }
    }

    /// Dense slot for a byte, or `None` if the byte never occurs in the BWT.
    #[inline]
    pub fn slot(&self, byte: u8) -> Option<usize> {
        let slot = self.slots[byte as usize];
        (slot != NO_SLOT).then_some(slot as usize)
    }

    /// Occurrences of `symbols[slot]` in `bwt[..i]`.
    #[inline]
    pub fn rank(&self, slot: usize, i: usize) -> usize {
        self.ranks[slot][i] as usize
    }

    /// Number of BWT bytes strictly smaller than `symbols[slot]`.
    #[inline]
    pub fn first(&self, slot: usize) -> usize {
        self.first[slot]
    }

    /// Total occurrences of `symbols[slot]` in the whole BWT.
    #[inline]
    pub fn count(&self, slot: usize) -> usize {
        let rank = &self.ranks[slot];
        rank[rank.len() - 1] as usize
    }

    /// The alphabet in ascending byte order.
    pub fn alphabet(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of distinct symbols, terminator included.
    pub fn alphabet_len(&self) -> usize {
        self.symbols.len()
    }

    /// Width every rank array must have for a BWT of length `bwt_len`.
    pub(crate) fn expected_rank_width(bwt_len: usize) -> usize {
        bwt_len + 1
    }

    /// Raw table views for invariant checking.
    pub(crate) fn parts(&self) -> (&[u8], &[u16], &[Vec<u32>], &[usize]) {
        (&self.symbols, &self.slots, &self.ranks, &self.first)
    }
}
