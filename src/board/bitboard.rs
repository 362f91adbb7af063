//! Bitboard implementation for fast occupancy queries

use super::TOTAL_CELLS;

const _: () = assert!(TOTAL_CELLS <= 16, "board does not fit a u16 bitboard");

/// Mask of every valid cell.
const FULL: u16 = ((1u32 << TOTAL_CELLS) - 1) as u16;

/// One bit per cell, indexed by `Pos::to_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        self.bits |= 1u16 << idx;
    }

    /// Clear a bit at cell index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        self.bits &= !(1u16 << idx);
    }

    /// Check if bit is set at cell index
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        (self.bits >> idx) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Cells set in neither bitboard.
    #[inline]
    pub fn vacant(a: Bitboard, b: Bitboard) -> Bitboard {
        Bitboard {
            bits: !(a.bits | b.bits) & FULL,
        }
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(idx)
    }
}
