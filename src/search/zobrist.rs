//! Zobrist hashing for position identification
//!
//! Zobrist hashing allows O(1) incremental hash updates when placing/removing stones.
//! The negamax search toggles one key per simulated move and per undo.
//!
//! # Example
//!
//! ```
//! use xo::{Board, Stone};
//! use xo::search::ZobristTable;
//!
//! let zt = ZobristTable::with_seed(42);
//! let mut board = Board::new();
//! let hash1 = zt.hash(&board);
//!
//! board.place_stone(5, Stone::X);
//! let hash2 = zt.hash(&board);
//!
//! // Incremental update is equivalent to full recomputation
//! assert_eq!(zt.toggle(hash1, 5, Stone::X), hash2);
//! ```

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::{Board, Stone, TOTAL_CELLS};

/// One random key per (cell, player).
///
/// Generated once, then read-only; one table can be shared between any
/// number of searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristTable {
    /// `keys[cell][0]` for O, `keys[cell][1]` for X
    keys: [[u64; 2]; TOTAL_CELLS],
}

impl ZobristTable {
    /// Fresh keys from the thread-local OS-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Reproducible keys from a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn from_rng<R: Rng>(rng: &mut R) -> Self {
        let mut keys = [[0u64; 2]; TOTAL_CELLS];
        for cell in keys.iter_mut() {
            cell[0] = rng.random();
            cell[1] = rng.random();
        }
        Self { keys }
    }

    /// Key for `stone` on `cell`. `Empty` has no key.
    #[inline]
    pub fn key(&self, cell: usize, stone: Stone) -> u64 {
        match stone {
            Stone::O => self.keys[cell][0],
            Stone::X => self.keys[cell][1],
            Stone::Empty => 0,
        }
    }

    /// Compute the full hash for a board position.
    #[must_use]
    pub fn hash(&self, board: &Board) -> u64 {
        let mut h = 0u64;
        for idx in board.o.iter_ones() {
            h ^= self.keys[idx][0];
        }
        for idx in board.x.iter_ones() {
            h ^= self.keys[idx][1];
        }
        h
    }

    /// Incrementally place or remove `stone` on `cell`.
    ///
    /// XOR is its own inverse, so the same call undoes itself.
    #[inline]
    #[must_use]
    pub fn toggle(&self, hash: u64, cell: usize, stone: Stone) -> u64 {
        hash ^ self.key(cell, stone)
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
