//! Board structure with symbol I/O

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use super::bitboard::Bitboard;
use super::{Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::AiError;

/// Empty cell indices, ascending. Never longer than the board.
pub type MoveList = SmallVec<[usize; TOTAL_CELLS]>;

/// Game board: one bitboard per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// O stones bitboard
    pub o: Bitboard,
    /// X stones bitboard
    pub x: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            o: Bitboard::new(),
            x: Bitboard::new(),
        }
    }

    /// Parse a board from its fixed-length symbol sequence (`' '`, `'O'`, `'X'`).
    pub fn from_symbols(symbols: &[u8]) -> Result<Self, AiError> {
        if symbols.len() != TOTAL_CELLS {
            return Err(AiError::BoardLength {
                found: symbols.len(),
                expected: TOTAL_CELLS,
            });
        }
        let mut board = Board::new();
        for (index, &byte) in symbols.iter().enumerate() {
            let symbol = byte as char;
            let stone = Stone::from_symbol(symbol)
                .ok_or(AiError::InvalidSymbol { symbol, index })?;
            board.place_stone(index, stone);
        }
        Ok(board)
    }

    /// The board as its fixed-length symbol sequence.
    pub fn to_symbols(&self) -> [u8; TOTAL_CELLS] {
        let mut out = [b' '; TOTAL_CELLS];
        for (idx, cell) in out.iter_mut().enumerate() {
            *cell = self.get(idx).symbol() as u8;
        }
        out
    }

    /// Get stone at cell index
    #[inline]
    pub fn get(&self, idx: usize) -> Stone {
        if self.o.get(idx) {
            Stone::O
        } else if self.x.get(idx) {
            Stone::X
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        !self.o.get(idx) && !self.x.get(idx)
    }

    /// Place a stone. Placing `Empty` is a no-op.
    #[inline]
    pub fn place_stone(&mut self, idx: usize, stone: Stone) {
        match stone {
            Stone::O => self.o.set(idx),
            Stone::X => self.x.set(idx),
            Stone::Empty => {}
        }
    }

    #[inline]
    pub fn remove_stone(&mut self, idx: usize) {
        self.o.clear(idx);
        self.x.clear(idx);
    }

    /// Empty cells in ascending index order.
    #[inline]
    pub fn empty_cells(&self) -> MoveList {
        Bitboard::vacant(self.o, self.x).iter_ones().collect()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.o.count() + self.x.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.o.is_empty() && self.x.is_empty()
    }
}

impl FromStr for Board {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_symbols(s.as_bytes())
    }
}

/// Renders cells joined by `|`, rows separated by a dashed line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.get(row * BOARD_SIZE + col).symbol())?;
                if col < BOARD_SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            f.write_str("\n")?;
            if row < BOARD_SIZE - 1 {
                writeln!(f, "{}", "-".repeat(BOARD_SIZE * 2 - 1))?;
            }
        }
        Ok(())
    }
}
