//! Board representation for the 4x4 three-in-a-row game

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, MoveList};

/// Board size (4x4)
pub const BOARD_SIZE: usize = 4;
/// Stones in a row needed to win
pub const GOAL: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 16

/// Cell contents. `O` and `X` are the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    O,
    X,
}

impl Stone {
    /// Get opponent stone
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::O => Stone::X,
            Stone::X => Stone::O,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Symbol used on the wire and in rendering.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => ' ',
            Stone::O => 'O',
            Stone::X => 'X',
        }
    }

    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Stone> {
        match symbol {
            ' ' => Some(Stone::Empty),
            'O' => Some(Stone::O),
            'X' => Some(Stone::X),
            _ => None,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}
