//! Board plus incremental hash, kept in lockstep
//!
//! [`Position::play`] places a stone and returns a guard. Dropping the guard
//! takes the stone back and restores the hash, so every exit path out of a
//! search frame leaves the position as it found it.

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Stone};

use super::ZobristTable;

/// A board together with its Zobrist hash.
#[derive(Debug, Clone)]
pub struct Position<'z> {
    board: Board,
    hash: u64,
    keys: &'z ZobristTable,
}

impl<'z> Position<'z> {
    /// Hash the board from scratch.
    pub fn new(board: Board, keys: &'z ZobristTable) -> Self {
        let hash = keys.hash(&board);
        Self { board, hash, keys }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Place `stone` on the empty `cell` until the guard is dropped.
    pub fn play(&mut self, cell: usize, stone: Stone) -> Played<'_, 'z> {
        debug_assert!(self.board.is_empty(cell));
        self.board.place_stone(cell, stone);
        self.hash = self.keys.toggle(self.hash, cell, stone);
        Played { pos: self, cell, stone }
    }
}

/// A move on a [`Position`], undone on drop.
pub struct Played<'p, 'z> {
    pos: &'p mut Position<'z>,
    cell: usize,
    stone: Stone,
}

impl<'z> Deref for Played<'_, 'z> {
    type Target = Position<'z>;

    fn deref(&self) -> &Self::Target {
        &*self.pos
    }
}

impl DerefMut for Played<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.pos
    }
}

impl Drop for Played<'_, '_> {
    fn drop(&mut self) {
        self.pos.board.remove_stone(self.cell);
        self.pos.hash = self.pos.keys.toggle(self.pos.hash, self.cell, self.stone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_updates_board_and_hash() {
        let keys = ZobristTable::with_seed(11);
        let mut pos = Position::new(Board::new(), &keys);

        let played = pos.play(3, Stone::O);
        assert_eq!(played.board().get(3), Stone::O);
        assert_eq!(played.hash(), keys.hash(played.board()));
    }

    #[test]
    fn test_drop_restores() {
        let keys = ZobristTable::with_seed(12);
        let start: Board = "X  O            ".parse().unwrap();
        let mut pos = Position::new(start, &keys);
        let hash = pos.hash();

        {
            let mut first = pos.play(5, Stone::X);
            let second = first.play(9, Stone::O);
            assert_eq!(second.board().stone_count(), 4);
        }

        assert_eq!(*pos.board(), start);
        assert_eq!(pos.hash(), hash);
    }

    #[test]
    fn test_restored_on_early_return() {
        fn play_and_bail(pos: &mut Position<'_>) -> Option<u64> {
            let played = pos.play(0, Stone::X);
            if played.board().get(0) == Stone::X {
                return None;
            }
            Some(played.hash())
        }

        let keys = ZobristTable::with_seed(13);
        let mut pos = Position::new(Board::new(), &keys);
        assert_eq!(play_and_bail(&mut pos), None);
        assert!(pos.board().is_board_empty());
        assert_eq!(pos.hash(), 0);
    }
}
