//! Main AI engine bundling both search strategies
//!
//! One [`AIEngine`] is the whole search context of one game: its own MCTS
//! generator, its own Negamax cache and history. Games that run side by
//! side each get their own engine, so nothing is shared between them.
//!
//! # Example
//!
//! ```
//! use xo::{AIEngine, Board, SearchType, Stone};
//! use xo::config::EngineConfig;
//!
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_seed(1));
//! let mut board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Stone::O, SearchType::Mcts).unwrap();
//! if let Some(cell) = result.best_move {
//!     board.place_stone(cell, Stone::O);
//! }
//! println!("{:?} chose {:?} in {}ms", result.search_type, result.best_move, result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Stone};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::mcts::MctsEngine;
use crate::search::NegamaxEngine;

/// Which strategy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    /// Monte-Carlo tree search
    Mcts,
    /// Iteratively deepened negamax
    Negamax,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` when there is no move to play
    pub best_move: Option<usize>,
    /// Negamax score; MCTS reports none
    pub score: Option<i32>,
    /// Strategy that produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Negamax nodes visited, or MCTS iterations actually run
    pub nodes: u64,
}

/// Per-game AI owning one engine of each kind.
pub struct AIEngine {
    mcts: MctsEngine,
    negamax: NegamaxEngine,
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with default settings and unseeded randomness.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let config = config.validated();
        Self {
            mcts: MctsEngine::new(config.mcts.clone()),
            negamax: NegamaxEngine::new(config.negamax.clone()),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move for `mover` using `strategy`.
    pub fn get_move(&mut self, board: &Board, mover: Stone, strategy: SearchType) -> Result<Option<usize>> {
        Ok(self.get_move_with_stats(board, mover, strategy)?.best_move)
    }

    /// Best move for `mover` using `strategy`, with timing and node counts.
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        mover: Stone,
        strategy: SearchType,
    ) -> Result<MoveResult> {
        let start = Instant::now();

        let result = match strategy {
            SearchType::Mcts => {
                let best_move = self.mcts.compute_move(board, mover)?;
                MoveResult {
                    best_move,
                    score: None,
                    search_type: strategy,
                    time_ms: 0,
                    nodes: u64::from(self.mcts.iterations_run()),
                }
            }
            SearchType::Negamax => {
                let found = self.negamax.compute_move(board, mover)?;
                MoveResult {
                    best_move: found.best_move,
                    score: Some(found.score),
                    search_type: strategy,
                    time_ms: 0,
                    nodes: found.nodes,
                }
            }
        };

        Ok(MoveResult {
            time_ms: start.elapsed().as_millis() as u64,
            ..result
        })
    }

    /// Reseed the MCTS generator, regenerate Zobrist keys and drop all
    /// cached search state. Call between games.
    pub fn reset(&mut self) {
        self.mcts.initialize();
        self.negamax.initialize();
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;
    use crate::eval::LineScore;

    fn seeded() -> AIEngine {
        AIEngine::with_config(EngineConfig::default().with_seed(17))
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config().mcts.iterations, 1000);
        assert_eq!(engine.config().negamax.max_depth, 6);
    }

    #[test]
    fn test_engine_only_move_both_strategies() {
        let board: Board = "XOOXO XOOXXOXOOX".parse().unwrap();
        let mut engine = seeded();

        let mcts = engine.get_move_with_stats(&board, Stone::O, SearchType::Mcts).unwrap();
        assert_eq!(mcts.best_move, Some(5));
        assert_eq!(mcts.score, None);
        assert_eq!(mcts.search_type, SearchType::Mcts);

        let negamax = engine.get_move_with_stats(&board, Stone::O, SearchType::Negamax).unwrap();
        assert_eq!(negamax.best_move, Some(5));
        assert_eq!(negamax.score, Some(LineScore::WIN));
        assert_eq!(negamax.search_type, SearchType::Negamax);
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = seeded();
        for strategy in [SearchType::Mcts, SearchType::Negamax] {
            let mv = engine.get_move(&Board::new(), Stone::O, strategy).unwrap();
            assert!(mv.is_some_and(|cell| cell < TOTAL_CELLS), "{strategy:?}");
        }
    }

    #[test]
    fn test_engine_full_board() {
        let board: Board = "OOXXXXOOOOXXXXOO".parse().unwrap();
        let mut engine = seeded();
        for strategy in [SearchType::Mcts, SearchType::Negamax] {
            assert_eq!(engine.get_move(&board, Stone::X, strategy).unwrap(), None);
        }
    }

    #[test]
    fn test_engine_reports_iterations_run() {
        let mut engine = seeded();

        let decided: Board = "XXX OO          ".parse().unwrap();
        let result = engine.get_move_with_stats(&decided, Stone::O, SearchType::Mcts).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);

        let result = engine.get_move_with_stats(&Board::new(), Stone::O, SearchType::Mcts).unwrap();
        assert_eq!(result.nodes, 1000);
    }

    #[test]
    fn test_engine_reset_repeats() {
        let board: Board = "O    X          ".parse().unwrap();
        let mut engine = seeded();

        let first = engine.get_move(&board, Stone::O, SearchType::Mcts).unwrap();
        engine.reset();
        let second = engine.get_move(&board, Stone::O, SearchType::Mcts).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_engine_independent_instances() {
        let board: Board = "O    X    O     ".parse().unwrap();
        let mut a = seeded();
        let mut b = AIEngine::new();

        let ra = a.get_move_with_stats(&board, Stone::X, SearchType::Negamax).unwrap();
        let rb = b.get_move_with_stats(&board, Stone::X, SearchType::Negamax).unwrap();
        assert_eq!((ra.best_move, ra.score), (rb.best_move, rb.score));
    }
}
