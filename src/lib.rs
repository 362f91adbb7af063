//! Move search for 4x4 three-in-a-row
//!
//! Two independent players for a small K-in-a-row game:
//! - 4x4 board
//! - exactly 3 in a row wins (a run of 4 does not count)
//! - `O` and `X` alternate, a full board without a winner is a draw
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection, terminal values, legal moves
//! - [`fixed`]: 16.16 fixed-point arithmetic used by MCTS scoring
//! - [`rng`]: xoroshiro generator with long jump for rollouts
//! - [`eval`]: Leaf evaluation for negamax
//! - [`search`]: Zobrist hashing, transposition cache and negamax
//! - [`mcts`]: Monte-Carlo tree search
//! - [`engine`]: Per-game engine bundling both strategies
//! - [`game`]: AI-vs-AI game driver
//!
//! # Quick Start
//!
//! ```
//! use xo::{AIEngine, Board, SearchType, Stone};
//! use xo::config::EngineConfig;
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_seed(7));
//!
//! // MCTS opens as O
//! if let Some(cell) = engine.get_move(&board, Stone::O, SearchType::Mcts).unwrap() {
//!     board.place_stone(cell, Stone::O);
//! }
//!
//! // Negamax answers as X
//! if let Some(cell) = engine.get_move(&board, Stone::X, SearchType::Negamax).unwrap() {
//!     board.place_stone(cell, Stone::X);
//! }
//!
//! assert_eq!(board.stone_count(), 2);
//! println!("{board}");
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod fixed;
pub mod game;
pub mod mcts;
pub mod rng;
pub mod rules;
pub mod search;

// Re-export commonly used types at crate root
pub use board::{Board, Pos, Stone, BOARD_SIZE, GOAL, TOTAL_CELLS};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{AiError, Result};
pub use fixed::Fixed;
pub use rules::GameResult;
