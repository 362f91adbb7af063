//! Error type shared by the engines, the game driver and config loading

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

use crate::board::Stone;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("board has {found} cells, expected {expected}")]
    BoardLength { found: usize, expected: usize },

    #[error("invalid cell symbol {symbol:?} at index {index}")]
    InvalidSymbol { symbol: char, index: usize },

    #[error("mover must be a player stone, got {0:?}")]
    InvalidMover(Stone),

    #[error("cell {0} is not an empty cell on the board")]
    IllegalMove(usize),

    #[error("game is already over")]
    GameOver,

    #[error("search tree allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AiError>;
