//! AI-vs-AI game driver
//!
//! `O` plays with MCTS and moves first; `X` answers with Negamax. The
//! driver asks the side to move for a cell, places it and stops as soon as
//! the board is decided or an engine has nothing to play.

use crate::board::{Board, Stone, TOTAL_CELLS};
use crate::config::MatchConfig;
use crate::engine::{AIEngine, SearchType};
use crate::error::{AiError, Result};
use crate::rules::{check_result, GameResult};

/// Board plus whose turn it is and how we got here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_turn: Stone,
    pub result: GameResult,
    pub last_move: Option<usize>,
    pub move_history: Vec<(usize, Stone)>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Stone::O,
            result: GameResult::Ongoing,
            last_move: None,
            move_history: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    /// Place a stone for the side to move and pass the turn.
    pub fn apply(&mut self, cell: usize) -> Result<()> {
        if self.is_over() {
            return Err(AiError::GameOver);
        }
        if cell >= TOTAL_CELLS || !self.board.is_empty(cell) {
            return Err(AiError::IllegalMove(cell));
        }

        let stone = self.current_turn;
        self.board.place_stone(cell, stone);
        self.move_history.push((cell, stone));
        self.last_move = Some(cell);
        self.result = check_result(&self.board);
        self.current_turn = stone.opponent();
        Ok(())
    }

    /// Take back the last move.
    pub fn undo(&mut self) {
        let Some((cell, stone)) = self.move_history.pop() else {
            return;
        };
        self.board.remove_stone(cell);
        self.current_turn = stone;
        self.last_move = self.move_history.last().map(|&(cell, _)| cell);
        self.result = check_result(&self.board);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// One move of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub cell: usize,
    pub stone: Stone,
    pub search_type: SearchType,
    pub score: Option<i32>,
    pub time_ms: u64,
}

/// Everything a finished game leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub board: Board,
    pub result: GameResult,
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Stone> {
        self.result.winner()
    }
}

/// Strategy each side plays with.
#[inline]
pub fn strategy_for(stone: Stone) -> SearchType {
    match stone {
        Stone::O => SearchType::Mcts,
        _ => SearchType::Negamax,
    }
}

/// Play one game to the end or to `config.max_turns`.
pub fn play_game(engine: &mut AIEngine, config: &MatchConfig) -> Result<GameRecord> {
    let mut state = GameState::new();
    let mut moves = Vec::new();

    while !state.is_over() && moves.len() < config.max_turns {
        let stone = state.current_turn;
        let search_type = strategy_for(stone);
        let found = engine.get_move_with_stats(&state.board, stone, search_type)?;

        let Some(cell) = found.best_move else {
            log::info!("{stone:?} ({search_type:?}) has no move, stopping");
            break;
        };

        state.apply(cell)?;
        log::debug!("{stone:?} plays {cell} via {search_type:?} in {}ms", found.time_ms);
        moves.push(MoveRecord {
            cell,
            stone,
            search_type,
            score: found.score,
            time_ms: found.time_ms,
        });
    }

    log::info!("game over after {} moves: {:?}", moves.len(), state.result);
    Ok(GameRecord {
        board: state.board,
        result: state.result,
        moves,
    })
}
