//! Negamax search with alpha-beta pruning and principal variation search
//!
//! # Features
//!
//! - Iterative deepening over the configured depths (2, 4, 6 by default)
//! - Transposition cache keyed by the incremental Zobrist hash, holding
//!   exact scores only and cleared after every depth
//! - History ordering: moves are tried in descending order of the average
//!   score they produced so far in this search
//! - PVS: null-window searches for every move after the first
//!
//! # Example
//!
//! ```
//! use xo::{Board, Stone};
//! use xo::config::NegamaxConfig;
//! use xo::search::NegamaxEngine;
//!
//! let mut engine = NegamaxEngine::new(NegamaxConfig::default());
//! let board: Board = "OO  XX          ".parse().unwrap();
//!
//! let result = engine.compute_move(&board, Stone::O).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use std::cmp::Reverse;
use std::sync::Arc;

use crate::board::{Board, Stone, TOTAL_CELLS};
use crate::config::NegamaxConfig;
use crate::error::{AiError, Result};
use crate::eval::{static_score, terminal_score, LineScore};
use crate::rules::{check_result, legal_moves};

use super::{CacheStats, Position, TranspositionCache, ZobristTable};

/// Window bound for the root call
const INF: i32 = 100_000;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the position is already decided
    pub best_move: Option<usize>,
    /// Score from the mover's perspective
    pub score: i32,
    /// Depth of the last completed iteration
    pub depth: u8,
    /// Total nodes visited across all iterations
    pub nodes: u64,
}

/// Running score average per cell across one top-level search.
#[derive(Debug, Clone)]
struct HistoryTable {
    sum: [i64; TOTAL_CELLS],
    count: [u32; TOTAL_CELLS],
}

impl HistoryTable {
    fn new() -> Self {
        Self {
            sum: [0; TOTAL_CELLS],
            count: [0; TOTAL_CELLS],
        }
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn record(&mut self, cell: usize, score: i32) {
        self.sum[cell] += i64::from(score);
        self.count[cell] += 1;
    }

    /// Average score, 0 for cells never searched.
    fn average(&self, cell: usize) -> i64 {
        match self.count[cell] {
            0 => 0,
            n => self.sum[cell] / i64::from(n),
        }
    }
}

/// Iteratively deepened negamax searcher.
///
/// Owns its cache and history table; only the Zobrist keys may be shared.
pub struct NegamaxEngine {
    config: NegamaxConfig,
    zobrist: Arc<ZobristTable>,
    cache: TranspositionCache,
    history: HistoryTable,
    nodes: u64,
}

impl NegamaxEngine {
    /// Create an engine with fresh Zobrist keys.
    #[must_use]
    pub fn new(config: NegamaxConfig) -> Self {
        let zobrist = Arc::new(Self::make_keys(&config));
        Self::with_keys(config, zobrist)
    }

    /// Create an engine that reuses an existing key table.
    #[must_use]
    pub fn with_keys(config: NegamaxConfig, zobrist: Arc<ZobristTable>) -> Self {
        Self {
            cache: TranspositionCache::new(config.cache_capacity),
            config,
            zobrist,
            history: HistoryTable::new(),
            nodes: 0,
        }
    }

    fn make_keys(config: &NegamaxConfig) -> ZobristTable {
        match config.zobrist_seed {
            Some(seed) => ZobristTable::with_seed(seed),
            None => ZobristTable::new(),
        }
    }

    /// Regenerate the Zobrist keys and forget everything learned so far.
    pub fn initialize(&mut self) {
        self.zobrist = Arc::new(Self::make_keys(&self.config));
        self.cache.reset();
        self.history.clear();
        self.nodes = 0;
    }

    #[inline]
    pub fn config(&self) -> &NegamaxConfig {
        &self.config
    }

    #[inline]
    pub fn zobrist(&self) -> &Arc<ZobristTable> {
        &self.zobrist
    }

    /// Cache counters since the last [`initialize`](Self::initialize).
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Search `board` for `mover` and return the deepest iteration's result.
    ///
    /// `best_move` is `None` only when the position is already won, lost or
    /// drawn.
    pub fn compute_move(&mut self, board: &Board, mover: Stone) -> Result<SearchResult> {
        if !mover.is_player() {
            return Err(AiError::InvalidMover(mover));
        }

        self.history.clear();
        self.nodes = 0;

        let zobrist = Arc::clone(&self.zobrist);
        let mut pos = Position::new(*board, &zobrist);
        let mut result = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
        };

        for depth in self.config.depths() {
            let (score, best_move) = self.negamax(&mut pos, depth, mover, -INF, INF);
            let stats = self.cache.stats();
            log::debug!(
                "negamax depth {depth}: score {score}, move {best_move:?}, nodes {}, cache {} entries, {}% hits",
                self.nodes,
                self.cache.len(),
                stats.hit_percent(),
            );
            self.cache.clear();

            result = SearchResult {
                best_move,
                score,
                depth,
                nodes: self.nodes,
            };
        }

        debug_assert_eq!(pos.hash(), zobrist.hash(board));
        Ok(result)
    }

    fn negamax(
        &mut self,
        pos: &mut Position<'_>,
        depth: u8,
        mover: Stone,
        mut alpha: i32,
        beta: i32,
    ) -> (i32, Option<usize>) {
        self.nodes += 1;

        let outcome = check_result(pos.board());
        if outcome.is_terminal() {
            return (terminal_score(outcome, mover), None);
        }
        if depth == 0 {
            return (static_score(pos.board(), mover), None);
        }

        if let Some(entry) = self.cache.get(pos.hash()) {
            return (entry.score, entry.best_move);
        }

        let alpha_orig = alpha;
        let mut moves = legal_moves(pos.board());
        moves.sort_by_key(|&cell| Reverse(self.history.average(cell)));

        let opponent = mover.opponent();
        let mut best: Option<(i32, usize)> = None;

        for (i, &cell) in moves.iter().enumerate() {
            let score = {
                let mut child = pos.play(cell, mover);
                if i == 0 {
                    -self.negamax(&mut child, depth - 1, opponent, -beta, -alpha).0
                } else {
                    let scout = -self.negamax(&mut child, depth - 1, opponent, -alpha - 1, -alpha).0;
                    if alpha < scout && scout < beta {
                        -self.negamax(&mut child, depth - 1, opponent, -beta, -alpha).0
                    } else {
                        scout
                    }
                }
            };

            self.history.record(cell, score);

            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, cell));
            }

            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        let (score, best_move) = match best {
            Some((score, cell)) => (score, Some(cell)),
            None => (LineScore::LOSS, None),
        };
        // Fail-low and fail-high scores are bounds; only exact values are memoized
        if alpha_orig < score && score < beta {
            self.cache.store(pos.hash(), score, best_move);
        }
        (score, best_move)
    }
}
