//! MCTS search: select, expand, simulate, backpropagate.
//!
//! Each call builds a fresh tree from the given board, runs the configured
//! number of iterations and returns the most visited root move. The tree is
//! dropped before the call returns, on every path.

use rand::SeedableRng;

use crate::board::{Board, Stone};
use crate::config::MctsConfig;
use crate::error::{AiError, Result};
use crate::fixed::Fixed;
use crate::rng::Xoroshiro;
use crate::rules::{check_result, legal_moves, terminal_value};

use super::tree::MctsTree;

/// Monte-Carlo tree search player.
///
/// Owns its random generator; nothing else survives between calls.
pub struct MctsEngine {
    config: MctsConfig,
    rng: Xoroshiro,
    iterations_run: u32,
}

impl MctsEngine {
    pub fn new(config: MctsConfig) -> Self {
        let rng = Self::make_rng(&config);
        Self {
            config,
            rng,
            iterations_run: 0,
        }
    }

    fn make_rng(config: &MctsConfig) -> Xoroshiro {
        match config.seed {
            Some(seed) => Xoroshiro::seed_from_u64(seed),
            None => Xoroshiro::from_clock(),
        }
    }

    /// Reseed the generator.
    pub fn initialize(&mut self) {
        self.rng = Self::make_rng(&self.config);
    }

    #[inline]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Iterations completed by the last [`compute_move`](Self::compute_move).
    #[inline]
    pub fn iterations_run(&self) -> u32 {
        self.iterations_run
    }

    /// Pick a move for `mover`, or `None` when the board has no legal move
    /// or is already decided.
    pub fn compute_move(&mut self, board: &Board, mover: Stone) -> Result<Option<usize>> {
        self.iterations_run = 0;
        if !mover.is_player() {
            return Err(AiError::InvalidMover(mover));
        }
        if check_result(board).is_terminal() {
            return Ok(None);
        }

        let mut tree = MctsTree::new(mover)?;

        for iteration in 0..self.config.iterations {
            let mut scratch = *board;
            let mut id = tree.root();

            loop {
                let node = tree.get(id);

                let outcome = check_result(&scratch);
                if outcome.is_terminal() {
                    let value = terminal_value(outcome, node.mover());
                    tree.backpropagate(id, value);
                    break;
                }

                if node.visits == 0 {
                    let value = self.simulate(&scratch, node.player);
                    tree.backpropagate(id, value);
                    break;
                }

                if !node.is_expanded() {
                    tree.expand(id, &scratch)?;
                }

                let Some(child) = tree.select_child(id) else {
                    log::warn!("mcts: no child to select at iteration {iteration}, giving up");
                    return Ok(None);
                };

                let child_node = tree.get(child);
                if let Some(cell) = child_node.mv {
                    scratch.place_stone(cell, child_node.mover());
                }
                id = child;
            }
            self.iterations_run += 1;
        }

        let best = tree.best_action();
        log::debug!(
            "mcts: {} iterations, {} nodes, best {:?}",
            self.iterations_run,
            tree.len(),
            best
        );
        Ok(best.map(|(mv, _)| mv))
    }

    /// Random playout from `board` with `to_move` on turn.
    ///
    /// Scored for the player who moved into the leaf, the same side a
    /// terminal leaf is scored for, so both backpropagation paths credit a
    /// node's value to the player who chose it.
    fn simulate(&mut self, board: &Board, to_move: Stone) -> Fixed {
        self.rng.jump();

        let perspective = to_move.opponent();
        let mut scratch = *board;
        let mut current = to_move;

        loop {
            let moves = legal_moves(&scratch);
            if moves.is_empty() {
                return Fixed::HALF;
            }

            let cell = moves[self.rng.below(moves.len())];
            scratch.place_stone(cell, current);

            let outcome = check_result(&scratch);
            if outcome.is_terminal() {
                log::trace!("playout ended {outcome:?}");
                return terminal_value(outcome, perspective);
            }
            current = current.opponent();
        }
    }
}
