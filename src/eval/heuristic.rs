//! Leaf evaluation for the negamax search
//!
//! Terminal positions score `±LineScore::WIN` or `DRAW`, derived from the
//! fixed-point terminal value. Other positions count open windows: a
//! `GOAL`-long segment holding stones of one side only.

use crate::board::{Board, Stone};
use crate::fixed::Fixed;
use crate::rules::{check_result, segments, terminal_value, GameResult};

use super::patterns::LineScore;

/// Evaluate the board from the perspective of `mover`.
///
/// Returns a score where:
/// - `LineScore::WIN` means `mover` has won
/// - `LineScore::LOSS` means the opponent has won
/// - anything in between is a heuristic, always well inside those bounds
#[must_use]
pub fn static_score(board: &Board, mover: Stone) -> i32 {
    let result = check_result(board);
    if result.is_terminal() {
        return terminal_score(result, mover);
    }
    window_score(board, mover)
}

/// Terminal value rescaled from `[0, 1]` fixed-point to `[LOSS, WIN]`.
#[must_use]
pub fn terminal_score(result: GameResult, mover: Stone) -> i32 {
    let half = Fixed::HALF.raw() as i64;
    let value = terminal_value(result, mover).raw() as i64;
    ((value - half) * i64::from(LineScore::WIN) / half) as i32
}

fn window_score(board: &Board, mover: Stone) -> i32 {
    let opponent = mover.opponent();
    let mut score = 0;
    for cells in segments() {
        let mut mine = 0usize;
        let mut theirs = 0usize;
        for &idx in &cells {
            let stone = board.get(idx);
            if stone == mover {
                mine += 1;
            } else if stone == opponent {
                theirs += 1;
            }
        }
        // Full windows only occur inside overlong runs and are dead.
        if theirs == 0 {
            score += LineScore::WINDOW.get(mine).copied().unwrap_or(0);
        } else if mine == 0 {
            score -= LineScore::WINDOW.get(theirs).copied().unwrap_or(0);
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(terminal_score(GameResult::Won(Stone::X), Stone::X), LineScore::WIN);
        assert_eq!(terminal_score(GameResult::Won(Stone::X), Stone::O), LineScore::LOSS);
        assert_eq!(terminal_score(GameResult::Draw, Stone::O), LineScore::DRAW);
    }

    #[test]
    fn test_won_board() {
        let b = board("XXX OO          ");
        assert_eq!(static_score(&b, Stone::X), LineScore::WIN);
        assert_eq!(static_score(&b, Stone::O), LineScore::LOSS);
    }

    #[test]
    fn test_empty_board_is_balanced() {
        assert_eq!(static_score(&Board::new(), Stone::X), 0);
    }

    #[test]
    fn test_symmetric_for_negamax() {
        for s in ["X               ", "XO   X    O     ", "OX XO  X  O     "] {
            let b = board(s);
            assert_eq!(static_score(&b, Stone::X), -static_score(&b, Stone::O), "{s:?}");
        }
    }

    #[test]
    fn test_heuristic_stays_below_win() {
        let b = board("XX  XX    O   O ");
        let score = static_score(&b, Stone::X);
        assert!(score > 0 && score < LineScore::WIN);
    }
}
