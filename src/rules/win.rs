//! Win condition checking for K-in-a-row
//!
//! A player wins with exactly `GOAL` equal stones in a contiguous line.
//! Longer runs do not count: the cells just before and just after the
//! segment must not hold the same stone.

use std::ops::Range;

use crate::board::{Board, MoveList, Pos, Stone, BOARD_SIZE, GOAL};
use crate::fixed::Fixed;

/// Outcome of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Ongoing,
    Won(Stone),
    Draw,
}

impl GameResult {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameResult::Ongoing
    }

    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            GameResult::Won(stone) => Some(stone),
            _ => None,
        }
    }
}

/// A family of parallel lines: step direction plus the range of segment starts
/// that keep a `GOAL`-long segment on the board.
struct LineFamily {
    dr: i32,
    dc: i32,
    rows: Range<i32>,
    cols: Range<i32>,
}

const N: i32 = BOARD_SIZE as i32;
const K: i32 = GOAL as i32;
const SPAN: i32 = N - K + 1;

static LINES: [LineFamily; 4] = [
    // Vertical
    LineFamily { dr: 1, dc: 0, rows: 0..SPAN, cols: 0..N },
    // Horizontal
    LineFamily { dr: 0, dc: 1, rows: 0..N, cols: 0..SPAN },
    // Diagonal SE
    LineFamily { dr: 1, dc: 1, rows: 0..SPAN, cols: 0..SPAN },
    // Diagonal SW
    LineFamily { dr: 1, dc: -1, rows: 0..SPAN, cols: K - 1..N },
];

/// Stone at (row, col), `Empty` when off the board.
#[inline]
fn lookup(board: &Board, row: i32, col: i32) -> Stone {
    if Pos::is_valid(row, col) {
        board.get(Pos::new(row as u8, col as u8).to_index())
    } else {
        Stone::Empty
    }
}

/// Owner of the segment starting at (row, col), or `Empty`.
fn segment_winner(board: &Board, row: i32, col: i32, line: &LineFamily) -> Stone {
    let first = lookup(board, row, col);
    if first == Stone::Empty {
        return Stone::Empty;
    }
    for k in 1..K {
        if lookup(board, row + k * line.dr, col + k * line.dc) != first {
            return Stone::Empty;
        }
    }
    // Overlong runs are not wins
    if lookup(board, row - line.dr, col - line.dc) == first
        || lookup(board, row + K * line.dr, col + K * line.dc) == first
    {
        return Stone::Empty;
    }
    first
}

/// Scan every line segment for a win, then look for a draw.
pub fn check_result(board: &Board) -> GameResult {
    for line in &LINES {
        for row in line.rows.clone() {
            for col in line.cols.clone() {
                let stone = segment_winner(board, row, col, line);
                if stone != Stone::Empty {
                    return GameResult::Won(stone);
                }
            }
        }
    }
    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::Ongoing
    }
}

/// Every `GOAL`-long segment on the board as cell indices.
pub fn segments() -> impl Iterator<Item = [usize; GOAL]> {
    LINES.iter().flat_map(|line| {
        line.rows.clone().flat_map(move |row| {
            line.cols.clone().map(move |col| {
                let mut cells = [0usize; GOAL];
                for (k, cell) in cells.iter_mut().enumerate() {
                    let k = k as i32;
                    *cell = Pos::new((row + k * line.dr) as u8, (col + k * line.dc) as u8).to_index();
                }
                cells
            })
        })
    })
}

/// Score of a result from `perspective`: 1.0 win, 0.0 loss, 0.5 otherwise.
pub fn terminal_value(result: GameResult, perspective: Stone) -> Fixed {
    match result {
        GameResult::Won(winner) if winner == perspective => Fixed::ONE,
        GameResult::Won(winner) if winner == perspective.opponent() => Fixed::ZERO,
        _ => Fixed::HALF,
    }
}

/// Empty cells in ascending order. Empty list means no legal move.
#[inline]
pub fn legal_moves(board: &Board) -> MoveList {
    board.empty_cells()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_ongoing() {
        assert_eq!(check_result(&Board::new()), GameResult::Ongoing);
    }

    #[test]
    fn test_three_in_row_horizontal() {
        let b = board("OOO             ");
        assert_eq!(check_result(&b), GameResult::Won(Stone::O));
    }

    #[test]
    fn test_three_in_row_vertical() {
        let b = board(" X   X   X      ");
        assert_eq!(check_result(&b), GameResult::Won(Stone::X));
    }

    #[test]
    fn test_three_in_row_diagonal() {
        let b = board("     O    O    O");
        assert_eq!(check_result(&b), GameResult::Won(Stone::O));
    }

    #[test]
    fn test_three_in_row_anti_diagonal() {
        let b = board("   X  X  X      ");
        assert_eq!(check_result(&b), GameResult::Won(Stone::X));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let b = board("XXXX            ");
        assert_eq!(check_result(&b), GameResult::Ongoing);
    }

    #[test]
    fn test_two_in_row_not_win() {
        let b = board("OO  XX          ");
        assert_eq!(check_result(&b), GameResult::Ongoing);
    }

    #[test]
    fn test_full_board_draw() {
        let b = board("OOXXXXOOOOXXXXOO");
        assert_eq!(check_result(&b), GameResult::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let b = board("OOOXXXOOOXXXXOXO");
        assert!(matches!(check_result(&b), GameResult::Won(_)));
    }

    #[test]
    fn test_terminal_value() {
        let won = GameResult::Won(Stone::O);
        assert_eq!(terminal_value(won, Stone::O), Fixed::ONE);
        assert_eq!(terminal_value(won, Stone::X), Fixed::ZERO);
        assert_eq!(terminal_value(GameResult::Draw, Stone::X), Fixed::HALF);
    }

    #[test]
    fn test_segments_cover_every_line() {
        let all: Vec<_> = segments().collect();
        assert_eq!(all.len(), 24);
        assert!(all.contains(&[0, 1, 2]));
        assert!(all.contains(&[4, 8, 12]));
        assert!(all.contains(&[5, 10, 15]));
        assert!(all.contains(&[3, 6, 9]));
    }

    #[test]
    fn test_legal_moves() {
        let b = board("OX O XXO OXO  XO");
        assert_eq!(legal_moves(&b).as_slice(), &[2, 4, 8, 12, 13]);
    }

    /// Winners found by walking maximal runs of exactly GOAL stones.
    fn brute_force_winners(board: &Board) -> Vec<Stone> {
        let mut winners = Vec::new();
        for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
            for row in 0..N {
                for col in 0..N {
                    let stone = lookup(board, row, col);
                    if stone == Stone::Empty || lookup(board, row - dr, col - dc) == stone {
                        continue;
                    }
                    let mut len = 1;
                    while lookup(board, row + len * dr, col + len * dc) == stone {
                        len += 1;
                    }
                    if len == K {
                        winners.push(stone);
                    }
                }
            }
        }
        winners
    }

    #[test]
    fn test_matches_brute_force_scan() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..5_000 {
            let mut b = Board::new();
            for idx in 0..crate::board::TOTAL_CELLS {
                match rng.random_range(0..3) {
                    0 => b.place_stone(idx, Stone::O),
                    1 => b.place_stone(idx, Stone::X),
                    _ => {}
                }
            }
            let winners = brute_force_winners(&b);
            match check_result(&b) {
                GameResult::Won(stone) => assert!(winners.contains(&stone), "{b}"),
                GameResult::Draw => assert!(winners.is_empty() && b.is_full(), "{b}"),
                GameResult::Ongoing => assert!(winners.is_empty() && !b.is_full(), "{b}"),
            }
        }
    }
}
