//! Score constants for negamax evaluation

/// Integer scores used by the negamax engine.
pub struct LineScore;

impl LineScore {
    /// Won position
    pub const WIN: i32 = 10_000;
    /// Lost position
    pub const LOSS: i32 = -Self::WIN;
    /// Drawn position
    pub const DRAW: i32 = 0;

    /// Open window weights indexed by own stones in the window.
    /// A window holding `GOAL` stones is a finished line and never reaches here.
    pub const WINDOW: [i32; 3] = [0, 1, 10];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GOAL, TOTAL_CELLS};

    #[test]
    fn test_score_hierarchy() {
        assert_eq!(LineScore::LOSS, -LineScore::WIN);
        assert!(LineScore::WIN > LineScore::DRAW);
        assert_eq!(LineScore::WINDOW.len(), GOAL);
    }

    #[test]
    fn test_heuristic_cannot_reach_win() {
        // Every window counted at full weight, far below a win.
        let max_windows = (4 * TOTAL_CELLS) as i32;
        assert!(max_windows * LineScore::WINDOW[GOAL - 1] < LineScore::WIN);
    }
}
