//! Evaluation module for negamax leaf positions
//!
//! The evaluation considers:
//! - Terminal results, scaled to the integer win score
//! - Open line windows (segments still winnable by one side)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{static_score, terminal_score};
pub use patterns::LineScore;
