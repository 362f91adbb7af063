//! Game rules for K-in-a-row
//!
//! - Win detection over rows, columns and both diagonal families
//! - Terminal scoring as a fixed-point value
//! - Legal move enumeration

pub mod win;

// Re-exports for convenient access
pub use win::{check_result, legal_moves, segments, terminal_value, GameResult};
