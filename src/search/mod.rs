//! Search module for the negamax player
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition cache for memoizing search results
//! - Board and hash pairing with undo-on-drop moves
//! - Negamax with alpha-beta, PVS and iterative deepening

pub mod negamax;
pub mod position;
pub mod tt;
pub mod zobrist;

pub use negamax::{NegamaxEngine, SearchResult};
pub use position::{Played, Position};
pub use tt::{CacheEntry, CacheStats, TranspositionCache};
pub use zobrist::ZobristTable;
