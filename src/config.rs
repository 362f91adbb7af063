//! Engine and match configuration
//!
//! Every section deserializes from TOML with defaults for missing keys:
//!
//! ```
//! use xo::config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(
//!     r#"
//!     [mcts]
//!     iterations = 200
//!     seed = 7
//!
//!     [negamax]
//!     max_depth = 4
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.mcts.iterations, 200);
//! assert_eq!(config.negamax.min_depth, 2);
//! assert_eq!(config.r#match.games, 2);
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::board::TOTAL_CELLS;
use crate::error::{AiError, Result};

/// MCTS search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Select/expand/simulate/backpropagate rounds per move
    pub iterations: u32,
    /// Fixed generator seed; wall-clock seeded when absent
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            seed: None,
        }
    }
}

/// Negamax search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NegamaxConfig {
    /// First iterative-deepening depth
    pub min_depth: u8,
    /// Last iterative-deepening depth
    pub max_depth: u8,
    /// Plies added per iteration
    pub depth_step: u8,
    /// Maximum number of cached positions
    pub cache_capacity: usize,
    /// Fixed Zobrist key seed; OS-seeded when absent
    pub zobrist_seed: Option<u64>,
}

impl Default for NegamaxConfig {
    fn default() -> Self {
        Self {
            min_depth: 2,
            max_depth: 6,
            depth_step: 2,
            cache_capacity: 1_000_000,
            zobrist_seed: None,
        }
    }
}

impl NegamaxConfig {
    /// Depths searched, in order.
    pub fn depths(&self) -> impl Iterator<Item = u8> {
        (self.min_depth..=self.max_depth).step_by(usize::from(self.depth_step.max(1)))
    }
}

/// AI-vs-AI match settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Turn limit per game
    pub max_turns: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 2,
            max_turns: TOTAL_CELLS,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub mcts: MctsConfig,
    pub negamax: NegamaxConfig,
    pub r#match: MatchConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config.validated())
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| AiError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Clamp values into a searchable range.
    #[must_use]
    pub fn validated(mut self) -> Self {
        let n = &mut self.negamax;
        n.min_depth = n.min_depth.max(1);
        n.depth_step = n.depth_step.max(1);
        n.max_depth = n.max_depth.max(n.min_depth);
        n.cache_capacity = n.cache_capacity.max(1);
        self.mcts.iterations = self.mcts.iterations.max(1);
        self.r#match.max_turns = self.r#match.max_turns.min(TOTAL_CELLS);
        self
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.mcts.iterations = iterations.max(1);
        self
    }

    #[must_use]
    pub fn with_mcts_seed(mut self, seed: u64) -> Self {
        self.mcts.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.negamax.max_depth = max_depth;
        self.validated()
    }

    #[must_use]
    pub fn with_zobrist_seed(mut self, seed: u64) -> Self {
        self.negamax.zobrist_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.r#match.games = games;
        self
    }

    /// Seed both engines from one value.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_mcts_seed(seed).with_zobrist_seed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.mcts.iterations, 1000);
        assert_eq!(config.mcts.seed, None);
        assert_eq!(config.negamax.depths().collect::<Vec<_>>(), [2, 4, 6]);
        assert_eq!(config.negamax.cache_capacity, 1_000_000);
        assert_eq!(config.r#match.max_turns, TOTAL_CELLS);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = EngineConfig::from_toml_str(
            r#"
            [negamax]
            max_depth = 8
            depth_step = 1
            zobrist_seed = 3

            [match]
            games = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.negamax.depths().collect::<Vec<_>>(), [2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(config.negamax.zobrist_seed, Some(3));
        assert_eq!(config.r#match.games, 10);
        assert_eq!(config.mcts, MctsConfig::default());
    }

    #[test]
    fn test_validation_clamps() {
        let config = EngineConfig::from_toml_str(
            r#"
            [mcts]
            iterations = 0

            [negamax]
            min_depth = 0
            max_depth = 0
            depth_step = 0

            [match]
            max_turns = 99
            "#,
        )
        .unwrap();

        assert_eq!(config.mcts.iterations, 1);
        assert_eq!(config.negamax.min_depth, 1);
        assert_eq!(config.negamax.max_depth, 1);
        assert_eq!(config.negamax.depth_step, 1);
        assert_eq!(config.r#match.max_turns, TOTAL_CELLS);
    }

    #[test]
    fn test_parse_error() {
        let err = EngineConfig::from_toml_str("[mcts]\niterations = \"many\"").unwrap_err();
        assert!(matches!(err, AiError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/nonexistent/xo.toml").unwrap_err();
        assert!(matches!(err, AiError::ConfigIo { .. }));
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default().with_seed(5).with_iterations(0).with_max_depth(4);
        assert_eq!(config.mcts.seed, Some(5));
        assert_eq!(config.negamax.zobrist_seed, Some(5));
        assert_eq!(config.mcts.iterations, 1);
        assert_eq!(config.negamax.depths().collect::<Vec<_>>(), [2, 4]);
    }
}
