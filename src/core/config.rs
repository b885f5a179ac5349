//! Game configuration and board constants.
//!
//! The only externally selectable rule configuration is the difficulty
//! preset. Everything else about the board is fixed by Klondike.

use serde::{Deserialize, Serialize};

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Maximum number of stock cards exposed at once.
pub const STOCK_WINDOW: usize = 3;

/// Highest cursor row (row 0 is the stock/foundation row).
pub const MAX_CURSOR_ROW: usize = 21;

/// Number of pre-move snapshots kept for undo.
pub const UNDO_DEPTH: usize = 3;

/// Difficulty preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Draw one card at a time; every exposed stock card is playable.
    #[default]
    Easy,
    /// Draw three cards at a time; only the topmost exposed card is playable.
    Hard,
}

impl Difficulty {
    /// Cards drawn per stock advance.
    #[must_use]
    pub const fn draw_count(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Hard => 3,
        }
    }

    /// Whether only the topmost exposed stock card may be addressed.
    #[must_use]
    pub const fn top_stock_only(self) -> bool {
        matches!(self, Difficulty::Hard)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Difficulty used for the next deal.
    pub difficulty: Difficulty,

    /// Seed for the master RNG. Each deal forks a fresh generator from it,
    /// so a given seed reproduces the same sequence of games.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_difficulty(Difficulty::Hard)
            .with_seed(123);

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_draw_count() {
        assert_eq!(Difficulty::Easy.draw_count(), 1);
        assert_eq!(Difficulty::Hard.draw_count(), 3);
        assert!(!Difficulty::Easy.top_stock_only());
        assert!(Difficulty::Hard.top_stock_only());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_difficulty(Difficulty::Hard);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
