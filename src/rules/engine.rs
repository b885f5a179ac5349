//! Rules engine trait for the game controller.
//!
//! The controller implements `RulesEngine` to define:
//! - How each player action modifies state
//! - When the game is over
//!
//! Shells drive the game only through `apply_action`, one input at a time.

use serde::{Deserialize, Serialize};

use super::moves::{legal_moves, Transfer};
use crate::core::action::Action;
use crate::core::config::{Difficulty, GameConfig};
use crate::core::state::GameState;
use crate::zones::{AdvanceOutcome, Cursor, Location};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Moves taken to win.
    pub move_count: u32,
    pub difficulty: Difficulty,
}

/// What applying one action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Nothing changed (no-op input, or the game is already over).
    Ignored,
    CursorMoved(Cursor),
    StockAdvanced(AdvanceOutcome),
    /// A card was picked up.
    Selected(Location),
    /// A transfer happened.
    Moved(Transfer),
    /// The place action was illegal; only the selection was cleared.
    Rejected,
    /// The most recent snapshot was restored.
    Undone,
    /// The last move won the game.
    Won(GameResult),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: must leave a valid state or a no-op, never fail
/// - `is_terminal`: return None while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Apply one player action to the game state.
    fn apply_action(&mut self, state: &mut GameState, action: Action) -> ActionOutcome;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.is_won().then_some(GameResult {
            move_count: state.move_count,
            difficulty: state.difficulty,
        })
    }

    /// Enumerate every legal transfer (for hints and automated play).
    fn legal_moves(&self, state: &GameState) -> Vec<Transfer> {
        legal_moves(state)
    }
}
