//! Player actions.
//!
//! One discrete input event from the shell maps to exactly one `Action`.
//! The engine fully applies an action before the next one is accepted.

use serde::{Deserialize, Serialize};

use crate::zones::Direction;

/// A single player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the highlight one step.
    MoveCursor(Direction),
    /// Draw from the stock into the visible window.
    AdvanceStock,
    /// Pick up the card under the cursor, or place the current selection.
    Confirm,
    /// Restore the most recent pre-move snapshot.
    Undo,
}

impl Action {
    /// Check if this action can change the piles.
    ///
    /// Cursor movement never touches cards.
    #[must_use]
    pub fn touches_cards(&self) -> bool {
        !matches!(self, Action::MoveCursor(_))
    }
}
