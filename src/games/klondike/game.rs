//! Klondike game controller.

use log::{debug, info, trace};

use crate::core::{Action, Difficulty, GameConfig, GameRng, GameState};
use crate::history::UndoRing;
use crate::rules::{deal, execute, ActionOutcome, GameResult, RulesEngine};
use crate::zones::Direction;

/// Klondike controller: owns the configuration, the per-game RNG source and
/// the undo history. The live `GameState` stays with the caller.
#[derive(Clone, Debug)]
pub struct Klondike {
    config: GameConfig,
    rng: GameRng,
    history: UndoRing,
}

/// Builder for creating a Klondike game.
#[derive(Clone, Debug, Default)]
pub struct KlondikeBuilder {
    difficulty: Difficulty,
}

impl KlondikeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Build the controller and deal the first game.
    pub fn build(self, seed: u64) -> (Klondike, GameState) {
        let config = GameConfig::default()
            .with_difficulty(self.difficulty)
            .with_seed(seed);
        let mut game = Klondike::new(config);
        let state = game.new_game(self.difficulty);
        (game, state)
    }
}

impl Klondike {
    /// Create a controller. No game is dealt until `new_game`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            history: UndoRing::new(),
        }
    }

    /// Deal a fresh game, replacing any previous one.
    ///
    /// Each deal forks its own RNG, so a controller seed reproduces the same
    /// sequence of games.
    pub fn new_game(&mut self, difficulty: Difficulty) -> GameState {
        self.config.difficulty = difficulty;
        self.history.clear();
        deal(difficulty, self.rng.fork())
    }

    /// Get the undo history.
    pub fn history(&self) -> &UndoRing {
        &self.history
    }

    /// Move the highlight one step.
    pub fn move_cursor(&self, state: &mut GameState, direction: Direction) -> ActionOutcome {
        state.move_cursor(direction);
        trace!("cursor {:?} -> ({}, {})", direction, state.cursor.column, state.cursor.row);
        ActionOutcome::CursorMoved(state.cursor)
    }

    /// Draw from the stock.
    pub fn advance_stock(&self, state: &mut GameState) -> ActionOutcome {
        let outcome = state.advance_stock();
        debug!(
            "stock {:?}: shift {}, window {}",
            outcome,
            state.stock.shift(),
            state.stock.window()
        );
        ActionOutcome::StockAdvanced(outcome)
    }

    /// Pick up the card under the cursor, or place the current selection.
    pub fn select_or_confirm(&mut self, state: &mut GameState) -> ActionOutcome {
        if state.is_won() {
            return ActionOutcome::Ignored;
        }
        let target = state.cursor.location();

        let Some(source) = state.selection.take() else {
            if !state.can_select(target) {
                return ActionOutcome::Ignored;
            }
            state.selection = Some(target);
            trace!("selected {}", target);
            return ActionOutcome::Selected(target);
        };

        let snapshot = state.snapshot();
        let outcome = match execute(state, source, target) {
            Some(transfer) => {
                self.history.push(snapshot);
                state.move_count += 1;
                ActionOutcome::Moved(transfer)
            }
            None => ActionOutcome::Rejected,
        };

        if state.is_won() {
            state.move_count = state.move_count.saturating_sub(1);
            let result = GameResult {
                move_count: state.move_count,
                difficulty: state.difficulty,
            };
            info!("won {} game in {} moves", result.difficulty, result.move_count);
            return ActionOutcome::Won(result);
        }
        outcome
    }

    /// Restore the most recent pre-move snapshot.
    pub fn undo(&mut self, state: &mut GameState) -> ActionOutcome {
        match self.history.pop_restore() {
            Some(snapshot) => {
                *state = snapshot;
                debug!("undo to move {}, {} left", state.move_count, self.history.len());
                ActionOutcome::Undone
            }
            None => ActionOutcome::Ignored,
        }
    }
}

impl RulesEngine for Klondike {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn apply_action(&mut self, state: &mut GameState, action: Action) -> ActionOutcome {
        // A won game accepts no further input until the next deal.
        if state.is_won() {
            return ActionOutcome::Ignored;
        }

        let outcome = match action {
            Action::MoveCursor(direction) => self.move_cursor(state, direction),
            Action::AdvanceStock => self.advance_stock(state),
            Action::Confirm => self.select_or_confirm(state),
            Action::Undo => self.undo(state),
        };
        state.enforce_stock_cursor();

        if action.touches_cards() {
            debug_assert!(state.validate().is_ok(), "{:?}", state.validate());
        }
        outcome
    }
}
