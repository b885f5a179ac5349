//! # klondike-engine
//!
//! Rules and state engine for Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: One `GameState` value owned by the caller.
//!    No globals; every operation takes the state it works on.
//!
//! 2. **Never Fails**: Illegal input is swallowed. Every action yields a
//!    valid next state or a no-op.
//!
//! 3. **Cheap Snapshots**: Piles are `im` persistent vectors, so an undo
//!    snapshot is an O(1) clone that later moves cannot disturb.
//!
//! ## Modules
//!
//! - `cards`: Card model and deck factory
//! - `core`: State, actions, RNG, configuration
//! - `zones`: Cursor addressing and the stock window
//! - `rules`: Deal, move taxonomy, win detection, `RulesEngine`
//! - `history`: Bounded undo ring
//! - `games`: The Klondike controller
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{Action, Difficulty, Direction, KlondikeBuilder, RulesEngine};
//!
//! let (mut game, mut state) = KlondikeBuilder::new()
//!     .difficulty(Difficulty::Easy)
//!     .build(42);
//!
//! game.apply_action(&mut state, Action::AdvanceStock);
//! game.apply_action(&mut state, Action::MoveCursor(Direction::Up));
//! game.apply_action(&mut state, Action::Confirm);
//!
//! assert_eq!(state.visible_stock_count(), 1);
//! assert!(state.selection.is_some());
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod history;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{build_standard_deck, shuffle, Card, Color, Suit};

pub use crate::core::{
    Action, Difficulty, GameConfig, GameRng, GameRngState, GameState, StateViolation,
};

pub use crate::zones::{AdvanceOutcome, Cursor, Direction, Location, Stock};

pub use crate::rules::{
    classify, deal, execute, is_won, legal_moves, ActionOutcome, GameResult, MoveKind, RulesEngine,
    Transfer,
};

pub use crate::history::UndoRing;

pub use crate::games::klondike::{Klondike, KlondikeBuilder};
