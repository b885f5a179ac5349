//! Core engine types: state, actions, RNG, configuration.
//!
//! Everything the rules operate on lives here; the rules themselves are in
//! `crate::rules`.

pub mod action;
pub mod config;
pub mod rng;
pub mod state;

pub use action::Action;
pub use config::{
    Difficulty, GameConfig, FOUNDATION_COUNT, MAX_CURSOR_ROW, STOCK_WINDOW, TABLEAU_COLUMNS, UNDO_DEPTH,
};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Pile, StateViolation};
