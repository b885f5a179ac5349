//! Klondike rules.
//!
//! - `deal`: initial layout from a shuffled deck
//! - `moves`: move taxonomy, validation and execution
//! - `win`: terminal condition
//! - `engine`: `RulesEngine` trait the controller implements

pub mod deal;
pub mod engine;
pub mod moves;
pub mod win;

pub use deal::deal;
pub use engine::{ActionOutcome, GameResult, RulesEngine};
pub use moves::{classify, execute, legal_moves, MoveKind, Transfer};
pub use win::is_won;
