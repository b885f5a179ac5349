//! Card model and deck factory.
//!
//! - `Card`: rank/suit/face value type with colour and rank relations
//! - `deck`: the standard 52-card set and shuffling

pub mod card;
pub mod deck;

pub use card::{Card, Color, Suit, ACE, KING};
pub use deck::{build_standard_deck, shuffle, shuffled_deck, DECK_SIZE};
