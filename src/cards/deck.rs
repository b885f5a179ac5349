//! Deck factory: the canonical 52-card set and shuffled orderings.

use super::card::{Card, Suit, ACE, KING};
use crate::core::rng::GameRng;

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build the 52 canonical cards, suit-major (Spades A..K first), all face-up.
#[must_use]
pub fn build_standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (ACE..=KING).map(move |rank| Card::new(rank, suit)))
        .collect()
}

/// Return a uniformly random permutation of `cards`.
#[must_use]
pub fn shuffle(mut cards: Vec<Card>, rng: &mut GameRng) -> Vec<Card> {
    rng.shuffle(&mut cards);
    cards
}

/// A freshly shuffled standard deck.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    shuffle(build_standard_deck(), rng)
}
