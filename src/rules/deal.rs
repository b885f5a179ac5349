//! Deal engine: shuffled deck into the triangular tableau plus stock.

use log::info;

use crate::cards::{shuffled_deck, Card};
use crate::core::config::{Difficulty, TABLEAU_COLUMNS};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::zones::Stock;

/// Cards dealt to the tableau (1 + 2 + ... + 7).
pub const TABLEAU_DEAL: usize = TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2;

/// Deal a new game.
///
/// Column `r` receives `r + 1` cards in deck order; only the last card of
/// each column is face-up. The rest of the deck becomes the stock with
/// nothing exposed yet.
#[must_use]
pub fn deal(difficulty: Difficulty, mut rng: GameRng) -> GameState {
    let mut cards = shuffled_deck(&mut rng).into_iter();
    let mut state = GameState::empty(difficulty, rng);

    for (column, pile) in state.tableau.iter_mut().enumerate() {
        for (dealt, card) in cards.by_ref().take(column + 1).enumerate() {
            let card = if dealt == column { card } else { card.face_down() };
            pile.push_back(card);
        }
    }

    state.stock = Stock::new(cards.map(|card| Card { face_up: true, ..card }));

    info!(
        "dealt {} game: {} tableau cards, {} in stock",
        difficulty,
        TABLEAU_DEAL,
        state.stock.len()
    );

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;
    use crate::zones::{Cursor, Location};

    #[test]
    fn test_column_sizes() {
        let state = deal(Difficulty::Easy, GameRng::new(42));

        for (column, pile) in state.tableau.iter().enumerate() {
            assert_eq!(pile.len(), column + 1);
        }
        assert_eq!(state.stock.len(), DECK_SIZE - TABLEAU_DEAL);
        assert_eq!(state.card_count(), DECK_SIZE);
    }

    #[test]
    fn test_only_tops_face_up() {
        let state = deal(Difficulty::Hard, GameRng::new(7));

        for pile in &state.tableau {
            let (top, rest) = (pile.back().unwrap(), pile.iter().take(pile.len() - 1));
            assert!(top.face_up);
            for card in rest {
                assert!(!card.face_up);
            }
        }
        assert!(state.stock.cards().iter().all(|c| c.face_up));
    }

    #[test]
    fn test_initial_counters() {
        let state = deal(Difficulty::Hard, GameRng::new(7));

        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.stock.shift(), 0);
        assert_eq!(state.stock.window(), 0);
        assert_eq!(state.move_count, 1);
        assert_eq!(state.selection, None);
        assert_eq!(state.cursor, Cursor::new(0, 1));
        assert!(state.foundations.iter().all(|f| f.is_empty()));
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = deal(Difficulty::Easy, GameRng::new(11));
        let b = deal(Difficulty::Easy, GameRng::new(11));
        let c = deal(Difficulty::Easy, GameRng::new(12));

        assert_eq!(a, b);
        assert_ne!(a.tableau, c.tableau);
    }

    #[test]
    fn test_first_column_is_selectable() {
        let state = deal(Difficulty::Easy, GameRng::new(3));
        assert!(state.can_select(Location::Tableau { column: 0, depth: 0 }));
        assert!(!state.can_select(Location::Tableau { column: 6, depth: 0 }));
    }
}
