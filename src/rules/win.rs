//! Win detection.

use crate::core::state::GameState;

/// All four foundations are non-empty and topped by a King.
#[must_use]
pub fn is_won(state: &GameState) -> bool {
    state
        .foundations
        .iter()
        .all(|pile| pile.back().map_or(false, |top| top.is_king()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};
    use crate::core::{Difficulty, GameRng};
    use im::Vector;

    fn full_foundation(suit: Suit) -> Vector<Card> {
        (1..=13).map(|rank| Card::new(rank, suit)).collect()
    }

    #[test]
    fn test_all_kings_wins() {
        let mut state = GameState::empty(Difficulty::Easy, GameRng::new(1));
        for (pile, suit) in state.foundations.iter_mut().zip(Suit::ALL) {
            *pile = full_foundation(suit);
        }

        assert!(is_won(&state));
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_missing_king_does_not_win() {
        let mut state = GameState::empty(Difficulty::Easy, GameRng::new(1));
        for (pile, suit) in state.foundations.iter_mut().zip(Suit::ALL) {
            *pile = full_foundation(suit);
        }
        state.foundations[2].pop_back();

        assert!(!is_won(&state));
    }

    #[test]
    fn test_empty_foundation_does_not_win() {
        let mut state = GameState::empty(Difficulty::Easy, GameRng::new(1));
        for (pile, suit) in state.foundations.iter_mut().zip(Suit::ALL).take(3) {
            *pile = full_foundation(suit);
        }

        assert!(!is_won(&state));
    }

    #[test]
    fn test_fresh_deal_is_not_won() {
        assert!(!is_won(&GameState::new_game(Difficulty::Hard, 5)));
    }
}
