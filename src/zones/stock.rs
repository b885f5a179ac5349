//! Stock pile with its visible window.
//!
//! The stock never holds face-down cards. Two counters describe what the
//! player sees:
//! - `shift`: cards advanced past
//! - `window`: how many cards are exposed after the shift (0-3)
//!
//! The exposed cards are `cards[shift .. shift + visible]` where
//! `visible = min(window, len)`. Invariant: `shift + visible <= len`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::STOCK_WINDOW;
use crate::core::rng::GameRng;

/// What a stock advance did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvanceOutcome {
    /// More cards were exposed.
    Drawn,
    /// The stock was exhausted; the window was reset and the pile reshuffled.
    Recycled,
}

/// Stock pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    cards: Vector<Card>,
    shift: usize,
    window: usize,
}

impl Stock {
    /// Create a stock with nothing exposed.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            shift: 0,
            window: 0,
        }
    }

    /// Build a stock with explicit counters.
    ///
    /// `window` is capped at `STOCK_WINDOW` and `shift` is clamped so the
    /// invariant holds.
    #[must_use]
    pub fn with_window(cards: impl IntoIterator<Item = Card>, shift: usize, window: usize) -> Self {
        let mut stock = Self {
            cards: cards.into_iter().collect(),
            shift,
            window: window.min(STOCK_WINDOW),
        };
        stock.clamp_shift();
        stock
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn shift(&self) -> usize {
        self.shift
    }

    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    /// All stock cards in order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Number of exposed cards: `min(window, len)`.
    #[must_use]
    pub fn visible(&self) -> usize {
        self.window.min(self.cards.len())
    }

    /// The exposed cards, leftmost first.
    #[must_use]
    pub fn visible_cards(&self) -> SmallVec<[Card; STOCK_WINDOW]> {
        self.cards
            .iter()
            .skip(self.shift)
            .take(self.visible())
            .copied()
            .collect()
    }

    /// Card in an exposed slot.
    #[must_use]
    pub fn exposed(&self, slot: usize) -> Option<&Card> {
        if slot < self.visible() {
            self.cards.get(self.shift + slot)
        } else {
            None
        }
    }

    /// True when no further card can be exposed without recycling.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.shift + self.visible() >= self.cards.len()
    }

    /// Draw `step` cards into the window, or recycle an exhausted stock.
    pub fn advance(&mut self, step: usize, rng: &mut GameRng) -> AdvanceOutcome {
        if self.is_exhausted() {
            self.shift = 0;
            self.window = 0;
            let mut cards: Vec<Card> = self.cards.iter().copied().collect();
            rng.shuffle(&mut cards);
            self.cards = cards.into_iter().collect();
            return AdvanceOutcome::Recycled;
        }

        // A take at shift 0 can leave a partial window; refill it no wider
        // than the slots on the top row.
        if self.window < STOCK_WINDOW {
            self.window = (self.window + step).min(STOCK_WINDOW);
        } else {
            self.shift += step;
        }
        self.clamp_shift();
        AdvanceOutcome::Drawn
    }

    /// Remove the card in an exposed slot.
    ///
    /// The window closes the gap by pulling back the shift. When the shift is
    /// already 0, `shrink_window` decides whether the window also shrinks.
    pub fn take(&mut self, slot: usize, shrink_window: bool) -> Option<Card> {
        if slot >= self.visible() {
            return None;
        }
        let card = self.cards.remove(self.shift + slot);
        if self.shift > 0 {
            self.shift -= 1;
        } else if shrink_window && self.window > 0 {
            self.window -= 1;
        }
        Some(card)
    }

    fn clamp_shift(&mut self) {
        let visible = self.visible();
        if self.shift + visible >= self.cards.len() {
            self.shift = self.cards.len() - visible;
        }
    }
}
