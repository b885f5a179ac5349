//! Game state: the single mutable aggregate the engine works on.
//!
//! ## GameState
//!
//! Everything needed to continue a game:
//! - Difficulty, stock (with its visible window), tableau, foundations
//! - Cursor and current selection
//! - Move counter
//! - RNG used when the stock is recycled
//!
//! Piles use `im` persistent vectors, so `clone()` is O(1) and a clone is
//! a fully independent value. Undo snapshots rely on this.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::{Difficulty, FOUNDATION_COUNT, MAX_CURSOR_ROW, STOCK_WINDOW, TABLEAU_COLUMNS};
use super::rng::GameRng;
use crate::cards::{Card, KING};
use crate::zones::{AdvanceOutcome, Cursor, Direction, Location, Stock};

/// An ordered pile of cards, bottom first.
pub type Pile = Vector<Card>;

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Difficulty preset this game was dealt with.
    pub difficulty: Difficulty,

    /// Stock pile and visible window.
    pub stock: Stock,

    /// Seven tableau columns.
    pub tableau: [Pile; TABLEAU_COLUMNS],

    /// Four foundations, assigned to suits by drop order.
    pub foundations: [Pile; FOUNDATION_COUNT],

    /// Highlight position.
    pub cursor: Cursor,

    /// Location picked up by the first confirm, if any.
    pub selection: Option<Location>,

    /// Move number (starts at 1, +1 per successful transfer).
    pub move_count: u32,

    /// RNG for stock reshuffles.
    pub rng: GameRng,
}

impl GameState {
    /// Create a state with empty piles.
    ///
    /// Mostly useful for building fixtures; real games come from `new_game`.
    #[must_use]
    pub fn empty(difficulty: Difficulty, rng: GameRng) -> Self {
        Self {
            difficulty,
            stock: Stock::default(),
            tableau: Default::default(),
            foundations: Default::default(),
            cursor: Cursor::default(),
            selection: None,
            move_count: 1,
            rng,
        }
    }

    /// Deal a fresh game from a seed.
    #[must_use]
    pub fn new_game(difficulty: Difficulty, seed: u64) -> Self {
        crate::rules::deal::deal(difficulty, GameRng::new(seed))
    }

    // === Queries ===

    /// Card at a location, or `Card::NONE` if nothing is there.
    #[must_use]
    pub fn card_at(&self, location: Location) -> Card {
        let card = match location {
            Location::Stock(slot) => self.stock.exposed(slot),
            Location::Foundation(index) => self.foundations.get(index).and_then(|pile| pile.back()),
            Location::Tableau { column, depth } => {
                self.tableau.get(column).and_then(|pile| pile.get(depth))
            }
        };
        card.copied().unwrap_or(Card::NONE)
    }

    /// Number of exposed stock cards.
    #[must_use]
    pub fn visible_stock_count(&self) -> usize {
        self.stock.visible()
    }

    /// Whether a location holds a real, face-up card that can be picked up.
    #[must_use]
    pub fn can_select(&self, location: Location) -> bool {
        let card = self.card_at(location);
        !card.is_none() && card.face_up
    }

    /// Check the terminal condition.
    #[must_use]
    pub fn is_won(&self) -> bool {
        crate::rules::win::is_won(self)
    }

    /// Total cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.tableau.iter().map(Vector::len).sum::<usize>()
            + self.foundations.iter().map(Vector::len).sum::<usize>()
    }

    /// Copy of this state suitable for the undo ring (nothing selected).
    #[must_use]
    pub fn snapshot(&self) -> Self {
        let mut snapshot = self.clone();
        snapshot.selection = None;
        snapshot
    }

    // === Mutation ===

    /// Move the cursor one step, clamped to the board.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.step(direction);
        self.enforce_stock_cursor();
    }

    /// In Hard mode, pin a cursor on the stock row to the topmost exposed card.
    pub fn enforce_stock_cursor(&mut self) {
        if self.difficulty.top_stock_only() && self.cursor.in_stock_region() {
            self.cursor.column = self.visible_stock_count().saturating_sub(1);
        }
    }

    /// Draw from the stock. Never counts as a move.
    pub fn advance_stock(&mut self) -> AdvanceOutcome {
        let outcome = self.stock.advance(self.difficulty.draw_count(), &mut self.rng);
        if outcome == AdvanceOutcome::Recycled && self.cursor.in_stock_region() {
            self.cursor.row += 1;
        }
        self.enforce_stock_cursor();
        outcome
    }

    /// Turn the top card of a column face-up.
    pub fn reveal_top(&mut self, column: usize) {
        if let Some(top) = self.tableau.get_mut(column).and_then(|pile| pile.back_mut()) {
            top.face_up = true;
        }
    }

    // === Invariants ===

    /// Check the structural invariants.
    ///
    /// Does not require a full deck, so hand-built fixtures validate too.
    pub fn validate(&self) -> Result<(), StateViolation> {
        let mut seen = FxHashSet::default();
        let all_cards = self
            .stock
            .cards()
            .iter()
            .chain(self.tableau.iter().flatten())
            .chain(self.foundations.iter().flatten());
        for card in all_cards {
            if card.is_none() || card.rank > KING {
                return Err(StateViolation::InvalidCard(*card));
            }
            if !seen.insert((card.rank, card.suit)) {
                return Err(StateViolation::DuplicateCard(*card));
            }
        }

        if let Some(card) = self.stock.cards().iter().find(|c| !c.face_up) {
            return Err(StateViolation::FaceDownStockCard(*card));
        }

        for (index, pile) in self.foundations.iter().enumerate() {
            let ordered = pile.iter().enumerate().all(|(i, card)| {
                card.rank as usize == i + 1 && pile.front().map_or(false, |first| first.suit == card.suit)
            });
            if !ordered {
                return Err(StateViolation::FoundationOutOfOrder(index));
            }
        }

        if self.stock.window() > STOCK_WINDOW {
            return Err(StateViolation::StockWindowTooWide(self.stock.window()));
        }
        if self.stock.shift() + self.stock.visible() > self.stock.len() {
            return Err(StateViolation::StockWindow {
                shift: self.stock.shift(),
                visible: self.stock.visible(),
                len: self.stock.len(),
            });
        }

        if self.cursor.column >= TABLEAU_COLUMNS || self.cursor.row > MAX_CURSOR_ROW {
            return Err(StateViolation::CursorOutOfBounds(self.cursor));
        }

        Ok(())
    }
}

/// A broken structural invariant, reported by `GameState::validate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateViolation {
    /// Sentinel or out-of-range rank stored in a pile.
    InvalidCard(Card),
    /// The same rank and suit appears twice.
    DuplicateCard(Card),
    /// Stock cards are always face-up.
    FaceDownStockCard(Card),
    /// Foundation is not an Ace-up same-suit run.
    FoundationOutOfOrder(usize),
    /// More cards exposed than there are stock slots on the top row.
    StockWindowTooWide(usize),
    /// `shift + visible` exceeds the stock size.
    StockWindow { shift: usize, visible: usize, len: usize },
    CursorOutOfBounds(Cursor),
}

impl std::fmt::Display for StateViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateViolation::InvalidCard(card) => write!(f, "invalid card {:?} in a pile", card),
            StateViolation::DuplicateCard(card) => write!(f, "duplicate card {}", card),
            StateViolation::FaceDownStockCard(card) => write!(f, "face-down stock card {}", card),
            StateViolation::FoundationOutOfOrder(index) => {
                write!(f, "foundation {} is not an ascending same-suit run", index)
            }
            StateViolation::StockWindowTooWide(window) => {
                write!(f, "stock window of {} exceeds {} slots", window, STOCK_WINDOW)
            }
            StateViolation::StockWindow { shift, visible, len } => {
                write!(f, "stock window {}+{} exceeds {} cards", shift, visible, len)
            }
            StateViolation::CursorOutOfBounds(cursor) => {
                write!(f, "cursor ({}, {}) out of bounds", cursor.column, cursor.row)
            }
        }
    }
}

impl std::error::Error for StateViolation {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn fixture() -> GameState {
        GameState::empty(Difficulty::Easy, GameRng::new(1))
    }

    #[test]
    fn test_empty_state() {
        let state = fixture();

        assert_eq!(state.card_count(), 0);
        assert_eq!(state.move_count, 1);
        assert_eq!(state.cursor, Cursor::new(0, 1));
        assert!(state.selection.is_none());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_card_at_sentinel() {
        let state = fixture();

        assert_eq!(state.card_at(Location::Stock(0)), Card::NONE);
        assert_eq!(state.card_at(Location::Foundation(2)), Card::NONE);
        assert_eq!(state.card_at(Location::Tableau { column: 3, depth: 0 }), Card::NONE);
        assert_eq!(state.card_at(Location::Tableau { column: 9, depth: 0 }), Card::NONE);
        assert_eq!(state.card_at(Location::Foundation(7)), Card::NONE);
    }

    #[test]
    fn test_card_at_piles() {
        let mut state = fixture();
        state.tableau[2] = im::vector![Card::new(4, Suit::Clubs).face_down(), Card::new(9, Suit::Hearts)];
        state.foundations[1] = im::vector![Card::new(1, Suit::Spades), Card::new(2, Suit::Spades)];
        state.stock = Stock::with_window(vec![Card::new(5, Suit::Diamonds), Card::new(6, Suit::Diamonds)], 0, 1);

        assert_eq!(state.card_at(Location::Tableau { column: 2, depth: 1 }), Card::new(9, Suit::Hearts));
        assert_eq!(state.card_at(Location::Foundation(1)), Card::new(2, Suit::Spades));
        assert_eq!(state.card_at(Location::Stock(0)), Card::new(5, Suit::Diamonds));
        assert_eq!(state.card_at(Location::Stock(1)), Card::NONE);

        assert!(state.can_select(Location::Tableau { column: 2, depth: 1 }));
        assert!(!state.can_select(Location::Tableau { column: 2, depth: 0 }));
        assert!(!state.can_select(Location::Stock(1)));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = fixture();
        state.tableau[0] = im::vector![Card::new(13, Suit::Hearts)];
        state.selection = Some(Location::Tableau { column: 0, depth: 0 });

        let snapshot = state.snapshot();
        state.tableau[0].pop_back();
        state.move_count += 1;

        assert_eq!(snapshot.tableau[0].len(), 1);
        assert_eq!(snapshot.move_count, 1);
        assert!(snapshot.selection.is_none());
    }

    #[test]
    fn test_hard_cursor_pinned_to_top_stock_card() {
        let mut state = GameState::empty(Difficulty::Hard, GameRng::new(1));
        state.stock = Stock::with_window((1..=5).map(|r| Card::new(r, Suit::Clubs)), 0, 3);
        state.cursor = Cursor::new(1, 1);

        state.move_cursor(Direction::Up);
        assert_eq!(state.cursor, Cursor::new(2, 0));

        state.move_cursor(Direction::Left);
        assert_eq!(state.cursor, Cursor::new(2, 0));

        state.move_cursor(Direction::Right);
        assert_eq!(state.cursor, Cursor::new(3, 0));
    }

    #[test]
    fn test_hard_cursor_with_empty_window() {
        let mut state = GameState::empty(Difficulty::Hard, GameRng::new(1));
        state.cursor = Cursor::new(2, 1);

        state.move_cursor(Direction::Up);
        assert_eq!(state.cursor, Cursor::new(0, 0));
    }

    #[test]
    fn test_recycle_moves_cursor_off_stock() {
        let mut state = fixture();
        state.stock = Stock::with_window((1..=3).map(|r| Card::new(r, Suit::Clubs)), 0, 3);
        state.cursor = Cursor::new(1, 0);

        assert_eq!(state.advance_stock(), AdvanceOutcome::Recycled);
        assert_eq!(state.cursor, Cursor::new(1, 1));
        assert_eq!(state.visible_stock_count(), 0);
    }

    #[test]
    fn test_validate_duplicate() {
        let mut state = fixture();
        state.tableau[0] = im::vector![Card::new(7, Suit::Clubs)];
        state.tableau[1] = im::vector![Card::new(7, Suit::Clubs).face_down()];

        assert_eq!(
            state.validate(),
            Err(StateViolation::DuplicateCard(Card::new(7, Suit::Clubs).face_down()))
        );
    }

    #[test]
    fn test_validate_foundation_order() {
        let mut state = fixture();
        state.foundations[3] = im::vector![Card::new(1, Suit::Hearts), Card::new(2, Suit::Diamonds)];

        assert_eq!(state.validate(), Err(StateViolation::FoundationOutOfOrder(3)));

        state.foundations[3] = im::vector![Card::new(2, Suit::Hearts)];
        assert_eq!(state.validate(), Err(StateViolation::FoundationOutOfOrder(3)));
    }

    #[test]
    fn test_validate_stock_window_width() {
        let mut state = fixture();
        state.stock = Stock::with_window((1..=8).map(|r| Card::new(r, Suit::Hearts)), 0, 3);
        assert!(state.validate().is_ok());

        // Only reachable through deserialization, which bypasses the constructors
        let mut value = serde_json::to_value(&state.stock).unwrap();
        value["window"] = serde_json::json!(5);
        state.stock = serde_json::from_value(value).unwrap();

        assert_eq!(state.validate(), Err(StateViolation::StockWindowTooWide(5)));
    }

    #[test]
    fn test_validate_sentinel() {
        let mut state = fixture();
        state.tableau[4] = im::vector![Card::NONE];

        assert_eq!(state.validate(), Err(StateViolation::InvalidCard(Card::NONE)));
    }

    #[test]
    fn test_state_serde() {
        let mut state = fixture();
        state.tableau[0] = im::vector![Card::new(12, Suit::Diamonds)];
        state.selection = Some(Location::Stock(1));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
