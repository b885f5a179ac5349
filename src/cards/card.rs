//! Playing card value type.
//!
//! Cards are small `Copy` values. A rank of 0 is reserved for the
//! `Card::NONE` sentinel returned by location queries; it never sits in a
//! real pile.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Rank of an Ace.
pub const ACE: u8 = 1;

/// Rank of a King.
pub const KING: u8 = 13;

/// Card suit. Discriminants follow the classic order; even suits are black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Clubs = 2,
    Diamonds = 3,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    /// Get the raw suit index (0-3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Colour from suit parity.
    #[must_use]
    pub const fn color(self) -> Color {
        if self.index() % 2 == 0 {
            Color::Black
        } else {
            Color::Red
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
        }
    }
}

/// Card colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// 1 (Ace) through 13 (King). 0 only for `Card::NONE`.
    pub rank: u8,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    /// "No card here" sentinel.
    pub const NONE: Card = Card {
        rank: 0,
        suit: Suit::Spades,
        face_up: false,
    };

    /// Create a face-up card.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Same card, turned face-down.
    #[must_use]
    pub const fn face_down(mut self) -> Self {
        self.face_up = false;
        self
    }

    /// Check if this is the sentinel rather than a real card.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.rank == 0
    }

    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.rank == KING
    }

    /// Colour from suit parity.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Short rank label: "A", "J", "Q", "K" or the number.
    #[must_use]
    pub fn display_rank(&self) -> Cow<'static, str> {
        match self.rank {
            ACE => Cow::Borrowed("A"),
            11 => Cow::Borrowed("J"),
            12 => Cow::Borrowed("Q"),
            KING => Cow::Borrowed("K"),
            n => Cow::Owned(n.to_string()),
        }
    }

    #[must_use]
    pub const fn is_opposite_color(&self, other: &Card) -> bool {
        self.suit.index() % 2 != other.suit.index() % 2
    }

    /// `self.rank == low.rank + 1`.
    #[must_use]
    pub const fn is_one_rank_above(&self, low: &Card) -> bool {
        self.rank == low.rank + 1
    }

    /// Whether `self` may be laid on `top` in the tableau: opposite colour,
    /// one rank lower.
    #[must_use]
    pub const fn stacks_on(&self, top: &Card) -> bool {
        self.is_opposite_color(top) && top.is_one_rank_above(self)
    }

    /// Whether `self` may be dropped on a foundation whose top is `top`
    /// (`None` for an empty foundation).
    #[must_use]
    pub fn builds_on_foundation(&self, top: Option<&Card>) -> bool {
        match top {
            None => self.is_ace(),
            Some(top) => top.suit == self.suit && self.is_one_rank_above(top),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "--")
        } else {
            write!(f, "{}{}", self.suit.symbol(), self.display_rank())
        }
    }
}
