//! Move validation and execution.
//!
//! A move takes the selected source location and the cursor location and
//! either performs exactly one transfer or leaves the piles untouched.
//!
//! ## Taxonomy (checked in this order)
//!
//! 1. **King to empty column**: any King (stock, foundation top, or the
//!    bottom of a tableau run) onto an empty column.
//! 2. **Tableau to tableau**: a run `[depth..]` onto a non-empty column,
//!    opposite colour and one rank below the destination top.
//! 3. **Stock to tableau**: one exposed stock card, same rule.
//! 4. **Foundation to tableau**: one foundation top, same rule.
//! 5. **To foundation**: one card from the stock or a column top, Ace on
//!    empty, otherwise same suit and one rank above.
//!
//! Everything else is rejected.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::{FOUNDATION_COUNT, STOCK_WINDOW, TABLEAU_COLUMNS};
use crate::core::state::GameState;
use crate::zones::Location;

/// Which taxonomy clause a transfer matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    KingToEmptyColumn,
    TableauToTableau,
    StockToTableau,
    FoundationToTableau,
    ToFoundation,
}

/// A legal transfer between two locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    pub kind: MoveKind,
    pub from: Location,
    pub to: Location,
    /// Number of cards moved (more than one only for tableau runs).
    pub cards: usize,
}

/// Bottom card of the unit that would move from `from`, if it can be picked up.
fn moving_card(state: &GameState, from: Location) -> Option<Card> {
    if let Location::Stock(slot) = from {
        // Hard mode only plays the topmost exposed card.
        if state.difficulty.top_stock_only() && slot + 1 != state.visible_stock_count() {
            return None;
        }
    }
    let card = state.card_at(from);
    (!card.is_none() && card.face_up).then_some(card)
}

/// Number of cards that move together from `from`.
fn unit_len(state: &GameState, from: Location) -> usize {
    match from {
        Location::Tableau { column, depth } => state.tableau[column].len() - depth,
        Location::Stock(_) | Location::Foundation(_) => 1,
    }
}

/// Decide whether moving `from` onto `to` is legal, without touching state.
#[must_use]
pub fn classify(state: &GameState, from: Location, to: Location) -> Option<Transfer> {
    if from == to {
        return None;
    }
    let source = moving_card(state, from)?;

    let kind = match to {
        Location::Tableau { column, depth } => {
            let dest = state.tableau.get(column)?;
            if matches!(from, Location::Tableau { column: c, .. } if c == column) {
                return None;
            }
            match dest.back() {
                None if source.is_king() => MoveKind::KingToEmptyColumn,
                None => return None,
                Some(top) => {
                    let addressed = dest.get(depth)?;
                    if !addressed.face_up || !source.stacks_on(top) {
                        return None;
                    }
                    match from {
                        Location::Tableau { .. } => MoveKind::TableauToTableau,
                        Location::Stock(_) => MoveKind::StockToTableau,
                        Location::Foundation(_) => MoveKind::FoundationToTableau,
                    }
                }
            }
        }
        Location::Foundation(index) => {
            let pile = state.foundations.get(index)?;
            let single = match from {
                Location::Tableau { column, depth } => depth + 1 == state.tableau[column].len(),
                Location::Stock(_) => true,
                Location::Foundation(_) => false,
            };
            if !single || !source.builds_on_foundation(pile.back()) {
                return None;
            }
            MoveKind::ToFoundation
        }
        Location::Stock(_) => return None,
    };

    Some(Transfer {
        kind,
        from,
        to,
        cards: unit_len(state, from),
    })
}

/// Lift the moving unit off its source pile.
fn remove_unit(state: &mut GameState, from: Location, onto_tableau: bool) -> Option<Vector<Card>> {
    match from {
        Location::Stock(slot) => state.stock.take(slot, onto_tableau).map(Vector::unit),
        Location::Foundation(index) => state.foundations[index].pop_back().map(Vector::unit),
        Location::Tableau { column, depth } => {
            let run = state.tableau[column].split_off(depth);
            state.reveal_top(column);
            Some(run)
        }
    }
}

/// Perform the move if legal.
///
/// Returns the transfer that happened, or `None` with the state untouched.
pub fn execute(state: &mut GameState, from: Location, to: Location) -> Option<Transfer> {
    let Some(transfer) = classify(state, from, to) else {
        trace!("rejected move {} -> {}", from, to);
        return None;
    };

    let moved = remove_unit(state, from, to.is_tableau())?;
    match to {
        Location::Tableau { column, .. } => state.tableau[column].append(moved),
        Location::Foundation(index) => state.foundations[index].append(moved),
        Location::Stock(_) => unreachable!("classify never targets the stock"),
    }

    debug!(
        "{:?}: {} card(s) {} -> {}",
        transfer.kind, transfer.cards, transfer.from, transfer.to
    );
    Some(transfer)
}

/// Every location a card can currently be picked up from.
fn sources(state: &GameState) -> impl Iterator<Item = Location> + '_ {
    let stock = (0..STOCK_WINDOW).map(Location::Stock);
    let foundations = (0..FOUNDATION_COUNT).map(Location::Foundation);
    let tableau = (0..TABLEAU_COLUMNS).flat_map(move |column| {
        (0..state.tableau[column].len()).map(move |depth| Location::Tableau { column, depth })
    });
    stock
        .chain(foundations)
        .chain(tableau)
        .filter(move |&location| state.can_select(location))
}

/// Every place a card can be dropped: each column top (or empty slot) and
/// each foundation.
fn destinations(state: &GameState) -> impl Iterator<Item = Location> + '_ {
    let tableau = (0..TABLEAU_COLUMNS).map(move |column| Location::Tableau {
        column,
        depth: state.tableau[column].len().saturating_sub(1),
    });
    tableau.chain((0..FOUNDATION_COUNT).map(Location::Foundation))
}

/// Enumerate all legal transfers in the current state.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Transfer> {
    let targets: Vec<Location> = destinations(state).collect();
    sources(state)
        .flat_map(|from| targets.iter().filter_map(move |&to| classify(state, from, to)))
        .collect()
}
