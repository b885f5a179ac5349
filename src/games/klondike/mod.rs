//! Klondike solitaire controller.
//!
//! Ties the rules together for a shell that feeds one input at a time:
//! - Deal a new game per difficulty
//! - Cursor movement and stock draws
//! - Pick/place confirm with undo snapshots
//! - Win detection with the final move count

mod game;

pub use game::{Klondike, KlondikeBuilder};
