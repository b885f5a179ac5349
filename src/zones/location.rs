//! Board addressing: cursor positions and the locations they resolve to.
//!
//! The cursor is a plain `(column, row)` grid position. Row 0 is the top
//! row (three stock slots then four foundations); rows 1.. address cards
//! in a tableau column. `Cursor::location` resolves that grid position to
//! a tagged `Location` once, so move validation never does range
//! arithmetic on raw coordinates.

use serde::{Deserialize, Serialize};

use crate::core::config::{FOUNDATION_COUNT, MAX_CURSOR_ROW, STOCK_WINDOW, TABLEAU_COLUMNS};

/// An addressable place on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Slot in the visible stock window (0 = leftmost exposed card).
    Stock(usize),
    /// Foundation pile.
    Foundation(usize),
    /// Card at `depth` (0 = bottom) in a tableau column.
    Tableau { column: usize, depth: usize },
}

impl Location {
    #[must_use]
    pub const fn is_tableau(&self) -> bool {
        matches!(self, Location::Tableau { .. })
    }

    /// Cursor position that addresses this location.
    #[must_use]
    pub const fn to_cursor(self) -> Cursor {
        match self {
            Location::Stock(slot) => Cursor::new(slot, 0),
            Location::Foundation(index) => Cursor::new(index + STOCK_WINDOW, 0),
            Location::Tableau { column, depth } => Cursor::new(column, depth + 1),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Stock(slot) => write!(f, "Stock({})", slot),
            Location::Foundation(index) => write!(f, "Foundation({})", index),
            Location::Tableau { column, depth } => write!(f, "Tableau({}, {})", column, depth),
        }
    }
}

/// Cursor movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Highlight position on the board grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    /// 0..=6
    pub column: usize,
    /// 0..=21
    pub row: usize,
}

impl Default for Cursor {
    /// First card of the first tableau column.
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl Cursor {
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Resolve the grid position to a board location.
    #[must_use]
    pub const fn location(self) -> Location {
        if self.row > 0 {
            Location::Tableau {
                column: self.column,
                depth: self.row - 1,
            }
        } else if self.column < STOCK_WINDOW {
            Location::Stock(self.column)
        } else {
            Location::Foundation(self.column - STOCK_WINDOW)
        }
    }

    /// Whether the cursor sits on one of the stock slots.
    #[must_use]
    pub const fn in_stock_region(self) -> bool {
        self.row == 0 && self.column < STOCK_WINDOW
    }

    /// Move one step, staying put at the board edge.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let Cursor { column, row } = self;
        match direction {
            Direction::Up if row > 0 => Cursor::new(column, row - 1),
            Direction::Down if row < MAX_CURSOR_ROW => Cursor::new(column, row + 1),
            Direction::Left if column > 0 => Cursor::new(column - 1, row),
            Direction::Right if column + 1 < TABLEAU_COLUMNS => Cursor::new(column + 1, row),
            _ => self,
        }
    }
}

// The top row is exactly wide enough for the stock window and the foundations.
const _: () = assert!(STOCK_WINDOW + FOUNDATION_COUNT == TABLEAU_COLUMNS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_row_resolution() {
        assert_eq!(Cursor::new(0, 0).location(), Location::Stock(0));
        assert_eq!(Cursor::new(2, 0).location(), Location::Stock(2));
        assert_eq!(Cursor::new(3, 0).location(), Location::Foundation(0));
        assert_eq!(Cursor::new(6, 0).location(), Location::Foundation(3));
    }

    #[test]
    fn test_tableau_resolution() {
        assert_eq!(
            Cursor::new(4, 1).location(),
            Location::Tableau { column: 4, depth: 0 }
        );
        assert_eq!(
            Cursor::new(0, 21).location(),
            Location::Tableau { column: 0, depth: 20 }
        );
    }

    #[test]
    fn test_location_to_cursor() {
        for column in 0..TABLEAU_COLUMNS {
            for row in 0..=MAX_CURSOR_ROW {
                let cursor = Cursor::new(column, row);
                assert_eq!(cursor.location().to_cursor(), cursor);
            }
        }
    }

    #[test]
    fn test_step_clamps_at_edges() {
        let origin = Cursor::new(0, 0);
        assert_eq!(origin.step(Direction::Up), origin);
        assert_eq!(origin.step(Direction::Left), origin);

        let corner = Cursor::new(6, MAX_CURSOR_ROW);
        assert_eq!(corner.step(Direction::Down), corner);
        assert_eq!(corner.step(Direction::Right), corner);

        assert_eq!(Cursor::new(3, 4).step(Direction::Up), Cursor::new(3, 3));
        assert_eq!(Cursor::new(3, 4).step(Direction::Right), Cursor::new(4, 4));
    }

    #[test]
    fn test_stock_region() {
        assert!(Cursor::new(1, 0).in_stock_region());
        assert!(!Cursor::new(3, 0).in_stock_region());
        assert!(!Cursor::new(1, 1).in_stock_region());
        assert_eq!(Cursor::default(), Cursor::new(0, 1));
    }
}
