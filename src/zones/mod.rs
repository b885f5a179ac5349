//! Board zones and addressing.
//!
//! - `location`: cursor grid and the tagged `Location` it resolves to
//! - `stock`: stock pile with its visible window
//!
//! Tableau columns and foundations are plain `im::Vector<Card>` piles
//! held directly by `GameState`.

pub mod location;
pub mod stock;

pub use location::{Cursor, Direction, Location};
pub use stock::{AdvanceOutcome, Stock};
