//! Undo history.

pub mod undo;

pub use undo::UndoRing;
