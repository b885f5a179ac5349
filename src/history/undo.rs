//! Bounded undo history of pre-move snapshots.

use std::collections::VecDeque;

use crate::core::config::UNDO_DEPTH;
use crate::core::state::GameState;

/// Ring of the most recent pre-move snapshots.
///
/// Snapshots are full `GameState` values. Because piles are persistent
/// vectors, storing one costs O(1) and later mutation of the live state
/// never reaches it.
#[derive(Clone, Debug)]
pub struct UndoRing {
    snapshots: VecDeque<GameState>,
    capacity: usize,
}

impl Default for UndoRing {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoRing {
    /// Create a ring holding `UNDO_DEPTH` snapshots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(UNDO_DEPTH)
    }

    /// Create a ring with a custom bound.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Store a snapshot, evicting the oldest beyond capacity.
    pub fn push(&mut self, snapshot: GameState) {
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
    }

    /// Remove and return the most recent snapshot.
    pub fn pop_restore(&mut self) -> Option<GameState> {
        self.snapshots.pop_back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all snapshots (new game).
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
