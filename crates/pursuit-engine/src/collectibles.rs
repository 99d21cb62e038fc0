//! The shared pellet set.
//!
//! Collection must be exactly-once per cell: the player task removes the
//! cell from the set and emits the event only if the removal actually took
//! something out.  A mutex (not an atomic) is fine here — the only writer
//! is the player task, readers are rare (presentation polling a count),
//! and the set is tiny next to the grid.

use std::sync::Mutex;

use pursuit_core::Position;
use rustc_hash::FxHashSet;

/// The set of uncollected pellet cells.
#[derive(Debug)]
pub struct Collectibles {
    cells: Mutex<FxHashSet<Position>>,
}

impl Collectibles {
    pub fn new<I: IntoIterator<Item = Position>>(cells: I) -> Self {
        Self {
            cells: Mutex::new(cells.into_iter().collect()),
        }
    }

    /// An empty set — sessions without pellets skip collection entirely.
    pub fn empty() -> Self {
        Self {
            cells: Mutex::new(FxHashSet::default()),
        }
    }

    /// Remove the pellet at `pos` if one is still there.
    ///
    /// Returns `true` exactly once per cell: the first caller takes the
    /// pellet, every later call finds nothing.
    pub fn try_collect(&self, pos: Position) -> bool {
        self.cells.lock().expect("collectibles lock poisoned").remove(&pos)
    }

    /// Number of pellets still on the map.
    pub fn remaining(&self) -> usize {
        self.cells.lock().expect("collectibles lock poisoned").len()
    }

    /// `true` if `pos` still carries a pellet.  Benignly stale by the time
    /// the caller acts on it; presentation only.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.lock().expect("collectibles lock poisoned").contains(&pos)
    }
}
