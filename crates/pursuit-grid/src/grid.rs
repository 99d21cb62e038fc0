//! The walkability grid.
//!
//! # Data layout
//!
//! One flat row-major `Vec<bool>`: cell `(r, c)` lives at `r * cols + c`.
//! Dimensions are fixed at construction and never change.
//!
//! # Totality
//!
//! `is_walkable` accepts *any* `(i32, i32)` pair and answers `false` for
//! anything off-map.  Movement validation leans on this: a candidate step
//! past an edge is simply "not walkable", never a panic or an error.

use pursuit_core::Position;

use crate::{GridError, GridResult};

/// Fixed-shape, setup-mutable walkability matrix.
///
/// Shared read-only (behind an `Arc`) by every movement task during
/// gameplay; mutated only through `&mut self` while the session is being
/// assembled.
#[derive(Clone, Debug)]
pub struct GridMap {
    rows: usize,
    cols: usize,
    walkable: Vec<bool>,
}

impl GridMap {
    /// Create a grid with every cell walkable.
    ///
    /// # Errors
    ///
    /// `GridError::EmptyGrid` if either dimension is zero — the one fatal
    /// construction-time failure in the whole engine.
    pub fn new(rows: usize, cols: usize) -> GridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            walkable: vec![true; rows * cols],
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` if `(row, col)` lies within the grid rectangle.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    // ── Walkability ───────────────────────────────────────────────────────

    /// `true` if `(row, col)` is on the map and walkable.
    ///
    /// Total over all inputs: out-of-bounds coordinates are "not walkable",
    /// never a panic.
    #[inline]
    pub fn is_walkable(&self, row: i32, col: i32) -> bool {
        self.in_bounds(row, col) && self.walkable[row as usize * self.cols + col as usize]
    }

    /// Convenience overload for `Position` callers.
    #[inline]
    pub fn is_walkable_at(&self, pos: Position) -> bool {
        self.is_walkable(pos.row, pos.col)
    }

    /// Set a cell's walkability.  Silently ignores out-of-bounds input.
    ///
    /// Setup-time only: once the map is shared with the movement tasks there
    /// is no `&mut` access left to call this through.
    pub fn set_walkable(&mut self, row: i32, col: i32, walkable: bool) {
        if self.in_bounds(row, col) {
            self.walkable[row as usize * self.cols + col as usize] = walkable;
        }
    }

    /// Mark a cell as a wall.  Same bounds behavior as [`set_walkable`](Self::set_walkable).
    #[inline]
    pub fn add_wall(&mut self, row: i32, col: i32) {
        self.set_walkable(row, col, false);
    }

    /// Number of walkable cells.  Useful for sanity checks in tests and
    /// load-time diagnostics.
    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|&&w| w).count()
    }
}
