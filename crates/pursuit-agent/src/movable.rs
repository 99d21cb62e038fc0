//! The `Movable` trait — the seam between agents and the move primitive.

use pursuit_core::{Direction, Position};

/// Anything the shared move primitive can relocate.
///
/// The primitive reads `position()` and `speed()`, validates the candidate
/// cell against the grid, and calls `commit_move` only on success — so an
/// implementor's position and facing change together or not at all.
///
/// Methods take `&self`: agent state lives in atomic cells, and the
/// single-writer rule (one owning task per agent) is what makes the
/// read-then-commit sequence sound, not a `&mut` borrow.
pub trait Movable {
    /// Current cell.
    fn position(&self) -> Position;

    /// Cells covered per validated move.
    fn speed(&self) -> i32;

    /// Commit a validated move: replace the position and face `dir`.
    ///
    /// Called only by the agent's owning task, only with a cell the grid
    /// approved.
    fn commit_move(&self, to: Position, dir: Direction);
}
