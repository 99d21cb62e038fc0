//! Grid coordinates.
//!
//! Positions are `(row, col)` pairs stored as `i32`.  Signed storage lets
//! candidate-move arithmetic step past an edge without wrapping; the bounds
//! check in `pursuit-grid` treats any negative coordinate as off-map.

use crate::Direction;

/// A cell coordinate on the walkable grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance `|Δrow| + |Δcol|` — the greedy steering heuristic.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell reached by moving `cells` steps in `dir` from here.
    ///
    /// `Direction::None` returns `self` unchanged.  The result may be out of
    /// bounds; validity is the grid's business, not the coordinate's.
    #[inline]
    pub fn step(self, dir: Direction, cells: i32) -> Position {
        match dir {
            Direction::None => self,
            Direction::Up => Position::new(self.row - cells, self.col),
            Direction::Down => Position::new(self.row + cells, self.col),
            Direction::Left => Position::new(self.row, self.col - cells),
            Direction::Right => Position::new(self.row, self.col + cells),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
