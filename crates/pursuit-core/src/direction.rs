//! Movement directions.

/// A movement direction on the grid.  `None` means "no intent".
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// No movement intent (default state).
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The fixed enumeration order used everywhere a set of candidate
    /// directions is built or a distance tie is broken.  The order itself is
    /// part of the steering contract: equidistant candidates resolve to the
    /// earliest entry.
    pub const DECISION_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The exact reverse of this direction.  `None` reverses to `None`.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `true` for any direction that implies movement.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::None)
    }

    /// Human-readable label, useful for logging and trace output.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
