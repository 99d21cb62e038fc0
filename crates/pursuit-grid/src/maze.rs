//! Deterministic basic maze generation.
//!
//! Produces the bordered cross-wall pattern used by the demo and tests:
//! a solid border, one horizontal wall at 1/4 and 3/4 height and one
//! vertical wall at 1/4 and 3/4 width (each with a gap on the center line),
//! and a seeded sprinkle of extra walls kept clear of the center start area.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{GridMap, GridResult};

/// Build a bordered maze with interior cross walls and seeded scatter walls.
///
/// The same `(rows, cols, seed)` triple always produces the same maze.
///
/// # Errors
///
/// `GridError::EmptyGrid` if either dimension is zero.
pub fn basic_maze(rows: usize, cols: usize, seed: u64) -> GridResult<GridMap> {
    let mut grid = GridMap::new(rows, cols)?;
    let (rows, cols) = (rows as i32, cols as i32);

    // ── Border walls ──────────────────────────────────────────────────────
    for r in 0..rows {
        grid.add_wall(r, 0);
        grid.add_wall(r, cols - 1);
    }
    for c in 0..cols {
        grid.add_wall(0, c);
        grid.add_wall(rows - 1, c);
    }

    // ── Interior cross walls, gap on the center line ──────────────────────
    for c in 3..cols - 3 {
        if c != cols / 2 {
            grid.add_wall(rows / 4, c);
            grid.add_wall(rows * 3 / 4, c);
        }
    }
    for r in 3..rows - 3 {
        if r != rows / 2 {
            grid.add_wall(r, cols / 4);
            grid.add_wall(r, cols * 3 / 4);
        }
    }

    // ── Seeded scatter walls, away from the center start area ─────────────
    let mut rng = SmallRng::seed_from_u64(seed);
    let scatter = ((rows + cols) / 4).max(0);
    for _ in 0..scatter {
        let r = rng.gen_range(2..(rows - 2).max(3));
        let c = rng.gen_range(2..(cols - 2).max(3));
        if (r - rows / 2).abs() > 2 || (c - cols / 2).abs() > 2 {
            grid.add_wall(r, c);
        }
    }

    Ok(grid)
}
