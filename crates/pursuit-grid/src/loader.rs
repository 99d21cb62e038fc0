//! Map-layout text loader.
//!
//! # Layout format
//!
//! One character per cell, one line per row:
//!
//! | Char  | Meaning                                  |
//! |-------|------------------------------------------|
//! | `#`   | wall                                     |
//! | `o`   | walkable, carries a pellet               |
//! | `O`   | walkable, carries a power pellet         |
//! | `P`   | walkable, player start                   |
//! | `G`   | walkable, pursuer start                  |
//! | space | walkable, empty                          |
//!
//! Lines may differ in length; short lines are padded with walkable space
//! to the longest line's width.  Any other character is a hard parse error —
//! a silently ignored typo in a map file would surface as a wall that isn't
//! there.
//!
//! The loader produces the *data*, not the agents: the session builder
//! decides what to do with the start cells and pellet lists.

use std::path::Path;

use pursuit_core::Position;

use crate::{GridError, GridMap, GridResult};

// ── MapLayout ─────────────────────────────────────────────────────────────────

/// Everything a layout file describes: the grid plus the special cells.
#[derive(Debug)]
pub struct MapLayout {
    pub grid: GridMap,

    /// Cell marked `P`, if any.  Multiple `P`s: the last one wins.
    pub player_start: Option<Position>,

    /// Cells marked `G`, in reading order (top-to-bottom, left-to-right).
    /// Reading order is what makes pursuer IDs stable across loads.
    pub pursuer_starts: Vec<Position>,

    /// Cells marked `o`, in reading order.
    pub pellets: Vec<Position>,

    /// Cells marked `O`, in reading order.
    pub power_pellets: Vec<Position>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a layout from a text file.
pub fn load_layout(path: &Path) -> GridResult<MapLayout> {
    let text = std::fs::read_to_string(path)?;
    parse_layout(&text)
}

/// Parse a layout from in-memory text.
///
/// # Errors
///
/// `GridError::EmptyGrid` for empty input, `GridError::UnknownCell` for any
/// character outside the cell alphabet.
pub fn parse_layout(text: &str) -> GridResult<MapLayout> {
    let lines: Vec<&str> = text.lines().collect();
    let rows = lines.len();
    let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    // Zero rows or all-empty lines: same fatal error as GridMap::new.
    let mut grid = GridMap::new(rows, cols)?;

    let mut player_start = None;
    let mut pursuer_starts = Vec::new();
    let mut pellets = Vec::new();
    let mut power_pellets = Vec::new();

    for (r, line) in lines.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let pos = Position::new(r as i32, c as i32);
            match ch {
                '#' => grid.add_wall(pos.row, pos.col),
                'o' => pellets.push(pos),
                'O' => power_pellets.push(pos),
                'P' => player_start = Some(pos),
                'G' => pursuer_starts.push(pos),
                ' ' => {}
                _ => {
                    return Err(GridError::UnknownCell {
                        ch,
                        line: r + 1,
                        col: c + 1,
                    });
                }
            }
        }
        // Cells past the end of a short line stay walkable space.
    }

    Ok(MapLayout {
        grid,
        player_start,
        pursuer_starts,
        pellets,
        power_pellets,
    })
}
