//! Direction selection: candidate enumeration, anti-reversal, greedy choice.

use pursuit_core::{Direction, Position, PursuerRng};
use pursuit_grid::GridMap;

/// All directions whose candidate cell (one move at `speed`) is on the map
/// and walkable, in the fixed decision order.
///
/// The enumeration order matters: [`choose_direction`] breaks distance ties
/// by keeping the earliest candidate, so Up beats Down beats Left beats
/// Right among equals.
pub fn available_directions(grid: &GridMap, pos: Position, speed: i32) -> Vec<Direction> {
    Direction::DECISION_ORDER
        .iter()
        .copied()
        .filter(|&dir| grid.is_walkable_at(pos.step(dir, speed)))
        .collect()
}

/// Greedy shortest-path-by-heuristic direction toward `target`.
///
/// 1. Enumerate walkable candidates.
/// 2. Drop the exact reverse of `facing` — unless that would empty the set
///    (dead end), in which case reversal is allowed as a last resort.
/// 3. Keep the candidate minimizing Manhattan distance to `target`; on a
///    tie the earliest candidate in decision order wins (strict `<` scan).
/// 4. Fully trapped → `Direction::None`.
pub fn choose_direction(
    grid: &GridMap,
    pos: Position,
    speed: i32,
    facing: Direction,
    target: Position,
) -> Direction {
    let mut candidates = available_directions(grid, pos, speed);
    if candidates.is_empty() {
        return Direction::None;
    }

    if facing.is_moving() {
        let reverse = facing.opposite();
        if candidates.iter().any(|&d| d != reverse) {
            candidates.retain(|&d| d != reverse);
        }
    }

    let mut best = candidates[0];
    let mut best_dist = pos.step(best, speed).manhattan(target);
    for &dir in &candidates[1..] {
        let dist = pos.step(dir, speed).manhattan(target);
        if dist < best_dist {
            best = dir;
            best_dist = dist;
        }
    }
    best
}

/// A uniformly random direction among the currently walkable candidates,
/// or `None` when trapped.
///
/// Used for Frightened wander and for the single stuck-recovery retry.
/// Reversal is permitted here: erratic motion is the point.
pub fn random_direction(
    grid: &GridMap,
    pos: Position,
    speed: i32,
    rng: &mut PursuerRng,
) -> Direction {
    let candidates = available_directions(grid, pos, speed);
    rng.choose(&candidates).copied().unwrap_or(Direction::None)
}
