//! The shared move primitive used by both movement tasks.
//!
//! A rejected move is an expected, frequent outcome (an agent facing a
//! wall), not an error — hence a `bool`, not a `Result`.

use pursuit_core::{Direction, Position};
use pursuit_grid::GridMap;
use pursuit_agent::Movable;

/// The cell `agent` would land on by moving one step in `dir`.
///
/// `Direction::None` yields the current cell; the result may be off-map —
/// that is the validity check's job, not this one's.
#[inline]
pub fn candidate_position<A: Movable>(agent: &A, dir: Direction) -> Position {
    agent.position().step(dir, agent.speed())
}

/// Validate and commit one move.
///
/// Succeeds iff the candidate cell is in bounds and walkable; on success
/// the agent's position and facing are replaced together (one atomic
/// commit, see [`Movable::commit_move`]) and `true` is returned.  On
/// failure the agent is left exactly as it was and `false` is returned.
///
/// `Direction::None` never moves and reports `false`.
pub fn attempt_move<A: Movable>(grid: &GridMap, agent: &A, dir: Direction) -> bool {
    if !dir.is_moving() {
        return false;
    }
    let to = candidate_position(agent, dir);
    if !grid.is_walkable_at(to) {
        return false;
    }
    agent.commit_move(to, dir);
    true
}
