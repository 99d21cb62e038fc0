//! Per-mode, per-kind target selection.

use pursuit_core::{Direction, Position, PursuerMode};
use pursuit_agent::PursuerKind;

/// How far ahead of the player a `Flanker` aims.
const FLANK_LOOKAHEAD: i32 = 4;

/// A scalar snapshot of the player taken once per coordinator tick.
///
/// Snapshotting decouples every pursuer's decision in the same tick from
/// the player task's concurrent movement: all pursuers aim at the same
/// observed player, even if the real one steps mid-tick.
#[derive(Copy, Clone, Debug)]
pub struct PlayerView {
    pub position: Position,
    pub facing: Direction,
}

/// The cell a pursuer steers toward this tick, or `None` in Frightened mode
/// (frightened motion is random, not target-seeking).
pub fn select_target(
    mode: PursuerMode,
    kind: PursuerKind,
    scatter_corner: Position,
    home: Position,
    player: PlayerView,
) -> Option<Position> {
    match mode {
        PursuerMode::Chase => Some(chase_target(kind, player)),
        PursuerMode::Scatter => Some(scatter_corner),
        PursuerMode::Frightened => None,
        PursuerMode::Eaten => Some(home),
    }
}

/// Chase-mode target by pursuer kind.
///
/// `Flanker` projects the player's facing forward; the projected cell may be
/// a wall or off-map — greedy steering only measures distance toward it, so
/// an unreachable target is fine.  A player facing nowhere is targeted
/// directly.
fn chase_target(kind: PursuerKind, player: PlayerView) -> Position {
    match kind {
        PursuerKind::Direct => player.position,
        PursuerKind::Flanker => player.position.step(player.facing, FLANK_LOOKAHEAD),
    }
}
