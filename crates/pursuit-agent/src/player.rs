//! The player-controlled agent.

use pursuit_core::{Direction, Position};

use crate::cell::{DirectionCell, FrameCell, PositionCell};
use crate::movable::Movable;

/// Animation cycle length for the player sprite set.
const PLAYER_FRAMES: u8 = 3;

/// The player-controlled agent.
///
/// Two direction fields with different jobs:
///
/// - **desired** — the input collaborator's last request.  Persisted even
///   while blocked, so holding a direction against a wall turns the player
///   the moment the wall ends.  Last write wins; no queuing.
/// - **facing** — the direction of the last *committed* move.  This is what
///   renderers orient the sprite by, and it never reflects a rejected
///   attempt.
///
/// Position and facing are written only by the player scheduler; desired is
/// written only by the input collaborator.  Everyone else reads.
#[derive(Debug)]
pub struct PlayerAgent {
    position: PositionCell,
    facing: DirectionCell,
    desired: DirectionCell,
    frame: FrameCell,
    speed: i32,
}

impl PlayerAgent {
    /// Create a player standing at `start`, facing nowhere, with no intent.
    pub fn new(start: Position) -> Self {
        Self {
            position: PositionCell::new(start),
            facing: DirectionCell::new(Direction::None),
            desired: DirectionCell::new(Direction::None),
            frame: FrameCell::new(PLAYER_FRAMES),
            speed: 1,
        }
    }

    // ── Presentation reads ────────────────────────────────────────────────

    #[inline]
    pub fn current_direction(&self) -> Direction {
        self.facing.load()
    }

    #[inline]
    pub fn animation_frame(&self) -> u8 {
        self.frame.load()
    }

    // ── Input collaborator ────────────────────────────────────────────────

    /// Record a new movement intent.  Callable from any thread at any time.
    #[inline]
    pub fn set_desired_direction(&self, dir: Direction) {
        self.desired.store(dir);
    }

    /// The currently held intent.  Read by the scheduler each tick.
    #[inline]
    pub fn desired_direction(&self) -> Direction {
        self.desired.load()
    }

    // ── Scheduler side ────────────────────────────────────────────────────

    /// Step the animation cycle.  Owning-task only.
    #[inline]
    pub fn advance_frame(&self) {
        self.frame.advance();
    }
}

impl Movable for PlayerAgent {
    #[inline]
    fn position(&self) -> Position {
        self.position.load()
    }

    #[inline]
    fn speed(&self) -> i32 {
        self.speed
    }

    #[inline]
    fn commit_move(&self, to: Position, dir: Direction) {
        self.position.store(to);
        self.facing.store(dir);
    }
}
