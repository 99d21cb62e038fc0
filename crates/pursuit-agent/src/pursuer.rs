//! Autonomous pursuer agents.
//!
//! Pursuer personalities are a closed set of tagged variants carrying
//! per-variant constants (scatter corner, home cell), not a trait object —
//! the variant tag only influences chase targeting, and keeping it a plain
//! enum keeps the whole roster `Copy`-constructible from specs.

use pursuit_core::{Direction, Position, PursuerId, PursuerMode};

use crate::cell::{DirectionCell, FrameCell, ModeCell, PositionCell};
use crate::movable::Movable;

/// Animation cycle length for the pursuer sprite sets.
const PURSUER_FRAMES: u8 = 2;

// ── PursuerKind ───────────────────────────────────────────────────────────────

/// Chase-targeting personality of a pursuer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PursuerKind {
    /// Targets the player's current cell.
    #[default]
    Direct,
    /// Targets a fixed number of cells ahead of the player's facing,
    /// cutting off the escape route.
    Flanker,
}

impl PursuerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PursuerKind::Direct => "direct",
            PursuerKind::Flanker => "flanker",
        }
    }
}

impl std::fmt::Display for PursuerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PursuerSpec ───────────────────────────────────────────────────────────────

/// Construction record for one pursuer: everything variant-specific, fixed
/// at session build time.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PursuerSpec {
    pub kind: PursuerKind,
    /// Starting cell.
    pub start: Position,
    /// Corner targeted while in Scatter mode.  Give each pursuer a distinct
    /// corner to spread the pack out.
    pub scatter_corner: Position,
    /// Cell targeted while Eaten; reaching it respawns the pursuer.
    pub home: Position,
}

// ── PursuerAgent ──────────────────────────────────────────────────────────────

/// One autonomous pursuer.
///
/// All mutable state (position, facing, mode, frame) is written exclusively
/// by the pursuit-coordinator task; presentation and tests read through the
/// atomic cells.  The variant constants are immutable after construction.
#[derive(Debug)]
pub struct PursuerAgent {
    id: PursuerId,
    kind: PursuerKind,
    scatter_corner: Position,
    home: Position,
    speed: i32,
    position: PositionCell,
    facing: DirectionCell,
    mode: ModeCell,
    frame: FrameCell,
}

impl PursuerAgent {
    /// Create a pursuer from its spec.  Initial mode is Scatter.
    pub fn new(id: PursuerId, spec: PursuerSpec) -> Self {
        Self {
            id,
            kind: spec.kind,
            scatter_corner: spec.scatter_corner,
            home: spec.home,
            speed: 1,
            position: PositionCell::new(spec.start),
            facing: DirectionCell::new(Direction::None),
            mode: ModeCell::new(PursuerMode::Scatter),
            frame: FrameCell::new(PURSUER_FRAMES),
        }
    }

    // ── Variant constants ─────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> PursuerId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PursuerKind {
        self.kind
    }

    #[inline]
    pub fn scatter_corner(&self) -> Position {
        self.scatter_corner
    }

    #[inline]
    pub fn home(&self) -> Position {
        self.home
    }

    // ── Shared reads ──────────────────────────────────────────────────────

    #[inline]
    pub fn current_direction(&self) -> Direction {
        self.facing.load()
    }

    #[inline]
    pub fn mode(&self) -> PursuerMode {
        self.mode.load()
    }

    #[inline]
    pub fn animation_frame(&self) -> u8 {
        self.frame.load()
    }

    // ── Coordinator side ──────────────────────────────────────────────────

    /// Replace the mode.  Owning-task (coordinator) only.
    #[inline]
    pub fn set_mode(&self, mode: PursuerMode) {
        self.mode.store(mode);
    }

    /// Step the animation cycle.  Owning-task only.
    #[inline]
    pub fn advance_frame(&self) {
        self.frame.advance();
    }
}

impl Movable for PursuerAgent {
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
