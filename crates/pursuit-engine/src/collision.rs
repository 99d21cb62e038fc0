//! Contact detection and resolution.
//!
//! Both halves are pure: `contact` compares two cells, `resolve_contact`
//! maps the pursuer's mode at that instant to an outcome.  The coordinator
//! owns the side effects (mode writes, event emission, de-duplication).

use pursuit_core::{Position, PursuerMode};

/// What a pursuer/player contact means, given the pursuer's mode at the
/// instant of detection.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ContactOutcome {
    /// Hunting pursuer caught the player: signal the game-state
    /// collaborator (life loss is its business, not ours).
    PlayerHit,
    /// Frightened pursuer was caught by the player: it becomes Eaten.
    PursuerEaten,
    /// Already-eaten pursuer passing through the player: nothing happens.
    Ignored,
}

/// `true` iff the two agents occupy exactly the same cell.
#[inline]
pub fn contact(pursuer: Position, player: Position) -> bool {
    pursuer == player
}

/// Resolve a detected contact by pursuer mode.
#[inline]
pub fn resolve_contact(mode: PursuerMode) -> ContactOutcome {
    match mode {
        PursuerMode::Chase | PursuerMode::Scatter => ContactOutcome::PlayerHit,
        PursuerMode::Frightened => ContactOutcome::PursuerEaten,
        PursuerMode::Eaten => ContactOutcome::Ignored,
    }
}
