//! Pure transitions of the pursuer mode machine.
//!
//! ```text
//! SCATTER ──timer──▶ CHASE ──timer──▶ SCATTER (loop)
//!    │                  │
//!    └──── frighten ────┘
//!              │
//!              ▼
//!         FRIGHTENED ──player contact──▶ EATEN ──reaches home──▶ SCATTER
//!              │
//!              └──── duration elapsed ──▶ CHASE
//! ```
//!
//! Each function returns the successor mode and leaves every non-matching
//! mode unchanged, so callers can apply them unconditionally over a roster.
//! Collision-driven resolution (who gets hit, who gets eaten) lives in the
//! engine's collision module; these are only the mode-to-mode edges.

use pursuit_core::PursuerMode;

/// The periodic Chase↔Scatter toggle.  Frightened and Eaten pursuers are
/// exempt — they rejoin the cycle through their own exits.
#[inline]
pub fn timer_toggle(mode: PursuerMode) -> PursuerMode {
    match mode {
        PursuerMode::Chase => PursuerMode::Scatter,
        PursuerMode::Scatter => PursuerMode::Chase,
        other => other,
    }
}

/// A power-pellet event: Chase and Scatter pursuers become Frightened.
/// Eaten pursuers are already defeated and stay on course home.
#[inline]
pub fn on_frightened(mode: PursuerMode) -> PursuerMode {
    match mode {
        PursuerMode::Chase | PursuerMode::Scatter => PursuerMode::Frightened,
        other => other,
    }
}

/// The external "frightened duration elapsed" signal: Frightened pursuers
/// resume the hunt in Chase.
#[inline]
pub fn on_frightened_elapsed(mode: PursuerMode) -> PursuerMode {
    match mode {
        PursuerMode::Frightened => PursuerMode::Chase,
        other => other,
    }
}

/// An Eaten pursuer standing on its home cell respawns into Scatter.
#[inline]
pub fn on_reached_home(mode: PursuerMode) -> PursuerMode {
    match mode {
        PursuerMode::Eaten => PursuerMode::Scatter,
        other => other,
    }
}
