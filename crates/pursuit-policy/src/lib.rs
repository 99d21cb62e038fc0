//! `pursuit-policy` — how a pursuer decides.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`mode`]   | Pure transitions of the scatter/chase/frightened/eaten machine |
//! | [`target`] | Per-mode, per-kind target selection                          |
//! | [`steer`]  | Candidate enumeration, anti-reversal, greedy direction choice |
//!
//! # Design notes
//!
//! Everything here is a pure function over snapshots: the coordinator reads
//! the player's position and facing once per tick, hands the snapshot to
//! these functions, and commits the results itself.  No policy function
//! touches shared state or draws from a hidden RNG — the one random choice
//! (frightened wander / stuck recovery) takes the pursuer's own
//! [`PursuerRng`][pursuit_core::PursuerRng] explicitly, so a tick sequence
//! with a fixed seed replays exactly.

pub mod mode;
pub mod steer;
pub mod target;

#[cfg(test)]
mod tests;

pub use mode::{on_frightened, on_frightened_elapsed, on_reached_home, timer_toggle};
pub use steer::{available_directions, choose_direction, random_direction};
pub use target::{PlayerView, select_target};
