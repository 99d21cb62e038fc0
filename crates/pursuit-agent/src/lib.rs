//! `pursuit-agent` — agent state with torn-read-free sharing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`cell`]    | `PositionCell`, `DirectionCell`, `ModeCell`, `FrameCell`    |
//! | [`movable`] | `Movable` — the seam between agents and the move primitive  |
//! | [`player`]  | `PlayerAgent`                                               |
//! | [`pursuer`] | `PursuerAgent`, `PursuerKind`, `PursuerSpec`                |
//!
//! # Ownership discipline
//!
//! Every mutable field on an agent has exactly one writing task: the player
//! scheduler writes `PlayerAgent`, the pursuit coordinator writes every
//! `PursuerAgent`.  All other tasks (presentation, the coordinator reading
//! the player) only read, through the atomic cells in [`cell`].  The one
//! exception is `PlayerAgent`'s *desired* direction, which the input
//! collaborator overwrites at any time — it is an intent mailbox, last
//! write wins, and the scheduler only ever reads it.

pub mod cell;
pub mod movable;
pub mod player;
pub mod pursuer;

#[cfg(test)]
mod tests;

pub use cell::{DirectionCell, FrameCell, ModeCell, PositionCell};
pub use movable::Movable;
pub use player::PlayerAgent;
pub use pursuer::{PursuerAgent, PursuerKind, PursuerSpec};
