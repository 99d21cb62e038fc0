//! `pursuit-core` — foundational types for the pursuit engine.
//!
//! This crate is a dependency of every other `pursuit-*` crate.  It
//! intentionally has no `pursuit-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`ids`]       | `PursuerId`                                       |
//! | [`position`]  | `Position`, Manhattan distance, candidate stepping |
//! | [`direction`] | `Direction` enum and the fixed decision order     |
//! | [`mode`]      | `PursuerMode` enum                                |
//! | [`config`]    | `EngineConfig` (tick periods, timers, seed)       |
//! | [`rng`]       | `PursuerRng` (per-pursuer deterministic RNG)      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types. |

pub mod config;
pub mod direction;
pub mod ids;
pub mod mode;
pub mod position;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EngineConfig;
pub use direction::Direction;
pub use ids::PursuerId;
pub use mode::PursuerMode;
pub use position::Position;
pub use rng::PursuerRng;
