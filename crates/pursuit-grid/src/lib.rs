//! `pursuit-grid` — the shared walkable grid and its construction paths.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`grid`]   | `GridMap` — fixed-shape, setup-mutable walkability matrix |
//! | [`loader`] | Char-grid text → `MapLayout` (grid + special cells)       |
//! | [`maze`]   | Deterministic basic maze generator                        |
//! | [`error`]  | `GridError`, `GridResult<T>`                              |
//!
//! # Mutation discipline
//!
//! Walkability is mutated only through `&mut GridMap` during setup.  The
//! engine wraps the finished map in an `Arc` before any movement task
//! starts, so during gameplay every access is a plain shared read and no
//! locking is needed.

pub mod error;
pub mod grid;
pub mod loader;
pub mod maze;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::GridMap;
pub use loader::{MapLayout, load_layout, parse_layout};
pub use maze::basic_maze;
