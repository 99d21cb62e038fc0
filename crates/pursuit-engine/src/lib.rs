//! `pursuit-engine` — the concurrent heart of the pursuit engine.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`movement`]     | The shared validate-and-commit move primitive             |
//! | [`collision`]    | Contact detection and pure outcome resolution             |
//! | [`collectibles`] | Shared pellet set with exactly-once collection            |
//! | [`events`]       | `GameObserver` boundary trait, `NoopObserver`             |
//! | `scheduler`      | The player's periodic movement task (internal)            |
//! | `coordinator`    | The pursuers' shared periodic decision task (internal)    |
//! | [`session`]      | `SessionBuilder` / `Session` — assembly and lifecycle     |
//! | [`error`]        | `EngineError`, `EngineResult<T>`                          |
//!
//! # Task model
//!
//! Two periodic OS threads: one for the player, one for all pursuers
//! collectively.  Neither ever blocks on the other; each sleeps its own
//! fixed period and does a bounded amount of work.  Cancellation is a
//! shared atomic stop flag checked at every loop iteration — a stopping
//! task finishes its current tick and exits at the next sleep boundary.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pursuit_core::Direction;
//! use pursuit_engine::SessionBuilder;
//! use pursuit_grid::parse_layout;
//!
//! let layout = parse_layout(LAYOUT_TEXT)?;
//! let mut session = SessionBuilder::from_layout(layout)?.build()?;
//! session.start();
//! session.set_desired_direction(Direction::Left);
//! // ... presentation polls session.player() / session.pursuers() ...
//! session.stop();
//! ```

pub mod collectibles;
pub mod collision;
pub mod error;
pub mod events;
pub mod movement;
pub mod session;

mod coordinator;
mod scheduler;


pub use collectibles::Collectibles;
pub use collision::{ContactOutcome, contact, resolve_contact};
pub use error::{EngineError, EngineResult};
pub use events::{GameObserver, NoopObserver};
pub use movement::{attempt_move, candidate_position};
pub use session::{Session, SessionBuilder};
