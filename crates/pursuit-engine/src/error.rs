use pursuit_core::Position;
use pursuit_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("a session needs a player start cell")]
    MissingPlayerStart,

    #[error("{what} cell {at} is out of bounds or not walkable")]
    BlockedCell { what: &'static str, at: Position },

    #[error("failed to spawn movement task: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
