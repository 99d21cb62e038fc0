use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    /// A grid with a zero dimension can never host an agent; construction
    /// fails hard rather than producing a map nothing can stand on.
    #[error("grid must have non-zero dimensions, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("unknown cell character {ch:?} at line {line}, column {col}")]
    UnknownCell { ch: char, line: usize, col: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
