use thiserror::Error;

use crate::{MAX_SIZE, MIN_SIZE};

/// Errors reported by the board and the search engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid configuration: search depth must be at least 1, got {depth}")]
    InvalidConfiguration { depth: i32 },

    #[error("no legal moves: the board is full")]
    NoLegalMoves,

    #[error("invalid board size {0}, must be between {} and {}", MIN_SIZE, MAX_SIZE)]
    InvalidSize(usize),

    #[error("Invalid move, column {column} out of range. Columns must be between 1 and {size}")]
    ColumnOutOfRange { column: usize, size: usize },

    #[error("Invalid move, column {0} full")]
    ColumnFull(usize),

    #[error("could not parse '{0}' as a valid move")]
    InvalidMove(char),

    #[error("Invalid move, the game is already over")]
    GameOver,
}
