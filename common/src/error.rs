//! Error type shared by the board, the search and the input layer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid coordinate ({row}, {col}): row and column must be in 0..=2")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("illegal move: cell ({row}, {col}) is already occupied")]
    IllegalMove { row: usize, col: usize },

    #[error("no moves available: the board is full")]
    NoMovesAvailable,

    #[error("invalid player {value} (expected -1 for x or 1 for o)")]
    InvalidPlayer { value: i32 },

    #[error("invalid value {value} for cell {index} (expected -1, 0 or 1)")]
    InvalidCellValue { index: usize, value: i32 },

    #[error("board has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },
}
