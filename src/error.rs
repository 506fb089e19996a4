//! Error types for the ultimatoe crate

use thiserror::Error;

/// Main error type for the ultimatoe crate
///
/// Every move rejection is one of these; `apply_move` never panics on
/// bad input and never mutates state on the error path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("game is not in progress")]
    GameOver,

    #[error("move targets board {board} but board {active} is forced")]
    WrongBoard { board: usize, active: usize },

    #[error("board {board} is already decided")]
    BoardClosed { board: usize },

    #[error("cell {cell} of board {board} is already occupied")]
    CellOccupied { board: usize, cell: usize },

    #[error("index {index} is out of bounds (must be 0-8)")]
    IndexOutOfRange { index: usize },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
