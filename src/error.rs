//! Centralized error types for the game.
//!
//! All fallible construction paths report through [`GameError`]; the running
//! simulation recovers locally instead (out-of-bounds lookups read as walls,
//! a boxed-in adversary skips its move, an invalid direction change keeps the
//! current direction).

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Board parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),

    #[error("Board has no rows")]
    EmptyBoard,

    #[error("Row {row} is {width} cells wide, expected {expected}")]
    RaggedRow { row: usize, width: usize, expected: usize },

    #[error("Missing spawn marker: {0}")]
    MissingSpawn(&'static str),

    #[error("Duplicate spawn marker: {0}")]
    DuplicateSpawn(&'static str),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
