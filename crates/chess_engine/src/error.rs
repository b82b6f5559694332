//! Error types for chess engine
//!
//! The engine itself never fails at runtime: move legality is a boolean and
//! search is a pure function. Errors only come out of the validating
//! constructors (squares, board text) at the edge of the crate.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Row or column outside 0-7
    #[error("Invalid square: ({row}, {col}) (row and column must be 0-7)")]
    InvalidSquare { row: u8, col: u8 },

    /// Linear square index outside 0-63
    #[error("Invalid square index: {index} (must be 0-63)")]
    InvalidSquareIndex { index: usize },

    /// Board text could not be parsed
    #[error("Invalid board layout: {message}")]
    InvalidLayout { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
