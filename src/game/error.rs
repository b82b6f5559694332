//! Error types for game module
//!
//! Move validation, state machine transitions and the background search.
//! Illegal clicks during square selection are not errors; they only change
//! the selection.

use chess_engine::Color;

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Move rejected by the legality checker
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },

    /// No piece on the source square
    #[error("Piece not found at position ({row}, {col})")]
    PieceNotFound { row: u8, col: u8 },

    /// A move for the side that is not to move
    #[error("Not {found}'s turn, {expected} is to move")]
    NotYourTurn { expected: Color, found: Color },

    /// Invalid game state transition
    #[error("Invalid game state transition: {message}")]
    InvalidStateTransition { message: String },

    /// Operation needs a game in progress
    #[error("No active game")]
    NoActiveGame,

    /// Difficulty name not recognised
    #[error("Unknown difficulty: {name}")]
    UnknownDifficulty { name: String },

    /// Background search task failed to complete
    #[error("Engine task failed: {message}")]
    EngineTask { message: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
