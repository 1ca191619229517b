//! Errors used throughout the chess assistant.
//!
//! Every fallible operation in the crate reports failure through
//! `ChessResult`. All variants are recoverable: the game state a failing call
//! was made against is left exactly as it was.

/// Unified error type for parsing, move application and engine requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A FEN string failed validation.
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    /// Algebraic square text (for example `"e4"`) or a square index was out of range.
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    /// Coordinate move text could not be parsed into from/to/promotion.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// The requested move does not match any legal move in the position.
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: String, to: String },

    #[error("no moves to undo")]
    NothingToUndo,

    /// A search was requested for a position that is already decided.
    #[error("game is already over: {0}")]
    GameOver(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
