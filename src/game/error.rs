//! Error types for game module
//!
//! Covers the failures the rules layer can report back to the controller:
//! position setup from FEN and moves the position refuses.

use super::types::ChessMove;

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// FEN text could not be parsed or describes an impossible position
    #[error("Invalid FEN {fen:?}: {message}")]
    InvalidFen { fen: String, message: String },

    /// Move is not in the legal-move set of the current position
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: ChessMove },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
