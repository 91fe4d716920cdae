//! Chess rules module - the boundary to the rules collaborator
//!
//! The controller never decides legality itself. Everything it needs to know
//! about a position goes through the [`ChessRules`] trait:
//! - **Legal-move enumeration** for the side to move
//! - **Make/unmake** of validated moves
//! - **Predicates** for check, checkmate, capture and castling
//! - **FEN import/export** and SAN formatting
//!
//! # Module Structure
//!
//! - `board_state` - [`ShakmatyRules`], the implementation backed by `shakmaty`
//!
//! Moves cross this boundary as [`ChessMove`] values in coordinate form;
//! castling is the king's two-square step.

pub mod board_state;


pub use board_state::ShakmatyRules;

use super::error::GameResult;
use super::types::{BoardSnapshot, BoardSquare, ChessMove};
use shakmaty::{Color, Piece};

/// Queries and mutations the controller needs from a chess rules library.
pub trait ChessRules {
    /// All legal moves for the side to move.
    fn legal_moves(&self) -> Vec<ChessMove>;

    /// Applies a move that is a member of [`ChessRules::legal_moves`].
    fn apply(&mut self, mv: &ChessMove) -> GameResult<()>;

    /// Takes back the most recently applied move, returning it.
    fn undo_last(&mut self) -> Option<ChessMove>;

    /// Replaces the position. Clears anything `undo_last` could restore.
    fn set_fen(&mut self, fen: &str) -> GameResult<()>;

    fn to_fen(&self) -> String;

    fn piece_at(&self, square: BoardSquare) -> Option<Piece>;

    fn side_to_move(&self) -> Color;

    fn king_square(&self, color: Color) -> Option<BoardSquare>;

    fn is_check(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn is_game_over(&self) -> bool;

    /// Must be asked before `mv` is applied.
    fn is_capture(&self, mv: &ChessMove) -> bool;

    /// Must be asked before `mv` is applied.
    fn is_castling(&self, mv: &ChessMove) -> bool;

    /// Standard algebraic notation for `mv` in the current (pre-move) position,
    /// including the `+`/`#` suffix.
    fn san(&self, mv: &ChessMove) -> String;

    fn is_legal(&self, mv: &ChessMove) -> bool {
        self.legal_moves().contains(mv)
    }

    /// First legal move from `from` to `to`: the plain move, then the
    /// promotion variants queen, rook, bishop, knight.
    fn find_legal(&self, from: BoardSquare, to: BoardSquare) -> Option<ChessMove> {
        let legal = self.legal_moves();
        ChessMove::candidates(from, to).find(|candidate| legal.contains(candidate))
    }

    /// Legal destinations for the piece on `from`.
    fn legal_targets(&self, from: BoardSquare) -> Vec<BoardSquare> {
        let mut targets: Vec<BoardSquare> = self
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect();
        targets.sort();
        targets.dedup();
        targets
    }

    fn snapshot(&self) -> BoardSnapshot {
        let mut snapshot = BoardSnapshot::empty();
        for square in BoardSquare::all() {
            snapshot.set(square, self.piece_at(square));
        }
        snapshot
    }
}
