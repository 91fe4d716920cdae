//! [`ChessRules`] implementation backed by `shakmaty`
//!
//! `shakmaty` positions are immutable-by-default values without unmake, so
//! undo is served from a stack of the positions that preceded each move.

use super::ChessRules;
use crate::game::error::{GameError, GameResult};
use crate::game::types::{BoardSquare, ChessMove};
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Piece, Position};

/// Position plus the undo stack of `(position before, move)` pairs.
#[derive(Debug, Clone, Default)]
pub struct ShakmatyRules {
    position: Chess,
    undo_stack: Vec<(Chess, ChessMove)>,
}

impl ShakmatyRules {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> GameResult<Self> {
        let mut rules = Self::new();
        rules.set_fen(fen)?;
        Ok(rules)
    }

    /// Number of moves `undo_last` can still take back.
    pub fn plies_played(&self) -> usize {
        self.undo_stack.len()
    }

    fn coordinate_of(m: &Move) -> Option<ChessMove> {
        match m.to_uci(CastlingMode::Standard) {
            UciMove::Normal {
                from,
                to,
                promotion,
            } => Some(ChessMove {
                from: BoardSquare::from_shakmaty(from),
                to: BoardSquare::from_shakmaty(to),
                promotion,
            }),
            _ => None,
        }
    }

    fn resolve(&self, mv: &ChessMove) -> Option<Move> {
        self.position
            .legal_moves()
            .into_iter()
            .find(|m| Self::coordinate_of(m).as_ref() == Some(mv))
    }
}

impl ChessRules for ShakmatyRules {
    fn legal_moves(&self) -> Vec<ChessMove> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(Self::coordinate_of)
            .collect()
    }

    fn apply(&mut self, mv: &ChessMove) -> GameResult<()> {
        let m = self.resolve(mv).ok_or(GameError::IllegalMove { mv: *mv })?;
        let before = self.position.clone();
        self.position.play_unchecked(&m);
        self.undo_stack.push((before, *mv));
        Ok(())
    }

    fn undo_last(&mut self) -> Option<ChessMove> {
        let (before, mv) = self.undo_stack.pop()?;
        self.position = before;
        Some(mv)
    }

    fn set_fen(&mut self, fen: &str) -> GameResult<()> {
        let parsed: Fen = fen.trim().parse().map_err(|err| GameError::InvalidFen {
            fen: fen.to_string(),
            message: format!("{err}"),
        })?;
        let position: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|err| GameError::InvalidFen {
                    fen: fen.to_string(),
                    message: format!("{err}"),
                })?;
        self.position = position;
        self.undo_stack.clear();
        Ok(())
    }

    fn to_fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    fn piece_at(&self, square: BoardSquare) -> Option<Piece> {
        self.position.board().piece_at(square.to_shakmaty())
    }

    fn side_to_move(&self) -> Color {
        self.position.turn()
    }

    fn king_square(&self, color: Color) -> Option<BoardSquare> {
        self.position
            .board()
            .king_of(color)
            .map(BoardSquare::from_shakmaty)
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    fn is_capture(&self, mv: &ChessMove) -> bool {
        self.resolve(mv).is_some_and(|m| m.is_capture())
    }

    fn is_castling(&self, mv: &ChessMove) -> bool {
        self.resolve(mv).is_some_and(|m| m.is_castle())
    }

    fn san(&self, mv: &ChessMove) -> String {
        match self.resolve(mv) {
            Some(m) => SanPlus::from_move(self.position.clone(), &m).to_string(),
            None => mv.to_string(),
        }
    }
}
