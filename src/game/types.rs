//! Core value types shared by the controller layers
//!
//! - [`BoardSquare`]: a `(file, rank)` pair, both in `0..8`
//! - [`ChessMove`]: `{from, to, promotion}` in coordinate form
//! - [`BoardSnapshot`]: piece placement captured for rendering
//!
//! Piece identity (`Piece`, `Role`, `Color`) is taken straight from `shakmaty`
//! so the rules collaborator and the UI agree on what a piece is.

use shakmaty::{Color, Piece, Role};
use std::fmt;
use std::str::FromStr;

/// Promotion candidates in the order they are probed when a pawn reaches
/// the last rank. The first legal one wins; there is no chooser UI.
pub const PROMOTION_ORDER: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

/// A board square addressed by file (a=0) and rank (1=0).
///
/// Orientation is display-only: the same square maps to different pixels
/// depending on whether the board is flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSquare {
    pub file: u8,
    pub rank: u8,
}

impl BoardSquare {
    /// Returns `None` when either coordinate is outside `0..8`.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    /// Index 0..64 with a1 = 0, h1 = 7, a8 = 56.
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 64 {
            return None;
        }
        Some(Self {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        })
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }

    /// Every square, a1 first.
    pub fn all() -> impl Iterator<Item = BoardSquare> {
        (0..64).filter_map(BoardSquare::from_index)
    }

    pub(crate) fn to_shakmaty(self) -> shakmaty::Square {
        shakmaty::Square::from_coords(
            shakmaty::File::new(u32::from(self.file)),
            shakmaty::Rank::new(u32::from(self.rank)),
        )
    }

    pub(crate) fn from_shakmaty(square: shakmaty::Square) -> Self {
        Self {
            file: square.file() as u8,
            rank: square.rank() as u8,
        }
    }
}

impl fmt::Display for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for BoardSquare {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(MoveParseError::new(s));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        BoardSquare::new(file, rank).ok_or_else(|| MoveParseError::new(s))
    }
}

/// Error returned when text is not a well-formed coordinate move or square.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed coordinate move: {text:?}")]
pub struct MoveParseError {
    pub text: String,
}

impl MoveParseError {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// A move in coordinate form.
///
/// Castling is expressed as the king's two-square step (`e1g1`), the same
/// form the UCI protocol uses. Values are only applied to a position after
/// the rules collaborator has confirmed them legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: BoardSquare,
    pub to: BoardSquare,
    pub promotion: Option<Role>,
}

impl ChessMove {
    pub fn new(from: BoardSquare, to: BoardSquare) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(from: BoardSquare, to: BoardSquare, role: Role) -> Self {
        Self {
            from,
            to,
            promotion: Some(role),
        }
    }

    /// The plain move followed by each promotion variant in probe order.
    pub fn candidates(from: BoardSquare, to: BoardSquare) -> impl Iterator<Item = ChessMove> {
        std::iter::once(ChessMove::new(from, to)).chain(
            PROMOTION_ORDER
                .into_iter()
                .map(move |role| ChessMove::with_promotion(from, to, role)),
        )
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}

impl FromStr for ChessMove {
    type Err = MoveParseError;

    /// Parses `<from><to>[q|r|b|n]`, e.g. `e7e5` or `a7a8q`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::new(s));
        }
        let from: BoardSquare = s[0..2].parse().map_err(|_| MoveParseError::new(s))?;
        let to: BoardSquare = s[2..4].parse().map_err(|_| MoveParseError::new(s))?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(ch) => Some(promotion_role(ch).ok_or_else(|| MoveParseError::new(s))?),
        };
        Ok(ChessMove {
            from,
            to,
            promotion,
        })
    }
}

fn promotion_role(ch: char) -> Option<Role> {
    match ch.to_ascii_lowercase() {
        'q' => Some(Role::Queen),
        'r' => Some(Role::Rook),
        'b' => Some(Role::Bishop),
        'n' => Some(Role::Knight),
        _ => None,
    }
}

/// Human-readable side name used in the move log.
pub fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// Piece placement at one instant, indexed by [`BoardSquare::index`].
///
/// Undo animation steps each carry one of these so pieces that are not part
/// of the current step stay where they were before that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    squares: [Option<Piece>; 64],
}

impl BoardSnapshot {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    pub fn piece_at(&self, square: BoardSquare) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub fn set(&mut self, square: BoardSquare, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (BoardSquare, Piece)> + '_ {
        BoardSquare::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
