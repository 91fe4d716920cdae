//! Move notation schemes
//!
//! Converts a validated move into text for the move log. Five schemes are
//! supported:
//!
//! | Scheme        | Example       | Needs position |
//! |---------------|---------------|----------------|
//! | `coordinate`  | `e2e4`        | no             |
//! | `iccf`        | `5254`        | no             |
//! | `algebraic`   | `Nf3`, `exd5` | yes (SAN)      |
//! | `descriptive` | `P-K4`        | yes            |
//! | `fen`         | `e4` + FEN    | yes            |
//!
//! Everything here reads the position *before* the move is applied. The
//! `fen` scheme additionally records the resulting position, which the
//! controller serializes after applying the move (see
//! [`NotationScheme::records_position`]).

use super::rules::ChessRules;
use super::types::ChessMove;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shakmaty::{Color, Role};
use std::fmt;
use std::str::FromStr;

/// File names of the descriptive system, indexed by file a..h.
const DESCRIPTIVE_FILES: [&str; 8] = ["QR", "QN", "QB", "Q", "K", "KB", "KN", "KR"];

/// Notation used when logging moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotationScheme {
    /// Standard algebraic (SAN): `e4`, `Nf3`, `O-O`
    #[default]
    Algebraic,
    /// Historic English descriptive: `P-K4`, `NxQB3`
    Descriptive,
    /// ICCF numeric: `5254`, promotion digit appended
    Iccf,
    /// From/to squares: `e2e4`, `e7e8q`
    Coordinate,
    /// Algebraic text plus the resulting position as FEN
    Fen,
}

impl NotationScheme {
    pub const ALL: [NotationScheme; 5] = [
        NotationScheme::Algebraic,
        NotationScheme::Descriptive,
        NotationScheme::Iccf,
        NotationScheme::Coordinate,
        NotationScheme::Fen,
    ];

    /// Config name of the scheme.
    pub fn name(self) -> &'static str {
        match self {
            NotationScheme::Algebraic => "algebraic",
            NotationScheme::Descriptive => "descriptive",
            NotationScheme::Iccf => "iccf",
            NotationScheme::Coordinate => "coordinate",
            NotationScheme::Fen => "fen",
        }
    }

    /// Whether the resulting position is logged alongside the move text.
    pub fn records_position(self) -> bool {
        matches!(self, NotationScheme::Fen)
    }
}

impl fmt::Display for NotationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown scheme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown notation scheme {0:?}")]
pub struct UnknownScheme(pub String);

impl FromStr for NotationScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "numeric" => Ok(NotationScheme::Iccf),
            "full_position" | "full-position" => Ok(NotationScheme::Fen),
            _ => NotationScheme::ALL
                .into_iter()
                .find(|scheme| scheme.name() == name)
                .ok_or_else(|| UnknownScheme(s.to_string())),
        }
    }
}

impl Serialize for NotationScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for NotationScheme {
    /// Unknown names fall back to [`NotationScheme::Algebraic`] instead of
    /// failing the whole settings file.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or_else(|err| {
            tracing::warn!("[SETTINGS] {}, using {}", err, NotationScheme::default());
            NotationScheme::default()
        }))
    }
}

/// Renders `mv` in `scheme`. Call before applying the move.
///
/// For [`NotationScheme::Fen`] this is the algebraic half; the position
/// half is produced after the move is played.
pub fn encode<R: ChessRules + ?Sized>(scheme: NotationScheme, mv: &ChessMove, rules: &R) -> String {
    match scheme {
        NotationScheme::Algebraic | NotationScheme::Fen => algebraic(mv, rules),
        NotationScheme::Descriptive => descriptive(mv, rules),
        NotationScheme::Iccf => numeric(mv),
        NotationScheme::Coordinate => coordinate(mv),
    }
}

/// `e2e4`, with a lowercase promotion letter when present.
pub fn coordinate(mv: &ChessMove) -> String {
    mv.to_string()
}

/// ICCF digits: file and rank of both squares (1-8), then the promotion
/// piece as queen=1, rook=2, bishop=3, knight=4.
pub fn numeric(mv: &ChessMove) -> String {
    let mut text = format!(
        "{}{}{}{}",
        mv.from.file + 1,
        mv.from.rank + 1,
        mv.to.file + 1,
        mv.to.rank + 1
    );
    if let Some(digit) = mv.promotion.and_then(promotion_digit) {
        text.push(digit);
    }
    text
}

fn promotion_digit(role: Role) -> Option<char> {
    match role {
        Role::Queen => Some('1'),
        Role::Rook => Some('2'),
        Role::Bishop => Some('3'),
        Role::Knight => Some('4'),
        _ => None,
    }
}

/// SAN from the rules collaborator, which owns disambiguation and the
/// check/mate suffix.
pub fn algebraic<R: ChessRules + ?Sized>(mv: &ChessMove, rules: &R) -> String {
    rules.san(mv)
}

/// Descriptive notation: piece letter, `x` or `-`, destination file name
/// and a rank counted from the mover's own side.
pub fn descriptive<R: ChessRules + ?Sized>(mv: &ChessMove, rules: &R) -> String {
    let Some(piece) = rules.piece_at(mv.from) else {
        return coordinate(mv);
    };

    if rules.is_castling(mv) {
        return if mv.to.file > mv.from.file {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let rank = match piece.color {
        Color::White => mv.to.rank + 1,
        Color::Black => 8 - mv.to.rank,
    };
    let separator = if rules.is_capture(mv) { 'x' } else { '-' };
    let mut text = format!(
        "{}{}{}{}",
        piece.role.upper_char(),
        separator,
        DESCRIPTIVE_FILES[mv.to.file as usize],
        rank
    );
    if let Some(role) = mv.promotion {
        text.push('=');
        text.push(role.upper_char());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::ShakmatyRules;
    use crate::game::types::BoardSquare;

    fn mv(text: &str) -> ChessMove {
        text.parse().unwrap()
    }

    fn rules_after(moves: &[&str]) -> ShakmatyRules {
        let mut rules = ShakmatyRules::new();
        for m in moves {
            rules.apply(&mv(m)).unwrap();
        }
        rules
    }

    #[test]
    fn test_coordinate_roundtrips_every_legal_move() {
        //! Parsing the coordinate text recovers the move, promotion included
        //! exactly when the move has one.
        let positions = [
            ShakmatyRules::new(),
            ShakmatyRules::from_fen("r3k2r/1P4P1/8/3pP3/8/8/6p1/R3K2R w KQkq d6 0 1").unwrap(),
        ];
        for rules in &positions {
            for legal in rules.legal_moves() {
                let text = coordinate(&legal);
                let parsed: ChessMove = text.parse().unwrap();
                assert_eq!(parsed, legal);
                assert_eq!(text.len() == 5, legal.promotion.is_some());
            }
        }
    }

    #[test]
    fn test_numeric_promotion_digits() {
        assert_eq!(numeric(&mv("e2e4")), "5254");
        assert_eq!(numeric(&mv("g1f3")), "7163");
        assert_eq!(numeric(&mv("a7a8q")), "17181");
        assert_eq!(numeric(&mv("a7a8r")), "17182");
        assert_eq!(numeric(&mv("a7a8b")), "17183");
        assert_eq!(numeric(&mv("a7a8n")), "17184");
    }

    #[test]
    fn test_descriptive_pawn_and_knight_moves() {
        let start = ShakmatyRules::new();
        assert_eq!(descriptive(&mv("e2e4"), &start), "P-K4");
        assert_eq!(descriptive(&mv("g1f3"), &start), "N-KB3");

        let black_to_move = rules_after(&["e2e4"]);
        assert_eq!(descriptive(&mv("e7e5"), &black_to_move), "P-K4");
        assert_eq!(descriptive(&mv("b8c6"), &black_to_move), "N-QB3");
    }

    #[test]
    fn test_descriptive_capture_uses_x() {
        let rules = rules_after(&["e2e4", "d7d5"]);
        assert_eq!(descriptive(&mv("e4d5"), &rules), "PxQ5");
    }

    #[test]
    fn test_descriptive_castling_both_sides() {
        //! Castling short-circuits to O-O / O-O-O for either colour.
        let white =
            ShakmatyRules::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(descriptive(&mv("e1g1"), &white), "O-O");
        assert_eq!(descriptive(&mv("e1c1"), &white), "O-O-O");

        let black =
            ShakmatyRules::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1").unwrap();
        assert_eq!(descriptive(&mv("e8g8"), &black), "O-O");
        assert_eq!(descriptive(&mv("e8c8"), &black), "O-O-O");
    }

    #[test]
    fn test_descriptive_promotion_suffix() {
        let rules = ShakmatyRules::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
        assert_eq!(descriptive(&mv("a7a8n"), &rules), "P-QR8=N");
    }

    #[test]
    fn test_descriptive_without_piece_falls_back() {
        let rules = ShakmatyRules::new();
        let from = BoardSquare::new(4, 3).unwrap();
        let to = BoardSquare::new(4, 4).unwrap();
        assert_eq!(descriptive(&ChessMove::new(from, to), &rules), "e4e5");
    }

    #[test]
    fn test_encode_dispatch() {
        let rules = ShakmatyRules::new();
        let e4 = mv("e2e4");
        assert_eq!(encode(NotationScheme::Algebraic, &e4, &rules), "e4");
        assert_eq!(encode(NotationScheme::Fen, &e4, &rules), "e4");
        assert_eq!(encode(NotationScheme::Coordinate, &e4, &rules), "e2e4");
        assert_eq!(encode(NotationScheme::Iccf, &e4, &rules), "5254");
        assert_eq!(encode(NotationScheme::Descriptive, &e4, &rules), "P-K4");
        assert!(NotationScheme::Fen.records_position());
        assert!(!NotationScheme::Algebraic.records_position());
    }

    #[test]
    fn test_scheme_names_and_fallback() {
        for scheme in NotationScheme::ALL {
            assert_eq!(scheme.name().parse::<NotationScheme>(), Ok(scheme));
        }
        assert_eq!("ICCF".parse::<NotationScheme>(), Ok(NotationScheme::Iccf));
        assert!("klingon".parse::<NotationScheme>().is_err());

        let parsed: NotationScheme = serde_json::from_str("\"klingon\"").unwrap();
        assert_eq!(parsed, NotationScheme::Algebraic);
        let parsed: NotationScheme = serde_json::from_str("\"descriptive\"").unwrap();
        assert_eq!(parsed, NotationScheme::Descriptive);
    }
}
