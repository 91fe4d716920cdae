//! Move history resource
//!
//! One record per ply applied since the last reset. Undo pops records in
//! pairs; the rendered log text travels with each record so the in-memory
//! move log always matches the position.

use crate::game::types::ChessMove;
use shakmaty::Color;

/// A move and how it was written in the configured notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLogEntry {
    pub mv: ChessMove,
    pub side: Color,
    pub text: String,
    /// Position after the move, only for the full-position scheme
    pub fen: Option<String>,
}

/// Moves applied since the last reset, oldest first.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    entries: Vec<MoveLogEntry>,
}

impl MoveHistory {
    pub fn push(&mut self, entry: MoveLogEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<MoveLogEntry> {
        self.entries.pop()
    }

    pub fn last_move(&self) -> Option<&MoveLogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Undo takes back a full move (engine reply and the human's move).
    pub fn can_undo(&self) -> bool {
        self.entries.len() >= 2
    }

    pub fn entries(&self) -> &[MoveLogEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
