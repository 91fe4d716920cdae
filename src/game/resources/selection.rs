//! Interaction state for tracking the selected piece and an armed drag

use crate::game::types::BoardSquare;
use crate::input::PixelPos;
use shakmaty::Piece;

/// Where a primary press landed on one of the mover's own pieces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressOrigin {
    pub square: BoardSquare,
    pub piece: Piece,
    /// Latest pointer position while the button is held
    pub pointer: PixelPos,
}

/// What the user is currently doing with their own pieces.
///
/// `Dragging` implies its origin square is selected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Selected(BoardSquare),
    Dragging(PressOrigin),
}

impl InteractionState {
    pub fn selected_square(&self) -> Option<BoardSquare> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Selected(square) => Some(*square),
            InteractionState::Dragging(origin) => Some(origin.square),
        }
    }

    pub fn drag(&self) -> Option<&PressOrigin> {
        match self {
            InteractionState::Dragging(origin) => Some(origin),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging(_))
    }

    pub fn clear(&mut self) {
        *self = InteractionState::Idle;
    }
}
