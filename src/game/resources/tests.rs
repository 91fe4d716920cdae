//! Resource module unit tests
//!
//! Pure data structure tests for the interaction state, overlays and history.

use super::*;
use crate::game::types::{BoardSquare, ChessMove};
use crate::input::PixelPos;
use shakmaty::{Color, Piece, Role};

fn sq(text: &str) -> BoardSquare {
    text.parse().unwrap()
}

fn entry(mv: &str, side: Color) -> MoveLogEntry {
    MoveLogEntry {
        mv: mv.parse::<ChessMove>().unwrap(),
        side,
        text: mv.to_string(),
        fen: None,
    }
}

// ============================================================================
// InteractionState Tests
// ============================================================================

#[test]
fn test_interaction_default_is_idle() {
    let state = InteractionState::default();
    assert_eq!(state, InteractionState::Idle);
    assert_eq!(state.selected_square(), None);
    assert!(!state.is_dragging());
}

#[test]
fn test_dragging_implies_selected() {
    //! A drag keeps its origin square selected so hints stay visible.
    let state = InteractionState::Dragging(PressOrigin {
        square: sq("e2"),
        piece: Piece {
            color: Color::White,
            role: Role::Pawn,
        },
        pointer: PixelPos::new(330.0, 530.0),
    });
    assert_eq!(state.selected_square(), Some(sq("e2")));
    assert!(state.is_dragging());
    assert_eq!(state.drag().map(|o| o.pointer), Some(PixelPos::new(330.0, 530.0)));

    let mut state = state;
    state.clear();
    assert_eq!(state, InteractionState::Idle);
}

// ============================================================================
// Annotations Tests
// ============================================================================

#[test]
fn test_secondary_release_on_same_square_keeps_marker_only() {
    let mut overlays = Annotations::default();
    overlays.press(sq("d4"));
    assert_eq!(overlays.release(Some(sq("d4"))), None);
    assert_eq!(overlays.markers, vec![Marker { square: sq("d4") }]);
    assert!(overlays.arrows.is_empty());
}

#[test]
fn test_secondary_release_elsewhere_adds_arrow() {
    //! Dragging with the secondary button draws an arrow from the press
    //! square; the marker dropped by the press remains.
    let mut overlays = Annotations::default();
    overlays.press(sq("g1"));
    let arrow = overlays.release(Some(sq("f3")));
    assert_eq!(
        arrow,
        Some(Arrow {
            start: sq("g1"),
            end: sq("f3")
        })
    );
    assert_eq!(overlays.arrows.len(), 1);
    assert_eq!(overlays.markers.len(), 1);

    // Release without a preceding press does nothing.
    assert_eq!(overlays.release(Some(sq("a1"))), None);
}

#[test]
fn test_annotations_clear() {
    let mut overlays = Annotations::default();
    overlays.press(sq("a1"));
    overlays.release(Some(sq("h8")));
    assert!(!overlays.is_empty());
    overlays.clear();
    assert!(overlays.is_empty());
    assert_eq!(overlays.arrow_anchor, None);
}

// ============================================================================
// MoveHistory Tests
// ============================================================================

#[test]
fn test_history_undo_guard() {
    //! Undo needs a full move, so a single ply is not enough.
    let mut history = MoveHistory::default();
    assert!(!history.can_undo());

    history.push(entry("e2e4", Color::White));
    assert!(!history.can_undo());

    history.push(entry("e7e5", Color::Black));
    assert!(history.can_undo());
    assert_eq!(history.len(), 2);
    assert_eq!(history.last_move().map(|e| e.text.as_str()), Some("e7e5"));

    assert_eq!(history.pop().map(|e| e.side), Some(Color::Black));
    assert_eq!(history.len(), 1);
    history.clear();
    assert!(history.is_empty());
}
