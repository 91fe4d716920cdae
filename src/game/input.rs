//! Pointer interaction - selection, drag-and-drop, click-to-move, overlays
//!
//! The functions here turn pointer events into either a UI-only change of
//! [`InteractionState`] / [`Annotations`] or a [`MoveCommit`] for the
//! controller to apply. Legality always comes from the [`ChessRules`]
//! collaborator; nothing is applied here.
//!
//! # Primary button
//!
//! - Press on one of the mover's pieces arms a drag (or only selects while
//!   an animation is playing); pressing the selected square again deselects
//! - Press elsewhere with a selection tries the move, promoting to the
//!   first legal piece of queen, rook, bishop, knight. Click moves animate
//! - Release after a drag commits only when the pointer left the source
//!   square's centre by more than the drag threshold and a legal move to
//!   the release square exists. Drag moves do not animate
//!
//! # Secondary button
//!
//! Press drops a marker; releasing on another square adds an arrow.

use super::resources::{Annotations, InteractionState, PressOrigin};
use super::rules::ChessRules;
use super::types::ChessMove;
use crate::input::{PixelPos, PointerButton};
use crate::rendering::board::BoardGeometry;
use shakmaty::Color;
use tracing::debug;

/// Read-only view of what the input layer needs to know this frame.
pub struct InputContext<'a, R: ChessRules + ?Sized> {
    pub rules: &'a R,
    pub geometry: &'a BoardGeometry,
    pub human_side: Color,
    pub animating: bool,
    /// An engine search is outstanding
    pub engine_pending: bool,
}

impl<R: ChessRules + ?Sized> InputContext<'_, R> {
    /// The human may only touch pieces on their own turn while the engine
    /// is not thinking.
    fn human_may_move(&self) -> bool {
        !self.engine_pending && self.rules.side_to_move() == self.human_side
    }
}

/// A legal move chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommit {
    pub mv: ChessMove,
    /// Click moves slide; dropped pieces are already in place
    pub animate: bool,
}

pub fn pointer_down<R: ChessRules + ?Sized>(
    state: &mut InteractionState,
    overlays: &mut Annotations,
    ctx: &InputContext<'_, R>,
    pos: PixelPos,
    button: PointerButton,
) -> Option<MoveCommit> {
    match button {
        PointerButton::Primary => primary_down(state, overlays, ctx, pos),
        PointerButton::Secondary => {
            if let Some(square) = ctx.geometry.square_at(pos) {
                overlays.press(square);
                debug!("[INPUT] Marker on {}", square);
            }
            None
        }
        PointerButton::Middle => None,
    }
}

fn primary_down<R: ChessRules + ?Sized>(
    state: &mut InteractionState,
    overlays: &mut Annotations,
    ctx: &InputContext<'_, R>,
    pos: PixelPos,
) -> Option<MoveCommit> {
    overlays.clear();

    if !ctx.human_may_move() {
        return None;
    }
    let square = ctx.geometry.square_at(pos)?;
    let mover = ctx.rules.side_to_move();

    if let Some(piece) = ctx.rules.piece_at(square).filter(|p| p.color == mover) {
        if state.selected_square() == Some(square) {
            debug!("[INPUT] Deselected {}", square);
            state.clear();
        } else if ctx.animating {
            *state = InteractionState::Selected(square);
        } else {
            debug!("[INPUT] Drag armed on {}", square);
            *state = InteractionState::Dragging(PressOrigin {
                square,
                piece,
                pointer: pos,
            });
        }
        return None;
    }

    let from = state.selected_square()?;
    state.clear();
    match ctx.rules.find_legal(from, square) {
        Some(mv) => Some(MoveCommit { mv, animate: true }),
        None => {
            debug!("[INPUT] No legal move {}->{}", from, square);
            None
        }
    }
}

pub fn pointer_motion(state: &mut InteractionState, pos: PixelPos) {
    if let InteractionState::Dragging(origin) = state {
        origin.pointer = pos;
    }
}

pub fn pointer_up<R: ChessRules + ?Sized>(
    state: &mut InteractionState,
    overlays: &mut Annotations,
    ctx: &InputContext<'_, R>,
    pos: PixelPos,
    button: PointerButton,
) -> Option<MoveCommit> {
    match button {
        PointerButton::Primary => {
            let InteractionState::Dragging(origin) = *state else {
                return None;
            };
            let commit = drop_target(&origin, ctx, pos);
            *state = match commit {
                Some(_) => InteractionState::Idle,
                None => InteractionState::Selected(origin.square),
            };
            commit
        }
        PointerButton::Secondary => {
            if let Some(arrow) = overlays.release(ctx.geometry.square_at(pos)) {
                debug!("[INPUT] Arrow {}->{}", arrow.start, arrow.end);
            }
            None
        }
        PointerButton::Middle => None,
    }
}

fn drop_target<R: ChessRules + ?Sized>(
    origin: &PressOrigin,
    ctx: &InputContext<'_, R>,
    pos: PixelPos,
) -> Option<MoveCommit> {
    let center = ctx.geometry.square_center(origin.square);
    if pos.max_axis_distance(center) <= ctx.geometry.drag_threshold() {
        return None;
    }
    let target = ctx.geometry.square_at(pos)?;
    if target == origin.square {
        return None;
    }
    ctx.rules
        .find_legal(origin.square, target)
        .map(|mv| MoveCommit { mv, animate: false })
}
