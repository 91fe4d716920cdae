//! Per-frame board drawing
//!
//! [`draw_frame`] paints one frame through a [`Canvas`], bottom layer
//! first:
//!
//! 1. Squares in the board theme's colours
//! 2. Last-move from/to highlight
//! 3. Check indicator under the king of the side to move
//! 4. Selection highlight
//! 5. Legal-move hints: a dot for quiet moves, a ring for captures
//! 6. Markers, then arrows
//! 7. Static pieces, minus whatever is animating or being dragged
//! 8. The animating piece at its interpolated position
//! 9. The dragged piece under the pointer

use super::board::BoardGeometry;
use super::canvas::{Canvas, PixelRect, Rgb, Stroke};
use crate::core::GameSettings;
use crate::game::animation::ActiveTween;
use crate::game::resources::{Annotations, Arrow, PressOrigin};
use crate::game::types::{BoardSnapshot, BoardSquare, ChessMove};
use crate::input::PixelPos;

/// Alpha of the selected-square fill.
const SELECTION_ALPHA: u8 = 128;
/// Alpha of move hints and the last-move highlight.
const HIGHLIGHT_ALPHA: u8 = 180;
/// Capture rings sit this many pixels inside the square.
const CAPTURE_RING_INSET: f32 = 3.0;
/// Capture rings are drawn brighter than quiet-move dots.
const CAPTURE_BRIGHTEN: f64 = 1.3;
/// Half-angle of the arrow head, in radians from the shaft direction.
const ARROW_HEAD_ANGLE: f32 = 2.5;

/// A legal destination of the selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveHint {
    pub square: BoardSquare,
    pub capture: bool,
}

/// Everything one frame needs, borrowed from the controller.
pub struct FrameView<'a> {
    pub settings: &'a GameSettings,
    pub geometry: &'a BoardGeometry,
    /// Current piece placement
    pub board: &'a BoardSnapshot,
    pub last_move: Option<ChessMove>,
    /// King square of the side to move when it is in check
    pub check_square: Option<BoardSquare>,
    pub selected: Option<BoardSquare>,
    pub hints: &'a [MoveHint],
    pub overlays: &'a Annotations,
    pub tween: Option<ActiveTween<'a>>,
    pub drag: Option<&'a PressOrigin>,
}

pub fn draw_frame(view: &FrameView<'_>, canvas: &mut dyn Canvas) {
    draw_squares(view, canvas);
    draw_highlights(view, canvas);
    draw_hints(view, canvas);
    draw_annotations(view, canvas);
    draw_pieces(view, canvas);
}

fn draw_squares(view: &FrameView<'_>, canvas: &mut dyn Canvas) {
    let (light, dark) = view.settings.board_theme.colors();
    for square in BoardSquare::all() {
        let color = if (square.file + square.rank) % 2 == 0 {
            dark
        } else {
            light
        };
        canvas.fill_rect(view.geometry.square_rect(square), color.into());
    }
}

fn draw_highlights(view: &FrameView<'_>, canvas: &mut dyn Canvas) {
    let settings = view.settings;
    if let Some(mv) = view.last_move {
        canvas.fill_rect(
            view.geometry.square_rect(mv.from),
            settings.last_move_from_color.with_alpha(HIGHLIGHT_ALPHA),
        );
        canvas.fill_rect(
            view.geometry.square_rect(mv.to),
            settings.last_move_to_color.with_alpha(HIGHLIGHT_ALPHA),
        );
    }
    if let Some(king) = view.check_square {
        canvas.blit_check_indicator(view.geometry.square_rect(king));
    }
    if let Some(selected) = view.selected {
        canvas.fill_rect(
            view.geometry.square_rect(selected),
            settings.circle_color.with_alpha(SELECTION_ALPHA),
        );
    }
}

fn draw_hints(view: &FrameView<'_>, canvas: &mut dyn Canvas) {
    let settings = view.settings;
    let (sq_w, sq_h) = view.geometry.square_size();
    let dot = 2.0 * settings.circle_radius_ratio * sq_w.min(sq_h);
    for hint in view.hints {
        let rect = view.geometry.square_rect(hint.square);
        if hint.capture {
            canvas.draw_ellipse(
                rect.inset(CAPTURE_RING_INSET),
                settings
                    .circle_color
                    .scaled(CAPTURE_BRIGHTEN)
                    .with_alpha(HIGHLIGHT_ALPHA),
                Stroke::Outline(settings.circle_thickness as f32),
            );
        } else {
            canvas.draw_ellipse(
                PixelRect::centered(rect.center(), dot, dot),
                settings.circle_color.with_alpha(HIGHLIGHT_ALPHA),
                Stroke::Filled,
            );
        }
    }
}

fn draw_annotations(view: &FrameView<'_>, canvas: &mut dyn Canvas) {
    let settings = view.settings;
    let (sq_w, sq_h) = view.geometry.square_size();
    let ratio = settings.marker_radius_ratio;
    for marker in &view.overlays.markers {
        let center = view.geometry.square_center(marker.square);
        canvas.draw_ellipse(
            PixelRect::centered(center, sq_w * ratio, sq_h * ratio),
            settings.marker_color.into(),
            Stroke::Outline(settings.marker_thickness as f32),
        );
    }

    let head = (sq_w + sq_h) / 2.0 / 3.0;
    for arrow in &view.overlays.arrows {
        draw_arrow(
            view.geometry,
            canvas,
            arrow,
            settings.arrow_color,
            settings.arrow_thickness as f32,
            head,
        );
    }
}

fn draw_arrow(
    geometry: &BoardGeometry,
    canvas: &mut dyn Canvas,
    arrow: &Arrow,
    color: Rgb,
    thickness: f32,
    head: f32,
) {
    let start = geometry.square_center(arrow.start);
    let end = geometry.square_center(arrow.end);
    canvas.draw_line(start, end, color, thickness);

    let angle = (end.y - start.y).atan2(end.x - start.x);
    let barb = |offset: f32| {
        PixelPos::new(
            end.x + head * (angle + offset).cos(),
            end.y + head * (angle + offset).sin(),
        )
    };
    canvas.fill_polygon(&[end, barb(ARROW_HEAD_ANGLE), barb(-ARROW_HEAD_ANGLE)], color);
}

fn draw_pieces(view: &FrameView<'_>, canvas: &mut dyn Canvas) {
    let geometry = view.geometry;
    let mut skip: Vec<BoardSquare> = view
        .tween
        .as_ref()
        .map(ActiveTween::skip_squares)
        .unwrap_or_default();
    if let Some(origin) = view.drag {
        skip.push(origin.square);
    }

    let board = view.tween.and_then(|t| t.snapshot).unwrap_or(view.board);
    for (square, piece) in board.pieces() {
        if skip.contains(&square) {
            continue;
        }
        canvas.blit_piece(piece, geometry.piece_rect_at(geometry.square_origin(square)));
    }

    if let Some(tween) = view.tween {
        let from = geometry.square_origin(tween.from);
        let to = geometry.square_origin(tween.to);
        let origin = from.lerp(to, tween.progress);
        canvas.blit_piece(tween.piece, geometry.piece_rect_at(origin));
    }

    if let Some(origin) = view.drag {
        let size = geometry.piece_rect_at(PixelPos::default());
        canvas.blit_piece(
            origin.piece,
            PixelRect::centered(origin.pointer, size.width, size.height),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::resources::Marker;
    use crate::rendering::canvas::Rgba;
    use shakmaty::{Color, Piece, Role};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Rect(PixelRect, Rgba),
        Piece(Piece, PixelRect),
        Check(PixelRect),
        Line,
        Ellipse(PixelRect, Rgba, Stroke),
        Polygon(usize),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
            self.calls.push(Call::Rect(rect, color));
        }
        fn blit_piece(&mut self, piece: Piece, rect: PixelRect) {
            self.calls.push(Call::Piece(piece, rect));
        }
        fn blit_check_indicator(&mut self, rect: PixelRect) {
            self.calls.push(Call::Check(rect));
        }
        fn draw_line(&mut self, _: PixelPos, _: PixelPos, _: Rgb, _: f32) {
            self.calls.push(Call::Line);
        }
        fn draw_ellipse(&mut self, rect: PixelRect, color: Rgba, stroke: Stroke) {
            self.calls.push(Call::Ellipse(rect, color, stroke));
        }
        fn fill_polygon(&mut self, points: &[PixelPos], _: Rgb) {
            self.calls.push(Call::Polygon(points.len()));
        }
    }

    fn sq(text: &str) -> BoardSquare {
        text.parse().unwrap()
    }

    fn white(role: Role) -> Piece {
        Piece {
            color: Color::White,
            role,
        }
    }

    fn view<'a>(
        settings: &'a GameSettings,
        geometry: &'a BoardGeometry,
        board: &'a BoardSnapshot,
        overlays: &'a Annotations,
    ) -> FrameView<'a> {
        FrameView {
            settings,
            geometry,
            board,
            last_move: None,
            check_square: None,
            selected: None,
            hints: &[],
            overlays,
            tween: None,
            drag: None,
        }
    }

    #[test]
    fn test_squares_use_theme_colours() {
        let settings = GameSettings::default();
        let geometry = BoardGeometry::default();
        let board = BoardSnapshot::empty();
        let overlays = Annotations::default();
        let mut canvas = Recorder::default();
        draw_frame(&view(&settings, &geometry, &board, &overlays), &mut canvas);

        assert_eq!(canvas.calls.len(), 64);
        let (light, dark) = settings.board_theme.colors();
        // a1 (first square drawn) is dark, b1 light.
        assert_eq!(
            canvas.calls[0],
            Call::Rect(geometry.square_rect(sq("a1")), dark.into())
        );
        assert_eq!(
            canvas.calls[1],
            Call::Rect(geometry.square_rect(sq("b1")), light.into())
        );
    }

    #[test]
    fn test_hints_dot_and_capture_ring() {
        let settings = GameSettings::default();
        let geometry = BoardGeometry::default();
        let board = BoardSnapshot::empty();
        let overlays = Annotations::default();
        let hints = [
            MoveHint {
                square: sq("e4"),
                capture: false,
            },
            MoveHint {
                square: sq("d5"),
                capture: true,
            },
        ];
        let dot = 2.0 * settings.circle_radius_ratio * 80.0;
        let mut frame = view(&settings, &geometry, &board, &overlays);
        frame.hints = &hints;
        let mut canvas = Recorder::default();
        draw_frame(&frame, &mut canvas);

        let ellipses: Vec<_> = canvas
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Ellipse(..)))
            .cloned()
            .collect();
        assert_eq!(
            ellipses,
            vec![
                Call::Ellipse(
                    PixelRect::centered(geometry.square_center(sq("e4")), dot, dot),
                    Rgb::new(70, 115, 80).with_alpha(180),
                    Stroke::Filled
                ),
                Call::Ellipse(
                    geometry.square_rect(sq("d5")).inset(3.0),
                    Rgb::new(91, 149, 104).with_alpha(180),
                    Stroke::Outline(4.0)
                ),
            ]
        );
    }

    #[test]
    fn test_single_tween_hides_destination_piece() {
        //! The moved piece already sits on its destination; only the
        //! interpolated copy is drawn.
        let settings = GameSettings::default();
        let geometry = BoardGeometry::default();
        let mut board = BoardSnapshot::empty();
        board.set(sq("e4"), Some(white(Role::Pawn)));
        board.set(sq("e1"), Some(white(Role::King)));
        let overlays = Annotations::default();

        let mut frame = view(&settings, &geometry, &board, &overlays);
        frame.tween = Some(ActiveTween {
            from: sq("e2"),
            to: sq("e4"),
            piece: white(Role::Pawn),
            progress: 0.5,
            snapshot: None,
        });
        let mut canvas = Recorder::default();
        draw_frame(&frame, &mut canvas);

        let pieces: Vec<_> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Piece(piece, rect) => Some((*piece, *rect)),
                _ => None,
            })
            .collect();
        let e3 = geometry.square_origin(sq("e3"));
        assert_eq!(
            pieces,
            vec![
                (
                    white(Role::King),
                    geometry.piece_rect_at(geometry.square_origin(sq("e1")))
                ),
                (white(Role::Pawn), geometry.piece_rect_at(e3)),
            ]
        );
    }

    #[test]
    fn test_chain_step_draws_from_snapshot() {
        //! A chain step renders its own snapshot, skipping just its squares;
        //! pieces of later steps stay put.
        let settings = GameSettings::default();
        let geometry = BoardGeometry::default();
        let current = BoardSnapshot::empty();
        let mut before = BoardSnapshot::empty();
        before.set(sq("e4"), Some(white(Role::Pawn)));
        before.set(sq("f3"), Some(white(Role::Knight)));
        let overlays = Annotations::default();

        let mut frame = view(&settings, &geometry, &current, &overlays);
        frame.tween = Some(ActiveTween {
            from: sq("f3"),
            to: sq("g1"),
            piece: white(Role::Knight),
            progress: 0.0,
            snapshot: Some(&before),
        });
        let mut canvas = Recorder::default();
        draw_frame(&frame, &mut canvas);

        let pieces: Vec<_> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Piece(piece, rect) => Some((*piece, *rect)),
                _ => None,
            })
            .collect();
        assert_eq!(pieces.len(), 2);
        assert_eq!(
            pieces[0],
            (
                white(Role::Pawn),
                geometry.piece_rect_at(geometry.square_origin(sq("e4")))
            )
        );
        assert_eq!(
            pieces[1],
            (
                white(Role::Knight),
                geometry.piece_rect_at(geometry.square_origin(sq("f3")))
            )
        );
    }

    #[test]
    fn test_overlays_and_check_drawn() {
        let settings = GameSettings::default();
        let geometry = BoardGeometry::default();
        let board = BoardSnapshot::empty();
        let overlays = Annotations {
            markers: vec![Marker { square: sq("d4") }],
            arrows: vec![Arrow {
                start: sq("g1"),
                end: sq("f3"),
            }],
            arrow_anchor: None,
        };
        let mut frame = view(&settings, &geometry, &board, &overlays);
        frame.check_square = Some(sq("e1"));
        let mut canvas = Recorder::default();
        draw_frame(&frame, &mut canvas);

        assert!(canvas
            .calls
            .contains(&Call::Check(geometry.square_rect(sq("e1")))));
        let marker = 80.0 * settings.marker_radius_ratio;
        assert!(canvas.calls.contains(&Call::Ellipse(
            PixelRect::centered(geometry.square_center(sq("d4")), marker, marker),
            Rgb::new(255, 0, 0).into(),
            Stroke::Outline(4.0)
        )));
        assert!(canvas.calls.contains(&Call::Line));
        assert!(canvas.calls.contains(&Call::Polygon(3)));
    }

    #[test]
    fn test_dragged_piece_follows_pointer() {
        let settings = GameSettings::default();
        let geometry = BoardGeometry::default();
        let mut board = BoardSnapshot::empty();
        board.set(sq("g1"), Some(white(Role::Knight)));
        let overlays = Annotations::default();
        let origin = PressOrigin {
            square: sq("g1"),
            piece: white(Role::Knight),
            pointer: PixelPos::new(300.0, 300.0),
        };
        let mut frame = view(&settings, &geometry, &board, &overlays);
        frame.drag = Some(&origin);
        let mut canvas = Recorder::default();
        draw_frame(&frame, &mut canvas);

        let pieces: Vec<_> = canvas
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Piece(..)))
            .cloned()
            .collect();
        assert_eq!(
            pieces,
            vec![Call::Piece(
                white(Role::Knight),
                PixelRect::new(264.0, 264.0, 72.0, 72.0)
            )]
        );
    }
}
