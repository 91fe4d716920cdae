//! Terminal front end
//!
//! # Commands
//!
//! | Input          | Events                                        |
//! |----------------|-----------------------------------------------|
//! | `e2e4`         | click on e2, click on e4 (promotion auto-picks) |
//! | `mark d4`      | secondary click on d4                         |
//! | `arrow g1f3`   | secondary press on g1, release on f3          |
//! | `undo`         | Ctrl+Z                                        |
//! | `reset`        | Ctrl+R                                        |
//! | `flip`         | Ctrl+M                                        |
//! | `quit`         | quit                                          |
//!
//! Stdin is read on its own thread so the frame loop never blocks on it.

use crate::game::types::{BoardSquare, ChessMove};
use crate::input::{EventSource, InputEvent, Key, PixelPos, PointerButton};
use crate::rendering::board::{BoardGeometry, BOARD_SIZE};
use crate::rendering::canvas::{Canvas, PixelRect, Rgb, Rgba, Stroke};
use crossbeam_channel::{unbounded, Receiver, TryRecvError};
use shakmaty::Piece;
use std::io::BufRead;
use tracing::warn;

/// Translates one command line into input events. Pixel positions are
/// square centres under `geometry`, so flipped boards work unchanged.
pub fn parse_command(line: &str, geometry: &BoardGeometry) -> Vec<InputEvent> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Vec::new();
    };
    let argument = words.next();
    let key = |key| vec![InputEvent::KeyDown { key, ctrl: true }];

    match (command.to_ascii_lowercase().as_str(), argument) {
        ("quit" | "exit", _) => vec![InputEvent::Quit],
        ("undo", _) => key(Key::Z),
        ("reset", _) => key(Key::R),
        ("flip", _) => key(Key::M),
        ("mark", Some(square)) => match square.parse::<BoardSquare>() {
            Ok(square) => click(geometry, square, PointerButton::Secondary),
            Err(e) => {
                warn!("[INPUT] {}", e);
                Vec::new()
            }
        },
        ("arrow", Some(text)) => match text.parse::<ChessMove>() {
            Ok(mv) => vec![
                InputEvent::PointerDown {
                    pos: geometry.square_center(mv.from),
                    button: PointerButton::Secondary,
                },
                InputEvent::PointerUp {
                    pos: geometry.square_center(mv.to),
                    button: PointerButton::Secondary,
                },
            ],
            Err(e) => {
                warn!("[INPUT] {}", e);
                Vec::new()
            }
        },
        (text, None) => match text.parse::<ChessMove>() {
            Ok(mv) => {
                let mut events = click(geometry, mv.from, PointerButton::Primary);
                events.extend(click(geometry, mv.to, PointerButton::Primary));
                events
            }
            Err(_) => {
                warn!("[INPUT] Unknown command {:?}", line.trim());
                Vec::new()
            }
        },
        _ => {
            warn!("[INPUT] Unknown command {:?}", line.trim());
            Vec::new()
        }
    }
}

fn click(geometry: &BoardGeometry, square: BoardSquare, button: PointerButton) -> Vec<InputEvent> {
    let pos = geometry.square_center(square);
    vec![
        InputEvent::PointerDown { pos, button },
        InputEvent::PointerUp { pos, button },
    ]
}

/// Stdin as an [`EventSource`].
pub struct ConsoleInput {
    lines: Receiver<String>,
    geometry: BoardGeometry,
}

impl ConsoleInput {
    /// Starts a thread reading stdin line by line.
    pub fn spawn() -> Self {
        let (tx, rx) = unbounded();
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self::from_receiver(rx)
    }

    pub fn from_receiver(lines: Receiver<String>) -> Self {
        Self {
            lines,
            geometry: BoardGeometry::default(),
        }
    }

    /// Keeps pixel translation in step with the controller's board.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = geometry;
    }
}

impl EventSource for ConsoleInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        loop {
            match self.lines.try_recv() {
                Ok(line) => events.extend(parse_command(&line, &self.geometry)),
                Err(TryRecvError::Empty) => break,
                // Stdin closed
                Err(TryRecvError::Disconnected) => {
                    events.push(InputEvent::Quit);
                    break;
                }
            }
        }
        events
    }
}

/// [`Canvas`] that keeps one character per square.
///
/// Opaque square fills blank a cell and piece blits write the piece letter
/// (uppercase White) into the cell under the image centre. Everything else
/// is ignored.
pub struct TextCanvas {
    geometry: BoardGeometry,
    cells: [[char; 8]; 8],
}

impl TextCanvas {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            cells: [['.'; 8]; 8],
        }
    }

    fn cell_at(&self, pos: PixelPos) -> Option<(usize, usize)> {
        let (sq_w, sq_h) = self.geometry.square_size();
        if pos.x < 0.0 || pos.y < 0.0 || sq_w <= 0.0 || sq_h <= 0.0 {
            return None;
        }
        let (col, row) = ((pos.x / sq_w) as usize, (pos.y / sq_h) as usize);
        (col < BOARD_SIZE as usize && row < BOARD_SIZE as usize).then_some((row, col))
    }

    /// Screen rows top to bottom with rank and file labels.
    pub fn to_text(&self) -> String {
        let flipped = self.geometry.flipped;
        let mut out = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            let rank = if flipped { row + 1 } else { 8 - row };
            out.push_str(&format!("{rank} "));
            for cell in cells {
                out.push(*cell);
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str("  ");
        let files: Vec<char> = if flipped {
            ('a'..='h').rev().collect()
        } else {
            ('a'..='h').collect()
        };
        for file in files {
            out.push(file);
            out.push(' ');
        }
        out.push('\n');
        out
    }
}

impl Canvas for TextCanvas {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        if color.alpha == u8::MAX {
            if let Some((row, col)) = self.cell_at(rect.center()) {
                self.cells[row][col] = '.';
            }
        }
    }

    fn blit_piece(&mut self, piece: Piece, rect: PixelRect) {
        if let Some((row, col)) = self.cell_at(rect.center()) {
            self.cells[row][col] = piece.char();
        }
    }

    fn blit_check_indicator(&mut self, _rect: PixelRect) {}

    fn draw_line(&mut self, _from: PixelPos, _to: PixelPos, _color: Rgb, _thickness: f32) {}

    fn draw_ellipse(&mut self, _rect: PixelRect, _color: Rgba, _stroke: Stroke) {}

    fn fill_polygon(&mut self, _points: &[PixelPos], _color: Rgb) {}
}

/// Tracks which engine fault was last reported so a new one is printed
/// once, whenever it appears, independent of board redraws.
#[derive(Debug, Default)]
pub struct FaultNotice {
    shown: Option<String>,
}

impl FaultNotice {
    /// Returns the line to print when `current` differs from what was last
    /// reported. A cleared fault prints nothing.
    pub fn update(&mut self, current: Option<&str>) -> Option<String> {
        if current == self.shown.as_deref() {
            return None;
        }
        self.shown = current.map(str::to_string);
        current.map(|fault| format!("Engine produced no move: {fault}"))
    }
}
