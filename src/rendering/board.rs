//! Board geometry - mapping between squares and window pixels
//!
//! The board fills the whole window and may be rectangular: each square is
//! `width / 8` by `height / 8` pixels (integer division). Rank 8 is at the
//! top unless the board is flipped, in which case both axes are mirrored.

use super::canvas::PixelRect;
use crate::game::types::BoardSquare;
use crate::input::PixelPos;

/// Squares per side.
pub const BOARD_SIZE: u32 = 8;

/// Default window edge: 80 px squares.
pub const DEFAULT_WINDOW_SIZE: u32 = 80 * BOARD_SIZE;

/// Resizes never shrink the window below this edge.
pub const MIN_WINDOW_SIZE: u32 = 320;

/// Window size and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub width: u32,
    pub height: u32,
    pub flipped: bool,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_SIZE)
    }
}

impl BoardGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            flipped: false,
        }
    }

    /// Applies a window resize, clamping each edge to [`MIN_WINDOW_SIZE`].
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(MIN_WINDOW_SIZE);
        self.height = height.max(MIN_WINDOW_SIZE);
    }

    /// `(square_width, square_height)` in pixels.
    pub fn square_size(&self) -> (f32, f32) {
        (
            (self.width / BOARD_SIZE) as f32,
            (self.height / BOARD_SIZE) as f32,
        )
    }

    /// Pointer displacement a drag must exceed before it counts as a move:
    /// a quarter of the square's shorter side.
    pub fn drag_threshold(&self) -> f32 {
        let (w, h) = self.square_size();
        (w.min(h) / 4.0).floor()
    }

    /// Square under a window position, `None` outside the board.
    pub fn square_at(&self, pos: PixelPos) -> Option<BoardSquare> {
        let (sq_w, sq_h) = self.square_size();
        if pos.x < 0.0 || pos.y < 0.0 || sq_w <= 0.0 || sq_h <= 0.0 {
            return None;
        }
        let column = (pos.x / sq_w).floor() as u32;
        let row = (pos.y / sq_h).floor() as u32;
        if column >= BOARD_SIZE || row >= BOARD_SIZE {
            return None;
        }
        let (file, rank) = (column as u8, 7 - row as u8);
        if self.flipped {
            BoardSquare::new(7 - file, 7 - rank)
        } else {
            BoardSquare::new(file, rank)
        }
    }

    /// Top-left pixel of a square.
    pub fn square_origin(&self, square: BoardSquare) -> PixelPos {
        let (file, rank) = if self.flipped {
            (7 - square.file, 7 - square.rank)
        } else {
            (square.file, square.rank)
        };
        let (sq_w, sq_h) = self.square_size();
        PixelPos::new(f32::from(file) * sq_w, f32::from(7 - rank) * sq_h)
    }

    pub fn square_rect(&self, square: BoardSquare) -> PixelRect {
        let origin = self.square_origin(square);
        let (sq_w, sq_h) = self.square_size();
        PixelRect::new(origin.x, origin.y, sq_w, sq_h)
    }

    pub fn square_center(&self, square: BoardSquare) -> PixelPos {
        self.square_rect(square).center()
    }

    /// Piece images take 90% of the square, centred.
    pub fn piece_rect_at(&self, origin: PixelPos) -> PixelRect {
        let (sq_w, sq_h) = self.square_size();
        let (w, h) = (
            (sq_w as u32 * 9 / 10) as f32,
            (sq_h as u32 * 9 / 10) as f32,
        );
        PixelRect::new(
            origin.x + ((sq_w - w) / 2.0).floor(),
            origin.y + ((sq_h - h) / 2.0).floor(),
            w,
            h,
        )
    }
}
