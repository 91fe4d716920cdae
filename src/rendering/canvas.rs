//! Drawing backend interface
//!
//! The controller never talks to a graphics API. It describes each frame as
//! a sequence of [`Canvas`] calls: filled rectangles, piece blits, lines,
//! ellipses and polygons in window pixels.

use crate::input::PixelPos;
use serde::{Deserialize, Serialize};
use shakmaty::Piece;

/// Opaque RGB colour, stored in settings as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn with_alpha(self, alpha: u8) -> Rgba {
        Rgba { rgb: self, alpha }
    }

    /// Every channel multiplied by `factor`, clamped to 255.
    pub fn scaled(self, factor: f64) -> Rgb {
        let [r, g, b] = self.0;
        let scale = |c: u8| (f64::from(c) * factor).min(255.0) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    }
}

/// RGB plus alpha (0 transparent, 255 opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: u8,
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(255)
    }
}

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> PixelPos {
        PixelPos::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Rectangle of `width` x `height` centred on `center`.
    pub fn centered(center: PixelPos, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Shrinks every edge by `by` pixels.
    pub fn inset(&self, by: f32) -> Self {
        Self::new(
            self.x + by,
            self.y + by,
            (self.width - 2.0 * by).max(0.0),
            (self.height - 2.0 * by).max(0.0),
        )
    }
}

/// How an ellipse is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Filled,
    Outline(f32),
}

/// Rendering backend.
pub trait Canvas {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba);

    /// Draws the piece image scaled into `rect`.
    fn blit_piece(&mut self, piece: Piece, rect: PixelRect);

    /// Draws the check indicator image scaled into `rect`.
    fn blit_check_indicator(&mut self, rect: PixelRect);

    fn draw_line(&mut self, from: PixelPos, to: PixelPos, color: Rgb, thickness: f32);

    fn draw_ellipse(&mut self, rect: PixelRect, color: Rgba, stroke: Stroke);

    fn fill_polygon(&mut self, points: &[PixelPos], color: Rgb);
}
