//! Pointer types
//!
//! Positions are window pixels as `f32` so drag offsets and animation
//! interpolation share one coordinate type.

/// Pointer buttons the board reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Select, move and drag
    Primary,
    /// Markers and arrows
    Secondary,
    Middle,
}

/// A window position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation; `t` is expected in `0.0..=1.0`.
    pub fn lerp(self, other: PixelPos, t: f32) -> PixelPos {
        PixelPos {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Largest per-axis distance (Chebyshev distance).
    pub fn max_axis_distance(self, other: PixelPos) -> f32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}
