//! Rendering module - 2D board drawing through a backend-neutral canvas
//!
//! # Architecture
//!
//! - `canvas` - the [`Canvas`] trait and colour/rectangle types
//! - `board` - [`BoardGeometry`]: squares to pixels and back, flip, resize
//! - `frame` - [`draw_frame`]: the layer order of one frame
//!
//! Image decoding and the actual pixel work belong to whatever implements
//! [`Canvas`]; this module only decides what goes where.

pub mod board;
pub mod canvas;
pub mod frame;

// Re-export commonly used items
pub use board::BoardGeometry;
pub use canvas::{Canvas, PixelRect, Rgb, Rgba, Stroke};
pub use frame::{draw_frame, FrameView, MoveHint};
