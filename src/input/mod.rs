//! Input module - backend-neutral input events
//!
//! The windowing backend translates its native events into [`InputEvent`]
//! values once per frame; the controller consumes them in order.
//!
//! # Architecture
//!
//! - `pointer` - pointer buttons and pixel positions
//! - `keyboard` - key codes and the Ctrl-combos mapped to controller actions

pub mod keyboard;
pub mod pointer;

pub use keyboard::{Key, Shortcut};
pub use pointer::{PixelPos, PointerButton};

/// One input event with pixel coordinates relative to the window's top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: PixelPos, button: PointerButton },
    PointerUp { pos: PixelPos, button: PointerButton },
    PointerMotion { pos: PixelPos },
    KeyDown { key: Key, ctrl: bool },
    Resized { width: u32, height: u32 },
    Quit,
}

/// Source of input events, polled once per frame.
pub trait EventSource {
    /// Drains everything that arrived since the previous poll.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
