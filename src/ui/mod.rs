//! UI module - front ends that drive the controller
//!
//! - **console**: a terminal front end. Commands typed on stdin become
//!   [`crate::input::InputEvent`]s and each frame is drawn as an 8x8 text
//!   grid. Useful for playing a real engine without a window.

pub mod console;

// Re-export commonly used items
pub use console::{parse_command, ConsoleInput, FaultNotice, TextCanvas};
