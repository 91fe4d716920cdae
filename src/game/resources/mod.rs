//! Controller state owned by [`crate::game::controller::ChessController`]
//!
//! ## Player Interaction
//! - [`InteractionState`] - idle, selected, or dragging with a [`PressOrigin`]
//! - [`Annotations`] - [`Marker`]s and [`Arrow`]s drawn with the secondary button
//!
//! ## Game History
//! - [`MoveHistory`] - applied moves with their [`MoveLogEntry`] text
//!
//! Nothing here is global; the controller lends these to the input and
//! rendering functions by reference.

pub mod annotations;
pub mod history;
pub mod selection;

#[cfg(test)]
mod tests;

pub use annotations::{Annotations, Arrow, Marker};
pub use history::{MoveHistory, MoveLogEntry};
pub use selection::{InteractionState, PressOrigin};
