//! Chess game logic module - the controller and everything it drives
//!
//! Chess rules themselves live behind [`rules::ChessRules`]; this module
//! decides what the user and the engine are allowed to do with them and
//! when.
//!
//! # Module Organization
//!
//! - `types` - squares, moves and board snapshots
//! - `rules` - the rules boundary and its `shakmaty` implementation
//! - `notation` - move text in five schemes
//! - `resources` - interaction state, overlays and move history
//! - `input` - pointer events to selections and move commits
//! - `animation` - single slides and chained undo animation
//! - `ai` - the UCI engine bridge
//! - `controller` - [`ChessController`], the composition root
//!
//! # Frame Order
//!
//! 1. Input events (`ChessController::handle_event`)
//! 2. Animation tick, engine poll and request (`ChessController::update`)
//! 3. Drawing (`ChessController::render`)

pub mod ai;
pub mod animation;
pub mod controller;
pub mod error;
pub mod input;
pub mod notation;
pub mod resources;
pub mod rules;
pub mod types;

// Re-export the main entry points
pub use controller::ChessController;
pub use error::{GameError, GameResult};
pub use rules::{ChessRules, ShakmatyRules};
