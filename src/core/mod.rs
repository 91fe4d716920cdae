//! Core module - application settings and their persistence
//!
//! - [`GameSettings`] - user preferences: engine, colours, theme, notation
//! - [`settings_persistence`] - JSON load/save with default fallbacks
//! - [`error`] - [`SettingsError`] and the [`SettingsResult`] alias

pub mod error;
pub mod resources;
pub mod settings_persistence;

// Re-export commonly used items
pub use error::{SettingsError, SettingsResult};
pub use resources::*;
pub use settings_persistence::{load_settings, save_settings, settings_path};
