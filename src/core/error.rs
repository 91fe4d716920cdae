//! Error types for core module
//!
//! Covers reading and writing the settings file. Callers at startup turn
//! these into warnings and fall back to defaults; they are never fatal.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type SettingsResult<T> = Result<T, SettingsError>;
