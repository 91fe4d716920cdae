//! Error types for the engine bridge
//!
//! Startup failures (spawn, handshake) are fatal to the application; a
//! failed search only means "no move produced" for that turn.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine executable could not be started
    #[error("Failed to start engine {path:?}: {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The child process was started without one of its stdio pipes
    #[error("Engine process has no {0} pipe")]
    MissingPipe(&'static str),

    /// Reading from or writing to the engine failed
    #[error("Engine I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine closed its output before sending the expected token
    #[error("Engine closed its output while waiting for {expected}")]
    Closed { expected: &'static str },

    /// `bestmove` line without a parseable move
    #[error("Malformed bestmove reply: {line:?}")]
    MalformedBestMove { line: String },

    /// The background worker exited
    #[error("Engine worker is no longer running")]
    WorkerDisconnected,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
