//! Engine bridge - the computer opponent
//!
//! Moves for the engine's side come from an external UCI engine process.
//! The bridge never blocks the frame loop:
//!
//! 1. At startup [`EngineWorker::start`] spawns the engine and completes the
//!    `uci`/`isready` handshake (failure here is fatal)
//! 2. On the engine's turn the controller calls [`MoveSource::request`]
//!    with the current FEN
//! 3. The worker thread runs `position fen` + `go` and waits for `bestmove`
//! 4. Each frame the controller calls [`MoveSource::poll`]; a reply is
//!    checked against the legal-move set before it is played
//!
//! # Module Structure
//!
//! - `resource` - [`EngineSettings`] and the per-frame turn gate
//! - `uci` - the blocking protocol client
//! - `process` - the child process
//! - `worker` - the thread and channels
//! - `error` - [`EngineError`]

pub mod error;
pub mod process;
pub mod resource;
pub mod uci;
pub mod worker;

// Re-export for convenience
pub use error::{EngineError, EngineResult};
pub use resource::{should_skip_engine_request, EngineSettings, EngineTurnContext};
pub use uci::{parse_best_move, UciClient};
pub use worker::{EngineReply, EngineWorker, MoveSource};
