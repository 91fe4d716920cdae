//! Engine configuration and turn gating
//!
//! [`EngineSettings`] is derived once from [`GameSettings`] and handed to
//! the worker. [`should_skip_engine_request`] is polled every frame by the
//! controller to decide whether a search may be issued now.
//!
//! # Limits
//!
//! Each search is bounded twice, whichever hits first:
//!
//! | Setting           | UCI argument     | Default |
//! |-------------------|------------------|---------|
//! | `stockfish_depth` | `go depth N`     | 1       |
//! | `stockfish_time`  | `movetime M` ms  | 1 ms    |

use crate::core::GameSettings;
use shakmaty::Color;

/// How to start the engine and how long it may think.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Executable path
    pub path: String,
    /// `go depth` argument
    pub depth: u32,
    /// `go movetime` argument in milliseconds
    pub movetime_ms: u64,
}

impl EngineSettings {
    pub fn from_settings(settings: &GameSettings) -> Self {
        let millis = (f64::from(settings.stockfish_time) * 1000.0).max(0.0).round();
        Self {
            path: settings.stockfish_path.clone(),
            depth: settings.stockfish_depth,
            movetime_ms: millis as u64,
        }
    }

    /// The `go` command for one search.
    pub fn go_command(&self) -> String {
        format!("go depth {} movetime {}", self.depth, self.movetime_ms)
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::from_settings(&GameSettings::default())
    }
}

/// Everything that decides whether the engine may be asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineTurnContext {
    pub engine_side: Color,
    pub side_to_move: Color,
    pub game_over: bool,
    pub animating: bool,
    pub dragging: bool,
    /// A request is already outstanding
    pub pending: bool,
    /// A previous request failed and nothing has reset the turn since
    pub faulted: bool,
}

/// Returns `true` when no search should be started this frame.
pub fn should_skip_engine_request(ctx: &EngineTurnContext) -> bool {
    if ctx.pending || ctx.faulted {
        return true;
    }

    if ctx.game_over || ctx.animating || ctx.dragging {
        return true;
    }

    if ctx.side_to_move != ctx.engine_side {
        return true;
    }

    false
}
