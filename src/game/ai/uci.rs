//! Line-oriented UCI client
//!
//! Only the handful of commands the controller needs:
//!
//! ```text
//! > uci              < ... uciok
//! > isready          < readyok
//! > position fen F
//! > go depth D movetime T
//!                    < ... bestmove e7e5 [ponder ...]
//! > quit
//! ```
//!
//! Every call blocks until the expected line arrives, so the client runs on
//! the engine worker thread, never the frame loop. Generic over the streams
//! so tests can drive it with in-memory buffers.

use super::error::{EngineError, EngineResult};
use super::resource::EngineSettings;
use crate::game::types::ChessMove;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

pub struct UciClient<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> UciClient<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// `uci` until `uciok`, then `isready` until `readyok`.
    pub fn handshake(&mut self) -> EngineResult<()> {
        self.send("uci")?;
        self.wait_for("uciok")?;
        self.send("isready")?;
        self.wait_for("readyok")?;
        debug!("[ENGINE] Handshake complete");
        Ok(())
    }

    /// Searches `fen` and returns the engine's choice. The move is not
    /// checked for legality here.
    pub fn best_move(&mut self, fen: &str, limits: &EngineSettings) -> EngineResult<ChessMove> {
        self.send(&format!("position fen {fen}"))?;
        self.send(&limits.go_command())?;
        loop {
            let line = self.read_line("bestmove")?;
            if line.starts_with("bestmove") {
                return parse_best_move(&line);
            }
        }
    }

    pub fn quit(&mut self) -> EngineResult<()> {
        self.send("quit")
    }

    /// Gives back the streams, mainly so tests can inspect what was written.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn send(&mut self, command: &str) -> EngineResult<()> {
        trace!("[ENGINE] > {}", command);
        writeln!(self.writer, "{command}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn wait_for(&mut self, token: &'static str) -> EngineResult<()> {
        loop {
            if self.read_line(token)?.contains(token) {
                return Ok(());
            }
        }
    }

    fn read_line(&mut self, expected: &'static str) -> EngineResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(EngineError::Closed { expected });
        }
        let line = line.trim_end().to_string();
        trace!("[ENGINE] < {}", line);
        Ok(line)
    }
}

/// Second token of a `bestmove` line as a coordinate move.
pub fn parse_best_move(line: &str) -> EngineResult<ChessMove> {
    line.split_whitespace()
        .nth(1)
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| EngineError::MalformedBestMove {
            line: line.to_string(),
        })
}
