//! Engine child process
//!
//! Spawns the engine with piped stdio and splits it into the [`Child`]
//! handle, which stays with the owner for termination, and a [`UciClient`]
//! over the pipes, which moves to the worker thread.

use super::error::{EngineError, EngineResult};
use super::uci::UciClient;
use std::io::BufReader;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tracing::{debug, info};

/// Client type speaking to a spawned engine.
pub type ProcessClient = UciClient<BufReader<ChildStdout>, ChildStdin>;

#[derive(Debug)]
pub struct EngineProcess {
    child: Child,
}

impl EngineProcess {
    pub fn spawn(path: &str) -> EngineResult<(Self, ProcessClient)> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| EngineError::Spawn {
                path: path.to_string(),
                source,
            })?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let mut process = Self { child };
        let (Some(stdin), Some(stdout)) = (stdin, stdout) else {
            process.kill();
            return Err(EngineError::MissingPipe("stdio"));
        };

        info!("[ENGINE] Started {} (pid {})", path, process.child.id());
        Ok((process, UciClient::new(BufReader::new(stdout), stdin)))
    }

    /// Kills the process and reaps it. Safe to call after it already exited.
    pub fn kill(&mut self) {
        if let Err(e) = self.child.kill() {
            debug!("[ENGINE] Kill: {}", e);
        }
        match self.child.wait() {
            Ok(status) => debug!("[ENGINE] Process exited: {}", status),
            Err(e) => debug!("[ENGINE] Wait: {}", e),
        }
    }
}
