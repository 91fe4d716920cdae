//! Background engine worker
//!
//! The UCI exchange blocks until the engine answers, so it runs on its own
//! thread. The frame loop talks to it through two single-slot channels:
//! [`MoveSource::request`] hands over a FEN and [`MoveSource::poll`] picks
//! up the reply without blocking. At most one request is in flight.
//!
//! Replies carry the FEN they were computed for; the controller discards a
//! reply whose FEN no longer matches the board.

use super::error::{EngineError, EngineResult};
use super::process::EngineProcess;
use super::resource::EngineSettings;
use super::uci::UciClient;
use crate::game::types::ChessMove;
use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError, TrySendError};
use std::io::{BufRead, Write};
use std::thread::JoinHandle;
use tracing::{debug, error, info, warn};

/// Result of one search.
#[derive(Debug)]
pub struct EngineReply {
    /// Position the search was run on
    pub fen: String,
    pub result: EngineResult<ChessMove>,
}

/// Anything that can be asked for a move and answers later.
pub trait MoveSource {
    /// Starts a search on `fen`. Returns `false` if one is already in
    /// flight or the source has shut down.
    fn request(&mut self, fen: &str) -> bool;

    /// Takes the reply to the outstanding request if it has arrived.
    fn poll(&mut self) -> Option<EngineReply>;

    fn is_busy(&self) -> bool;

    /// Stops the source. Calling it again does nothing.
    fn shutdown(&mut self);
}

pub struct EngineWorker {
    requests: Option<Sender<String>>,
    replies: Receiver<EngineReply>,
    handle: Option<JoinHandle<()>>,
    process: Option<EngineProcess>,
    pending_fen: Option<String>,
}

impl EngineWorker {
    /// Spawns the engine, runs the handshake on this thread and starts the
    /// worker. Any failure here is fatal to the caller.
    pub fn start(settings: &EngineSettings) -> EngineResult<Self> {
        let (mut process, mut client) = EngineProcess::spawn(&settings.path)?;
        if let Err(e) = client.handshake() {
            process.kill();
            return Err(e);
        }
        Ok(Self::spawn(client, settings.clone(), Some(process)))
    }

    /// Starts the worker over an already-initialised client. `process`, when
    /// given, is killed on shutdown.
    pub fn spawn<R, W>(
        mut client: UciClient<R, W>,
        limits: EngineSettings,
        process: Option<EngineProcess>,
    ) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        let (request_tx, request_rx) = bounded::<String>(1);
        let (reply_tx, reply_rx) = bounded::<EngineReply>(1);

        let handle = std::thread::spawn(move || {
            for fen in request_rx.iter() {
                debug!("[ENGINE] Searching {}", fen);
                let result = client.best_move(&fen, &limits);
                if reply_tx.send(EngineReply { fen, result }).is_err() {
                    break;
                }
            }
            if let Err(e) = client.quit() {
                debug!("[ENGINE] quit not delivered: {}", e);
            }
        });

        Self {
            requests: Some(request_tx),
            replies: reply_rx,
            handle: Some(handle),
            process,
            pending_fen: None,
        }
    }
}

impl MoveSource for EngineWorker {
    fn request(&mut self, fen: &str) -> bool {
        if self.pending_fen.is_some() {
            return false;
        }
        let Some(requests) = &self.requests else {
            return false;
        };
        match requests.try_send(fen.to_string()) {
            Ok(()) => {
                self.pending_fen = Some(fen.to_string());
                true
            }
            Err(TrySendError::Full(_)) => {
                warn!("[ENGINE] Request slot full");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                error!("[ENGINE] Worker is gone, request dropped");
                false
            }
        }
    }

    fn poll(&mut self) -> Option<EngineReply> {
        self.pending_fen.as_ref()?;
        match self.replies.try_recv() {
            Ok(reply) => {
                self.pending_fen = None;
                Some(reply)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                let fen = self.pending_fen.take().unwrap_or_default();
                Some(EngineReply {
                    fen,
                    result: Err(EngineError::WorkerDisconnected),
                })
            }
        }
    }

    fn is_busy(&self) -> bool {
        self.pending_fen.is_some()
    }

    fn shutdown(&mut self) {
        let Some(requests) = self.requests.take() else {
            return;
        };
        drop(requests);

        // A search in flight keeps the worker blocked on the pipe. Killing
        // the engine usually closes it, but a grandchild can keep it open,
        // so the thread is left to finish on its own.
        if self.pending_fen.take().is_some() {
            if let Some(mut process) = self.process.take() {
                process.kill();
            }
            if self.handle.take().is_some() {
                debug!("[ENGINE] Detached worker with a search in flight");
            }
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("[ENGINE] Worker thread panicked");
            }
        }
        if let Some(mut process) = self.process.take() {
            process.kill();
        }
        info!("[ENGINE] Shut down");
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
