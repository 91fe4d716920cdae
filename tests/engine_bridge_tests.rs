//! Integration tests for the UCI engine bridge
//!
//! The protocol client is exercised over in-memory streams; the worker is
//! exercised both over those streams and, on Unix, against a small shell
//! script that speaks just enough UCI.

use offline_chess::game::ai::{
    EngineError, EngineSettings, EngineWorker, MoveSource, UciClient,
};
use std::io::Cursor;
use std::time::{Duration, Instant};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

fn limits() -> EngineSettings {
    EngineSettings {
        path: "unused".to_string(),
        depth: 3,
        movetime_ms: 50,
    }
}

fn client(script: &str) -> UciClient<Cursor<Vec<u8>>, Vec<u8>> {
    UciClient::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

/// Polls until a reply arrives or the deadline passes.
fn wait_for_reply(worker: &mut EngineWorker) -> Option<offline_chess::game::ai::EngineReply> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(reply) = worker.poll() {
            return Some(reply);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    None
}

// ============================================================================
// Protocol client
// ============================================================================

#[test]
fn test_handshake_waits_for_tokens() {
    let mut uci = client("id name Stub\noption name Hash\nuciok\nreadyok\n");
    uci.handshake().unwrap();
    let (_, written) = uci.into_inner();
    assert_eq!(String::from_utf8(written).unwrap(), "uci\nisready\n");
}

#[test]
fn test_handshake_eof_is_an_error() {
    //! An engine that exits before `uciok` must fail startup.
    let mut uci = client("id name Stub\n");
    assert!(matches!(
        uci.handshake(),
        Err(EngineError::Closed { expected: "uciok" })
    ));

    let mut uci = client("uciok\n");
    assert!(matches!(
        uci.handshake(),
        Err(EngineError::Closed { expected: "readyok" })
    ));
}

#[test]
fn test_best_move_decodes_reply() {
    //! `bestmove e7e5` decodes to e7 -> e5 without promotion.
    let mut uci = client("info depth 1 score cp 20\nbestmove e7e5 ponder g1f3\n");
    let mv = uci.best_move(AFTER_E4, &limits()).unwrap();
    assert_eq!(mv.from.to_string(), "e7");
    assert_eq!(mv.to.to_string(), "e5");
    assert_eq!(mv.promotion, None);

    let (_, written) = uci.into_inner();
    assert_eq!(
        String::from_utf8(written).unwrap(),
        format!("position fen {AFTER_E4}\ngo depth 3 movetime 50\n")
    );
}

#[test]
fn test_best_move_failures() {
    let mut uci = client("bestmove\n");
    assert!(matches!(
        uci.best_move(START_FEN, &limits()),
        Err(EngineError::MalformedBestMove { .. })
    ));

    let mut uci = client("info string thinking\n");
    assert!(matches!(
        uci.best_move(START_FEN, &limits()),
        Err(EngineError::Closed {
            expected: "bestmove"
        })
    ));
}

// ============================================================================
// Worker
// ============================================================================

#[test]
fn test_worker_round_trip_over_streams() {
    let mut worker = EngineWorker::spawn(client("bestmove e7e5\n"), limits(), None);
    assert!(!worker.is_busy());
    assert!(worker.request(AFTER_E4));
    assert!(worker.is_busy());
    assert!(!worker.request(AFTER_E4), "one request at a time");

    let reply = wait_for_reply(&mut worker).expect("reply");
    assert_eq!(reply.fen, AFTER_E4);
    assert_eq!(reply.result.unwrap().to_string(), "e7e5");
    assert!(!worker.is_busy());

    worker.shutdown();
    worker.shutdown();
    assert!(!worker.request(START_FEN));
}

#[test]
fn test_worker_reports_failed_search() {
    let mut worker = EngineWorker::spawn(client(""), limits(), None);
    assert!(worker.request(START_FEN));
    let reply = wait_for_reply(&mut worker).expect("reply");
    assert!(matches!(reply.result, Err(EngineError::Closed { .. })));
}

#[test]
fn test_missing_engine_fails_to_start() {
    let settings = EngineSettings {
        path: "/nonexistent/engine-binary".to_string(),
        ..limits()
    };
    assert!(matches!(
        EngineWorker::start(&settings),
        Err(EngineError::Spawn { .. })
    ));
}

#[cfg(unix)]
mod scripted_process {
    use super::*;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    const STUB_ENGINE: &str = r#"#!/bin/sh
while read -r line; do
  case "$line" in
    uci) echo "id name stub"; echo "uciok" ;;
    isready) echo "readyok" ;;
    go*) echo "info depth 1"; echo "bestmove e7e5" ;;
    quit) exit 0 ;;
  esac
done
"#;

    const SILENT_ENGINE: &str = "#!/bin/sh\nexit 0\n";

    /// Searches in a child process that inherits stdout, so killing the
    /// script itself does not close the pipe.
    const STUCK_ENGINE: &str = r#"#!/bin/sh
while read -r line; do
  case "$line" in
    uci) echo "uciok" ;;
    isready) echo "readyok" ;;
    go*) sleep 30 ;;
  esac
done
"#;

    fn write_script(dir: &tempfile::TempDir, body: &str) -> String {
        let path = dir.path().join("engine.sh");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        drop(file);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_process_engine_answers() {
        let dir = tempfile::tempdir().unwrap();
        let settings = EngineSettings {
            path: write_script(&dir, STUB_ENGINE),
            ..limits()
        };
        let mut worker = EngineWorker::start(&settings).unwrap();
        assert!(worker.request(AFTER_E4));
        let reply = wait_for_reply(&mut worker).expect("reply");
        assert_eq!(reply.result.unwrap().to_string(), "e7e5");
        worker.shutdown();
    }

    #[test]
    fn test_process_exit_before_handshake_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let settings = EngineSettings {
            path: write_script(&dir, SILENT_ENGINE),
            ..limits()
        };
        assert!(EngineWorker::start(&settings).is_err());
    }

    #[test]
    fn test_shutdown_with_search_in_flight_returns() {
        //! The engine never answers and its pipe stays open after the kill;
        //! shutdown must still return, and a second call is a no-op.
        let dir = tempfile::tempdir().unwrap();
        let settings = EngineSettings {
            path: write_script(&dir, STUCK_ENGINE),
            ..limits()
        };
        let mut worker = EngineWorker::start(&settings).unwrap();
        assert!(worker.request(START_FEN));
        std::thread::sleep(Duration::from_millis(50));
        assert!(worker.poll().is_none());

        let started = Instant::now();
        worker.shutdown();
        worker.shutdown();
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(!worker.is_busy());
        assert!(!worker.request(START_FEN));
    }
}
