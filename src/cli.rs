//! Command-line interface for offline_chess.

use clap::Parser;
use std::path::PathBuf;

/// Offline Chess - play a UCI engine from the terminal
#[derive(Parser, Debug)]
#[command(name = "offline_chess")]
#[command(about = "Chessboard controller driving a UCI engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `offline_chess=debug`. `RUST_LOG` wins
    /// when set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
