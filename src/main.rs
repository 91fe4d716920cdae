//! Offline Chess - terminal front end
//!
//! Loads settings, starts the engine, then runs the controller at 60 Hz
//! with stdin commands as input and a text board as output.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use offline_chess::audio::SilentPlayer;
use offline_chess::core::{load_settings, settings_path};
use offline_chess::game::ai::{EngineSettings, EngineWorker};
use offline_chess::game::{ChessController, ChessRules, ShakmatyRules};
use offline_chess::input::{EventSource, InputEvent};
use offline_chess::ui::{ConsoleInput, FaultNotice, TextCanvas};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use web_time::Instant;

/// One frame at 60 Hz.
const FRAME: Duration = Duration::from_micros(16_667);

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("Invalid log filter")?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = settings_path(cli.config);
    let settings = load_settings(&path);

    let engine_settings = EngineSettings::from_settings(&settings);
    let engine = EngineWorker::start(&engine_settings)
        .with_context(|| format!("Failed to start engine {:?}", engine_settings.path))?;

    let mut controller = ChessController::new(
        settings,
        ShakmatyRules::new(),
        Box::new(engine),
        Box::new(SilentPlayer),
    );
    let mut input = ConsoleInput::spawn();

    info!("Commands: e2e4, mark d4, arrow g1f3, undo, reset, flip, quit");
    let mut shown: Option<String> = None;
    let mut faults = FaultNotice::default();

    while !controller.quit_requested() {
        let now = Instant::now();
        input.set_geometry(*controller.geometry());
        for event in input.poll_events() {
            controller.handle_event(event, now);
            if event == InputEvent::Quit {
                break;
            }
        }
        controller.update(now);

        let fen = controller.rules().to_fen();
        if !controller.animation().is_active() && shown.as_deref() != Some(fen.as_str()) {
            let mut canvas = TextCanvas::new(*controller.geometry());
            controller.render(&mut canvas, now);
            println!("{}", canvas.to_text());
            shown = Some(fen);
        }
        if let Some(line) = faults.update(controller.engine_fault()) {
            println!("{line}");
        }

        std::thread::sleep(FRAME);
    }

    controller.shutdown();
    Ok(())
}
