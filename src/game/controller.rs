//! The composition root - one chess game between a human and an engine
//!
//! [`ChessController`] owns the position, the history and every piece of UI
//! state, and drives them once per frame:
//!
//! ```text
//! events -> handle_event -> (move commit -> apply + maybe animate)
//! update -> animation tick -> engine poll / request
//! render -> draw_frame
//! ```
//!
//! Everything runs on the caller's thread. The only concurrency is behind
//! [`MoveSource`], which answers asynchronously and is polled here.

use super::ai::{should_skip_engine_request, EngineTurnContext, MoveSource};
use super::animation::{AnimationScheduler, AnimationStep};
use super::input::{self, InputContext, MoveCommit};
use super::notation;
use super::resources::{Annotations, InteractionState, MoveHistory, MoveLogEntry};
use super::rules::ChessRules;
use super::types::{side_name, ChessMove};
use crate::audio::{MoveOutcome, SoundPlayer};
use crate::core::{GameSettings, STANDARD_START_FEN};
use crate::input::{InputEvent, Shortcut};
use crate::rendering::board::BoardGeometry;
use crate::rendering::canvas::Canvas;
use crate::rendering::frame::{draw_frame, FrameView, MoveHint};
use shakmaty::Color;
use tracing::{debug, error, info, warn};
use web_time::Instant;

pub struct ChessController<R: ChessRules> {
    settings: GameSettings,
    rules: R,
    geometry: BoardGeometry,
    interaction: InteractionState,
    overlays: Annotations,
    animation: AnimationScheduler,
    history: MoveHistory,
    last_move: Option<ChessMove>,
    human_side: Color,
    engine: Box<dyn MoveSource>,
    sound: Box<dyn SoundPlayer>,
    /// Why the last engine request produced no move
    engine_fault: Option<String>,
    /// Bumped by undo, reset and flip; a reply is only used if its request
    /// was issued in the current generation.
    generation: u64,
    request_generation: Option<u64>,
    quit_requested: bool,
}

impl<R: ChessRules> ChessController<R> {
    /// Builds a controller on `settings.starting_fen`. The human plays White.
    pub fn new(
        settings: GameSettings,
        rules: R,
        engine: Box<dyn MoveSource>,
        sound: Box<dyn SoundPlayer>,
    ) -> Self {
        let animation = AnimationScheduler::new(settings.animation_duration());
        let mut controller = Self {
            settings,
            rules,
            geometry: BoardGeometry::default(),
            interaction: InteractionState::Idle,
            overlays: Annotations::default(),
            animation,
            history: MoveHistory::default(),
            last_move: None,
            human_side: Color::White,
            engine,
            sound,
            engine_fault: None,
            generation: 0,
            request_generation: None,
            quit_requested: false,
        };
        controller.load_starting_position();
        controller
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn overlays(&self) -> &Annotations {
        &self.overlays
    }

    pub fn animation(&self) -> &AnimationScheduler {
        &self.animation
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Log entries of the moves currently on the board, oldest first.
    pub fn move_log(&self) -> &[MoveLogEntry] {
        self.history.entries()
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.last_move
    }

    pub fn human_side(&self) -> Color {
        self.human_side
    }

    pub fn engine_side(&self) -> Color {
        !self.human_side
    }

    pub fn engine_fault(&self) -> Option<&str> {
        self.engine_fault.as_deref()
    }

    pub fn engine_busy(&self) -> bool {
        self.engine.is_busy()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn handle_event(&mut self, event: InputEvent, now: Instant) {
        // Field-level borrows leave `interaction` and `overlays` free.
        let ctx = InputContext {
            rules: &self.rules,
            geometry: &self.geometry,
            human_side: self.human_side,
            animating: self.animation.is_active(),
            engine_pending: self.engine.is_busy(),
        };
        let commit = match event {
            InputEvent::PointerDown { pos, button } => {
                input::pointer_down(&mut self.interaction, &mut self.overlays, &ctx, pos, button)
            }
            InputEvent::PointerUp { pos, button } => {
                input::pointer_up(&mut self.interaction, &mut self.overlays, &ctx, pos, button)
            }
            InputEvent::PointerMotion { pos } => {
                input::pointer_motion(&mut self.interaction, pos);
                None
            }
            InputEvent::KeyDown { key, ctrl } => {
                match Shortcut::from_key(key, ctrl) {
                    Some(Shortcut::Undo) => self.undo(now),
                    Some(Shortcut::Reset) => self.reset(),
                    Some(Shortcut::Flip) => self.flip(),
                    None => {}
                }
                None
            }
            InputEvent::Resized { width, height } => {
                self.geometry.resize(width, height);
                debug!(
                    "[INPUT] Resized to {}x{}",
                    self.geometry.width, self.geometry.height
                );
                None
            }
            InputEvent::Quit => {
                self.quit_requested = true;
                None
            }
        };

        if let Some(MoveCommit { mv, animate }) = commit {
            self.apply_move(mv, animate, now);
        }
    }

    /// Per-frame step: advance animation, collect the engine's reply and
    /// start a new search when it is the engine's turn.
    pub fn update(&mut self, now: Instant) {
        if let Some(event) = self.animation.tick(now) {
            debug!("[ANIM] {:?}", event);
        }
        self.poll_engine(now);
        self.request_engine_move();
    }

    fn poll_engine(&mut self, now: Instant) {
        let Some(reply) = self.engine.poll() else {
            return;
        };
        let requested = self.request_generation.take();
        if requested != Some(self.generation) || reply.fen != self.rules.to_fen() {
            debug!("[ENGINE] Discarding reply for an old position");
            return;
        }
        match reply.result {
            Ok(mv) if self.rules.is_legal(&mv) => {
                info!("[ENGINE] Best move {}", mv);
                self.apply_move(mv, true, now);
            }
            Ok(mv) => {
                warn!("[ENGINE] Engine proposed illegal move {}", mv);
                self.engine_fault = Some(format!("illegal engine move {mv}"));
            }
            Err(e) => {
                error!("[ENGINE] No move produced: {}", e);
                self.engine_fault = Some(e.to_string());
            }
        }
    }

    fn request_engine_move(&mut self) {
        let ctx = EngineTurnContext {
            engine_side: self.engine_side(),
            side_to_move: self.rules.side_to_move(),
            game_over: self.rules.is_game_over(),
            animating: self.animation.is_active(),
            dragging: self.interaction.is_dragging(),
            pending: self.engine.is_busy(),
            faulted: self.engine_fault.is_some(),
        };
        if should_skip_engine_request(&ctx) {
            return;
        }

        let fen = self.rules.to_fen();
        if self.engine.request(&fen) {
            self.request_generation = Some(self.generation);
            info!("[ENGINE] Thinking ({})", side_name(ctx.engine_side));
        } else {
            self.engine_fault = Some("engine refused the request".to_string());
        }
    }

    /// Applies a legal move: notation, history, last-move highlight, sound,
    /// and a slide animation when `animate` is set.
    fn apply_move(&mut self, mv: ChessMove, animate: bool, now: Instant) {
        let Some(piece) = self.rules.piece_at(mv.from) else {
            warn!("[GAME] No piece on {} for {}", mv.from, mv);
            return;
        };
        let side = self.rules.side_to_move();
        let scheme = self.settings.notation_scheme;
        let text = notation::encode(scheme, &mv, &self.rules);
        let capture = self.rules.is_capture(&mv);
        let castle = self.rules.is_castling(&mv);

        if let Err(e) = self.rules.apply(&mv) {
            warn!("[GAME] {}", e);
            return;
        }

        let fen = scheme.records_position().then(|| self.rules.to_fen());
        info!("[GAME] {}: {}", side_name(side), text);
        if let Some(fen) = &fen {
            info!("[GAME] FEN: {}", fen);
        }
        self.history.push(MoveLogEntry {
            mv,
            side,
            text,
            fen,
        });
        self.last_move = Some(mv);

        if animate {
            self.animation.start_single(mv.from, mv.to, piece, now);
        }

        let outcome = MoveOutcome {
            capture,
            castle,
            promotion: mv.promotion.is_some(),
            check: self.rules.is_check(),
            checkmate: self.rules.is_checkmate(),
        };
        if self.settings.play_sounds {
            self.sound.play(outcome.sound());
        }
        if self.rules.is_game_over() {
            info!("[GAME] Game over");
        }
    }

    /// Takes back the last full move (two plies) and animates both pieces
    /// back, most recent first. Needs two plies of history and no animation.
    pub fn undo(&mut self, now: Instant) {
        if !self.history.can_undo() || self.animation.is_active() {
            debug!("[GAME] Undo ignored");
            return;
        }

        let mut steps = Vec::with_capacity(2);
        for _ in 0..2 {
            let snapshot_before = self.rules.snapshot();
            let Some(entry) = self.history.pop() else {
                break;
            };
            let piece = self.rules.piece_at(entry.mv.to);
            if self.rules.undo_last().is_none() {
                warn!("[GAME] Rules have no move left to take back");
                break;
            }
            if let Some(piece) = piece {
                steps.push(AnimationStep {
                    start_square: entry.mv.to,
                    end_square: entry.mv.from,
                    piece,
                    start_time: now,
                    snapshot_before,
                });
            }
        }

        self.animation.start_chain(steps, now);
        self.last_move = None;
        self.interaction.clear();
        self.engine_fault = None;
        self.generation += 1;
        info!("[GAME] Undo, {} plies remain", self.history.len());
    }

    /// Back to the starting position with all transient state cleared.
    pub fn reset(&mut self) {
        self.load_starting_position();
        self.history.clear();
        self.last_move = None;
        self.interaction.clear();
        self.overlays.clear();
        self.animation.clear();
        self.engine_fault = None;
        self.generation += 1;
        info!("[GAME] Reset");
    }

    /// Turns the board around and swaps sides, then resets.
    pub fn flip(&mut self) {
        self.geometry.flipped = !self.geometry.flipped;
        self.human_side = !self.human_side;
        info!("[GAME] Human now plays {}", side_name(self.human_side));
        self.reset();
    }

    fn load_starting_position(&mut self) {
        if let Err(e) = self.rules.set_fen(&self.settings.starting_fen) {
            warn!("[SETTINGS] {}. Using the standard start position.", e);
            if let Err(e) = self.rules.set_fen(STANDARD_START_FEN) {
                error!("[GAME] {}", e);
            }
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas, now: Instant) {
        let board = self.rules.snapshot();
        let selected = self.interaction.selected_square();
        let hints: Vec<MoveHint> = selected
            .map(|from| {
                self.rules
                    .legal_targets(from)
                    .into_iter()
                    .map(|square| MoveHint {
                        square,
                        capture: self
                            .rules
                            .find_legal(from, square)
                            .is_some_and(|mv| self.rules.is_capture(&mv)),
                    })
                    .collect()
            })
            .unwrap_or_default();
        let check_square = if self.rules.is_check() {
            self.rules.king_square(self.rules.side_to_move())
        } else {
            None
        };

        let view = FrameView {
            settings: &self.settings,
            geometry: &self.geometry,
            board: &board,
            last_move: self.last_move,
            check_square,
            selected,
            hints: &hints,
            overlays: &self.overlays,
            tween: self.animation.current(now),
            drag: self.interaction.drag(),
        };
        draw_frame(&view, canvas);
    }

    /// Stops the engine. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }
}
