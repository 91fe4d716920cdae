//! Move animation scheduling
//!
//! Two modes share one scheduler:
//!
//! - **Single**: one piece slides from its start to its end square. The move
//!   has already been applied to the position, so the renderer hides the
//!   piece on the end square until the slide finishes.
//! - **Chain**: an ordered list of [`AnimationStep`]s played back to back
//!   (undo). Each step carries the piece placement from just before it, and
//!   the next step starts on the tick where the previous one completes.
//!
//! Progress is linear in wall time and clamped to `0.0..=1.0`. The clock is
//! passed in by the caller so the scheduler stays deterministic under test.

use crate::game::types::{BoardSnapshot, BoardSquare};
use shakmaty::Piece;
use std::time::Duration;
use web_time::Instant;

/// One leg of a chained animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationStep {
    pub start_square: BoardSquare,
    pub end_square: BoardSquare,
    pub piece: Piece,
    pub start_time: Instant,
    /// Piece placement drawn underneath this step
    pub snapshot_before: BoardSnapshot,
}

#[derive(Debug, Clone, PartialEq)]
struct Tween {
    from: BoardSquare,
    to: BoardSquare,
    piece: Piece,
    start: Instant,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum AnimationMode {
    #[default]
    Idle,
    Single(Tween),
    Chain {
        steps: Vec<AnimationStep>,
        cursor: usize,
    },
}

/// Reported by [`AnimationScheduler::tick`] when something finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    SingleFinished { to: BoardSquare },
    StepFinished { index: usize, last: bool },
}

/// The piece in flight this frame and what the renderer should draw under it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTween<'a> {
    pub from: BoardSquare,
    pub to: BoardSquare,
    pub piece: Piece,
    pub progress: f32,
    /// Chain steps draw the board from their own snapshot
    pub snapshot: Option<&'a BoardSnapshot>,
}

impl ActiveTween<'_> {
    /// Squares whose static piece must not be drawn this frame.
    pub fn skip_squares(&self) -> Vec<BoardSquare> {
        match self.snapshot {
            Some(_) => vec![self.from, self.to],
            None => vec![self.to],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnimationScheduler {
    duration: Duration,
    mode: AnimationMode,
}

impl AnimationScheduler {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            mode: AnimationMode::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.mode, AnimationMode::Idle)
    }

    pub fn is_chain(&self) -> bool {
        matches!(self.mode, AnimationMode::Chain { .. })
    }

    /// Starts a single slide, replacing whatever was playing.
    pub fn start_single(&mut self, from: BoardSquare, to: BoardSquare, piece: Piece, now: Instant) {
        tracing::debug!("[ANIM] {} {}->{}", piece.char(), from, to);
        self.mode = AnimationMode::Single(Tween {
            from,
            to,
            piece,
            start: now,
        });
    }

    /// Starts a chain; the first step begins at `now`. An empty chain
    /// leaves the scheduler idle.
    pub fn start_chain(&mut self, mut steps: Vec<AnimationStep>, now: Instant) {
        let Some(first) = steps.first_mut() else {
            self.mode = AnimationMode::Idle;
            return;
        };
        first.start_time = now;
        tracing::debug!("[ANIM] Chain of {} steps", steps.len());
        self.mode = AnimationMode::Chain { steps, cursor: 0 };
    }

    pub fn clear(&mut self) {
        self.mode = AnimationMode::Idle;
    }

    /// Fraction of the animation that has elapsed between `start` and `now`.
    pub fn progress(&self, start: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    /// Advances the animation. At most one step completes per call; the
    /// following step starts at `now`.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationEvent> {
        let duration = self.duration;
        let finished = |start: Instant| {
            duration.is_zero() || now.saturating_duration_since(start) >= duration
        };
        let event = match &mut self.mode {
            AnimationMode::Idle => return None,
            AnimationMode::Single(tween) => {
                if finished(tween.start) {
                    Some(AnimationEvent::SingleFinished { to: tween.to })
                } else {
                    None
                }
            }
            AnimationMode::Chain { steps, cursor } => {
                let index = *cursor;
                let start = steps.get(index).map(|step| step.start_time)?;
                if !finished(start) {
                    return None;
                }
                let last = index + 1 >= steps.len();
                if !last {
                    *cursor += 1;
                    if let Some(next) = steps.get_mut(index + 1) {
                        next.start_time = now;
                    }
                }
                Some(AnimationEvent::StepFinished { index, last })
            }
        };

        match event {
            Some(AnimationEvent::SingleFinished { .. })
            | Some(AnimationEvent::StepFinished { last: true, .. }) => {
                self.mode = AnimationMode::Idle;
            }
            _ => {}
        }
        event
    }

    /// What to draw at `now`, if anything is animating.
    pub fn current(&self, now: Instant) -> Option<ActiveTween<'_>> {
        match &self.mode {
            AnimationMode::Idle => None,
            AnimationMode::Single(tween) => Some(ActiveTween {
                from: tween.from,
                to: tween.to,
                piece: tween.piece,
                progress: self.progress(tween.start, now),
                snapshot: None,
            }),
            AnimationMode::Chain { steps, cursor } => {
                let step = steps.get(*cursor)?;
                Some(ActiveTween {
                    from: step.start_square,
                    to: step.end_square,
                    piece: step.piece,
                    progress: self.progress(step.start_time, now),
                    snapshot: Some(&step.snapshot_before),
                })
            }
        }
    }

    /// Index of the chain step currently playing.
    pub fn chain_cursor(&self) -> Option<usize> {
        match &self.mode {
            AnimationMode::Chain { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }
}
