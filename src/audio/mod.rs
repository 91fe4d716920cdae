//! Move sound selection
//!
//! After every move exactly one sound is chosen, in priority order:
//! game end > check > promote > castle > capture > move. Playback itself is
//! the audio backend's job, reached through [`SoundPlayer`].

use std::fmt;

/// Named game sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSound {
    Move,
    Capture,
    Castle,
    Check,
    Promote,
    GameEnd,
}

impl GameSound {
    pub fn name(self) -> &'static str {
        match self {
            GameSound::Move => "move",
            GameSound::Capture => "capture",
            GameSound::Castle => "castle",
            GameSound::Check => "check",
            GameSound::Promote => "promote",
            GameSound::GameEnd => "end",
        }
    }
}

impl fmt::Display for GameSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened on the board, gathered around a single move.
///
/// `capture`, `castle` and `promotion` are read before the move is applied;
/// `checkmate` and `check` after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub capture: bool,
    pub castle: bool,
    pub promotion: bool,
    pub check: bool,
    pub checkmate: bool,
}

impl MoveOutcome {
    pub fn sound(&self) -> GameSound {
        if self.checkmate {
            GameSound::GameEnd
        } else if self.check {
            GameSound::Check
        } else if self.promotion {
            GameSound::Promote
        } else if self.castle {
            GameSound::Castle
        } else if self.capture {
            GameSound::Capture
        } else {
            GameSound::Move
        }
    }
}

/// Audio backend.
pub trait SoundPlayer {
    fn play(&mut self, sound: GameSound);
}

/// Backend for headless runs; logs instead of playing.
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&mut self, sound: GameSound) {
        tracing::debug!("[AUDIO] {}", sound);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_priority() {
        //! Checkmate beats check beats promotion beats castling beats capture.
        let everything = MoveOutcome {
            capture: true,
            castle: true,
            promotion: true,
            check: true,
            checkmate: true,
        };
        assert_eq!(everything.sound(), GameSound::GameEnd);
        assert_eq!(
            MoveOutcome {
                checkmate: false,
                ..everything
            }
            .sound(),
            GameSound::Check
        );
        assert_eq!(
            MoveOutcome {
                capture: true,
                promotion: true,
                ..Default::default()
            }
            .sound(),
            GameSound::Promote
        );
        assert_eq!(
            MoveOutcome {
                capture: true,
                castle: true,
                ..Default::default()
            }
            .sound(),
            GameSound::Castle
        );
        assert_eq!(
            MoveOutcome {
                capture: true,
                ..Default::default()
            }
            .sound(),
            GameSound::Capture
        );
        assert_eq!(MoveOutcome::default().sound(), GameSound::Move);
    }

    #[test]
    fn test_sound_names() {
        assert_eq!(GameSound::GameEnd.name(), "end");
        assert_eq!(GameSound::Check.to_string(), "check");
    }
}
