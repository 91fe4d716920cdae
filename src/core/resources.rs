//! Application settings
//!
//! [`GameSettings`] is loaded once at startup (see
//! [`crate::core::settings_persistence`]) and then owned by the controller.
//! Every field has a default, so a partial or hand-edited settings file still
//! loads; unknown theme and notation names fall back to their defaults.

use crate::game::notation::NotationScheme;
use crate::rendering::canvas::Rgb;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// FEN of the standard starting position.
pub const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Settings read from the JSON settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Seconds one move animation takes
    pub animation_speed: f32,

    /// Executable of the UCI engine
    pub stockfish_path: String,
    /// `go depth` sent with each search
    pub stockfish_depth: u32,
    /// Search time in seconds, sent as `movetime` milliseconds
    pub stockfish_time: f32,

    pub arrow_color: Rgb,
    pub arrow_thickness: u32,

    /// Legal-move hint colour; the selection highlight uses it translucent
    pub circle_color: Rgb,
    pub circle_thickness: u32,
    /// Radius of the quiet-move dot relative to the square
    pub circle_radius_ratio: f32,

    pub marker_color: Rgb,
    pub marker_thickness: u32,
    /// Marker ellipse size relative to the square
    pub marker_radius_ratio: f32,

    pub last_move_from_color: Rgb,
    pub last_move_to_color: Rgb,

    pub board_theme: BoardTheme,
    /// Piece image set, resolved by the asset backend
    pub piece_theme: String,
    pub play_sounds: bool,

    pub notation_scheme: NotationScheme,

    /// Position loaded on startup and on reset
    pub starting_fen: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            animation_speed: 0.2,
            stockfish_path: "/usr/bin/stockfish".to_string(),
            stockfish_depth: 1,
            stockfish_time: 0.001,
            arrow_color: Rgb::new(255, 0, 0),
            arrow_thickness: 15,
            circle_color: Rgb::new(70, 115, 80),
            circle_thickness: 4,
            circle_radius_ratio: 0.15,
            marker_color: Rgb::new(255, 0, 0),
            marker_thickness: 4,
            marker_radius_ratio: 0.9,
            last_move_from_color: Rgb::new(205, 210, 106),
            last_move_to_color: Rgb::new(170, 162, 58),
            board_theme: BoardTheme::Brown,
            piece_theme: "cburnett".to_string(),
            play_sounds: true,
            notation_scheme: NotationScheme::Algebraic,
            starting_fen: STANDARD_START_FEN.to_string(),
        }
    }
}

impl GameSettings {
    /// Duration of one move animation, in whole milliseconds. Negative or
    /// non-finite values mean no animation.
    pub fn animation_duration(&self) -> Duration {
        let secs = f64::from(self.animation_speed);
        if !secs.is_finite() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::from_millis((secs * 1000.0).round() as u64)
    }
}

/// Board colour themes. Unknown names in the settings file load as `Brown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardTheme {
    #[default]
    Brown,
    Blue,
    Green,
    Grey,
}

impl BoardTheme {
    pub const ALL: [BoardTheme; 4] = [
        BoardTheme::Brown,
        BoardTheme::Blue,
        BoardTheme::Green,
        BoardTheme::Grey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::Brown => "brown",
            BoardTheme::Blue => "blue",
            BoardTheme::Green => "green",
            BoardTheme::Grey => "grey",
        }
    }

    /// Returns (light_square_color, dark_square_color)
    pub fn colors(&self) -> (Rgb, Rgb) {
        match self {
            BoardTheme::Brown => (Rgb::new(240, 217, 181), Rgb::new(181, 136, 99)),
            BoardTheme::Blue => (Rgb::new(222, 227, 230), Rgb::new(140, 162, 173)),
            BoardTheme::Green => (Rgb::new(255, 255, 221), Rgb::new(134, 166, 102)),
            BoardTheme::Grey => (Rgb::new(220, 220, 220), Rgb::new(150, 150, 150)),
        }
    }
}

impl fmt::Display for BoardTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        BoardTheme::ALL
            .into_iter()
            .find(|theme| theme.name() == name || (name == "gray" && *theme == BoardTheme::Grey))
            .ok_or_else(|| format!("Unknown board theme {s:?}"))
    }
}

impl Serialize for BoardTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for BoardTheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or_else(|err| {
            tracing::warn!("[SETTINGS] {}, using {}", err, BoardTheme::default());
            BoardTheme::default()
        }))
    }
}
