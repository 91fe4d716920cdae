//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! An explicit path (the `--config` flag) wins. Otherwise settings live in
//! `config.json` inside the platform configuration directory, e.g.
//! `~/.config/offline-chess/config.json`, falling back to `./config.json`
//! when no such directory can be determined.
//!
//! # Error Handling
//!
//! Loading never fails:
//! - A missing file is created with the default settings
//! - An unreadable or unparseable file is left alone and defaults are used
//! - Save failures are logged but don't interrupt play

use super::error::SettingsResult;
use super::resources::GameSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "config.json";

/// Resolves the settings file path.
pub fn settings_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(proj_dirs) = ProjectDirs::from("org", "offline-chess", "offline-chess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Loads settings from `path`, falling back to defaults.
///
/// When the file does not exist the defaults are written there so the user
/// has something to edit.
pub fn load_settings(path: &Path) -> GameSettings {
    if !path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Writing defaults.",
            path
        );
        let settings = GameSettings::default();
        if let Err(e) = save_settings(path, &settings) {
            error!("[SETTINGS] Failed to write default settings to {:?}: {}", path, e);
        }
        return settings;
    }

    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

fn read_settings(path: &Path) -> SettingsResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Writes `settings` as pretty JSON, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &GameSettings) -> SettingsResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
