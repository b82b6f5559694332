//! Settings persistence
//!
//! Saves and loads [`GameSettings`] as JSON.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/arcade-chess/settings.json` on Linux. Falls back to the
//! working directory when no config directory can be resolved. An explicit
//! path (the `--config` flag) overrides both.
//!
//! # Error Handling
//!
//! A missing file is not an error: defaults are used. A file that cannot be
//! read, parsed or validated is reported to the caller.

use crate::core::error::CoreResult;
use crate::core::GameSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Default location of the settings file
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "arcade", "arcade-chess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path`, or from [`settings_path`] when `None`
pub fn load_settings(path: Option<&Path>) -> CoreResult<GameSettings> {
    let settings_path = path.map_or_else(settings_path, Path::to_path_buf);

    if !settings_path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", settings_path);
        return Ok(GameSettings::default());
    }

    let contents = fs::read_to_string(&settings_path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    settings.validate()?;

    info!("[SETTINGS] Loaded settings from {:?}", settings_path);
    Ok(settings)
}

/// Write settings to `path`, or to [`settings_path`] when `None`.
///
/// Creates the parent directory if needed and returns the path written.
pub fn save_settings(settings: &GameSettings, path: Option<&Path>) -> CoreResult<PathBuf> {
    settings.validate()?;
    let settings_path = path.map_or_else(settings_path, Path::to_path_buf);

    if let Some(parent) = settings_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&settings_path, json)?;

    info!("[SETTINGS] Saved settings to {:?}", settings_path);
    Ok(settings_path)
}
