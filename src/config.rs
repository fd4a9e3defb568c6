// SPDX-License-Identifier: MPL-2.0
//! Animation duration tuning, with optional persistence to a `toastline.toml`
//! file.
//!
//! All durations are clock milliseconds. The defaults match the classic
//! toast timings: a 500ms grow-in, a 1000ms discard fade, and a 250ms hover
//! transition.
//!
//! # Examples
//!
//! ```
//! use toastline::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.create_ms, 500);
//!
//! let slow = Config {
//!     discard_ms: 2_000,
//!     ..Config::default()
//! };
//! assert_eq!(slow.hover_ms, 250);
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toastline.toml";
const APP_NAME: &str = "toastline";

/// Duration of the grow-in animation played by a freshly shown toast.
pub const CREATE_DURATION_MS: u64 = 500;
/// Duration of the removal animation; expiry deletes the toast.
pub const DISCARD_DURATION_MS: u64 = 1000;
/// Duration of the hover enter/leave transitions.
pub const HOVER_DURATION_MS: u64 = 250;

/// Tunable animation durations, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Length of the `Idle` grow-in phase.
    #[serde(default = "default_create_ms")]
    pub create_ms: u64,
    /// Length of the `Discarded` phase before removal.
    #[serde(default = "default_discard_ms")]
    pub discard_ms: u64,
    /// Length of the `Hovered` enter/leave phases.
    #[serde(default = "default_hover_ms")]
    pub hover_ms: u64,
}

fn default_create_ms() -> u64 {
    CREATE_DURATION_MS
}

fn default_discard_ms() -> u64 {
    DISCARD_DURATION_MS
}

fn default_hover_ms() -> u64 {
    HOVER_DURATION_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            create_ms: CREATE_DURATION_MS,
            discard_ms: DISCARD_DURATION_MS,
            hover_ms: HOVER_DURATION_MS,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// A missing file is not an error; the defaults are returned.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the platform config directory.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_matches_classic_timings() {
        let config = Config::default();
        assert_eq!(config.create_ms, 500);
        assert_eq!(config.discard_ms, 1000);
        assert_eq!(config.hover_ms, 250);
    }

    #[test]
    fn save_and_load_round_trip_preserves_durations() {
        let config = Config {
            create_ms: 300,
            discard_ms: 1500,
            hover_ms: 100,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toastline.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toastline.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toastline.toml");
        fs::write(&config_path, "discard_ms = 750\n").expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.discard_ms, 750);
        assert_eq!(loaded.create_ms, CREATE_DURATION_MS);
        assert_eq!(loaded.hover_ms, HOVER_DURATION_MS);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("toastline.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
