// SPDX-License-Identifier: MPL-2.0
//! Persisted user preferences, stored as a `settings.toml` file.
//!
//! The site keeps exactly one durable preference: the last language the
//! visitor picked. Persistence is best-effort — a missing or unreadable
//! store degrades to defaults and the session continues in memory only.
//!
//! # Path Resolution
//!
//! The store location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `PORTFOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use portfolio_core::config::{self, Preferences};
//!
//! let mut prefs = config::load();
//! prefs.language = Some("en".to_string());
//! config::save(&prefs).expect("failed to save preferences");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Portfolio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PORTFOLIO_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Last language chosen by the visitor, as a plain language code.
    #[serde(default)]
    pub language: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads preferences from the default location. Never fails: any missing or
/// unreadable store yields defaults.
pub fn load() -> Preferences {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path).unwrap_or_default(),
        _ => Preferences::default(),
    }
}

/// Saves preferences to the default location.
pub fn save(prefs: &Preferences) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(prefs, &path);
    }
    Ok(())
}

/// Loads preferences from an explicit path. Invalid TOML yields defaults
/// rather than an error, so a corrupted store never blocks startup.
pub fn load_from_path(path: &Path) -> Result<Preferences> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves preferences to an explicit path, creating parent directories.
pub fn save_to_path(prefs: &Preferences, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(prefs)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let prefs = Preferences {
            language: Some("pt".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&prefs, &config_path).expect("failed to save preferences");
        let loaded = load_from_path(&config_path).expect("failed to load preferences");

        assert_eq!(loaded.language, prefs.language);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let prefs = Preferences {
            language: Some("en".to_string()),
        };

        save_to_path(&prefs, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_preferences_have_no_language() {
        assert!(Preferences::default().language.is_none());
    }
}
