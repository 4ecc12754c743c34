// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from and saved to a `settings.toml`
//! file in the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use tujiinue::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.notifications.duration_ms = Some(3000);
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::{DEFAULT_NOTIFICATION_DURATION_MS, NOTIFICATION_TICK_INTERVAL_MS};

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Tujiinue";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub notifications: Notifications,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct General {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifications {
    /// Auto-dismiss window in milliseconds. `None` means the default.
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

impl Notifications {
    /// Returns the effective auto-dismiss duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms.unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// A missing file is not an error: defaults are returned so a fresh
/// install starts with sensible settings.
pub fn load() -> Result<Config> {
    match get_default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Loads the configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = get_default_config_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    save_to_path(config, &path)
}

/// Saves the configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
