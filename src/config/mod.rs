// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.auto_dismiss_ms = Some(3000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod defaults;
pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Visible duration of a notification before automatic removal, in
    /// milliseconds. `None` means the built-in default.
    #[serde(default)]
    pub auto_dismiss_ms: Option<u64>,
    /// Capacity of the diagnostics event buffer. `None` means the default.
    #[serde(default)]
    pub event_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: Some(DEFAULT_AUTO_DISMISS_MS),
            event_capacity: Some(DEFAULT_EVENT_CAPACITY),
        }
    }
}

impl Config {
    /// Returns the effective auto-dismiss duration, clamped to the valid range.
    #[must_use]
    pub fn auto_dismiss(&self) -> Duration {
        let ms = self
            .auto_dismiss_ms
            .unwrap_or(DEFAULT_AUTO_DISMISS_MS)
            .clamp(MIN_AUTO_DISMISS_MS, MAX_AUTO_DISMISS_MS);
        Duration::from_millis(ms)
    }

    /// Returns the effective diagnostics buffer capacity, clamped to the
    /// valid range.
    #[must_use]
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
            .unwrap_or(DEFAULT_EVENT_CAPACITY)
            .clamp(MIN_EVENT_CAPACITY, MAX_EVENT_CAPACITY)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

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
