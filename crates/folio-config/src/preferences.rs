//! Viewer preferences persistence
//!
//! A single key/value file holding the theme preference:
//!
//! ```toml
//! theme_pref = "dark"
//! ```
//!
//! Missing or unreadable files fall back to defaults; the viewer never
//! refuses to start because of this file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::{Display, EnumString};

use crate::paths;

/// Theme preference as chosen by the user
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ThemeMode {
    /// Follow the terminal's advertised background
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    /// Next mode in the toggle cycle: auto -> dark -> light -> auto
    pub fn next(self) -> Self {
        match self {
            Self::Auto => Self::Dark,
            Self::Dark => Self::Light,
            Self::Light => Self::Auto,
        }
    }

    /// Capitalized label for the toggle button
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Persisted preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme_pref: ThemeMode,
}

impl Preferences {
    /// Load preferences from the config directory, or defaults
    pub fn load() -> Self {
        match paths::preferences_path() {
            Ok(path) if path.exists() => match Self::load_from_path(&path) {
                Ok(prefs) => {
                    log::info!("Loaded preferences from {:?}", path);
                    prefs
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable preferences: {:#}", e);
                    Self::default()
                }
            },
            _ => {
                log::debug!("No stored preferences, using defaults");
                Self::default()
            }
        }
    }

    /// Load preferences from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences file: {:?}", path))
    }

    /// Save preferences to specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize preferences")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write preferences file: {:?}", path))?;

        log::debug!("Saved preferences to {:?}", path);
        Ok(())
    }
}
