//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/folio/`, `~/.cache/folio/`
//! - macOS: `~/Library/Application Support/folio/`, `~/Library/Caches/folio/`
//! - Windows: `%APPDATA%\folio\`, `%LOCALAPPDATA%\folio\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "folio";

/// Get the application config directory
/// Returns ~/.config/folio/ on Linux, ~/Library/Application Support/folio/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/folio/ on Linux, ~/Library/Caches/folio/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the persisted preferences file
pub fn preferences_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("preferences.toml"))
}

/// Get path to the global app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
