//! Configuration and file management for folio
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Persisted viewer preferences (theme mode)

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod preferences;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};
pub use preferences::{Preferences, ThemeMode};
