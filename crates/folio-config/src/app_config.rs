//! Application configuration
//!
//! Configuration loaded from folio.toml.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from folio.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Portfolio content file shown when none is given on the command line
    ///
    /// A leading `~` expands to the home directory. Relative paths are
    /// resolved against the directory of the config file.
    #[serde(default)]
    pub content: Option<PathBuf>,

    /// Interval between animation ticks in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Capture mouse clicks and wheel scrolling
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_mouse() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content: None,
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = crate::load_config_file() {
            match Self::parse(&content, path.parent()) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config text, resolving `content` relative to `base_dir`
    pub fn parse(content: &str, base_dir: Option<&Path>) -> anyhow::Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.content = config
            .content
            .map(|path| resolve_content_path(&path, base_dir));
        Ok(config)
    }
}

/// Expand `~` and anchor relative paths at `base_dir`
fn resolve_content_path(path: &Path, base_dir: Option<&Path>) -> PathBuf {
    let expanded = expand_home(path);
    match base_dir {
        Some(base) if expanded.is_relative() => base.join(expanded),
        _ => expanded,
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.content, None);
        assert_eq!(config.tick_rate_ms, 50);
        assert!(config.mouse);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            content = "~/portfolio.toml"
            tick_rate_ms = 16
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.content, Some(PathBuf::from("~/portfolio.toml")));
        assert_eq!(config.tick_rate_ms, 16);
        // mouse should use default
        assert!(config.mouse);
    }

    #[test]
    fn test_content_tilde_expands_to_home() {
        let home = dirs::home_dir().unwrap();
        let config = AppConfig::parse(
            r#"content = "~/sites/portfolio.toml""#,
            Some(Path::new("/etc/folio")),
        )
        .unwrap();
        assert_eq!(config.content, Some(home.join("sites/portfolio.toml")));
    }

    #[test]
    fn test_content_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "content = \"portfolio.toml\"\n").unwrap();

        let text = std::fs::read_to_string(&config_path).unwrap();
        let config = AppConfig::parse(&text, config_path.parent()).unwrap();
        assert_eq!(config.content, Some(dir.path().join("portfolio.toml")));
    }

    #[test]
    fn test_content_absolute_path_is_kept() {
        let config = AppConfig::parse(
            r#"content = "/srv/portfolio.toml""#,
            Some(Path::new("/etc/folio")),
        )
        .unwrap();
        assert_eq!(config.content, Some(PathBuf::from("/srv/portfolio.toml")));
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
