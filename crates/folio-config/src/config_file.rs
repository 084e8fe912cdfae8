use std::path::{Path, PathBuf};

use crate::paths;

const LOCAL_CONFIG_FILE: &str = "folio.toml";

/// Load config file content from CWD first, then the config directory
///
/// Searches for:
/// 1. `folio.toml` in the current working directory
/// 2. `config.toml` in the folio config directory
///
/// Returns the path of the file that was read together with its content,
/// None if neither exists.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if let Some(content) = read_config(&local) {
        return Some((local, content));
    }

    let global = paths::app_config_path().ok()?;
    let content = read_config(&global)?;
    Some((global, content))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}
