//! Settings loading

use std::path::{Path, PathBuf};

use sift_core::prelude::*;

use super::types::Settings;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "SIFT_CONFIG";

const CONFIG_DIR: &str = "sift";
const CONFIG_FILENAME: &str = "config.toml";

/// `$SIFT_CONFIG`, else `<config dir>/sift/config.toml`
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the default location
pub fn load_settings() -> Settings {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from `path`. A missing file yields the defaults, and so
/// does an unreadable or invalid one after a warning.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            Settings::default()
        }
    }
}

/// Read and parse the config file at `path`
pub fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).map_err(|e| Error::config_invalid(path, e.message()))
}
