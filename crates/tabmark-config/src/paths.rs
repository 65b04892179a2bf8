//! Platform path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use tabmark_common::ConfigError;

pub(crate) const APP_NAME: &str = "tabmark";

pub const BOOKMARKS_FILE: &str = "bookmarks.json";
pub const SESSION_FILE: &str = "session.json";
pub const CONFIG_FILE: &str = "config.toml";

/// Returns the platform-specific configuration directory for Tabmark.
///
/// - macOS: `~/Library/Application Support/tabmark`
/// - Linux: `$XDG_CONFIG_HOME/tabmark` (defaults to `~/.config/tabmark`)
/// - Windows: `%APPDATA%\tabmark`
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| ConfigError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Tabmark.
///
/// - macOS: `~/Library/Application Support/tabmark`
/// - Linux: `$XDG_DATA_HOME/tabmark` (defaults to `~/.local/share/tabmark`)
/// - Windows: `%APPDATA%\tabmark`
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| ConfigError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Located at `config_dir()/config.toml`.
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Creates `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(dir)
        .map_err(|e| ConfigError::PathError(format!("failed to create {}: {e}", dir.display())))
}
