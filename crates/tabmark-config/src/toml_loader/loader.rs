//! Core TOML config loading: read from path or platform default.

use std::io::ErrorKind;
use std::path::Path;

use tabmark_common::ConfigError;
use tracing::{info, warn};

use crate::schema::TabmarkConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. Validation problems are logged and
/// the parsed config is returned as-is; callers that need a strict check
/// run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<TabmarkConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: TabmarkConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, writes the commented template and returns
/// defaults.
pub fn load_default() -> Result<TabmarkConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(TabmarkConfig::default())
        }
        Err(e) => Err(e),
    }
}
