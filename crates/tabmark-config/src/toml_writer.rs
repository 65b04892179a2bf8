//! Write TabmarkConfig to TOML on disk.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place so a
//! crash mid-write leaves the previous file intact.

use std::path::Path;

use tabmark_common::fs::write_atomic;
use tabmark_common::ConfigError;
use tracing::debug;

use crate::schema::TabmarkConfig;

/// Render `config` as pretty TOML, every section included.
pub fn config_to_toml(config: &TabmarkConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))
}

/// Write config to a specific path, creating parent directories.
pub fn save_config_to_path(config: &TabmarkConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = config_to_toml(config)?;
    write_atomic(path, toml_str.as_bytes()).map_err(|e| ConfigError::PathError(e.to_string()))?;

    debug!(path = %path.display(), "config saved");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
