//! Tabmark configuration system.
//!
//! Provides TOML-based configuration with validation, platform paths, and
//! the [`ApplicationContext`] handed to every core component. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabmark_config::{load_config, ApplicationContext};
//!
//! let config = load_config(None).expect("failed to load config");
//! let ctx = ApplicationContext::from_config(&config).expect("no data dir");
//! println!("{}", ctx.bookmarks_file.display());
//! ```

pub mod context;
pub mod paths;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use context::ApplicationContext;
pub use schema::{BookmarkEntry, TabmarkConfig};
pub use toml_writer::{config_to_toml, save_config_to_path};

use std::path::Path;

use tabmark_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`
/// (creating a commented default file there if none exists), then
/// validate it.
pub fn load_config(path: Option<&Path>) -> Result<TabmarkConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TabmarkConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
