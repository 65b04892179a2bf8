//! Full configuration validation.
//!
//! Each section is checked by its own function; all problems are collected
//! into a single `ConfigError`.

mod helpers;
mod sections;


use tabmark_common::ConfigError;

use crate::schema::TabmarkConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TabmarkConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_navigation(&mut errors, config);
    sections::validate_bookmarks(&mut errors, config);
    sections::validate_adblock(&mut errors, config);
    sections::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
