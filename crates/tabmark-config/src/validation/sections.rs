//! Per-section validators.

use std::collections::HashSet;

use crate::schema::TabmarkConfig;

use super::helpers::{validate_range, validate_url};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_navigation(errors: &mut Vec<String>, config: &TabmarkConfig) {
    validate_range(
        errors,
        "navigation.timeout_secs",
        config.navigation.timeout_secs,
        1,
        300,
    );
    validate_url(errors, "navigation.homepage", &config.navigation.homepage);
}

/// Default bookmarks must be valid and must not repeat a title or url.
pub(crate) fn validate_bookmarks(errors: &mut Vec<String>, config: &TabmarkConfig) {
    let mut titles = HashSet::new();
    let mut urls = HashSet::new();
    for (i, entry) in config.bookmarks.defaults.iter().enumerate() {
        let name = format!("bookmarks.defaults[{i}]");
        if entry.title.trim().is_empty() {
            errors.push(format!("{name}.title is empty"));
        }
        validate_url(errors, &format!("{name}.url"), &entry.url);
        if !titles.insert(entry.title.as_str()) {
            errors.push(format!("{name}.title {:?} is duplicated", entry.title));
        }
        if !urls.insert(entry.url.as_str()) {
            errors.push(format!("{name}.url {:?} is duplicated", entry.url));
        }
    }
}

pub(crate) fn validate_adblock(errors: &mut Vec<String>, config: &TabmarkConfig) {
    for (i, pattern) in config.adblock.patterns.iter().enumerate() {
        if pattern.trim().is_empty() {
            errors.push(format!("adblock.patterns[{i}] is empty"));
        }
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &TabmarkConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
