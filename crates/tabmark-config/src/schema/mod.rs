//! Configuration schema types for Tabmark.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod adblock;
mod bookmarks;
mod logging;
mod navigation;
mod storage;

pub use adblock::*;
pub use bookmarks::*;
pub use logging::*;
pub use navigation::*;
pub use storage::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Tabmark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabmarkConfig {
    pub storage: StorageConfig,
    pub navigation: NavigationConfig,
    pub bookmarks: BookmarksConfig,
    pub adblock: AdblockConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_navigation() {
        let config = TabmarkConfig::default();
        assert_eq!(config.navigation.homepage, "https://www.google.com");
        assert_eq!(config.navigation.timeout_secs, 15);
        assert!(config.navigation.restore_session);
    }

    #[test]
    fn default_bookmark_set_has_four_entries() {
        let config = TabmarkConfig::default();
        let titles: Vec<_> = config
            .bookmarks
            .defaults
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Google", "YouTube", "GitHub", "DuckDuckGo"]);
    }

    #[test]
    fn default_storage_uses_platform_dir() {
        assert!(TabmarkConfig::default().storage.data_dir.is_empty());
    }

    #[test]
    fn default_adblock_is_enabled() {
        let config = TabmarkConfig::default();
        assert!(config.adblock.enabled);
        assert!(config
            .adblock
            .patterns
            .iter()
            .any(|p| p == "*://*.doubleclick.net/*"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: TabmarkConfig = toml::from_str(
            r#"
[navigation]
timeout_secs = 30
"#,
        )
        .unwrap();
        assert_eq!(config.navigation.timeout_secs, 30);
        assert_eq!(config.navigation.homepage, "https://www.google.com");
        assert_eq!(config.bookmarks.defaults.len(), 4);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn custom_default_bookmarks() {
        let config: TabmarkConfig = toml::from_str(
            r#"
[[bookmarks.defaults]]
title = "Rust"
url = "https://www.rust-lang.org"
"#,
        )
        .unwrap();
        assert_eq!(
            config.bookmarks.defaults,
            vec![BookmarkEntry::new("Rust", "https://www.rust-lang.org")]
        );
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = TabmarkConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: TabmarkConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.navigation.timeout_secs, 15);
        assert_eq!(parsed.bookmarks.defaults, default_bookmarks());
        assert_eq!(parsed.adblock.patterns, config.adblock.patterns);
    }
}
