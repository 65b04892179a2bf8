//! Explicitly constructed application context.
//!
//! Every component takes its file paths and policies from an
//! `ApplicationContext` instead of global state, so tests can run several
//! isolated instances side by side.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tabmark_common::ConfigError;

use crate::paths::{self, BOOKMARKS_FILE, SESSION_FILE};
use crate::schema::{BookmarkEntry, TabmarkConfig};

#[derive(Debug, Clone)]
pub struct ApplicationContext {
    pub data_dir: PathBuf,
    pub bookmarks_file: PathBuf,
    pub session_file: PathBuf,
    pub default_bookmarks: Vec<BookmarkEntry>,
    pub homepage: String,
    pub navigation_timeout: Duration,
    pub restore_session: bool,
    pub adblock_enabled: bool,
    pub block_patterns: Vec<String>,
}

impl ApplicationContext {
    /// Build a context from config, resolving the platform data directory
    /// unless `storage.data_dir` overrides it.
    pub fn from_config(config: &TabmarkConfig) -> Result<Self, ConfigError> {
        let data_dir = if config.storage.data_dir.trim().is_empty() {
            paths::data_dir()?
        } else {
            PathBuf::from(config.storage.data_dir.trim())
        };
        Ok(Self::with_data_dir(config, data_dir))
    }

    /// Build a context rooted at an explicit data directory.
    pub fn with_data_dir(config: &TabmarkConfig, data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            bookmarks_file: data_dir.join(BOOKMARKS_FILE),
            session_file: data_dir.join(SESSION_FILE),
            data_dir,
            default_bookmarks: config.bookmarks.defaults.clone(),
            homepage: config.navigation.homepage.clone(),
            navigation_timeout: Duration::from_secs(u64::from(config.navigation.timeout_secs)),
            restore_session: config.navigation.restore_session,
            adblock_enabled: config.adblock.enabled,
            block_patterns: config.adblock.patterns.clone(),
        }
    }

    /// Default policies with all files under `dir`.
    pub fn isolated(dir: impl Into<PathBuf>) -> Self {
        Self::with_data_dir(&TabmarkConfig::default(), dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
