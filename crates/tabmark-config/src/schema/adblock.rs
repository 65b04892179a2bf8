//! Request blocking configuration.

use serde::{Deserialize, Serialize};
use tabmark_url::DEFAULT_BLOCK_PATTERNS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdblockConfig {
    pub enabled: bool,
    /// URL globs, checked in order.
    pub patterns: Vec<String>,
}

impl Default for AdblockConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            patterns: DEFAULT_BLOCK_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}
