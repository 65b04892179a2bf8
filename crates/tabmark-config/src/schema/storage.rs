//! Storage location configuration.

use serde::{Deserialize, Serialize};

/// Where bookmark and session files live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory override. Empty means the platform data directory.
    pub data_dir: String,
}
