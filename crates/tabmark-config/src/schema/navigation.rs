//! Navigation configuration types.

use serde::{Deserialize, Serialize};

/// Start page, load timeout, and session restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub homepage: String,
    /// Seconds a navigation may stay below 100% before it is stopped.
    pub timeout_secs: u32,
    pub restore_session: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            homepage: "https://www.google.com".into(),
            timeout_secs: 15,
            restore_session: true,
        }
    }
}
