//! The tab list saved between runs.
//!
//! Stored as pretty JSON next to the bookmark file:
//!
//! ```json
//! {
//!   "saved_at": 1760601600,
//!   "active": 0,
//!   "tabs": [{ "url": "https://github.com", "title": "GitHub" }]
//! }
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabmark_common::fs::write_atomic;
use tabmark_common::{StoreError, TabId};
use tabmark_url::normalize;
use tracing::{debug, info, warn};

use crate::tab::TabSession;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotTab {
    pub url: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Unix seconds.
    pub saved_at: i64,
    /// Index into `tabs` of the tab that was active, if it was saved.
    #[serde(default)]
    pub active: Option<usize>,
    #[serde(default)]
    pub tabs: Vec<SnapshotTab>,
}

impl SessionSnapshot {
    /// Snapshot of `tabs` minus private tabs and tabs not showing a web page.
    pub fn capture(tabs: &[TabSession], active: TabId, saved_at: i64) -> Self {
        let mut entries = Vec::new();
        let mut active_index = None;

        for tab in tabs {
            if tab.is_private || normalize(&tab.url).is_err() {
                continue;
            }
            if tab.id == active {
                active_index = Some(entries.len());
            }
            entries.push(SnapshotTab {
                url: tab.url.clone(),
                title: tab.title.clone(),
            });
        }

        Self {
            saved_at,
            active: active_index,
            tabs: entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn saved_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.saved_at, 0)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(self)?;
        write_atomic(path, &json)?;
        info!(path = %path.display(), tabs = self.tabs.len(), "session saved");
        Ok(())
    }

    /// Read a saved session. A missing or unreadable file yields `None`.
    pub fn load(path: &Path) -> Option<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved session");
                return None;
            }
            Err(e) => {
                warn!(path = %path.display(), "failed to read session: {e}");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(path = %path.display(), "ignoring corrupt session file: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::LoadState;

    fn tab(id: u64, url: &str, title: &str, private: bool) -> TabSession {
        let mut tab = TabSession::new(TabId::new(id), url, title, private);
        tab.load_state = LoadState::Loaded;
        tab
    }

    #[test]
    fn capture_skips_private_and_blank_tabs() {
        let tabs = vec![
            tab(1, "https://github.com", "GitHub", false),
            tab(2, "https://secret.example.com", "Secret", true),
            tab(3, "about:blank", "New Tab", false),
            tab(4, "https://duckduckgo.com", "DuckDuckGo", false),
        ];

        let snapshot = SessionSnapshot::capture(&tabs, TabId::new(4), 100);
        let urls: Vec<_> = snapshot.tabs.iter().map(|t| t.url.as_str()).collect();
        assert_eq!(urls, vec!["https://github.com", "https://duckduckgo.com"]);
        assert_eq!(snapshot.active, Some(1));
        assert_eq!(snapshot.saved_at, 100);
    }

    #[test]
    fn active_private_tab_is_not_indexed() {
        let tabs = vec![
            tab(1, "https://github.com", "GitHub", false),
            tab(2, "https://secret.example.com", "Secret", true),
        ];
        let snapshot = SessionSnapshot::capture(&tabs, TabId::new(2), 0);
        assert_eq!(snapshot.active, None);
        assert_eq!(snapshot.tabs.len(), 1);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let snapshot = SessionSnapshot {
            saved_at: 1_760_601_600,
            active: Some(0),
            tabs: vec![SnapshotTab {
                url: "https://github.com".into(),
                title: "GitHub".into(),
            }],
        };

        snapshot.save(&path).unwrap();
        assert_eq!(SessionSnapshot::load(&path), Some(snapshot));
    }

    #[test]
    fn load_missing_or_corrupt_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        assert_eq!(SessionSnapshot::load(&path), None);

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(SessionSnapshot::load(&path), None);
    }

    #[test]
    fn missing_fields_default() {
        let snapshot: SessionSnapshot = serde_json::from_str(r#"{"saved_at": 5}"#).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.active, None);
    }

    #[test]
    fn saved_at_converts_to_utc() {
        let snapshot = SessionSnapshot {
            saved_at: 0,
            active: None,
            tabs: Vec::new(),
        };
        assert_eq!(snapshot.saved_at_utc().unwrap().to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }
}
