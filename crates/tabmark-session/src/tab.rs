use serde::{Deserialize, Serialize};
use tabmark_common::TabId;

pub const BLANK_URL: &str = "about:blank";
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Where a tab is in its page-load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
    TimedOut,
}

impl LoadState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
            Self::TimedOut => "timed out",
        }
    }
}

/// One open tab as seen by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSession {
    pub id: TabId,
    pub url: String,
    pub title: String,
    pub is_private: bool,
    pub load_state: LoadState,
    /// Percent loaded, 0..=100.
    pub progress: u8,
}

impl TabSession {
    pub fn new(id: TabId, url: impl Into<String>, title: impl Into<String>, is_private: bool) -> Self {
        Self {
            id,
            url: url.into(),
            title: title.into(),
            is_private,
            load_state: LoadState::Idle,
            progress: 0,
        }
    }

    /// An idle `about:blank` tab.
    pub fn blank(id: TabId, is_private: bool) -> Self {
        Self::new(id, BLANK_URL, NEW_TAB_TITLE, is_private)
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }
}
