use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::TabId;

/// State-change notifications published by the core components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    BookmarkAdded { title: String, url: String },
    BookmarkRemoved { title: String },
    BookmarkRenamed { from: String, to: String },
    BookmarkRejected { url: String },
    BookmarksCleared,
    BookmarksImported { added: usize, skipped: usize },
    BookmarksSaveFailed { reason: String },
    TabOpened(TabId),
    TabClosed(TabId),
    TabActivated(TabId),
    TabUpdated(TabId),
    LoadFailed(TabId),
    LoadTimedOut(TabId),
    RequestBlocked { url: String, rule: String },
    #[serde(other)]
    Unknown,
}

/// Fan-out channel the UI layer subscribes to.
///
/// Cloning the bus shares the underlying channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        tracing::trace!(?event, "publish");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
