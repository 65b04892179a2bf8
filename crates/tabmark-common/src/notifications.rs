use std::fmt;

use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::events::Event;

/// Severity level for user-facing notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A user-facing notice derived from a core event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Maps a core event to the notice a UI should show, if any.
    ///
    /// Duplicate bookmarks are informational, timeouts and failed loads are
    /// warnings, and failed saves are errors. Routine state changes map to
    /// `None`.
    pub fn from_event(event: &Event) -> Option<Self> {
        use NotificationLevel::*;

        let notice = match event {
            Event::BookmarkAdded { title, .. } => {
                Self::new(Info, "Bookmark added", format!("Saved '{title}'"))
            }
            Event::BookmarkRejected { url } => Self::new(
                Info,
                "Already bookmarked",
                format!("{url} is already in your bookmarks"),
            ),
            Event::BookmarksCleared => Self::new(Info, "Bookmarks cleared", ""),
            Event::BookmarksImported { added, skipped } => Self::new(
                Info,
                "Bookmarks imported",
                format!("{added} added, {skipped} skipped"),
            ),
            Event::BookmarksSaveFailed { reason } => {
                Self::new(Error, "Could not save bookmarks", reason.clone())
            }
            Event::LoadTimedOut(tab) => Self::new(
                Warning,
                "Page took too long",
                format!("Loading in {tab} was stopped"),
            ),
            Event::LoadFailed(tab) => Self::new(
                Warning,
                "Page failed to load",
                format!("The page in {tab} could not be loaded"),
            ),
            _ => return None,
        };
        Some(notice)
    }

    /// Notices for every event already queued on `rx`, oldest first.
    ///
    /// Never blocks. Events lost to a lagging receiver are skipped.
    pub fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Self> {
        let mut notices = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(event) => notices.extend(Self::from_event(&event)),
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::debug!(missed, "notification receiver lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        notices
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level.as_str(), self.title)?;
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use crate::id::TabId;

    #[test]
    fn duplicate_is_informational() {
        let n = Notification::from_event(&Event::BookmarkRejected {
            url: "https://www.google.com".into(),
        })
        .unwrap();
        assert_eq!(n.level, NotificationLevel::Info);
        assert!(n.body.contains("https://www.google.com"));
    }

    #[test]
    fn timeout_is_warning() {
        let n = Notification::from_event(&Event::LoadTimedOut(TabId::new(4))).unwrap();
        assert_eq!(n.level, NotificationLevel::Warning);
        assert!(n.body.contains("tab-4"));
    }

    #[test]
    fn save_failure_is_error() {
        let n = Notification::from_event(&Event::BookmarksSaveFailed {
            reason: "disk full".into(),
        })
        .unwrap();
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.to_string(), "error: Could not save bookmarks: disk full");
    }

    #[test]
    fn routine_events_are_silent() {
        assert!(Notification::from_event(&Event::TabOpened(TabId::new(1))).is_none());
        assert!(Notification::from_event(&Event::TabUpdated(TabId::new(1))).is_none());
    }

    #[test]
    fn empty_body_is_not_printed() {
        let n = Notification::from_event(&Event::BookmarksCleared).unwrap();
        assert_eq!(n.to_string(), "info: Bookmarks cleared");
    }

    #[test]
    fn drain_keeps_order_and_skips_routine_events() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        bus.publish(Event::TabOpened(TabId::new(1)));
        bus.publish(Event::BookmarkRejected {
            url: "https://github.com".into(),
        });
        bus.publish(Event::LoadFailed(TabId::new(1)));

        let titles: Vec<_> = Notification::drain(&mut rx)
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["Already bookmarked", "Page failed to load"]);
        assert!(Notification::drain(&mut rx).is_empty());
    }

    #[test]
    fn drain_survives_lag() {
        let bus = EventBus::new(2);
        let mut rx = bus.subscribe();
        for _ in 0..5 {
            bus.publish(Event::BookmarksCleared);
        }
        let notices = Notification::drain(&mut rx);
        assert_eq!(notices.len(), 2);
    }
}
