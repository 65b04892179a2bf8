//! Session snapshot capture and restore.

use tabmark_common::TabId;
use tracing::{info, warn};

use crate::engine::RenderingEngine;
use crate::snapshot::SessionSnapshot;

use super::SessionTracker;

impl<E: RenderingEngine> SessionTracker<E> {
    /// Capture the non-private tabs, stamped with the current time.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.tabs, self.active, chrono::Utc::now().timestamp())
    }

    /// Replace the open tabs with those in `snapshot`, each navigating to
    /// its saved url. Entries whose url no longer validates are skipped.
    /// If nothing could be restored the current tabs are left alone.
    /// Returns the number of tabs restored.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> usize {
        let previous: Vec<TabId> = self.tabs.iter().map(|t| t.id).collect();

        let mut restored: Vec<(usize, TabId)> = Vec::new();
        for (index, entry) in snapshot.tabs.iter().enumerate() {
            match self.open(Some(entry.url.as_str()), false) {
                Ok(id) => {
                    if let Some(tab) = self.tab_mut(id) {
                        if !entry.title.trim().is_empty() {
                            tab.title = entry.title.clone();
                        }
                    }
                    restored.push((index, id));
                }
                Err(e) => warn!(url = %entry.url, "skipping saved tab: {e}"),
            }
        }

        let Some(&(_, first)) = restored.first() else {
            return 0;
        };
        for id in previous {
            self.close(id);
        }

        let active = snapshot
            .active
            .and_then(|want| restored.iter().find(|(index, _)| *index == want))
            .map(|(_, id)| *id)
            .unwrap_or(first);
        self.set_active(active);

        info!(tabs = restored.len(), "session restored");
        restored.len()
    }
}
