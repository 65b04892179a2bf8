//! Load timeout deadlines.

use std::time::Instant;

use tabmark_common::{Event, TabId};
use tracing::{trace, warn};

use crate::engine::RenderingEngine;
use crate::tab::LoadState;

use super::SessionTracker;

impl<E: RenderingEngine> SessionTracker<E> {
    /// Fire every deadline that has passed. A tab still loading with
    /// progress below 100 moves to `TimedOut` and the engine is told to
    /// stop it. Returns the tabs that timed out.
    pub fn poll_timeouts(&mut self) -> Vec<TabId> {
        let now = self.clock.now();
        let mut due: Vec<TabId> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        due.sort();

        let mut timed_out = Vec::new();
        for id in due {
            self.deadlines.remove(&id);
            let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
                continue;
            };
            if tab.load_state != LoadState::Loading || tab.progress >= 100 {
                continue;
            }
            tab.load_state = LoadState::TimedOut;
            warn!(
                %id,
                url = %tab.url,
                progress = tab.progress,
                timeout_secs = self.timeout.as_secs(),
                "page load timed out"
            );

            self.engine.stop(id);
            self.bus.publish(Event::LoadTimedOut(id));
            timed_out.push(id);
        }
        timed_out
    }

    /// Earliest pending deadline, for the host loop to sleep until.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    pub fn has_pending_timeout(&self, id: TabId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Start the load timer for `id`, replacing any earlier one.
    pub(super) fn arm(&mut self, id: TabId) {
        let deadline = self.clock.now() + self.timeout;
        if self.deadlines.insert(id, deadline).is_some() {
            trace!(%id, "load timer replaced");
        }
    }

    pub(super) fn disarm(&mut self, id: TabId) {
        self.deadlines.remove(&id);
    }
}
