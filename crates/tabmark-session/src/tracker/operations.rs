//! Open, close, navigate and tab-switching operations on the SessionTracker.

use tabmark_common::{Event, SessionError, TabId};
use tabmark_url::{normalize, AbsoluteUrl};
use tracing::debug;

use crate::engine::RenderingEngine;
use crate::tab::{LoadState, TabSession};

use super::SessionTracker;

impl<E: RenderingEngine> SessionTracker<E> {
    /// Open a new tab and make it active. With a url the tab starts
    /// loading it, otherwise it sits idle on `about:blank`.
    ///
    /// An invalid url is rejected before any tab is created.
    pub fn open(&mut self, url: Option<&str>, private: bool) -> Result<TabId, SessionError> {
        let target = url.map(normalize).transpose()?;

        let id = self.ids.next_tab();
        self.tabs.push(TabSession::blank(id, private));
        debug!(%id, private, "tab opened");
        self.bus.publish(Event::TabOpened(id));
        self.activate(id);

        if let Some(url) = target {
            self.begin_navigation(id, url);
        }
        Ok(id)
    }

    /// Close a tab. Returns `false` for an unknown tab or the last tab.
    pub fn close(&mut self, id: TabId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if self.tabs.len() <= 1 {
            debug!(%id, "not closing the last tab");
            return false;
        }

        self.tabs.remove(index);
        self.disarm(id);
        debug!(%id, "tab closed");
        self.bus.publish(Event::TabClosed(id));

        if self.active == id {
            // Right neighbour now sits at `index`; fall back to the left one.
            let next = self.tabs[index.min(self.tabs.len() - 1)].id;
            self.activate(next);
        }
        true
    }

    /// Normalize `raw` and start loading it in `id`, replacing any load in
    /// progress.
    pub fn navigate(&mut self, id: TabId, raw: &str) -> Result<(), SessionError> {
        if self.index_of(id).is_none() {
            return Err(SessionError::UnknownTab(id));
        }
        let url = normalize(raw)?;
        self.begin_navigation(id, url);
        Ok(())
    }

    pub fn back(&mut self, id: TabId) -> Result<(), SessionError> {
        self.require(id)?;
        self.engine.back(id);
        Ok(())
    }

    pub fn forward(&mut self, id: TabId) -> Result<(), SessionError> {
        self.require(id)?;
        self.engine.forward(id);
        Ok(())
    }

    pub fn reload(&mut self, id: TabId) -> Result<(), SessionError> {
        let tab = self.tab_mut(id).ok_or(SessionError::UnknownTab(id))?;
        tab.load_state = LoadState::Loading;
        tab.progress = 0;
        self.arm(id);
        self.engine.reload(id);
        self.bus.publish(Event::TabUpdated(id));
        Ok(())
    }

    /// Stop loading. A loading tab goes back to idle and its timer is
    /// disarmed.
    pub fn stop(&mut self, id: TabId) -> Result<(), SessionError> {
        let tab = self.tab_mut(id).ok_or(SessionError::UnknownTab(id))?;
        let was_loading = tab.is_loading();
        if was_loading {
            tab.load_state = LoadState::Idle;
        }
        self.engine.stop(id);
        if was_loading {
            self.disarm(id);
            debug!(%id, "load stopped");
            self.bus.publish(Event::TabUpdated(id));
        }
        Ok(())
    }

    /// Make `id` the active tab. Returns `false` for an unknown tab.
    pub fn set_active(&mut self, id: TabId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.activate(id);
        true
    }

    /// Activate the tab to the right of the active one, wrapping around.
    pub fn next_tab(&mut self) -> TabId {
        let index = self.index_of(self.active).unwrap_or(0);
        let next = self.tabs[(index + 1) % self.tabs.len()].id;
        self.activate(next);
        next
    }

    pub(super) fn begin_navigation(&mut self, id: TabId, url: AbsoluteUrl) {
        let Some(tab) = self.tab_mut(id) else {
            return;
        };
        tab.url = url.as_str().to_string();
        tab.title = url.as_str().to_string();
        tab.load_state = LoadState::Loading;
        tab.progress = 0;

        self.arm(id);
        debug!(%id, url = %url, "navigating");
        self.engine.navigate(id, url.as_str());
        self.bus.publish(Event::TabUpdated(id));
    }

    fn activate(&mut self, id: TabId) {
        if self.active != id {
            self.active = id;
            self.bus.publish(Event::TabActivated(id));
        }
    }

    fn require(&self, id: TabId) -> Result<(), SessionError> {
        match self.index_of(id) {
            Some(_) => Ok(()),
            None => Err(SessionError::UnknownTab(id)),
        }
    }
}
