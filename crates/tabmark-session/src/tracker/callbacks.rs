//! Engine callbacks. Every handler checks the tab id first and drops
//! events for tabs that no longer exist.

use tabmark_common::{Event, TabId};
use tracing::{debug, trace};

use crate::engine::{EngineEvent, RenderingEngine};
use crate::tab::LoadState;

use super::SessionTracker;

impl<E: RenderingEngine> SessionTracker<E> {
    /// Apply one engine event. Returns `true` if it changed a tab.
    pub fn apply(&mut self, event: EngineEvent) -> bool {
        match event {
            EngineEvent::LoadStarted { tab } => self.on_load_started(tab),
            EngineEvent::LoadProgress { tab, progress } => self.on_progress(tab, progress),
            EngineEvent::LoadFinished { tab, ok } => self.on_load_finished(tab, ok),
            EngineEvent::UrlChanged { tab, url } => self.on_url_changed(tab, &url),
            EngineEvent::TitleChanged { tab, title } => self.on_title_changed(tab, &title),
        }
    }

    /// A load began. Loads the engine starts on its own (link clicks,
    /// history) enter `Loading` here and get a timer.
    pub fn on_load_started(&mut self, id: TabId) -> bool {
        let Some(tab) = self.tab_mut(id) else {
            trace!(%id, "load start for unknown tab ignored");
            return false;
        };
        if tab.is_loading() {
            return false;
        }
        tab.load_state = LoadState::Loading;
        tab.progress = 0;

        self.arm(id);
        debug!(%id, "engine-initiated load");
        self.bus.publish(Event::TabUpdated(id));
        true
    }

    /// Progress only moves forward and is capped at 100.
    pub fn on_progress(&mut self, id: TabId, progress: u32) -> bool {
        let progress = u8::try_from(progress.min(100)).unwrap_or(100);
        let Some(tab) = self.tab_mut(id) else {
            return false;
        };
        if !tab.is_loading() || progress <= tab.progress {
            return false;
        }
        tab.progress = progress;
        self.bus.publish(Event::TabUpdated(id));
        true
    }

    pub fn on_load_finished(&mut self, id: TabId, ok: bool) -> bool {
        let Some(tab) = self.tab_mut(id) else {
            return false;
        };
        if !tab.is_loading() {
            trace!(%id, state = tab.load_state.as_str(), "late load finish ignored");
            return false;
        }
        if ok {
            tab.load_state = LoadState::Loaded;
            tab.progress = 100;
        } else {
            tab.load_state = LoadState::Failed;
        }
        debug!(%id, ok, url = %tab.url, "load finished");

        self.disarm(id);
        self.bus.publish(Event::TabUpdated(id));
        if !ok {
            self.bus.publish(Event::LoadFailed(id));
        }
        true
    }

    pub fn on_url_changed(&mut self, id: TabId, url: &str) -> bool {
        let Some(tab) = self.tab_mut(id) else {
            return false;
        };
        if tab.url == url {
            return false;
        }
        tab.url = url.to_string();
        self.bus.publish(Event::TabUpdated(id));
        true
    }

    /// Blank titles are ignored.
    pub fn on_title_changed(&mut self, id: TabId, title: &str) -> bool {
        let title = title.trim();
        let Some(tab) = self.tab_mut(id) else {
            return false;
        };
        if title.is_empty() || tab.title == title {
            return false;
        }
        tab.title = title.to_string();
        self.bus.publish(Event::TabUpdated(id));
        true
    }
}
