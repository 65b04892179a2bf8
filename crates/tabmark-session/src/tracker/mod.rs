//! The SessionTracker owns the open tabs, the active tab, and one load
//! deadline per loading tab.

mod callbacks;
mod operations;
mod persistence;
mod timers;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tabmark_common::{Event, EventBus, IdGenerator, TabId};
use tabmark_config::ApplicationContext;
use tabmark_url::normalize;
use tracing::warn;

use crate::clock::Clock;
use crate::engine::RenderingEngine;
use crate::tab::TabSession;

/// Tab list plus page-load state machine for every tab.
///
/// Always holds at least one tab. Tab ids are never reused, so callbacks
/// that arrive for a closed tab are dropped instead of landing on a new
/// one.
pub struct SessionTracker<E: RenderingEngine> {
    /// Open tabs in display order.
    tabs: Vec<TabSession>,
    active: TabId,
    /// Load timeout deadline per tab. At most one per tab.
    deadlines: HashMap<TabId, Instant>,
    ids: IdGenerator,
    engine: E,
    bus: EventBus,
    clock: Box<dyn Clock>,
    timeout: Duration,
}

impl<E: RenderingEngine> SessionTracker<E> {
    /// Create a tracker with one tab navigating to the context's homepage.
    pub fn new(
        ctx: &ApplicationContext,
        engine: E,
        bus: EventBus,
        clock: impl Clock + 'static,
    ) -> Self {
        let mut ids = IdGenerator::default();
        let first = ids.next_tab();

        let mut tracker = Self {
            tabs: vec![TabSession::blank(first, false)],
            active: first,
            deadlines: HashMap::new(),
            ids,
            engine,
            bus,
            clock: Box::new(clock),
            timeout: ctx.navigation_timeout,
        };
        tracker.bus.publish(Event::TabOpened(first));
        tracker.bus.publish(Event::TabActivated(first));

        match normalize(&ctx.homepage) {
            Ok(url) => tracker.begin_navigation(first, url),
            Err(e) => warn!(homepage = %ctx.homepage, "homepage is not navigable, starting blank: {e}"),
        }
        tracker
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn tabs(&self) -> &[TabSession] {
        &self.tabs
    }

    pub fn tab(&self, id: TabId) -> Option<&TabSession> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_tab(&self) -> TabId {
        self.active
    }

    pub fn active_session(&self) -> Option<&TabSession> {
        self.tab(self.active)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    fn tab_mut(&mut self, id: TabId) -> Option<&mut TabSession> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }
}
