//! The facade a UI or headless host drives.

use tabmark_bookmarks::BookmarkRegistry;
use tabmark_common::{Event, EventBus, Notification, SessionError, TabId, TabmarkError};
use tabmark_config::ApplicationContext;
use tabmark_session::{
    Clock, DuplicateExtension, EngineEvent, Extension, ExtensionHost, RenderingEngine,
    RequestPolicy, SessionSnapshot, SessionTracker,
};
use tabmark_url::FilterDecision;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Owns every core component and the bus they publish on.
pub struct Browser<E: RenderingEngine> {
    ctx: ApplicationContext,
    bus: EventBus,
    bookmarks: BookmarkRegistry,
    tabs: SessionTracker<E>,
    policy: RequestPolicy,
    extensions: ExtensionHost,
    notices: broadcast::Receiver<Event>,
}

impl<E: RenderingEngine> Browser<E> {
    pub fn new(ctx: ApplicationContext, engine: E, clock: impl Clock + 'static) -> Self {
        let bus = EventBus::default();
        let notices = bus.subscribe();
        let bookmarks = BookmarkRegistry::open(&ctx, bus.clone());
        let tabs = SessionTracker::new(&ctx, engine, bus.clone(), clock);
        let policy = RequestPolicy::from_context(&ctx);
        info!(
            data_dir = %ctx.data_dir.display(),
            bookmarks = bookmarks.len(),
            adblock = policy.filter().is_enabled(),
            "browser ready"
        );

        Self {
            ctx,
            bus,
            bookmarks,
            tabs,
            policy,
            extensions: ExtensionHost::new(),
            notices,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn context(&self) -> &ApplicationContext {
        &self.ctx
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    pub fn bookmarks(&self) -> &BookmarkRegistry {
        &self.bookmarks
    }

    pub fn bookmarks_mut(&mut self) -> &mut BookmarkRegistry {
        &mut self.bookmarks
    }

    pub fn tabs(&self) -> &SessionTracker<E> {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut SessionTracker<E> {
        &mut self.tabs
    }

    pub fn extensions(&self) -> &ExtensionHost {
        &self.extensions
    }

    pub fn register_extension(
        &mut self,
        extension: Box<dyn Extension>,
    ) -> Result<(), DuplicateExtension> {
        self.extensions.register(extension)
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Bookmark the page in the active tab, returning the title used.
    pub fn bookmark_active_tab(&mut self) -> Result<String, TabmarkError> {
        let active = self.tabs.active_tab();
        let tab = self
            .tabs
            .active_session()
            .ok_or(SessionError::UnknownTab(active))?;
        Ok(self.bookmarks.add_current_page(tab)?)
    }

    /// Request hook for the rendering engine. Blocked requests are
    /// published as [`Event::RequestBlocked`].
    pub fn intercept_request(&self, url: &str) -> FilterDecision {
        let decision = self.policy.intercept_request(url, &self.extensions);
        if let FilterDecision::Block { rule } = &decision {
            self.bus.publish(Event::RequestBlocked {
                url: url.to_string(),
                rule: rule.clone(),
            });
        }
        decision
    }

    /// Feed one engine callback to the tracker. Extensions hear about
    /// pages that finished loading successfully.
    pub fn handle_engine_event(&mut self, event: EngineEvent) -> bool {
        let tab = event.tab();
        let loaded = matches!(event, EngineEvent::LoadFinished { ok: true, .. });

        let applied = self.tabs.apply(event);
        if applied && loaded {
            if let Some(session) = self.tabs.tab(tab) {
                self.extensions.notify_page_loaded(tab, &session.url);
            }
        }
        applied
    }

    /// Fire due load timeouts. Call whenever
    /// [`SessionTracker::next_deadline`] passes.
    pub fn tick(&mut self) -> Vec<TabId> {
        self.tabs.poll_timeouts()
    }

    /// Reopen the tabs from the last saved session, if session restore is
    /// enabled and a session was saved. Returns the number restored.
    pub fn restore_session(&mut self) -> usize {
        if !self.ctx.restore_session {
            debug!("session restore disabled");
            return 0;
        }
        match SessionSnapshot::load(&self.ctx.session_file) {
            Some(snapshot) => self.tabs.restore(&snapshot),
            None => 0,
        }
    }

    /// User-facing notices for everything published since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        Notification::drain(&mut self.notices)
    }

    /// Write the non-private tabs to the session file.
    pub fn save_session(&self) -> Result<(), SessionError> {
        self.tabs.snapshot().save(&self.ctx.session_file)?;
        Ok(())
    }
}
