//! The seam between the tracker and whatever actually renders pages.

use tabmark_common::TabId;

/// Commands the tracker issues to the rendering engine.
///
/// Calls are fire-and-forget; outcomes come back as [`EngineEvent`]s that
/// the host feeds into [`crate::SessionTracker::apply`].
pub trait RenderingEngine {
    fn navigate(&mut self, tab: TabId, url: &str);
    fn back(&mut self, tab: TabId);
    fn forward(&mut self, tab: TabId);
    fn reload(&mut self, tab: TabId);
    fn stop(&mut self, tab: TabId);
}

/// Callbacks reported by the rendering engine, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    LoadStarted { tab: TabId },
    /// Percent loaded. Values above 100 are clamped.
    LoadProgress { tab: TabId, progress: u32 },
    LoadFinished { tab: TabId, ok: bool },
    UrlChanged { tab: TabId, url: String },
    TitleChanged { tab: TabId, title: String },
}

impl EngineEvent {
    pub fn tab(&self) -> TabId {
        match self {
            Self::LoadStarted { tab }
            | Self::LoadProgress { tab, .. }
            | Self::LoadFinished { tab, .. }
            | Self::UrlChanged { tab, .. }
            | Self::TitleChanged { tab, .. } => *tab,
        }
    }
}

/// A command received by a [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Navigate(TabId, String),
    Back(TabId),
    Forward(TabId),
    Reload(TabId),
    Stop(TabId),
}

/// Engine that renders nothing and remembers every command it was given.
///
/// Used by headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Vec<EngineCall>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Number of `stop` commands sent to `tab`.
    pub fn stops(&self, tab: TabId) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == EngineCall::Stop(tab))
            .count()
    }

    pub fn last_navigation(&self, tab: TabId) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            EngineCall::Navigate(id, url) if *id == tab => Some(url.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderingEngine for RecordingEngine {
    fn navigate(&mut self, tab: TabId, url: &str) {
        tracing::trace!(%tab, url, "engine navigate");
        self.calls.push(EngineCall::Navigate(tab, url.to_string()));
    }

    fn back(&mut self, tab: TabId) {
        self.calls.push(EngineCall::Back(tab));
    }

    fn forward(&mut self, tab: TabId) {
        self.calls.push(EngineCall::Forward(tab));
    }

    fn reload(&mut self, tab: TabId) {
        self.calls.push(EngineCall::Reload(tab));
    }

    fn stop(&mut self, tab: TabId) {
        self.calls.push(EngineCall::Stop(tab));
    }
}
