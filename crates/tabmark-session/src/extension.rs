//! Statically registered extensions and the request policy built on them.
//!
//! Extensions implement a fixed trait and are handed to
//! [`ExtensionHost::register`] by start-up code. There is no discovery or
//! dynamic loading.

use tabmark_common::TabId;
use tabmark_config::ApplicationContext;
use tabmark_url::{ContentFilter, FilterDecision};
use tracing::{debug, info};

/// Capabilities an extension can provide. Every hook has a no-op default.
pub trait Extension {
    /// Unique name, used for registration and in block decisions.
    fn name(&self) -> &str;

    /// Called after a tab finishes loading a page successfully.
    fn on_page_loaded(&mut self, _tab: TabId, _url: &str) {}

    /// Return `true` to block an outgoing request.
    fn should_block(&self, _url: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("extension '{0}' is already registered")]
pub struct DuplicateExtension(pub String);

/// Registered extensions, in registration order.
#[derive(Default)]
pub struct ExtensionHost {
    extensions: Vec<Box<dyn Extension>>,
}

impl ExtensionHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, extension: Box<dyn Extension>) -> Result<(), DuplicateExtension> {
        let name = extension.name().to_string();
        if self.extensions.iter().any(|e| e.name() == name) {
            return Err(DuplicateExtension(name));
        }
        info!(extension = %name, "extension registered");
        self.extensions.push(extension);
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn notify_page_loaded(&mut self, tab: TabId, url: &str) {
        for extension in &mut self.extensions {
            extension.on_page_loaded(tab, url);
        }
    }

    /// Name of the first extension that wants `url` blocked.
    pub fn blocked_by(&self, url: &str) -> Option<&str> {
        self.extensions
            .iter()
            .find(|e| e.should_block(url))
            .map(|e| e.name())
    }
}

/// Decides whether an outgoing request may proceed: the content filter
/// first, then each extension.
pub struct RequestPolicy {
    filter: ContentFilter,
}

impl RequestPolicy {
    pub fn new(filter: ContentFilter) -> Self {
        Self { filter }
    }

    pub fn from_context(ctx: &ApplicationContext) -> Self {
        let mut filter = ContentFilter::new(&ctx.block_patterns);
        filter.set_enabled(ctx.adblock_enabled);
        Self::new(filter)
    }

    pub fn filter(&self) -> &ContentFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut ContentFilter {
        &mut self.filter
    }

    /// Extension blocks are reported with the rule `extension:<name>`.
    pub fn intercept_request(&self, url: &str, extensions: &ExtensionHost) -> FilterDecision {
        let decision = self.filter.check(url);
        if decision.is_blocked() {
            return decision;
        }
        match extensions.blocked_by(url) {
            Some(name) => {
                debug!(url, extension = name, "request blocked by extension");
                FilterDecision::Block {
                    rule: format!("extension:{name}"),
                }
            }
            None => FilterDecision::Allow,
        }
    }
}
