use tabmark_common::TabId;
use tabmark_session::Extension;
use tracing::info;

/// Logs every successfully loaded page.
#[derive(Debug, Default)]
pub struct PageLog {
    loaded: usize,
}

impl PageLog {
    pub fn loaded(&self) -> usize {
        self.loaded
    }
}

impl Extension for PageLog {
    fn name(&self) -> &str {
        "page-log"
    }

    fn on_page_loaded(&mut self, tab: TabId, url: &str) {
        self.loaded += 1;
        info!(%tab, url, count = self.loaded, "page loaded");
    }
}
