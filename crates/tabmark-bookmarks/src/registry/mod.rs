//! The in-memory bookmark set and every mutation on it.
//!
//! Each mutation is flushed to the [`BookmarkStore`] before it returns. A
//! failed flush is reported as [`BookmarkError::Store`] but the in-memory
//! change stays, so the next successful save writes it out.

use tabmark_common::{BookmarkError, Event, EventBus};
use tabmark_config::ApplicationContext;
use tabmark_session::TabSession;
use tabmark_url::normalize;
use tracing::{debug, info, warn};

use crate::bookmark::Bookmark;
use crate::html;
use crate::store::{BookmarkStore, LoadSource};

/// Outcome of [`BookmarkRegistry::import_html`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: usize,
}

pub struct BookmarkRegistry {
    bookmarks: Vec<Bookmark>,
    store: BookmarkStore,
    source: LoadSource,
    bus: EventBus,
}

impl BookmarkRegistry {
    /// Load the bookmark file named by the context.
    pub fn open(ctx: &ApplicationContext, bus: EventBus) -> Self {
        Self::with_store(BookmarkStore::from_context(ctx), bus)
    }

    pub fn with_store(store: BookmarkStore, bus: EventBus) -> Self {
        let loaded = store.load();
        Self {
            bookmarks: loaded.bookmarks,
            store,
            source: loaded.source,
            bus,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Bookmarks in insertion order.
    pub fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn get(&self, title: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.title == title)
    }

    /// Whether `url` is bookmarked, comparing normalized forms.
    pub fn contains_url(&self, url: &str) -> bool {
        let wanted = canonical_url(url);
        self.bookmarks.iter().any(|b| canonical_url(&b.url) == wanted)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn store(&self) -> &BookmarkStore {
        &self.store
    }

    /// Whether the set came from the file or the built-in defaults.
    pub fn loaded_from(&self) -> LoadSource {
        self.source
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Bookmark `url` under `title`, returning the title actually used.
    ///
    /// A blank title falls back to the url. A title already in use gets
    /// the first free ` (N)` suffix.
    pub fn add(&mut self, title: &str, url: &str) -> Result<String, BookmarkError> {
        let bookmark = match self.insert(title, url) {
            Ok(bookmark) => bookmark,
            Err(BookmarkError::DuplicateUrl(url)) => {
                debug!(url = %url, "already bookmarked");
                self.bus.publish(Event::BookmarkRejected { url: url.clone() });
                return Err(BookmarkError::DuplicateUrl(url));
            }
            Err(e) => return Err(e),
        };
        self.persist()?;

        info!(title = %bookmark.title, url = %bookmark.url, "bookmark added");
        self.bus.publish(Event::BookmarkAdded {
            title: bookmark.title.clone(),
            url: bookmark.url,
        });
        Ok(bookmark.title)
    }

    /// Bookmark the page shown in `tab`. Private tabs are refused.
    pub fn add_current_page(&mut self, tab: &TabSession) -> Result<String, BookmarkError> {
        if tab.is_private {
            return Err(BookmarkError::PrivateTab);
        }
        self.add(&tab.title, &tab.url)
    }

    /// Remove the bookmark titled `title`. Returns `Ok(false)` if there is
    /// none.
    pub fn remove(&mut self, title: &str) -> Result<bool, BookmarkError> {
        let Some(index) = self.position(title) else {
            return Ok(false);
        };
        let removed = self.bookmarks.remove(index);
        self.persist()?;

        info!(title = %removed.title, "bookmark removed");
        self.bus.publish(Event::BookmarkRemoved {
            title: removed.title,
        });
        Ok(true)
    }

    /// Retitle a bookmark in place, applying the same collision rule as
    /// [`add`](Self::add). Returns the title actually used.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<String, BookmarkError> {
        let index = self
            .position(old)
            .ok_or_else(|| BookmarkError::NotFound(old.to_string()))?;

        let wanted = new.trim();
        let base = if wanted.is_empty() {
            self.bookmarks[index].url.clone()
        } else {
            wanted.to_string()
        };
        if base == old {
            return Ok(base);
        }
        let title = self.unique_title(&base, Some(index));
        self.bookmarks[index].title = title.clone();
        self.persist()?;

        info!(from = %old, to = %title, "bookmark renamed");
        self.bus.publish(Event::BookmarkRenamed {
            from: old.to_string(),
            to: title.clone(),
        });
        Ok(title)
    }

    /// Delete every bookmark. Confirmation is the caller's job.
    pub fn clear_all(&mut self) -> Result<(), BookmarkError> {
        let count = self.bookmarks.len();
        self.bookmarks.clear();
        self.persist()?;

        info!(count, "bookmarks cleared");
        self.bus.publish(Event::BookmarksCleared);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Export / import
    // -----------------------------------------------------------------------

    /// The whole set as a Netscape bookmark file.
    pub fn export(&self) -> Vec<u8> {
        html::render(&self.bookmarks).into_bytes()
    }

    /// Add every link found in a Netscape bookmark file. Links that are
    /// already bookmarked or not valid urls are skipped. The file is saved
    /// once at the end.
    pub fn import_html(&mut self, source: &str) -> Result<ImportReport, BookmarkError> {
        let mut report = ImportReport::default();
        for entry in html::parse(source) {
            match self.insert(&entry.title, &entry.url) {
                Ok(_) => report.added += 1,
                Err(e) => {
                    debug!(url = %entry.url, "import skipped: {e}");
                    report.skipped += 1;
                }
            }
        }
        if report.added > 0 {
            self.persist()?;
        }

        info!(added = report.added, skipped = report.skipped, "bookmarks imported");
        self.bus.publish(Event::BookmarksImported {
            added: report.added,
            skipped: report.skipped,
        });
        Ok(report)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Validate and append without saving.
    fn insert(&mut self, title: &str, url: &str) -> Result<Bookmark, BookmarkError> {
        let url = normalize(url)?;
        if self.contains_url(url.as_str()) {
            return Err(BookmarkError::DuplicateUrl(url.into_string()));
        }

        let base = match title.trim() {
            "" => url.as_str(),
            t => t,
        };
        let title = self.unique_title(base, None);
        let bookmark = Bookmark::new(title, url.into_string());
        self.bookmarks.push(bookmark.clone());
        Ok(bookmark)
    }

    /// `base`, or `base (N)` with the smallest N >= 1 not already taken.
    /// The entry at `skip` does not count as taken.
    fn unique_title(&self, base: &str, skip: Option<usize>) -> String {
        let taken = |candidate: &str| {
            self.bookmarks
                .iter()
                .enumerate()
                .any(|(i, b)| Some(i) != skip && b.title == candidate)
        };
        if !taken(base) {
            return base.to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{base} ({n})");
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.title == title)
    }

    fn persist(&self) -> Result<(), BookmarkError> {
        if let Err(e) = self.store.save(&self.bookmarks) {
            warn!(path = %self.store.path().display(), "bookmarks not saved: {e}");
            self.bus.publish(Event::BookmarksSaveFailed {
                reason: e.to_string(),
            });
            return Err(e.into());
        }
        Ok(())
    }
}

/// Comparison key for duplicate checks: the normalized url with scheme and
/// host lowercased and an empty path read as `/`. Text that does not
/// normalize is compared trimmed. The stored url is never rewritten.
pub(crate) fn canonical_url(url: &str) -> String {
    match normalize(url) {
        Ok(url) => comparison_key(url.as_str()),
        Err(_) => url.trim().to_string(),
    }
}

fn comparison_key(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let authority_end = rest
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);
    let slash = if tail.starts_with('/') { "" } else { "/" };
    format!(
        "{}://{}{slash}{tail}",
        scheme.to_ascii_lowercase(),
        authority.to_ascii_lowercase()
    )
}

#[cfg(test)]
mod tests;
