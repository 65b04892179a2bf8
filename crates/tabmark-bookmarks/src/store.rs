//! JSON file holding the bookmark set.
//!
//! The file is one object mapping title to url, in registry order:
//!
//! ```json
//! {
//!   "Google": "https://www.google.com",
//!   "GitHub": "https://github.com"
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tabmark_common::fs::write_atomic;
use tabmark_common::StoreError;
use tabmark_config::ApplicationContext;
use tracing::{info, warn};

use crate::bookmark::Bookmark;

/// Where a loaded bookmark set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    File,
    Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedBookmarks {
    pub bookmarks: Vec<Bookmark>,
    pub source: LoadSource,
}

#[derive(Debug, thiserror::Error)]
enum ReadError {
    #[error("no bookmark file")]
    Missing,
    #[error("failed to read bookmark file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid bookmark file: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct BookmarkStore {
    path: PathBuf,
    defaults: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new(path: impl Into<PathBuf>, defaults: Vec<Bookmark>) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }

    pub fn from_context(ctx: &ApplicationContext) -> Self {
        let defaults = ctx.default_bookmarks.iter().map(Bookmark::from).collect();
        Self::new(ctx.bookmarks_file.clone(), defaults)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn defaults(&self) -> &[Bookmark] {
        &self.defaults
    }

    /// Read the bookmark file.
    ///
    /// A missing or unparsable file is replaced by the default set, which
    /// is written back straight away. Failing to write it is only logged.
    pub fn load(&self) -> LoadedBookmarks {
        match self.read() {
            Ok(bookmarks) => {
                info!(path = %self.path.display(), count = bookmarks.len(), "bookmarks loaded");
                LoadedBookmarks {
                    bookmarks,
                    source: LoadSource::File,
                }
            }
            Err(e) => {
                match e {
                    ReadError::Missing => {
                        info!(path = %self.path.display(), "no bookmark file, using defaults")
                    }
                    e => warn!(path = %self.path.display(), "{e}, restoring defaults"),
                }
                let bookmarks = self.defaults.clone();
                if let Err(e) = self.save(&bookmarks) {
                    warn!("failed to write default bookmarks: {e}");
                }
                LoadedBookmarks {
                    bookmarks,
                    source: LoadSource::Defaults,
                }
            }
        }
    }

    /// Render `bookmarks` in the on-disk format: a pretty-printed object
    /// mapping title to url, in order.
    pub fn to_json(bookmarks: &[Bookmark]) -> Result<String, serde_json::Error> {
        let map: Map<String, Value> = bookmarks
            .iter()
            .map(|b| (b.title.clone(), Value::String(b.url.clone())))
            .collect();
        serde_json::to_string_pretty(&Value::Object(map))
    }

    /// Write the full set, replacing the file atomically.
    pub fn save(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        let json = Self::to_json(bookmarks)?;
        write_atomic(&self.path, json.as_bytes())?;
        info!(path = %self.path.display(), count = bookmarks.len(), "bookmarks saved");
        Ok(())
    }

    fn read(&self) -> Result<Vec<Bookmark>, ReadError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ReadError::Missing,
            _ => ReadError::Io(e),
        })?;

        let value: Value =
            serde_json::from_str(&text).map_err(|e| ReadError::Invalid(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(ReadError::Invalid("expected a JSON object".into()));
        };

        let mut seen_urls = HashSet::new();
        let mut seen_titles = HashSet::new();
        let mut bookmarks = Vec::with_capacity(map.len());
        for (raw_title, url) in map {
            let Value::String(url) = url else {
                return Err(ReadError::Invalid(format!("url for '{raw_title}' is not a string")));
            };
            // Same shape `add` produces: trimmed, blank title falls back to the url.
            let url = url.trim().to_string();
            if url.is_empty() {
                warn!(title = %raw_title, "dropping bookmark with empty url");
                continue;
            }
            let title = match raw_title.trim() {
                "" => url.clone(),
                trimmed => trimmed.to_string(),
            };
            if !seen_urls.insert(crate::registry::canonical_url(&url)) {
                warn!(title = %title, url = %url, "dropping bookmark with repeated url");
                continue;
            }
            if !seen_titles.insert(title.clone()) {
                warn!(title = %title, url = %url, "dropping bookmark with repeated title");
                continue;
            }
            bookmarks.push(Bookmark { title, url });
        }
        Ok(bookmarks)
    }
}
