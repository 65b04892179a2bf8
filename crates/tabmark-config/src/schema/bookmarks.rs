//! Default bookmark set.

use serde::{Deserialize, Serialize};

/// A title/url pair seeded into a fresh bookmark file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    pub title: String,
    pub url: String,
}

impl BookmarkEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Bookmarks used when the bookmark file is missing or unreadable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarksConfig {
    pub defaults: Vec<BookmarkEntry>,
}

impl Default for BookmarksConfig {
    fn default() -> Self {
        Self {
            defaults: default_bookmarks(),
        }
    }
}

/// The built-in four-entry bookmark set.
pub fn default_bookmarks() -> Vec<BookmarkEntry> {
    vec![
        BookmarkEntry::new("Google", "https://www.google.com"),
        BookmarkEntry::new("YouTube", "https://www.youtube.com"),
        BookmarkEntry::new("GitHub", "https://github.com"),
        BookmarkEntry::new("DuckDuckGo", "https://duckduckgo.com"),
    ]
}
