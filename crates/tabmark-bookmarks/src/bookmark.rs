use serde::{Deserialize, Serialize};
use tabmark_config::BookmarkEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

impl From<&BookmarkEntry> for Bookmark {
    fn from(entry: &BookmarkEntry) -> Self {
        Self::new(&entry.title, &entry.url)
    }
}
