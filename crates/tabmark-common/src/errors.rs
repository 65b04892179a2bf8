use std::path::PathBuf;

use crate::id::TabId;

/// Rejection reasons for user-entered navigation targets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUrl {
    #[error("url is empty")]
    Empty,

    #[error("malformed url: {0}")]
    Malformed(String),

    #[error("url has no host: {0}")]
    MissingHost(String),

    #[error("invalid host '{0}'")]
    InvalidHost(String),

    #[error("invalid port '{0}'")]
    InvalidPort(String),
}

/// Failures while writing the bookmark or session file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum BookmarkError {
    #[error("already bookmarked: {0}")]
    DuplicateUrl(String),

    #[error("no bookmark titled '{0}'")]
    NotFound(String),

    #[error("private tabs cannot be bookmarked")]
    PrivateTab,

    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrl),

    #[error("bookmarks not saved: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrl),

    #[error("unknown tab: {0}")]
    UnknownTab(TabId),

    #[error("session not saved: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("path error: {0}")]
    PathError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TabmarkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bookmark(#[from] BookmarkError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrl),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
