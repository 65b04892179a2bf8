//! Bookmark registry with a JSON-file store and Netscape HTML
//! export/import.

pub mod bookmark;
pub mod html;
pub mod registry;
pub mod store;

pub use bookmark::Bookmark;
pub use registry::{BookmarkRegistry, ImportReport};
pub use store::{BookmarkStore, LoadSource, LoadedBookmarks};
