//! Host-side wiring: the [`Browser`](browser::Browser) facade that ties the
//! bookmark registry, tab tracker, request policy and extensions to one
//! event bus, and the extensions registered at start-up.

pub mod browser;
pub mod page_log;

pub use browser::Browser;
pub use page_log::PageLog;
