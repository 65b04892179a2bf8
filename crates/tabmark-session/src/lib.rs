//! Open tabs and their page-load lifecycle.
//!
//! [`SessionTracker`] owns every [`TabSession`], drives the attached
//! [`RenderingEngine`] and applies the engine's callbacks in order. Load
//! timeouts are deadlines fired by [`SessionTracker::poll_timeouts`], so
//! the host event loop decides when time advances.

pub mod clock;
pub mod engine;
pub mod extension;
pub mod snapshot;
pub mod tab;
pub mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{EngineCall, EngineEvent, RecordingEngine, RenderingEngine};
pub use extension::{DuplicateExtension, Extension, ExtensionHost, RequestPolicy};
pub use snapshot::{SessionSnapshot, SnapshotTab};
pub use tab::{LoadState, TabSession, BLANK_URL, NEW_TAB_TITLE};
pub use tracker::SessionTracker;
