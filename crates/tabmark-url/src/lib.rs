//! URL handling for the shell: canonicalizing what the user types into the
//! address bar, and deciding which outgoing requests the rendering engine
//! may make.

pub mod filter;
pub mod normalize;

pub use filter::{ContentFilter, FilterDecision, DEFAULT_BLOCK_PATTERNS};
pub use normalize::{normalize, AbsoluteUrl};
