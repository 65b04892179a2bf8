pub mod errors;
pub mod events;
pub mod fs;
pub mod id;
pub mod notifications;

pub use errors::{
    BookmarkError, ConfigError, InvalidUrl, SessionError, StoreError, TabmarkError,
};
pub use events::{Event, EventBus};
pub use id::{IdGenerator, TabId};
pub use notifications::{Notification, NotificationLevel};

pub type Result<T> = std::result::Result<T, TabmarkError>;
