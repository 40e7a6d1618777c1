pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, EdgebarError, PlatformError};
pub use events::{EventBus, HideReason, ShellEvent};
pub use types::{PanelId, Point, ScreenRect, Size};
