use edgebar_common::errors::PlatformError;
use edgebar_common::types::{PanelId, Point, ScreenRect};

pub mod simulated;

pub use simulated::{SimulatedHost, WindowCommand};

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Platform-agnostic capabilities the engine needs from the windowing system.
///
/// The engine never creates windows; it is handed one per panel and only
/// moves, shows, and hides them.
pub trait WindowHost: Send + Sync {
    fn cursor_position(&self) -> Result<Point>;
    fn screen_bounds(&self) -> Result<ScreenRect>;
    fn move_window(&self, panel: PanelId, to: Point) -> Result<()>;
    fn show_window(&self, panel: PanelId) -> Result<()>;
    fn hide_window(&self, panel: PanelId) -> Result<()>;
    fn window_position(&self, panel: PanelId) -> Result<Point>;
}
