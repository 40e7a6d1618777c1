//! Per-panel geometry and debounce settings.

use serde::{Deserialize, Serialize};

/// Top taskbar settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MainBarConfig {
    /// Bar height in pixels. The bar always spans the full screen width.
    pub height: u32,
    /// Depth of the top-edge strip that summons the bar.
    pub hover_zone: u32,
    pub show_delay_ms: u32,
    pub hide_delay_ms: u32,
}

impl Default for MainBarConfig {
    fn default() -> Self {
        Self {
            height: 60,
            hover_zone: 10,
            show_delay_ms: 500,
            hide_delay_ms: 1000,
        }
    }
}

/// Settings shared by the left and right sidebars.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub width: u32,
    /// Depth of the side-edge strip that summons a sidebar.
    pub hover_zone: u32,
    pub show_delay_ms: u32,
    pub hide_delay_ms: u32,
    /// Vertical offset from the top of the screen, leaving room for the bar.
    pub top_offset: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: 320,
            hover_zone: 20,
            show_delay_ms: 300,
            hide_delay_ms: 800,
            top_offset: 60,
        }
    }
}
