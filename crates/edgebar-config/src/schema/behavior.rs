//! Shell-wide behavior settings.

use serde::{Deserialize, Serialize};

/// Global visibility behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Auto-hide the main bar when the cursor leaves it.
    pub auto_hide: bool,
    /// Cursor polling period in milliseconds (valid range: 10-1000).
    pub poll_interval_ms: u32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            auto_hide: true,
            poll_interval_ms: 100,
        }
    }
}
