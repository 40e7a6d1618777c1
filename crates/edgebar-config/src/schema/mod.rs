//! Configuration schema types for edgebar.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the shell ships with.

mod animation;
mod behavior;
mod logging;
mod panels;

pub use animation::*;
pub use behavior::*;
pub use logging::*;
pub use panels::*;

use serde::{Deserialize, Serialize};

/// Root configuration for edgebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct EdgebarConfig {
    pub behavior: BehaviorConfig,
    pub animation: AnimationConfig,
    pub main_bar: MainBarConfig,
    pub sidebars: SidebarConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
