//! Slide animation settings.

use serde::{Deserialize, Serialize};

/// Slide animation timing shared by every panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Total slide duration in milliseconds.
    pub duration_ms: u32,
    /// Number of discrete move steps per slide (valid range: 1-120).
    pub steps: u32,
    /// Moves shorter than this on both axes jump straight to the target.
    pub min_distance_px: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 100,
            steps: 5,
            min_distance_px: 5,
        }
    }
}
