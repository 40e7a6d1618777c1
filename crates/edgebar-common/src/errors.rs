use std::path::PathBuf;

use crate::types::PanelId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by the host windowing system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("window handle for {0} is no longer valid")]
    WindowInvalid(PanelId),

    #[error("cursor query failed: {0}")]
    CursorQuery(String),

    #[error("screen bounds query failed: {0}")]
    ScreenQuery(String),
}

impl PlatformError {
    /// Returns `true` for failures raised by the cursor or screen queries.
    ///
    /// Query failures are absorbed by skipping one tick; everything else
    /// concerns a specific window.
    pub fn is_query_failure(&self) -> bool {
        matches!(self, Self::CursorQuery(_) | Self::ScreenQuery(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EdgebarError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("engine task has stopped")]
    EngineStopped,

    #[error("{0}")]
    Other(String),
}
