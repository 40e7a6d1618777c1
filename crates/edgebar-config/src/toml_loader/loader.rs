//! Core TOML config loading: read from a string, a path, or the platform default.

use crate::schema::EdgebarConfig;
use crate::validation;
use edgebar_common::ConfigError;
use std::path::Path;
use tracing::{debug, info};

use super::paths::default_config_path;

/// Parse and validate a TOML document.
pub fn load_from_str(content: &str) -> Result<EdgebarConfig, ConfigError> {
    let config: EdgebarConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from a specific TOML file path.
///
/// Unlike the parse step, a missing file is reported as `FileNotFound` so
/// callers can tell "no config" apart from "broken config".
pub fn load_from_path(path: &Path) -> Result<EdgebarConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/edgebar/config.toml`
/// On Linux: `~/.config/edgebar/config.toml`
///
/// A missing file yields the defaults; nothing is written to disk.
pub fn load_default() -> Result<EdgebarConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config found at {}, using defaults", path.display());
            Ok(EdgebarConfig::default())
        }
        Err(e) => Err(e),
    }
}
