//! Full configuration validation.
//!
//! Each section has its own checks; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod panels;


use crate::schema::EdgebarConfig;
use edgebar_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EdgebarConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    panels::validate_timing(&mut errors, config);
    panels::validate_main_bar(&mut errors, config);
    panels::validate_sidebars(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
