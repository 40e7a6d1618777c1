//! Panel geometry and debounce validation.

use crate::schema::EdgebarConfig;

use super::helpers::validate_range;

const MAX_DELAY_MS: u32 = 10_000;

pub(crate) fn validate_main_bar(errors: &mut Vec<String>, config: &EdgebarConfig) {
    let bar = &config.main_bar;
    validate_range(errors, "main_bar.height", bar.height, 16, 400);
    validate_range(errors, "main_bar.hover_zone", bar.hover_zone, 1, 200);
    validate_range(errors, "main_bar.show_delay_ms", bar.show_delay_ms, 0, MAX_DELAY_MS);
    validate_range(errors, "main_bar.hide_delay_ms", bar.hide_delay_ms, 0, MAX_DELAY_MS);
}

pub(crate) fn validate_sidebars(errors: &mut Vec<String>, config: &EdgebarConfig) {
    let side = &config.sidebars;
    validate_range(errors, "sidebars.width", side.width, 40, 2000);
    validate_range(errors, "sidebars.hover_zone", side.hover_zone, 1, 200);
    validate_range(errors, "sidebars.show_delay_ms", side.show_delay_ms, 0, MAX_DELAY_MS);
    validate_range(errors, "sidebars.hide_delay_ms", side.hide_delay_ms, 0, MAX_DELAY_MS);
    validate_range(errors, "sidebars.top_offset", side.top_offset, 0, 2000);
}

pub(crate) fn validate_timing(errors: &mut Vec<String>, config: &EdgebarConfig) {
    validate_range(
        errors,
        "behavior.poll_interval_ms",
        config.behavior.poll_interval_ms,
        10,
        1000,
    );
    validate_range(errors, "animation.steps", config.animation.steps, 1, 120);
    validate_range(
        errors,
        "animation.duration_ms",
        config.animation.duration_ms,
        0,
        5000,
    );
    validate_range(
        errors,
        "animation.min_distance_px",
        config.animation.min_distance_px,
        0,
        100,
    );
}
