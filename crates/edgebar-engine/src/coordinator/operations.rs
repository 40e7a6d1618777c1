//! Explicit requests from the surrounding shell.

use std::time::Instant;

use edgebar_common::events::{HideReason, ShellEvent};
use edgebar_common::types::PanelId;
use tracing::{debug, info};

use super::tick::enforce_exclusivity;
use super::Coordinator;

impl Coordinator {
    /// Enables or disables main bar auto-hide.
    ///
    /// Disabling cancels any pending hide and brings the bar in. Enabling
    /// arms the normal hide delay unless the cursor is on the bar.
    pub fn set_auto_hide(&mut self, enabled: bool, now: Instant) {
        if self.auto_hide == enabled {
            return;
        }
        self.auto_hide = enabled;
        info!(enabled, "auto-hide changed");

        let (panels, mut ctx) = self.parts(now);
        let bar = panels.get_mut(PanelId::MainBar);
        if enabled {
            if bar.phase().is_shown_or_showing() && !bar.last_hover() {
                bar.arm_hide(&mut ctx);
            }
        } else {
            bar.cancel_hide_timer(&mut ctx);
            bar.begin_show(&mut ctx);
        }
        ctx.bus.publish(ShellEvent::AutoHideChanged(enabled));
    }

    /// Flips auto-hide and returns the new setting.
    pub fn toggle_auto_hide(&mut self, now: Instant) -> bool {
        let enabled = !self.auto_hide;
        self.set_auto_hide(enabled, now);
        enabled
    }

    /// Shows a hidden or hiding panel right away, or hides a showing or
    /// visible one. No debounce applies.
    ///
    /// While auto-hide is off the main bar is held in, so toggling it can
    /// only bring it back.
    pub fn toggle(&mut self, panel: PanelId, now: Instant) {
        let held = panel == PanelId::MainBar && !self.auto_hide;
        let (panels, mut ctx) = self.parts(now);
        if panels.get(panel).phase().is_shown_or_showing() {
            if held {
                debug!("main bar held while auto-hide is off, toggle ignored");
                return;
            }
            panels.get_mut(panel).begin_hide(HideReason::Toggled, &mut ctx);
        } else {
            enforce_exclusivity(panels, panel, &mut ctx);
            panels.get_mut(panel).begin_show(&mut ctx);
        }
    }

    /// Tears a panel down immediately: timers and slide dropped, window
    /// snapped to its hidden position.
    pub fn close(&mut self, panel: PanelId, now: Instant) {
        let (panels, mut ctx) = self.parts(now);
        panels.get_mut(panel).close(&mut ctx);
    }
}
