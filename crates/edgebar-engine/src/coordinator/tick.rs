//! Startup, the polling tick, and deadline-driven advancement.

use std::time::Instant;

use edgebar_common::events::HideReason;
use edgebar_common::types::PanelId;
use tracing::{debug, info, warn};

use crate::classifier::{self, PanelView};
use crate::panel::{EngineCtx, PanelAction, TimerKind};

use super::{Coordinator, Panels};

impl Coordinator {
    /// Parks every panel at its hidden position. With auto-hide off the
    /// main bar is shown straight away.
    pub fn start(&mut self, now: Instant) {
        let auto_hide = self.auto_hide;
        let (panels, mut ctx) = self.parts(now);
        for id in PanelId::ALL {
            panels.get_mut(id).initialize(&mut ctx);
        }
        if !auto_hide {
            panels.get_mut(PanelId::MainBar).begin_show(&mut ctx);
        }
        info!(auto_hide, "coordinator started");
    }

    /// One polling tick: settle anything due, sample the cursor, and feed
    /// hover edges to every panel.
    ///
    /// Never fails. A failed cursor or screen query skips classification
    /// for this tick only.
    pub fn poll(&mut self, now: Instant) {
        self.advance(now);

        let cursor = match self.host.cursor_position() {
            Ok(cursor) => cursor,
            Err(e) => {
                warn!(error = %e, "cursor query failed, skipping tick");
                return;
            }
        };
        let screen = match self.host.screen_bounds() {
            Ok(screen) => screen,
            Err(e) => {
                warn!(error = %e, "screen query failed, skipping tick");
                return;
            }
        };

        let views: Vec<PanelView<'_>> = self
            .panels
            .iter()
            .map(|panel| {
                let position = self
                    .host
                    .window_position(panel.id())
                    .unwrap_or_else(|e| {
                        debug!(panel = %panel.id(), error = %e, "using tracked position");
                        panel.position()
                    });
                PanelView {
                    spec: panel.spec(),
                    phase: panel.phase(),
                    rect: panel.spec().rect_at(position),
                }
            })
            .collect();
        let zones = classifier::classify(cursor, screen, &views);

        let auto_hide = self.auto_hide;
        let (panels, mut ctx) = self.parts(now);
        for id in PanelId::ALL {
            let hovered = zones.get(id).hovered();
            let panel = panels.get(id);
            if id.is_sidebar()
                && hovered
                && !panel.last_hover()
                && !panel.phase().is_shown_or_showing()
            {
                enforce_exclusivity(panels, id, &mut ctx);
            }
            let hide_allowed = id != PanelId::MainBar || auto_hide;
            panels.get_mut(id).on_hover(hovered, hide_allowed, &mut ctx);
        }
    }

    /// Fires due debounce timers, then applies due animation steps.
    pub fn advance(&mut self, now: Instant) {
        let auto_hide = self.auto_hide;
        let (panels, mut ctx) = self.parts(now);

        for (key, action) in ctx.scheduler.take_due(now) {
            if key.panel == PanelId::MainBar && action == PanelAction::BeginHide && !auto_hide {
                continue;
            }
            if key.kind == TimerKind::Show && key.panel.is_sidebar() {
                enforce_exclusivity(panels, key.panel, &mut ctx);
            }
            panels.get_mut(key.panel).fire(action, &mut ctx);
        }

        for event in ctx.animator.advance(now, ctx.host) {
            panels.get_mut(event.panel()).on_animation_event(event, &mut ctx);
        }
    }
}

/// Forces the sidebar opposite `summoned` into `Hiding`, skipping its
/// debounce. Both sidebars are read under the same borrow.
pub(super) fn enforce_exclusivity(
    panels: &mut Panels,
    summoned: PanelId,
    ctx: &mut EngineCtx<'_>,
) {
    let Some(other) = summoned.opposite_sidebar() else {
        return;
    };
    let other = panels.get_mut(other);
    if other.phase().is_shown_or_showing() {
        debug!(%summoned, other = %other.id(), "forcing opposite sidebar out");
        other.begin_hide(HideReason::Exclusivity, ctx);
    }
}
