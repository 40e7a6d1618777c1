//! The per-panel visibility state machine.
//!
//! `Hidden -> Showing -> Visible -> Hiding -> Hidden`, with `Showing` and
//! `Hiding` reversible mid-flight. Hover edges arm debounce timers; fired
//! timers start slides; finished slides settle the phase.

use std::time::Instant;

use edgebar_common::errors::PlatformError;
use edgebar_common::events::{EventBus, HideReason, ShellEvent};
use edgebar_common::types::{PanelId, Point, ScreenRect};
use tracing::{debug, info, warn};

use super::types::{PanelAction, PanelPhase, PanelSnapshot, PanelState, TimerKey, TimerKind};
use crate::animator::{AnimationEvent, AnimationStart, Animator};
use crate::host::WindowHost;
use crate::layout::{AnimationSettings, PanelSpec};
use crate::scheduler::DebounceScheduler;

pub type PanelScheduler = DebounceScheduler<TimerKey, PanelAction>;

/// Everything a transition may touch besides the panel's own state.
pub(crate) struct EngineCtx<'a> {
    pub scheduler: &'a mut PanelScheduler,
    pub animator: &'a mut Animator,
    pub host: &'a dyn WindowHost,
    pub settings: &'a AnimationSettings,
    pub bus: &'a EventBus,
    pub now: Instant,
}

#[derive(Debug)]
pub struct PanelMachine {
    spec: PanelSpec,
    state: PanelState,
    hide_reason: HideReason,
}

impl PanelMachine {
    pub fn new(spec: PanelSpec) -> Self {
        let state = PanelState {
            phase: PanelPhase::Hidden,
            position: spec.hidden_position,
            last_hover: false,
        };
        Self {
            spec,
            state,
            hide_reason: HideReason::AutoHide,
        }
    }

    pub fn id(&self) -> PanelId {
        self.spec.id
    }

    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn phase(&self) -> PanelPhase {
        self.state.phase
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    pub fn last_hover(&self) -> bool {
        self.state.last_hover
    }

    pub fn current_rect(&self) -> ScreenRect {
        self.spec.rect_at(self.state.position)
    }

    pub fn snapshot(&self, scheduler: &PanelScheduler, animator: &Animator) -> PanelSnapshot {
        PanelSnapshot {
            id: self.id(),
            phase: self.state.phase,
            position: self.state.position,
            hovered: self.state.last_hover,
            show_pending: scheduler.is_pending(self.key(TimerKind::Show)),
            hide_pending: scheduler.is_pending(self.key(TimerKind::Hide)),
            animating: animator.is_running(self.id()),
        }
    }

    fn key(&self, kind: TimerKind) -> TimerKey {
        TimerKey::new(self.spec.id, kind)
    }

    fn cancel_timers(&self, ctx: &mut EngineCtx<'_>) {
        ctx.scheduler.cancel(self.key(TimerKind::Show));
        ctx.scheduler.cancel(self.key(TimerKind::Hide));
    }

    /// Parks the window at its hidden position.
    pub(crate) fn initialize(&mut self, ctx: &mut EngineCtx<'_>) {
        let id = self.id();
        let hidden = self.spec.hidden_position;
        self.state.phase = PanelPhase::Hidden;
        self.state.position = hidden;
        if let Err(e) = ctx
            .host
            .move_window(id, hidden)
            .and_then(|()| ctx.host.hide_window(id))
        {
            warn!(panel = %id, error = %e, "failed to park window");
        }
    }

    /// Feeds one hover sample. Only edges do anything.
    pub(crate) fn on_hover(&mut self, hovered: bool, hide_allowed: bool, ctx: &mut EngineCtx<'_>) {
        let was = self.state.last_hover;
        self.state.last_hover = hovered;
        let id = self.id();

        match (was, hovered) {
            (false, true) => {
                ctx.scheduler.cancel(self.key(TimerKind::Hide));
                match self.state.phase {
                    PanelPhase::Hidden => {
                        ctx.scheduler.arm(
                            self.key(TimerKind::Show),
                            self.spec.show_delay,
                            PanelAction::BeginShow,
                            ctx.now,
                        );
                        debug!(panel = %id, delay = ?self.spec.show_delay, "show armed");
                    }
                    PanelPhase::Hiding => {
                        debug!(panel = %id, "hover returned mid-hide, reversing");
                        self.begin_show(ctx);
                    }
                    PanelPhase::Showing | PanelPhase::Visible => {}
                }
            }
            (true, false) => {
                if ctx.scheduler.cancel(self.key(TimerKind::Show)) {
                    debug!(panel = %id, "show canceled before delay elapsed");
                }
                if hide_allowed && self.state.phase.is_shown_or_showing() {
                    self.arm_hide(ctx);
                }
            }
            _ => {}
        }
    }

    pub(crate) fn arm_hide(&mut self, ctx: &mut EngineCtx<'_>) {
        ctx.scheduler.arm(
            self.key(TimerKind::Hide),
            self.spec.hide_delay,
            PanelAction::BeginHide,
            ctx.now,
        );
        debug!(panel = %self.id(), delay = ?self.spec.hide_delay, "hide armed");
    }

    pub(crate) fn cancel_hide_timer(&mut self, ctx: &mut EngineCtx<'_>) -> bool {
        ctx.scheduler.cancel(self.key(TimerKind::Hide))
    }

    pub(crate) fn fire(&mut self, action: PanelAction, ctx: &mut EngineCtx<'_>) {
        match action {
            PanelAction::BeginShow => self.begin_show(ctx),
            PanelAction::BeginHide => self.begin_hide(HideReason::AutoHide, ctx),
        }
    }

    /// Starts sliding toward the rest position from wherever the window is.
    /// A no-op while already `Showing` or `Visible`.
    pub(crate) fn begin_show(&mut self, ctx: &mut EngineCtx<'_>) {
        self.cancel_timers(ctx);
        let id = self.id();
        match self.state.phase {
            PanelPhase::Showing | PanelPhase::Visible => return,
            PanelPhase::Hidden => {
                if let Err(e) = ctx.host.show_window(id) {
                    self.window_lost(e, ctx);
                    return;
                }
            }
            PanelPhase::Hiding => {}
        }

        let from = self.state.position;
        let to = self.spec.rest_position;
        match ctx.animator.animate(id, from, to, ctx.settings, ctx.now, ctx.host) {
            Ok(AnimationStart::Started) => {
                self.state.phase = PanelPhase::Showing;
                debug!(panel = %id, %from, "showing");
            }
            Ok(AnimationStart::Jumped) => {
                self.state.position = to;
                self.finish_shown(ctx);
            }
            Err(e) => self.window_lost(e, ctx),
        }
    }

    /// Starts sliding toward the hidden position. A no-op while already
    /// `Hidden` or `Hiding`, except that a forced reason replaces the
    /// reason reported when the slide finishes.
    pub(crate) fn begin_hide(&mut self, reason: HideReason, ctx: &mut EngineCtx<'_>) {
        self.cancel_timers(ctx);
        let id = self.id();
        match self.state.phase {
            PanelPhase::Hidden => return,
            PanelPhase::Hiding => {
                if reason.is_forced() {
                    self.hide_reason = reason;
                }
                return;
            }
            PanelPhase::Showing | PanelPhase::Visible => {}
        }

        self.hide_reason = reason;
        let from = self.state.position;
        let to = self.spec.hidden_position;
        match ctx.animator.animate(id, from, to, ctx.settings, ctx.now, ctx.host) {
            Ok(AnimationStart::Started) => {
                self.state.phase = PanelPhase::Hiding;
                debug!(panel = %id, ?reason, "hiding");
            }
            Ok(AnimationStart::Jumped) => {
                self.state.position = to;
                self.finish_hidden(ctx);
            }
            Err(e) => self.window_lost(e, ctx),
        }
    }

    /// Explicit teardown: drops timers and any slide, snaps to hidden.
    /// A panel that is already hidden only loses its pending timers.
    pub(crate) fn close(&mut self, ctx: &mut EngineCtx<'_>) {
        self.cancel_timers(ctx);
        ctx.animator.cancel(self.id());

        let id = self.id();
        if self.state.phase == PanelPhase::Hidden {
            debug!(panel = %id, "close on hidden panel");
            return;
        }
        let hidden = self.spec.hidden_position;
        if let Err(e) = ctx.host.move_window(id, hidden) {
            warn!(panel = %id, error = %e, "failed to snap closed panel");
        }
        if let Err(e) = ctx.host.hide_window(id) {
            warn!(panel = %id, error = %e, "failed to hide closed panel");
        }

        self.state.phase = PanelPhase::Hidden;
        self.state.position = hidden;
        self.hide_reason = HideReason::AutoHide;
        info!(panel = %id, "closed");
        ctx.bus.publish(ShellEvent::PanelHidden {
            panel: id,
            reason: HideReason::Closed,
        });
    }

    pub(crate) fn on_animation_event(&mut self, event: AnimationEvent, ctx: &mut EngineCtx<'_>) {
        match event {
            AnimationEvent::Stepped { position, .. } => {
                self.state.position = position;
            }
            AnimationEvent::Completed { position, .. } => {
                self.state.position = position;
                match self.state.phase {
                    PanelPhase::Showing => self.finish_shown(ctx),
                    PanelPhase::Hiding => self.finish_hidden(ctx),
                    phase => debug!(panel = %self.id(), ?phase, "stray animation completion"),
                }
            }
            AnimationEvent::Failed { error, .. } => self.window_lost(error, ctx),
        }
    }

    fn finish_shown(&mut self, ctx: &mut EngineCtx<'_>) {
        self.state.phase = PanelPhase::Visible;
        self.state.position = self.spec.rest_position;
        info!(panel = %self.id(), "visible");
        ctx.bus.publish(ShellEvent::PanelShown(self.id()));
    }

    fn finish_hidden(&mut self, ctx: &mut EngineCtx<'_>) {
        let id = self.id();
        let reason = std::mem::replace(&mut self.hide_reason, HideReason::AutoHide);
        self.state.phase = PanelPhase::Hidden;
        self.state.position = self.spec.hidden_position;
        if let Err(e) = ctx.host.hide_window(id) {
            warn!(panel = %id, error = %e, "failed to hide window");
        }
        info!(panel = %id, ?reason, "hidden");
        ctx.bus.publish(ShellEvent::PanelHidden { panel: id, reason });
    }

    /// A window command failed: forget everything in flight and fall back
    /// to `Hidden` without touching the window again.
    fn window_lost(&mut self, error: PlatformError, ctx: &mut EngineCtx<'_>) {
        let id = self.id();
        warn!(panel = %id, %error, "window command failed, resetting panel");
        self.cancel_timers(ctx);
        ctx.animator.cancel(id);

        let was_hidden = self.state.phase == PanelPhase::Hidden;
        self.state.phase = PanelPhase::Hidden;
        self.state.position = self.spec.hidden_position;
        self.hide_reason = HideReason::AutoHide;
        if !was_hidden {
            ctx.bus.publish(ShellEvent::PanelHidden {
                panel: id,
                reason: HideReason::WindowLost,
            });
        }
    }
}
