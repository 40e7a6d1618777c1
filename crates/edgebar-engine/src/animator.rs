//! Stepped ease-out slide animations, one run per panel.
//!
//! A run moves a window from `start` to `target` in `total_steps` discrete
//! moves spaced `duration / total_steps` apart. Starting a new run for a
//! panel discards the old one; a discarded run never issues another move.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use edgebar_common::errors::PlatformError;
use edgebar_common::types::{PanelId, Point};
use tracing::{debug, trace};

use crate::host::WindowHost;
use crate::layout::AnimationSettings;

/// Ease-out cubic: fast start, decelerating into the target.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Interpolates each axis independently and rounds to whole pixels.
pub fn interpolate(from: Point, to: Point, eased: f64) -> Point {
    let axis = |a: i32, b: i32| a + (f64::from(b - a) * eased).round() as i32;
    Point::new(axis(from.x, to.x), axis(from.y, to.y))
}

/// An in-flight interpolation for one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationRun {
    pub start: Point,
    pub target: Point,
    pub total_steps: u32,
    pub current_step: u32,
    started_at: Instant,
    step_interval: Duration,
}

impl AnimationRun {
    /// Window position after `step` moves. The last step is the literal target.
    pub fn position_at(&self, step: u32) -> Point {
        if step >= self.total_steps {
            return self.target;
        }
        let progress = f64::from(step) / f64::from(self.total_steps);
        interpolate(self.start, self.target, ease_out_cubic(progress))
    }

    pub fn next_step_due(&self) -> Instant {
        self.started_at + self.step_interval * (self.current_step + 1)
    }

    pub fn is_finished(&self) -> bool {
        self.current_step >= self.total_steps
    }
}

/// How `Animator::animate` handled a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStart {
    /// A run was queued; moves follow as steps become due.
    Started,
    /// The move was below the distance threshold and was applied at once.
    Jumped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationEvent {
    Stepped { panel: PanelId, position: Point },
    Completed { panel: PanelId, position: Point },
    Failed { panel: PanelId, error: PlatformError },
}

impl AnimationEvent {
    pub fn panel(&self) -> PanelId {
        match *self {
            Self::Stepped { panel, .. }
            | Self::Completed { panel, .. }
            | Self::Failed { panel, .. } => panel,
        }
    }
}

#[derive(Debug, Default)]
pub struct Animator {
    runs: BTreeMap<PanelId, AnimationRun>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) a slide for `panel`, discarding any run in flight.
    ///
    /// Trivial moves skip interpolation and issue a single move to `to`.
    pub fn animate(
        &mut self,
        panel: PanelId,
        from: Point,
        to: Point,
        settings: &AnimationSettings,
        now: Instant,
        host: &dyn WindowHost,
    ) -> Result<AnimationStart, PlatformError> {
        if self.runs.remove(&panel).is_some() {
            debug!(%panel, "superseding in-flight animation");
        }

        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        if dx < settings.min_distance && dy < settings.min_distance {
            host.move_window(panel, to)?;
            return Ok(AnimationStart::Jumped);
        }

        let total_steps = settings.steps.max(1);
        self.runs.insert(
            panel,
            AnimationRun {
                start: from,
                target: to,
                total_steps,
                current_step: 0,
                started_at: now,
                step_interval: settings.duration / total_steps,
            },
        );
        debug!(%panel, %from, %to, total_steps, "animation started");
        Ok(AnimationStart::Started)
    }

    /// Stops the run for `panel` without moving the window.
    pub fn cancel(&mut self, panel: PanelId) -> Option<AnimationRun> {
        self.runs.remove(&panel)
    }

    pub fn run(&self, panel: PanelId) -> Option<&AnimationRun> {
        self.runs.get(&panel)
    }

    pub fn is_running(&self, panel: PanelId) -> bool {
        self.runs.contains_key(&panel)
    }

    pub fn active_runs(&self) -> usize {
        self.runs.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.runs.values().map(AnimationRun::next_step_due).min()
    }

    /// Issues one move per step that has come due. Finished and failed runs
    /// are removed before this returns.
    pub fn advance(&mut self, now: Instant, host: &dyn WindowHost) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        let panels: Vec<PanelId> = self.runs.keys().copied().collect();

        for panel in panels {
            let Some(run) = self.runs.get_mut(&panel) else {
                continue;
            };

            let mut finished = false;
            while !run.is_finished() && run.next_step_due() <= now {
                run.current_step += 1;
                let position = run.position_at(run.current_step);
                if let Err(error) = host.move_window(panel, position) {
                    events.push(AnimationEvent::Failed { panel, error });
                    finished = true;
                    break;
                }
                trace!(%panel, step = run.current_step, %position, "animation step");
                if run.is_finished() {
                    events.push(AnimationEvent::Completed { panel, position });
                    finished = true;
                } else {
                    events.push(AnimationEvent::Stepped { panel, position });
                }
            }

            if finished {
                self.runs.remove(&panel);
            }
        }

        events
    }
}
