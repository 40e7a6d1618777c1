//! Core types and constructors for the Coordinator.

use std::time::Instant;

use edgebar_common::errors::PlatformError;
use edgebar_common::events::{EventBus, ShellEvent};
use edgebar_common::types::{PanelId, Point};
use edgebar_config::EdgebarConfig;
use tokio::sync::broadcast;

use crate::animator::Animator;
use crate::host::WindowHost;
use crate::layout::PanelLayout;
use crate::panel::{EngineCtx, PanelMachine, PanelPhase, PanelScheduler, PanelSnapshot};

/// The three panel machines, addressable by id.
#[derive(Debug)]
pub struct Panels {
    main_bar: PanelMachine,
    left_sidebar: PanelMachine,
    right_sidebar: PanelMachine,
}

impl Panels {
    pub fn new(layout: &PanelLayout) -> Self {
        Self {
            main_bar: PanelMachine::new(layout.main_bar.clone()),
            left_sidebar: PanelMachine::new(layout.left_sidebar.clone()),
            right_sidebar: PanelMachine::new(layout.right_sidebar.clone()),
        }
    }

    pub fn get(&self, id: PanelId) -> &PanelMachine {
        match id {
            PanelId::MainBar => &self.main_bar,
            PanelId::LeftSidebar => &self.left_sidebar,
            PanelId::RightSidebar => &self.right_sidebar,
        }
    }

    pub fn get_mut(&mut self, id: PanelId) -> &mut PanelMachine {
        match id {
            PanelId::MainBar => &mut self.main_bar,
            PanelId::LeftSidebar => &mut self.left_sidebar,
            PanelId::RightSidebar => &mut self.right_sidebar,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelMachine> {
        PanelId::ALL.into_iter().map(move |id| self.get(id))
    }
}

/// Owns every panel, the shared timer and animation state, and the host.
///
/// All mutation happens through `&mut self` with an explicit `now`, so one
/// call is one atomic step of the engine.
pub struct Coordinator {
    pub(super) layout: PanelLayout,
    pub(super) host: Box<dyn WindowHost>,
    pub(super) bus: EventBus,
    pub(super) panels: Panels,
    pub(super) scheduler: PanelScheduler,
    pub(super) animator: Animator,
    pub(super) auto_hide: bool,
}

impl Coordinator {
    pub fn new(
        layout: PanelLayout,
        host: Box<dyn WindowHost>,
        bus: EventBus,
        auto_hide: bool,
    ) -> Self {
        Self {
            panels: Panels::new(&layout),
            layout,
            host,
            bus,
            scheduler: PanelScheduler::new(),
            animator: Animator::new(),
            auto_hide,
        }
    }

    /// Builds the layout from `config` and the host's current screen bounds.
    pub fn from_config(
        config: &EdgebarConfig,
        host: Box<dyn WindowHost>,
        bus: EventBus,
    ) -> Result<Self, PlatformError> {
        let screen = host.screen_bounds()?;
        let layout = PanelLayout::from_config(config, screen);
        Ok(Self::new(layout, host, bus, config.behavior.auto_hide))
    }

    /// Splits `self` into the panel set and the context transitions run in.
    pub(super) fn parts(&mut self, now: Instant) -> (&mut Panels, EngineCtx<'_>) {
        let ctx = EngineCtx {
            scheduler: &mut self.scheduler,
            animator: &mut self.animator,
            host: self.host.as_ref(),
            settings: &self.layout.animation,
            bus: &self.bus,
            now,
        };
        (&mut self.panels, ctx)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn panel(&self, id: PanelId) -> &PanelMachine {
        self.panels.get(id)
    }

    pub fn phase(&self, id: PanelId) -> PanelPhase {
        self.panels.get(id).phase()
    }

    pub fn position(&self, id: PanelId) -> Point {
        self.panels.get(id).position()
    }

    pub fn auto_hide_enabled(&self) -> bool {
        self.auto_hide
    }

    pub fn snapshot(&self, id: PanelId) -> PanelSnapshot {
        self.panels.get(id).snapshot(&self.scheduler, &self.animator)
    }

    pub fn snapshots(&self) -> Vec<PanelSnapshot> {
        self.panels
            .iter()
            .map(|p| p.snapshot(&self.scheduler, &self.animator))
            .collect()
    }

    /// When the engine next needs to run even if nothing else happens.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.scheduler.next_deadline(), self.animator.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.bus.subscribe()
    }
}
