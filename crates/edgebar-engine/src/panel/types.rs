use edgebar_common::types::{PanelId, Point};
use serde::Serialize;

/// Logical visibility of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPhase {
    Hidden,
    Showing,
    Visible,
    Hiding,
}

impl PanelPhase {
    pub fn is_shown_or_showing(self) -> bool {
        matches!(self, Self::Showing | Self::Visible)
    }
}

/// Mutable per-panel state, owned by its `PanelMachine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub phase: PanelPhase,
    pub position: Point,
    /// Hover classification from the previous tick, for edge detection.
    pub last_hover: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    Show,
    Hide,
}

/// Scheduler key: one show and one hide slot per panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerKey {
    pub panel: PanelId,
    pub kind: TimerKind,
}

impl TimerKey {
    pub fn new(panel: PanelId, kind: TimerKind) -> Self {
        Self { panel, kind }
    }
}

/// What a debounce timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    BeginShow,
    BeginHide,
}

/// Read-only view of a panel for the surrounding shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelSnapshot {
    pub id: PanelId,
    pub phase: PanelPhase,
    pub position: Point,
    pub hovered: bool,
    pub show_pending: bool,
    pub hide_pending: bool,
    pub animating: bool,
}
