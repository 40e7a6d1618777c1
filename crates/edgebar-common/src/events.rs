use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::PanelId;

/// Why a panel went back to `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HideReason {
    /// The cursor left and the hide delay elapsed.
    AutoHide,
    /// The opposite sidebar was summoned.
    Exclusivity,
    /// Explicit close request.
    Closed,
    /// Explicit toggle request.
    Toggled,
    /// A window command failed and the panel was reset.
    WindowLost,
}

impl HideReason {
    /// Hides the surrounding UI did not ask for and must be told about.
    pub fn is_forced(self) -> bool {
        matches!(self, Self::Exclusivity | Self::Closed | Self::WindowLost)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellEvent {
    PanelShown(PanelId),
    PanelHidden { panel: PanelId, reason: HideReason },
    AutoHideChanged(bool),
    Shutdown,
    #[serde(other)]
    Unknown,
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ShellEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ShellEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
