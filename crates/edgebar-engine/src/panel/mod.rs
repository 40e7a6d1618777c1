//! Per-panel visibility state.

mod machine;
mod types;

pub(crate) use machine::EngineCtx;
pub use machine::{PanelMachine, PanelScheduler};
pub use types::{PanelAction, PanelPhase, PanelSnapshot, PanelState, TimerKey, TimerKind};
