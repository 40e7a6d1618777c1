//! Auto-hide engine for a top main bar and two mutually exclusive sidebars.
//!
//! The engine is synchronous and clock-free: every entry point takes the
//! current `Instant`. [`runtime::spawn`] wraps a [`Coordinator`] in a tokio
//! task for real use.

pub mod animator;
pub mod classifier;
pub mod coordinator;
pub mod host;
pub mod layout;
pub mod panel;
pub mod runtime;
pub mod scheduler;

pub use coordinator::Coordinator;
pub use host::{SimulatedHost, WindowHost};
pub use layout::{AnimationSettings, PanelLayout, PanelSpec};
pub use panel::{PanelPhase, PanelSnapshot};
pub use runtime::{spawn, ShellCommand, ShellHandle};
