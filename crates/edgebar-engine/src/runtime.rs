//! Async driver that owns a `Coordinator` on a tokio task.
//!
//! The task wakes on the poll interval, on the coordinator's next timer or
//! animation deadline, and on incoming `ShellCommand`s. Engine errors never
//! end the loop; only `Shutdown` or dropping every handle does.

use std::future;
use std::time::Duration;

use edgebar_common::errors::EdgebarError;
use edgebar_common::events::ShellEvent;
use edgebar_common::types::PanelId;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::coordinator::Coordinator;
use crate::panel::PanelSnapshot;

const COMMAND_BUFFER: usize = 32;

/// Requests the surrounding shell can make of a running engine.
#[derive(Debug)]
pub enum ShellCommand {
    SetAutoHide(bool),
    ToggleAutoHide(oneshot::Sender<bool>),
    AutoHideEnabled(oneshot::Sender<bool>),
    Toggle(PanelId),
    Close(PanelId),
    Snapshot(oneshot::Sender<Vec<PanelSnapshot>>),
    Shutdown,
}

/// Cloneable sender side of a running engine.
#[derive(Debug, Clone)]
pub struct ShellHandle {
    tx: mpsc::Sender<ShellCommand>,
}

impl ShellHandle {
    async fn send(&self, command: ShellCommand) -> Result<(), EdgebarError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| EdgebarError::EngineStopped)
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> ShellCommand,
    ) -> Result<T, EdgebarError> {
        let (reply, rx) = oneshot::channel();
        self.send(command(reply)).await?;
        rx.await.map_err(|_| EdgebarError::EngineStopped)
    }

    pub async fn set_auto_hide(&self, enabled: bool) -> Result<(), EdgebarError> {
        self.send(ShellCommand::SetAutoHide(enabled)).await
    }

    /// Flips auto-hide and returns the new setting.
    pub async fn toggle_auto_hide(&self) -> Result<bool, EdgebarError> {
        self.request(ShellCommand::ToggleAutoHide).await
    }

    pub async fn auto_hide_enabled(&self) -> Result<bool, EdgebarError> {
        self.request(ShellCommand::AutoHideEnabled).await
    }

    pub async fn toggle(&self, panel: PanelId) -> Result<(), EdgebarError> {
        self.send(ShellCommand::Toggle(panel)).await
    }

    pub async fn close(&self, panel: PanelId) -> Result<(), EdgebarError> {
        self.send(ShellCommand::Close(panel)).await
    }

    pub async fn snapshot(&self) -> Result<Vec<PanelSnapshot>, EdgebarError> {
        self.request(ShellCommand::Snapshot).await
    }

    pub async fn shutdown(&self) -> Result<(), EdgebarError> {
        self.send(ShellCommand::Shutdown).await
    }
}

/// Starts `coordinator` on a new task and returns a handle to it.
///
/// The join handle yields the coordinator back once the task stops.
pub fn spawn(
    coordinator: Coordinator,
    poll_interval: Duration,
) -> (ShellHandle, JoinHandle<Coordinator>) {
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    let task = tokio::spawn(run(coordinator, poll_interval, rx));
    (ShellHandle { tx }, task)
}

async fn run(
    mut coordinator: Coordinator,
    poll_interval: Duration,
    mut commands: mpsc::Receiver<ShellCommand>,
) -> Coordinator {
    let mut ticker = time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    coordinator.start(now());
    info!(?poll_interval, "engine running");

    loop {
        let deadline = coordinator.next_deadline().map(Instant::from_std);
        tokio::select! {
            _ = ticker.tick() => coordinator.poll(now()),
            _ = sleep_until(deadline) => coordinator.advance(now()),
            command = commands.recv() => match command {
                Some(ShellCommand::Shutdown) => {
                    debug!("shutdown requested");
                    break;
                }
                Some(command) => handle(&mut coordinator, command),
                None => {
                    debug!("all shell handles dropped");
                    break;
                }
            },
        }
    }

    coordinator.events().publish(ShellEvent::Shutdown);
    info!("engine stopped");
    coordinator
}

fn handle(coordinator: &mut Coordinator, command: ShellCommand) {
    debug!(?command, "shell command");
    match command {
        ShellCommand::SetAutoHide(enabled) => coordinator.set_auto_hide(enabled, now()),
        ShellCommand::ToggleAutoHide(reply) => {
            let _ = reply.send(coordinator.toggle_auto_hide(now()));
        }
        ShellCommand::AutoHideEnabled(reply) => {
            let _ = reply.send(coordinator.auto_hide_enabled());
        }
        ShellCommand::Toggle(panel) => coordinator.toggle(panel, now()),
        ShellCommand::Close(panel) => coordinator.close(panel, now()),
        ShellCommand::Snapshot(reply) => {
            let _ = reply.send(coordinator.snapshots());
        }
        ShellCommand::Shutdown => {}
    }
}

/// Engine time comes from the tokio clock so paused-time tests stay
/// deterministic.
fn now() -> std::time::Instant {
    Instant::now().into_std()
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => future::pending().await,
    }
}
