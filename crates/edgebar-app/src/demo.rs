//! Scripted cursor tour against a `SimulatedHost`.
//!
//! Exercises every panel and the shell-facing controls, logging each
//! `ShellEvent` as it arrives.

use std::time::Duration;

use edgebar_common::events::{EventBus, ShellEvent};
use edgebar_common::types::{PanelId, Point, ScreenRect};
use edgebar_common::EdgebarError;
use edgebar_config::EdgebarConfig;
use edgebar_engine::{Coordinator, ShellHandle, SimulatedHost};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{info, warn};

/// One leg of the tour: park the cursor somewhere and wait.
struct Step {
    label: &'static str,
    cursor: Point,
    hold: Duration,
}

fn tour(screen: ScreenRect) -> Vec<Step> {
    let center = Point::new(screen.x + screen.width / 2, screen.y + screen.height / 2);
    let mid_y = screen.y + screen.height / 2;
    let step = |label, cursor, ms| Step {
        label,
        cursor,
        hold: Duration::from_millis(ms),
    };
    vec![
        step("top edge", Point::new(center.x, screen.y + 2), 900),
        step("away from the bar", center, 1500),
        step("brief brush of the top edge", Point::new(center.x, screen.y + 2), 200),
        step("away again", center, 800),
        step("right edge", Point::new(screen.right() - 2, mid_y), 700),
        step("left edge", Point::new(screen.x + 2, mid_y), 700),
        step("rest in the middle", center, 1200),
    ]
}

/// Runs the tour to completion and returns once the engine has stopped.
pub async fn run(config: &EdgebarConfig, screen: ScreenRect) -> Result<(), EdgebarError> {
    let host = SimulatedHost::new(screen);
    host.set_cursor(Point::new(screen.x + screen.width / 2, screen.y + screen.height / 2));

    let bus = EventBus::new(64);
    let listener = spawn_listener(bus.subscribe());
    let coordinator = Coordinator::from_config(config, Box::new(host.clone()), bus)?;
    let poll = Duration::from_millis(u64::from(config.behavior.poll_interval_ms));
    let (handle, engine) = edgebar_engine::spawn(coordinator, poll);

    for step in tour(screen) {
        info!(step = step.label, cursor = %step.cursor, "moving cursor");
        host.set_cursor(step.cursor);
        time::sleep(step.hold).await;
    }

    controls(&handle).await?;
    report(&handle).await?;

    handle.shutdown().await?;
    engine
        .await
        .map_err(|e| EdgebarError::Other(format!("engine task failed: {e}")))?;
    listener
        .await
        .map_err(|e| EdgebarError::Other(format!("event listener failed: {e}")))?;
    Ok(())
}

/// Drives the toggle, close, and auto-hide controls a shell would expose.
async fn controls(handle: &ShellHandle) -> Result<(), EdgebarError> {
    let settle = Duration::from_millis(400);

    handle.toggle(PanelId::LeftSidebar).await?;
    time::sleep(settle).await;
    handle.toggle(PanelId::RightSidebar).await?;
    time::sleep(settle).await;
    handle.close(PanelId::RightSidebar).await?;

    let enabled = handle.toggle_auto_hide().await?;
    info!(enabled, "auto-hide toggled");
    time::sleep(settle).await;
    let enabled = handle.toggle_auto_hide().await?;
    info!(enabled, "auto-hide toggled");
    time::sleep(Duration::from_millis(1500)).await;
    Ok(())
}

async fn report(handle: &ShellHandle) -> Result<(), EdgebarError> {
    let snapshots = handle.snapshot().await?;
    match serde_json::to_string(&snapshots) {
        Ok(json) => info!(panels = %json, "final state"),
        Err(e) => warn!(error = %e, "failed to serialize snapshots"),
    }
    Ok(())
}

fn spawn_listener(mut events: broadcast::Receiver<ShellEvent>) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut seen = 0;
        loop {
            match events.recv().await {
                Ok(ShellEvent::Shutdown) | Err(RecvError::Closed) => break,
                Ok(event) => {
                    seen += 1;
                    info!(?event, "shell event");
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "event listener lagged");
                }
            }
        }
        seen
    })
}
