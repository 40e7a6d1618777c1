//! In-memory `WindowHost` implementation.
//!
//! Used by the headless demo and by tests. Every command is recorded so
//! callers can assert on exactly what the engine asked the host to do.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use edgebar_common::errors::PlatformError;
use edgebar_common::types::{PanelId, Point, ScreenRect};

use super::{Result, WindowHost};

/// A window command as issued by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Move(PanelId, Point),
    Show(PanelId),
    Hide(PanelId),
}

impl WindowCommand {
    pub fn panel(&self) -> PanelId {
        match *self {
            Self::Move(panel, _) | Self::Show(panel) | Self::Hide(panel) => panel,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SimWindow {
    position: Point,
    visible: bool,
}

#[derive(Debug, Default)]
struct SimState {
    cursor: Point,
    screen: ScreenRect,
    windows: BTreeMap<PanelId, SimWindow>,
    destroyed: BTreeSet<PanelId>,
    commands: Vec<WindowCommand>,
    cursor_fails: bool,
    screen_fails: bool,
}

/// Cloneable handle to a shared simulated desktop.
#[derive(Debug, Clone, Default)]
pub struct SimulatedHost {
    inner: Arc<Mutex<SimState>>,
}

impl SimulatedHost {
    /// Creates a desktop with one hidden window per panel at the screen origin.
    pub fn new(screen: ScreenRect) -> Self {
        let windows = PanelId::ALL
            .into_iter()
            .map(|id| {
                (
                    id,
                    SimWindow {
                        position: screen.origin(),
                        visible: false,
                    },
                )
            })
            .collect();
        Self {
            inner: Arc::new(Mutex::new(SimState {
                screen,
                windows,
                ..SimState::default()
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, SimState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_cursor(&self, cursor: Point) {
        self.state().cursor = cursor;
    }

    pub fn fail_cursor_queries(&self, fail: bool) {
        self.state().cursor_fails = fail;
    }

    pub fn fail_screen_queries(&self, fail: bool) {
        self.state().screen_fails = fail;
    }

    /// Simulates the window being destroyed behind the engine's back.
    pub fn destroy_window(&self, panel: PanelId) {
        let mut state = self.state();
        state.windows.remove(&panel);
        state.destroyed.insert(panel);
    }

    pub fn position(&self, panel: PanelId) -> Option<Point> {
        self.state().windows.get(&panel).map(|w| w.position)
    }

    pub fn is_visible(&self, panel: PanelId) -> bool {
        self.state().windows.get(&panel).is_some_and(|w| w.visible)
    }

    pub fn commands(&self) -> Vec<WindowCommand> {
        self.state().commands.clone()
    }

    /// Positions passed to `move_window` for one panel, in order.
    pub fn moves(&self, panel: PanelId) -> Vec<Point> {
        self.state()
            .commands
            .iter()
            .filter_map(|c| match *c {
                WindowCommand::Move(p, to) if p == panel => Some(to),
                _ => None,
            })
            .collect()
    }

    pub fn clear_commands(&self) {
        self.state().commands.clear();
    }

    fn with_window(
        &self,
        panel: PanelId,
        command: WindowCommand,
        apply: impl FnOnce(&mut SimWindow),
    ) -> Result<()> {
        let mut state = self.state();
        if state.destroyed.contains(&panel) {
            return Err(PlatformError::WindowInvalid(panel));
        }
        let window = state.windows.entry(panel).or_default();
        apply(window);
        state.commands.push(command);
        Ok(())
    }
}

impl WindowHost for SimulatedHost {
    fn cursor_position(&self) -> Result<Point> {
        let state = self.state();
        if state.cursor_fails {
            return Err(PlatformError::CursorQuery("simulated failure".into()));
        }
        Ok(state.cursor)
    }

    fn screen_bounds(&self) -> Result<ScreenRect> {
        let state = self.state();
        if state.screen_fails {
            return Err(PlatformError::ScreenQuery("simulated failure".into()));
        }
        Ok(state.screen)
    }

    fn move_window(&self, panel: PanelId, to: Point) -> Result<()> {
        self.with_window(panel, WindowCommand::Move(panel, to), |w| w.position = to)
    }

    fn show_window(&self, panel: PanelId) -> Result<()> {
        self.with_window(panel, WindowCommand::Show(panel), |w| w.visible = true)
    }

    fn hide_window(&self, panel: PanelId) -> Result<()> {
        self.with_window(panel, WindowCommand::Hide(panel), |w| w.visible = false)
    }

    fn window_position(&self, panel: PanelId) -> Result<Point> {
        self.state()
            .windows
            .get(&panel)
            .map(|w| w.position)
            .ok_or(PlatformError::WindowInvalid(panel))
    }
}
