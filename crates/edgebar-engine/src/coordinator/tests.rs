use std::time::{Duration, Instant};

use edgebar_common::events::{EventBus, HideReason, ShellEvent};
use edgebar_common::types::{PanelId, Point, ScreenRect};
use edgebar_config::EdgebarConfig;
use tokio::sync::broadcast;

use super::*;
use crate::host::{SimulatedHost, WindowCommand};
use crate::panel::PanelPhase;

const SCREEN: ScreenRect = ScreenRect::new(0, 0, 1920, 1080);
const NOWHERE: Point = Point::new(960, 540);

struct Harness {
    coord: Coordinator,
    host: SimulatedHost,
    events: broadcast::Receiver<ShellEvent>,
    t0: Instant,
    now: u64,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(EdgebarConfig::default())
    }

    fn with_config(config: EdgebarConfig) -> Self {
        let host = SimulatedHost::new(SCREEN);
        host.set_cursor(NOWHERE);
        let bus = EventBus::new(256);
        let events = bus.subscribe();
        let coord = Coordinator::from_config(&config, Box::new(host.clone()), bus).unwrap();
        let t0 = Instant::now();
        let mut h = Self {
            coord,
            host,
            events,
            t0,
            now: 0,
        };
        h.coord.start(t0);
        h.coord.poll(t0);
        h.host.clear_commands();
        h
    }

    fn at(&self, ms: u64) -> Instant {
        self.t0 + Duration::from_millis(ms)
    }

    fn instant(&self) -> Instant {
        self.at(self.now)
    }

    /// Moves the cursor and samples it immediately.
    fn cursor(&mut self, x: i32, y: i32) {
        self.host.set_cursor(Point::new(x, y));
        self.coord.poll(self.instant());
    }

    /// Polls every 10ms up to and including `ms`, checking sidebar
    /// exclusivity after every tick.
    fn run_to(&mut self, ms: u64) {
        while self.now < ms {
            self.now = (self.now + 10).min(ms);
            self.coord.poll(self.instant());
            let left = self.coord.phase(PanelId::LeftSidebar);
            let right = self.coord.phase(PanelId::RightSidebar);
            assert!(
                !(left == PanelPhase::Visible && right == PanelPhase::Visible),
                "both sidebars visible at {}ms",
                self.now
            );
        }
    }

    fn phase(&self, id: PanelId) -> PanelPhase {
        self.coord.phase(id)
    }

    fn drain(&mut self) -> Vec<ShellEvent> {
        let mut out = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            out.push(event);
        }
        out
    }
}

fn hidden(panel: PanelId, reason: HideReason) -> ShellEvent {
    ShellEvent::PanelHidden { panel, reason }
}

#[test]
fn start_parks_everything_hidden() {
    let h = Harness::new();
    for id in PanelId::ALL {
        assert_eq!(h.phase(id), PanelPhase::Hidden);
        assert!(!h.host.is_visible(id));
    }
    assert_eq!(h.host.position(PanelId::MainBar), Some(Point::new(0, -60)));
    assert_eq!(h.host.position(PanelId::LeftSidebar), Some(Point::new(-320, 60)));
    assert_eq!(h.host.position(PanelId::RightSidebar), Some(Point::new(1920, 60)));
    assert_eq!(h.coord.next_deadline(), None);
}

#[test]
fn main_bar_hover_scenario() {
    let mut h = Harness::new();

    h.cursor(900, 5);
    h.run_to(490);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Hidden);
    h.run_to(550);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Showing);
    h.run_to(600);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
    assert_eq!(h.coord.position(PanelId::MainBar), Point::new(0, 0));
    assert_eq!(h.host.position(PanelId::MainBar), Some(Point::new(0, 0)));

    h.cursor(900, 500);
    h.run_to(1590);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
    h.run_to(1650);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Hiding);
    h.run_to(1700);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Hidden);
    assert_eq!(h.coord.position(PanelId::MainBar), Point::new(0, -60));
    assert!(!h.host.is_visible(PanelId::MainBar));

    assert_eq!(
        h.drain(),
        vec![
            ShellEvent::PanelShown(PanelId::MainBar),
            hidden(PanelId::MainBar, HideReason::AutoHide),
        ]
    );
}

#[test]
fn brief_hover_is_debounced() {
    let mut h = Harness::new();
    h.cursor(900, 5);
    h.run_to(300);
    h.cursor(900, 500);
    h.run_to(3000);

    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Hidden);
    assert!(h.host.commands().is_empty());
    assert!(h.drain().is_empty());
}

#[test]
fn hovering_where_the_bar_appears_summons_it() {
    let mut h = Harness::new();
    h.cursor(900, 40);
    h.run_to(700);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
}

#[test]
fn repeated_show_while_visible_changes_nothing() {
    let mut h = Harness::new();
    h.cursor(900, 5);
    h.run_to(700);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
    let commands = h.host.commands().len();

    h.run_to(2000);
    h.coord.set_auto_hide(false, h.instant());
    h.run_to(2500);

    assert_eq!(h.host.commands().len(), commands);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
    assert_eq!(h.coord.position(PanelId::MainBar), Point::new(0, 0));
    assert!(!h.coord.snapshot(PanelId::MainBar).animating);
}

#[test]
fn left_entry_forces_visible_right_out() {
    let mut h = Harness::new();
    h.cursor(1910, 500);
    h.run_to(500);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Visible);

    h.cursor(5, 500);
    h.run_to(510);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Hiding);
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Hidden);
    let left = h.coord.snapshot(PanelId::LeftSidebar);
    assert!(left.show_pending);
    assert!(!h.coord.snapshot(PanelId::RightSidebar).hide_pending);

    h.run_to(710);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Hidden);
    h.run_to(1010);
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Visible);

    assert_eq!(
        h.drain(),
        vec![
            ShellEvent::PanelShown(PanelId::RightSidebar),
            hidden(PanelId::RightSidebar, HideReason::Exclusivity),
            ShellEvent::PanelShown(PanelId::LeftSidebar),
        ]
    );
}

#[test]
fn toggling_a_sidebar_displaces_the_other() {
    let mut h = Harness::new();
    h.coord.toggle(PanelId::RightSidebar, h.instant());
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Showing);
    h.run_to(200);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Visible);

    h.coord.toggle(PanelId::LeftSidebar, h.instant());
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Showing);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Hiding);
    h.run_to(400);
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Visible);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Hidden);

    h.coord.toggle(PanelId::LeftSidebar, h.instant());
    h.run_to(600);
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Hidden);

    let events = h.drain();
    assert!(events.contains(&hidden(PanelId::RightSidebar, HideReason::Exclusivity)));
    assert_eq!(
        events.last(),
        Some(&hidden(PanelId::LeftSidebar, HideReason::Toggled))
    );
}

#[test]
fn entering_opposite_strip_reverses_a_showing_sidebar() {
    let mut h = Harness::new();
    h.coord.toggle(PanelId::LeftSidebar, h.instant());
    h.run_to(60);
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Showing);
    let mid = h.coord.position(PanelId::LeftSidebar);
    assert!(mid.x > -320 && mid.x < 0);

    h.cursor(1910, 500);
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Hiding);
    assert!(h.coord.snapshot(PanelId::RightSidebar).show_pending);

    h.run_to(80);
    assert!(h.coord.position(PanelId::LeftSidebar).x < mid.x);

    h.run_to(500);
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Hidden);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Visible);
    assert_eq!(
        h.drain(),
        vec![
            hidden(PanelId::LeftSidebar, HideReason::Exclusivity),
            ShellEvent::PanelShown(PanelId::RightSidebar),
        ]
    );
}

#[test]
fn main_bar_is_not_part_of_sidebar_exclusivity() {
    let mut h = Harness::new();
    h.coord.toggle(PanelId::MainBar, h.instant());
    h.coord.toggle(PanelId::LeftSidebar, h.instant());
    h.run_to(200);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Visible);
}

#[test]
fn failed_cursor_query_skips_classification() {
    let mut h = Harness::new();
    h.host.fail_cursor_queries(true);
    h.cursor(900, 5);
    h.run_to(1000);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Hidden);
    assert!(!h.coord.snapshot(PanelId::MainBar).show_pending);

    h.host.fail_cursor_queries(false);
    h.run_to(1710);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
}

#[test]
fn failed_screen_query_keeps_current_state() {
    let mut h = Harness::new();
    h.cursor(900, 5);
    h.run_to(700);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);

    h.host.fail_screen_queries(true);
    h.cursor(900, 500);
    h.run_to(3000);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
    assert!(!h.coord.snapshot(PanelId::MainBar).hide_pending);
}

#[test]
fn lost_window_resets_panel_and_loop_survives() {
    let mut h = Harness::new();
    h.cursor(1910, 500);
    h.run_to(360);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Showing);

    h.host.destroy_window(PanelId::RightSidebar);
    h.run_to(380);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Hidden);
    assert_eq!(h.coord.position(PanelId::RightSidebar), Point::new(1920, 60));
    assert!(!h.coord.snapshot(PanelId::RightSidebar).animating);
    assert_eq!(
        h.drain(),
        vec![hidden(PanelId::RightSidebar, HideReason::WindowLost)]
    );

    // Re-summoning the dead window fails quietly.
    h.cursor(900, 500);
    h.run_to(500);
    h.cursor(1910, 500);
    h.run_to(1000);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Hidden);

    // Other panels are unaffected.
    h.cursor(900, 5);
    h.run_to(1800);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
}

#[test]
fn auto_hide_toggle_holds_main_bar() {
    let mut h = Harness::new();
    assert!(h.coord.auto_hide_enabled());

    assert!(!h.coord.toggle_auto_hide(h.instant()));
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Showing);
    h.run_to(5000);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);

    // Passing over the bar and leaving does not arm a hide.
    h.cursor(900, 5);
    h.run_to(5100);
    h.cursor(900, 500);
    h.run_to(8000);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);

    assert!(h.coord.toggle_auto_hide(h.instant()));
    assert!(h.coord.snapshot(PanelId::MainBar).hide_pending);
    h.run_to(9200);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Hidden);

    assert_eq!(
        h.drain(),
        vec![
            ShellEvent::AutoHideChanged(false),
            ShellEvent::PanelShown(PanelId::MainBar),
            ShellEvent::AutoHideChanged(true),
            hidden(PanelId::MainBar, HideReason::AutoHide),
        ]
    );
}

#[test]
fn enabling_auto_hide_under_cursor_waits_for_leave() {
    let mut h = Harness::new();
    h.coord.set_auto_hide(false, h.instant());
    h.cursor(900, 5);
    h.run_to(300);

    h.coord.set_auto_hide(true, h.instant());
    assert!(!h.coord.snapshot(PanelId::MainBar).hide_pending);
    h.run_to(3000);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
}

#[test]
fn setting_same_auto_hide_value_is_silent() {
    let mut h = Harness::new();
    h.coord.set_auto_hide(true, h.instant());
    assert!(h.drain().is_empty());
}

#[test]
fn toggle_cannot_hide_held_main_bar() {
    let mut h = Harness::new();
    h.coord.set_auto_hide(false, h.instant());
    h.run_to(200);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
    h.host.clear_commands();

    h.coord.toggle(PanelId::MainBar, h.instant());
    h.run_to(400);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
    assert!(h.host.commands().is_empty());

    h.coord.set_auto_hide(true, h.instant());
    h.coord.toggle(PanelId::MainBar, h.instant());
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Hiding);
}

#[test]
fn disabled_auto_hide_at_start_shows_bar() {
    let mut config = EdgebarConfig::default();
    config.behavior.auto_hide = false;
    let mut h = Harness::with_config(config);
    h.run_to(200);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
    assert!(h.host.is_visible(PanelId::MainBar));
}

#[test]
fn close_snaps_and_notifies() {
    let mut h = Harness::new();
    h.cursor(5, 500);
    h.run_to(500);
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Visible);
    h.drain();
    h.host.clear_commands();

    h.coord.close(PanelId::LeftSidebar, h.instant());
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Hidden);
    assert_eq!(
        h.host.commands(),
        vec![
            WindowCommand::Move(PanelId::LeftSidebar, Point::new(-320, 60)),
            WindowCommand::Hide(PanelId::LeftSidebar),
        ]
    );
    assert_eq!(
        h.drain(),
        vec![hidden(PanelId::LeftSidebar, HideReason::Closed)]
    );

    // The cursor never left, so there is no new edge to re-summon it.
    h.run_to(2000);
    assert_eq!(h.phase(PanelId::LeftSidebar), PanelPhase::Hidden);
}

#[test]
fn close_mid_slide_leaves_no_timers_or_runs() {
    let mut h = Harness::new();
    h.cursor(1910, 500);
    h.run_to(360);
    assert_eq!(h.phase(PanelId::RightSidebar), PanelPhase::Showing);
    h.coord.close(PanelId::RightSidebar, h.instant());

    let snap = h.coord.snapshot(PanelId::RightSidebar);
    assert!(!snap.animating && !snap.show_pending && !snap.hide_pending);
    let moves = h.host.moves(PanelId::RightSidebar).len();
    h.run_to(1000);
    assert_eq!(h.host.moves(PanelId::RightSidebar).len(), moves);
}

#[test]
fn returning_mid_hide_reverses_from_current_position() {
    let mut h = Harness::new();
    h.cursor(900, 5);
    h.run_to(700);
    h.cursor(900, 500);
    h.run_to(1740);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Hiding);

    h.cursor(900, 5);
    h.run_to(1750);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Showing);
    let mid = h.coord.position(PanelId::MainBar);
    assert!(mid.y < 0 && mid.y > -60);

    h.run_to(2100);
    assert_eq!(h.phase(PanelId::MainBar), PanelPhase::Visible);
    assert_eq!(h.coord.position(PanelId::MainBar), Point::new(0, 0));
    assert!(!h
        .drain()
        .iter()
        .any(|e| matches!(e, ShellEvent::PanelHidden { .. })));
}

#[test]
fn next_deadline_tracks_pending_work() {
    let mut h = Harness::new();
    h.cursor(900, 5);
    assert_eq!(h.coord.next_deadline(), Some(h.at(500)));

    h.run_to(500);
    assert_eq!(h.coord.next_deadline(), Some(h.at(520)));
}

#[test]
fn snapshots_serialize_for_the_shell() {
    let h = Harness::new();
    let json = serde_json::to_value(h.coord.snapshots()).unwrap();
    let panels = json.as_array().unwrap();
    assert_eq!(panels.len(), 3);
    assert_eq!(panels[0]["id"], "main-bar");
    assert_eq!(panels[0]["phase"], "hidden");
    assert_eq!(panels[2]["position"]["x"], 1920);
}
