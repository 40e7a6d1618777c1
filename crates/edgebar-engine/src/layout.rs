//! Static per-panel geometry derived from config and screen bounds.

use std::time::Duration;

use edgebar_common::types::{PanelId, Point, ScreenRect, Size};
use edgebar_config::EdgebarConfig;
use serde::{Deserialize, Serialize};

/// The screen edge a panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelEdge {
    Top,
    Left,
    Right,
}

/// Immutable layout and timing for one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub id: PanelId,
    pub edge: PanelEdge,
    pub rest_position: Point,
    pub hidden_position: Point,
    pub size: Size,
    /// Depth in pixels of the strip along `edge` that counts as approach.
    pub hover_zone_thickness: i32,
    pub show_delay: Duration,
    pub hide_delay: Duration,
    /// Whether hovering where the panel rests summons it even while hidden.
    pub summon_over_rest: bool,
}

impl PanelSpec {
    pub fn rect_at(&self, position: Point) -> ScreenRect {
        ScreenRect::at(position, self.size)
    }

    pub fn rest_rect(&self) -> ScreenRect {
        self.rect_at(self.rest_position)
    }

    /// The edge strip whose entry triggers this panel's show sequence.
    ///
    /// Side strips only span the panel's own vertical extent so the top
    /// corners stay with the main bar.
    pub fn approach_zone(&self, screen: ScreenRect) -> ScreenRect {
        let depth = self.hover_zone_thickness;
        match self.edge {
            PanelEdge::Top => ScreenRect::new(screen.x, screen.y, screen.width, depth),
            PanelEdge::Left => {
                ScreenRect::new(screen.x, self.rest_position.y, depth, self.size.height)
            }
            PanelEdge::Right => ScreenRect::new(
                screen.right() - depth,
                self.rest_position.y,
                depth,
                self.size.height,
            ),
        }
    }
}

/// Slide animation parameters shared by every panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSettings {
    pub duration: Duration,
    pub steps: u32,
    /// Moves shorter than this on both axes skip interpolation.
    pub min_distance: i32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(100),
            steps: 5,
            min_distance: 5,
        }
    }
}

/// The full panel set for one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub screen: ScreenRect,
    pub main_bar: PanelSpec,
    pub left_sidebar: PanelSpec,
    pub right_sidebar: PanelSpec,
    pub animation: AnimationSettings,
}

impl PanelLayout {
    pub fn from_config(config: &EdgebarConfig, screen: ScreenRect) -> Self {
        let bar = &config.main_bar;
        let side = &config.sidebars;

        let bar_height = px(bar.height);
        let main_bar = PanelSpec {
            id: PanelId::MainBar,
            edge: PanelEdge::Top,
            rest_position: Point::new(screen.x, screen.y),
            hidden_position: Point::new(screen.x, screen.y - bar_height),
            size: Size::new(screen.width, bar_height),
            hover_zone_thickness: px(bar.hover_zone),
            show_delay: ms(bar.show_delay_ms),
            hide_delay: ms(bar.hide_delay_ms),
            summon_over_rest: true,
        };

        let width = px(side.width);
        let top = screen.y + px(side.top_offset);
        let size = Size::new(width, (screen.height - px(side.top_offset)).max(0));
        let sidebar = |id, edge, rest_x, hidden_x| PanelSpec {
            id,
            edge,
            rest_position: Point::new(rest_x, top),
            hidden_position: Point::new(hidden_x, top),
            size,
            hover_zone_thickness: px(side.hover_zone),
            show_delay: ms(side.show_delay_ms),
            hide_delay: ms(side.hide_delay_ms),
            summon_over_rest: false,
        };

        Self {
            screen,
            main_bar,
            left_sidebar: sidebar(
                PanelId::LeftSidebar,
                PanelEdge::Left,
                screen.x,
                screen.x - width,
            ),
            right_sidebar: sidebar(
                PanelId::RightSidebar,
                PanelEdge::Right,
                screen.right() - width,
                screen.right(),
            ),
            animation: AnimationSettings {
                duration: ms(config.animation.duration_ms),
                steps: config.animation.steps.max(1),
                min_distance: px(config.animation.min_distance_px),
            },
        }
    }

    pub fn spec(&self, id: PanelId) -> &PanelSpec {
        match id {
            PanelId::MainBar => &self.main_bar,
            PanelId::LeftSidebar => &self.left_sidebar,
            PanelId::RightSidebar => &self.right_sidebar,
        }
    }
}

fn ms(value: u32) -> Duration {
    Duration::from_millis(u64::from(value))
}

fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
