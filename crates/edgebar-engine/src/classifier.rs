//! Pure cursor-to-zone classification.

use edgebar_common::types::{PanelId, Point, ScreenRect};

use crate::layout::PanelSpec;
use crate::panel::PanelPhase;

/// What the classifier needs to know about one panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelView<'a> {
    pub spec: &'a PanelSpec,
    pub phase: PanelPhase,
    /// The rectangle the panel currently occupies on screen.
    pub rect: ScreenRect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneFlags {
    pub in_approach_zone: bool,
    pub over_panel: bool,
}

impl ZoneFlags {
    pub fn hovered(&self) -> bool {
        self.in_approach_zone || self.over_panel
    }
}

/// Per-panel zone membership for one cursor sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneMembership {
    main_bar: ZoneFlags,
    left_sidebar: ZoneFlags,
    right_sidebar: ZoneFlags,
}

impl ZoneMembership {
    pub fn get(&self, id: PanelId) -> ZoneFlags {
        match id {
            PanelId::MainBar => self.main_bar,
            PanelId::LeftSidebar => self.left_sidebar,
            PanelId::RightSidebar => self.right_sidebar,
        }
    }

    fn set(&mut self, id: PanelId, flags: ZoneFlags) {
        match id {
            PanelId::MainBar => self.main_bar = flags,
            PanelId::LeftSidebar => self.left_sidebar = flags,
            PanelId::RightSidebar => self.right_sidebar = flags,
        }
    }
}

pub fn classify_panel(cursor: Point, screen: ScreenRect, view: &PanelView<'_>) -> ZoneFlags {
    let spec = view.spec;
    let in_approach_zone = spec.approach_zone(screen).contains(cursor)
        || (spec.summon_over_rest && spec.rest_rect().contains(cursor));
    let over_panel = view.phase.is_shown_or_showing() && view.rect.contains(cursor);
    ZoneFlags {
        in_approach_zone,
        over_panel,
    }
}

/// Classifies the cursor against every panel. Panels not in `panels` keep
/// default (not hovered) flags.
pub fn classify(cursor: Point, screen: ScreenRect, panels: &[PanelView<'_>]) -> ZoneMembership {
    let mut membership = ZoneMembership::default();
    for view in panels {
        membership.set(view.spec.id, classify_panel(cursor, screen, view));
    }
    membership
}
