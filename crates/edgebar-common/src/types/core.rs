use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in screen pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned screen rectangle. Containment is half-open: the left and
/// top edges are inside, the right and bottom edges are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// The three panels managed by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelId {
    MainBar,
    LeftSidebar,
    RightSidebar,
}

impl PanelId {
    pub const ALL: [PanelId; 3] = [Self::MainBar, Self::LeftSidebar, Self::RightSidebar];

    pub fn is_sidebar(self) -> bool {
        matches!(self, Self::LeftSidebar | Self::RightSidebar)
    }

    /// The sidebar on the opposite edge, if this is a sidebar.
    pub fn opposite_sidebar(self) -> Option<PanelId> {
        match self {
            Self::MainBar => None,
            Self::LeftSidebar => Some(Self::RightSidebar),
            Self::RightSidebar => Some(Self::LeftSidebar),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainBar => "main-bar",
            Self::LeftSidebar => "left-sidebar",
            Self::RightSidebar => "right-sidebar",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
