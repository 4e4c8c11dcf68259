//! Display edges and the policy that assigns a cutout fragment to one of them.
//!
//! A display has two short edges and two long edges. Which physical sides those are depends on the
//! display orientation: a portrait display has its short edges on top/bottom, a landscape (or
//! square) display has them on the left/right.

use crate::geom::{Rect, center_x, center_y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];

    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the display's short edges sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortEdge {
    /// Portrait: short edges are top and bottom.
    OnTop,
    /// Landscape or square: short edges are left and right.
    OnLeft,
}

impl ShortEdge {
    pub fn of(width: i32, height: i32) -> Self {
        if width < height {
            ShortEdge::OnTop
        } else {
            ShortEdge::OnLeft
        }
    }
}

/// Maps `(orientation, fragment lies on a short edge, fragment is on the start side)` to an edge.
///
/// "Start" is top for the vertical axis and left for the horizontal axis.
pub fn decide_which_edge(short_edge: ShortEdge, is_short_edge: bool, is_start: bool) -> Edge {
    match (short_edge, is_short_edge, is_start) {
        (ShortEdge::OnTop, true, true) => Edge::Top,
        (ShortEdge::OnTop, true, false) => Edge::Bottom,
        (ShortEdge::OnTop, false, true) => Edge::Left,
        (ShortEdge::OnTop, false, false) => Edge::Right,
        (ShortEdge::OnLeft, true, true) => Edge::Left,
        (ShortEdge::OnLeft, true, false) => Edge::Right,
        (ShortEdge::OnLeft, false, true) => Edge::Top,
        (ShortEdge::OnLeft, false, false) => Edge::Bottom,
    }
}

/// How a fragment's bounding rectangle relates to the display's short edges.
///
/// Recomputed for every fragment; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub touches_start: bool,
    pub touches_end: bool,
    pub closer_to_start: bool,
}

impl Contact {
    pub fn classify(rect: &Rect, short_edge: ShortEdge, width: i32, height: i32) -> Self {
        match short_edge {
            ShortEdge::OnTop => Self {
                touches_start: rect.min.y <= 0,
                touches_end: rect.max.y >= height,
                closer_to_start: center_y(rect) < height / 2,
            },
            ShortEdge::OnLeft => Self {
                touches_start: rect.min.x <= 0,
                touches_end: rect.max.x >= width,
                closer_to_start: center_x(rect) < width / 2,
            },
        }
    }

    /// Picks the edge a fragment belongs to.
    ///
    /// `is_short_edge` and `is_start` describe the binding the fragment was declared with. An
    /// explicit short-edge binding is trusted as is; otherwise the fragment's contact with the
    /// short edges overrides the binding.
    pub fn resolve_edge(self, short_edge: ShortEdge, is_short_edge: bool, is_start: bool) -> Edge {
        if is_short_edge {
            return decide_which_edge(short_edge, true, is_start);
        }
        match (self.touches_start, self.touches_end) {
            (true, true) => decide_which_edge(short_edge, false, is_start),
            (true, false) | (false, true) => {
                decide_which_edge(short_edge, true, self.closer_to_start)
            }
            (false, false) => decide_which_edge(short_edge, false, is_start),
        }
    }
}
