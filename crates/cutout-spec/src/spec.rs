//! The immutable result of parsing a specification.

use crate::edge::Edge;
use crate::engine::Accumulator;
use crate::geom::{Insets, Rect, Transform, scale_rect};
use crate::path::CutoutPath;

/// One optional bounding rectangle per display edge. Each slot is written at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeBounds {
    pub left: Option<Rect>,
    pub top: Option<Rect>,
    pub right: Option<Rect>,
    pub bottom: Option<Rect>,
}

impl EdgeBounds {
    pub fn get(&self, edge: Edge) -> Option<Rect> {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    /// Fills `edge` unless it already holds a rectangle. Returns whether the slot was written.
    pub fn set(&mut self, edge: Edge, rect: Rect) -> bool {
        let slot = match edge {
            Edge::Left => &mut self.left,
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(rect);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (Edge, Rect)> + '_ {
        Edge::ALL
            .into_iter()
            .filter_map(move |edge| self.get(edge).map(|r| (edge, r)))
    }

    fn scale(&mut self, ratio: f32) {
        for slot in [
            &mut self.left,
            &mut self.top,
            &mut self.right,
            &mut self.bottom,
        ] {
            if let Some(r) = slot.as_mut() {
                if !r.is_empty() {
                    *r = scale_rect(r, ratio);
                }
            }
        }
    }
}

/// Parsed cutout: combined path, per-edge bounds, and safe insets, all in physical pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutoutSpecification {
    path: Option<CutoutPath>,
    bounds: EdgeBounds,
    insets: Insets,
}

impl CutoutSpecification {
    pub(crate) fn from_accumulator(acc: Accumulator, pixel_ratio: f32) -> Self {
        let mut spec = Self {
            path: acc.path,
            bounds: acc.bounds,
            insets: acc.insets,
        };
        spec.apply_pixel_ratio(pixel_ratio);
        spec
    }

    /// Combined path of every placed fragment. `None` when nothing was placed.
    pub fn path(&self) -> Option<&CutoutPath> {
        self.path.as_ref()
    }

    /// A specification is usable when it produced a non-empty path.
    pub fn is_valid(&self) -> bool {
        self.path.as_ref().is_some_and(|p| !p.is_empty())
    }

    pub fn bounds(&self) -> &EdgeBounds {
        &self.bounds
    }

    pub fn bound(&self, edge: Edge) -> Option<Rect> {
        self.bounds.get(edge)
    }

    pub fn left_bound(&self) -> Option<Rect> {
        self.bounds.left
    }

    pub fn top_bound(&self) -> Option<Rect> {
        self.bounds.top
    }

    pub fn right_bound(&self) -> Option<Rect> {
        self.bounds.right
    }

    pub fn bottom_bound(&self) -> Option<Rect> {
        self.bounds.bottom
    }

    pub fn safe_insets(&self) -> Insets {
        self.insets
    }

    /// Returns a copy rescaled by `ratio`, exactly as parsing with that pixel ratio would.
    pub fn rescaled(&self, ratio: f32) -> Self {
        let mut out = self.clone();
        out.apply_pixel_ratio(ratio);
        out
    }

    fn apply_pixel_ratio(&mut self, ratio: f32) {
        if ratio == 1.0 {
            return;
        }
        if let Some(path) = self.path.as_mut().filter(|p| !p.is_empty()) {
            path.transform(&Transform::scale(ratio, ratio));
        }
        self.bounds.scale(ratio);
        self.insets = self.insets.scale(ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::rect;

    #[test]
    fn edge_bounds_first_writer_wins() {
        let mut bounds = EdgeBounds::default();
        assert!(bounds.set(Edge::Left, rect(0, 0, 10, 10)));
        assert!(!bounds.set(Edge::Left, rect(0, 0, 20, 20)));
        assert_eq!(bounds.left, Some(rect(0, 0, 10, 10)));
        assert_eq!(
            bounds.iter().collect::<Vec<_>>(),
            vec![(Edge::Left, rect(0, 0, 10, 10))]
        );
    }

    #[test]
    fn pixel_ratio_scales_every_output() {
        let acc = Accumulator {
            path: Some(CutoutPath::from_svg("M0,0 H10 V10 Z").unwrap()),
            bounds: EdgeBounds {
                top: Some(rect(0, 0, 10, 10)),
                ..Default::default()
            },
            insets: Insets::new(0, 10, 0, 3),
        };
        let spec = CutoutSpecification::from_accumulator(acc, 1.5);
        assert_eq!(
            spec.path().map(|p| p.to_string()).as_deref(),
            Some("M0 0 L15 0 L15 15 Z")
        );
        assert_eq!(spec.top_bound(), Some(rect(0, 0, 15, 15)));
        assert_eq!(spec.safe_insets(), Insets::new(0, 15, 0, 5));
    }

    #[test]
    fn unit_ratio_is_a_no_op() {
        let acc = Accumulator {
            insets: Insets::new(1, 2, 3, 4),
            ..Default::default()
        };
        let spec = CutoutSpecification::from_accumulator(acc, 1.0);
        assert_eq!(spec.safe_insets(), Insets::new(1, 2, 3, 4));
        assert!(!spec.is_valid());
        assert_eq!(spec.rescaled(1.0), spec);
    }
}
