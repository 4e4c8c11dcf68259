#![forbid(unsafe_code)]

use crate::edge::Edge;

pub type Unit = euclid::UnknownUnit;

pub type PointF = euclid::Point2D<f32, Unit>;
pub type VectorF = euclid::Vector2D<f32, Unit>;
pub type RectF = euclid::Box2D<f32, Unit>;
pub type Transform = euclid::Transform2D<f32, Unit, Unit>;

/// Integer pixel rectangle: `min` is (left, top), `max` is (right, bottom).
///
/// Empty when `left >= right` or `top >= bottom`.
pub type Rect = euclid::Box2D<i32, Unit>;

pub fn point(x: f32, y: f32) -> PointF {
    euclid::point2(x, y)
}

pub fn vector(x: f32, y: f32) -> VectorF {
    euclid::vec2(x, y)
}

pub fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Rect {
    Rect::new(euclid::point2(left, top), euclid::point2(right, bottom))
}

/// Rounds a float rectangle to pixels, each side independently, halves rounding up.
pub fn round_rect(r: &RectF) -> Rect {
    rect(
        round_half_up(r.min.x),
        round_half_up(r.min.y),
        round_half_up(r.max.x),
        round_half_up(r.max.y),
    )
}

fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Midpoint, floored. Summed in `i64` so saturated sides cannot overflow.
pub fn center_x(r: &Rect) -> i32 {
    midpoint(r.min.x, r.max.x)
}

pub fn center_y(r: &Rect) -> i32 {
    midpoint(r.min.y, r.max.y)
}

fn midpoint(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)) >> 1) as i32
}

/// `c * ratio + 0.5`, truncated toward zero.
pub fn scale_coord(c: i32, ratio: f32) -> i32 {
    (c as f32 * ratio + 0.5) as i32
}

pub fn scale_rect(r: &Rect, ratio: f32) -> Rect {
    if ratio == 1.0 {
        return *r;
    }
    rect(
        scale_coord(r.min.x, ratio),
        scale_coord(r.min.y, ratio),
        scale_coord(r.max.x, ratio),
        scale_coord(r.max.y, ratio),
    )
}

/// Per-edge safe insets in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn get(&self, edge: Edge) -> i32 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    fn get_mut(&mut self, edge: Edge) -> &mut i32 {
        match edge {
            Edge::Left => &mut self.left,
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
        }
    }

    /// Raises the inset for `edge` to `value`; never lowers it.
    pub fn raise(&mut self, edge: Edge, value: i32) {
        let slot = self.get_mut(edge);
        if *slot < value {
            *slot = value;
        }
    }

    pub fn scale(self, ratio: f32) -> Self {
        Self {
            left: scale_coord(self.left, ratio),
            top: scale_coord(self.top, ratio),
            right: scale_coord(self.right, ratio),
            bottom: scale_coord(self.bottom, ratio),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
