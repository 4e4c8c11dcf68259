//! Per-fragment geometry: transform, bound, classify, and fold into the accumulator.

use crate::config::DisplayConfig;
use crate::edge::{Contact, Edge, ShortEdge};
use crate::geom::{Insets, Rect, Transform, round_rect, vector};
use crate::path::CutoutPath;
use crate::spec::EdgeBounds;
use crate::state::EdgeState;

/// Fragments shorter than the smallest useful path (`H1V1Z`) are noise.
pub const MINIMAL_ACCEPTABLE_PATH_LENGTH: usize = "H1V1Z".len();

/// Everything a parse has produced so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    pub path: Option<CutoutPath>,
    pub bounds: EdgeBounds,
    pub insets: Insets,
}

impl Accumulator {
    fn append_path(&mut self, path: CutoutPath) {
        match &mut self.path {
            Some(combined) => combined.append(&path),
            None => self.path = Some(path),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GeometryEngine {
    density: f32,
    width: i32,
    height: i32,
    short_edge: ShortEdge,
    in_dp: bool,
}

impl GeometryEngine {
    pub fn new(config: &DisplayConfig, in_dp: bool) -> Self {
        Self {
            density: config.density,
            width: config.width,
            height: config.height,
            short_edge: ShortEdge::of(config.width, config.height),
            in_dp,
        }
    }

    /// Density scale (when in dp) followed by the anchor translation.
    pub fn transform_for(&self, state: &EdgeState) -> Transform {
        let scale = if self.in_dp { self.density } else { 1.0 };
        Transform::scale(scale, scale).then_translate(vector(
            state.horizontal.offset(self.width),
            state.vertical.offset(self.height),
        ))
    }

    /// Places one fragment. Invalid, too short, or degenerate fragments leave `acc` untouched.
    pub fn place_fragment(&self, source: &str, state: &EdgeState, acc: &mut Accumulator) {
        if source.len() < MINIMAL_ACCEPTABLE_PATH_LENGTH {
            if !source.is_empty() {
                tracing::debug!(fragment = source, "discarding fragment: too short");
            }
            return;
        }

        let mut path = match CutoutPath::from_svg(source) {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!(%err, "discarding fragment: malformed path data");
                return;
            }
        };
        path.transform(&self.transform_for(state));

        let Some(rect) = path.bounds().map(|b| round_rect(&b)) else {
            tracing::debug!(fragment = source, "discarding fragment: no points");
            return;
        };
        if rect.is_empty() {
            tracing::debug!(fragment = source, ?rect, "discarding fragment: empty bounds");
            return;
        }

        let slot = state.bind.slot();
        let (is_start, is_short_edge) = state.bind.declared_side(self.short_edge);
        let contact = Contact::classify(&rect, self.short_edge, self.width, self.height);
        let edge = contact.resolve_edge(self.short_edge, is_short_edge, is_start);
        acc.insets.raise(edge, self.safe_inset(edge, &rect));

        if acc.bounds.get(slot).is_some() {
            tracing::debug!(%slot, "discarding fragment: bound already set");
            return;
        }
        tracing::trace!(%slot, %edge, ?rect, "fragment placed");
        acc.bounds.set(slot, rect);
        acc.append_path(path);
    }

    /// Inset `rect` imposes on `edge`, or 0 when its inner side lies outside the display.
    pub fn safe_inset(&self, edge: Edge, rect: &Rect) -> i32 {
        let (w, h) = (self.width, self.height);
        match edge {
            Edge::Left if rect.max.x > 0 && rect.max.x < w => rect.max.x,
            Edge::Top if rect.max.y > 0 && rect.max.y < h => rect.max.y,
            Edge::Right if rect.min.x > 0 && rect.min.x < w => w - rect.min.x,
            Edge::Bottom if rect.min.y > 0 && rect.min.y < h => h - rect.min.y,
            _ => 0,
        }
    }
}
