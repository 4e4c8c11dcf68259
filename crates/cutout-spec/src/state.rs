//! Edge-binding state carried between directives.
//!
//! Positioning and binding are tracked as three small enums instead of independent flags, so
//! contradicting combinations (left *and* right, bottom *and* center-vertical) cannot be
//! represented.

use crate::edge::{Edge, ShortEdge};
use crate::scanner::Directive;

/// Horizontal anchor for the next fragment's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAnchor {
    #[default]
    Center,
    Left,
    Right,
}

impl HorizontalAnchor {
    pub fn offset(self, display_width: i32) -> f32 {
        match self {
            HorizontalAnchor::Left => 0.0,
            HorizontalAnchor::Right => display_width as f32,
            HorizontalAnchor::Center => display_width as f32 / 2.0,
        }
    }
}

/// Vertical anchor for the next fragment's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    #[default]
    Top,
    Bottom,
    CenterVertical,
}

impl VerticalAnchor {
    pub fn offset(self, display_height: i32) -> f32 {
        match self {
            VerticalAnchor::Top => 0.0,
            VerticalAnchor::Bottom => display_height as f32,
            VerticalAnchor::CenterVertical => display_height as f32 / 2.0,
        }
    }
}

/// Which bound slot the next fragment fills. `Top` is the implicit binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindTarget {
    #[default]
    Top,
    Left,
    Right,
    Bottom,
}

impl BindTarget {
    pub fn slot(self) -> Edge {
        match self {
            BindTarget::Top => Edge::Top,
            BindTarget::Left => Edge::Left,
            BindTarget::Right => Edge::Right,
            BindTarget::Bottom => Edge::Bottom,
        }
    }

    /// `(is_start, is_short_edge)` as declared by the binding.
    pub fn declared_side(self, short_edge: ShortEdge) -> (bool, bool) {
        let short_edge_on_top = short_edge == ShortEdge::OnTop;
        match self {
            BindTarget::Top => (true, short_edge_on_top),
            BindTarget::Bottom => (false, short_edge_on_top),
            BindTarget::Left => (true, !short_edge_on_top),
            BindTarget::Right => (false, !short_edge_on_top),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeState {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
    pub bind: BindTarget,
}

impl EdgeState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies `directive` to the state.
    ///
    /// Grouping directives ([`Directive::flushes`]) start from a reset state; callers place the
    /// pending fragment before calling this.
    pub fn apply(&mut self, directive: Directive) {
        if directive.flushes() {
            self.reset();
        }
        match directive {
            Directive::Left => {
                if self.horizontal != HorizontalAnchor::Right {
                    self.horizontal = HorizontalAnchor::Left;
                }
            }
            Directive::Right => {
                if self.horizontal != HorizontalAnchor::Left {
                    self.horizontal = HorizontalAnchor::Right;
                }
            }
            Directive::Bottom => {
                self.vertical = VerticalAnchor::Bottom;
                self.bind = BindTarget::Bottom;
            }
            Directive::CenterVertical => self.vertical = VerticalAnchor::CenterVertical,
            Directive::Cutout => {}
            Directive::BindLeftCutout => self.bind = BindTarget::Left,
            Directive::BindRightCutout => self.bind = BindTarget::Right,
        }
        tracing::trace!(?directive, state = ?self, "directive applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_after(directives: &[Directive]) -> EdgeState {
        let mut state = EdgeState::default();
        for d in directives {
            state.apply(*d);
        }
        state
    }

    #[test]
    fn first_horizontal_anchor_wins() {
        let s = state_after(&[Directive::Right, Directive::Left]);
        assert_eq!(s.horizontal, HorizontalAnchor::Right);
        let s = state_after(&[Directive::Left, Directive::Right]);
        assert_eq!(s.horizontal, HorizontalAnchor::Left);
    }

    #[test]
    fn bottom_resets_then_binds_bottom() {
        let s = state_after(&[Directive::Left, Directive::BindRightCutout, Directive::Bottom]);
        assert_eq!(
            s,
            EdgeState {
                horizontal: HorizontalAnchor::Center,
                vertical: VerticalAnchor::Bottom,
                bind: BindTarget::Bottom,
            }
        );
    }

    #[test]
    fn center_vertical_does_not_bind() {
        let s = state_after(&[Directive::BindLeftCutout, Directive::CenterVertical]);
        assert_eq!(s.vertical, VerticalAnchor::CenterVertical);
        assert_eq!(s.bind, BindTarget::Top);
    }

    #[test]
    fn cutout_clears_everything() {
        let s = state_after(&[Directive::Right, Directive::BindLeftCutout, Directive::Cutout]);
        assert_eq!(s, EdgeState::default());
    }

    #[test]
    fn bind_directives_replace_each_other() {
        let s = state_after(&[Directive::Bottom, Directive::BindLeftCutout]);
        assert_eq!(s.bind, BindTarget::Left);
        assert_eq!(s.vertical, VerticalAnchor::Bottom);
        let s = state_after(&[Directive::BindLeftCutout, Directive::BindRightCutout]);
        assert_eq!(s.bind, BindTarget::Right);
    }

    #[test]
    fn anchor_offsets() {
        assert_eq!(HorizontalAnchor::Center.offset(1081), 540.5);
        assert_eq!(HorizontalAnchor::Right.offset(1080), 1080.0);
        assert_eq!(VerticalAnchor::CenterVertical.offset(2340), 1170.0);
        assert_eq!(VerticalAnchor::Top.offset(2340), 0.0);
    }

    #[test]
    fn declared_side_depends_on_orientation() {
        assert_eq!(BindTarget::Top.declared_side(ShortEdge::OnTop), (true, true));
        assert_eq!(BindTarget::Left.declared_side(ShortEdge::OnTop), (true, false));
        assert_eq!(BindTarget::Right.declared_side(ShortEdge::OnLeft), (false, true));
        assert_eq!(BindTarget::Bottom.declared_side(ShortEdge::OnLeft), (false, false));
    }
}
