//! A minimal vector path: parsed from SVG path data, transformable, boundable, appendable.

use std::borrow::Cow;
use std::fmt;

use svgtypes::{SimplePathSegment, SimplifyingPathParser};

use crate::error::{Error, Result};
use crate::geom::{PointF, RectF, Transform, point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathVerb {
    MoveTo(PointF),
    LineTo(PointF),
    QuadTo(PointF, PointF),
    CubicTo(PointF, PointF, PointF),
    Close,
}

/// Absolute-coordinate path built from move/line/quad/cubic/close verbs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutoutPath {
    verbs: Vec<PathVerb>,
}

impl CutoutPath {
    /// Parses SVG path data.
    ///
    /// Relative, shorthand and arc commands are normalized to absolute verbs. Data that does not
    /// start with a move command starts at the origin.
    pub fn from_svg(data: &str) -> Result<Self> {
        let source: Cow<'_, str> = match data.trim_start().chars().next() {
            None | Some('M') | Some('m') => Cow::Borrowed(data),
            Some(_) => Cow::Owned(format!("M0 0 {data}")),
        };

        let mut verbs = Vec::new();
        for segment in SimplifyingPathParser::from(source.as_ref()) {
            let segment = segment.map_err(|err| Error::PathData {
                data: data.to_string(),
                message: err.to_string(),
            })?;
            verbs.push(match segment {
                SimplePathSegment::MoveTo { x, y } => PathVerb::MoveTo(pt(x, y)),
                SimplePathSegment::LineTo { x, y } => PathVerb::LineTo(pt(x, y)),
                SimplePathSegment::Quadratic { x1, y1, x, y } => {
                    PathVerb::QuadTo(pt(x1, y1), pt(x, y))
                }
                SimplePathSegment::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => PathVerb::CubicTo(pt(x1, y1), pt(x2, y2), pt(x, y)),
                SimplePathSegment::ClosePath => PathVerb::Close,
            });
        }
        Ok(Self { verbs })
    }

    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn transform(&mut self, t: &Transform) {
        for verb in &mut self.verbs {
            match verb {
                PathVerb::MoveTo(p) | PathVerb::LineTo(p) => *p = t.transform_point(*p),
                PathVerb::QuadTo(c, p) => {
                    *c = t.transform_point(*c);
                    *p = t.transform_point(*p);
                }
                PathVerb::CubicTo(c1, c2, p) => {
                    *c1 = t.transform_point(*c1);
                    *c2 = t.transform_point(*c2);
                    *p = t.transform_point(*p);
                }
                PathVerb::Close => {}
            }
        }
    }

    pub fn append(&mut self, other: &CutoutPath) {
        self.verbs.extend_from_slice(&other.verbs);
    }

    /// Bounds of every stored point, curve control points included.
    ///
    /// This is the cheap (non-exact) bound: a curve's box may be larger than the curve itself.
    pub fn bounds(&self) -> Option<RectF> {
        let mut it = self.verbs.iter().copied().flat_map(verb_points);
        let first = it.next()?;
        let mut min = first;
        let mut max = first;
        for p in it {
            min = min.min(p);
            max = max.max(p);
        }
        Some(RectF::new(min, max))
    }
}

fn pt(x: f64, y: f64) -> PointF {
    point(x as f32, y as f32)
}

fn verb_points(verb: PathVerb) -> impl Iterator<Item = PointF> {
    let (buf, len) = match verb {
        PathVerb::MoveTo(p) | PathVerb::LineTo(p) => ([p, p, p], 1),
        PathVerb::QuadTo(c, p) => ([c, p, p], 2),
        PathVerb::CubicTo(c1, c2, p) => ([c1, c2, p], 3),
        PathVerb::Close => ([PointF::origin(); 3], 0),
    };
    buf.into_iter().take(len)
}

impl fmt::Display for CutoutPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, verb) in self.verbs.iter().enumerate() {
            if idx != 0 {
                f.write_str(" ")?;
            }
            match verb {
                PathVerb::MoveTo(p) => write!(f, "M{} {}", p.x, p.y)?,
                PathVerb::LineTo(p) => write!(f, "L{} {}", p.x, p.y)?,
                PathVerb::QuadTo(c, p) => write!(f, "Q{} {} {} {}", c.x, c.y, p.x, p.y)?,
                PathVerb::CubicTo(c1, c2, p) => write!(
                    f,
                    "C{} {} {} {} {} {}",
                    c1.x, c1.y, c2.x, c2.y, p.x, p.y
                )?,
                PathVerb::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::vector;

    #[test]
    fn parses_absolute_commands() {
        let path = CutoutPath::from_svg("M0,0H10V10H0Z").unwrap();
        assert_eq!(path.to_string(), "M0 0 L10 0 L10 10 L0 10 Z");
    }

    #[test]
    fn normalizes_relative_commands() {
        let path = CutoutPath::from_svg("m 5,5 h 10 v 10 l -10,0 z").unwrap();
        assert_eq!(path.to_string(), "M5 5 L15 5 L15 15 L5 15 Z");
    }

    #[test]
    fn data_without_move_starts_at_origin() {
        let path = CutoutPath::from_svg("H1V1Z").unwrap();
        assert_eq!(path.to_string(), "M0 0 L1 0 L1 1 Z");
    }

    #[test]
    fn blank_data_is_an_empty_path() {
        let path = CutoutPath::from_svg("   ").unwrap();
        assert!(path.is_empty());
        assert_eq!(path.bounds(), None);
    }

    #[test]
    fn malformed_data_is_an_error() {
        let err = CutoutPath::from_svg("M0,0 L10,0 Zdp").unwrap_err();
        assert!(matches!(err, Error::PathData { .. }), "{err:?}");
    }

    #[test]
    fn bounds_include_control_points() {
        let path = CutoutPath::from_svg("M0,0 C0,50 10,50 10,0 Z").unwrap();
        assert_eq!(
            path.bounds(),
            Some(RectF::new(point(0.0, 0.0), point(10.0, 50.0)))
        );
    }

    #[test]
    fn transform_scales_then_translates() {
        let mut path = CutoutPath::from_svg("M-10,0 H10 V20 Z").unwrap();
        let t = Transform::scale(2.0, 2.0).then_translate(vector(100.0, 0.0));
        path.transform(&t);
        assert_eq!(path.to_string(), "M80 0 L120 0 L120 40 Z");
    }

    #[test]
    fn append_concatenates_verbs() {
        let mut a = CutoutPath::from_svg("M0,0 L1,1").unwrap();
        let b = CutoutPath::from_svg("M5,5 L6,6").unwrap();
        a.append(&b);
        assert_eq!(a.verbs().len(), 4);
        assert_eq!(
            a.bounds(),
            Some(RectF::new(point(0.0, 0.0), point(6.0, 6.0)))
        );
    }
}
