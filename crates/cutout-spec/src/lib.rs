#![forbid(unsafe_code)]

//! Display cutout specification parser (headless).
//!
//! A cutout specification is SVG path data interleaved with `@` markers that anchor each path
//! fragment to a display edge:
//!
//! - `@left` / `@right`: anchor the fragment's x origin to the left or right display edge
//!   (default: horizontal center).
//! - `@bottom`: start a new fragment anchored to, and bound to, the bottom edge.
//! - `@center_vertical`: start a new fragment anchored to the vertical center.
//! - `@cutout`: start a new, independent fragment.
//! - `@bind_left_cutout` / `@bind_right_cutout`: bind the current fragment to the left or right
//!   bound instead of the implicit top one.
//! - `@dp`: coordinates are density-independent pixels and get multiplied by the density.
//!
//! Parsing never fails: malformed pieces are skipped and an unusable specification simply yields
//! no path.
//!
//! ```
//! use cutout_spec::{DisplayConfig, Insets, Parser};
//!
//! let parser = Parser::new(DisplayConfig::new(2.0, 1080, 2340)).unwrap();
//! let spec = parser.parse("M -40,0 H 40 V 30 H -40 Z @dp");
//! assert_eq!(spec.top_bound().map(|r| (r.min.x, r.max.y)), Some((460, 60)));
//! assert_eq!(spec.safe_insets(), Insets::new(0, 60, 0, 0));
//! ```

pub mod config;
pub mod edge;
pub mod engine;
pub mod error;
pub mod geom;
pub mod parser;
pub mod path;
pub mod scanner;
pub mod spec;
pub mod state;

pub use config::DisplayConfig;
pub use edge::{Edge, ShortEdge, decide_which_edge};
pub use error::{Error, Result};
pub use geom::{Insets, Rect, RectF};
pub use parser::Parser;
pub use path::{CutoutPath, PathVerb};
pub use spec::{CutoutSpecification, EdgeBounds};

/// Parses `spec` against a `width` x `height` display.
///
/// Errors only when the display parameters themselves are invalid.
pub fn parse(
    spec: &str,
    density: f32,
    width: i32,
    height: i32,
    pixel_ratio: f32,
) -> Result<CutoutSpecification> {
    let config = DisplayConfig::new(density, width, height).with_pixel_ratio(pixel_ratio);
    Ok(Parser::new(config)?.parse(spec))
}
