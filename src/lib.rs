//! counterpunch: glyph anatomy heuristics for font inspection.
//!
//! Takes a glyph outline — a kurbo path, an SVG path-data string, or a
//! UFO glyph — splits it into closed contours, and classifies typographic
//! anatomy from their geometry and the font's vertical metrics:
//!
//! - **bowls**: fully enclosed counters, like the hole in "o";
//! - **tittles**: small detached marks above the body, like the dot on "i";
//! - **eyes**: counters whose boundary is broken by an opening, like the
//!   counter of "e".
//!
//! The engine is pure over its inputs: no I/O, no caching, no mutation of
//! the glyph. Malformed outlines degrade to "no anatomy detected" rather
//! than failing a batch.
//!
//! # Example
//!
//! ```
//! use counterpunch::{analyze, AnatomyConfig, FontMetrics, GlyphOutline};
//!
//! // A donut: an outer ring with a counter inside it.
//! let outline = GlyphOutline::from_svg(
//!     "M0 0 L600 0 L600 600 L0 600 Z M200 200 L400 200 L400 400 L200 400 Z",
//! )?;
//! let metrics = FontMetrics::for_units_per_em(1000.0);
//! let anatomy = analyze(&outline, &metrics, &AnatomyConfig::default());
//! assert!(anatomy.bowl.is_some());
//! # Ok::<(), counterpunch::GeometryError>(())
//! ```

#![forbid(unsafe_code)]

pub mod anatomy;
pub mod cli;
pub mod core;
pub mod font;
pub mod geometry;
pub mod utils;

// Re-export the everyday surface at the crate root
pub use crate::anatomy::{
    analyze, detect_bowl, detect_eye, detect_tittle, Bowl, Eye,
    GlyphAnatomy, Tittle,
};
pub use crate::core::config::AnatomyConfig;
pub use crate::core::errors::{GeometryError, GeometryResult};
pub use crate::font::metrics::FontMetrics;
pub use crate::font::outline::GlyphOutline;
pub use crate::geometry::containment::{contains_point, encloses};
pub use crate::geometry::contour::{decompose, Contour};
pub use crate::geometry::intersect::{
    contour_intersections, PathIntersection,
};

// Re-export kurbo so downstream users get the same version used by the
// geometry types.
pub use kurbo;
