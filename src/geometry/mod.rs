//! Geometric primitives and queries over flattened glyph contours

pub mod containment;
pub mod contour;
pub mod intersect;

// Re-export commonly used items
pub use containment::{contains_point, encloses};
pub use contour::{decompose, Contour};
pub use intersect::{contour_intersections, PathIntersection};
