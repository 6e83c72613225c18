//! Error handling
//!
//! The library surface uses a small typed error enum; the inspector binary
//! layers anyhow contexts on top of it for file- and font-level failures.

use thiserror::Error;

/// Result type alias for fallible geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised while turning a glyph outline into usable contours.
///
/// Font data is often imperfect, so the feature detectors never propagate
/// these: a glyph whose outline cannot be decomposed simply reports no
/// anatomy. The errors are still public for callers that decompose paths
/// directly and want to know why a glyph yielded nothing.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeometryError {
    /// The command stream violates path structure, e.g. a line or curve
    /// command before any moveto, or unparseable SVG path data.
    #[error("malformed path: {0}")]
    MalformedPath(String),

    /// A contour flattened to fewer than 3 distinct points. Decomposition
    /// drops these silently; the variant exists for direct callers of the
    /// ring constructor.
    #[error("degenerate contour with {points} distinct point(s)")]
    DegenerateContour { points: usize },
}
