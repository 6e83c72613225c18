//! Glyph outline input adapters
//!
//! The engine does not parse font files; an outline arrives from some
//! font-parsing collaborator as a kurbo path, an SVG path-data string, or
//! a UFO glyph. `GlyphOutline` is the minimal structural shape all of
//! those reduce to: a command stream plus a bounding box. Keeping the
//! boundary this thin means no heuristic ever depends on a particular
//! font library's glyph type.

use kurbo::{BezPath, PathEl, Point, Rect, Shape};
use log::{debug, warn};
use norad::PointType;

use crate::core::errors::{GeometryError, GeometryResult};

/// A glyph's outline: path commands plus bounding box, in font units
/// (Y up-positive).
///
/// The outline is read-only once built; every analysis works on transient
/// contours derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutline {
    path: BezPath,
    bbox: Rect,
}

impl GlyphOutline {
    /// Wraps a kurbo path, deriving the bounding box from it.
    pub fn new(path: BezPath) -> Self {
        let bbox = safe_bbox(&path);
        Self { path, bbox }
    }

    /// Wraps a kurbo path with a caller-supplied bounding box (fonts
    /// usually know their glyph boxes already).
    pub fn with_bbox(path: BezPath, bbox: Rect) -> Self {
        Self { path, bbox }
    }

    /// Parses an SVG path-data string (the `d` attribute).
    pub fn from_svg(data: &str) -> GeometryResult<Self> {
        let path = BezPath::from_svg(data)
            .map_err(|err| GeometryError::MalformedPath(err.to_string()))?;
        Ok(Self::new(path))
    }

    /// Converts a UFO glyph's contours into an outline.
    ///
    /// Open contours (those starting with a move point) have no enclosed
    /// area and are skipped. Off-curve runs that do not form a valid
    /// curve degrade to line segments with a warning rather than failing
    /// the glyph.
    pub fn from_glyph(glyph: &norad::Glyph) -> Self {
        let mut path = BezPath::new();
        for contour in &glyph.contours {
            append_contour(&mut path, contour);
        }
        Self::new(path)
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }
}

/// Bounding box of a path, tolerating streams that a later decompose call
/// will reject (kurbo panics on a segment query against a headless path).
fn safe_bbox(path: &BezPath) -> Rect {
    match path.elements().first() {
        Some(PathEl::MoveTo(_)) => path.bounding_box(),
        _ => Rect::ZERO,
    }
}

fn contour_point(point: &norad::ContourPoint) -> Point {
    Point::new(point.x as f64, point.y as f64)
}

fn append_contour(path: &mut BezPath, contour: &norad::Contour) {
    let points = &contour.points;
    if points.is_empty() {
        return;
    }
    if points.iter().any(|p| matches!(p.typ, PointType::Move)) {
        debug!("skipping open contour");
        return;
    }

    // UFO contours are cyclic; rotate so we start on-curve. A contour
    // with no on-curve points at all is a TrueType-style quadratic ring.
    let Some(first_on) = points
        .iter()
        .position(|p| !matches!(p.typ, PointType::OffCurve))
    else {
        append_quadratic_ring(path, points);
        return;
    };
    let at = |i: usize| &points[(first_on + i) % points.len()];

    path.move_to(contour_point(at(0)));
    let mut pending: Vec<Point> = Vec::new();
    for i in 1..=points.len() {
        let point = at(i);
        match point.typ {
            PointType::OffCurve => pending.push(contour_point(point)),
            PointType::Curve => {
                let end = contour_point(point);
                match pending.len() {
                    2 => path.curve_to(pending[0], pending[1], end),
                    0 => path.line_to(end),
                    n => {
                        warn!(
                            "curve point preceded by {n} off-curve points; \
                             approximating with a line"
                        );
                        path.line_to(end);
                    }
                }
                pending.clear();
            }
            PointType::QCurve => {
                let end = contour_point(point);
                if pending.is_empty() {
                    path.line_to(end);
                } else {
                    // Runs of off-curves imply on-curve midpoints between
                    // each pair.
                    for k in 0..pending.len() - 1 {
                        let implied = pending[k].midpoint(pending[k + 1]);
                        path.quad_to(pending[k], implied);
                    }
                    path.quad_to(pending[pending.len() - 1], end);
                }
                pending.clear();
            }
            _ => {
                if !pending.is_empty() {
                    warn!(
                        "{} stray off-curve point(s) before a line point; \
                         dropping them",
                        pending.len()
                    );
                    pending.clear();
                }
                path.line_to(contour_point(point));
            }
        }
    }
    path.close_path();
}

/// A closed all-off-curve contour: every on-curve point is implied at the
/// midpoint of neighboring off-curves.
fn append_quadratic_ring(path: &mut BezPath, points: &[norad::ContourPoint]) {
    let ring: Vec<Point> = points.iter().map(contour_point).collect();
    let n = ring.len();
    path.move_to(ring[n - 1].midpoint(ring[0]));
    for i in 0..n {
        let end = ring[i].midpoint(ring[(i + 1) % n]);
        path.quad_to(ring[i], end);
    }
    path.close_path();
}
