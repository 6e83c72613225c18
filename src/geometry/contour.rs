//! Closed contours and path decomposition
//!
//! A glyph outline arrives as a kurbo path (moves, lines, and curves). The
//! rest of the engine works on a simpler shape: a list of closed polyline
//! rings, one per sub-path, with curves flattened at a tolerance. This
//! module owns that conversion and the ring type itself.

use kurbo::{flatten, BezPath, Line, ParamCurveNearest, PathEl, Point, Rect};
use log::debug;

use crate::core::errors::{GeometryError, GeometryResult};

/// Points closer than this are treated as the same vertex when building
/// a ring.
const POINT_MERGE_EPSILON: f64 = 1e-9;

/// One closed sub-path of a glyph outline, flattened to a polyline.
///
/// The ring is stored without a duplicated closing vertex; the edge from
/// the last point back to the first is implicit. Signed area and bounding
/// box are computed once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<Point>,
    bbox: Rect,
    area: f64,
}

impl Contour {
    /// Builds a contour from an ordered ring of points.
    ///
    /// Consecutive duplicates (including a repeated closing vertex) are
    /// merged. Rings with fewer than 3 distinct points cannot enclose
    /// anything and are rejected as degenerate.
    pub fn from_ring(points: Vec<Point>) -> GeometryResult<Self> {
        let mut ring: Vec<Point> = Vec::with_capacity(points.len());
        for point in points {
            let is_new = ring
                .last()
                .map_or(true, |last| last.distance(point) > POINT_MERGE_EPSILON);
            if is_new {
                ring.push(point);
            }
        }
        while ring.len() > 1
            && ring[0].distance(ring[ring.len() - 1]) <= POINT_MERGE_EPSILON
        {
            ring.pop();
        }
        if ring.len() < 3 {
            return Err(GeometryError::DegenerateContour { points: ring.len() });
        }

        let mut bbox = Rect::from_points(ring[0], ring[0]);
        for &point in &ring[1..] {
            bbox = bbox.union_pt(point);
        }
        let area = shoelace_area(&ring);

        Ok(Self { points: ring, bbox, area })
    }

    /// The ring's vertices, in path order, without a duplicated closing
    /// vertex.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area via the shoelace formula.
    /// Positive = counter-clockwise, negative = clockwise.
    pub fn signed_area(&self) -> f64 {
        self.area
    }

    /// Unsigned enclosed area.
    pub fn area(&self) -> f64 {
        self.area.abs()
    }

    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// The ring's edges, including the implicit closing edge.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Line::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Whether `point` lies within `epsilon` of any edge of this ring.
    pub fn on_boundary(&self, point: Point, epsilon: f64) -> bool {
        let epsilon_sq = epsilon * epsilon;
        self.segments()
            .any(|seg| seg.nearest(point, 1e-9).distance_sq <= epsilon_sq)
    }
}

/// Splits a glyph path into closed contours, flattening curves at
/// `tolerance`.
///
/// Contours come back in path order; outer silhouettes and inner counters
/// are not classified here. Degenerate sub-paths (fewer than 3 distinct
/// points, e.g. a space glyph's stray moveto) are dropped. A command
/// stream that does not begin with a moveto is malformed.
pub fn decompose(
    path: &BezPath,
    tolerance: f64,
) -> GeometryResult<Vec<Contour>> {
    match path.elements().first() {
        None => return Ok(Vec::new()),
        Some(PathEl::MoveTo(_)) => {}
        Some(other) => {
            return Err(GeometryError::MalformedPath(format!(
                "path starts with {other:?} instead of a moveto"
            )));
        }
    }

    let mut contours = Vec::new();
    let mut ring: Vec<Point> = Vec::new();
    let mut subpath_start: Option<Point> = None;
    flatten(path, tolerance, |el| match el {
        PathEl::MoveTo(p) => {
            close_ring(&mut contours, &mut ring);
            subpath_start = Some(p);
            ring.push(p);
        }
        PathEl::LineTo(p) => {
            if ring.is_empty() {
                // A segment after a closepath continues from the sub-path
                // start per SVG semantics.
                if let Some(start) = subpath_start {
                    ring.push(start);
                }
            }
            ring.push(p);
        }
        PathEl::ClosePath => close_ring(&mut contours, &mut ring),
        // Flattening only ever emits moves, lines, and closes.
        _ => {}
    });
    close_ring(&mut contours, &mut ring);

    Ok(contours)
}

fn close_ring(contours: &mut Vec<Contour>, ring: &mut Vec<Point>) {
    if ring.is_empty() {
        return;
    }
    match Contour::from_ring(std::mem::take(ring)) {
        Ok(contour) => contours.push(contour),
        Err(err) => debug!("dropping sub-path: {err}"),
    }
}

fn shoelace_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            ring[i].x * ring[j].y - ring[j].x * ring[i].y
        })
        .sum::<f64>()
        / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_square(path: &mut BezPath, x0: f64, y0: f64, x1: f64, y1: f64) {
        path.move_to((x0, y0));
        path.line_to((x1, y0));
        path.line_to((x1, y1));
        path.line_to((x0, y1));
        path.close_path();
    }

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
        let mut path = BezPath::new();
        add_square(&mut path, x0, y0, x1, y1);
        path
    }

    #[test]
    fn decomposes_donut_into_two_contours() {
        let mut path = square(0.0, 0.0, 600.0, 600.0);
        add_square(&mut path, 200.0, 200.0, 400.0, 400.0);

        let contours = decompose(&path, 0.25).expect("valid path");
        assert_eq!(contours.len(), 2, "one outer ring and one counter");
        assert!(
            contours[0].area() > contours[1].area(),
            "outer ring should be larger"
        );
        assert_eq!(contours[1].bbox(), Rect::new(200.0, 200.0, 400.0, 400.0));
    }

    #[test]
    fn flattens_curves_to_polylines() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.curve_to((100.0, 200.0), (300.0, 200.0), (400.0, 0.0));
        path.close_path();

        let contours = decompose(&path, 0.25).expect("valid path");
        assert_eq!(contours.len(), 1);
        assert!(
            contours[0].len() > 4,
            "curve should flatten into several segments, got {}",
            contours[0].len()
        );
    }

    #[test]
    fn drops_degenerate_subpaths() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.close_path();

        let contours = decompose(&path, 0.25).expect("valid path");
        assert!(contours.is_empty(), "two points cannot enclose anything");
    }

    #[test]
    fn rejects_stream_without_leading_moveto() {
        let path = BezPath::from_vec(vec![
            PathEl::LineTo(Point::new(10.0, 10.0)),
            PathEl::LineTo(Point::new(20.0, 0.0)),
        ]);
        let err = decompose(&path, 0.25).expect_err("malformed");
        assert!(matches!(err, GeometryError::MalformedPath(_)));
    }

    #[test]
    fn empty_path_yields_no_contours() {
        let contours =
            decompose(&BezPath::new(), 0.25).expect("empty is fine");
        assert!(contours.is_empty());
    }

    #[test]
    fn counter_clockwise_ring_has_positive_area() {
        let contours =
            decompose(&square(0.0, 0.0, 10.0, 10.0), 0.25).expect("valid");
        assert_eq!(contours[0].signed_area(), 100.0);
        assert_eq!(contours[0].area(), 100.0);
    }

    #[test]
    fn merges_duplicated_closing_vertex() {
        let ring = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
        ];
        let contour = Contour::from_ring(ring).expect("valid ring");
        assert_eq!(contour.len(), 4);
    }

    #[test]
    fn boundary_test_includes_closing_edge() {
        let contours =
            decompose(&square(0.0, 0.0, 10.0, 10.0), 0.25).expect("valid");
        // Midpoint of the implicit edge from the last vertex back to the
        // first.
        assert!(contours[0].on_boundary(Point::new(0.0, 5.0), 0.01));
        assert!(!contours[0].on_boundary(Point::new(5.0, 5.0), 0.01));
    }
}
