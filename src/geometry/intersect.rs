//! Pairwise contour intersection queries
//!
//! Eyes are counters whose boundary pokes through or touches the outer
//! ring instead of nesting cleanly, so the heuristics need to know where
//! two contours meet. This wraps kurbo's segment intersection primitive
//! over the flattened rings and reports a status, not an error: touching,
//! crossing, and coincident contours are all informative answers.

use kurbo::{ParamCurve, PathSeg, Point};

use crate::geometry::contour::Contour;

/// Outcome of intersecting two contours.
#[derive(Debug, Clone, PartialEq)]
pub enum PathIntersection {
    /// The contours cross or touch at the listed points.
    Points(Vec<Point>),
    /// Every vertex of each contour lies on the other's boundary.
    Coincident,
    /// Clean miss.
    None,
}

impl PathIntersection {
    pub fn is_none(&self) -> bool {
        matches!(self, PathIntersection::None)
    }
}

/// Computes where contours `a` and `b` meet.
///
/// Segment/segment hits are collected over both flattened rings. For
/// robustness against font-specific rounding, vertices of one ring within
/// `epsilon` of the other ring's boundary are promoted to intersection
/// points, and reported points closer than `epsilon` to each other are
/// merged.
pub fn contour_intersections(
    a: &Contour,
    b: &Contour,
    epsilon: f64,
) -> PathIntersection {
    if coincident(a, b, epsilon) {
        return PathIntersection::Coincident;
    }

    // Disjoint bounding boxes cannot produce a hit.
    let a_bb = a.bbox().inflate(epsilon, epsilon);
    let b_bb = b.bbox();
    if a_bb.x1 < b_bb.x0
        || b_bb.x1 < a_bb.x0
        || a_bb.y1 < b_bb.y0
        || b_bb.y1 < a_bb.y0
    {
        return PathIntersection::None;
    }

    let mut hits: Vec<Point> = Vec::new();
    for seg_a in a.segments() {
        for seg_b in b.segments() {
            for hit in PathSeg::Line(seg_a).intersect_line(seg_b) {
                push_deduped(&mut hits, seg_b.eval(hit.line_t), epsilon);
            }
        }
    }

    // Near-miss promotion: a vertex resting on the other ring counts as a
    // touch even when the segment solver reports nothing (shared or
    // collinear edges).
    for &vertex in a.points() {
        if b.on_boundary(vertex, epsilon) {
            push_deduped(&mut hits, vertex, epsilon);
        }
    }
    for &vertex in b.points() {
        if a.on_boundary(vertex, epsilon) {
            push_deduped(&mut hits, vertex, epsilon);
        }
    }

    if hits.is_empty() {
        PathIntersection::None
    } else {
        PathIntersection::Points(hits)
    }
}

fn coincident(a: &Contour, b: &Contour, epsilon: f64) -> bool {
    a.points().iter().all(|&p| b.on_boundary(p, epsilon))
        && b.points().iter().all(|&p| a.on_boundary(p, epsilon))
}

fn push_deduped(hits: &mut Vec<Point>, candidate: Point, epsilon: f64) {
    if hits.iter().all(|p| p.distance(candidate) > epsilon) {
        hits.push(candidate);
    }
}
