//! Containment tests between contours
//!
//! Bowls are counters that sit strictly inside an outer ring, so the
//! heuristics need a reliable "is this contour enclosed by that one"
//! answer. The test is vertex-based ray casting: cheap, robust against the
//! slightly noisy outlines real fonts ship, and strict about identity
//! (a contour never encloses itself).

use kurbo::Point;

use crate::geometry::contour::Contour;

/// Even-odd ray-casting test: does `point` fall inside `contour`?
///
/// Points exactly on the boundary are not handled specially here; callers
/// that care (like [`encloses`]) filter them out first with an epsilon.
pub fn contains_point(contour: &Contour, point: Point) -> bool {
    let ring = contour.points();
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > point.y) != (b.y > point.y) {
            let cross_x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether `inner` is strictly enclosed by `outer`.
///
/// Every vertex of `inner` that does not touch `outer`'s boundary (within
/// `epsilon`) must test inside, and at least one such vertex must exist.
/// That last clause makes containment strict: a contour identical to the
/// enclosing one, or touching it at every vertex, is NOT inside.
pub fn encloses(outer: &Contour, inner: &Contour, epsilon: f64) -> bool {
    // Cheap rejection before any point tests. The inner ring cannot be
    // enclosed if its bounding box escapes the outer one.
    let outer_bb = outer.bbox().inflate(epsilon, epsilon);
    let inner_bb = inner.bbox();
    if inner_bb.x0 < outer_bb.x0
        || inner_bb.y0 < outer_bb.y0
        || inner_bb.x1 > outer_bb.x1
        || inner_bb.y1 > outer_bb.y1
    {
        return false;
    }

    let mut tested = 0usize;
    for &vertex in inner.points() {
        if outer.on_boundary(vertex, epsilon) {
            continue;
        }
        if !contains_point(outer, vertex) {
            return false;
        }
        tested += 1;
    }
    tested > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::contour::decompose;
    use kurbo::BezPath;

    fn square_contour(x0: f64, y0: f64, x1: f64, y1: f64) -> Contour {
        let mut path = BezPath::new();
        path.move_to((x0, y0));
        path.line_to((x1, y0));
        path.line_to((x1, y1));
        path.line_to((x0, y1));
        path.close_path();
        decompose(&path, 0.25).expect("valid path").remove(0)
    }

    #[test]
    fn point_inside_and_outside() {
        let ring = square_contour(0.0, 0.0, 100.0, 100.0);
        assert!(contains_point(&ring, Point::new(50.0, 50.0)));
        assert!(!contains_point(&ring, Point::new(150.0, 50.0)));
        assert!(!contains_point(&ring, Point::new(50.0, -1.0)));
    }

    #[test]
    fn nested_square_is_enclosed() {
        let outer = square_contour(0.0, 0.0, 600.0, 600.0);
        let inner = square_contour(200.0, 200.0, 400.0, 400.0);
        assert!(encloses(&outer, &inner, 2.0));
        assert!(!encloses(&inner, &outer, 2.0));
    }

    #[test]
    fn identity_is_not_containment() {
        let ring = square_contour(0.0, 0.0, 100.0, 100.0);
        let copy = ring.clone();
        assert!(!encloses(&ring, &copy, 2.0));
    }

    #[test]
    fn disjoint_contours_are_not_enclosed() {
        let left = square_contour(0.0, 0.0, 100.0, 100.0);
        let right = square_contour(200.0, 0.0, 300.0, 100.0);
        assert!(!encloses(&left, &right, 2.0));
    }

    #[test]
    fn escaping_bounding_box_short_circuits() {
        let outer = square_contour(0.0, 0.0, 100.0, 100.0);
        // Overlaps the outer ring but pokes past its right edge.
        let poking = square_contour(50.0, 25.0, 150.0, 75.0);
        assert!(!encloses(&outer, &poking, 2.0));
    }

    #[test]
    fn everywhere_touching_contour_is_not_enclosed() {
        let ring = square_contour(0.0, 0.0, 100.0, 100.0);
        // Same footprint, nudged within epsilon of the boundary.
        let ghost = square_contour(0.5, 0.5, 99.5, 99.5);
        assert!(!encloses(&ring, &ghost, 2.0));
    }
}
