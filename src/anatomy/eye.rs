//! Eye detection
//!
//! An eye is a counter that is not fully enclosed: the boundary of the
//! bowl-like shape is broken by an opening, as in the counter of "e". In
//! contour terms, the smaller ring fails the strict containment test yet
//! still meets the larger ring's boundary.

use kurbo::Point;
use log::debug;

use crate::anatomy::usable_contours;
use crate::core::config::AnatomyConfig;
use crate::font::metrics::FontMetrics;
use crate::font::outline::GlyphOutline;
use crate::geometry::containment::encloses;
use crate::geometry::intersect::{contour_intersections, PathIntersection};

/// An open counter found in a glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Eye {
    /// Index of the larger contour of the pair, in decomposition order.
    pub outer: usize,
    /// Index of the smaller contour that breaks through its boundary.
    pub inner: usize,
    /// Where the counter meets the outer boundary — the opening.
    pub openings: Vec<Point>,
}

/// Looks for a contour pair where the smaller ring pokes through or
/// touches the larger ring instead of nesting cleanly inside it.
///
/// Evaluated independently of bowl detection: a glyph with one closed
/// counter and one broken counter reports both features.
pub fn detect_eye(
    outline: &GlyphOutline,
    metrics: &FontMetrics,
    config: &AnatomyConfig,
) -> Option<Eye> {
    let contours = usable_contours(outline, metrics, config);
    if contours.len() < 2 {
        return None;
    }
    let epsilon = config.boundary_epsilon_for(metrics.units_per_em);

    for i in 0..contours.len() {
        for j in (i + 1)..contours.len() {
            let (oi, ii) = if contours[i].area() >= contours[j].area() {
                (i, j)
            } else {
                (j, i)
            };
            let (outer, inner) = (&contours[oi], &contours[ii]);

            if encloses(outer, inner, epsilon) {
                // A cleanly nested counter is a bowl, not an eye.
                continue;
            }
            match contour_intersections(outer, inner, epsilon) {
                PathIntersection::Points(openings) => {
                    debug!(
                        "eye: contour {ii} breaks contour {oi} at {} point(s)",
                        openings.len()
                    );
                    return Some(Eye { outer: oi, inner: ii, openings });
                }
                PathIntersection::Coincident | PathIntersection::None => {}
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::bowl::detect_bowl;
    use kurbo::BezPath;

    fn polygon(points: &[(f64, f64)]) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(points[0]);
        for &p in &points[1..] {
            path.line_to(p);
        }
        path.close_path();
        path
    }

    fn circle(path: &mut BezPath, cx: f64, cy: f64, r: f64) {
        const STEPS: usize = 48;
        for step in 0..STEPS {
            let theta =
                step as f64 / STEPS as f64 * std::f64::consts::TAU;
            let p = (cx + r * theta.cos(), cy + r * theta.sin());
            if step == 0 {
                path.move_to(p);
            } else {
                path.line_to(p);
            }
        }
        path.close_path();
    }

    /// A square ring with a rectangular notch cut into its right side.
    fn notched_outer() -> BezPath {
        polygon(&[
            (0.0, 0.0),
            (600.0, 0.0),
            (600.0, 250.0),
            (450.0, 250.0),
            (450.0, 350.0),
            (600.0, 350.0),
            (600.0, 600.0),
            (0.0, 600.0),
        ])
    }

    fn defaults() -> (FontMetrics, AnatomyConfig) {
        (FontMetrics::default(), AnatomyConfig::default())
    }

    #[test]
    fn counter_crossing_a_notched_boundary_is_an_eye() {
        let mut path = notched_outer();
        // Centered on the notch so the ring crosses the cut walls.
        circle(&mut path, 450.0, 300.0, 120.0);
        let outline = GlyphOutline::new(path);

        let (metrics, config) = defaults();
        let eye = detect_eye(&outline, &metrics, &config)
            .expect("broken counter should register as an eye");
        assert_eq!(eye.outer, 0);
        assert_eq!(eye.inner, 1);
        assert!(!eye.openings.is_empty());
        assert_eq!(detect_bowl(&outline, &metrics, &config), None);
    }

    #[test]
    fn cleanly_nested_counter_is_a_bowl_not_an_eye() {
        let mut path = polygon(&[
            (0.0, 0.0),
            (600.0, 0.0),
            (600.0, 600.0),
            (0.0, 600.0),
        ]);
        circle(&mut path, 450.0, 300.0, 120.0);
        let outline = GlyphOutline::new(path);

        let (metrics, config) = defaults();
        assert_eq!(detect_eye(&outline, &metrics, &config), None);
        assert!(detect_bowl(&outline, &metrics, &config).is_some());
    }

    #[test]
    fn single_contour_has_no_eye() {
        let outline = GlyphOutline::new(notched_outer());
        let (metrics, config) = defaults();
        assert_eq!(detect_eye(&outline, &metrics, &config), None);
    }

    #[test]
    fn disjoint_contours_have_no_eye() {
        let mut path = polygon(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 100.0),
        ]);
        circle(&mut path, 500.0, 50.0, 40.0);
        let outline = GlyphOutline::new(path);

        let (metrics, config) = defaults();
        assert_eq!(detect_eye(&outline, &metrics, &config), None);
    }
}
