//! Bowl detection
//!
//! A bowl is a fully enclosed counter: the hole in "o", "b", or "p". In
//! contour terms that is simply a ring strictly enclosed by another ring.

use log::debug;

use crate::anatomy::usable_contours;
use crate::core::config::AnatomyConfig;
use crate::font::metrics::FontMetrics;
use crate::font::outline::GlyphOutline;
use crate::geometry::containment::encloses;
use crate::geometry::contour::Contour;

/// An enclosed counter found in a glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Bowl {
    /// Index of the enclosing contour, in decomposition order.
    pub outer: usize,
    /// Index of the enclosed contour.
    pub inner: usize,
    /// The counter's ring.
    pub counter: Contour,
}

/// Looks for a contour pair where one ring strictly encloses the other.
///
/// The contract is existence, not enumeration: the first enclosed pair in
/// path order is reported, and a glyph with several disjoint counters
/// still yields a single bowl. Single-contour glyphs never have one.
pub fn detect_bowl(
    outline: &GlyphOutline,
    metrics: &FontMetrics,
    config: &AnatomyConfig,
) -> Option<Bowl> {
    let contours = usable_contours(outline, metrics, config);
    if contours.len() < 2 {
        return None;
    }
    let epsilon = config.boundary_epsilon_for(metrics.units_per_em);

    for (i, outer) in contours.iter().enumerate() {
        for (j, inner) in contours.iter().enumerate() {
            if i == j {
                continue;
            }
            if encloses(outer, inner, epsilon) {
                debug!("bowl: contour {j} nests inside contour {i}");
                return Some(Bowl {
                    outer: i,
                    inner: j,
                    counter: inner.clone(),
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::BezPath;

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

    fn defaults() -> (FontMetrics, AnatomyConfig) {
        (FontMetrics::default(), AnatomyConfig::default())
    }

    #[test]
    fn donut_has_a_bowl() {
        let mut path = BezPath::new();
        circle(&mut path, 0.0, 0.0, 300.0);
        circle(&mut path, 0.0, 0.0, 120.0);
        let outline = GlyphOutline::new(path);

        let (metrics, config) = defaults();
        let bowl = detect_bowl(&outline, &metrics, &config)
            .expect("a donut encloses a counter");
        assert_eq!(bowl.outer, 0);
        assert_eq!(bowl.inner, 1);
        assert!(bowl.counter.area() > 0.0);
    }

    #[test]
    fn single_contour_has_no_bowl() {
        let mut path = BezPath::new();
        circle(&mut path, 0.0, 0.0, 300.0);
        let outline = GlyphOutline::new(path);

        let (metrics, config) = defaults();
        assert_eq!(detect_bowl(&outline, &metrics, &config), None);
    }

    #[test]
    fn disjoint_contours_have_no_bowl() {
        let mut path = BezPath::new();
        circle(&mut path, 0.0, 0.0, 100.0);
        circle(&mut path, 500.0, 0.0, 100.0);
        let outline = GlyphOutline::new(path);

        let (metrics, config) = defaults();
        assert_eq!(detect_bowl(&outline, &metrics, &config), None);
    }

    #[test]
    fn reversed_nesting_order_still_finds_the_bowl() {
        // Counter first in path order; the outer ring comes second.
        let mut path = BezPath::new();
        circle(&mut path, 0.0, 0.0, 120.0);
        circle(&mut path, 0.0, 0.0, 300.0);
        let outline = GlyphOutline::new(path);

        let (metrics, config) = defaults();
        let bowl = detect_bowl(&outline, &metrics, &config)
            .expect("nesting is order-independent");
        assert_eq!(bowl.outer, 1);
        assert_eq!(bowl.inner, 0);
    }
}
