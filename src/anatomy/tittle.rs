//! Tittle detection
//!
//! A tittle is the small detached mark above a glyph's body: the dot on
//! "i" or "j". In contour terms it is a ring that never meets the body
//! contour, sits above the x-height, and is small next to the glyph as a
//! whole. All thresholds are relative (metrics- and bbox-normalized) so
//! the same rules hold across fonts of different design sizes.

use log::debug;

use crate::anatomy::usable_contours;
use crate::core::config::AnatomyConfig;
use crate::font::metrics::FontMetrics;
use crate::font::outline::GlyphOutline;
use crate::geometry::containment::encloses;
use crate::geometry::contour::Contour;
use crate::geometry::intersect::contour_intersections;

/// A detached dot found above a glyph's body.
#[derive(Debug, Clone, PartialEq)]
pub struct Tittle {
    /// Index of the dot contour, in decomposition order.
    pub index: usize,
    /// The dot's ring.
    pub dot: Contour,
}

/// Looks for a small contour detached from the glyph's largest contour
/// and sitting above the x-height.
///
/// A glyph with a single contour never has a tittle: there is nothing
/// detached to find.
pub fn detect_tittle(
    outline: &GlyphOutline,
    metrics: &FontMetrics,
    config: &AnatomyConfig,
) -> Option<Tittle> {
    let contours = usable_contours(outline, metrics, config);
    if contours.len() < 2 {
        return None;
    }
    let epsilon = config.boundary_epsilon_for(metrics.units_per_em);

    let body = contours
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.area().total_cmp(&b.area()))
        .map(|(i, _)| i)?;

    let glyph_area = outline.bbox().area().abs();
    if glyph_area <= 0.0 {
        return None;
    }
    let floor = metrics.x_height * config.tittle_height_factor;

    for (i, contour) in contours.iter().enumerate() {
        if i == body {
            continue;
        }
        if contour.area() / glyph_area > config.tittle_max_area_ratio {
            debug!("contour {i} too large to be a tittle");
            continue;
        }
        if contour.bbox().y0 < floor {
            continue;
        }
        // Counters nest inside the body; a tittle floats free of it.
        if encloses(&contours[body], contour, epsilon) {
            continue;
        }
        if !contour_intersections(contour, &contours[body], epsilon).is_none()
        {
            continue;
        }
        debug!("tittle: contour {i} floats above the body");
        return Some(Tittle { index: i, dot: contour.clone() });
    }
    None
}
