//! Font metrics and measurement data
//!
//! The heuristics reason about vertical position ("a tittle sits above the
//! x-height") using a font's global reference lines. This module carries
//! those lines, plus the units-per-em needed to normalize distances across
//! fonts of different design sizes.

use norad::Font;

/// Vertical reference lines for a font, in font units.
///
/// The heuristics assume the usual ordering
/// `descent <= baseline <= x_height <= cap_height <= ascent` but do not
/// enforce it; a font that lies about its metrics just gets less sensible
/// classifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub units_per_em: f64,
    pub baseline: f64,
    pub x_height: f64,
    pub cap_height: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl FontMetrics {
    /// Synthetic metrics for a font that only declares its design size.
    /// The percentages match common practice for text faces.
    pub fn for_units_per_em(units_per_em: f64) -> Self {
        Self {
            units_per_em,
            baseline: 0.0,
            x_height: units_per_em * 0.5,
            cap_height: units_per_em * 0.7,
            ascent: units_per_em * 0.8,
            descent: -(units_per_em * 0.2),
        }
    }

    /// Extract metrics from a UFO, filling gaps with the synthetic
    /// defaults for its units-per-em.
    pub fn from_ufo(font: &Font) -> Self {
        let font_info = &font.font_info;

        let units_per_em = font_info
            .units_per_em
            .map(|v| v.to_string().parse().unwrap_or(1000.0))
            .unwrap_or(1000.0);

        let fallback = Self::for_units_per_em(units_per_em);
        Self {
            units_per_em,
            baseline: 0.0,
            x_height: font_info.x_height.unwrap_or(fallback.x_height),
            cap_height: font_info.cap_height.unwrap_or(fallback.cap_height),
            ascent: font_info.ascender.unwrap_or(fallback.ascent),
            descent: font_info.descender.unwrap_or(fallback.descent),
        }
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::for_units_per_em(1000.0)
    }
}
