//! Typographic anatomy heuristics
//!
//! Each detector consumes the same facts — the glyph's flattened contours,
//! their containment and intersection relationships, and the font's
//! vertical metrics — and answers one question: does this glyph carry the
//! named feature, and if so, where? Detectors are independent: a glyph
//! with one closed counter and one broken counter legitimately reports
//! both a bowl and an eye.

pub mod bowl;
pub mod eye;
pub mod tittle;

pub use bowl::{detect_bowl, Bowl};
pub use eye::{detect_eye, Eye};
pub use tittle::{detect_tittle, Tittle};

use log::warn;

use crate::core::config::AnatomyConfig;
use crate::font::metrics::FontMetrics;
use crate::font::outline::GlyphOutline;
use crate::geometry::contour::{decompose, Contour};

/// The combined result of running every detector over one glyph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphAnatomy {
    pub bowl: Option<Bowl>,
    pub tittle: Option<Tittle>,
    pub eye: Option<Eye>,
}

impl GlyphAnatomy {
    /// Whether any feature was detected.
    pub fn any(&self) -> bool {
        self.bowl.is_some() || self.tittle.is_some() || self.eye.is_some()
    }
}

/// Runs every detector independently over the same outline.
pub fn analyze(
    outline: &GlyphOutline,
    metrics: &FontMetrics,
    config: &AnatomyConfig,
) -> GlyphAnatomy {
    GlyphAnatomy {
        bowl: detect_bowl(outline, metrics, config),
        tittle: detect_tittle(outline, metrics, config),
        eye: detect_eye(outline, metrics, config),
    }
}

/// Decomposes an outline for a detector, degrading malformed paths to
/// "no usable contours" so a single broken glyph never aborts a batch
/// analysis.
pub(crate) fn usable_contours(
    outline: &GlyphOutline,
    metrics: &FontMetrics,
    config: &AnatomyConfig,
) -> Vec<Contour> {
    let tolerance = config.flatten_tolerance_for(metrics.units_per_em);
    match decompose(outline.path(), tolerance) {
        Ok(contours) => contours,
        Err(err) => {
            warn!("glyph outline rejected: {err}");
            Vec::new()
        }
    }
}
