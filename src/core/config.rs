//! Tunable thresholds for the anatomy heuristics

use serde::{Deserialize, Serialize};

/// All heuristic thresholds in one struct.
/// Designed to be serializable (for saving presets) and adjustable at
/// runtime (for inspector sliders). Distances are expressed at the
/// reference 1000 units-per-em and scaled to the analyzed font, so the same
/// preset works across fonts of different design sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnatomyConfig {
    // -- Contour stage --
    /// Accuracy for flattening curves to polylines, in font units at the
    /// reference upm. Smaller = more points, slower containment and
    /// intersection queries.
    pub flatten_tolerance: f64,

    // -- Geometry queries --
    /// Distance at which a point counts as touching a boundary, in font
    /// units at the reference upm. Doubles as the near-miss promotion
    /// distance for intersection queries and the dedup radius for reported
    /// intersection points.
    pub boundary_epsilon: f64,

    // -- Tittle detection --
    /// Largest fraction of the glyph bounding-box area a detached contour
    /// may cover and still read as a tittle.
    pub tittle_max_area_ratio: f64,
    /// Fraction of the x-height the bottom of a tittle must clear.
    /// Below 1.0 because round dots overshoot slightly under their
    /// optical position.
    pub tittle_height_factor: f64,
}

impl AnatomyConfig {
    /// The upm at which distance thresholds are expressed.
    pub const REFERENCE_UPM: f64 = 1000.0;

    /// Boundary epsilon scaled to the analyzed font's units-per-em.
    pub fn boundary_epsilon_for(&self, units_per_em: f64) -> f64 {
        (self.boundary_epsilon * units_per_em / Self::REFERENCE_UPM).max(0.0)
    }

    /// Flattening tolerance scaled to the analyzed font's units-per-em.
    pub fn flatten_tolerance_for(&self, units_per_em: f64) -> f64 {
        (self.flatten_tolerance * units_per_em / Self::REFERENCE_UPM)
            .max(f64::EPSILON)
    }
}

impl Default for AnatomyConfig {
    fn default() -> Self {
        Self {
            flatten_tolerance: 0.25,
            boundary_epsilon: 2.0,
            tittle_max_area_ratio: 0.15,
            tittle_height_factor: 0.9,
        }
    }
}
