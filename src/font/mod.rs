//! Font-facing input types: vertical metrics and glyph outlines

pub mod metrics;
pub mod outline;

pub use metrics::FontMetrics;
pub use outline::GlyphOutline;
