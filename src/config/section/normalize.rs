//! `[normalize]` section configuration.
//!
//! Settings for the SVG ingestion pipeline.
//!
//! # Example
//!
//! ```toml
//! [normalize]
//! id_prefix = "svg-part-"   # generated ids look like `svg-part-0`
//! shape_tags = ["path", "circle", "rect"]
//! strip_dimensions = true   # drop root width/height (default: true)
//! stroke_bounds = false     # measured viewBox includes stroke width
//! dpi = 96.0                # measurement DPI (default: 96.0)
//! ```

use serde::{Deserialize, Serialize};

/// Element kinds that can be selected and recolored.
pub const DEFAULT_SHAPE_TAGS: &[&str] = &[
    "path", "circle", "rect", "ellipse", "polygon", "polyline", "line", "text", "g",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Prefix for identifiers assigned to shapes without one.
    pub id_prefix: String,

    /// Local tag names treated as paintable shapes.
    pub shape_tags: Vec<String>,

    /// Remove literal `width`/`height` from the root element.
    pub strip_dimensions: bool,

    /// Include stroke width when measuring a missing viewBox.
    pub stroke_bounds: bool,

    /// DPI used when measuring a missing viewBox.
    pub dpi: f32,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            id_prefix: "svg-part-".into(),
            shape_tags: DEFAULT_SHAPE_TAGS.iter().map(|s| (*s).to_string()).collect(),
            strip_dimensions: true,
            stroke_bounds: false,
            dpi: 96.0,
        }
    }
}

impl NormalizeConfig {
    /// Check whether a (possibly prefixed) tag name is a shape kind.
    pub fn is_shape_tag(&self, name: &str) -> bool {
        let local = name.rsplit(':').next().unwrap_or(name);
        self.shape_tags
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(local))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id_prefix.trim().is_empty() {
            return Err("normalize.id_prefix must not be empty".into());
        }
        if self.id_prefix.chars().any(char::is_whitespace) {
            return Err("normalize.id_prefix must not contain whitespace".into());
        }
        if self.shape_tags.is_empty() {
            return Err("normalize.shape_tags must list at least one tag".into());
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(format!("normalize.dpi must be positive, got {}", self.dpi));
        }
        Ok(())
    }
}
