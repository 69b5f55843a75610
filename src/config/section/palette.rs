//! `[palette]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [palette]
//! default_color = "#F87316"
//! ```

use serde::{Deserialize, Serialize};

/// Color shown in the picker when no shape is selected.
pub const DEFAULT_COLOR: &str = "#F87316";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Initial and reset value of the current color.
    pub default_color: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.into(),
        }
    }
}

impl PaletteConfig {
    pub fn validate(&self) -> Result<(), String> {
        if crate::color::to_hex(&self.default_color).is_none() {
            return Err(format!(
                "palette.default_color `{}` is not a displayable color",
                self.default_color
            ));
        }
        Ok(())
    }
}
