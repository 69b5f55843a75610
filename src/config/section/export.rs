//! `[export]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [export]
//! file_stem = "customized-image"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name without extension offered for downloads.
    pub file_stem: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_stem: "customized-image".into(),
        }
    }
}

impl ExportConfig {
    /// File name for an export with the given extension.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.file_stem)
    }
}
