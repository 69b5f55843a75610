//! Editor configuration loaded from TOML.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [palette], [normalize], [export]
//! ├── error          # ConfigError
//! └── mod.rs         # EditorConfig (this file)
//! ```
//!
//! Every section is optional; an empty file yields the defaults.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{DEFAULT_COLOR, DEFAULT_SHAPE_TAGS, ExportConfig, NormalizeConfig, PaletteConfig};

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, str::FromStr};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Picker defaults
    #[serde(default)]
    pub palette: PaletteConfig,

    /// SVG ingestion settings
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Download settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl EditorConfig {
    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are reported as warnings and otherwise ignored.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette.validate().map_err(ConfigError::Validation)?;
        self.normalize.validate().map_err(ConfigError::Validation)?;
        if self.export.file_stem.trim().is_empty() {
            return Err(ConfigError::Validation(
                "export.file_stem must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl FromStr for EditorConfig {
    type Err = ConfigError;

    /// Parse and validate configuration from TOML text.
    ///
    /// Unknown fields are silently ignored; [`EditorConfig::from_path`]
    /// reports them.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Parse a config for tests, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> EditorConfig {
    let (parsed, ignored) = EditorConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
