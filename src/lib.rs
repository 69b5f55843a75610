//! svg-recolor - headless core of an interactive SVG recoloring editor.
//!
//! Raw SVG text is normalized into an owned tree whose shapes all carry a
//! unique identifier. A [`Session`] then tracks the selected shape and paint
//! channel, applies chosen colors, and keeps whole-document snapshots for
//! undo and reset. Rendering, color pickers and raster export belong to the
//! host.
//!
//! ```ignore
//! let mut session = Session::new(EditorConfig::default())?;
//! session.load(r#"<svg><rect fill="red"/></svg>"#)?;
//! session.click_shape("svg-part-0");
//! session.choose_color("#00ff00")?;
//! assert!(session.undo());
//! ```

pub mod logger;

pub mod color;
pub mod config;
pub mod editor;
pub mod svg;
pub mod upload;

pub use config::{ConfigError, EditorConfig};
pub use editor::{EditorError, EditorEvent, PaintChannel, Selection, Session, SvgExport};
pub use svg::{BoundingBox, BoundsProvider, Document, NormalizeError, Normalizer, serialize};
