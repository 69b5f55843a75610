//! SVG document model and ingestion pipeline.
//!
//! # Modules
//!
//! - [`tree`]: owned document tree, paint lookup and writes
//! - [`normalize`]: the ingestion pipeline (parse, viewBox, hoist, ids)
//! - [`bounds`]: bounds measurement seam for viewBox injection
//! - [`index`]: identifier to node lookup
//!
//! # Architecture
//!
//! ```text
//! raw SVG text
//!         │
//!         ▼
//!    ┌──────────┐
//!    │  parse   │ ──► quick-xml events → owned tree
//!    └────┬─────┘
//!         │
//!         ▼
//!    ┌───────────┐
//!    │ normalize │ ──► strip size, viewBox (BoundsProvider), hoist paint, ids
//!    └────┬──────┘
//!         │
//!         ▼
//!    ┌───────────┐
//!    │ serialize │ ──► canonical text
//!    └───────────┘
//! ```

pub mod bounds;
pub mod index;
pub mod normalize;
mod parse;
mod serialize;
mod style;
pub mod tree;

pub use bounds::{BoundingBox, BoundsProvider, FixedBounds, UsvgBounds};
pub use index::ShapeIndex;
pub use normalize::{NormalizeError, Normalized, Normalizer, PAINT_PROPERTIES};
pub use parse::parse_document;
pub use serialize::serialize;
pub use style::Style;
pub use tree::{Attribute, Document, Element, Node, NodePath};
