//! Bounding box measurement for viewBox injection.
//!
//! Measuring needs a layout-capable surface, so the normalizer only sees the
//! [`BoundsProvider`] seam. [`UsvgBounds`] measures headlessly with usvg;
//! hosts that already render the document can plug in their own provider.

use usvg::{Node, Rect, Tree};

use super::serialize::serialize;
use super::tree::Document;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Axis-aligned box in user units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `viewBox` value sized to this box with a zero origin.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Measures the rendered extent of a document.
pub trait BoundsProvider {
    /// `None` when the document cannot be measured.
    fn measure(&self, doc: &Document) -> Option<BoundingBox>;
}

impl<F> BoundsProvider for F
where
    F: Fn(&Document) -> Option<BoundingBox>,
{
    fn measure(&self, doc: &Document) -> Option<BoundingBox> {
        self(doc)
    }
}

/// Provider that always reports the same box.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedBounds(pub BoundingBox);

impl BoundsProvider for FixedBounds {
    fn measure(&self, _doc: &Document) -> Option<BoundingBox> {
        Some(self.0)
    }
}

/// Headless measurement through usvg.
#[derive(Debug, Clone, Copy)]
pub struct UsvgBounds {
    /// DPI for unit conversion.
    pub dpi: f32,
    /// Include stroke width in the measured box.
    pub include_stroke: bool,
}

impl Default for UsvgBounds {
    fn default() -> Self {
        Self {
            dpi: 96.0,
            include_stroke: false,
        }
    }
}

impl BoundsProvider for UsvgBounds {
    fn measure(&self, doc: &Document) -> Option<BoundingBox> {
        // usvg only recognizes elements in the SVG namespace.
        let mut doc = doc.clone();
        if !doc.root().has_attribute("xmlns") {
            doc.root_mut().set_attribute("xmlns", SVG_NAMESPACE);
        }

        let options = usvg::Options {
            dpi: self.dpi,
            ..Default::default()
        };
        let tree = match Tree::from_str(&serialize(&doc), &options) {
            Ok(tree) => tree,
            Err(err) => {
                crate::debug!("load"; "usvg could not measure document: {}", err);
                return None;
            }
        };

        calculate_bounds(&tree, self.include_stroke).map(|rect| {
            BoundingBox::new(rect.x(), rect.y(), rect.width(), rect.height())
        })
    }
}

/// Union of the canvas-space bounding boxes of all nodes in the tree
///
/// # Returns
/// - `Some(Rect)` - The combined bounding box of all visible elements
/// - `None` - If the tree has no visible elements
fn calculate_bounds(tree: &Tree, include_stroke: bool) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;
    traverse_group(tree.root(), include_stroke, &mut bounds);
    bounds
}

/// Recursively traverse a group and its children, accumulating bounds
fn traverse_group(group: &usvg::Group, include_stroke: bool, bounds: &mut Option<Rect>) {
    for node in group.children() {
        let node_bounds = if include_stroke {
            node.abs_stroke_bounding_box()
        } else {
            node.abs_bounding_box()
        };
        *bounds = merge_bounds(*bounds, node_bounds);

        if let Node::Group(nested_group) = node {
            traverse_group(nested_group, include_stroke, bounds);
        }
    }
}

/// Merge two optional bounding boxes into one
fn merge_bounds(a: Option<Rect>, b: Rect) -> Option<Rect> {
    match a {
        Some(existing) => {
            let min_x = existing.x().min(b.x());
            let min_y = existing.y().min(b.y());
            let max_x = existing.right().max(b.right());
            let max_y = existing.bottom().max(b.bottom());

            Rect::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y)
        }
        None => Some(b),
    }
}
