//! SVG ingestion pipeline.
//!
//! Steps, in order, each a no-op on an already normalized document:
//!
//! 1. parse, rejecting input without an `<svg>` element
//! 2. drop literal `width`/`height` on the root
//! 3. inject `viewBox` from measured bounds when missing
//! 4. hoist `fill`/`stroke`/`stop-color` attributes into inline style
//! 5. give every shape without an identifier a generated one
//!
//! Hoisting matters for later edits: a style write always beats an old
//! presentation attribute, and removing the attribute keeps stale values out
//! of the serialized text.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::bounds::{BoundingBox, BoundsProvider};
use super::index::ShapeIndex;
use super::parse::parse_document;
use super::tree::{Document, Element, Node};
use crate::config::NormalizeConfig;
use crate::debug;

/// Presentation attributes moved into inline style.
pub const PAINT_PROPERTIES: [&str; 3] = ["fill", "stroke", "stop-color"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("malformed SVG input: {0}")]
    MalformedInput(String),
}

/// A normalized document together with its freshly built shape index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub document: Document,
    pub index: ShapeIndex,
}

/// Runs the ingestion pipeline with an injected bounds provider.
#[derive(Debug, Clone)]
pub struct Normalizer<B> {
    config: NormalizeConfig,
    bounds: B,
}

impl<B: BoundsProvider> Normalizer<B> {
    pub fn new(config: NormalizeConfig, bounds: B) -> Self {
        Self { config, bounds }
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Normalize raw SVG text.
    ///
    /// # Errors
    ///
    /// [`NormalizeError::MalformedInput`] if the text does not parse or has
    /// no `<svg>` element.
    pub fn normalize(&self, text: &str) -> Result<Normalized, NormalizeError> {
        let mut document = parse_document(text)?;

        let declared = declared_size(document.root());
        if self.config.strip_dimensions {
            let root = document.root_mut();
            root.remove_attribute("width");
            root.remove_attribute("height");
        }
        self.ensure_view_box(&mut document, declared);

        hoist_paint_attributes(document.root_mut());
        let assigned = assign_ids(&mut document, &self.config);
        let index = ShapeIndex::build(&document, &self.config);

        debug!("load"; "normalized: {} shapes indexed, {} ids assigned", index.len(), assigned);
        Ok(Normalized { document, index })
    }

    fn ensure_view_box(&self, doc: &mut Document, declared: Option<(f32, f32)>) {
        if doc.root().has_attribute("viewBox") {
            return;
        }

        let bbox = self
            .bounds
            .measure(doc)
            .or_else(|| declared.map(|(w, h)| BoundingBox::new(0.0, 0.0, w, h)))
            .unwrap_or_default();
        let view_box = bbox.view_box();
        debug!("load"; "injecting viewBox=\"{}\"", view_box);
        doc.root_mut().set_attribute("viewBox", view_box);
    }
}

/// Numeric `width`/`height` of the root, unitless or in `px`.
fn declared_size(root: &Element) -> Option<(f32, f32)> {
    let parse = |name: &str| -> Option<f32> {
        let raw = root.attribute(name)?.trim();
        let raw = raw.strip_suffix("px").unwrap_or(raw);
        raw.parse::<f32>().ok().filter(|v| v.is_finite() && *v >= 0.0)
    };
    Some((parse("width")?, parse("height")?))
}

/// Hoist paint attributes of every descendant of `element` into inline style.
fn hoist_paint_attributes(element: &mut Element) {
    for child in &mut element.children {
        if let Node::Element(el) = child {
            hoist_element(el);
            hoist_paint_attributes(el);
        }
    }
}

fn hoist_element(el: &mut Element) {
    let mut style = el.style();
    let mut changed = false;

    for property in PAINT_PROPERTIES {
        let Some(value) = el.remove_attribute(property) else {
            continue;
        };
        let value = value.trim();
        if !value.is_empty() && style.get(property).is_none() {
            style.set(property, value);
            changed = true;
        }
    }

    if changed {
        el.set_style(&style);
    }
}

/// Hands out `<prefix><n>` identifiers that do not collide with any id in
/// the document.
struct IdAllocator<'a> {
    config: &'a NormalizeConfig,
    counter: usize,
    taken: FxHashSet<String>,
    seen: FxHashSet<String>,
    assigned: usize,
}

impl IdAllocator<'_> {
    fn next_id(&mut self) -> String {
        loop {
            let candidate = format!("{}{}", self.config.id_prefix, self.counter);
            self.counter += 1;
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Pre-order walk; shapes keep the first occurrence of an id.
    fn visit(&mut self, el: &mut Element) {
        let existing = el
            .id()
            .filter(|id| !self.seen.contains(*id))
            .map(str::to_string);

        match existing {
            Some(id) => {
                self.seen.insert(id);
            }
            None if self.config.is_shape_tag(&el.name) => {
                let id = self.next_id();
                el.set_attribute("id", id.clone());
                self.seen.insert(id);
                self.assigned += 1;
            }
            None => {}
        }

        for child in &mut el.children {
            if let Node::Element(child) = child {
                self.visit(child);
            }
        }
    }
}

fn collect_ids(el: &Element, ids: &mut FxHashSet<String>) {
    if let Some(id) = el.id() {
        ids.insert(id.to_string());
    }
    for child in &el.children {
        if let Node::Element(child) = child {
            collect_ids(child, ids);
        }
    }
}

/// Assign generated ids; returns how many were assigned.
fn assign_ids(doc: &mut Document, config: &NormalizeConfig) -> usize {
    let mut taken = FxHashSet::default();
    collect_ids(doc.root(), &mut taken);

    let mut allocator = IdAllocator {
        config,
        counter: 0,
        taken,
        seen: FxHashSet::default(),
        assigned: 0,
    };
    allocator.visit(doc.root_mut());
    allocator.assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::bounds::FixedBounds;
    use crate::svg::serialize::serialize;

    fn normalizer() -> Normalizer<FixedBounds> {
        Normalizer::new(
            NormalizeConfig::default(),
            FixedBounds(BoundingBox::new(3.0, 4.0, 120.0, 80.0)),
        )
    }

    fn all_shape_ids(doc: &Document, config: &NormalizeConfig) -> Vec<String> {
        fn walk(el: &Element, config: &NormalizeConfig, out: &mut Vec<String>) {
            if config.is_shape_tag(&el.name) {
                out.push(el.id().unwrap_or_default().to_string());
            }
            for child in &el.children {
                if let Node::Element(child) = child {
                    walk(child, config, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(doc.root(), config, &mut out);
        out
    }

    #[test]
    fn test_minimal_document() {
        let normalized = normalizer()
            .normalize(r##"<svg><rect fill="#ff0000"/></svg>"##)
            .unwrap();
        assert_eq!(
            serialize(&normalized.document),
            r#"<svg viewBox="0 0 120 80"><rect style="fill: #ff0000;" id="svg-part-0"/></svg>"#
        );
        assert_eq!(normalized.index.get("svg-part-0"), Some(&[0][..]));
    }

    #[test]
    fn test_strips_dimensions_and_keeps_view_box() {
        let normalized = normalizer()
            .normalize(r#"<svg width="200px" height="100" viewBox="0 0 20 10"/>"#)
            .unwrap();
        let root = normalized.document.root();
        assert!(!root.has_attribute("width"));
        assert!(!root.has_attribute("height"));
        assert_eq!(root.attribute("viewBox"), Some("0 0 20 10"));
    }

    #[test]
    fn test_keeps_dimensions_when_configured() {
        let config = NormalizeConfig {
            strip_dimensions: false,
            ..NormalizeConfig::default()
        };
        let normalizer = Normalizer::new(config, FixedBounds::default());
        let normalized = normalizer.normalize(r#"<svg width="5" height="6"/>"#).unwrap();
        assert_eq!(normalized.document.root().attribute("width"), Some("5"));
    }

    #[test]
    fn test_view_box_falls_back_to_declared_size() {
        let normalizer = Normalizer::new(NormalizeConfig::default(), |_: &Document| -> Option<BoundingBox> {
            None
        });
        let normalized = normalizer.normalize(r#"<svg width="64px" height="32"/>"#).unwrap();
        assert_eq!(normalized.document.root().attribute("viewBox"), Some("0 0 64 32"));

        let normalized = normalizer.normalize(r#"<svg width="50%"/>"#).unwrap();
        assert_eq!(normalized.document.root().attribute("viewBox"), Some("0 0 0 0"));
    }

    #[test]
    fn test_hoisting_rules() {
        let normalized = normalizer()
            .normalize(concat!(
                r#"<svg fill="red">"#,
                r#"<path fill="blue" style="fill: green;" stroke="black"/>"#,
                r##"<stop stop-color="#fff" fill=""/>"##,
                r#"</svg>"#,
            ))
            .unwrap();
        let doc = &normalized.document;

        // root is not a descendant and keeps its attribute
        assert_eq!(doc.root().attribute("fill"), Some("red"));

        let path = doc.element(&[0]).unwrap();
        assert!(!path.has_attribute("fill"));
        assert!(!path.has_attribute("stroke"));
        assert_eq!(path.attribute("style"), Some("fill: green; stroke: black;"));

        let stop = doc.element(&[1]).unwrap();
        assert!(!stop.has_attribute("fill"));
        assert_eq!(stop.attribute("style"), Some("stop-color: #fff;"));
    }

    #[test]
    fn test_untouched_style_is_kept_verbatim() {
        let normalized = normalizer()
            .normalize(r#"<svg><rect id="r" style="opacity:.5"/></svg>"#)
            .unwrap();
        let rect = normalized.document.element(&[0]).unwrap();
        assert_eq!(rect.attribute("style"), Some("opacity:.5"));
    }

    #[test]
    fn test_hoisting_keeps_quoted_and_url_values_intact() {
        let input = concat!(
            r#"<svg><text fill="red" style="font-family: 'A;B', serif">Hi</text>"#,
            r#"<rect stroke="blue" style="fill: url(data:image/png;base64,AAAA)"/></svg>"#,
        );
        let normalizer = normalizer();
        let normalized = normalizer.normalize(input).unwrap();
        let doc = &normalized.document;

        assert_eq!(
            doc.element(&[0]).unwrap().attribute("style"),
            Some("font-family: 'A;B', serif; fill: red;")
        );
        assert_eq!(
            doc.element(&[1]).unwrap().attribute("style"),
            Some("fill: url(data:image/png;base64,AAAA); stroke: blue;")
        );

        let twice = normalizer.normalize(&serialize(doc)).unwrap();
        assert_eq!(twice, normalized);
    }

    #[test]
    fn test_existing_ids_are_preserved_and_skipped() {
        let normalized = normalizer()
            .normalize(r#"<svg><g id="svg-part-0"><rect/><circle id="c"/></g><path/></svg>"#)
            .unwrap();
        let doc = &normalized.document;
        assert_eq!(doc.element(&[0]).unwrap().id(), Some("svg-part-0"));
        assert_eq!(doc.element(&[0, 0]).unwrap().id(), Some("svg-part-1"));
        assert_eq!(doc.element(&[0, 1]).unwrap().id(), Some("c"));
        assert_eq!(doc.element(&[1]).unwrap().id(), Some("svg-part-2"));
        assert_eq!(normalized.index.len(), 4);
    }

    #[test]
    fn test_non_shapes_get_no_ids() {
        let normalized = normalizer()
            .normalize("<svg><defs><linearGradient><stop/></linearGradient></defs></svg>")
            .unwrap();
        assert!(normalized.index.is_empty());
        assert_eq!(normalized.document.element(&[0, 0, 0]).unwrap().id(), None);
    }

    #[test]
    fn test_identifiers_are_unique() {
        let normalized = normalizer()
            .normalize(concat!(
                r#"<svg><linearGradient id="svg-part-1"/>"#,
                r#"<rect id="dup"/><rect id="dup"/><circle/><ellipse id=""/>"#,
                r#"<text>hi<tspan>there</tspan></text></svg>"#,
            ))
            .unwrap();
        let mut ids = all_shape_ids(&normalized.document, &NormalizeConfig::default());
        assert_eq!(ids.len(), 5);
        assert!(ids.iter().all(|id| !id.is_empty()));
        assert!(!ids.contains(&"svg-part-1".to_string()));

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(normalized.index.len(), 5);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let inputs = [
            r##"<svg width="10" height="10"><rect fill="#ff0000" stroke="#000"/></svg>"##,
            r#"<svg viewBox="0 0 5 5"><g fill="red"><path d="M0 0L5 5"/><path id="p" style="stroke: blue" stroke="green"/></g></svg>"#,
            "<svg>\n  <!-- note -->\n  <text x=\"1\">a &amp; b</text>\n  <rect id=\"a\"/><rect id=\"a\"/>\n</svg>",
            r#"<div><svg><linearGradient><stop stop-color="red"/></linearGradient><circle r="2"/></svg></div>"#,
        ];

        let normalizer = normalizer();
        for input in inputs {
            let once = normalizer.normalize(input).unwrap();
            let twice = normalizer.normalize(&serialize(&once.document)).unwrap();
            assert_eq!(twice, once, "not idempotent for {input}");
        }
    }

    #[test]
    fn test_malformed_input() {
        let err = normalizer().normalize("<html/>").unwrap_err();
        assert!(matches!(err, NormalizeError::MalformedInput(_)));
        assert!(err.to_string().contains("malformed SVG input"));
    }
}
