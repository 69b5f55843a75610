//! Identifier lookup for shapes.

use rustc_hash::FxHashMap;

use super::tree::{Document, Element, Node, NodePath};
use crate::config::NormalizeConfig;

/// Maps shape identifiers to their position in a [`Document`].
///
/// The index holds paths, not references, so it never borrows the document.
/// It is only valid for the document it was built from and is rebuilt on
/// every load, undo, and reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeIndex {
    entries: FxHashMap<String, NodePath>,
}

impl ShapeIndex {
    /// Index every shape element that carries an identifier.
    ///
    /// If an identifier occurs twice, the first shape in document order wins.
    pub fn build(doc: &Document, config: &NormalizeConfig) -> Self {
        let mut index = Self::default();
        let mut path = Vec::new();
        index.visit(doc.root(), config, &mut path);
        index
    }

    fn visit(&mut self, element: &Element, config: &NormalizeConfig, path: &mut NodePath) {
        if config.is_shape_tag(&element.name)
            && let Some(id) = element.id()
        {
            self.entries
                .entry(id.to_string())
                .or_insert_with(|| path.clone());
        }

        for (i, child) in element.children.iter().enumerate() {
            if let Node::Element(el) = child {
                path.push(i);
                self.visit(el, config, path);
                path.pop();
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&[usize]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All indexed identifiers, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::parse::parse_document;

    #[test]
    fn test_indexes_shapes_only() {
        let doc = parse_document(
            r#"<svg><defs><linearGradient id="grad"/></defs><g id="layer"><rect id="box"/><tspan id="t"/></g></svg>"#,
        )
        .unwrap();
        let index = ShapeIndex::build(&doc, &NormalizeConfig::default());

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("layer"), Some(&[1][..]));
        assert_eq!(index.get("box"), Some(&[1, 0][..]));
        assert!(!index.contains("grad"));
        assert!(!index.contains("t"));
    }

    #[test]
    fn test_paths_resolve_to_elements() {
        let doc = parse_document("<svg>\n  <g>\n    <circle id=\"dot\"/>\n  </g>\n</svg>").unwrap();
        let index = ShapeIndex::build(&doc, &NormalizeConfig::default());
        let path = index.get("dot").unwrap();
        assert_eq!(doc.element(path).map(|e| e.name.as_str()), Some("circle"));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let doc = parse_document(r#"<svg><rect id="a"/><circle id="a"/></svg>"#).unwrap();
        let index = ShapeIndex::build(&doc, &NormalizeConfig::default());
        assert_eq!(index.get("a"), Some(&[0][..]));
    }
}
