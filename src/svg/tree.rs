//! Owned SVG document tree.
//!
//! The tree is a plain value: cloning a [`Document`] yields a fully
//! independent copy, which is what undo snapshots rely on.

use super::style::Style;

/// Position of an element as child indices from the root.
///
/// An empty path addresses the root itself.
pub type NodePath = Vec<usize>;

/// A single `name="value"` pair. The value is stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Child content of an element.
///
/// Text, CDATA and comments are kept as raw markup so they serialize back
/// exactly as they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified tag name as written (`rect`, `svg:rect`).
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name without namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Set an attribute, keeping its position if it already exists.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let pos = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(pos).value)
    }

    /// Non-empty `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id").filter(|id| !id.is_empty())
    }

    pub fn style(&self) -> Style {
        self.attribute("style").map(Style::parse).unwrap_or_default()
    }

    pub fn set_style(&mut self, style: &Style) {
        self.set_attribute("style", style.to_string());
    }

    /// Paint declared on this element: inline style first, then the
    /// presentation attribute.
    pub fn declared_paint(&self, property: &str) -> Option<String> {
        let style = self.style();
        style
            .get(property)
            .or_else(|| self.attribute(property))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    pub fn child_element(&self, index: usize) -> Option<&Element> {
        match self.children.get(index)? {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn child_element_mut(&mut self, index: usize) -> Option<&mut Element> {
        match self.children.get_mut(index)? {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Append text, merging with a trailing text node.
    pub fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }
}

/// A normalized SVG document rooted at an `<svg>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn element(&self, path: &[usize]) -> Option<&Element> {
        path.iter()
            .try_fold(&self.root, |el, &index| el.child_element(index))
    }

    pub fn element_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        path.iter()
            .try_fold(&mut self.root, |el, &index| el.child_element_mut(index))
    }

    /// Paint the element at `path` renders with, following inheritance.
    ///
    /// The nearest declaration wins; `inherit` defers to the parent.
    pub fn resolved_paint(&self, path: &[usize], property: &str) -> Option<String> {
        let mut chain = Vec::with_capacity(path.len() + 1);
        let mut current = &self.root;
        chain.push(current);
        for &index in path {
            current = current.child_element(index)?;
            chain.push(current);
        }

        chain
            .iter()
            .rev()
            .filter_map(|el| el.declared_paint(property))
            .find(|value| !value.eq_ignore_ascii_case("inherit"))
    }

    /// Write a paint value to both the presentation attribute and the inline
    /// style of the element at `path`. Returns false if there is no element.
    pub fn set_paint(&mut self, path: &[usize], property: &str, value: &str) -> bool {
        let Some(el) = self.element_mut(path) else {
            return false;
        };
        el.set_attribute(property, value);
        let mut style = el.style();
        style.set(property, value);
        el.set_style(&style);
        true
    }
}
