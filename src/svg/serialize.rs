//! Owned tree to canonical SVG text.
//!
//! Output is deterministic: attributes keep their stored order, values are
//! escaped and double-quoted, childless elements are self-closed, and raw
//! text/CDATA/comment content is written back verbatim.

use quick_xml::escape::escape;

use super::tree::{Document, Element, Node};

/// Render a document to canonical markup.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    write_element(&mut out, doc.root());
    out
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.name);
    for attr in &element.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        out.push_str(&escape(attr.value.as_str()));
        out.push('"');
    }

    if element.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &element.children {
        match child {
            Node::Element(el) => write_element(out, el),
            Node::Text(raw) => out.push_str(raw),
            Node::CData(raw) => {
                out.push_str("<![CDATA[");
                out.push_str(raw);
                out.push_str("]]>");
            }
            Node::Comment(raw) => {
                out.push_str("<!--");
                out.push_str(raw);
                out.push_str("-->");
            }
        }
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}
