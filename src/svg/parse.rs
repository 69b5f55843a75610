//! SVG text to owned tree.
//!
//! Reads with quick-xml and keeps the first `<svg>` element found anywhere in
//! the input as the document root; wrapper markup around it is discarded,
//! as is everything outside the root (XML declaration, doctype, prolog
//! comments).

use quick_xml::{
    Reader,
    escape::unescape,
    events::{BytesStart, Event},
};

use super::normalize::NormalizeError;
use super::tree::{Attribute, Document, Element, Node};

/// Deepest element nesting accepted. The tree is walked recursively, so
/// deeper input is rejected instead of risking the stack.
pub const MAX_DEPTH: usize = 512;

/// Parse SVG text into a [`Document`].
///
/// # Errors
///
/// [`NormalizeError::MalformedInput`] if the text is not well-formed XML or
/// contains no `<svg>` element.
pub fn parse_document(text: &str) -> Result<Document, NormalizeError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();
    let mut top_level: Vec<Element> = Vec::new();

    loop {
        let event = reader.read_event().map_err(|err| {
            malformed(format!(
                "{err} at byte {}",
                reader.error_position()
            ))
        })?;

        match event {
            Event::Start(start) => {
                check_depth(&stack)?;
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                check_depth(&stack)?;
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut top_level, element);
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed("unexpected closing tag".into()))?;
                attach(&mut stack, &mut top_level, element);
            }
            Event::Text(text) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(&String::from_utf8_lossy(&text));
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(&format!("&{};", String::from_utf8_lossy(&reference)));
                }
            }
            Event::CData(cdata) => {
                if let Some(parent) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(&cdata).into_owned();
                    parent.children.push(Node::CData(raw));
                }
            }
            Event::Comment(comment) => {
                if let Some(parent) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(&comment).into_owned();
                    parent.children.push(Node::Comment(raw));
                }
            }
            Event::Eof => break,
            // Declarations, doctypes and processing instructions carry no paint.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(format!("unclosed element <{}>", open.name)));
    }

    top_level
        .into_iter()
        .find_map(take_svg)
        .map(Document::new)
        .ok_or_else(|| malformed("no <svg> element found".into()))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, NormalizeError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));

    for attr in start.attributes() {
        let attr = attr.map_err(|err| malformed(err.to_string()))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value);
        let value = unescape(&raw)
            .map_err(|err| malformed(format!("attribute `{name}`: {err}")))?
            .into_owned();
        element.attributes.push(Attribute { name, value });
    }

    Ok(element)
}

fn check_depth(stack: &[Element]) -> Result<(), NormalizeError> {
    if stack.len() >= MAX_DEPTH {
        return Err(malformed(format!(
            "elements nested deeper than {MAX_DEPTH} levels"
        )));
    }
    Ok(())
}

/// Append a finished element to its parent, or to the top level.
fn attach(stack: &mut [Element], top_level: &mut Vec<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => top_level.push(element),
    }
}

/// Depth-first search for the first `<svg>` element, consuming the tree.
fn take_svg(element: Element) -> Option<Element> {
    if element.local_name().eq_ignore_ascii_case("svg") {
        return Some(element);
    }
    element.children.into_iter().find_map(|child| match child {
        Node::Element(el) => take_svg(el),
        _ => None,
    })
}

#[inline]
fn malformed(reason: String) -> NormalizeError {
    NormalizeError::MalformedInput(reason)
}
