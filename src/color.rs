//! Paint value helpers.
//!
//! Shapes carry paint as free-form CSS text (`#f00`, `rgb(255, 0, 0)`,
//! `hsl(0, 100%, 50%)`, `darkred`, `url(#grad)`, `none`). This module answers
//! two questions about such text: does it render anything, and what
//! `#rrggbb` should a color picker show. Parsing is done by svgtypes.

use std::str::FromStr;

use svgtypes::{Color, Paint};

/// What a paint value refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintKind {
    None,
    CurrentColor,
    /// `url(...)` reference to a paint server
    Server,
    Color(Color),
}

/// Parse a concrete color: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, any
/// CSS named color, or `transparent`.
///
/// Keywords that defer to something else (`currentColor`, `inherit`,
/// `url(...)`) are not concrete and return `None`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("transparent") {
        return Some(Color::new_rgba(0, 0, 0, 0));
    }
    Color::from_str(value)
        .or_else(|_| Color::from_str(&value.to_ascii_lowercase()))
        .ok()
}

/// Classify a paint value. `None` for text that is not a paint at all,
/// and for `inherit`, which only defers to the parent.
pub fn parse_paint(value: &str) -> Option<PaintKind> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Some(PaintKind::None);
    }
    if value.eq_ignore_ascii_case("currentcolor") {
        return Some(PaintKind::CurrentColor);
    }
    if let Some(color) = parse_color(value) {
        return Some(PaintKind::Color(color));
    }

    match Paint::from_str(value) {
        Ok(Paint::FuncIRI(..)) => Some(PaintKind::Server),
        _ => None,
    }
}

/// Whether a value is acceptable as a user-chosen paint.
pub fn is_paint_value(value: &str) -> bool {
    parse_paint(value).is_some()
}

/// Whether a paint value draws anything.
///
/// `none`, `transparent`, zero-alpha colors, empty text and unrecognized text
/// all count as "no renderable color".
pub fn is_renderable(value: &str) -> bool {
    match parse_paint(value) {
        Some(PaintKind::CurrentColor | PaintKind::Server) => true,
        Some(PaintKind::Color(color)) => color.alpha > 0,
        Some(PaintKind::None) | None => false,
    }
}

/// `#rrggbb` for display in a color input, if the value is a concrete color.
/// Alpha is dropped.
pub fn to_hex(value: &str) -> Option<String> {
    parse_color(value)
        .map(|color| format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue))
}
