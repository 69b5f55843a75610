//! Inline `style` attribute handling.
//!
//! A style is kept as an ordered declaration list so that untouched
//! declarations survive a rewrite in their original order. Declarations are
//! split with the cssparser tokenizer, so a `;` inside a quoted string, a
//! function or a `url(...)` stays part of its value. Values are kept as
//! written.

use cssparser::{Delimiter, ParseError, Parser, ParserInput};
use std::fmt;

/// Ordered `property: value` declarations of one `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    /// Parse `fill: red; stroke:blue` style text. Property names are
    /// lowercased; empty or malformed declarations are dropped.
    pub fn parse(text: &str) -> Self {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let mut declarations = Vec::new();

        while !parser.is_exhausted() {
            let start = parser.position();
            // Never fails; a malformed declaration is skipped up to its `;`.
            let _ = parser.parse_until_after(Delimiter::Semicolon, skip_declaration);
            if parser.position() == start {
                break;
            }
            let raw = parser.slice_from(start).trim();
            let raw = raw.strip_suffix(';').unwrap_or(raw);

            if let Some(declaration) = split_declaration(raw) {
                declarations.push(declaration);
            }
        }

        Self { declarations }
    }

    /// Value of a property; the last declaration wins, as in CSS.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property, replacing every earlier declaration of it in place.
    pub fn set(&mut self, name: &str, value: &str) {
        let mut replaced = false;
        self.declarations.retain_mut(|(n, v)| {
            if n != name {
                return true;
            }
            if replaced {
                return false;
            }
            *v = value.to_string();
            replaced = true;
            true
        });
        if !replaced {
            self.declarations.push((name.to_string(), value.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

fn skip_declaration<'i>(parser: &mut Parser<'i, '_>) -> Result<(), ParseError<'i, ()>> {
    while parser.next().is_ok() {}
    Ok(())
}

/// `name: value` into a lowercased name and the value as written.
fn split_declaration(raw: &str) -> Option<(String, String)> {
    let (name, value) = raw.split_once(':')?;
    let name = name.trim().to_ascii_lowercase();
    let value = value.trim();
    let valid_name = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    (valid_name && !value.is_empty()).then(|| (name, value.to_string()))
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_get() {
        let style = Style::parse("fill: red; STROKE:blue;;  opacity :0.5 ; broken");
        assert_eq!(style.get("fill"), Some("red"));
        assert_eq!(style.get("stroke"), Some("blue"));
        assert_eq!(style.get("opacity"), Some("0.5"));
        assert_eq!(style.get("broken"), None);
    }

    #[test]
    fn test_last_declaration_wins() {
        let style = Style::parse("fill: red; fill: blue");
        assert_eq!(style.get("fill"), Some("blue"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut style = Style::parse("fill: red; stroke: blue; fill: green");
        style.set("fill", "#00ff00");
        assert_eq!(style.to_string(), "fill: #00ff00; stroke: blue;");

        style.set("stop-color", "#fff");
        assert_eq!(style.to_string(), "fill: #00ff00; stroke: blue; stop-color: #fff;");
    }

    #[test]
    fn test_semicolons_inside_strings_and_urls() {
        let style = Style::parse(
            "font-family: 'A;B', serif; fill: url(data:image/png;base64,AAAA); stroke: url(\"x;y.svg#g\")",
        );
        assert_eq!(style.get("font-family"), Some("'A;B', serif"));
        assert_eq!(style.get("fill"), Some("url(data:image/png;base64,AAAA)"));
        assert_eq!(style.get("stroke"), Some("url(\"x;y.svg#g\")"));
    }

    #[test]
    fn test_set_keeps_other_values_verbatim() {
        let mut style = Style::parse("font-family: 'A;B', serif; mask: url(data:a;b)");
        style.set("fill", "red");
        assert_eq!(
            style.to_string(),
            "font-family: 'A;B', serif; mask: url(data:a;b); fill: red;"
        );
        assert_eq!(Style::parse(&style.to_string()), style);
    }

    #[test]
    fn test_display_round_trips() {
        let style = Style::parse("fill:#ff0000;stroke-width:2");
        assert_eq!(Style::parse(&style.to_string()), style);
        assert!(Style::parse("").is_empty());
    }
}
