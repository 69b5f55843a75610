//! Upload acceptance check.

use std::path::Path;

use crate::editor::export::SVG_MIME_TYPE;

/// Whether an uploaded file should be handed to the normalizer.
///
/// Accepts an `image/svg+xml` MIME type (parameters ignored) or, when the
/// browser reports no useful type, a `.svg` file name.
pub fn is_svg_upload(file_name: &str, mime_type: Option<&str>) -> bool {
    let mime_matches = mime_type
        .map(|mime| mime.split(';').next().unwrap_or_default().trim())
        .is_some_and(|mime| mime.eq_ignore_ascii_case(SVG_MIME_TYPE));

    mime_matches
        || Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_svg_by_type_or_extension() {
        assert!(is_svg_upload("logo.svg", None));
        assert!(is_svg_upload("LOGO.SVG", Some("")));
        assert!(is_svg_upload("blob", Some("image/svg+xml")));
        assert!(is_svg_upload("blob", Some("Image/SVG+XML; charset=utf-8")));
    }

    #[test]
    fn test_rejects_other_files() {
        assert!(!is_svg_upload("photo.png", Some("image/png")));
        assert!(!is_svg_upload("svg", None));
        assert!(!is_svg_upload("notes.svg.txt", Some("text/plain")));
    }
}
