//! Download payloads.

pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Canonical SVG text packaged for a file download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgExport {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl SvgExport {
    pub fn new(file_name: String, content: String) -> Self {
        Self {
            file_name,
            mime_type: SVG_MIME_TYPE,
            content,
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
