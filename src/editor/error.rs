use thiserror::Error;

use crate::svg::NormalizeError;

/// Errors reported by [`Session`](super::Session) operations.
///
/// Stale shape references and undo on an empty history are not errors;
/// they are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("`{0}` is not a paint value")]
    InvalidColor(String),

    #[error("`{0}` is not an SVG file")]
    UnsupportedUpload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EditorError::from(NormalizeError::MalformedInput("no <svg> element".into()));
        assert_eq!(err.to_string(), "malformed SVG input: no <svg> element");
        assert_eq!(
            EditorError::InvalidColor("blurple".into()).to_string(),
            "`blurple` is not a paint value"
        );
    }
}
