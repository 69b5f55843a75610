//! Linear undo history of whole-document snapshots.

use crate::svg::Document;

/// Undo stack plus the originally uploaded document.
///
/// Snapshots are taken before the mutation they guard. There is no redo:
/// a popped snapshot is gone.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    /// Snapshots, most recent last
    undo_stack: Vec<Document>,
    /// Document as uploaded, kept for reset
    original: Option<Document>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session: drop all snapshots and remember `original`.
    pub fn start(&mut self, original: Document) {
        self.undo_stack.clear();
        self.original = Some(original);
    }

    /// Record the document as it was before a mutating edit.
    pub fn record_before_edit(&mut self, doc: Document) {
        self.undo_stack.push(doc);
    }

    /// Pop the most recent snapshot. `None` on an empty stack.
    pub fn undo(&mut self) -> Option<Document> {
        self.undo_stack.pop()
    }

    /// Record `current` (if any) and return a copy of the original upload.
    ///
    /// Returns `None` and records nothing when no document was uploaded.
    pub fn reset_to_original(&mut self, current: Option<Document>) -> Option<Document> {
        let original = self.original.clone()?;
        if let Some(current) = current {
            self.undo_stack.push(current);
        }
        Some(original)
    }

    pub fn original(&self) -> Option<&Document> {
        self.original.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}
