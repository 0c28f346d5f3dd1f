//! Keeps `Document::is_modified` in step with the surface's undo position.

use super::document::{Document, DocumentId};

/// Reported by the surface after every mutation, undo and redo included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentChanged {
    pub document: DocumentId,
    pub at_clean: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UndoModifiedTracker;

impl UndoModifiedTracker {
    pub fn new() -> Self {
        Self
    }

    /// Sets `is_modified = !at_clean`. Returns whether the flag changed.
    pub fn on_content_changed(&self, document: &mut Document, change: &ContentChanged) -> bool {
        if document.id() != change.document {
            tracing::debug!(
                expected = %change.document,
                got = %document.id(),
                "content change for another document ignored"
            );
            return false;
        }
        document.set_modified(!change.at_clean)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/tracker.rs"]
mod tests;
