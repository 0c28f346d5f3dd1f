use crate::models::{EditHistory, OpId, TextBuffer};
use ropey::Rope;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(u64);

impl DocumentId {
    fn next() -> Self {
        Self(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

pub const UNTITLED: &str = "Untitled";

/// One open file: text, undo history and save state.
///
/// `is_modified` follows the undo position: it is false exactly when the
/// history head sits on the position recorded by the last save (or creation),
/// unless it was forced with `set_modified(true)`.
#[derive(Debug)]
pub struct Document {
    id: DocumentId,
    buffer: TextBuffer,
    history: EditHistory,
    file_path: Option<PathBuf>,
    is_modified: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::build(TextBuffer::new(), None)
    }

    pub fn with_content(content: &str) -> Self {
        Self::build(TextBuffer::from_text(content), None)
    }

    pub fn from_file(path: PathBuf, content: &str) -> Self {
        Self::build(TextBuffer::from_text(content), Some(path))
    }

    fn build(buffer: TextBuffer, file_path: Option<PathBuf>) -> Self {
        let history = EditHistory::new(buffer.rope().clone());
        Self {
            id: DocumentId::next(),
            buffer,
            history,
            file_path,
            is_modified: false,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn title(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    pub fn content(&self) -> String {
        self.buffer.text()
    }

    pub fn rope(&self) -> &Rope {
        self.buffer.rope()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.file_path = Some(path);
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Returns whether the flag actually changed.
    pub fn set_modified(&mut self, modified: bool) -> bool {
        let changed = self.is_modified != modified;
        self.is_modified = modified;
        changed
    }

    /// Moves the clean baseline to the current undo position.
    pub fn mark_saved(&mut self) {
        self.history.mark_saved();
        self.is_modified = false;
    }

    /// Like `mark_saved`, but for the position the written content came from.
    /// Edits made while the write was in flight keep the document dirty.
    pub fn mark_saved_at(&mut self, version: OpId) {
        if self.history.mark_saved_at(version) {
            self.is_modified = !self.history.is_at_saved();
        }
    }

    /// Whether the undo position equals the saved baseline.
    pub fn is_at_clean(&self) -> bool {
        self.history.is_at_saved()
    }

    /// Fresh, untouched untitled document; safe to replace when opening a file.
    pub fn is_pristine(&self) -> bool {
        self.file_path.is_none() && self.buffer.is_empty() && self.history.is_empty()
    }

    /// Replaces the text with what is on disk and forgets the history.
    pub fn reload(&mut self, content: &str) {
        let (row, col) = self.buffer.cursor();
        self.buffer = TextBuffer::from_text(content);
        self.buffer.set_cursor(row, col);
        self.history.clear(self.buffer.rope());
        self.is_modified = false;
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.buffer.cursor()
    }

    pub(crate) fn set_cursor(&mut self, row: usize, col: usize) {
        self.buffer.set_cursor(row, col);
    }

    pub(crate) fn insert_str(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let op = self.buffer.insert_str_op(text, self.history.head());
        self.history.push(op, self.buffer.rope());
        true
    }

    pub(crate) fn delete_backward(&mut self) -> bool {
        match self.buffer.delete_backward_op(self.history.head()) {
            Some(op) => {
                self.history.push(op, self.buffer.rope());
                true
            }
            None => false,
        }
    }

    pub(crate) fn delete_forward(&mut self) -> bool {
        match self.buffer.delete_forward_op(self.history.head()) {
            Some(op) => {
                self.history.push(op, self.buffer.rope());
                true
            }
            None => false,
        }
    }

    pub(crate) fn undo(&mut self) -> bool {
        match self.history.undo(self.buffer.rope()) {
            Some(step) => {
                self.buffer.set_rope(step.rope);
                self.buffer.set_cursor(step.cursor.0, step.cursor.1);
                true
            }
            None => false,
        }
    }

    pub(crate) fn redo(&mut self) -> bool {
        match self.history.redo(self.buffer.rope()) {
            Some(step) => {
                self.buffer.set_rope(step.rope);
                self.buffer.set_cursor(step.cursor.0, step.cursor.1);
                true
            }
            None => false,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/document.rs"]
mod tests;
