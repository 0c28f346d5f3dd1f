//! The line-numbered editing surface a pane binds to its active document.
//!
//! The surface owns no text: it edits the bound `Document` in place, so the
//! document is always up to date after each keystroke. Every mutation returns
//! a `ContentChanged` for the caller to feed into the tracker.

use super::document::{Document, DocumentId};
use super::tracker::ContentChanged;
use crate::kernel::theme::{Color, LineNumberColors};

/// Cells of padding around the line numbers.
const GUTTER_PADDING: u16 = 2;

#[derive(Debug, Clone)]
pub struct EditorSurface {
    bound: Option<DocumentId>,
    colors: LineNumberColors,
    show_line_numbers: bool,
    current_line: usize,
}

impl EditorSurface {
    pub fn new(colors: LineNumberColors) -> Self {
        Self {
            bound: None,
            colors,
            show_line_numbers: true,
            current_line: 0,
        }
    }

    pub fn bound(&self) -> Option<DocumentId> {
        self.bound
    }

    /// Swaps the surface over to `document` (its own cursor and history come with it).
    pub fn bind(&mut self, document: Option<&Document>) {
        self.bound = document.map(Document::id);
        self.current_line = document.map(|d| d.cursor().0).unwrap_or(0);
    }

    pub fn set_line_number_colors(
        &mut self,
        bg: Color,
        text: Color,
        current_line: Color,
        current_line_bg: Color,
    ) {
        self.colors = LineNumberColors {
            bg,
            text,
            current_line,
            current_line_bg,
        };
    }

    pub fn apply_colors(&mut self, colors: LineNumberColors) {
        self.colors = colors;
    }

    pub fn line_number_colors(&self) -> LineNumberColors {
        self.colors
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.show_line_numbers = show;
    }

    /// Gutter width in cells for a document of `line_count` lines.
    pub fn line_number_area_width(&self, line_count: usize) -> u16 {
        if !self.show_line_numbers {
            return 0;
        }
        let mut digits: u16 = 1;
        let mut n = line_count.max(1);
        while n >= 10 {
            n /= 10;
            digits += 1;
        }
        digits + GUTTER_PADDING
    }

    /// Row of the cursor in the bound document, highlighted in the gutter.
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn is_at_clean(&self, document: &Document) -> bool {
        document.is_at_clean()
    }

    pub fn content(&self, document: &Document) -> Option<String> {
        self.accepts(document).then(|| document.content())
    }

    /// Replaces the whole text; like loading a file, this starts a new history.
    pub fn set_content(&mut self, document: &mut Document, text: &str) -> Option<ContentChanged> {
        if !self.accepts(document) {
            return None;
        }
        document.reload(text);
        Some(self.changed(document))
    }

    pub fn set_cursor(&mut self, document: &mut Document, row: usize, col: usize) -> bool {
        if !self.accepts(document) {
            return false;
        }
        document.set_cursor(row, col);
        self.current_line = document.cursor().0;
        true
    }

    pub fn insert_text(&mut self, document: &mut Document, text: &str) -> Option<ContentChanged> {
        self.mutate(document, |doc| doc.insert_str(text))
    }

    pub fn delete_backward(&mut self, document: &mut Document) -> Option<ContentChanged> {
        self.mutate(document, Document::delete_backward)
    }

    pub fn delete_forward(&mut self, document: &mut Document) -> Option<ContentChanged> {
        self.mutate(document, Document::delete_forward)
    }

    pub fn undo(&mut self, document: &mut Document) -> Option<ContentChanged> {
        self.mutate(document, Document::undo)
    }

    pub fn redo(&mut self, document: &mut Document) -> Option<ContentChanged> {
        self.mutate(document, Document::redo)
    }

    fn mutate(
        &mut self,
        document: &mut Document,
        f: impl FnOnce(&mut Document) -> bool,
    ) -> Option<ContentChanged> {
        if !self.accepts(document) {
            return None;
        }
        if !f(document) {
            return None;
        }
        Some(self.changed(document))
    }

    fn changed(&mut self, document: &Document) -> ContentChanged {
        self.current_line = document.cursor().0;
        ContentChanged {
            document: document.id(),
            at_clean: document.is_at_clean(),
        }
    }

    fn accepts(&self, document: &Document) -> bool {
        let ok = self.bound == Some(document.id());
        if !ok {
            tracing::debug!(document = %document.id(), "surface is not bound to document");
        }
        ok
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/surface.rs"]
mod tests;
