//! A tab group: ordered documents, one active, one bound surface.

use super::document::{Document, DocumentId};
use super::event::LayoutEvent;
use super::surface::EditorSurface;
use super::tab_strip::{Tab, TabStrip};
use super::tracker::{ContentChanged, UndoModifiedTracker};
use crate::kernel::theme::LineNumberColors;
use crate::models::OpId;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PANE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneId(u64);

impl PaneId {
    fn next() -> Self {
        Self(NEXT_PANE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane#{}", self.0)
    }
}

#[derive(Debug)]
pub struct Pane {
    id: PaneId,
    documents: Vec<Document>,
    active: usize,
    surface: EditorSurface,
    tabs: TabStrip,
    tracker: UndoModifiedTracker,
    events: Vec<LayoutEvent>,
}

impl Pane {
    /// `colors` are read once here; later theme changes need `apply_colors`.
    pub fn new(colors: LineNumberColors) -> Self {
        Self {
            id: PaneId::next(),
            documents: Vec::new(),
            active: 0,
            surface: EditorSurface::new(colors),
            tabs: TabStrip::new(),
            tracker: UndoModifiedTracker::new(),
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn surface(&self) -> &EditorSurface {
        &self.surface
    }

    pub fn tab_strip(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn apply_colors(&mut self, colors: LineNumberColors) {
        self.surface.apply_colors(colors);
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.surface.set_show_line_numbers(show);
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn index_of(&self, id: DocumentId) -> Option<usize> {
        self.documents.iter().position(|d| d.id() == id)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id() == id)
    }

    /// Flag and path changes made through this reference reach the tab strip
    /// on the next `drain_events`; prefer `set_modified`/`mark_saved`.
    pub fn document_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.id() == id)
    }

    /// `None` for anything outside `[0, len)`, negative indices included.
    pub fn get_document_at(&self, index: isize) -> Option<&Document> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.documents.get(i))
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.documents.is_empty()).then_some(self.active)
    }

    pub fn current_document(&self) -> Option<&Document> {
        self.documents.get(self.active)
    }

    pub fn current_document_mut(&mut self) -> Option<&mut Document> {
        self.documents.get_mut(self.active)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.documents.iter().any(Document::is_modified)
    }

    /// Appends. The first document of an empty pane becomes active; later ones
    /// wait in the background.
    pub fn add_document(&mut self, document: Document) -> DocumentId {
        let id = document.id();
        let was_empty = self.documents.is_empty();
        self.documents.push(document);
        self.events.push(LayoutEvent::DocumentAdded {
            pane: self.id,
            document: id,
        });
        self.sync_tabs();
        if was_empty {
            self.activate(0);
        }
        id
    }

    pub fn add_document_and_activate(&mut self, document: Document) -> DocumentId {
        let id = self.add_document(document);
        self.set_active(self.documents.len() - 1);
        id
    }

    pub fn add_new_document(&mut self) -> DocumentId {
        self.add_document_and_activate(Document::new())
    }

    /// Inserts at `index` clamped to `[0, len]`; the active document stays active.
    pub fn insert_document(&mut self, index: usize, document: Document) -> DocumentId {
        let id = document.id();
        let index = index.min(self.documents.len());
        let was_empty = self.documents.is_empty();
        self.documents.insert(index, document);
        self.events.push(LayoutEvent::DocumentAdded {
            pane: self.id,
            document: id,
        });
        if was_empty {
            self.activate(0);
        } else if index <= self.active {
            self.active += 1;
        }
        self.sync_tabs();
        id
    }

    pub fn remove_document(&mut self, id: DocumentId) -> bool {
        self.take_document(id).is_some()
    }

    /// Removes the document and hands it to the caller.
    ///
    /// If it was active, the neighbor that slides into its index takes over,
    /// or the new last document when it was at the end.
    pub fn take_document(&mut self, id: DocumentId) -> Option<Document> {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(pane = %self.id, document = %id, "remove: document not in pane");
            return None;
        };

        let document = self.documents.remove(index);
        self.events.push(LayoutEvent::DocumentRemoved {
            pane: self.id,
            document: id,
        });

        if self.documents.is_empty() {
            self.active = 0;
            self.surface.bind(None);
            self.events.push(LayoutEvent::ActiveDocumentChanged {
                pane: self.id,
                document: None,
            });
        } else if index == self.active {
            self.activate(index.min(self.documents.len() - 1));
        } else if index < self.active {
            self.active -= 1;
        }

        self.sync_tabs();
        Some(document)
    }

    /// Empties the pane, preserving order.
    pub(crate) fn take_all(&mut self) -> Vec<Document> {
        let documents = std::mem::take(&mut self.documents);
        for document in &documents {
            self.events.push(LayoutEvent::DocumentRemoved {
                pane: self.id,
                document: document.id(),
            });
        }
        self.active = 0;
        self.surface.bind(None);
        self.sync_tabs();
        documents
    }

    /// Moves the document at `from` so it ends up at index `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.documents.len();
        if from >= len || to >= len {
            tracing::debug!(pane = %self.id, from, to, len, "reorder out of range");
            return false;
        }
        if from == to {
            return false;
        }

        let active_id = self.documents[self.active].id();
        let document = self.documents.remove(from);
        self.documents.insert(to, document);
        self.active = self.index_of(active_id).unwrap_or(0);
        self.sync_tabs();
        true
    }

    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.documents.len() || index == self.active {
            return false;
        }
        self.activate(index);
        true
    }

    pub fn activate_document(&mut self, id: DocumentId) -> bool {
        match self.index_of(id) {
            Some(index) => self.set_active(index),
            None => false,
        }
    }

    pub fn next_tab(&mut self) -> bool {
        let len = self.documents.len();
        if len < 2 {
            return false;
        }
        self.set_active((self.active + 1) % len)
    }

    pub fn prev_tab(&mut self) -> bool {
        let len = self.documents.len();
        if len < 2 {
            return false;
        }
        self.set_active((self.active + len - 1) % len)
    }

    /// Recomputes the label and modified marker at the document's index.
    pub fn update_tab_title(&mut self, id: DocumentId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if let Some(tab) = self.tabs.update(index, &self.documents[index]) {
            self.push_tab_event(index, tab);
        }
    }

    /// Sets the flag and pushes the tab decoration. `false` if not owned or
    /// already in that state.
    pub fn set_modified(&mut self, id: DocumentId, modified: bool) -> bool {
        let Some(document) = self.document_mut(id) else {
            return false;
        };
        let changed = document.set_modified(modified);
        self.update_tab_title(id);
        changed
    }

    pub fn mark_saved(&mut self, id: DocumentId) -> bool {
        let Some(document) = self.document_mut(id) else {
            return false;
        };
        document.mark_saved();
        self.update_tab_title(id);
        true
    }

    pub fn mark_saved_at(&mut self, id: DocumentId, version: OpId) -> bool {
        let Some(document) = self.document_mut(id) else {
            return false;
        };
        document.mark_saved_at(version);
        self.update_tab_title(id);
        true
    }

    /// Save-as: retitles the tab.
    pub fn set_document_path(&mut self, id: DocumentId, path: PathBuf) -> bool {
        let Some(document) = self.document_mut(id) else {
            return false;
        };
        document.set_path(path);
        self.update_tab_title(id);
        true
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        let Some(document) = self.documents.get_mut(self.active) else {
            return false;
        };
        let change = self.surface.insert_text(document, text);
        self.reconcile(change)
    }

    pub fn delete_backward(&mut self) -> bool {
        let Some(document) = self.documents.get_mut(self.active) else {
            return false;
        };
        let change = self.surface.delete_backward(document);
        self.reconcile(change)
    }

    pub fn delete_forward(&mut self) -> bool {
        let Some(document) = self.documents.get_mut(self.active) else {
            return false;
        };
        let change = self.surface.delete_forward(document);
        self.reconcile(change)
    }

    pub fn undo(&mut self) -> bool {
        let Some(document) = self.documents.get_mut(self.active) else {
            return false;
        };
        let change = self.surface.undo(document);
        self.reconcile(change)
    }

    pub fn redo(&mut self) -> bool {
        let Some(document) = self.documents.get_mut(self.active) else {
            return false;
        };
        let change = self.surface.redo(document);
        self.reconcile(change)
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) -> bool {
        match self.documents.get_mut(self.active) {
            Some(document) => self.surface.set_cursor(document, row, col),
            None => false,
        }
    }

    /// Events queued since the last drain, oldest first. Tabs are resynced
    /// first so edits made through `document_mut` are not lost.
    pub fn drain_events(&mut self) -> Vec<LayoutEvent> {
        self.sync_tabs();
        std::mem::take(&mut self.events)
    }

    fn reconcile(&mut self, change: Option<ContentChanged>) -> bool {
        let Some(change) = change else {
            return false;
        };
        if let Some(document) = self.documents.iter_mut().find(|d| d.id() == change.document) {
            self.tracker.on_content_changed(document, &change);
        }
        self.update_tab_title(change.document);
        true
    }

    fn activate(&mut self, index: usize) {
        self.active = index;
        let document = self.documents.get(index);
        self.surface.bind(document);
        self.events.push(LayoutEvent::ActiveDocumentChanged {
            pane: self.id,
            document: document.map(Document::id),
        });
    }

    fn sync_tabs(&mut self) {
        for (index, tab) in self.tabs.sync(&self.documents) {
            self.push_tab_event(index, tab);
        }
    }

    fn push_tab_event(&mut self, index: usize, tab: Tab) {
        self.events.push(LayoutEvent::TabTitleChanged {
            pane: self.id,
            index,
            text: tab.title,
            modified: tab.modified,
        });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/pane.rs"]
mod tests;
