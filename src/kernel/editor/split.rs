//! One or two panes side by side (or stacked).
//!
//! Documents are owned values inside their pane, so moving one between panes
//! is a Rust move: it can never sit in two panes at once, or in none.

use super::document::{Document, DocumentId};
use super::event::LayoutEvent;
use super::pane::{Pane, PaneId};
use crate::kernel::theme::ThemeManager;
use crate::models::OpId;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitDirection {
    /// Panes left and right of each other.
    #[default]
    Vertical,
    /// Panes above and below each other.
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl SplitSide {
    pub fn direction(self) -> SplitDirection {
        match self {
            SplitSide::Left | SplitSide::Right => SplitDirection::Vertical,
            SplitSide::Top | SplitSide::Bottom => SplitDirection::Horizontal,
        }
    }

    /// Whether the new pane goes before the existing one.
    fn leads(self) -> bool {
        matches!(self, SplitSide::Left | SplitSide::Top)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(SplitSide::Left),
            "right" => Some(SplitSide::Right),
            "top" | "up" => Some(SplitSide::Top),
            "bottom" | "down" => Some(SplitSide::Bottom),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct SplitContainer {
    panes: Vec<Pane>,
    direction: SplitDirection,
    active: usize,
    show_line_numbers: bool,
    events: Vec<LayoutEvent>,
}

impl SplitContainer {
    /// Unsplit, with a single pane holding one empty document.
    pub fn new(theme: &ThemeManager) -> Self {
        let mut pane = Pane::new(theme.line_number_colors());
        pane.add_document(Document::new());
        pane.drain_events();
        Self {
            panes: vec![pane],
            direction: SplitDirection::default(),
            active: 0,
            show_line_numbers: true,
            events: Vec::new(),
        }
    }

    pub fn is_split(&self) -> bool {
        self.panes.len() == 2
    }

    pub fn direction(&self) -> SplitDirection {
        self.direction
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.panes.iter().map(Pane::id).collect()
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.iter().find(|p| p.id() == id)
    }

    pub fn pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|p| p.id() == id)
    }

    pub fn active_pane(&self) -> &Pane {
        &self.panes[self.active]
    }

    pub fn active_pane_mut(&mut self) -> &mut Pane {
        &mut self.panes[self.active]
    }

    pub fn active_pane_id(&self) -> PaneId {
        self.active_pane().id()
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active_pane().current_document()
    }

    pub fn active_document_mut(&mut self) -> Option<&mut Document> {
        self.active_pane_mut().current_document_mut()
    }

    pub fn set_active_pane(&mut self, id: PaneId) -> bool {
        match self.pane_index(id) {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }

    pub fn focus_next_pane(&mut self) -> bool {
        if !self.is_split() {
            return false;
        }
        self.active = 1 - self.active;
        true
    }

    pub fn document_count(&self) -> usize {
        self.panes.iter().map(Pane::document_count).sum()
    }

    /// Pane order, then tab order within each pane.
    pub fn all_documents(&self) -> impl Iterator<Item = &Document> + '_ {
        self.panes.iter().flat_map(|p| p.documents().iter())
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.panes.iter().any(Pane::has_unsaved_changes)
    }

    pub fn find_document(&self, id: DocumentId) -> Option<(PaneId, usize)> {
        self.panes
            .iter()
            .find_map(|p| p.index_of(id).map(|index| (p.id(), index)))
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.panes.iter().find_map(|p| p.document(id))
    }

    /// See `Pane::document_mut`: tabs catch up on `drain_events`.
    pub fn document_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.panes.iter_mut().find_map(|p| p.document_mut(id))
    }

    pub fn set_modified(&mut self, id: DocumentId, modified: bool) -> bool {
        self.owning_pane_mut(id)
            .is_some_and(|p| p.set_modified(id, modified))
    }

    pub fn mark_saved(&mut self, id: DocumentId) -> bool {
        self.owning_pane_mut(id).is_some_and(|p| p.mark_saved(id))
    }

    pub fn mark_saved_at(&mut self, id: DocumentId, version: OpId) -> bool {
        self.owning_pane_mut(id)
            .is_some_and(|p| p.mark_saved_at(id, version))
    }

    pub fn set_document_path(&mut self, id: DocumentId, path: PathBuf) -> bool {
        self.owning_pane_mut(id)
            .is_some_and(|p| p.set_document_path(id, path))
    }

    pub fn find_by_path(&self, path: &Path) -> Option<DocumentId> {
        self.all_documents()
            .find(|d| d.file_path() == Some(path))
            .map(Document::id)
    }

    /// Focuses the pane owning `id` and makes `id` its active tab.
    pub fn activate_document(&mut self, id: DocumentId) -> bool {
        let Some(index) = self.pane_index_of_document(id) else {
            return false;
        };
        self.active = index;
        self.panes[index].activate_document(id);
        true
    }

    /// Adds to the active pane and shows it.
    pub fn add_document(&mut self, document: Document) -> DocumentId {
        self.active_pane_mut().add_document_and_activate(document)
    }

    pub fn add_new_document(&mut self) -> DocumentId {
        self.active_pane_mut().add_new_document()
    }

    /// Refreshes the tab of `id` in whichever pane owns it.
    pub fn update_tab_title(&mut self, id: DocumentId) {
        for pane in &mut self.panes {
            pane.update_tab_title(id);
        }
    }

    pub fn create_split(
        &mut self,
        document: DocumentId,
        side: SplitSide,
        theme: &ThemeManager,
    ) -> bool {
        if self.is_split() {
            tracing::debug!("split: already split");
            return false;
        }
        if self.document_count() < 2 {
            tracing::debug!("split: needs at least two documents");
            return false;
        }
        let Some(source) = self.pane_index_of_document(document) else {
            tracing::debug!(document = %document, "split: document not owned");
            return false;
        };
        let Some(moved) = self.panes[source].take_document(document) else {
            return false;
        };
        self.collect_events();

        let mut pane = Pane::new(theme.line_number_colors());
        pane.set_show_line_numbers(self.show_line_numbers);
        pane.add_document(moved);

        let index = if side.leads() { 0 } else { self.panes.len() };
        self.panes.insert(index, pane);
        self.direction = side.direction();
        self.active = index;

        self.collect_events();
        self.events.push(LayoutEvent::SplitStateChanged {
            split: true,
            direction: self.direction,
        });
        tracing::info!(document = %document, ?side, "split created");
        true
    }

    /// Appends the second pane's documents to the first and drops it.
    pub fn merge_panes(&mut self) -> bool {
        if !self.is_split() {
            tracing::debug!("merge: not split");
            return false;
        }

        self.collect_events();
        let keep_active = self.active_document().map(Document::id);
        let mut second = self.panes.remove(1);
        let documents = second.take_all();
        self.events.extend(second.drain_events());

        let first = &mut self.panes[0];
        for document in documents {
            first.add_document(document);
        }
        if let Some(id) = keep_active {
            first.activate_document(id);
        }
        self.active = 0;

        self.collect_events();
        self.events.push(LayoutEvent::SplitStateChanged {
            split: false,
            direction: self.direction,
        });
        tracing::info!("panes merged");
        true
    }

    pub fn transfer_document(&mut self, document: DocumentId, source: PaneId, target: PaneId) -> bool {
        if source == target {
            tracing::debug!(document = %document, "transfer: source is target");
            return false;
        }
        let (Some(src), Some(dst)) = (self.pane_index(source), self.pane_index(target)) else {
            tracing::debug!(document = %document, "transfer: unknown pane");
            return false;
        };
        let Some(moved) = self.panes[src].take_document(document) else {
            return false;
        };
        self.collect_events();

        self.panes[dst].add_document_and_activate(moved);
        self.active = dst;
        self.remove_pane_if_empty(src);
        self.collect_events();
        true
    }

    /// Sends `id` to the other pane of a split.
    pub fn move_document_to_other_pane(&mut self, id: DocumentId) -> bool {
        if !self.is_split() {
            return false;
        }
        let Some(source) = self.pane_index_of_document(id) else {
            return false;
        };
        let source_id = self.panes[source].id();
        let target_id = self.panes[1 - source].id();
        self.transfer_document(id, source_id, target_id)
    }

    /// Reverses pane order; the active pane stays the same pane.
    pub fn swap_panes(&mut self) -> bool {
        if !self.is_split() {
            tracing::debug!("swap: not split");
            return false;
        }
        self.panes.swap(0, 1);
        self.active = 1 - self.active;
        self.collect_events();
        self.events.push(LayoutEvent::SplitStateChanged {
            split: true,
            direction: self.direction,
        });
        true
    }

    /// Closes a document. An emptied pane collapses the split; the last
    /// document of an unsplit container is replaced by a fresh empty one.
    pub fn close_document(&mut self, id: DocumentId) -> bool {
        let Some(index) = self.pane_index_of_document(id) else {
            tracing::debug!(document = %id, "close: document not owned");
            return false;
        };
        if self.panes[index].take_document(id).is_none() {
            return false;
        }
        if self.panes[index].is_empty() {
            if self.is_split() {
                self.remove_pane_if_empty(index);
            } else {
                self.panes[index].add_document(Document::new());
            }
        }
        self.collect_events();
        true
    }

    pub fn apply_theme(&mut self, theme: &ThemeManager) {
        let colors = theme.line_number_colors();
        for pane in &mut self.panes {
            pane.apply_colors(colors);
        }
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.show_line_numbers = show;
        for pane in &mut self.panes {
            pane.set_show_line_numbers(show);
        }
    }

    /// Events from the container and its panes, oldest first.
    pub fn drain_events(&mut self) -> Vec<LayoutEvent> {
        self.normalize();
        self.collect_events();
        std::mem::take(&mut self.events)
    }

    /// Repairs states reachable only through `pane_mut`: an emptied pane.
    fn normalize(&mut self) {
        if let Some(index) = self.panes.iter().position(Pane::is_empty) {
            if self.is_split() {
                self.remove_pane_if_empty(index);
            } else {
                self.panes[index].add_document(Document::new());
            }
        }
    }

    fn remove_pane_if_empty(&mut self, index: usize) {
        if !self.is_split() || !self.panes[index].is_empty() {
            return;
        }
        self.collect_events();
        let pane = self.panes.remove(index);
        self.active = 0;
        self.events.push(LayoutEvent::SplitStateChanged {
            split: false,
            direction: self.direction,
        });
        tracing::info!(pane = %pane.id(), "empty pane removed");
    }

    fn collect_events(&mut self) {
        for pane in &mut self.panes {
            self.events.extend(pane.drain_events());
        }
    }

    fn pane_index(&self, id: PaneId) -> Option<usize> {
        self.panes.iter().position(|p| p.id() == id)
    }

    fn pane_index_of_document(&self, id: DocumentId) -> Option<usize> {
        self.panes.iter().position(|p| p.contains(id))
    }

    fn owning_pane_mut(&mut self, id: DocumentId) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|p| p.contains(id))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/split.rs"]
mod tests;
