use std::path::{Path, PathBuf};

use crate::kernel::editor::{Document, DocumentId};
use crate::kernel::state::Notification;
use crate::kernel::Effect;
use crate::models::OpId;

use super::{DispatchResult, Store};

impl Store {
    /// Writes the active document; `target` is the save-as destination.
    pub(super) fn save_active(&mut self, target: Option<PathBuf>) -> DispatchResult {
        let Some(document) = self.state.layout.active_document() else {
            return DispatchResult::unchanged();
        };
        let Some(path) = target.or_else(|| document.file_path().map(Path::to_path_buf)) else {
            let message = format!("{} has no file path; use saveas <path>", document.title());
            self.state.notify(Notification::error(message));
            return DispatchResult::changed(true);
        };

        DispatchResult::effect(Effect::WriteFile {
            document: document.id(),
            path,
            content: document.rope().clone(),
            version: document.history().head(),
        })
    }

    pub(super) fn on_file_loaded(&mut self, path: PathBuf, content: &str, new_tab: bool) -> DispatchResult {
        let layout = &mut self.state.layout;

        if let Some(existing) = layout.find_by_path(&path) {
            tracing::debug!(path = %path.display(), "file already open");
            return DispatchResult::changed(layout.activate_document(existing));
        }

        let document = Document::from_file(path.clone(), content);
        let pristine = layout
            .active_document()
            .filter(|d| d.is_pristine())
            .map(Document::id);

        match pristine {
            // An untouched untitled tab is replaced in place.
            Some(pristine) if !new_tab => {
                let pane = layout.active_pane_mut();
                let index = pane.index_of(pristine).unwrap_or(pane.document_count());
                let id = pane.insert_document(index, document);
                pane.activate_document(id);
                pane.remove_document(pristine);
            }
            _ => {
                layout.add_document(document);
            }
        }

        tracing::info!(path = %path.display(), new_tab, "file opened");
        DispatchResult::changed(true)
    }

    pub(super) fn on_file_load_failed(&mut self, path: &Path, error: &str) -> DispatchResult {
        tracing::warn!(path = %path.display(), error, "file load failed");
        self.state.notify(Notification::error(format!(
            "cannot open {}: {}",
            path.display(),
            error
        )));
        DispatchResult::changed(true)
    }

    pub(super) fn on_saved(
        &mut self,
        document: DocumentId,
        path: PathBuf,
        version: OpId,
        success: bool,
        error: Option<String>,
    ) -> DispatchResult {
        if !success {
            let error = error.unwrap_or_else(|| "unknown error".to_string());
            tracing::warn!(document = %document, path = %path.display(), %error, "save failed");
            self.state.notify(Notification::error(format!(
                "cannot save {}: {}",
                path.display(),
                error
            )));
            return DispatchResult::changed(true);
        }

        let layout = &mut self.state.layout;
        let Some(same_path) = layout
            .document(document)
            .map(|d| d.file_path() == Some(path.as_path()))
        else {
            tracing::debug!(document = %document, "saved document is no longer open");
            return DispatchResult::unchanged();
        };
        if !same_path {
            layout.set_document_path(document, path.clone());
        }
        layout.mark_saved_at(document, version);

        tracing::info!(document = %document, path = %path.display(), "saved");
        DispatchResult::changed(true)
    }
}
