use crate::core::Command;
use crate::kernel::state::Notification;
use crate::kernel::{Action, Effect};

use super::DispatchResult;

impl super::Store {
    pub(super) fn dispatch_explorer_command(&mut self, command: Command) -> DispatchResult {
        let explorer = &mut self.state.explorer;
        match command {
            Command::OpenFolder(path) => DispatchResult::effect(Effect::OpenFolder(path)),
            Command::CloseFolder => DispatchResult::changed(explorer.close_folder()),
            Command::RefreshFolder => match explorer.refresh() {
                Some(effect) => DispatchResult::effect(effect),
                None => DispatchResult::unchanged(),
            },
            Command::ToggleSidebar => DispatchResult::changed(explorer.toggle_collapsed()),
            Command::SetSidebarWidth(width) => DispatchResult::changed(explorer.set_width(width)),
            Command::ExplorerSelect(row) => DispatchResult::changed(explorer.select_row(row)),
            Command::ExplorerActivate { new_tab } => {
                let (state_changed, effects) = explorer.activate_selected(new_tab);
                DispatchResult {
                    effects,
                    state_changed,
                    events: Vec::new(),
                }
            }
            Command::ExplorerCollapse => DispatchResult::changed(explorer.collapse_selected()),
            other => {
                tracing::debug!(command = other.name(), "not an explorer command");
                DispatchResult::unchanged()
            }
        }
    }

    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::FolderOpened { root, entries } => {
                tracing::info!(root = %root.display(), entries = entries.len(), "folder opened");
                DispatchResult::changed(self.state.explorer.set_root(root, entries))
            }
            Action::FolderOpenFailed { path, error } => {
                tracing::warn!(path = %path.display(), %error, "open folder failed");
                self.state.notify(Notification::error(format!(
                    "cannot open folder {}: {}",
                    path.display(),
                    error
                )));
                DispatchResult::changed(true)
            }
            Action::DirLoaded { path, entries } => {
                DispatchResult::changed(self.state.explorer.apply_dir_loaded(&path, entries))
            }
            Action::DirLoadFailed { path, error } => {
                tracing::warn!(path = %path.display(), %error, "load dir failed");
                self.state.explorer.apply_dir_load_error(&path);
                self.state.notify(Notification::error(format!(
                    "cannot list {}: {}",
                    path.display(),
                    error
                )));
                DispatchResult::changed(true)
            }
            _ => DispatchResult::unchanged(),
        }
    }
}
