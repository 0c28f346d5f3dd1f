use crate::core::Command;

use super::editor::LayoutEvent;
use super::{Action, AppState, Effect};

mod explorer;
mod files;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    /// Layout changes in the order they happened.
    pub events: Vec<LayoutEvent>,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::changed(false)
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
            events: Vec::new(),
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: false,
            events: Vec::new(),
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let mut result = match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::FileLoaded {
                path,
                content,
                new_tab,
            } => self.on_file_loaded(path, &content, new_tab),
            Action::FileLoadFailed { path, error } => self.on_file_load_failed(&path, &error),
            Action::Saved {
                document,
                path,
                version,
                success,
                error,
            } => self.on_saved(document, path, version, success, error),
            Action::SettingsLoaded(settings) => {
                self.state.theme.apply_settings(&settings.theme);
                if let Some(theme) = settings
                    .theme
                    .name
                    .as_deref()
                    .and_then(super::theme::Theme::from_name)
                {
                    self.state.theme.apply_theme(theme);
                }
                self.state.config =
                    crate::kernel::services::ports::EditorConfig::from_settings(&settings.editor);
                self.state.layout.apply_theme(&self.state.theme);
                self.state
                    .layout
                    .set_show_line_numbers(self.state.config.show_line_numbers);
                DispatchResult::changed(true)
            }
            Action::DismissNotification => {
                DispatchResult::changed(self.state.notifications.pop().is_some())
            }
            other => self.reduce_explorer_action(other),
        };

        result.events.extend(self.state.layout.drain_events());
        result
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        let state = &mut self.state;
        let state_changed = match command {
            Command::Quit => {
                state.should_quit = true;
                true
            }
            Command::Tree | Command::Status | Command::Help => false,
            Command::ReloadSettings => return DispatchResult::effect(Effect::ReloadSettings),
            Command::DismissNotification => state.notifications.pop().is_some(),

            Command::NewFile => {
                state.layout.add_new_document();
                true
            }
            Command::OpenFile(path) => {
                return DispatchResult::effect(Effect::LoadFile {
                    path,
                    new_tab: false,
                })
            }
            Command::OpenFileInNewTab(path) => {
                return DispatchResult::effect(Effect::LoadFile {
                    path,
                    new_tab: true,
                })
            }
            Command::Save => return self.save_active(None),
            Command::SaveAs(path) => return self.save_active(Some(path)),

            Command::InsertText(text) => state.layout.active_pane_mut().insert_text(&text),
            Command::InsertNewline => state.layout.active_pane_mut().insert_text("\n"),
            Command::InsertTab => {
                let indent = state.config.indent_unit();
                state.layout.active_pane_mut().insert_text(&indent)
            }
            Command::DeleteBackward => state.layout.active_pane_mut().delete_backward(),
            Command::DeleteForward => state.layout.active_pane_mut().delete_forward(),
            Command::Undo => state.layout.active_pane_mut().undo(),
            Command::Redo => state.layout.active_pane_mut().redo(),

            Command::CloseTab => match state.layout.active_document().map(|d| d.id()) {
                Some(id) => {
                    if state.layout.document(id).is_some_and(|d| d.is_modified()) {
                        tracing::info!(document = %id, "closing document with unsaved changes");
                    }
                    state.layout.close_document(id)
                }
                None => false,
            },
            Command::NextTab => state.layout.active_pane_mut().next_tab(),
            Command::PrevTab => state.layout.active_pane_mut().prev_tab(),
            Command::SelectTab(index) => state.layout.active_pane_mut().set_active(index),
            Command::ReorderTab { from, to } => state.layout.active_pane_mut().reorder(from, to),

            Command::Split(side) => match state.layout.active_document().map(|d| d.id()) {
                Some(id) => state.layout.create_split(id, side, &state.theme),
                None => false,
            },
            Command::Merge => state.layout.merge_panes(),
            Command::SwapPanes => state.layout.swap_panes(),
            Command::MoveToOtherPane => match state.layout.active_document().map(|d| d.id()) {
                Some(id) => state.layout.move_document_to_other_pane(id),
                None => false,
            },
            Command::FocusNextPane => state.layout.focus_next_pane(),

            Command::SetTheme(theme) => {
                let changed = state.theme.current_theme() != theme;
                state.theme.apply_theme(theme);
                state.layout.apply_theme(&state.theme);
                changed
            }
            Command::ToggleTheme => {
                state.theme.toggle_theme();
                state.layout.apply_theme(&state.theme);
                true
            }
            Command::ToggleLineNumbers => {
                state.config.show_line_numbers = !state.config.show_line_numbers;
                state
                    .layout
                    .set_show_line_numbers(state.config.show_line_numbers);
                true
            }

            Command::OpenFolder(_)
            | Command::CloseFolder
            | Command::RefreshFolder
            | Command::ToggleSidebar
            | Command::SetSidebarWidth(_)
            | Command::ExplorerSelect(_)
            | Command::ExplorerActivate { .. }
            | Command::ExplorerCollapse => return self.dispatch_explorer_command(command),
        };

        DispatchResult::changed(state_changed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
