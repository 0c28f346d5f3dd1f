use super::*;
use crate::kernel::editor::{Document, SplitSide};
use crate::kernel::services::ports::{DirEntryInfo, Settings};
use crate::kernel::state::NotificationLevel;
use crate::kernel::theme::{Theme, ThemeManager};
use std::path::{Path, PathBuf};

fn new_store() -> Store {
    Store::new(AppState::default())
}

fn run(store: &mut Store, command: Command) -> DispatchResult {
    store.dispatch(Action::RunCommand(command))
}

fn load(store: &mut Store, path: &str, content: &str, new_tab: bool) -> DispatchResult {
    store.dispatch(Action::FileLoaded {
        path: PathBuf::from(path),
        content: content.to_string(),
        new_tab,
    })
}

fn active(store: &Store) -> &Document {
    store.state().layout.active_document().unwrap()
}

#[test]
fn test_open_command_requests_load() {
    let mut store = new_store();
    let result = run(&mut store, Command::OpenFile(PathBuf::from("/ws/a.rs")));
    assert!(!result.state_changed);
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::LoadFile { path, new_tab: false }] if path == Path::new("/ws/a.rs")
    ));
}

#[test]
fn test_loaded_file_replaces_pristine_untitled() {
    let mut store = new_store();
    let untitled = active(&store).id();

    let result = load(&mut store, "/ws/a.rs", "fn main() {}", false);
    assert!(result.state_changed);
    assert_eq!(store.state().layout.document_count(), 1);
    assert_ne!(active(&store).id(), untitled);
    assert_eq!(active(&store).content(), "fn main() {}");
    assert_eq!(active(&store).title(), "a.rs");
}

#[test]
fn test_loaded_file_keeps_edited_untitled() {
    let mut store = new_store();
    run(&mut store, Command::InsertText("draft".into()));

    load(&mut store, "/ws/a.rs", "x", false);
    assert_eq!(store.state().layout.document_count(), 2);
    assert_eq!(active(&store).title(), "a.rs");
}

#[test]
fn test_open_dedupes_by_path() {
    let mut store = new_store();
    load(&mut store, "/ws/a.rs", "a", false);
    let a = active(&store).id();
    load(&mut store, "/ws/b.rs", "b", true);
    assert_eq!(store.state().layout.document_count(), 2);

    load(&mut store, "/ws/a.rs", "changed on disk", true);
    assert_eq!(store.state().layout.document_count(), 2);
    assert_eq!(active(&store).id(), a);
    assert_eq!(active(&store).content(), "a");
}

#[test]
fn test_failed_load_notifies_without_document() {
    let mut store = new_store();
    let before = store.state().layout.document_count();

    let result = store.dispatch(Action::FileLoadFailed {
        path: PathBuf::from("/missing.txt"),
        error: "No such file or directory".to_string(),
    });
    assert!(result.state_changed);
    assert_eq!(store.state().layout.document_count(), before);
    let note = store.state().latest_notification().unwrap();
    assert_eq!(note.level, NotificationLevel::Error);
    assert!(note.message.contains("/missing.txt"));

    assert!(run(&mut store, Command::DismissNotification).state_changed);
    assert!(store.state().notifications.is_empty());
}

#[test]
fn test_typing_marks_tab_modified_and_undo_clears() {
    let mut store = new_store();
    load(&mut store, "/ws/a.rs", "", false);

    let result = run(&mut store, Command::InsertText("hi".into()));
    assert!(result.state_changed);
    assert!(active(&store).is_modified());
    assert!(result.events.iter().any(|e| matches!(
        e,
        LayoutEvent::TabTitleChanged { modified: true, .. }
    )));

    run(&mut store, Command::Undo);
    assert!(!active(&store).is_modified());
    run(&mut store, Command::Redo);
    assert!(active(&store).is_modified());
}

#[test]
fn test_insert_tab_uses_indent_unit() {
    let mut store = new_store();
    store.state_mut().config.tab_size = 2;
    run(&mut store, Command::InsertTab);
    assert_eq!(active(&store).content(), "  ");
}

#[test]
fn test_save_without_path_notifies() {
    let mut store = new_store();
    run(&mut store, Command::InsertText("x".into()));
    let result = run(&mut store, Command::Save);
    assert!(result.effects.is_empty());
    assert!(store.state().latest_notification().is_some());
}

#[test]
fn test_save_success_clears_dirty() {
    let mut store = new_store();
    load(&mut store, "/ws/a.rs", "", false);
    run(&mut store, Command::InsertText("x".into()));

    let result = run(&mut store, Command::Save);
    let Some(Effect::WriteFile {
        document,
        path,
        content,
        version,
    }) = result.effects.into_iter().next()
    else {
        panic!("expected a write effect");
    };
    assert_eq!(path, PathBuf::from("/ws/a.rs"));
    assert_eq!(content.to_string(), "x");
    assert!(active(&store).is_modified());

    store.dispatch(Action::Saved {
        document,
        path,
        version,
        success: true,
        error: None,
    });
    assert!(!active(&store).is_modified());
    assert!(!store.state().layout.active_pane().tab_strip().is_modified(0));
}

#[test]
fn test_failed_save_keeps_dirty() {
    let mut store = new_store();
    load(&mut store, "/ws/a.rs", "", false);
    run(&mut store, Command::InsertText("x".into()));
    let doc = active(&store).id();
    let version = active(&store).history().head();

    store.dispatch(Action::Saved {
        document: doc,
        path: PathBuf::from("/ws/a.rs"),
        version,
        success: false,
        error: Some("permission denied".into()),
    });
    assert!(active(&store).is_modified());
    assert!(store
        .state()
        .latest_notification()
        .is_some_and(|n| n.message.contains("permission denied")));
}

#[test]
fn test_edit_during_save_stays_dirty() {
    let mut store = new_store();
    load(&mut store, "/ws/a.rs", "", false);
    run(&mut store, Command::InsertText("x".into()));
    let result = run(&mut store, Command::Save);
    let Some(Effect::WriteFile {
        document,
        path,
        version,
        ..
    }) = result.effects.into_iter().next()
    else {
        panic!("expected a write effect");
    };

    run(&mut store, Command::InsertText("y".into()));
    store.dispatch(Action::Saved {
        document,
        path,
        version,
        success: true,
        error: None,
    });
    assert!(active(&store).is_modified());
}

#[test]
fn test_save_as_sets_path_on_success() {
    let mut store = new_store();
    run(&mut store, Command::InsertText("notes".into()));
    let result = run(&mut store, Command::SaveAs(PathBuf::from("/ws/notes.md")));
    let Some(Effect::WriteFile {
        document,
        path,
        version,
        ..
    }) = result.effects.into_iter().next()
    else {
        panic!("expected a write effect");
    };
    assert_eq!(active(&store).title(), "Untitled");

    store.dispatch(Action::Saved {
        document,
        path,
        version,
        success: true,
        error: None,
    });
    assert_eq!(active(&store).title(), "notes.md");
    assert_eq!(
        store.state().layout.active_pane().tab_strip().title(0),
        Some("notes.md")
    );
}

#[test]
fn test_split_merge_commands() {
    let mut store = new_store();
    assert!(!run(&mut store, Command::Split(SplitSide::Right)).state_changed);

    run(&mut store, Command::NewFile);
    let moved = active(&store).id();
    let result = run(&mut store, Command::Split(SplitSide::Right));
    assert!(result.state_changed);
    assert!(store.state().layout.is_split());
    assert_eq!(active(&store).id(), moved);
    assert!(result
        .events
        .iter()
        .any(|e| matches!(e, LayoutEvent::SplitStateChanged { split: true, .. })));

    assert!(run(&mut store, Command::SwapPanes).state_changed);
    assert!(run(&mut store, Command::MoveToOtherPane).state_changed);
    assert!(!store.state().layout.is_split());
    assert_eq!(store.state().layout.document_count(), 2);
}

#[test]
fn test_close_last_tab_leaves_fresh_document() {
    let mut store = new_store();
    let only = active(&store).id();
    assert!(run(&mut store, Command::CloseTab).state_changed);
    assert_eq!(store.state().layout.document_count(), 1);
    assert_ne!(active(&store).id(), only);
}

#[test]
fn test_theme_commands_refresh_panes() {
    let mut store = new_store();
    assert!(run(&mut store, Command::SetTheme(Theme::Light)).state_changed);
    assert!(!run(&mut store, Command::SetTheme(Theme::Light)).state_changed);
    let colors = store.state().theme.line_number_colors();
    assert_eq!(
        store.state().layout.active_pane().surface().line_number_colors(),
        colors
    );

    run(&mut store, Command::ToggleTheme);
    assert_eq!(store.state().theme.current_theme(), Theme::Dark);
    assert_eq!(
        store.state().layout.active_pane().surface().line_number_colors(),
        ThemeManager::new(Theme::Dark).line_number_colors()
    );
}

#[test]
fn test_open_folder_flow() {
    let mut store = new_store();
    let result = run(&mut store, Command::OpenFolder(PathBuf::from("/ws")));
    assert!(matches!(result.effects.as_slice(), [Effect::OpenFolder(_)]));

    store.dispatch(Action::FolderOpened {
        root: PathBuf::from("/ws"),
        entries: vec![DirEntryInfo {
            name: "a.rs".into(),
            is_dir: false,
        }],
    });
    assert_eq!(store.state().explorer.root_path(), Some(Path::new("/ws")));

    run(&mut store, Command::ExplorerSelect(0));
    let result = run(&mut store, Command::ExplorerActivate { new_tab: false });
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::LoadFile { path, .. }] if path == Path::new("/ws/a.rs")
    ));

    assert!(run(&mut store, Command::CloseFolder).state_changed);
    assert!(store.state().explorer.root_path().is_none());
}

#[test]
fn test_open_folder_failure_notifies() {
    let mut store = new_store();
    store.dispatch(Action::FolderOpenFailed {
        path: PathBuf::from("/ws/file.txt"),
        error: "not a directory".into(),
    });
    assert!(store.state().explorer.root_path().is_none());
    assert!(store.state().latest_notification().is_some());
}

#[test]
fn test_settings_loaded_applies_theme_and_config() {
    let mut store = new_store();
    let mut settings = Settings::default();
    settings.theme.name = Some("light".into());
    settings.editor.show_line_numbers = false;

    store.dispatch(Action::SettingsLoaded(settings));
    assert_eq!(store.state().theme.current_theme(), Theme::Light);
    assert!(!store
        .state()
        .layout
        .active_pane()
        .surface()
        .show_line_numbers());
}

#[test]
fn test_quit_and_queries() {
    let mut store = new_store();
    assert!(!run(&mut store, Command::Status).state_changed);
    run(&mut store, Command::Quit);
    assert!(store.state().should_quit);
}
