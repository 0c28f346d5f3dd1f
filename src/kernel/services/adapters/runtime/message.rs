use crate::kernel::editor::DocumentId;
use crate::kernel::services::ports::{DirEntryInfo, Settings};
use crate::kernel::Action;
use crate::models::OpId;
use std::path::PathBuf;

/// Completion of a background operation, sent from the runtime to the UI thread.
#[derive(Debug)]
pub enum AppMessage {
    FileLoaded {
        path: PathBuf,
        content: String,
        new_tab: bool,
    },
    FileError {
        path: PathBuf,
        error: String,
    },
    FileSaved {
        document: DocumentId,
        path: PathBuf,
        version: OpId,
        result: Result<(), String>,
    },
    FolderOpened {
        root: PathBuf,
        entries: Vec<DirEntryInfo>,
    },
    FolderError {
        path: PathBuf,
        error: String,
    },
    DirLoaded {
        path: PathBuf,
        entries: Vec<DirEntryInfo>,
    },
    DirLoadError {
        path: PathBuf,
        error: String,
    },
    SettingsLoaded(Settings),
}

impl From<AppMessage> for Action {
    fn from(message: AppMessage) -> Self {
        match message {
            AppMessage::FileLoaded {
                path,
                content,
                new_tab,
            } => Action::FileLoaded {
                path,
                content,
                new_tab,
            },
            AppMessage::FileError { path, error } => Action::FileLoadFailed { path, error },
            AppMessage::FileSaved {
                document,
                path,
                version,
                result,
            } => Action::Saved {
                document,
                path,
                version,
                success: result.is_ok(),
                error: result.err(),
            },
            AppMessage::FolderOpened { root, entries } => Action::FolderOpened { root, entries },
            AppMessage::FolderError { path, error } => Action::FolderOpenFailed { path, error },
            AppMessage::DirLoaded { path, entries } => Action::DirLoaded { path, entries },
            AppMessage::DirLoadError { path, error } => Action::DirLoadFailed { path, error },
            AppMessage::SettingsLoaded(settings) => Action::SettingsLoaded(settings),
        }
    }
}
