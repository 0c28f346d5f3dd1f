use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::editor::DocumentId;
use crate::kernel::services::ports::{DirEntryInfo, Settings};
use crate::models::OpId;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    FileLoaded {
        path: PathBuf,
        content: String,
        new_tab: bool,
    },
    FileLoadFailed {
        path: PathBuf,
        error: String,
    },
    Saved {
        document: DocumentId,
        path: PathBuf,
        version: OpId,
        success: bool,
        error: Option<String>,
    },
    FolderOpened {
        root: PathBuf,
        entries: Vec<DirEntryInfo>,
    },
    FolderOpenFailed {
        path: PathBuf,
        error: String,
    },
    DirLoaded {
        path: PathBuf,
        entries: Vec<DirEntryInfo>,
    },
    DirLoadFailed {
        path: PathBuf,
        error: String,
    },
    SettingsLoaded(Settings),
    DismissNotification,
}
