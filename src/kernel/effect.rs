use crate::kernel::editor::DocumentId;
use crate::models::OpId;
use ropey::Rope;
use std::path::PathBuf;

/// I/O requested by the store; executed by the runtime, answered with an `Action`.
#[derive(Debug, Clone)]
pub enum Effect {
    LoadFile {
        path: PathBuf,
        new_tab: bool,
    },
    LoadDir(PathBuf),
    OpenFolder(PathBuf),
    WriteFile {
        document: DocumentId,
        path: PathBuf,
        content: Rope,
        /// Undo position the content was taken at.
        version: OpId,
    },
    ReloadSettings,
}
