use super::message::AppMessage;
use crate::kernel::editor::DocumentId;
use crate::kernel::services::adapters::file::FileService;
use crate::kernel::services::adapters::settings::load_settings;
use crate::kernel::services::ports::DirEntryInfo;
use crate::kernel::Effect;
use crate::models::{should_ignore, OpId};
use ropey::Rope;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    files: Arc<FileService>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            files: Arc::new(FileService::new()),
        })
    }

    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::LoadFile { path, new_tab } => self.load_file(path, new_tab),
            Effect::LoadDir(path) => self.load_dir(path),
            Effect::OpenFolder(path) => self.open_folder(path),
            Effect::WriteFile {
                document,
                path,
                content,
                version,
            } => self.write_file(document, path, version, content),
            Effect::ReloadSettings => self.reload_settings(),
        }
    }

    pub fn load_dir(&self, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match tokio::fs::read_dir(&path).await {
                Ok(mut entries) => {
                    let mut result = Vec::new();
                    loop {
                        let entry = match entries.next_entry().await {
                            Ok(Some(entry)) => entry,
                            Ok(None) => break,
                            Err(e) => {
                                let _ = tx.send(AppMessage::DirLoadError {
                                    path,
                                    error: e.to_string(),
                                });
                                return;
                            }
                        };

                        let name = entry.file_name().to_string_lossy().to_string();
                        if should_ignore(&name) {
                            continue;
                        }

                        if let Ok(file_type) = entry.file_type().await {
                            result.push(DirEntryInfo {
                                name,
                                is_dir: file_type.is_dir(),
                            });
                        }
                    }
                    let _ = tx.send(AppMessage::DirLoaded {
                        path,
                        entries: result,
                    });
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::DirLoadError {
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    pub fn open_folder(&self, path: PathBuf) {
        let tx = self.tx.clone();
        let files = Arc::clone(&self.files);
        self.runtime.spawn(async move {
            let path_for_work = path.clone();
            let result =
                tokio::task::spawn_blocking(move || files.open_folder(&path_for_work)).await;

            let message = match result {
                Ok(Ok((root, entries))) => AppMessage::FolderOpened { root, entries },
                Ok(Err(e)) => AppMessage::FolderError {
                    path,
                    error: e.to_string(),
                },
                Err(e) => AppMessage::FolderError {
                    path,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(message);
        });
    }

    pub fn load_file(&self, path: PathBuf, new_tab: bool) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(content) => {
                    let _ = tx.send(AppMessage::FileLoaded {
                        path,
                        content,
                        new_tab,
                    });
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::FileError {
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    pub fn write_file(&self, document: DocumentId, path: PathBuf, version: OpId, rope: Rope) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let path_for_write = path.clone();
            let result =
                tokio::task::spawn_blocking(move || write_rope_to_path(&path_for_write, &rope))
                    .await;

            let result = match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(e.to_string()),
            };

            let _ = tx.send(AppMessage::FileSaved {
                document,
                path,
                version,
                result,
            });
        });
    }

    /// Falls back to defaults when the settings file is missing or malformed.
    pub fn reload_settings(&self) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let settings = tokio::task::spawn_blocking(load_settings)
                .await
                .ok()
                .flatten()
                .unwrap_or_default();
            let _ = tx.send(AppMessage::SettingsLoaded(settings));
        });
    }
}

fn write_rope_to_path(path: &Path, rope: &Rope) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    for chunk in rope.chunks() {
        writer.write_all(chunk.as_bytes())?;
    }
    writer.flush()
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime.rs"]
mod tests;
