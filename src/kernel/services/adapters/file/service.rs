//! 文件服务：管理多个 FileProvider
//!
//! 根据 URI scheme 选择对应的 Provider

use super::local::LocalFileProvider;
use crate::kernel::services::ports::file::{
    DirEntry, DirEntryInfo, FileError, FileProvider, Result,
};
use crate::models::should_ignore;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

pub struct FileService {
    providers: FxHashMap<String, Box<dyn FileProvider>>,
    default_scheme: String,
}

impl FileService {
    pub fn new() -> Self {
        let mut service = Self {
            providers: FxHashMap::default(),
            default_scheme: "file".to_string(),
        };
        service.register_provider(Box::new(LocalFileProvider::new()));
        service
    }

    pub fn register_provider(&mut self, provider: Box<dyn FileProvider>) {
        let scheme = provider.scheme().to_string();
        self.providers.insert(scheme, provider);
    }

    pub fn set_default_scheme(&mut self, scheme: &str) {
        self.default_scheme = scheme.to_string();
    }

    fn get_provider(&self, scheme: &str) -> Result<&dyn FileProvider> {
        self.providers
            .get(scheme)
            .map(|p| p.as_ref())
            .ok_or_else(|| FileError::ProviderNotFound(scheme.to_string()))
    }

    fn default_provider(&self) -> Result<&dyn FileProvider> {
        self.get_provider(&self.default_scheme)
    }

    pub fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        self.default_provider()?.read_dir(path)
    }

    /// Listing for the explorer: ignored names dropped.
    pub fn list_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>> {
        Ok(self
            .read_dir(path)?
            .into_iter()
            .filter(|e| !should_ignore(&e.name))
            .map(|e| DirEntryInfo {
                name: e.name,
                is_dir: e.is_dir,
            })
            .collect())
    }

    /// Canonical root plus its first level. Fails for anything but a directory.
    pub fn open_folder(&self, path: &Path) -> Result<(PathBuf, Vec<DirEntryInfo>)> {
        let provider = self.default_provider()?;
        if !provider.exists(path) {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        if !provider.is_dir(path) {
            return Err(FileError::NotADirectory(path.to_path_buf()));
        }
        let root = provider.canonicalize(path)?;
        let entries = self.list_dir(&root)?;
        Ok((root, entries))
    }

    pub fn read_file(&self, path: &Path) -> Result<String> {
        self.default_provider()?.read_file(path)
    }

    pub fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        self.default_provider()?.write_file(path, content)
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.default_provider()
            .map(|p| p.exists(path))
            .unwrap_or(false)
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.default_provider()
            .map(|p| p.is_dir(path))
            .unwrap_or(false)
    }

    pub fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.default_provider()?.canonicalize(path)
    }

    pub fn has_provider(&self, scheme: &str) -> bool {
        self.providers.contains_key(scheme)
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}
