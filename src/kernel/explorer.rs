//! Sidebar: the folder tree plus the collapsible panel holding it.

use crate::kernel::services::ports::DirEntryInfo;
use crate::kernel::Effect;
use crate::models::{should_ignore, FileTree, FileTreeRow, LoadState, NodeId};
use rustc_hash::FxHashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const SIDEBAR_MIN_WIDTH: u16 = 150;
pub const SIDEBAR_MAX_WIDTH: u16 = 400;
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 200;
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 16;

pub struct ExplorerState {
    tree: Option<FileTree>,
    rows: Vec<FileTreeRow>,
    index_by_id: FxHashMap<NodeId, usize>,
    collapsed: bool,
    expanded_width: u16,
}

impl std::fmt::Debug for ExplorerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerState")
            .field("root", &self.root_path())
            .field("rows_len", &self.rows.len())
            .field("collapsed", &self.collapsed)
            .field("width", &self.width())
            .finish()
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerState {
    pub fn new() -> Self {
        Self {
            tree: None,
            rows: Vec::new(),
            index_by_id: FxHashMap::default(),
            collapsed: false,
            expanded_width: SIDEBAR_DEFAULT_WIDTH,
        }
    }

    pub fn root_path(&self) -> Option<&Path> {
        self.tree.as_ref().map(FileTree::absolute_root)
    }

    pub fn has_root(&self) -> bool {
        self.tree.is_some()
    }

    pub fn rows(&self) -> &[FileTreeRow] {
        &self.rows
    }

    /// Installs `root` with its first level already listed.
    pub fn set_root(&mut self, root: PathBuf, entries: Vec<DirEntryInfo>) -> bool {
        let name = root
            .file_name()
            .unwrap_or(root.as_os_str())
            .to_os_string();
        let mut tree = FileTree::new_with_root(name, root);
        let root_id = tree.root();
        if tree.replace_children(root_id, to_children(entries)).is_err() {
            return false;
        }
        self.tree = Some(tree);
        self.refresh_rows();
        true
    }

    pub fn close_folder(&mut self) -> bool {
        if self.tree.take().is_none() {
            return false;
        }
        self.refresh_rows();
        true
    }

    /// Reload the root listing; `None` without an open folder.
    pub fn refresh(&mut self) -> Option<Effect> {
        let tree = self.tree.as_mut()?;
        let root = tree.root();
        tree.set_load_state(root, LoadState::Loading);
        Some(Effect::LoadDir(tree.absolute_root().to_path_buf()))
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.tree.as_ref().and_then(FileTree::selected)
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selected()
            .and_then(|id| self.index_by_id.get(&id).copied())
    }

    pub fn select_row(&mut self, row: usize) -> bool {
        let Some(node_id) = self.rows.get(row).map(|r| r.id) else {
            return false;
        };
        let Some(tree) = self.tree.as_mut() else {
            return false;
        };
        let prev = tree.selected();
        tree.set_selected(Some(node_id));
        prev != Some(node_id)
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }
        let next = match self.selected_row() {
            Some(current) => current
                .saturating_add_signed(delta)
                .min(self.rows.len() - 1),
            None if delta < 0 => self.rows.len() - 1,
            None => 0,
        };
        self.select_row(next)
    }

    /// Directories toggle (loading lazily); files become open requests.
    pub fn activate_selected(&mut self, new_tab: bool) -> (bool, Vec<Effect>) {
        let Some(id) = self.selected() else {
            return (false, Vec::new());
        };
        let Some(tree) = self.tree.as_mut() else {
            return (false, Vec::new());
        };

        if tree.is_dir(id) {
            return self.toggle_dir(id);
        }

        match tree.full_path(id) {
            Some(path) => (false, vec![Effect::LoadFile { path, new_tab }]),
            None => (false, Vec::new()),
        }
    }

    pub fn collapse_selected(&mut self) -> bool {
        let Some(id) = self.selected() else {
            return false;
        };
        let Some(tree) = self.tree.as_mut() else {
            return false;
        };
        if tree.is_dir(id) && tree.is_expanded(id) {
            tree.collapse(id);
            self.refresh_rows();
            return true;
        }
        false
    }

    pub fn apply_dir_loaded(&mut self, path: &Path, entries: Vec<DirEntryInfo>) -> bool {
        let Some(tree) = self.tree.as_mut() else {
            return false;
        };
        let Some(node_id) = tree.find_node_by_path(path) else {
            return false;
        };
        if tree.replace_children(node_id, to_children(entries)).is_err() {
            return false;
        }
        self.refresh_rows();
        true
    }

    pub fn apply_dir_load_error(&mut self, path: &Path) -> bool {
        let Some(tree) = self.tree.as_mut() else {
            return false;
        };
        let Some(node_id) = tree.find_node_by_path(path) else {
            return false;
        };
        tree.set_load_state(node_id, LoadState::NotLoaded);
        tree.collapse(node_id);
        self.refresh_rows();
        true
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn set_collapsed(&mut self, collapsed: bool) -> bool {
        if self.collapsed == collapsed {
            return false;
        }
        self.collapsed = collapsed;
        true
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        self.set_collapsed(!self.collapsed)
    }

    /// Fixed while collapsed; otherwise the remembered expanded width.
    pub fn width(&self) -> u16 {
        if self.collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            self.expanded_width
        }
    }

    pub fn set_width(&mut self, width: u16) -> bool {
        let width = width.clamp(SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH);
        if self.expanded_width == width {
            return false;
        }
        self.expanded_width = width;
        !self.collapsed
    }

    fn toggle_dir(&mut self, id: NodeId) -> (bool, Vec<Effect>) {
        let Some(tree) = self.tree.as_mut() else {
            return (false, Vec::new());
        };

        if tree.is_expanded(id) {
            tree.collapse(id);
            self.refresh_rows();
            return (true, Vec::new());
        }

        match tree.load_state(id) {
            Some(LoadState::NotLoaded) => {
                tree.set_load_state(id, LoadState::Loading);
                tree.expand(id);
                let effects = tree.full_path(id).map(Effect::LoadDir).into_iter().collect();
                self.refresh_rows();
                (true, effects)
            }
            Some(LoadState::Loading) => (false, Vec::new()),
            Some(LoadState::Loaded) | None => {
                tree.expand(id);
                self.refresh_rows();
                (true, Vec::new())
            }
        }
    }

    fn refresh_rows(&mut self) {
        self.rows = self
            .tree
            .as_ref()
            .map(FileTree::flatten_for_view)
            .unwrap_or_default();

        self.index_by_id.clear();
        self.index_by_id.reserve(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            self.index_by_id.insert(row.id, i);
        }
    }
}

fn to_children(entries: Vec<DirEntryInfo>) -> Vec<(OsString, bool)> {
    entries
        .into_iter()
        .filter(|e| !should_ignore(&e.name))
        .map(|e| (OsString::from(e.name), e.is_dir))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/explorer.rs"]
mod tests;
