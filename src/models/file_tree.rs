//! Sidebar file tree: directories are loaded lazily, one level at a time.

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::{new_key_type, SlotMap};
use std::{
    collections::BTreeMap,
    ffi::OsString,
    fmt, io,
    path::{Path, PathBuf},
};

new_key_type! { pub struct NodeId; }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Dir,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
}

#[derive(Debug)]
pub enum FileTreeError {
    ParentNotDirectory,
    NameExists,
    InvalidNodeId,
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::ParentNotDirectory => write!(f, "parent is not a directory"),
            FileTreeError::NameExists => write!(f, "name already exists in parent"),
            FileTreeError::InvalidNodeId => write!(f, "invalid node id"),
        }
    }
}

impl std::error::Error for FileTreeError {}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    name: OsString,
    parent: Option<NodeId>,
    children: Option<BTreeMap<OsString, NodeId>>,
    load_state: LoadState,
}

impl Node {
    fn new_file(name: OsString, parent: Option<NodeId>) -> Self {
        Self {
            kind: NodeKind::File,
            name,
            parent,
            children: None,
            load_state: LoadState::Loaded,
        }
    }

    fn new_dir(name: OsString, parent: Option<NodeId>, load_state: LoadState) -> Self {
        Self {
            kind: NodeKind::Dir,
            name,
            parent,
            children: Some(BTreeMap::new()),
            load_state,
        }
    }
}

#[derive(Debug)]
pub struct FileTree {
    arena: SlotMap<NodeId, Node>,
    root: NodeId,
    expanded: FxHashSet<NodeId>,
    selected: Option<NodeId>,
    absolute_root: PathBuf,
    path_cache: FxHashMap<NodeId, PathBuf>,
}

#[derive(Debug, Clone)]
pub struct FileTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: OsString,
    pub is_dir: bool,
    pub is_expanded: bool,
    pub load_state: LoadState,
}

impl FileTree {
    pub fn new_with_root(root_name: OsString, absolute_root: PathBuf) -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Node::new_dir(root_name, None, LoadState::NotLoaded));

        let mut expanded = FxHashSet::default();
        expanded.insert(root);

        Self {
            arena,
            root,
            expanded,
            selected: None,
            absolute_root,
            path_cache: FxHashMap::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn absolute_root(&self) -> &Path {
        &self.absolute_root
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn set_selected(&mut self, id: Option<NodeId>) {
        self.selected = id.filter(|id| self.arena.contains_key(*id));
    }

    pub fn load_state(&self, id: NodeId) -> Option<LoadState> {
        self.arena.get(id).map(|n| n.load_state)
    }

    pub fn set_load_state(&mut self, id: NodeId, state: LoadState) {
        if let Some(node) = self.arena.get_mut(id) {
            node.load_state = state;
        }
    }

    pub fn insert_child(
        &mut self,
        parent: NodeId,
        name: OsString,
        kind: NodeKind,
    ) -> Result<NodeId, FileTreeError> {
        {
            let parent_node = self.arena.get(parent).ok_or(FileTreeError::InvalidNodeId)?;
            let children = parent_node
                .children
                .as_ref()
                .ok_or(FileTreeError::ParentNotDirectory)?;
            if children.contains_key(&name) {
                return Err(FileTreeError::NameExists);
            }
        }

        let node = match kind {
            NodeKind::File => Node::new_file(name.clone(), Some(parent)),
            NodeKind::Dir => Node::new_dir(name.clone(), Some(parent), LoadState::NotLoaded),
        };
        let id = self.arena.insert(node);

        self.arena
            .get_mut(parent)
            .and_then(|n| n.children.as_mut())
            .ok_or(FileTreeError::InvalidNodeId)?
            .insert(name, id);
        Ok(id)
    }

    /// Replaces the children of `dir` with a freshly read listing and marks it loaded.
    /// Children that survive keep their ids (and their own expanded state).
    pub fn replace_children(
        &mut self,
        dir: NodeId,
        entries: impl IntoIterator<Item = (OsString, bool)>,
    ) -> Result<(), FileTreeError> {
        let old = self
            .arena
            .get_mut(dir)
            .ok_or(FileTreeError::InvalidNodeId)?
            .children
            .replace(BTreeMap::new())
            .ok_or(FileTreeError::ParentNotDirectory)?;

        let mut keep: BTreeMap<OsString, NodeId> = BTreeMap::new();
        let mut drop: Vec<NodeId> = Vec::new();
        let mut fresh: Vec<(OsString, NodeKind)> = Vec::new();
        let mut wanted: BTreeMap<OsString, NodeKind> = BTreeMap::new();
        for (name, is_dir) in entries {
            let kind = if is_dir { NodeKind::Dir } else { NodeKind::File };
            wanted.insert(name, kind);
        }

        for (name, id) in old {
            match wanted.get(&name) {
                Some(kind) if self.arena.get(id).is_some_and(|n| n.kind == *kind) => {
                    keep.insert(name, id);
                }
                _ => drop.push(id),
            }
        }
        for (name, kind) in wanted {
            if !keep.contains_key(&name) {
                fresh.push((name, kind));
            }
        }

        for id in drop {
            self.remove_subtree(id);
        }
        if let Some(children) = self.arena.get_mut(dir).and_then(|n| n.children.as_mut()) {
            *children = keep;
        }
        for (name, kind) in fresh {
            self.insert_child(dir, name, kind)?;
        }

        self.set_load_state(dir, LoadState::Loaded);
        Ok(())
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            if let Some(node) = self.arena.remove(node_id) {
                if let Some(children) = node.children {
                    stack.extend(children.into_values());
                }
            }
            self.expanded.remove(&node_id);
            self.path_cache.remove(&node_id);
            if self.selected == Some(node_id) {
                self.selected = None;
            }
        }
    }

    pub fn full_path(&mut self, id: NodeId) -> Option<PathBuf> {
        if id == self.root {
            return Some(self.absolute_root.clone());
        }
        if let Some(cached) = self.path_cache.get(&id) {
            return Some(cached.clone());
        }

        let mut components = Vec::new();
        let mut current = id;
        loop {
            let node = self.arena.get(current)?;
            match node.parent {
                Some(parent) => {
                    components.push(node.name.clone());
                    current = parent;
                }
                None => break,
            }
        }

        let mut path = self.absolute_root.clone();
        for component in components.iter().rev() {
            path.push(component);
        }
        self.path_cache.insert(id, path.clone());
        Some(path)
    }

    pub fn find_node_by_path(&self, path: &Path) -> Option<NodeId> {
        let relative = path.strip_prefix(&self.absolute_root).ok()?;
        let mut current = self.root;
        for component in relative.components() {
            let children = self.arena.get(current)?.children.as_ref()?;
            current = *children.get(component.as_os_str())?;
        }
        Some(current)
    }

    pub fn toggle_expand(&mut self, id: NodeId) {
        if self.is_dir(id) && !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn expand(&mut self, id: NodeId) {
        if self.is_dir(id) {
            self.expanded.insert(id);
        }
    }

    pub fn collapse(&mut self, id: NodeId) {
        if id != self.root {
            self.expanded.remove(&id);
        }
    }

    pub fn get_name(&self, id: NodeId) -> Option<&OsString> {
        self.arena.get(id).map(|n| &n.name)
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some_and(|n| n.kind == NodeKind::Dir)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    /// Depth-first rows of every visible node, directories before files.
    pub fn flatten_for_view(&self) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = vec![(self.root, 0)];

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };
            if id != self.root {
                result.push(FileTreeRow {
                    id,
                    depth,
                    name: node.name.clone(),
                    is_dir: node.kind == NodeKind::Dir,
                    is_expanded: self.expanded.contains(&id),
                    load_state: node.load_state,
                });
            }

            if !self.expanded.contains(&id) {
                continue;
            }
            let Some(children) = &node.children else {
                continue;
            };

            let (dirs, files): (Vec<NodeId>, Vec<NodeId>) = children
                .values()
                .copied()
                .partition(|child| self.is_dir(*child));
            let child_depth = if id == self.root { 0 } else { depth + 1 };
            for child in files.into_iter().rev() {
                stack.push((child, child_depth));
            }
            for child in dirs.into_iter().rev() {
                stack.push((child, child_depth));
            }
        }

        result
    }
}

pub fn should_ignore(name: &str) -> bool {
    matches!(
        name,
        ".DS_Store"
            | ".Spotlight-V100"
            | ".Trashes"
            | ".fseventsd"
            | ".TemporaryItems"
            | "Thumbs.db"
            | "desktop.ini"
            | ".git"
            | "node_modules"
    )
}

/// Builds a tree rooted at `root_path` with its first level loaded.
pub fn build_file_tree(root_path: &Path) -> io::Result<FileTree> {
    let absolute_root = root_path
        .canonicalize()
        .unwrap_or_else(|_| root_path.to_path_buf());

    let root_name = absolute_root
        .file_name()
        .unwrap_or(absolute_root.as_os_str())
        .to_os_string();

    let mut tree = FileTree::new_with_root(root_name, absolute_root.clone());

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(&absolute_root)? {
        let entry = entry?;
        let name = entry.file_name();
        if should_ignore(&name.to_string_lossy()) {
            continue;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        entries.push((name, is_dir));
    }

    let root = tree.root();
    tree.replace_children(root, entries)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    Ok(tree)
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
