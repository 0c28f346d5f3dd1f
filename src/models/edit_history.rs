//! Undo history as a DAG of edits.
//!
//! - every op has a unique id and a parent pointer
//! - HEAD is the current position; undo moves to the parent, redo to a child
//! - editing after an undo starts a new branch, nothing is thrown away
//! - the saved marker remembers which position was last written to disk
//!
//! Cleanliness is decided by position, not content: typing "a" and deleting it
//! again leaves HEAD on a new op, so the document stays dirty.

use super::edit_op::{EditOp, OpId};
use ropey::Rope;
use rustc_hash::FxHashMap;

pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 100;

#[derive(Clone, Debug)]
pub struct EditHistoryConfig {
    pub checkpoint_interval: usize,
}

impl Default for EditHistoryConfig {
    fn default() -> Self {
        Self {
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
        }
    }
}

/// Result of moving HEAD: the rope at the new position and where the cursor goes.
#[derive(Debug)]
pub struct HistoryStep {
    pub rope: Rope,
    pub cursor: (usize, usize),
}

pub struct EditHistory {
    /// Content at the root position (document creation or last reload).
    base_snapshot: Rope,
    ops: FxHashMap<OpId, EditOp>,
    head: OpId,
    children: FxHashMap<OpId, Vec<OpId>>,
    /// Child that redo follows from a given node; set when undo leaves it.
    redo_target: FxHashMap<OpId, OpId>,
    checkpoints: FxHashMap<OpId, Rope>,
    saved: OpId,
    config: EditHistoryConfig,
    op_count: usize,
}

impl EditHistory {
    pub fn new(base_snapshot: Rope) -> Self {
        Self {
            base_snapshot,
            ops: FxHashMap::default(),
            head: OpId::root(),
            children: FxHashMap::default(),
            redo_target: FxHashMap::default(),
            checkpoints: FxHashMap::default(),
            saved: OpId::root(),
            config: EditHistoryConfig::default(),
            op_count: 0,
        }
    }

    pub fn with_config(mut self, config: EditHistoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Records an op applied on top of HEAD. `current_rope` is the content after it.
    pub fn push(&mut self, op: EditOp, current_rope: &Rope) {
        let op_id = op.id;
        self.children.entry(op.parent).or_default().push(op_id);
        self.redo_target.insert(op.parent, op_id);
        self.ops.insert(op_id, op);
        self.head = op_id;
        self.op_count += 1;

        let interval = self.config.checkpoint_interval.max(1);
        if self.op_count % interval == 0 {
            self.checkpoints.insert(op_id, current_rope.clone());
        }
    }

    pub fn undo(&mut self, current_rope: &Rope) -> Option<HistoryStep> {
        if self.head.is_root() {
            return None;
        }

        let op = self.ops.get(&self.head)?;
        let mut rope = current_rope.clone();
        op.inverse().apply(&mut rope);
        let cursor = op.cursor_before();
        let parent = op.parent;

        self.redo_target.insert(parent, self.head);
        self.head = parent;
        Some(HistoryStep { rope, cursor })
    }

    pub fn redo(&mut self, current_rope: &Rope) -> Option<HistoryStep> {
        let next_id = self.next_redo()?;
        let op = self.ops.get(&next_id)?;
        let mut rope = current_rope.clone();
        op.apply(&mut rope);
        let cursor = op.cursor_after();

        self.head = next_id;
        Some(HistoryStep { rope, cursor })
    }

    fn next_redo(&self) -> Option<OpId> {
        if let Some(id) = self.redo_target.get(&self.head) {
            return Some(*id);
        }
        self.children.get(&self.head)?.last().copied()
    }

    pub fn head(&self) -> OpId {
        self.head
    }

    pub fn can_undo(&self) -> bool {
        !self.head.is_root()
    }

    pub fn can_redo(&self) -> bool {
        self.children.get(&self.head).is_some_and(|c| !c.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Position recorded by the last `mark_saved` (root for a fresh document).
    pub fn saved(&self) -> OpId {
        self.saved
    }

    pub fn mark_saved(&mut self) {
        self.saved = self.head;
    }

    /// Records `id` as the saved position, e.g. the head captured when an
    /// asynchronous write was started. Unknown ids are ignored.
    pub fn mark_saved_at(&mut self, id: OpId) -> bool {
        if !id.is_root() && !self.ops.contains_key(&id) {
            return false;
        }
        self.saved = id;
        true
    }

    pub fn is_at_saved(&self) -> bool {
        self.head == self.saved
    }

    pub fn children_of(&self, id: &OpId) -> Vec<OpId> {
        self.children.get(id).cloned().unwrap_or_default()
    }

    /// Jumps to any recorded position.
    pub fn checkout(&mut self, id: OpId) -> Option<HistoryStep> {
        if id.is_root() {
            self.head = id;
            return Some(HistoryStep {
                rope: self.base_snapshot.clone(),
                cursor: (0, 0),
            });
        }

        let cursor = self.ops.get(&id)?.cursor_after();
        let path = self.path_to(id);
        if let Some(&first) = path.first() {
            if let Some(parent) = self.ops.get(&first).map(|op| op.parent) {
                self.redo_target.insert(parent, first);
            }
        }
        for pair in path.windows(2) {
            self.redo_target.insert(pair[0], pair[1]);
        }

        self.head = id;
        Some(HistoryStep {
            rope: self.rebuild_rope_at(&path),
            cursor,
        })
    }

    /// Ops from HEAD back to the root, newest first.
    pub fn log(&self) -> Vec<&EditOp> {
        let mut result = Vec::new();
        let mut current = self.head;
        while let Some(op) = self.ops.get(&current) {
            result.push(op);
            current = op.parent;
        }
        result
    }

    /// Forgets every op and makes `current_rope` the new clean root.
    pub fn clear(&mut self, current_rope: &Rope) {
        self.base_snapshot = current_rope.clone();
        self.ops.clear();
        self.children.clear();
        self.redo_target.clear();
        self.checkpoints.clear();
        self.head = OpId::root();
        self.saved = OpId::root();
        self.op_count = 0;
    }

    fn path_to(&self, target: OpId) -> Vec<OpId> {
        let mut path = Vec::new();
        let mut current = target;
        while let Some(op) = self.ops.get(&current) {
            path.push(current);
            current = op.parent;
        }
        path.reverse();
        path
    }

    fn rebuild_rope_at(&self, path: &[OpId]) -> Rope {
        let (start, mut rope) = path
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, id)| self.checkpoints.get(id).map(|r| (i + 1, r.clone())))
            .unwrap_or_else(|| (0, self.base_snapshot.clone()));

        for id in &path[start..] {
            if let Some(op) = self.ops.get(id) {
                op.apply(&mut rope);
            }
        }
        rope
    }
}

impl std::fmt::Debug for EditHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditHistory")
            .field("head", &self.head)
            .field("saved", &self.saved)
            .field("ops", &self.ops.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_history.rs"]
mod tests;
