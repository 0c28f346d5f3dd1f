use compact_str::CompactString;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one recorded edit. `OpId::root()` is the position before any edit.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpId(u64);

impl OpId {
    pub fn new() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn root() -> Self {
        Self(0)
    }

    pub fn is_root(&self) -> bool {
        self.0 == 0
    }
}

impl Default for OpId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpId({:x})", self.0)
    }
}

impl fmt::Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpKind {
    Insert {
        char_offset: usize,
        text: CompactString,
    },
    Delete {
        start: usize,
        end: usize,
        deleted: CompactString,
    },
}

#[derive(Clone, Debug)]
pub struct EditOp {
    pub id: OpId,
    pub parent: OpId,
    pub kind: OpKind,
    pub cursor_before: (usize, usize),
    pub cursor_after: (usize, usize),
}

impl EditOp {
    pub fn insert(
        parent: OpId,
        char_offset: usize,
        text: CompactString,
        cursor_before: (usize, usize),
        cursor_after: (usize, usize),
    ) -> Self {
        Self {
            id: OpId::new(),
            parent,
            kind: OpKind::Insert { char_offset, text },
            cursor_before,
            cursor_after,
        }
    }

    pub fn delete(
        parent: OpId,
        start: usize,
        end: usize,
        deleted: CompactString,
        cursor_before: (usize, usize),
        cursor_after: (usize, usize),
    ) -> Self {
        Self {
            id: OpId::new(),
            parent,
            kind: OpKind::Delete {
                start,
                end,
                deleted,
            },
            cursor_before,
            cursor_after,
        }
    }

    pub fn inverse(&self) -> OpKind {
        match &self.kind {
            OpKind::Insert { char_offset, text } => OpKind::Delete {
                start: *char_offset,
                end: char_offset + text.chars().count(),
                deleted: text.clone(),
            },
            OpKind::Delete { start, deleted, .. } => OpKind::Insert {
                char_offset: *start,
                text: deleted.clone(),
            },
        }
    }

    pub fn cursor_after(&self) -> (usize, usize) {
        self.cursor_after
    }

    pub fn cursor_before(&self) -> (usize, usize) {
        self.cursor_before
    }

    pub fn apply(&self, rope: &mut ropey::Rope) {
        self.kind.apply(rope);
    }
}

impl OpKind {
    pub fn apply(&self, rope: &mut ropey::Rope) {
        match self {
            OpKind::Insert { char_offset, text } => {
                rope.insert(*char_offset, text);
            }
            OpKind::Delete { start, end, .. } => {
                rope.remove(*start..*end);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_op.rs"]
mod tests;
