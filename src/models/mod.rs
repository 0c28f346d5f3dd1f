//! 数据模型层

pub mod edit_history;
pub mod edit_op;
pub mod file_tree;
pub mod text_buffer;

pub use edit_history::{EditHistory, EditHistoryConfig, HistoryStep};
pub use edit_op::{EditOp, OpId, OpKind};
pub use file_tree::{
    build_file_tree, should_ignore, FileTree, FileTreeError, FileTreeRow, LoadState, NodeId,
    NodeKind,
};
pub use text_buffer::{slice_to_cow, TextBuffer};
