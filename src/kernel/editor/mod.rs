//! Documents, panes and the split layout.

mod document;
mod event;
mod pane;
mod split;
mod surface;
mod tab_strip;
mod tracker;

pub use document::{Document, DocumentId, UNTITLED};
pub use event::LayoutEvent;
pub use pane::{Pane, PaneId};
pub use split::{SplitContainer, SplitDirection, SplitSide};
pub use surface::EditorSurface;
pub use tab_strip::{Tab, TabStrip, MODIFIED_MARKER};
pub use tracker::{ContentChanged, UndoModifiedTracker};
