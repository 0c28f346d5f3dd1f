use super::document::DocumentId;
use super::pane::PaneId;
use super::split::SplitDirection;

/// Upward notifications for whatever renders the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEvent {
    DocumentAdded {
        pane: PaneId,
        document: DocumentId,
    },
    DocumentRemoved {
        pane: PaneId,
        document: DocumentId,
    },
    ActiveDocumentChanged {
        pane: PaneId,
        document: Option<DocumentId>,
    },
    SplitStateChanged {
        split: bool,
        direction: SplitDirection,
    },
    TabTitleChanged {
        pane: PaneId,
        index: usize,
        text: String,
        modified: bool,
    },
}
