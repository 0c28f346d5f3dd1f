//! Headless application core (state/action/effect).

pub mod action;
pub mod editor;
pub mod effect;
pub mod explorer;
pub mod services;
pub mod state;
pub mod store;
pub mod theme;

pub use action::Action;
pub use editor::{
    Document, DocumentId, LayoutEvent, Pane, PaneId, SplitContainer, SplitDirection, SplitSide,
};
pub use effect::Effect;
pub use explorer::ExplorerState;
pub use state::{AppState, Notification, NotificationLevel};
pub use store::{DispatchResult, Store};
pub use theme::{LineNumberColors, Theme, ThemeManager};
