use crate::kernel::editor::SplitContainer;
use crate::kernel::explorer::ExplorerState;
use crate::kernel::services::ports::{EditorConfig, Settings};
use crate::kernel::theme::ThemeManager;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        };
        f.write_str(label)
    }
}

/// A message for the user, e.g. a failed load or save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub layout: SplitContainer,
    pub explorer: ExplorerState,
    pub theme: ThemeManager,
    pub config: EditorConfig,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(theme: ThemeManager, config: EditorConfig) -> Self {
        let mut layout = SplitContainer::new(&theme);
        layout.set_show_line_numbers(config.show_line_numbers);
        layout.drain_events();
        Self {
            layout,
            explorer: ExplorerState::new(),
            theme,
            config,
            notifications: Vec::new(),
            should_quit: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            ThemeManager::from_settings(&settings.theme),
            EditorConfig::from_settings(&settings.editor),
        )
    }

    pub fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error | NotificationLevel::Warning => {
                tracing::warn!(message = %notification.message, "notification")
            }
            NotificationLevel::Info => tracing::debug!(message = %notification.message, "notification"),
        }
        self.notifications.push(notification);
    }

    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemeManager::default(), EditorConfig::default())
    }
}
