//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod file;
pub mod paths;
pub mod runtime;
pub mod settings;

pub use file::{FileService, LocalFileProvider};
pub use paths::{ensure_log_dir, get_log_dir};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, get_settings_path, load_settings,
    load_settings_from,
};
