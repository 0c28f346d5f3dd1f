pub mod workbench;

pub use workbench::{describe_event, Workbench, DEFAULT_IDLE_TIMEOUT};
