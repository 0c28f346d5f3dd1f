use super::Workbench;
use crate::core::Command;
use crate::kernel::{Action as KernelAction, Effect};
use std::path::{Path, PathBuf};

impl Workbench {
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        self.events.extend(result.events);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        self.in_flight += 1;
        self.runtime.run_effect(effect);
    }
}

/// Relative paths typed in the shell are taken from the working directory, so
/// the same file opened twice dedupes.
pub(super) fn resolve_paths(command: Command) -> Command {
    match command {
        Command::OpenFile(path) => Command::OpenFile(absolute(path)),
        Command::OpenFileInNewTab(path) => Command::OpenFileInNewTab(absolute(path)),
        Command::OpenFolder(path) => Command::OpenFolder(absolute(path)),
        Command::SaveAs(path) => Command::SaveAs(absolute(path)),
        other => other,
    }
}

fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match std::env::current_dir() {
        Ok(cwd) => normalize(&cwd.join(path)),
        Err(e) => {
            tracing::debug!(error = %e, "no working directory; keeping relative path");
            path
        }
    }
}

/// Drops `.` and folds `..` lexically; symlinks are left alone.
fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
