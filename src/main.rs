//zpad/src/main.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use zpad::app::{describe_event, Workbench, DEFAULT_IDLE_TIMEOUT};
use zpad::core::Command;
use zpad::kernel::services::adapters::{ensure_settings_file, load_settings};

mod logging;

const THEME_ENV: &str = "ZPAD_THEME";

fn main() -> io::Result<()> {
    let _logging = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "could not write default settings");
    }
    let mut settings = load_settings().unwrap_or_default();
    if let Ok(theme) = std::env::var(THEME_ENV) {
        settings.theme.name = Some(theme);
    }

    let mut workbench = Workbench::new(&settings)?;

    if let Some(arg) = std::env::args_os().nth(1) {
        let path = PathBuf::from(arg);
        let command = if path.is_dir() {
            Command::OpenFolder(path)
        } else {
            Command::OpenFile(path)
        };
        workbench.execute(command);
        workbench.wait_idle(DEFAULT_IDLE_TIMEOUT);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut seen_notifications = workbench.state().notifications.len();
    workbench.take_events();
    write!(stdout, "{}", workbench.render_layout())?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match workbench.execute_line(&line) {
            Ok((command, _)) => command,
            Err(e) => {
                writeln!(stdout, "error: {}", e)?;
                continue;
            }
        };
        if !workbench.wait_idle(DEFAULT_IDLE_TIMEOUT) {
            writeln!(stdout, "warning: background work still running")?;
        }

        for event in workbench.take_events() {
            tracing::debug!(event = %describe_event(&event), "layout event");
        }

        match command {
            Command::Help => write!(stdout, "{}", zpad::core::HELP)?,
            Command::Tree => write!(stdout, "{}", workbench.render_tree())?,
            Command::Status => write!(stdout, "{}", workbench.render_status())?,
            Command::Quit => {}
            _ => write!(stdout, "{}", workbench.render_layout())?,
        }

        let notifications = &workbench.state().notifications;
        for notification in notifications.iter().skip(seen_notifications) {
            writeln!(stdout, "{}: {}", notification.level, notification.message)?;
        }
        seen_notifications = notifications.len();
        stdout.flush()?;

        if workbench.should_quit() {
            break;
        }
    }

    if workbench.has_unsaved_changes() {
        tracing::warn!("quitting with unsaved changes");
        writeln!(stdout, "warning: unsaved changes discarded")?;
    }
    Ok(())
}
