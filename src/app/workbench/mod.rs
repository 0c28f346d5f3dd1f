//! 工作台：把 Store 和 AsyncRuntime 接在一起
//!
//! Commands go into the store; the effects it returns run on the async
//! runtime; completions come back over a channel and are dispatched as actions.

use crate::core::{Command, CommandParseError};
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime};
use crate::kernel::services::ports::Settings;
use crate::kernel::{AppState, LayoutEvent, Store};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

mod bridge;
mod render;

pub use render::describe_event;

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Workbench {
    store: Store,
    runtime: AsyncRuntime,
    rx: Receiver<AppMessage>,
    /// Effects started whose completion message has not arrived yet.
    in_flight: usize,
    events: Vec<LayoutEvent>,
}

impl Workbench {
    pub fn new(settings: &Settings) -> io::Result<Self> {
        Self::with_state(AppState::from_settings(settings))
    }

    pub fn with_state(state: AppState) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(tx)?;
        Ok(Self {
            store: Store::new(state),
            runtime,
            rx,
            in_flight: 0,
            events: Vec::new(),
        })
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().should_quit
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.store.state().layout.has_unsaved_changes()
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight == 0
    }

    /// Layout events collected since the last call.
    pub fn take_events(&mut self) -> Vec<LayoutEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn execute(&mut self, command: Command) -> bool {
        tracing::debug!(command = command.name(), "execute");
        let command = bridge::resolve_paths(command);
        self.dispatch_kernel(crate::kernel::Action::RunCommand(command))
    }

    pub fn execute_line(&mut self, line: &str) -> Result<(Command, bool), CommandParseError> {
        let command = Command::parse(line)?;
        let changed = self.execute(command.clone());
        Ok((command, changed))
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch_kernel(msg.into())
    }

    /// Handles every message already delivered, without blocking.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(msg) = self.rx.try_recv() {
            changed |= self.handle_message(msg);
        }
        changed
    }

    /// Blocks until every started effect has reported back, or `timeout`
    /// passes without a message. Returns whether the runtime went idle.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        while self.in_flight > 0 {
            match self.rx.recv_timeout(timeout) {
                Ok(msg) => {
                    self.handle_message(msg);
                }
                Err(e) => {
                    tracing::warn!(error = %e, in_flight = self.in_flight, "runtime did not settle");
                    return false;
                }
            }
        }
        true
    }
}
