//! Plain-text views of the workbench state for the shell.

use super::Workbench;
use crate::kernel::editor::{Document, Pane, SplitDirection};
use crate::kernel::LayoutEvent;
use crate::models::LoadState;
use std::fmt::Write as _;
use unicode_segmentation::UnicodeSegmentation;

const PREVIEW_LINES: usize = 12;
const PREVIEW_COLUMNS: usize = 72;

impl Workbench {
    /// Panes and their tabs; `*` marks the active pane, `>` the active tab.
    pub fn render_layout(&self) -> String {
        let layout = &self.state().layout;
        let mut out = String::new();

        let mode = match (layout.is_split(), layout.direction()) {
            (false, _) => "unsplit",
            (true, SplitDirection::Vertical) => "split vertical",
            (true, SplitDirection::Horizontal) => "split horizontal",
        };
        let _ = writeln!(out, "[{}]", mode);

        let active_pane = layout.active_pane_id();
        for pane in layout.panes() {
            let marker = if pane.id() == active_pane { "*" } else { " " };
            let _ = writeln!(out, "{} {}", marker, pane.id());
            render_tabs(&mut out, pane);
        }
        out
    }

    /// Layout plus the active document with its gutter, theme and sidebar state.
    pub fn render_status(&self) -> String {
        let state = self.state();
        let mut out = self.render_layout();

        if let Some(document) = state.layout.active_document() {
            render_preview(&mut out, state.layout.active_pane(), document);
        }

        let colors = state.theme.line_number_colors();
        let _ = writeln!(
            out,
            "theme: {} (gutter {} on {}, current {} on {})",
            state.theme.current_theme().name(),
            colors.text,
            colors.bg,
            colors.current_line,
            colors.current_line_bg
        );
        let _ = writeln!(
            out,
            "sidebar: {} {}px{}",
            if state.explorer.is_collapsed() {
                "collapsed"
            } else {
                "expanded"
            },
            state.explorer.width(),
            state
                .explorer
                .root_path()
                .map(|p| format!(", folder {}", p.display()))
                .unwrap_or_default()
        );
        if state.layout.has_unsaved_changes() {
            let _ = writeln!(out, "unsaved changes");
        }
        for notification in &state.notifications {
            let _ = writeln!(out, "{}: {}", notification.level, notification.message);
        }
        out
    }

    /// The explorer rows, indented by depth.
    pub fn render_tree(&self) -> String {
        let explorer = &self.state().explorer;
        let Some(root) = explorer.root_path() else {
            return "(no folder open)\n".to_string();
        };

        let mut out = String::new();
        let _ = writeln!(out, "{}", root.display());
        let selected = explorer.selected_row();
        for (index, row) in explorer.rows().iter().enumerate() {
            let cursor = if selected == Some(index) { ">" } else { " " };
            let icon = match (row.is_dir, row.is_expanded, row.load_state) {
                (false, _, _) => " ",
                (true, _, LoadState::Loading) => "…",
                (true, true, _) => "▾",
                (true, false, _) => "▸",
            };
            let _ = writeln!(
                out,
                "{}{:>3} {}{} {}",
                cursor,
                index,
                "  ".repeat(row.depth as usize),
                icon,
                row.name.to_string_lossy()
            );
        }
        out
    }
}

pub fn describe_event(event: &LayoutEvent) -> String {
    match event {
        LayoutEvent::DocumentAdded { pane, document } => format!("{} added to {}", document, pane),
        LayoutEvent::DocumentRemoved { pane, document } => {
            format!("{} removed from {}", document, pane)
        }
        LayoutEvent::ActiveDocumentChanged { pane, document } => match document {
            Some(document) => format!("{} active in {}", document, pane),
            None => format!("{} has no active document", pane),
        },
        LayoutEvent::SplitStateChanged { split, direction } => {
            if *split {
                format!("split {:?}", direction).to_lowercase()
            } else {
                "unsplit".to_string()
            }
        }
        LayoutEvent::TabTitleChanged {
            pane,
            index,
            text,
            modified,
        } => format!(
            "{} tab {}: {}{}",
            pane,
            index,
            text,
            if *modified { " (modified)" } else { "" }
        ),
    }
}

fn render_tabs(out: &mut String, pane: &Pane) {
    let active = pane.active_index();
    for (index, tab) in pane.tab_strip().tabs().iter().enumerate() {
        let marker = if active == Some(index) { ">" } else { " " };
        let _ = writeln!(out, "  {} [{}] {}", marker, index, tab.display_title());
    }
}

fn render_preview(out: &mut String, pane: &Pane, document: &Document) {
    let rope = document.rope();
    let line_count = rope.len_lines();
    let gutter = pane.surface().line_number_area_width(line_count) as usize;
    let current = pane.surface().current_line();

    let _ = writeln!(out, "--- {} ({} lines)", document.title(), line_count);
    for (row, line) in rope.lines().take(PREVIEW_LINES).enumerate() {
        let text = line.to_string();
        let text = text.trim_end_matches(['\n', '\r']);
        let clipped: String = text.graphemes(true).take(PREVIEW_COLUMNS).collect();
        if gutter == 0 {
            let _ = writeln!(out, "{}", clipped);
            continue;
        }
        let mark = if row == current { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{}{:>width$} {}",
            mark,
            row + 1,
            clipped,
            width = gutter.saturating_sub(2)
        );
    }
    if line_count > PREVIEW_LINES {
        let _ = writeln!(out, "  ...");
    }
}
