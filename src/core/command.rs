//! 命令系统：语义命令定义
//!
//! `Command` is what the user asked for, independent of how it was typed.
//! `Command::parse` reads the shell's line syntax (`open <path>`, `split right`).

use crate::kernel::editor::SplitSide;
use crate::kernel::theme::Theme;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // ==================== 文件操作 ====================
    NewFile,
    OpenFile(PathBuf),
    OpenFileInNewTab(PathBuf),
    OpenFolder(PathBuf),
    CloseFolder,
    RefreshFolder,
    Save,
    SaveAs(PathBuf),
    ReloadSettings,

    // ==================== 编辑操作 ====================
    InsertText(String),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    Undo,
    Redo,

    // ==================== 标签页 ====================
    CloseTab,
    NextTab,
    PrevTab,
    SelectTab(usize),
    ReorderTab { from: usize, to: usize },

    // ==================== 分屏 ====================
    Split(SplitSide),
    Merge,
    SwapPanes,
    MoveToOtherPane,
    FocusNextPane,

    // ==================== 视图操作 ====================
    SetTheme(Theme),
    ToggleTheme,
    ToggleLineNumbers,
    ToggleSidebar,
    SetSidebarWidth(u16),
    ExplorerSelect(usize),
    ExplorerActivate { new_tab: bool },
    ExplorerCollapse,
    DismissNotification,

    // ==================== 系统操作 ====================
    Tree,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    Empty,
    Unknown(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    InvalidArgument {
        command: &'static str,
        value: String,
    },
}

impl fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandParseError::Empty => write!(f, "empty command"),
            CommandParseError::Unknown(word) => write!(f, "unknown command: {}", word),
            CommandParseError::MissingArgument { command, argument } => {
                write!(f, "{}: missing <{}>", command, argument)
            }
            CommandParseError::InvalidArgument { command, value } => {
                write!(f, "{}: invalid argument '{}'", command, value)
            }
        }
    }
}

impl std::error::Error for CommandParseError {}

/// One line per shell command, as printed by `help`.
pub const HELP: &str = "\
new                     new untitled tab
open <path>             open a file (replaces an untouched untitled tab)
open! <path>            open a file in a new tab
folder <path>           open a folder in the explorer
closefolder | refresh   close or reload the explorer folder
type <text>             insert text at the cursor
newline | indent        insert a line break or one indent unit
backspace | delete      delete before or after the cursor
undo | redo
save | saveas <path>
close                   close the active tab
next | prev | tab <n>   switch tabs (0-based)
reorder <from> <to>     move a tab
split <side>            left, right, top or bottom
merge | swap | move | focus
theme <name>|toggle     dark, light
lines                   toggle line numbers
sidebar | width <px>    collapse/expand or resize the sidebar
select <row>            select an explorer row
activate | activate!    open the selected row (! = new tab)
collapse                collapse the selected folder
reload                  reload settings
dismiss                 drop the latest notification
tree | status | help | quit";

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::NewFile => "newFile",
            Command::OpenFile(_) => "openFile",
            Command::OpenFileInNewTab(_) => "openFileInNewTab",
            Command::OpenFolder(_) => "openFolder",
            Command::CloseFolder => "closeFolder",
            Command::RefreshFolder => "refreshFolder",
            Command::Save => "save",
            Command::SaveAs(_) => "saveAs",
            Command::ReloadSettings => "reloadSettings",
            Command::InsertText(_) => "insertText",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::CloseTab => "closeTab",
            Command::NextTab => "nextTab",
            Command::PrevTab => "prevTab",
            Command::SelectTab(_) => "selectTab",
            Command::ReorderTab { .. } => "reorderTab",
            Command::Split(_) => "split",
            Command::Merge => "merge",
            Command::SwapPanes => "swapPanes",
            Command::MoveToOtherPane => "moveToOtherPane",
            Command::FocusNextPane => "focusNextPane",
            Command::SetTheme(_) => "setTheme",
            Command::ToggleTheme => "toggleTheme",
            Command::ToggleLineNumbers => "toggleLineNumbers",
            Command::ToggleSidebar => "toggleSidebar",
            Command::SetSidebarWidth(_) => "setSidebarWidth",
            Command::ExplorerSelect(_) => "explorerSelect",
            Command::ExplorerActivate { .. } => "explorerActivate",
            Command::ExplorerCollapse => "explorerCollapse",
            Command::DismissNotification => "dismissNotification",
            Command::Tree => "tree",
            Command::Status => "status",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertText(_)
                | Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
                | Command::Undo
                | Command::Redo
        )
    }

    /// Commands that only print; they never touch state.
    pub fn is_query(&self) -> bool {
        matches!(self, Command::Tree | Command::Status | Command::Help)
    }

    pub fn parse(line: &str) -> Result<Command, CommandParseError> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };
        let arg = rest.trim();

        let command = match word {
            "" => return Err(CommandParseError::Empty),
            "new" => Command::NewFile,
            "open" => Command::OpenFile(path_arg("open", arg)?),
            "open!" => Command::OpenFileInNewTab(path_arg("open!", arg)?),
            "folder" => Command::OpenFolder(path_arg("folder", arg)?),
            "closefolder" => Command::CloseFolder,
            "refresh" => Command::RefreshFolder,
            "save" => Command::Save,
            "saveas" => Command::SaveAs(path_arg("saveas", arg)?),
            "reload" => Command::ReloadSettings,
            // `type` keeps spacing; only the single separator after the word is dropped.
            "type" => {
                let text = rest;
                if text.is_empty() {
                    return Err(CommandParseError::MissingArgument {
                        command: "type",
                        argument: "text",
                    });
                }
                Command::InsertText(unescape(text))
            }
            "newline" => Command::InsertNewline,
            "indent" => Command::InsertTab,
            "backspace" => Command::DeleteBackward,
            "delete" => Command::DeleteForward,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "close" => Command::CloseTab,
            "next" => Command::NextTab,
            "prev" => Command::PrevTab,
            "tab" => Command::SelectTab(number_arg("tab", "n", arg)?),
            "reorder" => {
                let mut parts = arg.split_whitespace();
                let from = number_arg("reorder", "from", parts.next().unwrap_or(""))?;
                let to = number_arg("reorder", "to", parts.next().unwrap_or(""))?;
                Command::ReorderTab { from, to }
            }
            "split" => {
                let side = if arg.is_empty() {
                    SplitSide::Right
                } else {
                    SplitSide::from_name(arg).ok_or_else(|| CommandParseError::InvalidArgument {
                        command: "split",
                        value: arg.to_string(),
                    })?
                };
                Command::Split(side)
            }
            "merge" => Command::Merge,
            "swap" => Command::SwapPanes,
            "move" => Command::MoveToOtherPane,
            "focus" => Command::FocusNextPane,
            "theme" => match arg {
                "" => {
                    return Err(CommandParseError::MissingArgument {
                        command: "theme",
                        argument: "name",
                    })
                }
                "toggle" => Command::ToggleTheme,
                name => Command::SetTheme(Theme::from_name(name).ok_or_else(|| {
                    CommandParseError::InvalidArgument {
                        command: "theme",
                        value: name.to_string(),
                    }
                })?),
            },
            "lines" => Command::ToggleLineNumbers,
            "sidebar" => Command::ToggleSidebar,
            "width" => Command::SetSidebarWidth(number_arg("width", "px", arg)?),
            "select" => Command::ExplorerSelect(number_arg("select", "row", arg)?),
            "activate" => Command::ExplorerActivate { new_tab: false },
            "activate!" => Command::ExplorerActivate { new_tab: true },
            "collapse" => Command::ExplorerCollapse,
            "dismiss" => Command::DismissNotification,
            "tree" => Command::Tree,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandParseError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn path_arg(command: &'static str, arg: &str) -> Result<PathBuf, CommandParseError> {
    if arg.is_empty() {
        return Err(CommandParseError::MissingArgument {
            command,
            argument: "path",
        });
    }
    Ok(PathBuf::from(arg))
}

fn number_arg<T: std::str::FromStr>(
    command: &'static str,
    argument: &'static str,
    arg: &str,
) -> Result<T, CommandParseError> {
    if arg.is_empty() {
        return Err(CommandParseError::MissingArgument { command, argument });
    }
    arg.parse().map_err(|_| CommandParseError::InvalidArgument {
        command,
        value: arg.to_string(),
    })
}

/// `\n` and `\t` escapes, so multi-line text fits on one shell line.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
