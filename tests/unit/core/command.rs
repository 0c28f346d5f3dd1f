use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::NewFile.name(), "newFile");
    assert_eq!(Command::InsertText("a".into()).name(), "insertText");
    assert_eq!(Command::Split(SplitSide::Left).name(), "split");
    assert_eq!(Command::Quit.name(), "quit");
}

#[test]
fn test_is_edit_command() {
    assert!(Command::InsertText("a".into()).is_edit_command());
    assert!(Command::Undo.is_edit_command());
    assert!(!Command::Save.is_edit_command());
    assert!(Command::Status.is_query());
    assert!(!Command::Quit.is_query());
}

#[test]
fn test_parse_simple_words() {
    assert_eq!(Command::parse("new"), Ok(Command::NewFile));
    assert_eq!(Command::parse("  merge  "), Ok(Command::Merge));
    assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    assert_eq!(Command::parse(""), Err(CommandParseError::Empty));
    assert_eq!(
        Command::parse("frobnicate"),
        Err(CommandParseError::Unknown("frobnicate".into()))
    );
}

#[test]
fn test_parse_paths() {
    assert_eq!(
        Command::parse("open /tmp/a b.txt"),
        Ok(Command::OpenFile(PathBuf::from("/tmp/a b.txt")))
    );
    assert_eq!(
        Command::parse("open! x.rs"),
        Ok(Command::OpenFileInNewTab(PathBuf::from("x.rs")))
    );
    assert!(matches!(
        Command::parse("saveas"),
        Err(CommandParseError::MissingArgument { command: "saveas", .. })
    ));
}

#[test]
fn test_parse_type_keeps_spacing_and_escapes() {
    assert_eq!(
        Command::parse("type  two  spaces"),
        Ok(Command::InsertText(" two  spaces".into()))
    );
    assert_eq!(
        Command::parse("type a\\nb"),
        Ok(Command::InsertText("a\nb".into()))
    );
    assert!(Command::parse("type").is_err());
}

#[test]
fn test_parse_numbers() {
    assert_eq!(Command::parse("tab 2"), Ok(Command::SelectTab(2)));
    assert_eq!(
        Command::parse("reorder 0 3"),
        Ok(Command::ReorderTab { from: 0, to: 3 })
    );
    assert!(matches!(
        Command::parse("tab -1"),
        Err(CommandParseError::InvalidArgument { command: "tab", .. })
    ));
    assert!(Command::parse("reorder 1").is_err());
    assert_eq!(Command::parse("width 250"), Ok(Command::SetSidebarWidth(250)));
}

#[test]
fn test_parse_split_and_theme() {
    assert_eq!(Command::parse("split"), Ok(Command::Split(SplitSide::Right)));
    assert_eq!(Command::parse("split top"), Ok(Command::Split(SplitSide::Top)));
    assert!(Command::parse("split diagonal").is_err());

    assert_eq!(
        Command::parse("theme Light"),
        Ok(Command::SetTheme(Theme::Light))
    );
    assert_eq!(Command::parse("theme toggle"), Ok(Command::ToggleTheme));
    assert!(Command::parse("theme neon").is_err());
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(
        CommandParseError::MissingArgument {
            command: "open",
            argument: "path"
        }
        .to_string(),
        "open: missing <path>"
    );
}
