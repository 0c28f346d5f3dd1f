use super::*;

#[test]
fn test_new_document_is_clean_and_untitled() {
    let doc = Document::new();
    assert!(!doc.is_modified());
    assert!(doc.is_at_clean());
    assert_eq!(doc.title(), "Untitled");
    assert_eq!(doc.content(), "");
    assert!(doc.is_pristine());
}

#[test]
fn test_ids_are_distinct_for_equal_content() {
    let a = Document::new();
    let b = Document::new();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_title_uses_file_name() {
    let doc = Document::from_file(PathBuf::from("/test/file.txt"), "x");
    assert_eq!(doc.title(), "file.txt");
    assert_eq!(doc.content(), "x");
    assert!(!doc.is_pristine());
}

#[test]
fn test_set_modified_reports_change() {
    let mut doc = Document::with_content("abc");
    assert!(doc.set_modified(true));
    assert!(!doc.set_modified(true));
    assert!(doc.is_modified());
    assert!(doc.set_modified(false));
}

#[test]
fn test_mark_saved_moves_baseline() {
    let mut doc = Document::new();
    doc.insert_str("Content");
    assert!(!doc.is_at_clean());

    doc.set_modified(true);
    doc.mark_saved();
    assert!(!doc.is_modified());
    assert!(doc.is_at_clean());

    doc.undo();
    assert!(!doc.is_at_clean());
    assert_eq!(doc.content(), "");
}

#[test]
fn test_reload_resets_history() {
    let mut doc = Document::from_file(PathBuf::from("/a.txt"), "one");
    doc.insert_str("x");
    doc.set_modified(true);

    doc.reload("two\nlines");
    assert_eq!(doc.content(), "two\nlines");
    assert!(!doc.is_modified());
    assert!(doc.is_at_clean());
    assert!(!doc.undo());
}

#[test]
fn test_set_path_retitles() {
    let mut doc = Document::new();
    doc.set_path(PathBuf::from("/tmp/notes.md"));
    assert_eq!(doc.title(), "notes.md");
    assert_eq!(doc.file_path(), Some(Path::new("/tmp/notes.md")));
}

#[test]
fn test_empty_insert_records_nothing() {
    let mut doc = Document::new();
    assert!(!doc.insert_str(""));
    assert!(doc.history().is_empty());
}

#[test]
fn test_delete_forward_and_backward() {
    let mut doc = Document::with_content("abc");
    doc.set_cursor(0, 1);
    assert!(doc.delete_forward());
    assert_eq!(doc.content(), "ac");
    assert!(doc.delete_backward());
    assert_eq!(doc.content(), "c");
    assert!(!doc.delete_backward());
}

#[test]
fn test_mark_saved_at_earlier_version_keeps_later_edits_dirty() {
    let mut doc = Document::new();
    doc.insert_str("a");
    let written = doc.history().head();
    doc.set_modified(true);

    doc.insert_str("b");
    doc.mark_saved_at(written);
    assert!(doc.is_modified());
    assert!(!doc.is_at_clean());

    doc.undo();
    assert!(doc.is_at_clean());
}

#[test]
fn test_mark_saved_at_current_head_cleans() {
    let mut doc = Document::new();
    doc.insert_str("a");
    doc.set_modified(true);
    doc.mark_saved_at(doc.history().head());
    assert!(!doc.is_modified());
}
