use super::*;

fn bound_surface(doc: &Document) -> EditorSurface {
    let mut surface = EditorSurface::new(LineNumberColors::default());
    surface.bind(Some(doc));
    surface
}

#[test]
fn test_set_line_number_colors() {
    let mut surface = EditorSurface::new(LineNumberColors::default());
    surface.set_line_number_colors(
        Color::Rgb(0x11, 0x11, 0x11),
        Color::Rgb(0x22, 0x22, 0x22),
        Color::Rgb(0x33, 0x33, 0x33),
        Color::Rgb(0x44, 0x44, 0x44),
    );
    let colors = surface.line_number_colors();
    assert_eq!(colors.bg, Color::Rgb(0x11, 0x11, 0x11));
    assert_eq!(colors.text, Color::Rgb(0x22, 0x22, 0x22));
    assert_eq!(colors.current_line, Color::Rgb(0x33, 0x33, 0x33));
    assert_eq!(colors.current_line_bg, Color::Rgb(0x44, 0x44, 0x44));
}

#[test]
fn test_gutter_width_grows_with_digit_count() {
    let mut surface = EditorSurface::new(LineNumberColors::default());
    let one = surface.line_number_area_width(1);
    assert!(one > 0);
    assert_eq!(surface.line_number_area_width(9), one);
    assert!(surface.line_number_area_width(1000) > surface.line_number_area_width(10));

    surface.set_show_line_numbers(false);
    assert_eq!(surface.line_number_area_width(1000), 0);
}

#[test]
fn test_mutations_report_clean_position() {
    let mut doc = Document::new();
    let mut surface = bound_surface(&doc);

    let change = surface.insert_text(&mut doc, "Hello").unwrap();
    assert_eq!(change.document, doc.id());
    assert!(!change.at_clean);

    let change = surface.undo(&mut doc).unwrap();
    assert!(change.at_clean);
    assert_eq!(doc.content(), "");

    let change = surface.redo(&mut doc).unwrap();
    assert!(!change.at_clean);
    assert_eq!(doc.content(), "Hello");
}

#[test]
fn test_noop_edits_report_nothing() {
    let mut doc = Document::new();
    let mut surface = bound_surface(&doc);
    assert!(surface.undo(&mut doc).is_none());
    assert!(surface.delete_backward(&mut doc).is_none());
    assert!(surface.insert_text(&mut doc, "").is_none());
}

#[test]
fn test_unbound_document_is_rejected() {
    let bound = Document::new();
    let mut other = Document::new();
    let mut surface = bound_surface(&bound);

    assert!(surface.insert_text(&mut other, "x").is_none());
    assert_eq!(other.content(), "");
    assert!(surface.content(&other).is_none());
}

#[test]
fn test_current_line_follows_cursor() {
    let mut doc = Document::new();
    let mut surface = bound_surface(&doc);

    surface.insert_text(&mut doc, "Line 1\nLine 2\nLine 3").unwrap();
    assert_eq!(surface.current_line(), 2);

    assert!(surface.set_cursor(&mut doc, 1, 0));
    assert_eq!(surface.current_line(), 1);

    surface.bind(Some(&doc));
    assert_eq!(surface.current_line(), 1);
}

#[test]
fn test_set_content_starts_clean() {
    let mut doc = Document::new();
    let mut surface = bound_surface(&doc);
    surface.insert_text(&mut doc, "draft").unwrap();

    let change = surface.set_content(&mut doc, "fresh").unwrap();
    assert!(change.at_clean);
    assert_eq!(surface.content(&doc).as_deref(), Some("fresh"));
}
