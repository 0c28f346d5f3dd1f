use super::*;
use crate::kernel::theme::Theme;
use rustc_hash::FxHashSet;
use std::path::PathBuf;

fn container() -> (SplitContainer, ThemeManager) {
    let theme = ThemeManager::default();
    (SplitContainer::new(&theme), theme)
}

fn doc_ids(container: &SplitContainer) -> Vec<DocumentId> {
    container.all_documents().map(Document::id).collect()
}

fn assert_unique(container: &SplitContainer) {
    let ids = doc_ids(container);
    let set: FxHashSet<_> = ids.iter().copied().collect();
    assert_eq!(set.len(), ids.len(), "a document is owned by two panes");
}

#[test]
fn test_initial_state() {
    let (c, _) = container();
    assert!(!c.is_split());
    assert_eq!(c.panes().len(), 1);
    assert!(c.active_document().is_some());
    assert_eq!(c.document_count(), 1);
}

#[test]
fn test_add_document_and_unsaved_changes() {
    let (mut c, _) = container();
    let id = c.add_document(Document::with_content("x"));
    assert!(doc_ids(&c).contains(&id));
    assert_eq!(c.active_document().map(Document::id), Some(id));

    let before = c.document_count();
    c.add_new_document();
    assert_eq!(c.document_count(), before + 1);

    assert!(!c.has_unsaved_changes());
    assert!(c.set_modified(id, true));
    assert!(c.has_unsaved_changes());
}

#[test]
fn test_split_with_single_document_fails() {
    let (mut c, theme) = container();
    let only = c.active_document().unwrap().id();
    assert!(!c.create_split(only, SplitSide::Right, &theme));
    assert!(!c.is_split());
    assert_eq!(c.document_count(), 1);
}

#[test]
fn test_split_moves_document_into_new_active_pane() {
    let (mut c, theme) = container();
    let original = c.active_pane_id();
    let moved = c.add_new_document();

    assert!(c.create_split(moved, SplitSide::Right, &theme));
    assert!(c.is_split());
    assert_eq!(c.direction(), SplitDirection::Vertical);
    assert!(!c.pane(original).unwrap().contains(moved));

    let panes = c.pane_ids();
    assert_eq!(panes[0], original);
    assert_eq!(c.active_pane_id(), panes[1]);
    assert_eq!(c.active_document().map(Document::id), Some(moved));
    assert_unique(&c);
}

#[test]
fn test_split_side_places_pane() {
    let (mut c, theme) = container();
    let original = c.active_pane_id();
    let moved = c.add_new_document();

    assert!(c.create_split(moved, SplitSide::Top, &theme));
    assert_eq!(c.direction(), SplitDirection::Horizontal);
    assert_eq!(c.pane_ids()[1], original);
    assert_eq!(c.active_pane_id(), c.pane_ids()[0]);
}

#[test]
fn test_split_unowned_document_fails() {
    let (mut c, theme) = container();
    c.add_new_document();
    let stranger = Document::new();
    assert!(!c.create_split(stranger.id(), SplitSide::Left, &theme));
    assert!(!c.is_split());
}

#[test]
fn test_cannot_split_twice() {
    let (mut c, theme) = container();
    let a = c.add_new_document();
    let b = c.add_new_document();

    assert!(c.create_split(a, SplitSide::Right, &theme));
    assert!(!c.create_split(b, SplitSide::Right, &theme));
    assert_eq!(c.panes().len(), 2);
    assert_unique(&c);
}

#[test]
fn test_merge_without_split_is_noop() {
    let (mut c, _) = container();
    assert!(!c.merge_panes());
    assert_eq!(c.panes().len(), 1);
}

#[test]
fn test_split_merge_round_trip_preserves_documents_and_flags() {
    let (mut c, theme) = container();
    let first = c.active_document().unwrap().id();
    let a = c.add_new_document();
    let b = c.add_new_document();
    c.set_modified(a, true);

    let before: FxHashSet<_> = doc_ids(&c).into_iter().collect();
    assert!(c.create_split(a, SplitSide::Right, &theme));
    assert!(c.merge_panes());

    assert!(!c.is_split());
    assert_eq!(c.panes().len(), 1);
    let after: FxHashSet<_> = doc_ids(&c).into_iter().collect();
    assert_eq!(before, after);
    assert_eq!(doc_ids(&c), vec![first, b, a]);
    assert!(c.document(a).unwrap().is_modified());
    assert!(!c.document(b).unwrap().is_modified());
    assert!(c.active_pane().tab_strip().is_modified(2));
}

#[test]
fn test_merge_keeps_previously_active_document() {
    let (mut c, theme) = container();
    let a = c.add_new_document();
    let b = c.add_new_document();
    assert!(c.create_split(b, SplitSide::Left, &theme));
    assert_eq!(c.active_document().map(Document::id), Some(b));

    assert!(c.merge_panes());
    assert_eq!(c.active_document().map(Document::id), Some(b));
    // left pane comes first after the merge
    assert_eq!(doc_ids(&c)[0], b);
    assert!(doc_ids(&c).contains(&a));
}

#[test]
fn test_transfer_document() {
    let (mut c, theme) = container();
    let a = c.add_new_document();
    let b = c.add_new_document();
    assert!(c.create_split(a, SplitSide::Right, &theme));

    let panes = c.pane_ids();
    let (source, target) = (panes[0], panes[1]);
    let total = c.document_count();

    assert!(c.transfer_document(b, source, target));
    assert!(!c.pane(source).unwrap().contains(b));
    assert!(c.pane(target).unwrap().contains(b));
    assert_eq!(c.document_count(), total);
    assert_eq!(c.active_document().map(Document::id), Some(b));
    assert_unique(&c);
}

#[test]
fn test_transfer_rejects_unowned_and_same_pane() {
    let (mut c, theme) = container();
    let a = c.add_new_document();
    let b = c.add_new_document();
    assert!(c.create_split(a, SplitSide::Right, &theme));
    let panes = c.pane_ids();

    assert!(!c.transfer_document(b, panes[1], panes[0]));
    assert!(!c.transfer_document(b, panes[0], panes[0]));
    assert!(c.pane(panes[0]).unwrap().contains(b));
    assert!(!c.pane(panes[1]).unwrap().contains(b));
}

#[test]
fn test_transfer_of_last_document_collapses_split() {
    let (mut c, theme) = container();
    let a = c.add_new_document();
    assert!(c.create_split(a, SplitSide::Right, &theme));
    let panes = c.pane_ids();

    assert!(c.transfer_document(a, panes[1], panes[0]));
    assert!(!c.is_split());
    assert_eq!(c.document_count(), 2);
    assert_eq!(c.active_document().map(Document::id), Some(a));
}

#[test]
fn test_swap_reverses_order_and_is_involution() {
    let (mut c, theme) = container();
    let a = c.add_new_document();
    assert!(c.create_split(a, SplitSide::Right, &theme));
    let before = c.pane_ids();
    let active = c.active_pane_id();

    assert!(c.swap_panes());
    assert_eq!(c.pane_ids(), vec![before[1], before[0]]);
    assert_eq!(c.active_pane_id(), active);
    assert_eq!(c.active_document().map(Document::id), Some(a));

    assert!(c.swap_panes());
    assert_eq!(c.pane_ids(), before);
}

#[test]
fn test_swap_does_nothing_without_split() {
    let (mut c, _) = container();
    let before = c.pane_ids();
    assert!(!c.swap_panes());
    assert_eq!(c.pane_ids(), before);
}

#[test]
fn test_close_document_collapses_or_refills() {
    let (mut c, theme) = container();
    let first = c.active_document().unwrap().id();
    let a = c.add_new_document();
    assert!(c.create_split(a, SplitSide::Right, &theme));

    assert!(c.close_document(a));
    assert!(!c.is_split());
    assert_eq!(doc_ids(&c), vec![first]);

    assert!(c.close_document(first));
    assert_eq!(c.document_count(), 1);
    assert_ne!(c.active_document().map(Document::id), Some(first));
    assert!(!c.close_document(first));
}

#[test]
fn test_move_document_to_other_pane() {
    let (mut c, theme) = container();
    let a = c.add_new_document();
    let b = c.add_new_document();
    assert!(!c.move_document_to_other_pane(b));

    assert!(c.create_split(a, SplitSide::Right, &theme));
    assert!(c.move_document_to_other_pane(b));
    assert_eq!(c.find_document(b).map(|(pane, _)| pane), Some(c.pane_ids()[1]));
}

#[test]
fn test_find_by_path() {
    let (mut c, _) = container();
    let id = c.add_document(Document::from_file(PathBuf::from("/ws/a.rs"), ""));
    assert_eq!(c.find_by_path(Path::new("/ws/a.rs")), Some(id));
    assert_eq!(c.find_by_path(Path::new("/ws/b.rs")), None);
}

#[test]
fn test_new_pane_takes_theme_colors_at_creation() {
    let (mut c, mut theme) = container();
    let original = c.active_pane_id();
    let a = c.add_new_document();

    theme.apply_theme(Theme::Light);
    assert!(c.create_split(a, SplitSide::Right, &theme));
    let split_pane = c.active_pane_id();

    let light = theme.line_number_colors();
    assert_eq!(
        c.pane(split_pane).unwrap().surface().line_number_colors(),
        light
    );
    assert_eq!(
        c.pane(original).unwrap().surface().line_number_colors(),
        ThemeManager::new(Theme::Dark).line_number_colors()
    );

    theme.apply_theme(Theme::Dark);
    c.apply_theme(&theme);
    for pane in c.panes() {
        assert_eq!(
            pane.surface().line_number_colors(),
            theme.line_number_colors()
        );
    }
}

#[test]
fn test_split_emits_events_in_order() {
    let (mut c, theme) = container();
    let a = c.add_new_document();
    c.drain_events();

    assert!(c.create_split(a, SplitSide::Right, &theme));
    let events = c.drain_events();

    let removed = events
        .iter()
        .position(|e| matches!(e, LayoutEvent::DocumentRemoved { document, .. } if *document == a))
        .unwrap();
    let added = events
        .iter()
        .position(|e| matches!(e, LayoutEvent::DocumentAdded { document, .. } if *document == a))
        .unwrap();
    assert!(removed < added);
    assert_eq!(
        events.last(),
        Some(&LayoutEvent::SplitStateChanged {
            split: true,
            direction: SplitDirection::Vertical,
        })
    );
}

#[test]
fn test_emptied_pane_is_removed_on_drain() {
    let (mut c, theme) = container();
    let a = c.add_new_document();
    assert!(c.create_split(a, SplitSide::Right, &theme));
    let right = c.pane_ids()[1];

    c.pane_mut(right).unwrap().remove_document(a);
    c.drain_events();
    assert!(!c.is_split());
}

fn tab_modified(c: &SplitContainer, id: DocumentId) -> bool {
    let (pane, index) = c.find_document(id).unwrap();
    c.pane(pane).unwrap().tab_strip().is_modified(index)
}

#[test]
fn test_flag_changes_reach_the_owning_tab_strip() {
    let (mut c, theme) = container();
    let first = c.active_document().unwrap().id();
    let second = c.add_new_document();
    assert!(c.create_split(second, SplitSide::Right, &theme));
    c.drain_events();

    assert!(c.set_modified(second, true));
    assert!(tab_modified(&c, second));
    assert!(!tab_modified(&c, first));
    assert!(c
        .drain_events()
        .iter()
        .any(|e| matches!(e, LayoutEvent::TabTitleChanged { modified: true, .. })));

    assert!(c.mark_saved(second));
    assert!(!tab_modified(&c, second));
    assert!(!c.has_unsaved_changes());
}

#[test]
fn test_mark_saved_after_typing_clears_tab() {
    let (mut c, _) = container();
    let id = c.active_document().unwrap().id();
    assert!(c.active_pane_mut().insert_text("abc"));
    assert!(tab_modified(&c, id));

    assert!(c.mark_saved(id));
    assert!(!tab_modified(&c, id));
    assert!(!c.document(id).unwrap().is_modified());
}

#[test]
fn test_document_mut_changes_are_resynced_by_drain_events() {
    let (mut c, _) = container();
    let id = c.active_document().unwrap().id();
    c.drain_events();

    c.document_mut(id).unwrap().set_modified(true);
    let events = c.drain_events();
    assert!(tab_modified(&c, id));
    assert!(events
        .iter()
        .any(|e| matches!(e, LayoutEvent::TabTitleChanged { modified: true, .. })));

    assert!(c.active_pane_mut().insert_text("abc"));
    c.document_mut(id).unwrap().mark_saved();
    c.drain_events();
    assert!(!tab_modified(&c, id));
}

#[test]
fn test_unknown_document_flag_changes_are_rejected() {
    let (mut c, _) = container();
    let stranger = Document::new().id();
    assert!(!c.set_modified(stranger, true));
    assert!(!c.mark_saved(stranger));
    assert!(!c.set_document_path(stranger, PathBuf::from("/ws/x")));
}
