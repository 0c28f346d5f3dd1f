use super::*;
use compact_str::CompactString;

fn insert(history: &mut EditHistory, rope: &mut Rope, at: usize, text: &str) -> OpId {
    let col = at;
    let op = EditOp::insert(
        history.head(),
        at,
        CompactString::new(text),
        (0, col),
        (0, col + text.chars().count()),
    );
    let id = op.id;
    op.apply(rope);
    history.push(op, rope);
    id
}

#[test]
fn test_undo_redo() {
    let mut rope = Rope::from_str("hello");
    let mut history = EditHistory::new(rope.clone());

    insert(&mut history, &mut rope, 5, " world");
    assert!(history.can_undo());
    assert!(!history.can_redo());

    let undo = history.undo(&rope).unwrap();
    assert_eq!(undo.rope.to_string(), "hello");
    assert_eq!(undo.cursor, (0, 5));
    rope = undo.rope;

    assert!(!history.can_undo());
    assert!(history.can_redo());

    let redo = history.redo(&rope).unwrap();
    assert_eq!(redo.rope.to_string(), "hello world");
    assert_eq!(redo.cursor, (0, 11));
}

#[test]
fn test_undo_on_fresh_history_is_none() {
    let rope = Rope::from_str("abc");
    let mut history = EditHistory::new(rope.clone());
    assert!(history.undo(&rope).is_none());
    assert!(history.redo(&rope).is_none());
    assert!(history.is_at_saved());
}

#[test]
fn test_branch_on_edit_after_undo_redoes_last_visited_branch() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new(rope.clone());

    let a = insert(&mut history, &mut rope, 0, "a");
    let b = insert(&mut history, &mut rope, 1, "b");

    rope = history.undo(&rope).unwrap().rope;
    assert_eq!(rope.to_string(), "a");

    insert(&mut history, &mut rope, 1, "c");
    assert_eq!(history.children_of(&a).len(), 2);

    let checkout = history.checkout(b).unwrap();
    assert_eq!(checkout.rope.to_string(), "ab");
    rope = checkout.rope;

    rope = history.undo(&rope).unwrap().rope;
    assert_eq!(rope.to_string(), "a");

    let redo = history.redo(&rope).unwrap();
    assert_eq!(redo.rope.to_string(), "ab");
}

#[test]
fn test_saved_marker_tracks_position() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new(rope.clone());
    assert!(history.is_at_saved());

    insert(&mut history, &mut rope, 0, "Content");
    assert!(!history.is_at_saved());

    history.mark_saved();
    assert!(history.is_at_saved());

    insert(&mut history, &mut rope, 7, " more");
    assert!(!history.is_at_saved());

    rope = history.undo(&rope).unwrap().rope;
    assert!(history.is_at_saved());
    assert_eq!(rope.to_string(), "Content");

    history.undo(&rope).unwrap();
    assert!(!history.is_at_saved());
}

#[test]
fn test_checkout_rebuilds_from_checkpoints() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new(rope.clone()).with_config(EditHistoryConfig {
        checkpoint_interval: 2,
    });

    let first = insert(&mut history, &mut rope, 0, "a");
    for (i, ch) in ["b", "c", "d", "e"].iter().enumerate() {
        insert(&mut history, &mut rope, i + 1, ch);
    }
    assert_eq!(rope.to_string(), "abcde");
    assert_eq!(history.log().len(), 5);

    let step = history.checkout(first).unwrap();
    assert_eq!(step.rope.to_string(), "a");
    assert_eq!(history.head(), first);

    let root = history.checkout(OpId::root()).unwrap();
    assert_eq!(root.rope.to_string(), "");
}

#[test]
fn test_clear_resets_root_and_saved() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new(rope.clone());
    insert(&mut history, &mut rope, 0, "x");

    history.clear(&rope);
    assert!(history.is_empty());
    assert!(history.is_at_saved());
    assert!(!history.can_undo());
}

#[test]
fn test_mark_saved_at_ignores_unknown_ops() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new(rope.clone());
    let first = insert(&mut history, &mut rope, 0, "a");
    insert(&mut history, &mut rope, 1, "b");

    assert!(!history.mark_saved_at(OpId::new()));
    assert_eq!(history.saved(), OpId::root());

    assert!(history.mark_saved_at(first));
    assert!(!history.is_at_saved());
    history.undo(&rope).unwrap();
    assert!(history.is_at_saved());
}
