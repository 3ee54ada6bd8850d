use runsheet_core::planner::Planner;
use runsheet_core::timeline::{ItemPatch, TimelineItem, WeddingInfoPatch};

fn make_item(title: &str, start: &str, duration: &str) -> TimelineItem {
    TimelineItem::new(title, start, duration)
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wedding.json");

    let mut planner = Planner::new("Dana & Sam");
    let id = planner.add_item(make_item("Ceremony", "12:00", "30")).unwrap();
    planner.add_item(make_item("Reception", "13:00", "4h")).unwrap();
    planner.update_wedding_info(&WeddingInfoPatch {
        names: Some("Dana & Sam".into()),
        date: Some("2026-06-20".into()),
        ..Default::default()
    });

    planner.save(&path).unwrap();
    let loaded = Planner::load(&path).unwrap();

    assert_eq!(loaded.name(), "Dana & Sam");
    assert_eq!(loaded.timeline(), planner.timeline());
    assert_eq!(loaded.timeline().item(id).unwrap().title, "Ceremony");
    assert_eq!(loaded.timeline().wedding_info.date, "2026-06-20");
}

#[test]
fn test_loaded_planner_starts_with_fresh_history_and_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wedding.json");

    let mut planner = Planner::new("Test");
    let id = planner.add_item(make_item("A", "09:00", "30")).unwrap();
    planner.toggle_selection(id);
    assert!(planner.can_undo());

    planner.save(&path).unwrap();
    let loaded = Planner::load(&path).unwrap();

    assert!(!loaded.can_undo());
    assert!(!loaded.can_redo());
    assert!(loaded.selection().is_empty());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Planner::load(&dir.path().join("nope.json")).is_err());
}

#[test]
fn test_mutations_after_load_are_undoable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wedding.json");

    let mut planner = Planner::new("Test");
    let id = planner.add_item(make_item("A", "09:00", "30")).unwrap();
    planner.save(&path).unwrap();

    let mut loaded = Planner::load(&path).unwrap();
    loaded
        .update_item(
            id,
            ItemPatch {
                title: Some("A'".into()),
                ..Default::default()
            },
        )
        .unwrap();

    loaded.undo().unwrap();
    assert_eq!(loaded.timeline().item(id).unwrap().title, "A");
}
