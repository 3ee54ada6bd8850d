use runsheet_core::planner::Planner;
use runsheet_core::timeline::TimelineItem;
use uuid::Uuid;

fn make_item(title: &str, start: &str, duration: &str) -> TimelineItem {
    TimelineItem::new(title, start, duration)
}

/// [A(09:00,30m), B(10:00,30m), C(11:00,30m)]
fn planner_abc() -> (Planner, Uuid, Uuid, Uuid) {
    let mut planner = Planner::new("Test");
    let a = planner.add_item(make_item("A", "09:00", "30")).unwrap();
    let b = planner.add_item(make_item("B", "10:00", "30")).unwrap();
    let c = planner.add_item(make_item("C", "11:00", "30")).unwrap();
    (planner, a, b, c)
}

#[test]
fn test_begin_drag_out_of_bounds() {
    let (planner, ..) = planner_abc();
    assert!(planner.begin_drag(3).is_err());
}

#[test]
fn test_drag_to_front_keeps_time_without_earlier_neighbor() {
    let (mut planner, a, b, c) = planner_abc();

    let mut drag = planner.begin_drag(2).unwrap();
    assert_eq!(drag.item_id(), c);
    drag.hover(&mut planner, 0).unwrap();

    // Dropped before A: no earlier neighbor, so C keeps its 11:00 start.
    assert_eq!(planner.timeline().ordered_ids(), vec![c, a, b]);
    let item_c = planner.timeline().item(c).unwrap();
    assert_eq!(item_c.start_time, "11:00");
    assert_eq!(item_c.end_time, "11:30");
    assert_eq!(planner.timeline().item(a).unwrap().start_time, "09:00");
    assert_eq!(planner.timeline().item(b).unwrap().start_time, "10:00");
}

#[test]
fn test_drag_later_anchors_to_previous_neighbor() {
    let (mut planner, a, b, _) = planner_abc();

    let mut drag = planner.begin_drag(0).unwrap();
    drag.hover(&mut planner, 1).unwrap();

    // A now follows B, starting where B ends.
    assert_eq!(planner.timeline().ordered_ids()[0], b);
    let item_a = planner.timeline().item(a).unwrap();
    assert_eq!(item_a.start_time, "10:30");
    assert_eq!(item_a.end_time, "11:00");
}

#[test]
fn test_drag_earlier_anchors_to_next_neighbor() {
    let (mut planner, a, b, c) = planner_abc();

    let mut drag = planner.begin_drag(2).unwrap();
    drag.hover(&mut planner, 1).unwrap();

    // C sits between A and B, ending where B starts.
    assert_eq!(planner.timeline().ordered_ids(), vec![a, c, b]);
    let item_c = planner.timeline().item(c).unwrap();
    assert_eq!(item_c.start_time, "09:30");
    assert_eq!(item_c.end_time, "10:00");
}

#[test]
fn test_reflow_with_equal_indices_is_noop() {
    let (mut planner, a, b, c) = planner_abc();

    // Direct planner call, not just the session guard: a "no move" must
    // not rewrite times from a neighbor or record a history step.
    planner.move_item_reflow(1, 1).unwrap();

    assert_eq!(planner.timeline().ordered_ids(), vec![a, b, c]);
    let item_b = planner.timeline().item(b).unwrap();
    assert_eq!(item_b.start_time, "10:00");
    assert_eq!(item_b.end_time, "10:30");
    assert_eq!(planner.undo_description(), Some("Add item"));
}

#[test]
fn test_hover_over_current_index_is_noop() {
    let (mut planner, ..) = planner_abc();
    let history_depth_before = planner.can_undo();

    let mut drag = planner.begin_drag(1).unwrap();
    drag.hover(&mut planner, 1).unwrap();

    assert_eq!(drag.index(), 1);
    assert_eq!(planner.can_undo(), history_depth_before);
    assert_eq!(planner.undo_description(), Some("Add item"));
}

#[test]
fn test_each_hover_is_one_undo_step() {
    let (mut planner, a, b, c) = planner_abc();

    let mut drag = planner.begin_drag(2).unwrap();
    drag.hover(&mut planner, 1).unwrap();
    drag.hover(&mut planner, 0).unwrap();
    assert_eq!(drag.index(), 0);

    // One undo reverses exactly one hover.
    planner.undo().unwrap();
    assert_eq!(planner.timeline().ordered_ids(), vec![a, c, b]);

    planner.undo().unwrap();
    assert_eq!(planner.timeline().ordered_ids(), vec![a, b, c]);
    let item_c = planner.timeline().item(c).unwrap();
    assert_eq!(item_c.start_time, "11:00");
    assert_eq!(item_c.end_time, "11:30");
}

#[test]
fn test_hover_tracks_index_across_moves() {
    let (mut planner, a, b, c) = planner_abc();

    let mut drag = planner.begin_drag(0).unwrap();
    drag.hover(&mut planner, 2).unwrap();
    assert_eq!(drag.index(), 2);

    // Dragging back computes relative to the new position.
    drag.hover(&mut planner, 0).unwrap();
    assert_eq!(drag.index(), 0);
    assert_eq!(planner.timeline().ordered_ids(), vec![a, b, c]);
}

#[test]
fn test_hover_out_of_bounds_surfaces_error() {
    let (mut planner, ..) = planner_abc();
    let mut drag = planner.begin_drag(0).unwrap();
    assert!(drag.hover(&mut planner, 7).is_err());
    // Session index untouched so the gesture can be abandoned cleanly.
    assert_eq!(drag.index(), 0);
}

#[test]
fn test_single_item_drag_is_inert() {
    let mut planner = Planner::new("Test");
    let id = planner.add_item(make_item("Solo", "09:00", "30")).unwrap();

    let mut drag = planner.begin_drag(0).unwrap();
    drag.hover(&mut planner, 0).unwrap();

    assert_eq!(planner.timeline().ordered_ids(), vec![id]);
    assert_eq!(planner.timeline().item(id).unwrap().start_time, "09:00");
}
