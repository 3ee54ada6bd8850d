use uuid::Uuid;

use runsheet_core::clock;
use runsheet_core::timeline::Timeline;

/// Assert that the timeline holds exactly the given ids in the given order.
pub fn assert_item_order(timeline: &Timeline, expected: &[Uuid]) {
    let actual = timeline.ordered_ids();
    assert_eq!(
        actual, expected,
        "item order mismatch: got {actual:?}, expected {expected:?}"
    );
}

/// Assert that every item's end time equals its start time plus its
/// duration, wrapped at midnight.
pub fn assert_times_consistent(timeline: &Timeline) {
    for item in &timeline.items {
        let expected = clock::end_of(&item.start_time, &item.duration);
        assert_eq!(
            item.end_time, expected,
            "item {:?} ({}) has end {} but start {} + duration {} = {}",
            item.id, item.title, item.end_time, item.start_time, item.duration, expected
        );
    }
}

/// Assert that items are in ascending start-time order.
pub fn assert_sorted_by_start(timeline: &Timeline) {
    for window in timeline.items.windows(2) {
        assert!(
            window[0].start_minutes() <= window[1].start_minutes(),
            "items not sorted: {} ({}) should come before {} ({})",
            window[0].title,
            window[0].start_time,
            window[1].title,
            window[1].start_time
        );
    }
}

/// Assert an item's start and end times.
pub fn assert_item_times(timeline: &Timeline, id: Uuid, start: &str, end: &str) {
    let item = timeline
        .item(id)
        .unwrap_or_else(|| panic!("item {id:?} not found"));
    assert_eq!(item.start_time, start, "start time of {}", item.title);
    assert_eq!(item.end_time, end, "end time of {}", item.title);
}
