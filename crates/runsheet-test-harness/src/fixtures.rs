use runsheet_core::planner::Planner;
use runsheet_core::timeline::WeddingInfoPatch;

use crate::builders::{PlannerBuilder, TimelineItemBuilder};

/// A canned wedding-day planner: six items across getting-ready, ceremony
/// and reception categories, times already consistent.
pub fn sample_wedding_day() -> Planner {
    let mut planner = PlannerBuilder::new("Dana & Sam")
        .with_item(
            TimelineItemBuilder::new("Hair & makeup")
                .starting_at("08:00")
                .lasting("2h")
                .in_category("Getting Ready")
                .build(),
        )
        .with_item(
            TimelineItemBuilder::new("First look photos")
                .starting_at("10:30")
                .lasting("45")
                .in_category("Getting Ready")
                .with_vendor("Willow Lane Photography")
                .build(),
        )
        .with_item(
            TimelineItemBuilder::new("Ceremony")
                .starting_at("12:00")
                .lasting("30")
                .in_category("Ceremony")
                .at_location("Garden terrace")
                .build(),
        )
        .with_item(
            TimelineItemBuilder::new("Cocktail hour")
                .starting_at("12:30")
                .lasting("1h")
                .in_category("Reception")
                .build(),
        )
        .with_item(
            TimelineItemBuilder::new("Dinner service")
                .starting_at("13:30")
                .lasting("1h 30m")
                .in_category("Reception")
                .with_vendor("Fig & Thyme Catering")
                .build(),
        )
        .with_item(
            TimelineItemBuilder::new("First dance")
                .starting_at("15:00")
                .lasting("15")
                .in_category("Reception")
                .build(),
        )
        .build();

    planner.update_wedding_info(&WeddingInfoPatch {
        names: Some("Dana & Sam".into()),
        date: Some("2026-06-20".into()),
        location: Some("Alder Hill Estate".into()),
        ..Default::default()
    });
    planner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::{assert_sorted_by_start, assert_times_consistent};

    #[test]
    fn test_sample_wedding_day() {
        let planner = sample_wedding_day();
        assert_eq!(planner.timeline().len(), 6);
        assert!(!planner.can_undo(), "fixture must start with empty history");
        assert_times_consistent(planner.timeline());
        assert_sorted_by_start(planner.timeline());
        assert_eq!(planner.timeline().wedding_info.date, "2026-06-20");
    }
}
