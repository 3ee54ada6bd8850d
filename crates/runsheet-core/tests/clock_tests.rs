use proptest::prelude::*;
use runsheet_core::clock::*;

#[test]
fn test_parse_time_basics() {
    assert_eq!(parse_time_to_minutes("00:00"), 0);
    assert_eq!(parse_time_to_minutes("09:05"), 545);
    assert_eq!(parse_time_to_minutes("23:59"), 1439);
}

#[test]
fn test_parse_time_malformed_falls_back_to_midnight() {
    assert_eq!(parse_time_to_minutes("garbage"), 0);
    assert_eq!(parse_time_to_minutes("ab:cd"), 0);
    assert_eq!(parse_time_to_minutes(""), 0);
    assert_eq!(parse_time_to_minutes(":"), 0);
}

#[test]
fn test_parse_time_wraps_overflowing_hours() {
    // "24:30" is out of range but tolerated; it wraps into the day.
    assert_eq!(parse_time_to_minutes("24:30"), 30);
}

#[test]
fn test_parse_time_huge_components_never_panic() {
    // Numeric but absurd hours wrap into the day instead of overflowing.
    let wrapped = parse_time_to_minutes("99999999:00");
    assert_eq!(wrapped, ((99_999_999i64 * 60).rem_euclid(1440)) as i32);
    assert!((0..1440).contains(&wrapped));

    // Components past i64 arithmetic fall back to midnight.
    assert_eq!(parse_time_to_minutes("9223372036854775807:59"), 0);
    assert_eq!(parse_time_to_minutes("999999999999999999999:00"), 0);
}

#[test]
fn test_shift_time_extreme_minutes_never_panics() {
    assert_eq!(shift_time("09:00", i32::MAX), "11:07");
    assert_eq!(shift_time("09:00", i32::MIN), "06:52");
}

#[test]
fn test_end_of_saturated_duration_stays_in_day() {
    let end = end_of("23:00", "999999999999h");
    assert!((0..1440).contains(&parse_time_to_minutes(&end)));
}

#[test]
fn test_format_wraps_at_midnight() {
    assert_eq!(format_minutes_to_time(0), "00:00");
    assert_eq!(format_minutes_to_time(1440), "00:00");
    assert_eq!(format_minutes_to_time(1440), format_minutes_to_time(0));
    assert_eq!(format_minutes_to_time(-30), "23:30");
    assert_eq!(format_minutes_to_time(1439), "23:59");
}

#[test]
fn test_duration_grammar() {
    assert_eq!(parse_duration_to_minutes("90"), 90);
    assert_eq!(parse_duration_to_minutes("1h 30m"), 90);
    assert_eq!(parse_duration_to_minutes("1.5h"), 90);
    assert_eq!(parse_duration_to_minutes("90m"), 90);
    assert_eq!(parse_duration_to_minutes("2h"), 120);
    assert_eq!(parse_duration_to_minutes("30 min"), 30);
    assert_eq!(parse_duration_to_minutes("garbage"), 0);
    assert_eq!(parse_duration_to_minutes(""), 0);
}

#[test]
fn test_shift_time_wraps_both_directions() {
    assert_eq!(shift_time("09:00", 15), "09:15");
    assert_eq!(shift_time("23:45", 30), "00:15");
    assert_eq!(shift_time("00:15", -30), "23:45");
}

proptest! {
    #[test]
    fn prop_round_trip_within_day(m in 0i32..1440) {
        prop_assert_eq!(parse_time_to_minutes(&format_minutes_to_time(m)), m);
    }

    #[test]
    fn prop_round_trip_any_input_wraps(m in -100_000i32..100_000) {
        prop_assert_eq!(
            parse_time_to_minutes(&format_minutes_to_time(m)),
            m.rem_euclid(MINUTES_PER_DAY)
        );
    }

    #[test]
    fn prop_shift_composes(m in 0i32..1440, a in -2000i32..2000, b in -2000i32..2000) {
        let start = format_minutes_to_time(m);
        let one_step = shift_time(&start, a + b);
        let two_steps = shift_time(&shift_time(&start, a), b);
        prop_assert_eq!(one_step, two_steps);
    }
}
