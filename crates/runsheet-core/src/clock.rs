use tracing::warn;

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parse a `"HH:MM"` clock string into minutes since midnight, wrapped
/// into `0..1440`.
///
/// Malformed input logs a warning and falls back to `0`. Callers cannot
/// distinguish that fallback from a legitimate midnight value; the engine
/// deliberately favors availability over strictness for legacy data.
pub fn parse_time_to_minutes(s: &str) -> i32 {
    let mut parts = s.splitn(2, ':');
    let (Some(hours), Some(minutes)) = (parts.next(), parts.next()) else {
        warn!(input = s, "time string missing ':' separator, using 00:00");
        return 0;
    };
    // Widen to i64 so absurd-but-numeric components cannot overflow.
    match (hours.trim().parse::<i64>(), minutes.trim().parse::<i64>()) {
        (Ok(h), Ok(m)) => match h.checked_mul(60).and_then(|t| t.checked_add(m)) {
            Some(total) => total.rem_euclid(MINUTES_PER_DAY as i64) as i32,
            None => {
                warn!(input = s, "time component too large, using 00:00");
                0
            }
        },
        _ => {
            warn!(input = s, "unparseable time string, using 00:00");
            0
        }
    }
}

/// Parse a free-form duration string into whole minutes.
///
/// Accepts a bare number (`"90"`, `"7.5"`, interpreted as minutes) or any
/// combination of `<n>h` / `<n>m` tokens (`"1h 30m"`, `"1.5h"`, `"90m"`).
/// Fractional values are rounded to the nearest minute. Strings with no
/// recognizable token log a warning and yield `0`.
pub fn parse_duration_to_minutes(s: &str) -> i32 {
    let trimmed = s.trim();
    if let Ok(minutes) = trimmed.parse::<f64>() {
        return (minutes.round() as i32).max(0);
    }

    let mut total = 0.0f64;
    let mut matched = false;
    let mut number = String::new();
    for c in trimmed.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
        } else if c == 'h' || c == 'H' {
            if let Ok(v) = number.parse::<f64>() {
                total += v * 60.0;
                matched = true;
            }
            number.clear();
        } else if c == 'm' || c == 'M' {
            if let Ok(v) = number.parse::<f64>() {
                total += v;
                matched = true;
            }
            number.clear();
        } else if !c.is_whitespace() {
            number.clear();
        }
    }

    if !matched {
        warn!(input = s, "unparseable duration string, using 0 minutes");
        return 0;
    }
    (total.round() as i32).max(0)
}

/// Format minutes-since-midnight as a zero-padded `"HH:MM"` string,
/// wrapping modulo 24 hours. Negative inputs normalize into the day, so
/// `-30` formats as `"23:30"`.
pub fn format_minutes_to_time(total: i32) -> String {
    let wrapped = total.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Shift a `"HH:MM"` time by a signed number of minutes, wrapping at
/// midnight in both directions.
pub fn shift_time(start: &str, minutes: i32) -> String {
    let total = parse_time_to_minutes(start) as i64 + minutes as i64;
    format_minutes_to_time(total.rem_euclid(MINUTES_PER_DAY as i64) as i32)
}

/// Compute the end time for an event given its start and duration strings.
pub fn end_of(start: &str, duration: &str) -> String {
    let total = parse_time_to_minutes(start) as i64 + parse_duration_to_minutes(duration) as i64;
    format_minutes_to_time(total.rem_euclid(MINUTES_PER_DAY as i64) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_durations_are_minutes() {
        assert_eq!(parse_duration_to_minutes("90"), 90);
        assert_eq!(parse_duration_to_minutes("7.5"), 8);
    }

    #[test]
    fn end_of_wraps_past_midnight() {
        assert_eq!(end_of("23:30", "45"), "00:15");
    }
}
