//! Human-readable spans for the history table.
//!
//! Units are calendar approximations (a month is 30 days, a year 365) and
//! only the two largest units are shown. Display only.

use chrono::{DateTime, TimeZone, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Format a span given in milliseconds, e.g. `1 day 1 hour`.
pub fn format_duration(millis: i64) -> String {
    let seconds = millis.max(0) / 1000;
    let days = seconds / DAY;

    if seconds >= YEAR {
        return with_remainder(seconds / YEAR, "year", (days % 365) / 30, "month");
    }
    if seconds >= MONTH {
        return with_remainder(seconds / MONTH, "month", days % 30, "day");
    }
    if seconds >= WEEK {
        return with_remainder(seconds / WEEK, "week", days % 7, "day");
    }
    if seconds >= DAY {
        return with_remainder(days, "day", (seconds / HOUR) % 24, "hour");
    }
    if seconds >= HOUR {
        return with_remainder(seconds / HOUR, "hour", (seconds / MINUTE) % 60, "minute");
    }
    if seconds >= MINUTE {
        return plural(seconds / MINUTE, "minute");
    }
    plural(seconds, "second")
}

fn with_remainder(count: i64, unit: &str, rest: i64, rest_unit: &str) -> String {
    if rest > 0 {
        format!("{} {}", plural(count, unit), plural(rest, rest_unit))
    } else {
        plural(count, unit)
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// `YYYY-MM-DD HH:MM:SS` in the given zone.
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.with_timezone(zone)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    const SEC: i64 = 1000;

    #[test]
    fn test_reference_values() {
        assert_eq!(format_duration(90_061_000), "1 day 1 hour");
        assert_eq!(format_duration(59_000), "59 seconds");
        assert_eq!(format_duration(61_000), "1 minute");
        assert_eq!(format_duration(3_600_000), "1 hour");
    }

    #[test]
    fn test_seconds_pluralization() {
        assert_eq!(format_duration(0), "0 seconds");
        assert_eq!(format_duration(999), "0 seconds");
        assert_eq!(format_duration(SEC), "1 second");
        assert_eq!(format_duration(2 * SEC), "2 seconds");
    }

    #[test]
    fn test_negative_span_clamps_to_zero() {
        assert_eq!(format_duration(-5 * SEC), "0 seconds");
    }

    #[test]
    fn test_minutes_have_no_remainder() {
        assert_eq!(format_duration(59 * 60 * SEC + 59 * SEC), "59 minutes");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(format_duration((2 * HOUR + 5 * MINUTE) * SEC), "2 hours 5 minutes");
        assert_eq!(format_duration((HOUR + MINUTE) * SEC), "1 hour 1 minute");
    }

    #[test]
    fn test_days_weeks_months_years() {
        assert_eq!(format_duration(2 * DAY * SEC), "2 days");
        assert_eq!(format_duration((WEEK + 3 * DAY) * SEC), "1 week 3 days");
        assert_eq!(format_duration(2 * WEEK * SEC), "2 weeks");
        assert_eq!(format_duration((MONTH + DAY) * SEC), "1 month 1 day");
        assert_eq!(format_duration(11 * MONTH * SEC), "11 months");
        assert_eq!(format_duration((YEAR + 2 * MONTH) * SEC), "1 year 2 months");
        assert_eq!(format_duration(3 * YEAR * SEC), "3 years");
    }

    #[test]
    fn test_format_timestamp_in_zone() {
        let time = Utc.with_ymd_and_hms(2024, 3, 9, 23, 5, 7).unwrap();
        assert_eq!(format_timestamp(&time, &Utc), "2024-03-09 23:05:07");

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_timestamp(&time, &plus_two), "2024-03-10 01:05:07");
    }
}
