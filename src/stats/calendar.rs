//! Calendar helpers for streak and daily-reset logic
//!
//! Timestamps are Unix milliseconds. Every conversion takes the time zone
//! explicitly so "today" and "hour of day" are the user's, never the host's
//! by accident.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike};

/// Calendar date of a timestamp in `tz`.
///
/// Returns `None` if the timestamp is outside chrono's representable range.
pub fn date_of<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|utc| utc.with_timezone(tz).date_naive())
}

/// Hour of day (0-23) of a timestamp in `tz`.
pub fn hour_of<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> Option<u32> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|utc| utc.with_timezone(tz).hour())
}

/// Minutes between two timestamps, fractions included.
pub fn minutes_between(start_ms: i64, end_ms: i64) -> f64 {
    (end_ms - start_ms) as f64 / 1000.0 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_date_of_respects_time_zone() {
        // 2023-12-28 23:30:00 UTC
        let ts = 1_703_806_200_000;
        assert_eq!(date_of(ts, &Utc), NaiveDate::from_ymd_opt(2023, 12, 28));

        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(date_of(ts, &east), NaiveDate::from_ymd_opt(2023, 12, 29));
    }

    #[test]
    fn test_hour_of() {
        let ts = 1_703_806_200_000;
        assert_eq!(hour_of(ts, &Utc), Some(23));
        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(hour_of(ts, &west), Some(18));
    }

    #[test]
    fn test_minutes_between() {
        assert!((minutes_between(0, 50 * 60_000) - 50.0).abs() < f64::EPSILON);
        assert!((minutes_between(0, 90_000) - 1.5).abs() < f64::EPSILON);
    }
}
