// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 at whole-second precision with a
/// `Z` suffix. Stored dates all use this format so that lexicographic
/// order on the strings matches chronological order.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a UTC timestamp as a calendar-day string, e.g. `Wed Jan 01 2020`.
/// The time-of-day component does not affect the output.
pub fn format_day_string(date: DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_string_ignores_time_of_day() {
        let midnight = DateTime::parse_from_rfc3339("2020-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let evening = DateTime::parse_from_rfc3339("2020-01-01T21:45:09Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(format_day_string(midnight), "Wed Jan 01 2020");
        assert_eq!(format_day_string(evening), "Wed Jan 01 2020");
    }

    #[test]
    fn test_rfc3339_is_whole_second() {
        let with_nanos = DateTime::parse_from_rfc3339("2020-01-01T08:30:00.123456Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_utc_rfc3339(with_nanos), "2020-01-01T08:30:00Z");
    }
}
