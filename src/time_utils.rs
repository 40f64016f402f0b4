// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for timestamps stored on records.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current time as a record timestamp.
pub fn now_rfc3339() -> String {
    format_utc_rfc3339(Utc::now())
}

/// Whether an RFC3339 timestamp falls on the same UTC calendar day as `now`.
///
/// Unparseable timestamps never match.
pub fn is_same_utc_day(timestamp: &str, now: DateTime<Utc>) -> bool {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc).date_naive() == now.date_naive())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_z_suffix() {
        let date = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2026-01-02T03:04:05Z");
    }

    #[test]
    fn test_same_day_converts_offsets() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).unwrap();
        assert!(is_same_utc_day("2026-01-02T00:00:00Z", now));
        // 23:30 on the 1st at -02:00 is 01:30 UTC on the 2nd
        assert!(is_same_utc_day("2026-01-01T23:30:00-02:00", now));
        assert!(!is_same_utc_day("2026-01-01T23:59:59Z", now));
        assert!(!is_same_utc_day("yesterday", now));
    }
}
