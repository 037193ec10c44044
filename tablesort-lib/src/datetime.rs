//! `DD.MM.YYYY[ HH:MM]` date-time grammar.

use std::sync::LazyLock;

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use regex::Regex;

// Anchored at the start only: anything after a complete match is ignored.
static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})(?:\s+([0-9]{2}):([0-9]{2}))?")
        .expect("date-time pattern is valid")
});

/// Parse a day-month-year date with an optional hour and minute.
///
/// Leading and trailing whitespace is ignored. A missing time of day means
/// midnight. Returns `None` for text that does not match the grammar or
/// names an impossible date or time (`31.02.2024`, `12.01.2024 25:00`).
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let caps = DATE_TIME.captures(text.trim())?;

    let field = |idx: usize| caps.get(idx).and_then(|m| m.as_str().parse::<u32>().ok());
    let day = field(1)?;
    let month = field(2)?;
    let year = i32::try_from(field(3)?).ok()?;
    let hour = field(4).unwrap_or(0);
    let minute = field(5).unwrap_or(0);

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

/// Milliseconds since the Unix epoch for a date-time in the grammar above,
/// read as UTC.
pub fn timestamp_millis(text: &str) -> Option<i64> {
    parse_date_time(text).map(|dt| dt.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only_defaults_to_midnight() {
        let dt = parse_date_time("31.12.2024").unwrap();
        assert_eq!(dt.to_string(), "2024-12-31 00:00:00");
    }

    #[test]
    fn test_parse_date_with_time() {
        let dt = parse_date_time("  01.02.2023   08:45 ").unwrap();
        assert_eq!(dt.to_string(), "2023-02-01 08:45:00");
    }

    #[test]
    fn test_timestamp_is_utc_millis() {
        assert_eq!(timestamp_millis("01.01.1970"), Some(0));
        assert_eq!(timestamp_millis("01.01.1970 00:01"), Some(60_000));
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        assert_eq!(
            parse_date_time("31.12.2024 08:00 CET"),
            parse_date_time("31.12.2024 08:00")
        );
        // A short time is not part of the grammar; the date alone still matches.
        assert_eq!(parse_date_time("31.12.2024 8:00"), parse_date_time("31.12.2024"));
    }

    #[test]
    fn test_rejects_other_formats() {
        assert_eq!(parse_date_time("2024-12-31"), None);
        assert_eq!(parse_date_time("1.1.2024"), None);
        assert_eq!(parse_date_time("31/12/2024"), None);
        assert_eq!(parse_date_time(""), None);
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert_eq!(parse_date_time("31.02.2024"), None);
        assert_eq!(parse_date_time("00.01.2024"), None);
        assert_eq!(parse_date_time("12.13.2024"), None);
        assert_eq!(parse_date_time("12.01.2024 25:00"), None);
        assert!(parse_date_time("29.02.2024").is_some());
    }
}
