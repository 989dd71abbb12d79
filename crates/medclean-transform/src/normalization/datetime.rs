//! Calendar date parsing for admission dates.
//!
//! Handles the common ISO, slash, and month-name layouts. Numeric day/month
//! ambiguity resolves month-first.

use chrono::{NaiveDate, NaiveDateTime};

/// Format used for dates in cleaned output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date or datetime string into a calendar date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    try_parse_date(trimmed).or_else(|| try_parse_datetime(trimmed).map(|dt| dt.date()))
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse and re-format a date string, or None when unparseable.
pub fn normalize_date(value: &str) -> Option<String> {
    parse_calendar_date(value).map(format_date)
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
    ];

    for fmt in &formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    None
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",  // US: 01/15/2024
        "%d/%m/%Y",  // 15/01/2024, only reached when month-first fails
        "%d-%b-%Y",  // 15-Jan-2024
        "%d-%B-%Y",  // 15-January-2024
        "%d.%m.%Y",  // 15.01.2024
        "%Y%m%d",    // 20240115
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
    ];

    for fmt in &formats {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_and_slash_dates() {
        assert_eq!(parse_calendar_date("2023-05-17"), Some(ymd(2023, 5, 17)));
        assert_eq!(parse_calendar_date("2023/05/17"), Some(ymd(2023, 5, 17)));
        assert_eq!(parse_calendar_date("05/17/2023"), Some(ymd(2023, 5, 17)));
    }

    #[test]
    fn month_first_wins_when_ambiguous() {
        assert_eq!(parse_calendar_date("03/04/2023"), Some(ymd(2023, 3, 4)));
        assert_eq!(parse_calendar_date("17/05/2023"), Some(ymd(2023, 5, 17)));
    }

    #[test]
    fn datetime_keeps_date_part() {
        assert_eq!(
            parse_calendar_date("2024-01-15 10:30:00"),
            Some(ymd(2024, 1, 15))
        );
        assert_eq!(
            parse_calendar_date("2024-01-15T10:30"),
            Some(ymd(2024, 1, 15))
        );
    }

    #[test]
    fn month_names() {
        assert_eq!(parse_calendar_date("15-Jan-2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_calendar_date("Jan 15, 2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn unparseable_is_none() {
        assert_eq!(parse_calendar_date("not a date"), None);
        assert_eq!(parse_calendar_date("2023-13-45"), None);
        assert_eq!(parse_calendar_date(""), None);
    }

    #[test]
    fn normalize_formats_iso() {
        assert_eq!(normalize_date("1/5/2024").as_deref(), Some("2024-01-05"));
    }
}
