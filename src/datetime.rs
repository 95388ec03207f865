//! Date/Time Adapter
//!
//! Converts server timestamps into table text and form input values.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

/// Shown for a missing timestamp
pub const NOT_AVAILABLE: &str = "N/A";
/// Shown for a timestamp that does not parse
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";
const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a server timestamp. Values without an offset are read as UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Human-readable text for a table cell, e.g. `Dec 6, 2024, 3:30 PM`.
pub fn format_display(raw: Option<&str>, offset: FixedOffset) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => NOT_AVAILABLE.to_string(),
        Some(s) => match parse_instant(s) {
            Some(instant) => instant.with_timezone(&offset).format(DISPLAY_FORMAT).to_string(),
            None => INVALID_DATE.to_string(),
        },
    }
}

/// Value for an `<input type="date">`: the calendar part of the timestamp.
pub fn to_date_input(raw: &str) -> String {
    raw.split_once('T').map_or(raw, |(date, _)| date).to_string()
}

/// Value for an `<input type="datetime-local">`, minute precision, UTC.
pub fn to_datetime_input(raw: Option<&str>) -> String {
    raw.and_then(parse_instant)
        .map(|instant| instant.format(DATETIME_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// UTC offset of the viewer's browser.
#[cfg(target_arch = "wasm32")]
pub fn viewer_offset() -> FixedOffset {
    offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset())
}

/// `Date.getTimezoneOffset` is UTC minus local, in whole minutes.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn offset_from_js_minutes(minutes: f64) -> FixedOffset {
    FixedOffset::west_opt(minutes as i32 * 60).unwrap_or_else(|| Utc.fix())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewer_offset() -> FixedOffset {
    Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        Utc.fix()
    }

    #[test]
    fn test_display_format() {
        let text = format_display(Some("2024-12-06T15:30:00.000Z"), utc());
        assert_eq!(text, "Dec 6, 2024, 3:30 PM");
    }

    #[test]
    fn test_display_shifts_to_viewer_offset() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let text = format_display(Some("2024-12-06T15:30:00.000Z"), est);
        assert_eq!(text, "Dec 6, 2024, 10:30 AM");
    }

    #[test]
    fn test_display_missing_and_invalid() {
        assert_eq!(format_display(None, utc()), "N/A");
        assert_eq!(format_display(Some(""), utc()), "N/A");
        assert_eq!(format_display(Some("next tuesday"), utc()), "Invalid Date");
    }

    #[test]
    fn test_display_midnight_and_noon() {
        assert_eq!(format_display(Some("2025-01-01T00:05:00Z"), utc()), "Jan 1, 2025, 12:05 AM");
        assert_eq!(format_display(Some("2025-07-14T12:00:00Z"), utc()), "Jul 14, 2025, 12:00 PM");
    }

    #[test]
    fn test_offset_from_js_minutes() {
        // UTC-5 reports 300, UTC+5:30 reports -330
        assert_eq!(offset_from_js_minutes(300.0), FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(offset_from_js_minutes(-330.0), FixedOffset::east_opt(19_800).unwrap());
        assert_eq!(offset_from_js_minutes(0.0), utc());
        // out of range falls back to UTC
        assert_eq!(offset_from_js_minutes(100_000.0), utc());
    }

    #[test]
    fn test_date_input() {
        assert_eq!(to_date_input("2024-12-06T00:00:00.000Z"), "2024-12-06");
        assert_eq!(to_date_input("1990-03-15"), "1990-03-15");
    }

    #[test]
    fn test_datetime_input() {
        assert_eq!(to_datetime_input(Some("2024-12-06T15:30:45.123Z")), "2024-12-06T15:30");
        assert_eq!(to_datetime_input(Some("2024-12-06T16:30:00+01:00")), "2024-12-06T15:30");
        assert_eq!(to_datetime_input(Some("2024-12-06T15:30")), "2024-12-06T15:30");
        assert_eq!(to_datetime_input(None), "");
        assert_eq!(to_datetime_input(Some("garbage")), "");
    }
}
