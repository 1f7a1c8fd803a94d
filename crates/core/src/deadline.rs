//! Parsing of client-supplied task deadlines.
//!
//! Clients send deadlines as strings straight from date pickers and
//! datetime-local inputs, so several shapes are accepted. Values carrying a
//! UTC offset are converted to UTC before the zone is dropped.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CoreError;
use crate::types::Deadline;

/// Zone-less formats tried in order after RFC 3339.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Years a `TIMESTAMP` column round-trips for every accepted shape.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parse an optional deadline string.
///
/// `None`, empty and whitespace-only input mean "no deadline". Years outside
/// `1..=9999` are rejected even when chrono can represent them.
pub fn parse_deadline(raw: Option<&str>) -> Result<Option<Deadline>, CoreError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(s) => s,
    };

    match parse_shapes(raw) {
        Some(dt) if YEAR_RANGE.contains(&dt.year()) => Ok(Some(dt)),
        Some(dt) => Err(CoreError::Validation(format!(
            "Invalid deadline '{raw}': year {} is out of range",
            dt.year()
        ))),
        None => Err(CoreError::Validation(format!(
            "Invalid deadline '{raw}': expected an ISO 8601 date or date-time"
        ))),
    }
}

fn parse_shapes(raw: &str) -> Option<Deadline> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Deadline {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn empty_input_is_no_deadline() {
        assert_eq!(parse_deadline(None).unwrap(), None);
        assert_eq!(parse_deadline(Some("")).unwrap(), None);
        assert_eq!(parse_deadline(Some("  ")).unwrap(), None);
    }

    #[test]
    fn bare_date_is_midnight() {
        assert_eq!(
            parse_deadline(Some("2025-03-01")).unwrap(),
            Some(at(2025, 3, 1, 0, 0, 0))
        );
    }

    #[test]
    fn datetime_local_without_seconds() {
        assert_eq!(
            parse_deadline(Some("2025-03-01T09:30")).unwrap(),
            Some(at(2025, 3, 1, 9, 30, 0))
        );
    }

    #[test]
    fn sql_style_datetime() {
        assert_eq!(
            parse_deadline(Some("2025-03-01 09:30:15")).unwrap(),
            Some(at(2025, 3, 1, 9, 30, 15))
        );
    }

    #[test]
    fn rfc3339_offset_is_converted_to_utc() {
        assert_eq!(
            parse_deadline(Some("2025-03-01T09:30:00+02:00")).unwrap(),
            Some(at(2025, 3, 1, 7, 30, 0))
        );
        assert_eq!(
            parse_deadline(Some("2025-03-01T09:30:00.000Z")).unwrap(),
            Some(at(2025, 3, 1, 9, 30, 0))
        );
    }

    #[test]
    fn garbage_is_a_validation_error() {
        assert_matches!(
            parse_deadline(Some("next tuesday")),
            Err(CoreError::Validation(msg)) if msg.contains("next tuesday")
        );
        assert_matches!(
            parse_deadline(Some("2025-13-01")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn out_of_range_years_are_validation_errors() {
        for raw in ["-5000-01-01", "0000-06-01", "9999-12-31T23:00:00-05:00"] {
            assert_matches!(
                parse_deadline(Some(raw)),
                Err(CoreError::Validation(msg)) if msg.contains("out of range"),
                "{raw} should be rejected"
            );
        }
        assert_eq!(
            parse_deadline(Some("9999-12-31T23:59:59")).unwrap(),
            Some(at(9999, 12, 31, 23, 59, 59))
        );
        assert_eq!(
            parse_deadline(Some("0001-01-01")).unwrap(),
            Some(at(1, 1, 1, 0, 0, 0))
        );
    }
}
