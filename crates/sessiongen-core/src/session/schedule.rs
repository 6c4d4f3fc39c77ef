//! Timestamp parsing and the fixed display formats.

use chrono::{DateTime, Utc};

use crate::error::{Result, SessionGenError};

/// 12-hour clock, unpadded hour, lowercase meridiem: `5:30 pm`.
const TIME_FORMAT: &str = "%-I:%M %P";

/// Weekday name and ISO date: `Monday 2012-04-23`.
const DATE_FORMAT: &str = "%A %Y-%m-%d";

/// Parses an ISO-8601 timestamp and normalizes it to UTC.
///
/// `field` names the record key in the error.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| SessionGenError::invalid_timestamp(field, value, e.to_string()))
}

pub fn format_time(at: &DateTime<Utc>) -> String {
    at.format(TIME_FORMAT).to_string()
}

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_afternoon_time_and_date() {
        let at = parse_timestamp("starts_at", "2012-04-23T17:30:00Z").unwrap();
        assert_eq!(format_time(&at), "5:30 pm");
        assert_eq!(format_date(&at), "Monday 2012-04-23");
    }

    #[test]
    fn test_midnight_and_noon() {
        let midnight = parse_timestamp("starts_at", "2012-04-24T00:05:00Z").unwrap();
        assert_eq!(format_time(&midnight), "12:05 am");
        assert_eq!(format_date(&midnight), "Tuesday 2012-04-24");

        let noon = parse_timestamp("starts_at", "2012-04-24T12:00:00Z").unwrap();
        assert_eq!(format_time(&noon), "12:00 pm");
    }

    #[test]
    fn test_morning_hour_has_no_leading_zero() {
        let at = parse_timestamp("starts_at", "2012-04-25T09:05:00Z").unwrap();
        assert_eq!(format_time(&at), "9:05 am");
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        let at = parse_timestamp("starts_at", "2012-04-23T12:30:00-05:00").unwrap();
        assert_eq!(format_time(&at), "5:30 pm");
    }

    #[test]
    fn test_unparseable_timestamp_is_rejected() {
        let err = parse_timestamp("ends_at", "next tuesday").unwrap_err();
        assert!(err.is_invalid_timestamp());
        match err {
            SessionGenError::InvalidTimestamp { field, value, .. } => {
                assert_eq!(field, "ends_at");
                assert_eq!(value, "next tuesday");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_timestamp_is_rejected() {
        assert!(parse_timestamp("starts_at", "").is_err());
    }
}
