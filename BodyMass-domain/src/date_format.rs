//! Display formatting of stored `created_at` values.
//!
//! Stored timestamps are free-form text. They are parsed leniently and
//! rendered in their own wall-clock time; no timezone conversion happens.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Layout used in the measurement history, e.g. `05/01/2024 - 14:30`
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y - %H:%M";

/// Date-time layouts that carry a UTC offset
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M%:z",
];

/// Date-time layouts without an offset
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date formatting errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    /// The text is not a recognizable date-time
    #[error("Unrecognized timestamp: {0:?}")]
    Unrecognized(String),
}

/// Parse a stored timestamp into its wall-clock date-time
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, DateFormatError> {
    let text = raw.trim();

    // A trailing `Z` means UTC
    let normalized = match text.strip_suffix('Z').or_else(|| text.strip_suffix('z')) {
        Some(rest) => format!("{}+00:00", rest),
        None => text.to_string(),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(parsed.naive_local());
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(&normalized, format) {
            return Ok(parsed.naive_local());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DateFormatError::Unrecognized(raw.to_string()))
}

/// Render a stored timestamp as `DD/MM/YYYY - HH:MM`
pub fn format_timestamp(raw: &str) -> Result<String, DateFormatError> {
    Ok(parse_timestamp(raw)?.format(DISPLAY_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_iso_timestamp() {
        assert_eq!(format_timestamp("2024-01-05T14:30:00").unwrap(), "05/01/2024 - 14:30");
    }

    #[test]
    fn test_stored_timestamp_keeps_wall_clock() {
        assert_eq!(
            format_timestamp("2024-01-05 14:30:00.123456-05:00").unwrap(),
            "05/01/2024 - 14:30"
        );
        assert_eq!(
            format_timestamp("2024-07-04 09:05:59.999999-04:00").unwrap(),
            "04/07/2024 - 09:05"
        );
    }

    #[test]
    fn test_utc_designator() {
        assert_eq!(format_timestamp("2024-01-05T19:30:00Z").unwrap(), "05/01/2024 - 19:30");
        assert_eq!(format_timestamp("2024-01-05T19:30:00.250Z").unwrap(), "05/01/2024 - 19:30");
    }

    #[test]
    fn test_sqlite_current_timestamp_layout() {
        assert_eq!(format_timestamp("2023-12-31 23:59:00").unwrap(), "31/12/2023 - 23:59");
    }

    #[test]
    fn test_minutes_only_and_bare_date() {
        assert_eq!(format_timestamp("2024-02-29 08:07").unwrap(), "29/02/2024 - 08:07");
        assert_eq!(format_timestamp("2024-02-29").unwrap(), "29/02/2024 - 00:00");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(format_timestamp("  2024-01-05T14:30:00  ").unwrap(), "05/01/2024 - 14:30");
    }

    #[test]
    fn test_unrecognized_input() {
        assert_eq!(
            format_timestamp("not a date"),
            Err(DateFormatError::Unrecognized("not a date".to_string()))
        );
        assert!(format_timestamp("").is_err());
        assert!(format_timestamp("2024-13-40 25:61:00").is_err());
    }
}
