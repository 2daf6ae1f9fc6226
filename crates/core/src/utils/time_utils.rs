use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::errors::{Result, ValidationError};

/// Default timezone for dashboard dates.
/// This is the canonical timezone used to decide what "today" is when the
/// projected series is anchored against the current date.
pub const DEFAULT_DASHBOARD_TZ: Tz = chrono_tz::Asia::Kolkata;

/// Format used for chart axis labels, e.g. `01/Aug/2024`.
pub const CHART_LABEL_FORMAT: &str = "%d/%b/%Y";

/// Converts a UTC instant to a calendar date in the given timezone.
pub fn dashboard_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default dashboard timezone.
pub fn dashboard_date_today() -> NaiveDate {
    dashboard_date_from_utc(Utc::now(), DEFAULT_DASHBOARD_TZ)
}

pub fn format_chart_label(date: NaiveDate) -> String {
    date.format(CHART_LABEL_FORMAT).to_string()
}

/// Parses a backend-encoded date into a calendar date.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps (the date part is taken in
/// UTC) and naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps.
pub fn parse_backend_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc).date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.date());
    }

    Err(ValidationError::DateParse(raw.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_chart_label() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        assert_eq!(format_chart_label(date), "01/Aug/2024");
    }

    #[test]
    fn test_parse_backend_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        assert_eq!(parse_backend_date("2024-07-15").unwrap(), expected);
        assert_eq!(parse_backend_date("2024-07-15T00:00:00.000Z").unwrap(), expected);
        assert_eq!(parse_backend_date("2024-07-15T10:30:00").unwrap(), expected);
        assert_eq!(parse_backend_date(" 2024-07-15 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_backend_date_rejects_garbage() {
        assert!(parse_backend_date("15/07/2024").is_err());
        assert!(parse_backend_date("").is_err());
    }

    #[test]
    fn test_dashboard_date_uses_timezone() {
        // 20:00 UTC is already the next day in Kolkata (UTC+05:30)
        let instant = DateTime::parse_from_rfc3339("2024-07-31T20:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            dashboard_date_from_utc(instant, DEFAULT_DASHBOARD_TZ),
            NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
        );
    }
}
