//! Slot-time parsing and normalization.
//!
//! Admins enter a calendar date and a wall-clock time in their own zone.
//! Every write path (create and reschedule) funnels through
//! [`normalize_slot_time`] so the stored instant is always UTC.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Accepted date format (`<input type="date">`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted time formats (`<input type="time">`, with or without seconds).
pub const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Largest UTC offset any real zone uses, in minutes (UTC+14:00).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Parse a required `YYYY-MM-DD` date field.
pub fn parse_slot_date(raw: Option<&str>) -> Result<NaiveDate, CoreError> {
    let raw = required(raw, "date")?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| CoreError::Validation(format!("Invalid date '{raw}'. Expected YYYY-MM-DD")))
}

/// Parse a required `HH:MM` (or `HH:MM:SS`) time field.
pub fn parse_slot_time(raw: Option<&str>) -> Result<NaiveTime, CoreError> {
    let raw = required(raw, "time")?;
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| CoreError::Validation(format!("Invalid time '{raw}'. Expected HH:MM")))
}

/// Validate a caller's UTC offset (minutes east of UTC, e.g. `420` for UTC+7).
pub fn validate_utc_offset(minutes: i32) -> Result<FixedOffset, CoreError> {
    if minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(CoreError::Validation(format!(
            "UTC offset {minutes} is out of range (±{MAX_UTC_OFFSET_MINUTES} minutes)"
        )));
    }
    FixedOffset::east_opt(minutes * 60)
        .ok_or_else(|| CoreError::Validation(format!("Invalid UTC offset {minutes}")))
}

/// Combine a local date and time entered at `utc_offset_minutes` into a UTC instant.
///
/// Both fields are required; a missing or blank field is a validation error.
pub fn normalize_slot_time(
    date: Option<&str>,
    time: Option<&str>,
    utc_offset_minutes: i32,
) -> Result<Timestamp, CoreError> {
    let date = parse_slot_date(date)?;
    let time = parse_slot_time(time)?;
    let offset = validate_utc_offset(utc_offset_minutes)?;
    to_utc(NaiveDateTime::new(date, time), offset)
}

fn to_utc(local: NaiveDateTime, offset: FixedOffset) -> Result<Timestamp, CoreError> {
    offset
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| CoreError::Validation(format!("Time {local} does not exist at {offset}")))
}

fn required<'a>(raw: Option<&'a str>, field: &str) -> Result<&'a str, CoreError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CoreError::Validation(format!(
            "Please select both date and time for the slot ({field} is missing)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Duration;

    use super::*;

    fn utc(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn utc_input_is_stored_unchanged() {
        let ts = normalize_slot_time(Some("2025-01-10"), Some("09:30"), 0).unwrap();
        assert_eq!(ts, utc("2025-01-10T09:30:00Z"));
    }

    #[test]
    fn east_offset_moves_instant_back() {
        // 09:30 at UTC+7 is 02:30 UTC.
        let ts = normalize_slot_time(Some("2025-01-10"), Some("09:30"), 420).unwrap();
        assert_eq!(ts, utc("2025-01-10T02:30:00Z"));
    }

    #[test]
    fn west_offset_can_cross_midnight() {
        // 22:00 at UTC-5 is 03:00 UTC the next day.
        let ts = normalize_slot_time(Some("2025-01-10"), Some("22:00"), -300).unwrap();
        assert_eq!(ts, utc("2025-01-11T03:00:00Z"));
    }

    #[test]
    fn seconds_are_accepted() {
        let ts = normalize_slot_time(Some("2025-03-01"), Some("10:00:15"), 0).unwrap();
        assert_eq!(ts, utc("2025-03-01T10:00:15Z"));
    }

    #[test]
    fn same_instant_from_any_zone_normalizes_identically() {
        // 2025-01-10T09:30Z written as local wall-clock time in several zones.
        let expected = utc("2025-01-10T09:30:00Z");
        for offset in [-600, -300, -180, 0, 60, 330, 420, 545, 780] {
            let local = (expected + Duration::minutes(i64::from(offset))).naive_utc();
            let date = local.format(DATE_FORMAT).to_string();
            let time = local.format("%H:%M").to_string();
            let ts = normalize_slot_time(Some(&date), Some(&time), offset).unwrap();
            assert_eq!(ts, expected, "offset {offset}");
        }
    }

    #[test]
    fn ordering_follows_instants_not_wall_clock() {
        // 10:00 at UTC+9 happens before 08:00 at UTC+0.
        let tokyo = normalize_slot_time(Some("2025-01-10"), Some("10:00"), 540).unwrap();
        let london = normalize_slot_time(Some("2025-01-10"), Some("08:00"), 0).unwrap();
        assert!(tokyo < london);
    }

    #[test]
    fn missing_date_rejected() {
        let err = normalize_slot_time(None, Some("09:30"), 0).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("date"));
    }

    #[test]
    fn blank_time_rejected() {
        let err = normalize_slot_time(Some("2025-01-10"), Some("  "), 0).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("time"));
    }

    #[test]
    fn malformed_fields_rejected() {
        assert_matches!(
            normalize_slot_time(Some("10/01/2025"), Some("09:30"), 0),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            normalize_slot_time(Some("2025-01-10"), Some("9.30am"), 0),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            normalize_slot_time(Some("2025-02-30"), Some("09:30"), 0),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn offset_bounds() {
        assert!(validate_utc_offset(MAX_UTC_OFFSET_MINUTES).is_ok());
        assert!(validate_utc_offset(-MAX_UTC_OFFSET_MINUTES).is_ok());
        assert!(validate_utc_offset(MAX_UTC_OFFSET_MINUTES + 1).is_err());
        assert!(validate_utc_offset(-24 * 60).is_err());
    }
}
