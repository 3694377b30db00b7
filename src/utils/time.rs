//! Time utilities: parsing user supplied instants.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveTime, TimeZone};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse an instant given either as RFC3339 or as `HH:MM` on the day of `now`.
pub fn parse_instant(s: &str, now: DateTime<FixedOffset>) -> AppResult<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    let naive = now.date_naive().and_time(t);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}
