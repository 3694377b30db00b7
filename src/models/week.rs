use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// ISO 8601 (year, week) pair identifying a weekly report.
///
/// Ordering is chronological: by year, then by week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeekAnchor {
    pub year: i32,
    pub week: u32,
}

impl WeekAnchor {
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    /// ISO week of `at` in the given timezone.
    pub fn of<Tz: TimeZone, Z: TimeZone>(at: &DateTime<Z>, tz: &Tz) -> Self {
        let iso = at.with_timezone(tz).date_naive().iso_week();
        Self::new(iso.year(), iso.week())
    }

    /// Monday of this ISO week, if the week exists.
    pub fn monday(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
    }

    /// Parse `YYYY-Www` (e.g. `2024-W03`), also accepting `YYYY-ww`.
    pub fn parse(s: &str) -> AppResult<Self> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"^(\d{4})-[Ww]?(\d{1,2})$").expect("week pattern is valid")
        });

        let caps = re
            .captures(s.trim())
            .ok_or_else(|| AppError::InvalidWeek(s.to_string()))?;
        let year: i32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidWeek(s.to_string()))?;
        let week: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidWeek(s.to_string()))?;

        let anchor = Self::new(year, week);
        if anchor.monday().is_none() {
            return Err(AppError::InvalidWeek(s.to_string()));
        }
        Ok(anchor)
    }
}

impl fmt::Display for WeekAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}
