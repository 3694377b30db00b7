use super::entry_kind::EntryKind;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone};

/// One journal record.
///
/// For Work/Break `at` is the start of the interval and `at + dur` its end.
/// Lifecycle entries (Created/Deleted) carry a zero duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub activity: String,
    pub kind: EntryKind,
    pub at: DateTime<FixedOffset>,
    pub dur: Duration,
}

impl Entry {
    pub fn new(activity: impl Into<String>, kind: EntryKind, at: DateTime<FixedOffset>, dur: Duration) -> Self {
        Self {
            activity: activity.into(),
            kind,
            at,
            dur,
        }
    }

    /// Lifecycle entry at `at`.
    pub fn lifecycle(activity: impl Into<String>, kind: EntryKind, at: DateTime<FixedOffset>) -> Self {
        Self::new(activity, kind, at, Duration::zero())
    }

    /// Instant used when a lifecycle line carries no readable timestamp.
    pub fn zero_instant() -> DateTime<FixedOffset> {
        DateTime::<FixedOffset>::default()
    }

    /// Activity names are single non-blank lines.
    pub fn validate_activity(name: &str) -> AppResult<&str> {
        if name.trim().is_empty() || name.contains(['\n', '\r']) {
            return Err(AppError::InvalidActivity(name.to_string()));
        }
        Ok(name)
    }

    pub fn is_timed(&self) -> bool {
        self.kind.is_timed()
    }

    /// Calendar day of `at` as seen from `tz`.
    pub fn day_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.at.with_timezone(tz).date_naive()
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.at + self.dur
    }
}
