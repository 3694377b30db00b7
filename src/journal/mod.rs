//! The journal engine: append-only entry log, session buffer and the
//! cursor replaying both. [`Journal`] is the API the front end talks to.

pub mod codec;
pub mod cursor;
pub mod session;
pub mod store;

pub use cursor::Cursor;
pub use session::SessionBuffer;
pub use store::LogStore;

use crate::core::{self, ShrinkStats};
use crate::errors::AppResult;
use crate::models::{Entry, EntryKind, Overview, Tally, WeekAnchor, WeekReport, YearReport};
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, TimeZone, Utc};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Time tracking engine bound to one journal file.
///
/// `Tz` decides what "day", "week" and "year" mean for every report.
pub struct Journal<Tz: TimeZone = Local> {
    cursor: Cursor,
    tz: Tz,
}

impl Journal<Local> {
    /// Open the journal at `path` in the local timezone, creating its
    /// directory if needed. Nothing is read until the first query.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let store = LogStore::new(path);
        store.ensure_dir()?;
        Ok(Self::with_timezone(store, Local))
    }
}

impl<Tz: TimeZone> Journal<Tz> {
    pub fn with_timezone(store: LogStore, tz: Tz) -> Self {
        Self {
            cursor: Cursor::new(store),
            tz,
        }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn store(&self) -> &LogStore {
        self.cursor.store()
    }

    pub fn session(&self) -> &SessionBuffer {
        self.cursor.session()
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Today's date in the journal timezone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    /// Record an event. `end` is when it happened (the end of the interval
    /// for work and break); `dur` is zero for lifecycle events.
    pub fn send(&mut self, activity: &str, kind: EntryKind, end: DateTime<FixedOffset>, dur: Duration) {
        let dur = if kind.is_timed() { dur } else { Duration::zero() };
        self.cursor
            .session_mut()
            .send(Entry::new(activity, kind, end, dur));
    }

    /// Append the session to the journal file.
    pub fn flush(&mut self) -> AppResult<usize> {
        let n = self.cursor.session().len();
        if n == 0 {
            return Ok(0);
        }
        if let Err(e) = self.cursor.store().append_all(self.cursor.session().entries()) {
            warn!(path = %self.store().path().display(), "flush failed: {}", e);
            return Err(e);
        }
        debug!(entries = n, "session flushed");
        self.cursor.commit_session();
        Ok(n)
    }

    pub fn refresh(&mut self) -> Overview {
        core::refresh(&mut self.cursor, &self.tz)
    }

    /// Today's totals, aligned with `activities`.
    pub fn tally(&mut self, activities: &[String]) -> Vec<Tally> {
        let today = self.today();
        self.tally_on(activities, today)
    }

    pub fn tally_on(&mut self, activities: &[String], today: NaiveDate) -> Vec<Tally> {
        core::tally(&mut self.cursor, &self.tz, activities, today)
    }

    pub fn weeks(&mut self, activity: &str, week: WeekAnchor) -> WeekReport {
        core::weeks(&mut self.cursor, &self.tz, activity, week)
    }

    pub fn years(&mut self, activity: &str, year: i32) -> YearReport {
        core::years(&mut self.cursor, &self.tz, activity, year)
    }

    /// Compact the journal, keeping only `activities`.
    pub fn shrink(&mut self, activities: &[String]) -> AppResult<ShrinkStats> {
        core::shrink(&mut self.cursor, &self.tz, activities)
    }

    /// Every entry, committed then session, in log order.
    pub fn entries(&mut self) -> Vec<Entry> {
        self.cursor.forward().collect()
    }
}
