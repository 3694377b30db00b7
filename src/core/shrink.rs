//! Journal compaction: one summed work and break entry per activity per day.

use crate::errors::{AppError, AppResult};
use crate::journal::cursor::Cursor;
use crate::models::{Entry, EntryKind};
use chrono::{Duration, NaiveDate, TimeZone};
use std::collections::HashMap;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShrinkStats {
    pub before: usize,
    pub after: usize,
}

/// Reduce `entries` to per-day (activity, kind) sums.
///
/// Only work and break entries of `activities` survive. A bucket is flushed
/// whenever the day of the incoming entry differs from the previous one;
/// inside a flush the order is `activities` order, work before break. The
/// kept `at` is the start of the last entry folded into the bucket.
pub fn compact<Tz, I>(entries: I, tz: &Tz, activities: &[String]) -> Vec<Entry>
where
    Tz: TimeZone,
    I: IntoIterator<Item = Entry>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buffer: Vec<Entry> = Vec::with_capacity(activities.len() * 2);
    for name in activities {
        if index.contains_key(name.as_str()) {
            continue;
        }
        index.insert(name.as_str(), buffer.len());
        for kind in [EntryKind::Work, EntryKind::Break] {
            buffer.push(Entry::new(name.clone(), kind, Entry::zero_instant(), Duration::zero()));
        }
    }

    let mut out = Vec::new();
    let mut current: Option<NaiveDate> = None;

    for e in entries {
        let day = e.day_in(tz);
        if current != Some(day) {
            drain_buckets(&mut buffer, &mut out);
            current = Some(day);
        }

        let Some(slot) = e.kind.slot() else {
            continue;
        };
        let Some(&base) = index.get(e.activity.as_str()) else {
            continue;
        };

        let bucket = &mut buffer[base + slot];
        bucket.at = e.at;
        bucket.dur += e.dur;
    }
    drain_buckets(&mut buffer, &mut out);

    out
}

fn drain_buckets(buffer: &mut [Entry], out: &mut Vec<Entry>) {
    for bucket in buffer.iter_mut() {
        if bucket.dur > Duration::zero() {
            out.push(bucket.clone());
        }
        bucket.at = Entry::zero_instant();
        bucket.dur = Duration::zero();
    }
}

/// Compact the whole journal (committed and session) in place.
///
/// Activities not listed, and every lifecycle entry, are dropped. The session
/// is part of the rewritten file, so it is emptied on success.
pub fn shrink<Tz: TimeZone>(
    cursor: &mut Cursor,
    tz: &Tz,
    activities: &[String],
) -> AppResult<ShrinkStats> {
    let all: Vec<Entry> = cursor.forward().collect();
    if cursor.is_partial() {
        return Err(AppError::Other(format!(
            "{} could not be read completely; fix or move it before shrinking",
            cursor.store().path().display()
        )));
    }

    let before = all.len();
    let compacted = compact(all, tz, activities);
    cursor.store().replace_all(&compacted)?;

    let stats = ShrinkStats {
        before,
        after: compacted.len(),
    };
    info!(before = stats.before, after = stats.after, "journal compacted");
    cursor.replace_committed(compacted);
    Ok(stats)
}
