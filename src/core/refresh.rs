use crate::journal::cursor::Cursor;
use crate::models::{EntryKind, Overview, WeekAnchor};
use chrono::TimeZone;
use std::collections::HashSet;

/// Active set, last used activity and the report anchors.
pub fn refresh<Tz: TimeZone>(cursor: &mut Cursor, tz: &Tz) -> Overview {
    // -----------------------------
    // Active set: replay lifecycle
    // -----------------------------
    let mut active: HashSet<String> = HashSet::new();
    for e in cursor.forward() {
        if e.kind == EntryKind::Deleted {
            active.remove(&e.activity);
        } else {
            active.insert(e.activity);
        }
    }

    // -----------------------------
    // Most recently used activity
    // -----------------------------
    let last = cursor
        .backward()
        .find(|e| e.kind != EntryKind::Deleted && active.contains(&e.activity))
        .map(|e| e.activity);

    let mut activities: Vec<String> = active.iter().cloned().collect();
    activities.sort();
    let selected = last
        .and_then(|name| activities.iter().position(|a| *a == name))
        .unwrap_or(0);

    // -----------------------------
    // Week / year anchors
    // -----------------------------
    let mut this_week: Option<WeekAnchor> = None;
    let mut prev_week: Option<WeekAnchor> = None;
    let mut prev_year: Option<i32> = None;

    for e in cursor.backward() {
        if !e.is_timed() || !active.contains(&e.activity) {
            continue;
        }
        let wk = WeekAnchor::of(&e.at, tz);
        let Some(this) = this_week else {
            this_week = Some(wk);
            continue;
        };
        if prev_week.is_none() && wk < this {
            prev_week = Some(wk);
        }
        // Only flags that an earlier year exists: carries the current year.
        if wk.year < this.year {
            prev_year = Some(this.year);
            break;
        }
    }

    Overview {
        activities,
        selected,
        this_week,
        prev_week,
        this_year: this_week.map(|w| w.year),
        prev_year,
    }
}
