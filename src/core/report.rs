use crate::journal::cursor::Cursor;
use crate::models::{Grid, WeekAnchor, WeekReport, YearReport};
use chrono::{Datelike, TimeZone};
use std::cmp::Ordering;

/// Day-by-day totals of `activity` in ISO week `week` (Monday first).
///
/// `prev` is the closest earlier week with entries, `next` the first later
/// one found. The scan stops at `next`.
pub fn weeks<Tz: TimeZone>(
    cursor: &mut Cursor,
    tz: &Tz,
    activity: &str,
    week: WeekAnchor,
) -> WeekReport {
    let mut days = Grid::new(7);
    let mut next = None;
    let mut prev = None;

    for e in cursor.forward() {
        let Some(slot) = e.kind.slot() else {
            continue;
        };
        if e.activity != activity {
            continue;
        }

        let local = e.at.with_timezone(tz);
        let wk = WeekAnchor::of(&e.at, tz);
        match wk.cmp(&week) {
            Ordering::Equal => {
                let day = local.weekday().num_days_from_monday() as usize;
                days.add(day, slot, e.dur);
            }
            Ordering::Less => prev = Some(wk),
            Ordering::Greater => {
                next = Some(wk);
                break;
            }
        }
    }

    WeekReport {
        activity: activity.to_string(),
        week,
        next,
        prev,
        days,
    }
}

/// Month-by-month totals of `activity` in calendar year `year`.
pub fn years<Tz: TimeZone>(cursor: &mut Cursor, tz: &Tz, activity: &str, year: i32) -> YearReport {
    let mut months = Grid::new(12);
    let mut next = None;
    let mut prev = None;

    for e in cursor.forward() {
        let Some(slot) = e.kind.slot() else {
            continue;
        };
        if e.activity != activity {
            continue;
        }

        let local = e.at.with_timezone(tz);
        match local.year().cmp(&year) {
            Ordering::Equal => months.add(local.month0() as usize, slot, e.dur),
            Ordering::Less => prev = Some(local.year()),
            Ordering::Greater => {
                next = Some(local.year());
                break;
            }
        }
    }

    YearReport {
        activity: activity.to_string(),
        year,
        next,
        prev,
        months,
    }
}
