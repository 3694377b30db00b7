use crate::journal::cursor::Cursor;
use crate::models::Tally;
use chrono::{NaiveDate, TimeZone};

/// Work and break totals of `today`, one slot per entry of `activities`.
///
/// Walks the journal backwards and stops at the first entry from another
/// day: today's entries are expected at the tail of the log.
pub fn tally<Tz: TimeZone>(
    cursor: &mut Cursor,
    tz: &Tz,
    activities: &[String],
    today: NaiveDate,
) -> Vec<Tally> {
    let mut out = vec![Tally::default(); activities.len()];

    for e in cursor.backward() {
        if e.day_in(tz) != today {
            break;
        }
        let Some(slot) = e.kind.slot() else {
            continue;
        };
        let Some(i) = activities.iter().position(|a| *a == e.activity) else {
            continue;
        };
        if slot == 0 {
            out[i].work += e.dur;
        } else {
            out[i].rest += e.dur;
        }
    }

    out
}
