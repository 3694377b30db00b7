use chrono::Duration;
use clockon::models::{EntryKind, WeekAnchor};

mod common;
use common::{created, date, deleted, journal, mins, names, rest, seed, tmp, ts, work};

/// Create, work, quit, restart.
#[test]
fn refresh_after_restart() {
    let dir = tmp();
    {
        let mut j = journal(dir.path());
        j.send("A", EntryKind::Created, ts("2024-01-15T09:00:00Z"), Duration::zero());
        j.send("A", EntryKind::Work, ts("2024-01-15T09:30:00Z"), mins(30));
        j.flush().unwrap();
    }

    let mut j = journal(dir.path());
    let o = j.refresh();
    assert_eq!(o.activities, vec!["A"]);
    assert_eq!(o.selected, 0);
    assert_eq!(o.this_week, Some(WeekAnchor::new(2024, 3)));
    assert_eq!(o.prev_week, None);
    assert_eq!(o.this_year, Some(2024));
    assert_eq!(o.prev_year, None);

    let t = j.tally_on(&o.activities, date(2024, 1, 15));
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].work, mins(30));
    assert_eq!(t[0].rest, Duration::zero());
}

#[test]
fn delete_then_recreate() {
    let dir = tmp();
    let mut j = journal(dir.path());
    j.send("A", EntryKind::Created, ts("2024-01-15T09:00:00Z"), Duration::zero());
    j.send("A", EntryKind::Work, ts("2024-01-15T09:30:00Z"), mins(30));
    j.send("A", EntryKind::Deleted, ts("2024-01-15T09:31:00Z"), Duration::zero());
    assert!(j.refresh().activities.is_empty());

    j.send("A", EntryKind::Created, ts("2024-01-15T09:32:00Z"), Duration::zero());
    let o = j.refresh();
    assert_eq!(o.activities, vec!["A"]);
    assert_eq!(o.selected, 0);
}

#[test]
fn activities_are_sorted_and_selection_follows_last_use() {
    let dir = tmp();
    let mut j = journal(dir.path());
    j.send("Zeta", EntryKind::Created, ts("2024-01-15T09:00:00Z"), Duration::zero());
    j.send("Alpha", EntryKind::Created, ts("2024-01-15T09:01:00Z"), Duration::zero());

    let o = j.refresh();
    assert_eq!(o.activities, vec!["Alpha", "Zeta"]);
    assert_eq!(o.selected, 0);

    j.send("Zeta", EntryKind::Created, ts("2024-01-15T09:02:00Z"), Duration::zero());
    let o = j.refresh();
    assert_eq!(o.selected, 1);
    assert_eq!(o.selected_activity(), Some("Zeta"));
}

#[test]
fn selection_skips_deleted_activities() {
    let dir = tmp();
    let mut j = journal(dir.path());
    j.send("A", EntryKind::Created, ts("2024-01-15T09:00:00Z"), Duration::zero());
    j.send("B", EntryKind::Created, ts("2024-01-15T09:01:00Z"), Duration::zero());
    j.send("C", EntryKind::Created, ts("2024-01-15T09:02:00Z"), Duration::zero());
    j.send("C", EntryKind::Deleted, ts("2024-01-15T09:03:00Z"), Duration::zero());

    let o = j.refresh();
    assert_eq!(o.activities, vec!["A", "B"]);
    assert_eq!(o.selected_activity(), Some("B"));
}

#[test]
fn active_set_follows_last_event_per_name() {
    let dir = tmp();
    seed(
        dir.path(),
        &[
            created("A", "2024-01-01T09:00:00Z"),
            created("B", "2024-01-01T09:00:00Z"),
            deleted("A", "2024-01-02T09:00:00Z"),
            work("C", "2024-01-03T09:00:00Z", 10),
            deleted("B", "2024-01-04T09:00:00Z"),
            created("B", "2024-01-05T09:00:00Z"),
            created("D", "2024-01-05T09:00:00Z"),
            deleted("D", "2024-01-06T09:00:00Z"),
            deleted("E", "2024-01-06T09:00:00Z"),
        ],
    );
    let mut j = journal(dir.path());
    assert_eq!(j.refresh().activities, vec!["B", "C"]);
}

#[test]
fn refresh_finds_week_and_year_anchors() {
    let dir = tmp();
    seed(
        dir.path(),
        &[
            work("A", "2023-12-20T09:00:00Z", 60),
            work("Gone", "2023-11-01T09:00:00Z", 60),
            work("A", "2024-01-02T09:00:00Z", 60),
            work("A", "2024-01-15T09:00:00Z", 60),
            deleted("Gone", "2024-01-16T09:00:00Z"),
        ],
    );
    let mut j = journal(dir.path());
    let o = j.refresh();
    assert_eq!(o.activities, vec!["A"]);
    assert_eq!(o.this_week, Some(WeekAnchor::new(2024, 3)));
    assert_eq!(o.prev_week, Some(WeekAnchor::new(2024, 1)));
    assert_eq!(o.this_year, Some(2024));
    // An earlier year exists; the anchor carries the latest year.
    assert_eq!(o.prev_year, Some(2024));
}

#[test]
fn refresh_without_history_has_no_anchors() {
    let dir = tmp();
    let mut j = journal(dir.path());
    j.send("A", EntryKind::Created, ts("2024-01-15T09:00:00Z"), Duration::zero());
    let o = j.refresh();
    assert_eq!(o.this_week, None);
    assert_eq!(o.this_year, None);
    assert_eq!(o.prev_week, None);
    assert_eq!(o.prev_year, None);
}

#[test]
fn tally_sums_today_per_activity() {
    let dir = tmp();
    seed(dir.path(), &[work("A", "2024-01-14T09:00:00Z", 120)]);
    let mut j = journal(dir.path());
    j.send("A", EntryKind::Work, ts("2024-01-15T09:30:00Z"), mins(30));
    j.send("A", EntryKind::Break, ts("2024-01-15T09:40:00Z"), mins(10));
    j.send("B", EntryKind::Work, ts("2024-01-15T10:40:00Z"), mins(60));
    j.send("A", EntryKind::Work, ts("2024-01-15T11:00:00Z"), mins(20));
    j.send("Other", EntryKind::Work, ts("2024-01-15T11:30:00Z"), mins(5));

    let t = j.tally_on(&names(&["B", "A"]), date(2024, 1, 15));
    assert_eq!(t[0].work, mins(60));
    assert_eq!(t[0].rest, Duration::zero());
    assert_eq!(t[1].work, mins(50));
    assert_eq!(t[1].rest, mins(10));
    assert_eq!(t[1].total(), mins(60));
}

#[test]
fn tally_stops_at_first_entry_of_another_day() {
    let dir = tmp();
    seed(
        dir.path(),
        &[
            work("A", "2024-01-15T08:00:00Z", 10),
            work("A", "2024-01-14T22:00:00Z", 20),
            work("A", "2024-01-15T09:00:00Z", 5),
        ],
    );
    let mut j = journal(dir.path());
    let t = j.tally_on(&names(&["A"]), date(2024, 1, 15));
    assert_eq!(t[0].work, mins(5));
}

#[test]
fn weekly_grid_fills_days() {
    let dir = tmp();
    seed(
        dir.path(),
        &[
            work("A", "2024-01-15T09:00:00Z", 60),
            rest("A", "2024-01-15T10:00:00Z", 15),
            work("B", "2024-01-16T09:00:00Z", 45),
            work("A", "2024-01-17T09:00:00Z", 120),
        ],
    );
    let mut j = journal(dir.path());
    let r = j.weeks("A", WeekAnchor::new(2024, 3));

    assert_eq!(r.days.cell(0), [mins(60), mins(15)]);
    assert_eq!(r.days.cell(2), [mins(120), Duration::zero()]);
    assert_eq!(r.days.totals(), [mins(180), mins(15)]);

    let rows = r.days.to_rows();
    assert_eq!(
        rows[0],
        vec!["work", "1h00m", "", "2h00m", "", "", "", "", "3h00m"]
    );
    assert_eq!(rows[1], vec!["break", "15m", "", "", "", "", "", "", "15m"]);
    assert_eq!(
        rows[2],
        vec!["total", "1h15m", "", "2h00m", "", "", "", "", "3h15m"]
    );
}

#[test]
fn weekly_grid_places_sunday_last() {
    let dir = tmp();
    seed(dir.path(), &[work("A", "2024-01-21T09:00:00Z", 30)]);
    let mut j = journal(dir.path());
    let r = j.weeks("A", WeekAnchor::new(2024, 3));
    assert_eq!(r.days.cell(6), [mins(30), Duration::zero()]);
}

#[test]
fn weekly_navigation_anchors() {
    let dir = tmp();
    seed(
        dir.path(),
        &[
            work("A", "2024-01-02T09:00:00Z", 60),
            work("A", "2024-01-15T09:00:00Z", 60),
            work("A", "2024-01-29T09:00:00Z", 60),
            work("A", "2024-02-12T09:00:00Z", 60),
        ],
    );
    let mut j = journal(dir.path());
    let r = j.weeks("A", WeekAnchor::new(2024, 3));
    assert_eq!(r.next, Some(WeekAnchor::new(2024, 5)));
    assert_eq!(r.prev, Some(WeekAnchor::new(2024, 1)));

    let first = j.weeks("A", WeekAnchor::new(2024, 1));
    assert_eq!(first.prev, None);
    assert_eq!(first.next, Some(WeekAnchor::new(2024, 3)));
}

#[test]
fn weekly_total_matches_entries_in_week() {
    let dir = tmp();
    let entries = vec![
        work("A", "2024-01-14T23:30:00Z", 20),
        work("A", "2024-01-15T09:00:00Z", 25),
        rest("A", "2024-01-16T12:00:00Z", 7),
        work("A", "2024-01-21T23:00:00Z", 40),
        rest("A", "2024-01-22T00:10:00Z", 3),
    ];
    seed(dir.path(), &entries);
    let mut j = journal(dir.path());
    let r = j.weeks("A", WeekAnchor::new(2024, 3));
    assert_eq!(r.days.total(), mins(25 + 7 + 40));
}

#[test]
fn yearly_grid_and_navigation() {
    let dir = tmp();
    seed(
        dir.path(),
        &[
            work("A", "2023-06-10T09:00:00Z", 60),
            work("A", "2024-03-05T09:00:00Z", 60),
            rest("A", "2024-03-20T09:00:00Z", 30),
            work("A", "2024-12-31T09:00:00Z", 15),
            work("B", "2024-04-01T09:00:00Z", 15),
            work("A", "2025-01-02T09:00:00Z", 60),
        ],
    );
    let mut j = journal(dir.path());
    let r = j.years("A", 2024);
    assert_eq!(r.months.cell(2), [mins(60), mins(30)]);
    assert_eq!(r.months.cell(3), [Duration::zero(), Duration::zero()]);
    assert_eq!(r.months.cell(11), [mins(15), Duration::zero()]);
    assert_eq!(r.prev, Some(2023));
    assert_eq!(r.next, Some(2025));

    let rows = r.months.to_rows();
    assert_eq!(rows[0].len(), 14);
    assert_eq!(rows[0][13], "1h15m");
    assert_eq!(rows[2][13], "1h45m");
}

#[test]
fn reports_ignore_other_activities_and_lifecycle() {
    let dir = tmp();
    seed(
        dir.path(),
        &[
            created("A", "2024-01-15T08:00:00Z"),
            work("B", "2024-01-15T09:00:00Z", 60),
            deleted("A", "2024-01-15T10:00:00Z"),
        ],
    );
    let mut j = journal(dir.path());
    let r = j.weeks("A", WeekAnchor::new(2024, 3));
    assert!(r.days.total().is_zero());
    assert_eq!(r.next, None);
    assert_eq!(r.prev, None);
}
