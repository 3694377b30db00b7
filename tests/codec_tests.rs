use chrono::Duration;
use clockon::errors::AppError;
use clockon::journal::codec::{Decoder, decode, encode};
use clockon::models::{Entry, EntryKind};
use clockon::utils::formatting::{journal_duration, parse_duration};
use std::io::Cursor;

mod common;
use common::{created, deleted, mins, rest, ts, work};

#[test]
fn encodes_two_line_entries() {
    assert_eq!(
        encode(&created("Top Secret Project", "2024-01-15T09:00:00Z")),
        "Top Secret Project\nc 2024-01-15T09:00:00Z\n"
    );
    assert_eq!(
        encode(&deleted("A", "2024-01-15T10:00:00+01:00")),
        "A\nd 2024-01-15T10:00:00+01:00\n"
    );
    assert_eq!(
        encode(&work("A", "2024-01-15T09:00:00Z", 30)),
        "A\nw 2024-01-15T09:00:00Z 30m0s\n"
    );
    assert_eq!(
        encode(&Entry::new(
            "A",
            EntryKind::Break,
            ts("2024-01-15T09:00:00Z"),
            Duration::seconds(5025)
        )),
        "A\nb 2024-01-15T09:00:00Z 1h23m45s\n"
    );
}

#[test]
fn encode_rounds_to_the_second() {
    let e = Entry::new(
        "A",
        EntryKind::Work,
        ts("2024-01-15T09:00:00.750Z"),
        Duration::milliseconds(44_600),
    );
    assert_eq!(encode(&e), "A\nw 2024-01-15T09:00:00Z 45s\n");
}

#[test]
fn journal_durations_use_compound_form() {
    assert_eq!(journal_duration(Duration::zero()), "0s");
    assert_eq!(journal_duration(Duration::seconds(45)), "45s");
    assert_eq!(journal_duration(mins(30)), "30m0s");
    assert_eq!(journal_duration(Duration::hours(1)), "1h0m0s");
    assert_eq!(journal_duration(Duration::seconds(3_605)), "1h0m5s");
}

#[test]
fn parses_go_style_durations() {
    assert_eq!(parse_duration("1h23m45s"), Some(Duration::seconds(5025)));
    assert_eq!(parse_duration("30m"), Some(mins(30)));
    assert_eq!(parse_duration("1.5h"), Some(mins(90)));
    assert_eq!(parse_duration("0s"), Some(Duration::zero()));
    assert_eq!(parse_duration("0"), Some(Duration::zero()));
    assert_eq!(parse_duration("250ms"), Some(Duration::milliseconds(250)));
    assert_eq!(parse_duration(""), None);
    assert_eq!(parse_duration("-5m"), None);
    assert_eq!(parse_duration("5"), None);
    assert_eq!(parse_duration("5d"), None);
    assert_eq!(parse_duration("h"), None);
}

#[test]
fn decodes_timed_entries() {
    let input = "Writing\nw 2024-01-15T09:00:00+01:00 1h0m0s\n";
    let e = decode(Cursor::new(input)).unwrap().unwrap();
    assert_eq!(e.activity, "Writing");
    assert_eq!(e.kind, EntryKind::Work);
    assert_eq!(e.at, ts("2024-01-15T09:00:00+01:00"));
    assert_eq!(e.dur, Duration::hours(1));
}

#[test]
fn lifecycle_lines_ignore_extra_tokens() {
    let e = decode(Cursor::new("A\nc 2024-01-15T09:00:00Z whatever else\n"))
        .unwrap()
        .unwrap();
    assert_eq!(e.kind, EntryKind::Created);
    assert_eq!(e.at, ts("2024-01-15T09:00:00Z"));
    assert_eq!(e.dur, Duration::zero());

    let bare = decode(Cursor::new("A\nd\n")).unwrap().unwrap();
    assert_eq!(bare.kind, EntryKind::Deleted);
    assert_eq!(bare.at, Entry::zero_instant());

    let junk = decode(Cursor::new("A\nc not-a-time\n")).unwrap().unwrap();
    assert_eq!(junk.at, Entry::zero_instant());
}

#[test]
fn activity_line_is_kept_verbatim() {
    let e = decode(Cursor::new("  spaced  name \nb 2024-01-15T09:00:00Z 5m0s\n"))
        .unwrap()
        .unwrap();
    assert_eq!(e.activity, "  spaced  name ");
}

#[test]
fn empty_input_is_clean_eof() {
    assert!(decode(Cursor::new("")).unwrap().is_none());
}

#[test]
fn malformed_entries_are_rejected() {
    let cases = [
        "A\nx 2024-01-15T09:00:00Z\n",
        "A\nwork 2024-01-15T09:00:00Z 5m\n",
        "A\nw yesterday 5m\n",
        "A\nw 2024-01-15T09:00:00Z\n",
        "A\nb 2024-01-15T09:00:00Z five\n",
        "A\n\n",
        "\nc 2024-01-15T09:00:00Z\n",
        "A\n",
    ];
    for input in cases {
        match decode(Cursor::new(input)) {
            Err(AppError::BadEntry { .. }) => {}
            other => panic!("{:?} decoded as {:?}", input, other),
        }
    }
}

#[test]
fn decoder_stops_after_first_error() {
    let input = "A\nc 2024-01-15T09:00:00Z\nB\nq 2024-01-15T09:00:00Z\nC\nc 2024-01-15T09:00:00Z\n";
    let items: Vec<_> = Decoder::new(Cursor::new(input)).collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    match &items[1] {
        Err(AppError::BadEntry { line, .. }) => assert_eq!(*line, 4),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn round_trip_keeps_entries() {
    let entries = vec![
        created("A", "2024-01-15T09:00:00Z"),
        work("A", "2024-01-15T09:00:00+05:30", 90),
        rest("Long name with spaces", "2023-12-31T23:59:59-08:00", 7),
        deleted("A", "2024-02-01T00:00:00Z"),
    ];
    let text: String = entries.iter().map(encode).collect();
    let decoded: Vec<Entry> = Decoder::new(Cursor::new(text))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(decoded, entries);
}
