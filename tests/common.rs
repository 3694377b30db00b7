#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use clockon::journal::{Journal, LogStore};
use clockon::models::{Entry, EntryKind};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `clockon` bound to a private journal and config inside `dir`.
pub fn clk(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("clockon");
    cmd.arg("--log")
        .arg(log_path(dir))
        .arg("--config")
        .arg(dir.join("clockon.conf"))
        .env("NO_COLOR", "1");
    cmd
}

pub fn log_path(dir: &Path) -> PathBuf {
    dir.join("clockon.log")
}

pub fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

pub fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid RFC3339 in test")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date in test")
}

pub fn mins(m: i64) -> Duration {
    Duration::minutes(m)
}

/// Journal in UTC so reports do not depend on the host timezone.
pub fn journal(dir: &Path) -> Journal<Utc> {
    Journal::with_timezone(LogStore::new(log_path(dir)), Utc)
}

/// Write entries straight to the journal file, `at` taken as the start.
pub fn seed(dir: &Path, entries: &[Entry]) {
    LogStore::new(log_path(dir))
        .append_all(entries)
        .expect("seed journal");
}

pub fn work(activity: &str, start: &str, m: i64) -> Entry {
    Entry::new(activity, EntryKind::Work, ts(start), mins(m))
}

pub fn rest(activity: &str, start: &str, m: i64) -> Entry {
    Entry::new(activity, EntryKind::Break, ts(start), mins(m))
}

pub fn created(activity: &str, at: &str) -> Entry {
    Entry::lifecycle(activity, EntryKind::Created, ts(at))
}

pub fn deleted(activity: &str, at: &str) -> Entry {
    Entry::lifecycle(activity, EntryKind::Deleted, ts(at))
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
