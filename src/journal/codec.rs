//! Textual journal format.
//!
//! Every entry takes two lines:
//!
//! ```text
//! <activity>
//! <kind> <RFC3339 timestamp>[ <duration>]
//! ```
//!
//! The duration is only written for work (`w`) and break (`b`) entries.

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntryKind};
use crate::utils::formatting::{journal_duration, parse_duration};
use chrono::{DateTime, Duration, SecondsFormat};
use std::io::BufRead;

/// Encode one entry, newline terminated.
pub fn encode(e: &Entry) -> String {
    let at = e.at.to_rfc3339_opts(SecondsFormat::Secs, true);
    if e.is_timed() {
        format!(
            "{}\n{} {} {}\n",
            e.activity,
            e.kind.code(),
            at,
            journal_duration(e.dur)
        )
    } else {
        format!("{}\n{} {}\n", e.activity, e.kind.code(), at)
    }
}

/// Decode a single entry. `Ok(None)` means a clean end of input.
pub fn decode<R: BufRead>(reader: R) -> AppResult<Option<Entry>> {
    Decoder::new(reader).next_entry()
}

/// Streaming decoder over a journal. Iteration stops after the first error.
pub struct Decoder<R> {
    reader: R,
    line: usize,
    failed: bool,
}

impl<R: BufRead> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            failed: false,
        }
    }

    /// Read the next physical line without its terminator; `None` at EOF.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    fn bad(&self, reason: impl Into<String>) -> AppError {
        AppError::BadEntry {
            line: self.line,
            reason: reason.into(),
        }
    }

    pub fn next_entry(&mut self) -> AppResult<Option<Entry>> {
        let Some(activity) = self.read_line()? else {
            return Ok(None);
        };
        if activity.is_empty() {
            return Err(self.bad("empty activity line"));
        }

        let Some(detail) = self.read_line()? else {
            return Err(self.bad(format!("missing kind line after {:?}", activity)));
        };
        if detail.is_empty() {
            return Err(self.bad("empty kind line"));
        }

        let mut tokens = detail.splitn(3, ' ');
        let code = tokens.next().unwrap_or_default();
        let kind = EntryKind::from_code(code)
            .ok_or_else(|| self.bad(format!("unknown kind {:?}", code)))?;

        if !kind.is_timed() {
            // Lifecycle lines: anything after the code is informational.
            let at = tokens
                .next()
                .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
                .unwrap_or_else(Entry::zero_instant);
            return Ok(Some(Entry::new(activity, kind, at, Duration::zero())));
        }

        let at_token = tokens
            .next()
            .ok_or_else(|| self.bad("missing timestamp"))?;
        let at = DateTime::parse_from_rfc3339(at_token)
            .map_err(|e| self.bad(format!("timestamp {:?}: {}", at_token, e)))?;

        let dur_token = tokens
            .next()
            .ok_or_else(|| self.bad("missing duration"))?;
        let dur = parse_duration(dur_token)
            .ok_or_else(|| self.bad(format!("duration {:?}", dur_token)))?;

        Ok(Some(Entry::new(activity, kind, at, dur)))
    }
}

impl<R: BufRead> Iterator for Decoder<R> {
    type Item = AppResult<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_entry() {
            Ok(Some(e)) => Some(Ok(e)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
