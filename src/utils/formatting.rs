//! Formatting utilities used for CLI and report outputs.

use chrono::Duration;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

/// Round to the nearest multiple of `unit` seconds, halves away from zero.
fn round_secs(d: Duration, unit: i64) -> i64 {
    let ms = d.num_milliseconds();
    let unit_ms = unit * 1000;
    let half = unit_ms / 2;
    let rounded = if ms >= 0 {
        (ms + half) / unit_ms
    } else {
        (ms - half) / unit_ms
    };
    rounded * unit
}

/// Report cell: rounded to the minute, `5m` or `1h05m`. Zero is blank.
pub fn grid_duration(d: Duration) -> String {
    let secs = round_secs(d, 60);
    if secs == 0 {
        return String::new();
    }
    minutes_readable(secs / 60)
}

fn minutes_readable(mins: i64) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;
    if hours == 0 {
        format!("{}m", minutes)
    } else {
        format!("{}h{:02}m", hours, minutes)
    }
}

/// Status line value: like a grid cell but shows `0m` instead of blank.
pub fn short_duration(d: Duration) -> String {
    minutes_readable(round_secs(d, 60) / 60)
}

/// Journal form: rounded to the second, `1h23m45s`, `30m0s`, `45s`, `0s`.
pub fn journal_duration(d: Duration) -> String {
    let secs = round_secs(d, 1);
    if secs == 0 {
        return "0s".to_string();
    }

    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.abs();
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);

    if h > 0 {
        format!("{sign}{h}h{m}m{s}s")
    } else if m > 0 {
        format!("{sign}{m}m{s}s")
    } else {
        format!("{sign}{s}s")
    }
}

/// Parse a compound duration such as `1h23m45s`, `90m`, `1.5h` or `250ms`.
///
/// Units: `h`, `m`, `s`, `ms`, `us`/`µs`, `ns`. A bare `0` is accepted.
/// Negative values are rejected.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s == "0" {
        return Some(Duration::zero());
    }
    if s.is_empty() || s.starts_with('-') {
        return None;
    }
    let s = s.strip_prefix('+').unwrap_or(s);

    let mut total_ns: f64 = 0.0;
    let mut rest = s;
    while !rest.is_empty() {
        let num_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_len == 0 {
            return None;
        }
        let value: f64 = rest[..num_len].parse().ok()?;
        rest = &rest[num_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = match &rest[..unit_len] {
            "h" => 3_600e9,
            "m" => 60e9,
            "s" => 1e9,
            "ms" => 1e6,
            "us" | "µs" => 1e3,
            "ns" => 1.0,
            _ => return None,
        };
        rest = &rest[unit_len..];
        total_ns += value * scale;
    }

    if !total_ns.is_finite() || total_ns > i64::MAX as f64 {
        return None;
    }
    Some(Duration::nanoseconds(total_ns.round() as i64))
}
