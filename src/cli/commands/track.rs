use super::{Ctx, finish, overview};
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntryKind};
use crate::ui::messages::{info, success};
use crate::utils::formatting::{journal_duration, parse_duration};
use crate::utils::time::parse_instant;
use chrono::Duration;

/// Handle `work` and `break`: log an interval that ended at `--end`.
pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    let (kind, name, dur, end) = match cmd {
        Commands::Work { name, dur, end } => (EntryKind::Work, name, dur, end),
        Commands::Break { name, dur, end } => (EntryKind::Break, name, dur, end),
        _ => return Ok(()),
    };

    let name = Entry::validate_activity(name)?;
    let dur = parse_duration(dur).ok_or_else(|| AppError::InvalidDuration(dur.clone()))?;
    if dur <= Duration::zero() {
        return Err(AppError::InvalidDuration(journal_duration(dur)));
    }
    let end = match end {
        Some(s) => parse_instant(s, ctx.now)?,
        None => ctx.now,
    };

    let mut journal = ctx.open_journal()?;
    let current = overview(&mut journal);
    if !current.activities.iter().any(|a| a == name) {
        info(format!("'{}' is not an activity yet, adding it.", name));
    }

    journal.send(name, kind, end, dur);
    finish(&mut journal);
    success(format!(
        "Logged {} {} on '{}'.",
        journal_duration(dur),
        kind.as_str(),
        name
    ));
    Ok(())
}
