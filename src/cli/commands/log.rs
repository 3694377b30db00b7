use super::Ctx;
use crate::errors::AppResult;
use crate::models::{Entry, EntryKind};
use crate::ui::messages::{info, warning};
use crate::utils::formatting::journal_duration;
use ansi_term::Colour;
use chrono::SecondsFormat;

/// Colour for each entry kind
fn color_for_kind(kind: EntryKind) -> Colour {
    match kind {
        EntryKind::Created => Colour::Green,
        EntryKind::Deleted => Colour::Red,
        EntryKind::Work => Colour::Blue,
        EntryKind::Break => Colour::Yellow,
    }
}

/// Handle the `log` command: dump the journal in log order.
pub fn handle(ctx: &Ctx) -> AppResult<()> {
    let mut journal = ctx.open_journal()?;
    let entries = journal.entries();
    if let Some(e) = journal.cursor_mut().take_load_error() {
        warning(format!("Journal only partially read: {}", e));
    }

    if entries.is_empty() {
        info(format!(
            "Journal {} is empty.",
            journal.store().path().display()
        ));
        return Ok(());
    }

    println!("📜 Journal {}:\n", journal.store().path().display());
    let idx_w = entries.len().to_string().len();
    for (i, e) in entries.iter().enumerate() {
        println!("{:>idx_w$}: {}", i + 1, line(e, ctx.cfg.color), idx_w = idx_w);
    }
    Ok(())
}

fn line(e: &Entry, color: bool) -> String {
    let kind = format!("{:<7}", e.kind.as_str());
    let kind = if color {
        color_for_kind(e.kind).paint(kind).to_string()
    } else {
        kind
    };
    let at = e.at.to_rfc3339_opts(SecondsFormat::Secs, true);
    if e.is_timed() {
        format!("{} | {} | {:>9} | {}", kind, at, journal_duration(e.dur), e.activity)
    } else {
        format!("{} | {} | {:>9} | {}", kind, at, "", e.activity)
    }
}
