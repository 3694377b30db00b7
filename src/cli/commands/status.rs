use super::{Ctx, overview};
use crate::errors::AppResult;
use crate::models::Tally;
use crate::ui::messages::{header, info};
use crate::utils::formatting::short_duration;
use crate::utils::table::{Column, Table};
use unicode_width::UnicodeWidthStr;

/// Handle the `status` command: active activities and today's tally.
pub fn handle(ctx: &Ctx) -> AppResult<()> {
    let mut journal = ctx.open_journal()?;
    let current = overview(&mut journal);

    if current.is_empty() {
        info("No activities yet. Add one with `clockon add <NAME>`.");
        return Ok(());
    }

    let tally = journal.tally_on(&current.activities, ctx.today());

    header(format!("Today ({})", ctx.today()));
    let name_w = current
        .activities
        .iter()
        .map(|a| a.width())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut table = Table::new(vec![
        Column::new(" ", 1),
        Column::new("Activity", name_w),
        Column::new("Work", 7),
        Column::new("Break", 7),
        Column::new("Total", 7),
    ]);
    for (i, (name, t)) in current.activities.iter().zip(&tally).enumerate() {
        let marker = if i == current.selected { ">" } else { " " };
        table.add_row(row(marker, name, t));
    }
    print!("{}", table.render());

    if let Some(week) = current.this_week {
        let mut line = format!("\nLatest week: {}", week);
        if let Some(prev) = current.prev_week {
            line.push_str(&format!(" (previous: {})", prev));
        }
        if current.prev_year.is_some() {
            line.push_str(", earlier years on record");
        }
        println!("{}", line);
    }
    Ok(())
}

fn row(marker: &str, name: &str, t: &Tally) -> Vec<String> {
    vec![
        marker.to_string(),
        name.to_string(),
        short_duration(t.work),
        short_duration(t.rest),
        short_duration(t.total()),
    ]
}
