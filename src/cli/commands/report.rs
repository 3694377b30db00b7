use super::{Ctx, overview};
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::report::{MONTH_LABELS, WEEKDAY_LABELS};
use crate::models::{Grid, Overview, WeekAnchor};
use crate::ui::messages::info;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::{Datelike, Local};

/// Handle `week` and `year`.
pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    match cmd {
        Commands::Week { name, week, json } => weekly(ctx, name.as_deref(), week.as_deref(), *json),
        Commands::Year { name, year, json } => yearly(ctx, name.as_deref(), *year, *json),
        _ => Ok(()),
    }
}

/// Requested activity, or the current one.
fn pick_activity(current: &Overview, name: Option<&str>) -> AppResult<String> {
    match name {
        Some(n) => Ok(n.to_string()),
        None => current
            .selected_activity()
            .map(str::to_string)
            .ok_or(AppError::NoActivities),
    }
}

fn weekly(ctx: &Ctx, name: Option<&str>, week: Option<&str>, json: bool) -> AppResult<()> {
    let mut journal = ctx.open_journal()?;
    let current = overview(&mut journal);
    let activity = pick_activity(&current, name)?;

    let week = match week {
        Some(w) => WeekAnchor::parse(w)?,
        None => current
            .this_week
            .unwrap_or_else(|| WeekAnchor::of(&ctx.now, &Local)),
    };

    let report = journal.weeks(&activity, week);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let start = week
        .monday()
        .map(|d| d.to_string())
        .unwrap_or_else(|| week.to_string());
    println!(
        "{}",
        bold(&format!("Weekly report for {} ({}):", activity, start))
    );
    print!("{}", render(&report.days, &WEEKDAY_LABELS, 6, ctx.cfg.color));
    if report.days.total().is_zero() {
        info(format!("Nothing logged for '{}' in {}.", activity, week));
    }
    println!(
        "{}",
        navigation(
            report.prev.map(|w| w.to_string()),
            report.next.map(|w| w.to_string())
        )
    );
    Ok(())
}

fn yearly(ctx: &Ctx, name: Option<&str>, year: Option<i32>, json: bool) -> AppResult<()> {
    let mut journal = ctx.open_journal()?;
    let current = overview(&mut journal);
    let activity = pick_activity(&current, name)?;

    let year = year
        .or(current.this_year)
        .unwrap_or_else(|| ctx.now.with_timezone(&Local).year());

    let report = journal.years(&activity, year);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{}",
        bold(&format!("Yearly report for {} ({}):", activity, year))
    );
    print!("{}", render(&report.months, &MONTH_LABELS, 7, ctx.cfg.color));
    if report.months.total().is_zero() {
        info(format!("Nothing logged for '{}' in {}.", activity, year));
    }
    println!(
        "{}",
        navigation(
            report.prev.map(|y| y.to_string()),
            report.next.map(|y| y.to_string())
        )
    );
    Ok(())
}

/// Table with a Type column, one column per label and a Total column.
fn render(grid: &Grid, labels: &[&str], width: usize, color: bool) -> String {
    let mut columns = vec![Column::new("Type", 5)];
    columns.extend(labels.iter().map(|l| Column::new(l, width)));
    columns.push(Column::new("Total", width + 1));

    let mut table = Table::new(columns);
    for row in grid.to_rows() {
        table.add_row(row);
    }

    let out = table.render();
    if !color {
        return out;
    }
    let mut lines = out.lines();
    let head = lines.next().unwrap_or_default();
    let mut colored = format!("{}\n", Colour::Fixed(240).paint(head));
    for line in lines {
        colored.push_str(line);
        colored.push('\n');
    }
    colored
}

fn navigation(prev: Option<String>, next: Option<String>) -> String {
    format!(
        "prev: {}   next: {}",
        prev.unwrap_or_else(|| "-".to_string()),
        next.unwrap_or_else(|| "-".to_string())
    )
}
