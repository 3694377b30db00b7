use super::{Ctx, finish, overview};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::{Entry, EntryKind};
use crate::ui::messages::{info, success};
use chrono::Duration;

/// Handle the `add` command
pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        let name = Entry::validate_activity(name)?;
        let mut journal = ctx.open_journal()?;

        let current = overview(&mut journal);
        if current.activities.iter().any(|a| a == name) {
            info(format!("Activity '{}' already exists, selecting it.", name));
        }

        journal.send(name, EntryKind::Created, ctx.now, Duration::zero());
        finish(&mut journal);
        success(format!("Activity '{}' added.", name));
    }
    Ok(())
}
