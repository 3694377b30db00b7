use super::{Ctx, finish, overview};
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::EntryKind;
use crate::ui::messages::success;
use chrono::Duration;

/// Handle the `select` command: a Created entry for a live activity marks
/// it as the most recently used one.
pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    if let Commands::Select { name } = cmd {
        let mut journal = ctx.open_journal()?;
        let current = overview(&mut journal);
        if !current.activities.iter().any(|a| a == name) {
            return Err(AppError::ActivityNotFound(name.clone()));
        }

        journal.send(name, EntryKind::Created, ctx.now, Duration::zero());
        finish(&mut journal);
        success(format!("Now on '{}'.", name));
    }
    Ok(())
}
