use super::{Ctx, finish, overview};
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::EntryKind;
use crate::ui::messages::{confirm, info, success};
use chrono::Duration;

pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    if let Commands::Del { name, yes } = cmd {
        let mut journal = ctx.open_journal()?;
        let current = overview(&mut journal);
        if !current.activities.iter().any(|a| a == name) {
            return Err(AppError::ActivityNotFound(name.clone()));
        }

        //
        // Confirmation prompt
        //
        if ctx.cfg.confirm_destructive && !*yes {
            let prompt = format!(
                "Delete activity '{}'? Its history is dropped by the next shrink.",
                name
            );
            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        journal.send(name, EntryKind::Deleted, ctx.now, Duration::zero());
        finish(&mut journal);
        success(format!("Activity '{}' deleted.", name));
    }
    Ok(())
}
