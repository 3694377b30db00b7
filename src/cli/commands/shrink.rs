use super::{Ctx, overview};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

/// Handle the `shrink` command
pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    if let Commands::Shrink { yes } = cmd {
        let mut journal = ctx.open_journal()?;
        let current = overview(&mut journal);

        if ctx.cfg.confirm_destructive && !*yes {
            let prompt = format!(
                "Rewrite {} keeping one work and one break entry per activity and day? Deleted activities are dropped.",
                journal.store().path().display()
            );
            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let stats = journal.shrink(&current.activities)?;
        success(format!(
            "Journal compacted: {} → {} entries.",
            stats.before, stats.after
        ));
    }
    Ok(())
}
