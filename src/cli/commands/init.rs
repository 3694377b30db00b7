use super::Ctx;
use crate::errors::AppResult;
use crate::journal::LogStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This creates:
///  - the configuration file (defaults, plus `--log` if given)
///  - the directory holding the journal
pub fn handle(ctx: &Ctx) -> AppResult<()> {
    println!("⚙️  Initializing clockon…");

    ctx.cfg.save_to(&ctx.config_path)?;
    println!("📄 Config file : {}", ctx.config_path.display());

    let log_path = ctx.cfg.log_path();
    LogStore::new(&log_path).ensure_dir()?;
    println!("🗒️  Journal     : {}", log_path.display());

    success("clockon initialization completed!");
    Ok(())
}
