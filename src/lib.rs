//! clockon library root.
//! Exposes the journal engine, the CLI parser and the high-level run().

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod journal;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::DateTime;
use clap::Parser;
use cli::commands::{self, Ctx};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Ctx) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(ctx),
        Commands::Config { .. } => commands::config::handle(&cli.command, ctx),
        Commands::Add { .. } => commands::add::handle(&cli.command, ctx),
        Commands::Select { .. } => commands::select::handle(&cli.command, ctx),
        Commands::Del { .. } => commands::del::handle(&cli.command, ctx),
        Commands::Work { .. } | Commands::Break { .. } => {
            commands::track::handle(&cli.command, ctx)
        }
        Commands::Status => commands::status::handle(ctx),
        Commands::Week { .. } | Commands::Year { .. } => {
            commands::report::handle(&cli.command, ctx)
        }
        Commands::Shrink { .. } => commands::shrink::handle(&cli.command, ctx),
        Commands::Log => commands::log::handle(ctx),
    }
}

/// Diagnostics on stderr, filtered by `CLOCKON_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CLOCKON_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, honouring --config
    let config_path = cli
        .config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&config_path)?;

    // 3️⃣ command line overrides
    if let Some(log) = &cli.log {
        cfg.log_file = log.clone();
    }
    let now = match &cli.now {
        Some(s) => DateTime::parse_from_rfc3339(s).map_err(|_| AppError::InvalidTime(s.clone()))?,
        None => utils::time::now(),
    };

    let ctx = Ctx {
        cfg,
        config_path,
        now,
    };
    dispatch(&cli, &ctx)
}
