pub mod add;
pub mod config;
pub mod del;
pub mod init;
pub mod log;
pub mod report;
pub mod select;
pub mod shrink;
pub mod status;
pub mod track;

use crate::config::Config;
use crate::errors::AppResult;
use crate::journal::Journal;
use crate::models::Overview;
use crate::ui::messages::warning;
use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use std::path::PathBuf;

/// Everything a command handler needs besides its arguments.
pub struct Ctx {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub now: DateTime<FixedOffset>,
}

impl Ctx {
    pub fn open_journal(&self) -> AppResult<Journal> {
        Journal::open(self.cfg.log_path())
    }

    pub fn today(&self) -> NaiveDate {
        self.now.with_timezone(&Local).date_naive()
    }
}

/// Refresh, reporting once if the journal could not be read completely.
pub(crate) fn overview(journal: &mut Journal) -> Overview {
    let overview = journal.refresh();
    if let Some(e) = journal.cursor_mut().take_load_error() {
        warning(format!(
            "Journal {} only partially read ({}); later entries are ignored.",
            journal.store().path().display(),
            e
        ));
    }
    overview
}

/// Persist the session. A failed write is reported but does not fail the
/// command.
pub(crate) fn finish(journal: &mut Journal) {
    if let Err(e) = journal.flush() {
        warning(format!(
            "Could not write to {}: {}",
            journal.store().path().display(),
            e
        ));
    }
}
