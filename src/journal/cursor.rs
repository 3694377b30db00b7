//! Ordered view over committed ++ session entries.

use super::session::SessionBuffer;
use super::store::LogStore;
use crate::errors::AppError;
use crate::models::Entry;
use tracing::{debug, warn};

/// Replays the journal followed by the session buffer.
///
/// Committed entries are read from disk on first use and cached for the
/// life of the cursor. `next` and `prev` share the same pair of indices:
/// call [`Cursor::reset`] before switching direction. [`Cursor::forward`]
/// and [`Cursor::backward`] do that for you.
#[derive(Debug)]
pub struct Cursor {
    store: LogStore,
    committed: Option<Vec<Entry>>,
    session: SessionBuffer,
    load_error: Option<AppError>,
    partial: bool,
    c_idx: usize,
    s_idx: usize,
}

impl Cursor {
    pub fn new(store: LogStore) -> Self {
        Self {
            store,
            committed: None,
            session: SessionBuffer::new(),
            load_error: None,
            partial: false,
            c_idx: 0,
            s_idx: 0,
        }
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn session(&self) -> &SessionBuffer {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionBuffer {
        &mut self.session
    }

    pub fn is_loaded(&self) -> bool {
        self.committed.is_some()
    }

    /// Whether the initial load stopped at a malformed or unreadable entry.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    /// Error that cut the initial load short, if any. Reported once.
    pub fn take_load_error(&mut self) -> Option<AppError> {
        self.load_error.take()
    }

    fn ensure_loaded(&mut self) {
        if self.committed.is_some() {
            return;
        }
        let loaded = self.store.load();
        if let Some(err) = &loaded.error {
            warn!(
                path = %self.store.path().display(),
                kept = loaded.entries.len(),
                "journal only partially loaded: {}",
                err
            );
        }
        debug!(
            path = %self.store.path().display(),
            entries = loaded.entries.len(),
            "journal loaded"
        );
        self.partial = loaded.error.is_some();
        self.load_error = loaded.error;
        self.committed = Some(loaded.entries);
    }

    pub fn reset(&mut self) {
        self.c_idx = 0;
        self.s_idx = 0;
    }

    /// Next entry in log order: committed first, then session.
    pub fn next(&mut self) -> Option<&Entry> {
        self.ensure_loaded();
        let committed = self.committed.as_deref().unwrap_or_default();
        if self.c_idx < committed.len() {
            self.c_idx += 1;
            return committed.get(self.c_idx - 1);
        }
        let session = self.session.entries();
        if self.s_idx < session.len() {
            self.s_idx += 1;
            return session.get(self.s_idx - 1);
        }
        None
    }

    /// Next entry in reverse log order: session newest first, then committed.
    pub fn prev(&mut self) -> Option<&Entry> {
        self.ensure_loaded();
        let session = self.session.entries();
        if self.s_idx < session.len() {
            self.s_idx += 1;
            return session.get(session.len() - self.s_idx);
        }
        let committed = self.committed.as_deref().unwrap_or_default();
        if self.c_idx < committed.len() {
            self.c_idx += 1;
            return committed.get(committed.len() - self.c_idx);
        }
        None
    }

    /// Reset and iterate in log order.
    pub fn forward(&mut self) -> Forward<'_> {
        self.reset();
        Forward { cursor: self }
    }

    /// Reset and iterate in reverse log order.
    pub fn backward(&mut self) -> Backward<'_> {
        self.reset();
        Backward { cursor: self }
    }

    /// Session entries are on disk now: fold them into the cache.
    pub fn commit_session(&mut self) {
        let flushed = self.session.drain();
        if let Some(committed) = self.committed.as_mut() {
            committed.extend(flushed);
        }
        self.reset();
    }

    /// The journal was rewritten with `entries`, which already include
    /// everything the session held.
    pub fn replace_committed(&mut self, entries: Vec<Entry>) {
        self.committed = Some(entries);
        self.session.clear();
        self.reset();
    }
}

pub struct Forward<'a> {
    cursor: &'a mut Cursor,
}

impl Iterator for Forward<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.cursor.next().cloned()
    }
}

pub struct Backward<'a> {
    cursor: &'a mut Cursor,
}

impl Iterator for Backward<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.cursor.prev().cloned()
    }
}
