use crate::models::Entry;
use chrono::Duration;

/// Entries produced since process start and not yet flushed.
#[derive(Debug, Default, Clone)]
pub struct SessionBuffer {
    entries: Vec<Entry>,
}

impl SessionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer an entry. Timed entries arrive stamped with their end time
    /// and are stored with their start time.
    pub fn send(&mut self, mut e: Entry) {
        if e.dur > Duration::zero() {
            e.at -= e.dur;
        }
        self.entries.push(e);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Entry> {
        std::mem::take(&mut self.entries)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
