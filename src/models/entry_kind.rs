use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Created,
    Deleted,
    Work,
    Break,
}

impl EntryKind {
    /// Single-character code used in the journal file.
    pub fn code(&self) -> char {
        match self {
            EntryKind::Created => 'c',
            EntryKind::Deleted => 'd',
            EntryKind::Work => 'w',
            EntryKind::Break => 'b',
        }
    }

    /// Convert journal code → enum. The token must be exactly one character.
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "c" => Some(EntryKind::Created),
            "d" => Some(EntryKind::Deleted),
            "w" => Some(EntryKind::Work),
            "b" => Some(EntryKind::Break),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Created => "created",
            EntryKind::Deleted => "deleted",
            EntryKind::Work => "work",
            EntryKind::Break => "break",
        }
    }

    /// Work and Break carry a duration, lifecycle kinds do not.
    pub fn is_timed(&self) -> bool {
        matches!(self, EntryKind::Work | EntryKind::Break)
    }

    /// Column of a (work, break) pair this kind accumulates into.
    pub fn slot(&self) -> Option<usize> {
        match self {
            EntryKind::Work => Some(0),
            EntryKind::Break => Some(1),
            _ => None,
        }
    }
}
