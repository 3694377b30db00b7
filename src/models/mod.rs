pub mod entry;
pub mod entry_kind;
pub mod overview;
pub mod report;
pub mod week;

pub use entry::Entry;
pub use entry_kind::EntryKind;
pub use overview::{Overview, Tally};
pub use report::{Grid, WeekReport, YearReport};
pub use week::WeekAnchor;
