//! Derived views over the journal and its compaction.
//!
//! Every query replays the cursor from scratch; days, weeks and years are
//! computed in the timezone handed in by the caller.

pub mod refresh;
pub mod report;
pub mod shrink;
pub mod tally;

pub use refresh::refresh;
pub use report::{weeks, years};
pub use shrink::{ShrinkStats, compact, shrink};
pub use tally::tally;
