pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{grid_duration, short_duration};
