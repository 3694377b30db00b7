use super::week::WeekAnchor;
use crate::utils::formatting::grid_duration;
use chrono::Duration;
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tues", "Weds", "Thurs", "Fri", "Sat", "Sun"];
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];
pub const ROW_LABELS: [&str; 3] = ["work", "break", "total"];

/// Fixed-shape report body: one (work, break) pair per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<[Duration; 2]>,
}

impl Grid {
    pub fn new(columns: usize) -> Self {
        Self {
            cells: vec![[Duration::zero(); 2]; columns],
        }
    }

    pub fn add(&mut self, column: usize, slot: usize, dur: Duration) {
        self.cells[column][slot] += dur;
    }

    pub fn cell(&self, column: usize) -> [Duration; 2] {
        self.cells[column]
    }

    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    /// Column-wise sum of (work, break).
    pub fn totals(&self) -> [Duration; 2] {
        self.cells.iter().fold([Duration::zero(); 2], |acc, c| {
            [acc[0] + c[0], acc[1] + c[1]]
        })
    }

    pub fn total(&self) -> Duration {
        let [w, b] = self.totals();
        w + b
    }

    /// Render as three rows (work, break, total). Each row starts with its
    /// label, has one cell per column and ends with the row total.
    /// Zero cells are left blank.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let totals = self.totals();
        let mut rows: Vec<Vec<String>> = ROW_LABELS.iter().map(|l| vec![l.to_string()]).collect();

        for c in self.cells.iter().chain(std::iter::once(&totals)) {
            rows[0].push(grid_duration(c[0]));
            rows[1].push(grid_duration(c[1]));
            rows[2].push(grid_duration(c[0] + c[1]));
        }
        rows
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Cell([Duration; 2]);

        impl Serialize for Cell {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut st = serializer.serialize_struct("Cell", 2)?;
                st.serialize_field("work_secs", &self.0[0].num_seconds())?;
                st.serialize_field("break_secs", &self.0[1].num_seconds())?;
                st.end()
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.cells.len()))?;
        for c in &self.cells {
            seq.serialize_element(&Cell(*c))?;
        }
        seq.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekReport {
    pub activity: String,
    pub week: WeekAnchor,
    pub next: Option<WeekAnchor>,
    pub prev: Option<WeekAnchor>,
    pub days: Grid,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearReport {
    pub activity: String,
    pub year: i32,
    pub next: Option<i32>,
    pub prev: Option<i32>,
    pub months: Grid,
}
