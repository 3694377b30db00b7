use super::week::WeekAnchor;
use chrono::Duration;

/// Result of a refresh: the active set plus the navigation anchors the
/// reports start from. `None` stands for "nothing found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overview {
    /// Active activities, sorted alphabetically.
    pub activities: Vec<String>,
    /// Index into `activities` of the most recently used one (0 if none).
    pub selected: usize,
    pub this_week: Option<WeekAnchor>,
    pub prev_week: Option<WeekAnchor>,
    pub this_year: Option<i32>,
    pub prev_year: Option<i32>,
}

impl Overview {
    pub fn selected_activity(&self) -> Option<&str> {
        self.activities.get(self.selected).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// Today's totals for one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub work: Duration,
    pub rest: Duration,
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            work: Duration::zero(),
            rest: Duration::zero(),
        }
    }
}

impl Tally {
    pub fn total(&self) -> Duration {
        self.work + self.rest
    }
}
