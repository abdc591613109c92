// View filter for the visible task list

use crate::error::StoreError;
use crate::models::{Task, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which tasks are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Incomplete,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Incomplete, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Incomplete => "incomplete",
            Filter::Completed => "completed",
        }
    }

    /// Whether `task` is visible under this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Incomplete => task.status == TaskStatus::Incomplete,
            Filter::Completed => task.status == TaskStatus::Complete,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "incomplete" => Ok(Filter::Incomplete),
            "completed" => Ok(Filter::Completed),
            _ => Err(StoreError::InvalidFilter(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;
    use chrono::Utc;

    fn task(status: TaskStatus) -> Task {
        Task {
            id: TaskId::generate(),
            title: "Test".to_string(),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_filter_matches() {
        let open = task(TaskStatus::Incomplete);
        let done = task(TaskStatus::Complete);

        assert!(Filter::All.matches(&open));
        assert!(Filter::All.matches(&done));
        assert!(Filter::Incomplete.matches(&open));
        assert!(!Filter::Incomplete.matches(&done));
        assert!(Filter::Completed.matches(&done));
        assert!(!Filter::Completed.matches(&open));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("Incomplete".parse::<Filter>().unwrap(), Filter::Incomplete);
        assert_eq!(" completed ".parse::<Filter>().unwrap(), Filter::Completed);
    }

    #[test]
    fn test_filter_from_str_rejects_unknown() {
        // "complete" is a status, not a filter value
        let err = "complete".parse::<Filter>().unwrap_err();
        assert_eq!(err, StoreError::InvalidFilter("complete".to_string()));
        assert!("".parse::<Filter>().is_err());
    }

    #[test]
    fn test_filter_display_round_trips() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
    }
}
