//! Task domain model and filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task urgency. Stored as an integer; unknown values decode to `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn value(&self) -> i64 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }

    pub fn from_value(value: i64) -> Self {
        match value {
            0 => Priority::Low,
            2 => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub fn all() -> [Priority; 3] {
        [Priority::Low, Priority::Medium, Priority::High]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        write!(f, "{}", title)
    }
}

/// A task tied to a subject, with a due date and completion flag.
///
/// `subject_name` is denormalized so task lists render without a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub subject_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub subject_name: String,
    pub completed: bool,
}

impl Task {
    pub fn new(subject_id: i64, subject_name: &str, title: &str, description: &str, due_date: NaiveDate, priority: Priority) -> Self {
        Task {
            id: None,
            subject_id,
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            priority,
            subject_name: subject_name.to_string(),
            completed: false,
        }
    }
}

/// Selects which tasks a fetch returns.
#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ForSubject(i64),
    Upcoming,
    Completed,
}
