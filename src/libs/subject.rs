//! Subject domain model.

use serde::{Deserialize, Serialize};

/// A study subject with a goal number of study hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: Option<i64>,
    pub name: String,
    pub goal_hours: f64,
}

impl Subject {
    pub fn new(name: &str, goal_hours: f64) -> Self {
        Subject {
            id: None,
            name: name.to_string(),
            goal_hours,
        }
    }
}
