//! Study session domain model.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Sentinel subject id for sessions recorded without a related subject.
pub const NO_SUBJECT: i64 = -1;

/// A committed study run. Immutable once inserted; removed only by an
/// explicit delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Option<i64>,
    /// Related subject, or [`NO_SUBJECT`] when the run was unassigned.
    pub subject_id: i64,
    pub subject_name: String,
    pub start: NaiveDateTime,
    /// Duration in seconds, as reported by the timer at stop time.
    pub duration: i64,
}

impl Session {
    /// Builds a session record from a stopped timer's final elapsed value,
    /// stamped with the current local time.
    pub fn from_elapsed(subject_id: Option<i64>, subject_name: &str, elapsed_secs: u64) -> Self {
        Session {
            id: None,
            subject_id: subject_id.unwrap_or(NO_SUBJECT),
            subject_name: subject_name.to_string(),
            start: Local::now().naive_local(),
            duration: elapsed_secs as i64,
        }
    }
}
