//! Study session timer state machine.
//!
//! The one piece of real logic in the application: a stopwatch with four
//! modes and strict transition rules. The state itself is passive; the
//! watch service drives `tick()` once per interval and owns all mutation.
//!
//! ```text
//! Idle → Running ⇄ Paused → Stopped → Idle
//! ```
//!
//! `Stopped` is transient: it holds the final elapsed value until the
//! caller commits it as a session or discards it, then the state returns
//! to `Idle`. Invalid transitions are rejected as no-ops, never as errors,
//! since they indicate a stale client rather than a user mistake.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Idle,
    Running,
    Paused,
    Stopped,
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerMode::Idle => "idle",
            TimerMode::Running => "running",
            TimerMode::Paused => "paused",
            TimerMode::Stopped => "stopped",
        };
        write!(f, "{}", name)
    }
}

/// Snapshot of the stopwatch: mode, accrued seconds, and the subject the
/// run is related to (if any).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: TimerMode,
    pub elapsed_secs: u64,
    pub subject_id: Option<i64>,
    pub subject_name: String,
    pub started_at: Option<NaiveDateTime>,
}

impl TimerState {
    pub fn new() -> Self {
        TimerState {
            mode: TimerMode::Idle,
            elapsed_secs: 0,
            subject_id: None,
            subject_name: String::new(),
            started_at: None,
        }
    }

    /// Begins a new run. Valid from `Idle`, and from `Stopped` where any
    /// uncommitted elapsed time is discarded. Returns `false` without
    /// touching the state when already `Running` or `Paused`.
    pub fn start(&mut self, subject_id: Option<i64>, subject_name: &str) -> bool {
        match self.mode {
            TimerMode::Idle | TimerMode::Stopped => {
                self.mode = TimerMode::Running;
                self.elapsed_secs = 0;
                self.subject_id = subject_id;
                self.subject_name = subject_name.to_string();
                self.started_at = Some(Local::now().naive_local());
                true
            }
            TimerMode::Running | TimerMode::Paused => false,
        }
    }

    /// Accrues one second. Only advances while `Running`.
    pub fn tick(&mut self) -> bool {
        if self.mode == TimerMode::Running {
            self.elapsed_secs += 1;
            true
        } else {
            false
        }
    }

    /// Freezes elapsed time. Valid only from `Running`.
    pub fn pause(&mut self) -> bool {
        if self.mode == TimerMode::Running {
            self.mode = TimerMode::Paused;
            true
        } else {
            false
        }
    }

    /// Continues a paused run without resetting elapsed time.
    pub fn resume(&mut self) -> bool {
        if self.mode == TimerMode::Paused {
            self.mode = TimerMode::Running;
            true
        } else {
            false
        }
    }

    /// Ends the run and surfaces the final elapsed value for the commit
    /// decision. Valid from `Running` or `Paused`; the elapsed value is
    /// not persisted here.
    pub fn stop(&mut self) -> Option<u64> {
        match self.mode {
            TimerMode::Running | TimerMode::Paused => {
                self.mode = TimerMode::Stopped;
                Some(self.elapsed_secs)
            }
            TimerMode::Idle | TimerMode::Stopped => None,
        }
    }

    /// Discards any accrued time and returns to `Idle`.
    pub fn reset(&mut self) {
        *self = TimerState::new();
    }

    pub fn is_active(&self) -> bool {
        matches!(self.mode, TimerMode::Running | TimerMode::Paused)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
