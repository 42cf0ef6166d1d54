use super::formatter::{format_elapsed, format_timestamp, to_hours};
use super::session::Session;
use super::subject::Subject;
use super::task::Task;
use anyhow::Result;
use chrono::{Local, TimeZone};
use prettytable::{row, Table};
use std::collections::HashMap;

pub struct View {}

impl View {
    /// Prints subjects with studied hours against their goal.
    pub fn subjects(subjects: &[Subject], studied_secs: &HashMap<i64, i64>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "GOAL (H)", "STUDIED (H)", "PROGRESS"]);
        for subject in subjects {
            let id = subject.id.unwrap_or(0);
            let studied = to_hours(*studied_secs.get(&id).unwrap_or(&0));
            let progress = if subject.goal_hours > 0.0 {
                format!("{:.0}%", (studied / subject.goal_hours * 100.0).min(100.0))
            } else {
                "-".to_string()
            };
            table.add_row(row![id, subject.name, subject.goal_hours, studied, progress]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "SUBJECT", "TITLE", "DUE DATE", "PRIORITY", "DONE"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.subject_name,
                task.title,
                task.due_date.format("%d %b, %Y"),
                task.priority,
                if task.completed { "x" } else { "" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn sessions(sessions: &[Session]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "SUBJECT", "STARTED", "DURATION"]);
        for session in sessions {
            let started = Local
                .from_local_datetime(&session.start)
                .single()
                .map(|dt| format_timestamp(&dt))
                .unwrap_or_else(|| session.start.format("%d %b, %Y %H:%M").to_string());
            table.add_row(row![
                session.id.unwrap_or(0),
                session.subject_name,
                started,
                format_elapsed(session.duration.max(0) as u64)
            ]);
        }
        table.printstd();

        Ok(())
    }
}
