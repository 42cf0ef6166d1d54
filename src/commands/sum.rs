//! Study summary command.
//!
//! A dashboard over the stored data: overall goal versus studied hours,
//! the five most recent sessions, and the upcoming task list.

use crate::db::sessions::Sessions;
use crate::db::subjects::Subjects;
use crate::db::tasks::Tasks;
use crate::libs::formatter::to_hours;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

const RECENT_SESSIONS: i64 = 5;

#[derive(Debug, Args)]
pub struct SumArgs {}

pub fn cmd(_args: SumArgs) -> Result<()> {
    let subjects = Subjects::new()?;
    let sessions = Sessions::new()?;
    let tasks = Tasks::new()?;

    msg_print!(Message::SummaryHeader);

    let subject_count = subjects.count()?;
    let goal_hours = subjects.total_goal_hours()?;
    let studied_hours = to_hours(sessions.total_duration()?);
    println!("Subjects: {}", subject_count);
    println!("Studied: {:.2} of {:.2} goal hours", studied_hours, goal_hours);

    let recent = sessions.recent(RECENT_SESSIONS)?;
    if !recent.is_empty() {
        msg_print!(Message::RecentSessionsHeader(recent.len()));
        View::sessions(&recent)?;
    }

    let upcoming = tasks.fetch(TaskFilter::Upcoming)?;
    if !upcoming.is_empty() {
        msg_print!(Message::UpcomingTasksHeader);
        View::tasks(&upcoming)?;
    }

    Ok(())
}
