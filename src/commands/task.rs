//! Task management command.
//!
//! Task creation walks through a wizard: subject selection, title,
//! description, due date, and priority. Lists use the two-key ordering
//! (due date first, then priority) so the most urgent work surfaces.

use crate::db::subjects::Subjects;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task, TaskFilter};
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    action: Option<TaskAction>,
}

#[derive(Debug, Subcommand)]
enum TaskAction {
    /// Create a new task
    Add,
    /// List tasks, optionally narrowed to one subject
    List {
        /// Only show tasks for this subject
        #[arg(short, long)]
        subject: Option<i64>,
        /// Include completed tasks
        #[arg(short, long)]
        all: bool,
    },
    /// Toggle a task's completion flag
    Complete { id: i64 },
    /// Delete a task
    Delete { id: i64 },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.action.unwrap_or(TaskAction::List { subject: None, all: false }) {
        TaskAction::Add => add(),
        TaskAction::List { subject, all } => list(subject, all),
        TaskAction::Complete { id } => complete(id),
        TaskAction::Delete { id } => delete(id),
    }
}

fn add() -> Result<()> {
    let subjects = Subjects::new()?.fetch_all()?;
    if subjects.is_empty() {
        msg_print!(Message::NoSubjectsFound);
        return Ok(());
    }

    let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSubjectName.to_string())
        .items(&names)
        .default(0)
        .interact()?;
    let subject = &subjects[selection];

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;
    let due_date = prompt_due_date()?;

    let priorities = Priority::all();
    let priority_names: Vec<String> = priorities.iter().map(|p| p.to_string()).collect();
    let priority_selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priority_names)
        .default(Priority::Medium.value() as usize)
        .interact()?;

    let task = Task::new(
        subject.id.unwrap_or_default(),
        &subject.name,
        &title,
        &description,
        due_date,
        priorities[priority_selection],
    );
    Tasks::new()?.upsert(&task)?;

    msg_success!(Message::TaskSaved(title));
    Ok(())
}

fn list(subject: Option<i64>, all: bool) -> Result<()> {
    let tasks_db = Tasks::new()?;

    let filter = match subject {
        Some(id) => TaskFilter::ForSubject(id),
        None if all => TaskFilter::All,
        None => TaskFilter::Upcoming,
    };
    let tasks = tasks_db.fetch(filter)?;

    if tasks.is_empty() {
        msg_print!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksUpcomingHeader);
    View::tasks(&tasks)
}

fn complete(id: i64) -> Result<()> {
    match Tasks::new()?.toggle_completed(id)? {
        Some(task) if task.completed => msg_success!(Message::TaskCompleted(task.title)),
        Some(task) => msg_success!(Message::TaskSaved(task.title)),
        None => msg_error!(Message::TaskNotFound(id)),
    }
    Ok(())
}

fn delete(id: i64) -> Result<()> {
    let tasks = Tasks::new()?;
    let existing = match tasks.get_by_id(id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(existing.title).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    tasks.delete(id)?;
    msg_success!(Message::TaskDeleted);
    Ok(())
}

/// Prompts for a due date until the input parses as YYYY-MM-DD.
fn prompt_due_date() -> Result<NaiveDate> {
    loop {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDueDate.to_string())
            .interact_text()?;

        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => msg_error!(Message::InvalidDueDate(raw)),
        }
    }
}
