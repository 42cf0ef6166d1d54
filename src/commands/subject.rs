//! Subject management command.
//!
//! Adding and editing go through a small dialoguer wizard so goal hours
//! are validated before they reach the database. Deleting a subject also
//! removes its tasks and sessions after a confirmation prompt.

use crate::db::sessions::Sessions;
use crate::db::subjects::Subjects;
use crate::libs::messages::Message;
use crate::libs::subject::Subject;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::collections::HashMap;

#[derive(Debug, Args)]
pub struct SubjectArgs {
    #[command(subcommand)]
    action: Option<SubjectAction>,
}

#[derive(Debug, Subcommand)]
enum SubjectAction {
    /// Create a new subject
    Add,
    /// List all subjects with studied hours
    List,
    /// Edit a subject's name or goal
    Edit { id: i64 },
    /// Delete a subject and everything referencing it
    Delete { id: i64 },
}

pub fn cmd(args: SubjectArgs) -> Result<()> {
    match args.action.unwrap_or(SubjectAction::List) {
        SubjectAction::Add => add(),
        SubjectAction::List => list(),
        SubjectAction::Edit { id } => edit(id),
        SubjectAction::Delete { id } => delete(id),
    }
}

fn add() -> Result<()> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSubjectName.to_string())
        .interact_text()?;
    let goal_hours = prompt_goal_hours(None)?;

    let subject = Subject::new(&name, goal_hours);
    Subjects::new()?.upsert(&subject)?;

    msg_success!(Message::SubjectSaved(name));
    Ok(())
}

fn list() -> Result<()> {
    let subjects = Subjects::new()?.fetch_all()?;
    if subjects.is_empty() {
        msg_print!(Message::NoSubjectsFound);
        return Ok(());
    }

    let sessions = Sessions::new()?;
    let mut studied: HashMap<i64, i64> = HashMap::new();
    for subject in &subjects {
        if let Some(id) = subject.id {
            studied.insert(id, sessions.total_duration_for_subject(id)?);
        }
    }

    msg_print!(Message::SubjectsHeader);
    View::subjects(&subjects, &studied)
}

fn edit(id: i64) -> Result<()> {
    let subjects = Subjects::new()?;
    let existing = match subjects.get_by_id(id)? {
        Some(subject) => subject,
        None => {
            msg_error!(Message::SubjectNotFound(id));
            return Ok(());
        }
    };

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSubjectName.to_string())
        .default(existing.name.clone())
        .interact_text()?;
    let goal_hours = prompt_goal_hours(Some(existing.goal_hours))?;

    let updated = Subject {
        id: existing.id,
        name: name.clone(),
        goal_hours,
    };
    subjects.upsert(&updated)?;

    msg_success!(Message::SubjectSaved(name));
    Ok(())
}

fn delete(id: i64) -> Result<()> {
    let subjects = Subjects::new()?;
    let existing = match subjects.get_by_id(id)? {
        Some(subject) => subject,
        None => {
            msg_error!(Message::SubjectNotFound(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteSubject(existing.name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    subjects.delete(id)?;
    msg_success!(Message::SubjectDeleted(existing.name));
    Ok(())
}

/// Prompts for goal hours until the input parses as a non-negative number.
fn prompt_goal_hours(default: Option<f64>) -> Result<f64> {
    let theme = ColorfulTheme::default();
    loop {
        let mut input = Input::<String>::with_theme(&theme).with_prompt(Message::PromptGoalHours.to_string());
        if let Some(value) = default {
            input = input.default(value.to_string());
        }
        let raw = input.interact_text()?;

        match raw.trim().parse::<f64>() {
            Ok(hours) if hours >= 0.0 => return Ok(hours),
            _ => msg_error!(Message::InvalidGoalHours(raw)),
        }
    }
}
