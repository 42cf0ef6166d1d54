//! Session browsing and deletion command.
//!
//! Without flags it prints all recorded sessions, most recent first.
//! With `--subject` it shows that subject's ten most recent sessions,
//! matching the per-subject history view.

use crate::db::sessions::Sessions;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

const RECENT_PER_SUBJECT: i64 = 10;

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    action: Option<SessionAction>,
}

#[derive(Debug, Subcommand)]
enum SessionAction {
    /// List recorded sessions
    List {
        /// Only show recent sessions for this subject
        #[arg(short, long)]
        subject: Option<i64>,
    },
    /// Delete a session by id
    Delete { id: i64 },
}

pub fn cmd(args: SessionArgs) -> Result<()> {
    match args.action.unwrap_or(SessionAction::List { subject: None }) {
        SessionAction::List { subject } => list(subject),
        SessionAction::Delete { id } => delete(id),
    }
}

fn list(subject: Option<i64>) -> Result<()> {
    let sessions_db = Sessions::new()?;
    let sessions = match subject {
        Some(id) => sessions_db.recent_for_subject(id, RECENT_PER_SUBJECT)?,
        None => sessions_db.fetch_all()?,
    };

    if sessions.is_empty() {
        msg_print!(Message::NoSessionsFound);
        return Ok(());
    }

    msg_print!(Message::SessionsHeader);
    View::sessions(&sessions)
}

fn delete(id: i64) -> Result<()> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteSession.to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    let deleted = Sessions::new()?.delete(id)?;
    if deleted == 0 {
        msg_error!(Message::SessionNotFound(id));
    } else {
        msg_success!(Message::SessionDeleted);
    }
    Ok(())
}
