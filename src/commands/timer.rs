//! Timer control command.
//!
//! Each subcommand maps onto one control request sent to the running watch
//! service, so `sesl timer pause` from a shell has the same effect as any
//! other client bound to the service. `stop` additionally walks through
//! the commit decision: the final elapsed value comes back from the
//! service and the user chooses whether to save or discard it.

use crate::db::subjects::Subjects;
use crate::libs::control::{self, ControlRequest, ControlResponse};
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Args)]
pub struct TimerArgs {
    #[command(subcommand)]
    action: TimerAction,
}

#[derive(Debug, Subcommand)]
enum TimerAction {
    /// Start a new timed run
    Start {
        /// Subject to attribute the run to
        #[arg(short, long)]
        subject: Option<i64>,
    },
    /// Pause the running timer
    Pause,
    /// Resume a paused timer
    Resume,
    /// End the run and decide whether to save it
    Stop,
    /// Save the stopped run without prompting
    Commit,
    /// Discard the current run
    Cancel,
    /// Show the timer's current mode and elapsed time
    Status,
}

pub async fn cmd(args: TimerArgs) -> Result<()> {
    match args.action {
        TimerAction::Start { subject } => start(subject).await,
        TimerAction::Pause => pause().await,
        TimerAction::Resume => resume().await,
        TimerAction::Stop => stop().await,
        TimerAction::Commit => commit().await,
        TimerAction::Cancel => cancel().await,
        TimerAction::Status => status().await,
    }
}

async fn start(subject: Option<i64>) -> Result<()> {
    let (subject_id, subject_name) = resolve_subject(subject)?;

    let response = control::send(&ControlRequest::Start {
        subject_id,
        subject_name: subject_name.clone(),
    })
    .await?;

    match response {
        ControlResponse::State { applied: true, .. } => msg_success!(Message::TimerStarted(subject_name)),
        ControlResponse::State { applied: false, .. } => msg_error!(Message::TimerAlreadyRunning),
        other => report_unexpected(other),
    }
    Ok(())
}

async fn pause() -> Result<()> {
    match control::send(&ControlRequest::Pause).await? {
        ControlResponse::State { applied: true, state } => msg_success!(Message::TimerPaused(state.elapsed_secs)),
        ControlResponse::State { applied: false, .. } => msg_error!(Message::TimerNotRunning),
        other => report_unexpected(other),
    }
    Ok(())
}

async fn resume() -> Result<()> {
    match control::send(&ControlRequest::Resume).await? {
        ControlResponse::State { applied: true, state } => msg_success!(Message::TimerResumed(state.elapsed_secs)),
        ControlResponse::State { applied: false, .. } => msg_error!(Message::TimerCommandRejected("resume".to_string())),
        other => report_unexpected(other),
    }
    Ok(())
}

async fn stop() -> Result<()> {
    let elapsed = match control::send(&ControlRequest::Stop).await? {
        ControlResponse::Stopped { elapsed, .. } => elapsed,
        ControlResponse::State { applied: false, .. } => {
            msg_error!(Message::TimerNotRunning);
            return Ok(());
        }
        other => {
            report_unexpected(other);
            return Ok(());
        }
    };

    msg_info!(Message::TimerStopped(elapsed));

    let save = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmCommitSession(elapsed).to_string())
        .default(true)
        .interact()?;

    if save {
        commit().await
    } else {
        cancel().await
    }
}

async fn commit() -> Result<()> {
    match control::send(&ControlRequest::Commit).await? {
        ControlResponse::Committed { .. } => msg_success!(Message::SessionSaved),
        ControlResponse::TooShort { min_secs, .. } => msg_error!(Message::SessionTooShort(min_secs)),
        ControlResponse::NothingToCommit => msg_error!(Message::TimerNothingToCommit),
        ControlResponse::Error { message } => msg_error!(Message::SessionSaveFailed(message)),
        other => report_unexpected(other),
    }
    Ok(())
}

async fn cancel() -> Result<()> {
    match control::send(&ControlRequest::Discard).await? {
        ControlResponse::State { applied: true, .. } => msg_info!(Message::TimerCancelled),
        ControlResponse::State { applied: false, .. } => msg_error!(Message::TimerNotRunning),
        other => report_unexpected(other),
    }
    Ok(())
}

async fn status() -> Result<()> {
    match control::send(&ControlRequest::Status).await? {
        ControlResponse::State { state, .. } => {
            msg_info!(Message::TimerStatus(state.mode.to_string(), state.elapsed_secs));
        }
        other => report_unexpected(other),
    }
    Ok(())
}

/// Resolves the subject for a new run. An explicit id must exist; with no
/// id the user picks from the subject list, or starts an unassigned run
/// when the list is empty.
fn resolve_subject(subject: Option<i64>) -> Result<(Option<i64>, String)> {
    let subjects = Subjects::new()?;

    if let Some(id) = subject {
        return match subjects.get_by_id(id)? {
            Some(found) => Ok((found.id, found.name)),
            None => Err(crate::msg_error_anyhow!(Message::SubjectNotFound(id))),
        };
    }

    let all = subjects.fetch_all()?;
    if all.is_empty() {
        return Ok((None, "General".to_string()));
    }

    let mut names: Vec<String> = all.iter().map(|s| s.name.clone()).collect();
    names.push("No subject".to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::NoSubjectForSession.to_string())
        .items(&names)
        .default(0)
        .interact()?;

    if selection == all.len() {
        Ok((None, "General".to_string()))
    } else {
        Ok((all[selection].id, all[selection].name.clone()))
    }
}

fn report_unexpected(response: ControlResponse) {
    msg_error!(Message::ServiceError(format!("{:?}", response)));
}
