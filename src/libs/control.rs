//! Control channel between CLI invocations and the watch service.
//!
//! Commands issued from outside the service process (`sesl timer ...`, the
//! CLI analog of a notification action) travel as newline-delimited JSON
//! over a Unix domain socket in the application data directory. They map
//! onto exactly the same service commands as an in-process binding, so an
//! external pause is indistinguishable from a bound client's pause.
//!
//! Request handling is factored out of the socket loop so the full
//! command surface is testable without a listener.

use crate::db::sessions::Sessions;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::service::{CommitOutcome, TimerService, MIN_SESSION_SECS};
use crate::libs::session::Session;
use crate::libs::timer::TimerState;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const SOCKET_FILE_NAME: &str = "sesl-watch.sock";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ControlRequest {
    Start { subject_id: Option<i64>, subject_name: String },
    Pause,
    Resume,
    Stop,
    Commit,
    Discard,
    Status,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ControlResponse {
    /// Command handled; `applied` is false for a no-op invalid transition.
    State { applied: bool, state: TimerState },
    /// Run ended; final elapsed seconds await a commit decision.
    Stopped { elapsed: u64, state: TimerState },
    Committed { session: Session },
    TooShort { elapsed: u64, min_secs: u64 },
    NothingToCommit,
    Error { message: String },
}

/// Maps one control request onto the service command surface.
pub async fn handle_request(service: &TimerService, sessions: &Arc<Sessions>, request: ControlRequest) -> ControlResponse {
    match request {
        ControlRequest::Start { subject_id, subject_name } => {
            let result = service.start(subject_id, &subject_name).await;
            ControlResponse::State {
                applied: result.applied,
                state: result.state,
            }
        }
        ControlRequest::Pause => {
            let result = service.pause().await;
            ControlResponse::State {
                applied: result.applied,
                state: result.state,
            }
        }
        ControlRequest::Resume => {
            let result = service.resume().await;
            ControlResponse::State {
                applied: result.applied,
                state: result.state,
            }
        }
        ControlRequest::Stop => match service.stop().await {
            Some(elapsed) => ControlResponse::Stopped {
                elapsed,
                state: service.snapshot().await,
            },
            None => ControlResponse::State {
                applied: false,
                state: service.snapshot().await,
            },
        },
        ControlRequest::Commit => match service.commit(sessions).await {
            Ok(CommitOutcome::Saved(session)) => ControlResponse::Committed { session },
            Ok(CommitOutcome::TooShort(elapsed)) => ControlResponse::TooShort {
                elapsed,
                min_secs: MIN_SESSION_SECS,
            },
            Ok(CommitOutcome::NothingToCommit) => ControlResponse::NothingToCommit,
            Err(e) => ControlResponse::Error { message: e.to_string() },
        },
        ControlRequest::Discard => {
            let result = service.cancel().await;
            ControlResponse::State {
                applied: result.applied,
                state: result.state,
            }
        }
        ControlRequest::Status => ControlResponse::State {
            applied: true,
            state: service.snapshot().await,
        },
    }
}

/// Removes a stale socket file left behind by an earlier service run.
pub fn remove_stale_socket() -> Result<()> {
    let path = DataStorage::new().get_path(SOCKET_FILE_NAME)?;
    if path.exists() {
        std::fs::remove_file(&path)?;
    }
    Ok(())
}

#[cfg(unix)]
mod unix_socket {
    use super::*;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::{UnixListener, UnixStream};

    /// Accept loop for control connections. Each connection carries one
    /// request line and receives one response line. Runs until the task
    /// is dropped at service shutdown.
    pub async fn serve(service: TimerService, sessions: Arc<Sessions>) -> Result<()> {
        let path = DataStorage::new().get_path(SOCKET_FILE_NAME)?;
        remove_stale_socket()?;
        let listener = UnixListener::bind(&path)?;
        msg_debug!(format!("control socket listening at {}", path.display()));

        loop {
            let (stream, _) = listener.accept().await?;
            let service = service.clone();
            let sessions = Arc::clone(&sessions);
            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, service, sessions).await {
                    msg_debug!(format!("control connection failed: {}", e));
                }
            });
        }
    }

    async fn handle_connection(stream: UnixStream, service: TimerService, sessions: Arc<Sessions>) -> Result<()> {
        let (reader, mut writer) = stream.into_split();
        let mut lines = BufReader::new(reader).lines();

        if let Some(line) = lines.next_line().await? {
            let response = match serde_json::from_str::<ControlRequest>(&line) {
                Ok(request) => handle_request(&service, &sessions, request).await,
                Err(e) => ControlResponse::Error { message: e.to_string() },
            };
            let mut payload = serde_json::to_string(&response)?;
            payload.push('\n');
            writer.write_all(payload.as_bytes()).await?;
        }

        Ok(())
    }

    /// Sends a single request to the running service and waits for its
    /// response. Fails with a user-facing hint when no service is
    /// listening.
    pub async fn send(request: &ControlRequest) -> Result<ControlResponse> {
        let path = DataStorage::new().get_path(SOCKET_FILE_NAME)?;
        let stream = UnixStream::connect(&path)
            .await
            .map_err(|_| msg_error_anyhow!(Message::ServiceNotReachable))?;
        let (reader, mut writer) = stream.into_split();

        let mut payload = serde_json::to_string(request)?;
        payload.push('\n');
        writer.write_all(payload.as_bytes()).await?;

        let mut lines = BufReader::new(reader).lines();
        match lines.next_line().await? {
            Some(line) => Ok(serde_json::from_str(&line)?),
            None => Err(msg_error_anyhow!(Message::ServiceNotReachable)),
        }
    }
}

#[cfg(unix)]
pub use unix_socket::{send, serve};

#[cfg(not(unix))]
pub async fn serve(_service: TimerService, _sessions: Arc<Sessions>) -> Result<()> {
    crate::msg_bail_anyhow!(Message::ControlSocketNotSupported)
}

#[cfg(not(unix))]
pub async fn send(_request: &ControlRequest) -> Result<ControlResponse> {
    crate::msg_bail_anyhow!(Message::ControlSocketNotSupported)
}
