//! Foreground study session service.
//!
//! `TimerService` is the exclusive owner of the timer state for as long as
//! the watch process lives, independent of any attached client. Clients
//! observe state and issue commands through [`TimerHandle`]s obtained from
//! `bind()`; handles can be dropped and re-created freely (UI teardown and
//! re-attach) without disturbing the running stopwatch.
//!
//! Every mutation goes through the service's own command methods and the
//! internal ticker, serialized on one async mutex. A `stop()` therefore
//! always observes the most recent tick, and published snapshots are
//! monotonic in elapsed time.

use crate::db::sessions::Sessions;
use crate::libs::feed::{Feed, FeedSubscription};
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::timer::{TimerMode, TimerState};
use crate::msg_debug;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;

/// Minimum committable session length in seconds. Shorter runs are
/// rejected as "too short" and never persisted.
pub const MIN_SESSION_SECS: u64 = 36;

/// Default tick cadence.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Result of a timer command. Invalid transitions are reported as
/// `applied == false` with the untouched state, never as errors.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub applied: bool,
    pub state: TimerState,
}

/// Outcome of the commit decision on a stopped run.
#[derive(Debug, Clone)]
pub enum CommitOutcome {
    /// The run was persisted; the timer returned to idle.
    Saved(Session),
    /// Below [`MIN_SESSION_SECS`]; nothing persisted, timer reset.
    TooShort(u64),
    /// The timer was not in the stopped state.
    NothingToCommit,
}

#[derive(Clone)]
pub struct TimerService {
    state: Arc<Mutex<TimerState>>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    state_feed: Arc<Feed<TimerState>>,
    session_feed: Arc<Feed<Option<Session>>>,
    tick_interval: Duration,
}

impl TimerService {
    pub fn new() -> Self {
        Self::with_tick_interval(Duration::from_millis(TICK_INTERVAL_MS))
    }

    /// Builds a service with a custom tick cadence (configuration and
    /// tests; the elapsed counter still advances one second per tick).
    pub fn with_tick_interval(tick_interval: Duration) -> Self {
        TimerService {
            state: Arc::new(Mutex::new(TimerState::new())),
            ticker: Arc::new(Mutex::new(None)),
            state_feed: Arc::new(Feed::new(TimerState::new())),
            session_feed: Arc::new(Feed::new(None)),
            tick_interval,
        }
    }

    /// Attaches a client. The handle reads state snapshots and issues
    /// commands; dropping it detaches the client without affecting the
    /// timer. Sequential binds observe the same underlying state.
    pub fn bind(&self) -> TimerHandle {
        TimerHandle {
            service: self.clone(),
            updates: self.state_feed.subscribe(),
        }
    }

    /// Subscribes to committed sessions (the notification presenter path).
    pub fn subscribe_sessions(&self) -> FeedSubscription<Option<Session>> {
        self.session_feed.subscribe()
    }

    pub async fn snapshot(&self) -> TimerState {
        self.state.lock().await.clone()
    }

    pub async fn start(&self, subject_id: Option<i64>, subject_name: &str) -> CommandResult {
        let result = {
            let mut state = self.state.lock().await;
            let applied = state.start(subject_id, subject_name);
            CommandResult {
                applied,
                state: state.clone(),
            }
        };
        if result.applied {
            self.spawn_ticker().await;
            self.publish(result.state.clone());
        } else {
            msg_debug!(format!("start rejected in mode {}", result.state.mode));
        }
        result
    }

    pub async fn pause(&self) -> CommandResult {
        let result = {
            let mut state = self.state.lock().await;
            let applied = state.pause();
            CommandResult {
                applied,
                state: state.clone(),
            }
        };
        if result.applied {
            self.publish(result.state.clone());
        }
        result
    }

    pub async fn resume(&self) -> CommandResult {
        let result = {
            let mut state = self.state.lock().await;
            let applied = state.resume();
            CommandResult {
                applied,
                state: state.clone(),
            }
        };
        if result.applied {
            self.spawn_ticker().await;
            self.publish(result.state.clone());
        }
        result
    }

    /// Ends the run and returns the final elapsed seconds for the commit
    /// decision, or `None` when no run was active. The mode change and the
    /// final read happen under the state lock, so no tick can land after
    /// the returned value.
    pub async fn stop(&self) -> Option<u64> {
        let (elapsed, state) = {
            let mut state = self.state.lock().await;
            (state.stop(), state.clone())
        };
        if elapsed.is_some() {
            self.cancel_ticker().await;
            self.publish(state);
        }
        elapsed
    }

    /// Discards any accrued time and returns to idle. Reported as not
    /// applied when the timer was already idle, like any other no-op
    /// transition.
    pub async fn cancel(&self) -> CommandResult {
        let result = {
            let mut state = self.state.lock().await;
            let applied = state.mode != TimerMode::Idle;
            state.reset();
            CommandResult {
                applied,
                state: state.clone(),
            }
        };
        if result.applied {
            self.cancel_ticker().await;
            self.publish(result.state.clone());
        }
        result
    }

    /// Commits the stopped run as a session record.
    ///
    /// On success or a too-short rejection the timer resets to idle. A
    /// persistence failure propagates as an error and leaves the stopped
    /// state intact so the caller can retry; the insert runs on the
    /// blocking pool and never stalls tick emission.
    pub async fn commit(&self, sessions: &Arc<Sessions>) -> Result<CommitOutcome> {
        let pending = {
            let state = self.state.lock().await;
            if state.mode != TimerMode::Stopped {
                return Ok(CommitOutcome::NothingToCommit);
            }
            state.clone()
        };

        if pending.elapsed_secs < MIN_SESSION_SECS {
            let elapsed = pending.elapsed_secs;
            self.cancel().await;
            return Ok(CommitOutcome::TooShort(elapsed));
        }

        let session = Session::from_elapsed(pending.subject_id, &pending.subject_name, pending.elapsed_secs);
        let db = Arc::clone(sessions);
        let record = session.clone();
        tokio::task::spawn_blocking(move || db.insert(&record))
            .await
            .map_err(|e| crate::msg_error_anyhow!(Message::ServiceTaskPanicked(e.to_string())))??;

        self.cancel().await;
        self.session_feed.publish(Some(session.clone()));
        Ok(CommitOutcome::Saved(session))
    }

    fn publish(&self, state: TimerState) {
        self.state_feed.publish(state);
    }

    /// Spawns the 1-second ticker task, replacing any previous one. The
    /// task ends itself as soon as the state leaves `Running`.
    async fn spawn_ticker(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(handle) = ticker_guard.take() {
            handle.abort();
        }

        let state = Arc::clone(&self.state);
        let feed = Arc::clone(&self.state_feed);
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(tick_interval);
            // The first tick of tokio's interval fires immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let snapshot = {
                    let mut guard = state.lock().await;
                    if !guard.tick() {
                        break;
                    }
                    guard.clone()
                };
                feed.publish(snapshot);
            }
        });

        *ticker_guard = Some(handle);
    }

    async fn cancel_ticker(&self) {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
    }
}

impl Default for TimerService {
    fn default() -> Self {
        Self::new()
    }
}

/// A client's attachment to the running service: snapshot access plus the
/// command surface. Dropping the handle is the unbind.
pub struct TimerHandle {
    service: TimerService,
    updates: FeedSubscription<TimerState>,
}

impl TimerHandle {
    /// Latest published state without waiting.
    pub fn snapshot(&self) -> TimerState {
        self.updates.latest()
    }

    /// Waits for the next state update (tick or transition).
    pub async fn next_update(&mut self) -> Option<TimerState> {
        self.updates.next().await
    }

    pub async fn start(&self, subject_id: Option<i64>, subject_name: &str) -> CommandResult {
        self.service.start(subject_id, subject_name).await
    }

    pub async fn pause(&self) -> CommandResult {
        self.service.pause().await
    }

    pub async fn resume(&self) -> CommandResult {
        self.service.resume().await
    }

    pub async fn stop(&self) -> Option<u64> {
        self.service.stop().await
    }

    pub async fn cancel(&self) -> CommandResult {
        self.service.cancel().await
    }
}
