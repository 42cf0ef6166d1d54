//! Database operations for committed study sessions.
//!
//! Sessions are insert-only from the timer's point of view: a record is
//! written once when a stopped run is committed and never updated. Lists
//! are returned most recent first, matching the dashboard views (five
//! most recent overall, ten most recent per subject).

use crate::db::db::Db;
use crate::libs::session::Session;
use anyhow::Result;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;

const INSERT_SESSION: &str = "INSERT INTO sessions (subject_id, subject_name, start, duration) VALUES (?1, ?2, ?3, ?4)";
const SELECT_SESSIONS: &str = "SELECT id, subject_id, subject_name, start, duration FROM sessions ORDER BY start DESC";
const SELECT_RECENT: &str = "SELECT id, subject_id, subject_name, start, duration FROM sessions ORDER BY start DESC LIMIT ?1";
const SELECT_RECENT_FOR_SUBJECT: &str =
    "SELECT id, subject_id, subject_name, start, duration FROM sessions WHERE subject_id = ?1 ORDER BY start DESC LIMIT ?2";
const SUM_DURATION: &str = "SELECT SUM(duration) FROM sessions";
const SUM_DURATION_FOR_SUBJECT: &str = "SELECT SUM(duration) FROM sessions WHERE subject_id = ?1";
const DELETE_SESSION: &str = "DELETE FROM sessions WHERE id = ?1";
const DELETE_SESSIONS_FOR_SUBJECT: &str = "DELETE FROM sessions WHERE subject_id = ?1";

fn row_to_session(row: &Row) -> rusqlite::Result<Session> {
    let start: String = row.get(3)?;
    Ok(Session {
        id: row.get(0)?,
        subject_id: row.get(1)?,
        subject_name: row.get(2)?,
        start: NaiveDateTime::parse_from_str(&start, "%Y-%m-%d %H:%M:%S").unwrap_or_default(),
        duration: row.get(4)?,
    })
}

/// Database manager for session records.
pub struct Sessions {
    pub conn: Arc<Mutex<Connection>>,
}

impl Sessions {
    pub fn new() -> Result<Sessions> {
        let db_conn = Db::new()?.conn;
        Ok(Sessions {
            conn: Arc::new(Mutex::new(db_conn)),
        })
    }

    pub fn insert(&self, session: &Session) -> Result<()> {
        let conn = self.conn.lock();
        let start = session.start.format("%Y-%m-%d %H:%M:%S").to_string();
        conn.execute(INSERT_SESSION, params![session.subject_id, session.subject_name, start, session.duration])?;
        Ok(())
    }

    pub fn fetch_all(&self) -> Result<Vec<Session>> {
        self.query_sessions(SELECT_SESSIONS, &[])
    }

    /// The `limit` most recent sessions across all subjects.
    pub fn recent(&self, limit: i64) -> Result<Vec<Session>> {
        self.query_sessions(SELECT_RECENT, &[limit])
    }

    /// The `limit` most recent sessions for one subject.
    pub fn recent_for_subject(&self, subject_id: i64, limit: i64) -> Result<Vec<Session>> {
        self.query_sessions(SELECT_RECENT_FOR_SUBJECT, &[subject_id, limit])
    }

    /// Total studied seconds across all sessions; 0 when there are none.
    pub fn total_duration(&self) -> Result<i64> {
        let conn = self.conn.lock();
        let total: Option<i64> = conn.query_row(SUM_DURATION, [], |row| row.get(0))?;
        Ok(total.unwrap_or(0))
    }

    pub fn total_duration_for_subject(&self, subject_id: i64) -> Result<i64> {
        let conn = self.conn.lock();
        let total: Option<i64> = conn.query_row(SUM_DURATION_FOR_SUBJECT, params![subject_id], |row| row.get(0))?;
        Ok(total.unwrap_or(0))
    }

    pub fn delete(&self, id: i64) -> Result<usize> {
        let conn = self.conn.lock();
        let deleted = conn.execute(DELETE_SESSION, params![id])?;
        Ok(deleted)
    }

    pub fn delete_for_subject(&self, subject_id: i64) -> Result<usize> {
        let conn = self.conn.lock();
        let deleted = conn.execute(DELETE_SESSIONS_FOR_SUBJECT, params![subject_id])?;
        Ok(deleted)
    }

    fn query_sessions(&self, sql: &str, query_params: &[i64]) -> Result<Vec<Session>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(sql)?;
        let session_iter = stmt.query_map(rusqlite::params_from_iter(query_params.iter()), row_to_session)?;

        let mut sessions = Vec::new();
        for session in session_iter {
            sessions.push(session?);
        }
        Ok(sessions)
    }
}
