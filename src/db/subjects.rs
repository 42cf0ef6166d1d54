//! Database operations for study subjects.
//!
//! Subjects are the anchor of the data model: tasks and sessions reference
//! them, so deleting a subject removes its dependents in one transaction.

use crate::db::db::Db;
use crate::libs::subject::Subject;
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Arc;

const INSERT_SUBJECT: &str = "INSERT INTO subjects (name, goal_hours) VALUES (?1, ?2)";
const UPDATE_SUBJECT: &str = "UPDATE subjects SET name = ?1, goal_hours = ?2 WHERE id = ?3";
const SELECT_SUBJECTS: &str = "SELECT id, name, goal_hours FROM subjects ORDER BY name";
const SELECT_SUBJECT_BY_ID: &str = "SELECT id, name, goal_hours FROM subjects WHERE id = ?1";
const COUNT_SUBJECTS: &str = "SELECT COUNT(*) FROM subjects";
const SUM_GOAL_HOURS: &str = "SELECT SUM(goal_hours) FROM subjects";
const DELETE_SUBJECT: &str = "DELETE FROM subjects WHERE id = ?1";
const DELETE_SUBJECT_TASKS: &str = "DELETE FROM tasks WHERE subject_id = ?1";
const DELETE_SUBJECT_SESSIONS: &str = "DELETE FROM sessions WHERE subject_id = ?1";

/// Database manager for subject records.
pub struct Subjects {
    pub conn: Arc<Mutex<Connection>>,
}

impl Subjects {
    pub fn new() -> Result<Subjects> {
        let db_conn = Db::new()?.conn;
        Ok(Subjects {
            conn: Arc::new(Mutex::new(db_conn)),
        })
    }

    /// Inserts a new subject or updates an existing one, depending on
    /// whether the record carries an id.
    pub fn upsert(&self, subject: &Subject) -> Result<()> {
        let conn = self.conn.lock();
        match subject.id {
            Some(id) => {
                conn.execute(UPDATE_SUBJECT, params![subject.name, subject.goal_hours, id])?;
            }
            None => {
                conn.execute(INSERT_SUBJECT, params![subject.name, subject.goal_hours])?;
            }
        }
        Ok(())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Subject>> {
        let conn = self.conn.lock();
        let subject = conn
            .query_row(SELECT_SUBJECT_BY_ID, params![id], |row| {
                Ok(Subject {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    goal_hours: row.get(2)?,
                })
            })
            .optional()?;
        Ok(subject)
    }

    pub fn fetch_all(&self) -> Result<Vec<Subject>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_SUBJECTS)?;
        let subject_iter = stmt.query_map([], |row| {
            Ok(Subject {
                id: row.get(0)?,
                name: row.get(1)?,
                goal_hours: row.get(2)?,
            })
        })?;

        let mut subjects = Vec::new();
        for subject in subject_iter {
            subjects.push(subject?);
        }
        Ok(subjects)
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.conn.lock();
        let count = conn.query_row(COUNT_SUBJECTS, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Sum of goal hours across all subjects; 0 when there are none.
    pub fn total_goal_hours(&self) -> Result<f64> {
        let conn = self.conn.lock();
        let total: Option<f64> = conn.query_row(SUM_GOAL_HOURS, [], |row| row.get(0))?;
        Ok(total.unwrap_or(0.0))
    }

    /// Deletes a subject together with its tasks and sessions. All three
    /// deletes happen in one transaction so a failure leaves the database
    /// unchanged.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        tx.execute(DELETE_SUBJECT_TASKS, params![id])?;
        tx.execute(DELETE_SUBJECT_SESSIONS, params![id])?;
        let deleted = tx.execute(DELETE_SUBJECT, params![id])?;
        tx.commit()?;
        Ok(deleted)
    }
}
