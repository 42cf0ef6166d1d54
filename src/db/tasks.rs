//! Database operations for tasks.
//!
//! Upcoming and completed lists use a two-key ordering: due date
//! ascending, then priority descending, so the most urgent work for the
//! nearest deadline surfaces first.

use crate::db::db::Db;
use crate::libs::task::{Priority, Task, TaskFilter};
use anyhow::Result;
use chrono::NaiveDate;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;

const INSERT_TASK: &str =
    "INSERT INTO tasks (subject_id, title, description, due_date, priority, subject_name, completed) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TASK: &str =
    "UPDATE tasks SET subject_id = ?1, title = ?2, description = ?3, due_date = ?4, priority = ?5, subject_name = ?6, completed = ?7 WHERE id = ?8";
const SELECT_TASKS: &str = "SELECT id, subject_id, title, description, due_date, priority, subject_name, completed FROM tasks";
const ORDER_TWO_KEY: &str = "ORDER BY due_date ASC, priority DESC";
const SELECT_TASK_BY_ID: &str =
    "SELECT id, subject_id, title, description, due_date, priority, subject_name, completed FROM tasks WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    let due_date: String = row.get(4)?;
    let priority: i64 = row.get(5)?;
    Ok(Task {
        id: row.get(0)?,
        subject_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        due_date: NaiveDate::parse_from_str(&due_date, "%Y-%m-%d").unwrap_or_default(),
        priority: Priority::from_value(priority),
        subject_name: row.get(6)?,
        completed: row.get(7)?,
    })
}

/// Database manager for task records.
pub struct Tasks {
    pub conn: Arc<Mutex<Connection>>,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db_conn = Db::new()?.conn;
        Ok(Tasks {
            conn: Arc::new(Mutex::new(db_conn)),
        })
    }

    pub fn upsert(&self, task: &Task) -> Result<()> {
        let conn = self.conn.lock();
        let due_date = task.due_date.format("%Y-%m-%d").to_string();
        match task.id {
            Some(id) => {
                conn.execute(
                    UPDATE_TASK,
                    params![
                        task.subject_id,
                        task.title,
                        task.description,
                        due_date,
                        task.priority.value(),
                        task.subject_name,
                        task.completed,
                        id
                    ],
                )?;
            }
            None => {
                conn.execute(
                    INSERT_TASK,
                    params![
                        task.subject_id,
                        task.title,
                        task.description,
                        due_date,
                        task.priority.value(),
                        task.subject_name,
                        task.completed
                    ],
                )?;
            }
        }
        Ok(())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let conn = self.conn.lock();
        let task = conn.query_row(SELECT_TASK_BY_ID, params![id], row_to_task).optional()?;
        Ok(task)
    }

    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let conn = self.conn.lock();
        let (sql, filter_params): (String, Vec<i64>) = match filter {
            TaskFilter::All => (format!("{} {}", SELECT_TASKS, ORDER_TWO_KEY), vec![]),
            TaskFilter::ForSubject(id) => (format!("{} WHERE subject_id = ?1 {}", SELECT_TASKS, ORDER_TWO_KEY), vec![id]),
            TaskFilter::Upcoming => (format!("{} WHERE completed = 0 {}", SELECT_TASKS, ORDER_TWO_KEY), vec![]),
            TaskFilter::Completed => (format!("{} WHERE completed = 1 {}", SELECT_TASKS, ORDER_TWO_KEY), vec![]),
        };

        let mut stmt = conn.prepare(&sql)?;
        let task_iter = stmt.query_map(rusqlite::params_from_iter(filter_params.iter()), row_to_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Flips a task's completion flag. Returns the updated task, or `None`
    /// if the id does not exist.
    pub fn toggle_completed(&self, id: i64) -> Result<Option<Task>> {
        let task = match self.get_by_id(id)? {
            Some(task) => task,
            None => return Ok(None),
        };
        let updated = Task {
            completed: !task.completed,
            ..task
        };
        self.upsert(&updated)?;
        Ok(Some(updated))
    }

    pub fn delete(&self, id: i64) -> Result<usize> {
        let conn = self.conn.lock();
        let deleted = conn.execute(DELETE_TASK, params![id])?;
        Ok(deleted)
    }
}
