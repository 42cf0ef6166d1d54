//! Database schema migration management.
//!
//! Maintains a versioned registry of schema changes and applies pending
//! migrations inside transactions during database initialization. The
//! `migrations` table records every applied version for auditability.

use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change with its version and transformation logic.
#[derive(Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.migrations.push(Migration {
            version: 1,
            name: "initial_schema",
            up: |tx| {
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS subjects (
                        id INTEGER NOT NULL PRIMARY KEY,
                        name TEXT NOT NULL,
                        goal_hours REAL NOT NULL
                    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS tasks (
                        id INTEGER NOT NULL PRIMARY KEY,
                        subject_id INTEGER NOT NULL,
                        title TEXT NOT NULL,
                        description TEXT NOT NULL DEFAULT '',
                        due_date TEXT NOT NULL,
                        priority INTEGER NOT NULL DEFAULT 1,
                        subject_name TEXT NOT NULL DEFAULT '',
                        completed INTEGER NOT NULL DEFAULT 0
                    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS sessions (
                        id INTEGER NOT NULL PRIMARY KEY,
                        subject_id INTEGER NOT NULL DEFAULT -1,
                        subject_name TEXT NOT NULL DEFAULT '',
                        start TIMESTAMP NOT NULL,
                        duration INTEGER NOT NULL
                    )",
                    [],
                )?;
                Ok(())
            },
        });

        self.migrations.push(Migration {
            version: 2,
            name: "add_lookup_indexes",
            up: |tx| {
                tx.execute("CREATE INDEX IF NOT EXISTS idx_sessions_subject ON sessions(subject_id)", [])?;
                tx.execute("CREATE INDEX IF NOT EXISTS idx_sessions_start ON sessions(start)", [])?;
                tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_subject ON tasks(subject_id)", [])?;
                Ok(())
            },
        });
    }

    /// Applies all migrations newer than the current database version.
    pub fn migrate(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let current = current_version(conn)?;

        for migration in self.migrations.iter().filter(|m| m.version > current) {
            msg_debug!(format!("Applying migration v{}: {}", migration.version, migration.name));
            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;
        }

        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes the schema by applying all pending migrations.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().migrate(conn)
}

/// Returns the highest applied migration version, or 0 for a fresh database.
pub fn current_version(conn: &Connection) -> Result<u32> {
    let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}
