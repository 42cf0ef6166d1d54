//! Core database connection management.
//!
//! `Db` opens the SQLite database in the application data directory and
//! applies any pending schema migrations before handing out the connection.

use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "sesl.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
