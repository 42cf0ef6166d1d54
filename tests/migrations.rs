#[cfg(test)]
mod tests {
    use sesl::db::migrations::{current_version, init_with_migrations};
    use rusqlite::Connection;

    #[test]
    fn test_fresh_database_migrates_to_latest() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        assert_eq!(current_version(&conn).unwrap(), 2);

        // All expected tables exist
        for table in ["subjects", "tasks", "sessions", "migrations"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {}", table);
        }
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        assert_eq!(current_version(&conn).unwrap(), 2);

        // Each version was recorded exactly once
        let applied: i64 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied, 2);
    }

    #[test]
    fn test_lookup_indexes_exist() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 3);
    }
}
