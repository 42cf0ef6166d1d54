//! Database layer for the sesl application.
//!
//! A SQLite-backed persistence layer with a versioned migration system and
//! one module per entity. Each module owns its SQL as constants and wraps
//! the connection for thread-safe access, since the watch service and CLI
//! commands may touch the database concurrently.

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migration system.
pub mod migrations;

/// Study subject records and aggregates (count, total goal hours).
pub mod subjects;

/// Task records with due dates, priorities, and completion tracking.
pub mod tasks;

/// Committed study sessions and duration aggregates.
pub mod sessions;
