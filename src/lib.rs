//! # Sesl - Study Effort & Session Logging
//!
//! A command-line utility for tracking study sessions, managing subjects
//! and tasks, and keeping a persistent log of time spent.
//!
//! ## Features
//!
//! - **Study Timer**: Start, pause, resume, and stop timed study runs
//! - **Background Service**: A detached process hosts the timer so runs
//!   survive individual CLI invocations
//! - **Subject Management**: Subjects with goal hours and progress tracking
//! - **Task Management**: Due dates and priorities with two-key ordering
//! - **Session Log**: Committed runs stored in SQLite with summaries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sesl::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
