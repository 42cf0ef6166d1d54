//! Core library modules for the sesl application.
//!
//! Serves as the main entry point for all sesl library components, providing
//! a centralized access point to the application's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Timer Service**: State machine, background service, control channel
//! - **Data Management**: Subjects, tasks, study sessions
//! - **User Interface**: Console rendering and formatting

pub mod config;
pub mod control;
pub mod daemon;
pub mod data_storage;
pub mod feed;
pub mod formatter;
pub mod messages;
pub mod service;
pub mod session;
pub mod subject;
pub mod task;
pub mod timer;
pub mod view;
