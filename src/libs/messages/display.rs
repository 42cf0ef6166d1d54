//! Display implementation for sesl application messages.
//!
//! The `Message` enum is the single catalog of user-facing text; this module
//! turns structured variants into the strings printed by the `msg_*` macros.
//! Keeping every string here means command modules never embed literal text
//! and the whole surface can be reviewed (or localized) in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SUBJECT MESSAGES ===
            Message::SubjectSaved(name) => format!("Subject '{}' saved successfully", name),
            Message::SubjectDeleted(name) => format!("Subject '{}' deleted along with its tasks and sessions", name),
            Message::SubjectNotFound(id) => format!("Subject with ID {} not found", id),
            Message::SubjectsHeader => "📚 Subjects".to_string(),
            Message::NoSubjectsFound => "No subjects found. Create one with 'sesl subject'".to_string(),
            Message::ConfirmDeleteSubject(name) => format!("Delete subject '{}' and all of its tasks and sessions?", name),
            Message::PromptSubjectName => "Subject name".to_string(),
            Message::PromptGoalHours => "Goal study hours".to_string(),
            Message::InvalidGoalHours(input) => format!("'{}' is not a valid number of hours", input),

            // === TASK MESSAGES ===
            Message::TaskSaved(title) => format!("Task '{}' saved successfully", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TasksUpcomingHeader => "🗓 Upcoming tasks".to_string(),
            Message::TasksCompletedHeader => "✔ Completed tasks".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::InvalidDueDate(input) => format!("'{}' is not a valid date, expected YYYY-MM-DD", input),

            // === SESSION MESSAGES ===
            Message::SessionSaved => "Session saved successfully".to_string(),
            Message::SessionDeleted => "Session deleted successfully".to_string(),
            Message::SessionNotFound(id) => format!("Session with ID {} not found", id),
            Message::SessionTooShort(min) => format!("Single session can't be less than {} seconds", min),
            Message::SessionSaveFailed(e) => format!("Couldn't save session. {}", e),
            Message::SessionDeleteFailed(e) => format!("Couldn't delete session. {}", e),
            Message::SessionsHeader => "⏱ Study sessions".to_string(),
            Message::NoSessionsFound => "No study sessions recorded yet".to_string(),
            Message::ConfirmDeleteSession => "Delete this session?".to_string(),
            Message::ConfirmCommitSession(elapsed) => format!("Save this session of {} seconds?", elapsed),
            Message::NoSubjectForSession => "Please select a subject related to the session".to_string(),

            // === TIMER MESSAGES ===
            Message::TimerStarted(subject) => format!("Timer started for '{}'", subject),
            Message::TimerPaused(elapsed) => format!("Timer paused at {} seconds", elapsed),
            Message::TimerResumed(elapsed) => format!("Timer resumed from {} seconds", elapsed),
            Message::TimerStopped(elapsed) => format!("Timer stopped at {} seconds", elapsed),
            Message::TimerCancelled => "Timer cancelled, elapsed time discarded".to_string(),
            Message::TimerStatus(mode, elapsed) => format!("Timer is {} at {} seconds", mode, elapsed),
            Message::TimerAlreadyRunning => "Timer is already running".to_string(),
            Message::TimerNotRunning => "Timer is not running".to_string(),
            Message::TimerNothingToCommit => "No stopped session awaiting commit".to_string(),
            Message::TimerCommandRejected(action) => format!("'{}' is not valid in the current timer state", action),

            // === WATCH SERVICE MESSAGES ===
            Message::WatcherStarted(pid) => format!("Watch service started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watch service stopped (PID: {})", pid),
            Message::WatcherNotRunning => "Watch service is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watch service is not running (PID file not found)".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watch service (PID: {})", pid),
            Message::WatcherFailedToStopExisting(e) => format!("Failed to stop existing watch service: {}", e),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watch service with PID {}", pid),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatcherSignalHandlingNotSupported => "Signal handling not supported on this platform".to_string(),
            Message::WatcherUnsavedElapsed(elapsed) => format!("Shutting down with an unsaved session of {} seconds", elapsed),
            Message::ServiceStarted => "Study session service is running".to_string(),
            Message::ServiceExitedNormally => "Service exited normally".to_string(),
            Message::ServiceShuttingDown => "Shutting down service".to_string(),
            Message::ServiceError(e) => format!("Service error: {}", e),
            Message::ServiceTaskPanicked(e) => format!("Service task panicked: {}", e),
            Message::ServiceNotReachable => "Cannot reach the watch service. Is 'sesl watch' running?".to_string(),
            Message::ControlSocketNotSupported => "Control socket is not supported on this platform".to_string(),
            Message::DaemonModeNotSupported => "Daemon mode is not supported on this platform".to_string(),
            Message::ProcessTerminationNotSupported => "Process termination is not supported on this platform".to_string(),
            Message::InvalidPidFileContent => "Invalid PID file content".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process (error code: {})", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process (error code: {})", code),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleTimer => "Timer service settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptTickInterval => "Tick interval in milliseconds".to_string(),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader => "📊 Study summary".to_string(),
            Message::RecentSessionsHeader(count) => format!("Last {} study sessions", count),
            Message::UpcomingTasksHeader => "Upcoming tasks".to_string(),
        };
        write!(f, "{}", text)
    }
}
