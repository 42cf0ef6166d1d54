#[derive(Debug, Clone)]
pub enum Message {
    // === SUBJECT MESSAGES ===
    SubjectSaved(String),
    SubjectDeleted(String),
    SubjectNotFound(i64),
    SubjectsHeader,
    NoSubjectsFound,
    ConfirmDeleteSubject(String),
    PromptSubjectName,
    PromptGoalHours,
    InvalidGoalHours(String),

    // === TASK MESSAGES ===
    TaskSaved(String),
    TaskCompleted(String),
    TaskDeleted,
    TaskNotFound(i64),
    TasksUpcomingHeader,
    TasksCompletedHeader,
    NoTasksFound,
    ConfirmDeleteTask(String),
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskPriority,
    InvalidDueDate(String),

    // === SESSION MESSAGES ===
    SessionSaved,
    SessionDeleted,
    SessionNotFound(i64),
    SessionTooShort(u64),
    SessionSaveFailed(String),
    SessionDeleteFailed(String),
    SessionsHeader,
    NoSessionsFound,
    ConfirmDeleteSession,
    ConfirmCommitSession(u64),
    NoSubjectForSession,

    // === TIMER MESSAGES ===
    TimerStarted(String),
    TimerPaused(u64),
    TimerResumed(u64),
    TimerStopped(u64),
    TimerCancelled,
    TimerStatus(String, u64),
    TimerAlreadyRunning,
    TimerNotRunning,
    TimerNothingToCommit,
    TimerCommandRejected(String),

    // === WATCH SERVICE MESSAGES ===
    WatcherStarted(u32),
    WatcherStopped(u32),
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String),
    WatcherFailedToStopExisting(String),
    WatcherFailedToStop(u32),
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    WatcherUnsavedElapsed(u64),
    ServiceStarted,
    ServiceExitedNormally,
    ServiceShuttingDown,
    ServiceError(String),
    ServiceTaskPanicked(String),
    ServiceNotReachable,
    ControlSocketNotSupported,
    DaemonModeNotSupported,
    ProcessTerminationNotSupported,
    InvalidPidFileContent,
    FailedToGetCurrentExecutable,
    FailedToOpenProcess(u32),
    FailedToTerminateProcess(u32),
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleTimer,
    PromptSelectModules,
    PromptTickInterval,

    // === SUMMARY MESSAGES ===
    SummaryHeader,
    RecentSessionsHeader(usize),
    UpcomingTasksHeader,
}
