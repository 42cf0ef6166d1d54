//! Daemon management for the watch service.
//!
//! This module handles the lifecycle of the background process that hosts
//! the timer service, including starting, stopping, and signal handling.

use crate::db::sessions::Sessions;
use crate::libs::config::Config;
use crate::libs::control;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::service::TimerService;
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_warning};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

const PID_FILE: &str = "sesl-watch.pid";

/// Runs the service with proper signal handling for graceful shutdown.
pub async fn run_with_signal_handling() -> Result<()> {
    // Set up a channel to handle shutdown signals
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    // Spawn the signal handler in a separate task
    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = signal(SignalKind::terminate()).expect(&Message::FailedToCreateSigtermHandler.to_string());
            let mut sigint = signal(SignalKind::interrupt()).expect(&Message::FailedToCreateSigintHandler.to_string());

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::WatcherReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(not(any(unix, windows)))]
    {
        // For other platforms, just run without signal handling
        msg_warning!(Message::WatcherSignalHandlingNotSupported);
    }

    let service = build_service()?;

    // Run the control service in a separate task
    let service_for_task = service.clone();
    let service_handle = tokio::spawn(async move {
        match run_service(service_for_task).await {
            Ok(()) => Ok(()),
            Err(e) => Err(Message::ServiceError(e.to_string())),
        }
    });

    // Wait for either the service to finish or a shutdown signal
    tokio::select! {
        result = service_handle => {
            match result {
                Ok(Ok(())) => msg_info!(Message::ServiceExitedNormally),
                Ok(Err(e)) => msg_error!(Message::ServiceError(e.to_string())),
                Err(e) => msg_error!(Message::ServiceTaskPanicked(e.to_string())),
            }
        }
        _ = shutdown_rx => {
            msg_info!(Message::ServiceShuttingDown);
            // The service tasks are dropped when this function exits
        }
    }

    // A run still in flight at shutdown is lost; surface the amount.
    let last = service.snapshot().await;
    if last.is_active() {
        msg_warning!(Message::WatcherUnsavedElapsed(last.elapsed_secs));
    }

    // Clean up PID file and control socket on exit
    let pid_path = DataStorage::new().get_path(PID_FILE)?;
    if pid_path.exists() {
        let _ = std::fs::remove_file(&pid_path);
    }
    let _ = control::remove_stale_socket();

    Ok(())
}

/// Builds the timer service with the configured tick interval.
fn build_service() -> Result<TimerService> {
    let config = Config::read()?;
    let timer_config = config.timer.unwrap_or_default();
    Ok(TimerService::with_tick_interval(Duration::from_millis(timer_config.tick_interval_ms)))
}

/// The core logic that hosts the timer service: opens the session store,
/// mirrors state changes into the log, and serves the control socket.
async fn run_service(service: TimerService) -> Result<()> {
    let sessions = Arc::new(Sessions::new()?);

    msg_info!(Message::ServiceStarted);

    // Mirror committed sessions into the log so a detached service leaves a trail.
    let mut session_updates = service.subscribe_sessions();
    tokio::spawn(async move {
        while let Some(update) = session_updates.next().await {
            if let Some(session) = update {
                msg_info!(Message::TimerStopped(session.duration as u64));
            }
        }
    });

    control::serve(service, sessions).await
}

/// Spawns the application as a detached background process.
/// If a service is already running, it will be stopped first.
pub fn spawn() -> Result<()> {
    let pid_path = DataStorage::new().get_path(PID_FILE)?;

    // Check if a service is already running and stop it
    if pid_path.exists() {
        if let Ok(pid_str) = std::fs::read_to_string(&pid_path) {
            msg_info!(Message::WatcherStoppingExisting(pid_str.trim().to_string()));
            // Try to stop the existing service
            if let Err(e) = stop_internal() {
                msg_warning!(Message::WatcherFailedToStopExisting(e.to_string()));
                // Remove the PID file anyway in case the process is already dead
                let _ = std::fs::remove_file(&pid_path);
            }
            // Give the old process time to clean up
            std::thread::sleep(Duration::from_millis(1000));
        }
    }

    let current_exe = std::env::current_exe().expect(&Message::FailedToGetCurrentExecutable.to_string());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let child = std::process::Command::new(current_exe)
            .args(["watch", "--foreground"])
            .before_exec(|| {
                // Detach from the current session to become a daemon.
                nix::unistd::setsid()?;
                Ok(())
            })
            .spawn()?;
        let pid = child.id();
        std::fs::write(pid_path, pid.to_string())?;
        msg_info!(Message::WatcherStarted(pid));
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x08000000;
        let child = std::process::Command::new(current_exe)
            .args(["watch", "--foreground"])
            .creation_flags(CREATE_NO_WINDOW)
            .spawn()?;
        let pid = child.id();
        std::fs::write(pid_path, pid.to_string())?;
        msg_info!(Message::WatcherStarted(pid));
    }

    #[cfg(not(any(unix, windows)))]
    {
        msg_bail_anyhow!(Message::DaemonModeNotSupported);
    }

    Ok(())
}

/// Finds and stops the running service process.
pub fn stop() -> Result<()> {
    match stop_internal() {
        Ok(()) => Ok(()),
        Err(e) => {
            // If the service wasn't running, that's okay
            if e.to_string().contains("not found") || e.to_string().contains("not running") {
                msg_info!(Message::WatcherNotRunning);
                Ok(())
            } else {
                Err(e)
            }
        }
    }
}

/// Internal function to stop the service, used by both stop and spawn.
fn stop_internal() -> Result<()> {
    let pid_path = DataStorage::new().get_path(PID_FILE)?;
    if !pid_path.exists() {
        msg_bail_anyhow!(Message::WatcherNotRunningPidNotFound);
    }

    let pid_str = std::fs::read_to_string(&pid_path)?;
    let pid: u32 = pid_str.trim().parse().map_err(|_| msg_error_anyhow!(Message::InvalidPidFileContent))?;

    let killed = kill_process(pid)?;

    // Clean up the PID file regardless of whether the process was found.
    std::fs::remove_file(pid_path)?;
    let _ = control::remove_stale_socket();

    if killed {
        msg_info!(Message::WatcherStopped(pid));
        Ok(())
    } else {
        msg_bail_anyhow!(Message::WatcherFailedToStop(pid));
    }
}

/// Cross-platform process termination
#[cfg(windows)]
fn kill_process(pid: u32) -> Result<bool> {
    use winapi::um::errhandlingapi::GetLastError;
    use winapi::um::handleapi::CloseHandle;
    use winapi::um::processthreadsapi::{OpenProcess, TerminateProcess};
    use winapi::um::winnt::PROCESS_TERMINATE;

    unsafe {
        let handle = OpenProcess(PROCESS_TERMINATE, 0, pid);
        if handle.is_null() {
            let error = GetLastError();
            if error == 87 {
                // ERROR_INVALID_PARAMETER - process doesn't exist
                return Ok(false);
            }
            msg_bail_anyhow!(Message::FailedToOpenProcess(error));
        }

        let result = TerminateProcess(handle, 0);
        CloseHandle(handle);

        if result == 0 {
            let error = GetLastError();
            msg_bail_anyhow!(Message::FailedToTerminateProcess(error));
        } else {
            // Give the process time to actually terminate
            std::thread::sleep(Duration::from_millis(100));
            Ok(true)
        }
    }
}

#[cfg(unix)]
fn kill_process(pid: u32) -> Result<bool> {
    use std::process::Command;

    // Check if process exists using ps
    let output = Command::new("ps").arg("-p").arg(pid.to_string()).output()?;

    if !output.status.success() {
        // Process doesn't exist
        return Ok(false);
    }

    // Send SIGTERM for graceful shutdown
    Command::new("kill").arg("-TERM").arg(pid.to_string()).output()?;

    // Give the process time to terminate gracefully
    for _ in 0..10 {
        std::thread::sleep(Duration::from_millis(100));

        // Check if process still exists
        let check = Command::new("ps").arg("-p").arg(pid.to_string()).output()?;

        if !check.status.success() {
            // Process terminated
            return Ok(true);
        }
    }

    // Process didn't terminate gracefully, force kill
    Command::new("kill").arg("-9").arg(pid.to_string()).output()?;

    std::thread::sleep(Duration::from_millis(100));
    Ok(true)
}

#[cfg(not(any(unix, windows)))]
fn kill_process(_pid: u32) -> Result<bool> {
    msg_bail_anyhow!(Message::ProcessTerminationNotSupported);
}
