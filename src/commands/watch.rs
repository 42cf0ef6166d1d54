//! Watch service command.
//!
//! By default spawns the timer service as a detached background process.
//! `--foreground` runs it in the current terminal, which is what the
//! spawned child executes and what debugging sessions use directly.

use crate::libs::daemon;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Stop the running watch service
    #[arg(short, long)]
    stop: bool,

    /// Run in the foreground instead of detaching
    #[arg(short, long)]
    foreground: bool,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }

    if args.foreground {
        return daemon::run_with_signal_handling().await;
    }

    daemon::spawn()
}
