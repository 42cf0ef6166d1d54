pub mod init;
pub mod session;
pub mod subject;
pub mod sum;
pub mod task;
pub mod timer;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage study subjects")]
    Subject(subject::SubjectArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Browse and delete recorded study sessions")]
    Session(session::SessionArgs),
    #[command(about = "Control the study timer")]
    Timer(timer::TimerArgs),
    #[command(about = "Get study summary")]
    Sum(sum::SumArgs),
    #[command(about = "Run the background timer service")]
    Watch(watch::WatchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Subject(args) => subject::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Session(args) => session::cmd(args),
            Commands::Timer(args) => timer::cmd(args).await,
            Commands::Sum(args) => sum::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
        }
    }
}
