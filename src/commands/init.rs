//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard for first-time use and a `--delete`
//! flag for resetting configuration during troubleshooting.

use crate::{
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_path = DataStorage::new().get_path(crate::libs::config::CONFIG_FILE_NAME)?;
        if config_path.exists() {
            std::fs::remove_file(config_path)?;
        }
        return Ok(());
    }

    // Run interactive configuration wizard
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
