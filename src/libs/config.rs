//! Configuration management for application settings.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and edited through an interactive setup wizard. Every module
//! is optional; a missing configuration file yields defaults.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Timer service configuration settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimerConfig {
    /// Interval in milliseconds between elapsed-time ticks.
    ///
    /// The timer counts whole seconds; shortening the interval below
    /// 1000ms speeds up the count rather than adding precision, which
    /// is only useful for exercising the service.
    pub tick_interval_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig { tick_interval_ms: 1000 }
    }
}

/// Main configuration container for the entire application.
///
/// Unconfigured modules are omitted from the JSON output so the file
/// stays clean and hand-editable.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Timer service settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem, falling back to defaults
    /// when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Existing values are pre-filled as defaults so re-running the wizard
    /// only changes what the user touches. The returned configuration still
    /// has to be saved by the caller.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let modules = vec![Message::ConfigModuleTimer.to_string()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match selection {
                0 => {
                    let default = config.timer.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTimer);
                    config.timer = Some(TimerConfig {
                        tick_interval_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTickInterval.to_string())
                            .default(default.tick_interval_ms)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
