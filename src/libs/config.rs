//! Configuration management for tempo.
//!
//! Settings live in a JSON file in the platform application-data directory
//! and cover the focus module's defaults: session length, break cadence and
//! length, and whether completion notifications are shown. `Config::read()`
//! falls back to defaults when no file exists, so every command works
//! without prior setup; `tempo init` runs the interactive wizard.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Defaults applied to `tempo focus` when flags are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Session length used when `--minutes`/`--hours` are not given.
    pub default_minutes: u64,
    /// Break cadence in minutes; `None` disables automatic breaks.
    pub break_every: Option<u64>,
    /// Break length applied when a cadence is configured or passed.
    pub break_duration: u64,
    /// Whether to fire a desktop notification on completion.
    pub notifications: bool,
}

impl Default for FocusConfig {
    fn default() -> Self {
        FocusConfig {
            default_minutes: 25,
            break_every: None,
            break_duration: 5,
            notifications: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub focus: Option<FocusConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration to disk as pretty JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive configuration wizard for the focus module.
    pub fn init() -> Result<Config> {
        let current = Config::read()?.focus.unwrap_or_default();
        let theme = ColorfulTheme::default();

        let default_minutes: u64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptDefaultSessionMinutes.to_string())
            .default(current.default_minutes)
            .interact_text()?;

        let break_every: u64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptBreakEvery.to_string())
            .default(current.break_every.unwrap_or(0))
            .interact_text()?;

        let break_duration: u64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptBreakDuration.to_string())
            .default(current.break_duration)
            .interact_text()?;

        let notifications = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptNotificationsEnabled.to_string())
            .default(current.notifications)
            .interact()?;

        Ok(Config {
            focus: Some(FocusConfig {
                default_minutes,
                break_every: if break_every == 0 { None } else { Some(break_every) },
                break_duration,
                notifications,
            }),
        })
    }
}
