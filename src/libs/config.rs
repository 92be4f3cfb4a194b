//! Configuration management for shiftly.
//!
//! The configuration holds the administrator settings (first day of the
//! week, timesheet recipients) as a JSON file in the platform data
//! directory.
//!
//! ## Storage
//!
//! - File name: [`CONFIG_FILE_NAME`], resolved through [`DataStorage`]
//! - Pretty-printed JSON so it can be edited by hand
//! - A missing file reads as the default configuration
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use shiftly::libs::config::Config;
//!
//! let config = Config::read()?;
//! let settings = config.settings();
//! println!("Weeks start on {}", settings.first_day_of_week());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::calendar::{weekday_index, weekday_name};
use crate::libs::messages::Message;
use crate::libs::settings::{Settings, SettingsConfig};
use crate::{msg_debug, msg_print, msg_warning};
use anyhow::Result;
use chrono::Weekday;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Root configuration object.
///
/// `settings` is optional so a fresh installation works before the
/// administrator has run `shiftly init`. Unset sections are omitted from
/// the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        msg_debug!(Message::ConfigPath(config_file_path.display().to_string()));

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if there is one.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Validated settings, falling back to defaults.
    ///
    /// Stored settings that fail validation produce a warning rather than an
    /// error so read-only commands keep working.
    pub fn settings(&self) -> Settings {
        match &self.settings {
            Some(stored) => Settings::try_from(stored).unwrap_or_else(|e| {
                msg_warning!(Message::SettingsInvalid(e.to_string()));
                Settings::default()
            }),
            None => Settings::default(),
        }
    }

    /// Runs the interactive settings wizard.
    ///
    /// Current values are offered as defaults. The recipient list is
    /// re-prompted until it passes validation.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.settings.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleSettings);

        let day_names: Vec<&str> = WEEKDAYS.iter().map(|day| weekday_name(*day)).collect();
        let selected_day = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFirstDayOfWeek.to_string())
            .items(&day_names)
            .default(usize::try_from(default.first_day_of_week).unwrap_or(1).min(6))
            .interact()?;
        let first_day_of_week = i64::from(weekday_index(WEEKDAYS[selected_day]));

        let timesheet_recipients: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimesheetRecipients.to_string())
            .with_initial_text(default.timesheet_recipients)
            .validate_with(|input: &String| -> Result<(), String> {
                Settings::new(first_day_of_week, input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;

        let settings = Settings::new(first_day_of_week, &timesheet_recipients)?;
        config.settings = Some(settings.to_config());
        Ok(config)
    }
}
