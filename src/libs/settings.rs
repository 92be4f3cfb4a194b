//! Administrator settings consumed by the week and timesheet views.
//!
//! Settings arrive from storage as loosely typed values (the first day of
//! the week is an integer `0..=6`, Sunday first). [`Settings::new`] checks
//! them once so the rest of the crate can work with a typed [`Weekday`].

use crate::libs::calendar::{weekday_from_index, weekday_index};
use chrono::Weekday;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

static RECIPIENTS_PATTERN: OnceLock<Regex> = OnceLock::new();

fn recipients_pattern() -> &'static Regex {
    RECIPIENTS_PATTERN.get_or_init(|| {
        Regex::new(r"^([\w+\-.%]+@[\w\-.]+\.[A-Za-z]{2,4}(,[ ]*)?)+$").expect("recipient pattern is valid")
    })
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("first day of week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    FirstDayOfWeek(i64),
    #[error("'{0}' must be a valid list of emails, separated by a comma")]
    Recipients(String),
}

/// Validated application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    first_day_of_week: Weekday,
    timesheet_recipients: String,
}

impl Default for Settings {
    /// Weeks starting on Monday and nobody receiving timesheets.
    fn default() -> Self {
        Settings {
            first_day_of_week: Weekday::Mon,
            timesheet_recipients: String::new(),
        }
    }
}

impl Settings {
    /// Validates raw settings values.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::FirstDayOfWeek`] when the day index is outside `0..=6`
    /// - [`SettingsError::Recipients`] when the list is not comma-separated e-mails
    pub fn new(first_day_of_week: i64, timesheet_recipients: &str) -> Result<Self, SettingsError> {
        let first_day_of_week =
            weekday_from_index(first_day_of_week).ok_or(SettingsError::FirstDayOfWeek(first_day_of_week))?;
        let timesheet_recipients = timesheet_recipients.trim().to_string();
        if !recipients_pattern().is_match(&timesheet_recipients) {
            return Err(SettingsError::Recipients(timesheet_recipients));
        }
        Ok(Settings {
            first_day_of_week,
            timesheet_recipients,
        })
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// The configured recipients, one address per entry.
    pub fn recipients(&self) -> Vec<&str> {
        self.timesheet_recipients
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .collect()
    }

    pub fn to_config(&self) -> SettingsConfig {
        SettingsConfig {
            first_day_of_week: i64::from(weekday_index(self.first_day_of_week)),
            timesheet_recipients: self.timesheet_recipients.clone(),
        }
    }
}

/// Settings as stored in the configuration file, before validation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsConfig {
    pub first_day_of_week: i64,
    pub timesheet_recipients: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Settings::default().to_config()
    }
}

impl TryFrom<&SettingsConfig> for Settings {
    type Error = SettingsError;

    fn try_from(config: &SettingsConfig) -> Result<Self, Self::Error> {
        Settings::new(config.first_day_of_week, &config.timesheet_recipients)
    }
}
