//! Display implementation for shiftly messages.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleSettings => "Timesheet settings".to_string(),
            Message::ConfigPath(path) => format!("Using configuration file {}", path),
            Message::SettingsInvalid(reason) => format!("Stored settings are invalid ({}), using defaults", reason),
            Message::PromptFirstDayOfWeek => "Start of week".to_string(),
            Message::PromptTimesheetRecipients => "Timesheet recipients (comma-separated emails)".to_string(),

            // === SHIFT MESSAGES ===
            Message::HoursUnknown => "Shift hours unknown until start, end and break are all filled in".to_string(),
            Message::ShiftHours(hours) => format!("Shift hours: {}", hours),
            Message::InvalidTimeArgument(field, reason) => format!("Invalid {}: {}", field, reason),

            // === WEEK MESSAGES ===
            Message::WeekHeader(start, end) => format!("Week from {} to {}", start, end),
            Message::InvalidFirstDay(day) => {
                format!("First day of week must be between 0 (Sunday) and 6 (Saturday), got {}", day)
            }
            Message::InvalidDate(date) => format!("Invalid date '{}', expected YYYY-MM-DD", date),

            // === TIMESHEET MESSAGES ===
            Message::TimesheetHeader(id, user) => format!("Timesheet {} for user {}", id, user),
            Message::TimesheetTotal(total) => format!("Total hours: {}", total),
            Message::TimesheetWeekHeader(week) => format!("Week of {}", week),
            Message::TimesheetsLoaded(count) => format!("Loaded {} timesheet(s)", count),
            Message::TimesheetsNotFound => "No timesheets found in file".to_string(),
            Message::TimesheetReadFailed(path) => format!("Failed to read timesheet file {}", path),
            Message::TimesheetParseFailed(reason) => format!("Failed to parse timesheets: {}", reason),
        };
        write!(f, "{}", text)
    }
}
