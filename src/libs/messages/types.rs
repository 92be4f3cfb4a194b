//! Message catalogue for everything shiftly prints.
//!
//! Text lives in [`display`](super::display); this file only names the
//! messages and the values they interpolate.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleSettings,
    ConfigPath(String),
    SettingsInvalid(String),
    PromptFirstDayOfWeek,
    PromptTimesheetRecipients,

    // === SHIFT MESSAGES ===
    HoursUnknown,
    ShiftHours(String),
    InvalidTimeArgument(String, String), // field, reason

    // === WEEK MESSAGES ===
    WeekHeader(String, String), // start, end
    InvalidFirstDay(i64),
    InvalidDate(String),

    // === TIMESHEET MESSAGES ===
    TimesheetHeader(String, String), // id, user
    TimesheetTotal(String),
    TimesheetWeekHeader(String),
    TimesheetsLoaded(usize),
    TimesheetsNotFound,
    TimesheetReadFailed(String),
    TimesheetParseFailed(String),
}
