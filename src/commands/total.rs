//! Timesheet totals from a JSON file.
//!
//! The file holds either one timesheet object or an array of them, in the
//! shape the storage layer produces (`id`, `userID`, `shifts` with `start`,
//! `end` and `breakDuration`).

use crate::{
    libs::{
        calendar::long_format_date,
        config::Config,
        messages::Message,
        timesheet::{partition_by_week, Timesheet},
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TotalArgs {
    /// Path of the timesheet JSON file
    file: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimesheetDocument {
    Many(Vec<Timesheet>),
    One(Timesheet),
}

/// Parses a document holding one timesheet or a list of them.
pub fn parse_timesheets(content: &str) -> Result<Vec<Timesheet>> {
    let document: TimesheetDocument =
        serde_json::from_str(content).map_err(|e| msg_error_anyhow!(Message::TimesheetParseFailed(e.to_string())))?;
    Ok(match document {
        TimesheetDocument::Many(timesheets) => timesheets,
        TimesheetDocument::One(timesheet) => vec![timesheet],
    })
}

pub fn cmd(args: TotalArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)
        .map_err(|_| msg_error_anyhow!(Message::TimesheetReadFailed(args.file.display().to_string())))?;
    let timesheets = parse_timesheets(&content)?;
    msg_debug!(Message::TimesheetsLoaded(timesheets.len()));

    if timesheets.is_empty() {
        msg_bail_anyhow!(Message::TimesheetsNotFound);
    }

    let first_day = Config::read()?.settings().first_day_of_week();
    for (week, group) in partition_by_week(&timesheets, first_day) {
        msg_print!(Message::TimesheetWeekHeader(long_format_date(week.date())), true);
        for timesheet in group {
            msg_print!(Message::TimesheetHeader(timesheet.id.clone(), timesheet.user_id.clone()));
            View::shifts(&timesheet.sorted_shifts());
            msg_print!(Message::TimesheetTotal(timesheet.formatted_total_hours()));
        }
    }

    for timesheet in timesheets.iter().filter(|timesheet| timesheet.shifts.is_empty()) {
        msg_print!(Message::TimesheetHeader(timesheet.id.clone(), timesheet.user_id.clone()), true);
        msg_print!(Message::TimesheetTotal(timesheet.formatted_total_hours()));
    }

    Ok(())
}
