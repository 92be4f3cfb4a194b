//! Worked hours for a shift typed on the command line.
//!
//! Mirrors the timesheet form: blank fields are allowed and leave the
//! result unknown, while a malformed field is an error.

use crate::{
    libs::{clock_time::ClockTime, messages::Message, shift::ShiftTimes},
    msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HoursArgs {
    /// Shift start as HH:MM
    #[arg(short, long, default_value = "")]
    pub start: String,
    /// Shift end as HH:MM
    #[arg(short, long, default_value = "")]
    pub end: String,
    /// Unpaid break as HH:MM
    #[arg(short, long = "break", default_value = "")]
    pub break_duration: String,
}

/// Parses one form field; blank input is an empty time.
fn parse_field(field: &str, value: &str) -> Result<ClockTime> {
    if value.trim().is_empty() {
        return Ok(ClockTime::empty());
    }
    value
        .parse::<ClockTime>()
        .map_err(|e| msg_error_anyhow!(Message::InvalidTimeArgument(field.to_string(), e.to_string())))
}

/// Reads the three fields into form times.
pub fn shift_times(args: &HoursArgs) -> Result<ShiftTimes> {
    Ok(ShiftTimes::new(
        parse_field("start", &args.start)?,
        parse_field("end", &args.end)?,
        parse_field("break", &args.break_duration)?,
    ))
}

pub fn cmd(args: HoursArgs) -> Result<()> {
    match shift_times(&args)?.hours() {
        Some(hours) => msg_print!(Message::ShiftHours(format!("{:.2}", hours))),
        None => msg_info!(Message::HoursUnknown),
    }
    Ok(())
}
