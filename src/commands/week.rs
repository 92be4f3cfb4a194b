//! Week boundaries for a date.

use crate::{
    libs::{
        calendar::{end_of_week, long_format_date, week_days, weekday_from_index},
        clock_time::{Clock, SystemClock},
        config::Config,
        messages::Message,
        view::View,
    },
    msg_error_anyhow, msg_print,
};
use anyhow::Result;
use chrono::{NaiveDate, Weekday};
use clap::Args;

#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Date inside the week, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<String>,
    /// First day of the week, 0 = Sunday .. 6 = Saturday (defaults to settings)
    #[arg(short, long)]
    first_day: Option<i64>,
}

/// Resolves the first day of the week from the argument or the stored settings.
fn first_day(args: &WeekArgs) -> Result<Weekday> {
    match args.first_day {
        Some(index) => weekday_from_index(index).ok_or_else(|| msg_error_anyhow!(Message::InvalidFirstDay(index))),
        None => Ok(Config::read()?.settings().first_day_of_week()),
    }
}

fn date(args: &WeekArgs, clock: &impl Clock) -> Result<NaiveDate> {
    match &args.date {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.clone()))),
        None => Ok(clock.now().date()),
    }
}

pub fn cmd(args: WeekArgs) -> Result<()> {
    let first_day = first_day(&args)?;
    let date = date(&args, &SystemClock)?;

    let days = week_days(date, first_day);
    let end = end_of_week(date, first_day);
    msg_print!(
        Message::WeekHeader(long_format_date(days[0]), long_format_date(end.date())),
        true
    );
    View::week(&days);

    Ok(())
}
