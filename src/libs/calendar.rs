//! Calendar helpers: week boundaries, day arithmetic and English naming.
//!
//! Weeks start on an administrator-configured [`Weekday`]. A week runs from
//! `00:00:00` on its first day up to, but not including, `00:00:00` on the
//! first day of the next week.
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use shiftly::libs::calendar::{end_of_week, start_of_week};
//!
//! let wednesday = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
//! let start = start_of_week(wednesday, Weekday::Mon);
//! let end = end_of_week(wednesday, Weekday::Mon);
//! assert_eq!(start.date(), NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
//! assert_eq!(end - start, chrono::TimeDelta::days(7));
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

const WEEKDAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Days from `date` back (or forward) to the configured first day of its week.
fn offset_to_week_start(date: NaiveDate, first_day: Weekday) -> i64 {
    i64::from(first_day.num_days_from_sunday()) - i64::from(date.weekday().num_days_from_sunday())
}

/// Midnight at the start of the week containing `date`.
///
/// The offset can be positive when `date` falls before `first_day` in a
/// Sunday-based numbering, e.g. a Sunday with weeks starting on Monday
/// lands on the following Monday.
pub fn start_of_week(date: NaiveDate, first_day: Weekday) -> NaiveDateTime {
    add_days(date, offset_to_week_start(date, first_day)).and_time(NaiveTime::MIN)
}

/// Midnight at the start of the week after the one containing `date`.
pub fn end_of_week(date: NaiveDate, first_day: Weekday) -> NaiveDateTime {
    add_days(date, offset_to_week_start(date, first_day) + 7).and_time(NaiveTime::MIN)
}

/// The seven dates of the week containing `date`, in order.
pub fn week_days(date: NaiveDate, first_day: Weekday) -> [NaiveDate; 7] {
    let start = start_of_week(date, first_day).date();
    std::array::from_fn(|i| add_days(start, i as i64))
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + TimeDelta::days(days)
}

pub fn add_week(date: NaiveDate) -> NaiveDate {
    add_days(date, 7)
}

pub fn subtract_week(date: NaiveDate) -> NaiveDate {
    add_days(date, -7)
}

/// Maps the stored day index (0 = Sunday .. 6 = Saturday) to a [`Weekday`].
pub fn weekday_from_index(index: i64) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn weekday_index(day: Weekday) -> u32 {
    day.num_days_from_sunday()
}

pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_sunday() as usize]
}

pub fn day_name(date: NaiveDate) -> &'static str {
    weekday_name(date.weekday())
}

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// `DD-MM-YYYY`.
pub fn formatted_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

/// `Wednesday 14 October 2026`.
pub fn long_format_date(date: NaiveDate) -> String {
    format!("{} {:02} {} {:04}", day_name(date), date.day(), month_name(date), date.year())
}
