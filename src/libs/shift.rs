//! Shift records and the two ways of computing worked hours.
//!
//! ## Duration paths
//!
//! - **Form times** ([`ShiftTimes::hours`]): computed from three clock times
//!   while a shift is still being edited. Returns `None` until every field
//!   has a value and clamps a non-positive span to zero.
//! - **Stored shifts** ([`Shift::hours`]): computed from absolute
//!   timestamps. Never clamps, so an end before the start yields negative
//!   hours.
//!
//! Both paths agree for same-day shifts whose worked span is positive.

use crate::libs::clock_time::ClockTime;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The three times entered for a shift on the timesheet form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTimes {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub break_duration: ClockTime,
}

impl ShiftTimes {
    pub fn new(start_time: ClockTime, end_time: ClockTime, break_duration: ClockTime) -> Self {
        Self {
            start_time,
            end_time,
            break_duration,
        }
    }

    /// Decomposes a stored shift back into form times.
    ///
    /// A negative stored break is shown as no break.
    pub fn from_shift(shift: &Shift) -> Self {
        Self {
            start_time: ClockTime::from_datetime(&shift.start),
            end_time: ClockTime::from_datetime(&shift.end),
            break_duration: ClockTime::from_minutes(u32::try_from(shift.break_duration).unwrap_or(0)),
        }
    }

    /// True while any of the three fields is still blank.
    pub fn is_incomplete(&self) -> bool {
        self.start_time.is_empty() || self.end_time.is_empty() || self.break_duration.is_empty()
    }

    /// Worked hours, or `None` while the form is incomplete.
    ///
    /// A span that is zero or negative after the break counts as `0.0`.
    pub fn hours(&self) -> Option<f64> {
        if self.is_incomplete() {
            return None;
        }

        let minutes = i64::from(self.end_time.to_minutes())
            - i64::from(self.start_time.to_minutes())
            - i64::from(self.break_duration.to_minutes());
        if minutes <= 0 {
            return Some(0.0);
        }

        Some(ClockTime::from_minutes(minutes as u32).to_hours())
    }
}

/// A stored work interval belonging to a timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Unpaid break in minutes.
    pub break_duration: i64,
}

impl Shift {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, break_duration: i64) -> Self {
        Self {
            start,
            end,
            break_duration,
        }
    }

    /// Builds the stored shift for form times entered against `date`.
    ///
    /// Start and end are both placed on `date`; unset components count as zero.
    pub fn from_times(date: NaiveDate, times: &ShiftTimes) -> Self {
        Self {
            start: times.start_time.on_date(date),
            end: times.end_time.on_date(date),
            break_duration: i64::from(times.break_duration.to_minutes()),
        }
    }

    /// The calendar day the shift starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Worked hours between the timestamps less the break, unclamped.
    pub fn hours(&self) -> f64 {
        let minutes = self.end.signed_duration_since(self.start).num_seconds() as f64 / 60.0
            - self.break_duration as f64;
        minutes / 60.0
    }
}
