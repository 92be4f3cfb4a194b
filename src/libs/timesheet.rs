//! Timesheets and their total hours.

use crate::libs::calendar::start_of_week;
use crate::libs::shift::Shift;
use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A user's submitted set of shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Shifts in submission order. A missing or `null` list reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shifts: Vec<Shift>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Shift>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Shift>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Timesheet {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, shifts: Vec<Shift>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            shifts,
        }
    }

    /// Sum of every shift's stored hours. Negative shifts reduce the total.
    pub fn total_hours(&self) -> f64 {
        self.shifts.iter().fold(0.0, |total, shift| total + shift.hours())
    }

    /// Total hours with two decimals, `"0.00"` for an empty timesheet.
    pub fn formatted_total_hours(&self) -> String {
        if self.shifts.is_empty() {
            return "0.00".to_string();
        }
        format!("{:.2}", self.total_hours())
    }

    /// Shifts ordered by start time.
    pub fn sorted_shifts(&self) -> Vec<&Shift> {
        let mut shifts: Vec<&Shift> = self.shifts.iter().collect();
        shifts.sort_by_key(|shift| shift.start);
        shifts
    }

    /// Start of the week holding the earliest shift.
    pub fn week_start(&self, first_day: Weekday) -> Option<NaiveDateTime> {
        self.shifts
            .iter()
            .map(|shift| shift.start)
            .min()
            .map(|start| start_of_week(start.date(), first_day))
    }
}

/// Groups timesheets by the week of their earliest shift.
///
/// Timesheets without shifts belong to no week and are left out.
pub fn partition_by_week(timesheets: &[Timesheet], first_day: Weekday) -> BTreeMap<NaiveDateTime, Vec<&Timesheet>> {
    let mut weeks: BTreeMap<NaiveDateTime, Vec<&Timesheet>> = BTreeMap::new();
    for timesheet in timesheets {
        if let Some(week) = timesheet.week_start(first_day) {
            weeks.entry(week).or_default().push(timesheet);
        }
    }
    weeks
}
