use super::calendar::{day_name, formatted_date};
use super::shift::{Shift, ShiftTimes};
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the table of the seven days of a week.
    pub fn week_table(days: &[NaiveDate]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "DAY", "DATE"]);
        for (index, date) in days.iter().enumerate() {
            table.add_row(row![index + 1, day_name(*date), formatted_date(*date)]);
        }

        table
    }

    /// Builds the table of a timesheet's shifts with their stored hours.
    pub fn shifts_table(shifts: &[&Shift]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "DATE", "START", "END", "BREAK", "HOURS"]);
        for (index, shift) in shifts.iter().enumerate() {
            let times = ShiftTimes::from_shift(shift);
            table.add_row(row![
                index + 1,
                formatted_date(shift.date()),
                times.start_time,
                times.end_time,
                times.break_duration,
                format!("{:.2}", shift.hours())
            ]);
        }

        table
    }

    pub fn week(days: &[NaiveDate]) {
        Self::week_table(days).printstd();
    }

    pub fn shifts(shifts: &[&Shift]) {
        Self::shifts_table(shifts).printstd();
    }
}
