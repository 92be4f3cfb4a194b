//! Core library modules for the shiftly application.
//!
//! ## Features
//!
//! - **Clock arithmetic**: Partial hours:minutes values with wraparound
//! - **Calendar**: Week boundaries for a configurable first day of week
//! - **Shifts and timesheets**: Worked hours per shift and per timesheet
//! - **Settings**: Validated administrator settings
//! - **Application support**: Configuration, messages, table views
//!
//! ## Usage
//!
//! ```rust
//! use shiftly::libs::clock_time::ClockTime;
//! use shiftly::libs::shift::ShiftTimes;
//!
//! let times = ShiftTimes::new("09:00".parse()?, "17:00".parse()?, "00:30".parse()?);
//! assert_eq!(times.hours(), Some(7.5));
//! assert!(ShiftTimes::new(ClockTime::empty(), "17:00".parse()?, "00:30".parse()?).hours().is_none());
//! # Ok::<(), shiftly::libs::clock_time::InvalidTime>(())
//! ```

pub mod calendar;
pub mod clock_time;
pub mod config;
pub mod data_storage;
pub mod messages;
pub mod settings;
pub mod shift;
pub mod timesheet;
pub mod view;
