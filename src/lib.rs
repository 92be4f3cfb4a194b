//! # Shiftly
//!
//! Clock-time arithmetic for timesheets: partial hours:minutes values,
//! week boundaries for a configurable first day of week, per-shift worked
//! hours and per-timesheet totals.
//!
//! ## Features
//!
//! - **Clock times**: [`ClockTime`](libs::clock_time::ClockTime) with unset
//!   components, validation and wraparound arithmetic
//! - **Weeks**: Start and end of the week containing any date
//! - **Shifts**: Worked hours from form times (clamped) or stored
//!   timestamps (unclamped)
//! - **Timesheets**: Totals formatted to two decimals
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftly::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
