//! Command-line interface for shiftly.
//!
//! Each subcommand lives in its own module exposing an `Args` struct and a
//! `cmd` function; [`Cli::menu`] parses the arguments and dispatches.

pub mod hours;
pub mod init;
pub mod total;
pub mod week;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure timesheet settings")]
    Init(init::InitArgs),
    #[command(about = "Calculate worked hours for a shift")]
    Hours(hours::HoursArgs),
    #[command(about = "Show the week containing a date")]
    Week(week::WeekArgs),
    #[command(about = "Total the hours of timesheets in a JSON file", arg_required_else_help = true)]
    Total(total::TotalArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Hours(args) => hours::cmd(args),
            Commands::Week(args) => week::cmd(args),
            Commands::Total(args) => total::cmd(args),
        }
    }
}
