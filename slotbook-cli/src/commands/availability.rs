//! Availability command implementations.
//!
//! This module implements the read-only availability queries:
//! - `booked-dates`: days with every slot taken
//! - `booked-times`: taken slot times of one day
//! - `slots`: free slot times of one day

use crate::error::CliError;
use crate::utils::{open_engine, parse_date, GlobalOptions};
use chrono::Local;
use clap::Args;
use std::io::Write;

/// List fully booked dates.
#[derive(Args)]
pub struct BookedDatesCommand {}

impl BookedDatesCommand {
    /// Execute the booked-dates command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, engine) = open_engine(global)?;
        let dates = engine.booked_dates()?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for date in dates {
            writeln!(handle, "{date}")?;
        }
        Ok(())
    }
}

/// List booked slot times of a date.
#[derive(Args)]
pub struct BookedTimesCommand {
    /// Date to inspect (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,
}

impl BookedTimesCommand {
    /// Execute the booked-times command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = parse_date(&self.date)?;
        let (_config, engine) = open_engine(global)?;
        let times = engine.booked_times(date)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for time in times {
            writeln!(handle, "{time}")?;
        }
        Ok(())
    }
}

/// List open slot times of a date.
#[derive(Args)]
pub struct SlotsCommand {
    /// Date to inspect (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

impl SlotsCommand {
    /// Execute the slots command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = match self.date {
            Some(ref d) => parse_date(d)?,
            None => Local::now().date_naive(),
        };
        let (_config, engine) = open_engine(global)?;
        let open = engine.open_slots(date)?;

        if global.verbose {
            eprintln!(
                "{date}: {} of {} slots open",
                open.len(),
                engine.window().slot_count()
            );
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for slot in open {
            writeln!(handle, "{slot}")?;
        }
        Ok(())
    }
}
