//! Book command implementation.
//!
//! This module implements the `book` command, which reserves one slot for
//! the caller and prints the new reservation id.

use crate::error::CliError;
use crate::utils::{open_engine, parse_date, CallerArgs, GlobalOptions};
use clap::Args;
use slotbook::CreateOptions;

/// Book a slot.
#[derive(Args)]
pub struct BookCommand {
    /// Date of the appointment (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Slot start time (H:MM or HH:MM)
    #[arg(long, value_name = "TIME")]
    pub time: String,

    /// Requested service
    #[arg(long, value_name = "SERVICE")]
    pub service: String,

    /// Free-form notes
    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,

    #[command(flatten)]
    pub caller: CallerArgs,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Resolve inputs
        let caller = self.caller.to_caller()?;
        let date = parse_date(&self.date)?;

        // 2. Open engine
        let (_config, mut engine) = open_engine(global)?;

        // 3. Create
        let options = CreateOptions::new(date, self.time, self.service).with_notes(self.notes);
        let reservation = engine.create(&caller, options)?;

        // 4. Output id to stdout
        println!("{}", reservation.id());

        if !global.quiet {
            eprintln!(
                "Booked {} {} ({})",
                reservation.date(),
                reservation.time(),
                reservation.status()
            );
        }

        Ok(())
    }
}
