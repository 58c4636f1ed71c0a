//! Set-status command implementation.
//!
//! This module implements the `set-status` command, which lets an
//! administrator change the status and notes of a reservation.

use crate::error::CliError;
use crate::utils::{open_engine, CallerArgs, GlobalOptions};
use clap::Args;
use slotbook::ReservationId;

/// Change the status or notes of a reservation (admin).
#[derive(Args)]
pub struct SetStatusCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New status (Pending, Confirmed, Completed)
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,

    /// Replacement notes
    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,

    #[command(flatten)]
    pub caller: CallerArgs,
}

impl SetStatusCommand {
    /// Execute the set-status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.status.is_none() && self.notes.is_none() {
            return Err(CliError::InvalidArguments(
                "Specify --status and/or --notes".to_string(),
            ));
        }

        let caller = self.caller.to_caller()?;
        let (_config, mut engine) = open_engine(global)?;

        let updated = engine.update_status(
            &caller,
            ReservationId::new(self.id),
            self.status.as_deref(),
            self.notes,
        )?;

        if !global.quiet {
            eprintln!("Reservation #{} is {}", updated.id(), updated.status());
        }

        Ok(())
    }
}
