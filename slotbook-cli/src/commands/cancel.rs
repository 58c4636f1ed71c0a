//! Cancel command implementation.
//!
//! This module implements the `cancel` command, which permanently removes
//! a reservation and frees its slot.

use crate::error::CliError;
use crate::utils::{open_engine, CallerArgs, GlobalOptions};
use clap::Args;
use slotbook::ReservationId;

/// Delete a reservation (admin).
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    #[command(flatten)]
    pub caller: CallerArgs,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let caller = self.caller.to_caller()?;
        let (_config, mut engine) = open_engine(global)?;

        let id = ReservationId::new(self.id);
        engine.delete(&caller, id)?;

        if !global.quiet {
            eprintln!("Cancelled reservation #{id}");
        }

        Ok(())
    }
}
