//! Mine command implementation.
//!
//! This module implements the `mine` command, which lists the calling
//! user's own reservations.

use crate::error::CliError;
use crate::utils::{format_timestamp, open_engine, CallerArgs, GlobalOptions};
use clap::Args;
use std::io::Write;

/// List your own reservations.
#[derive(Args)]
pub struct MineCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub caller: CallerArgs,
}

impl MineCommand {
    /// Execute the mine command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let caller = self.caller.to_caller()?;
        let (_config, engine) = open_engine(global)?;
        let reservations = engine.list_for_user(&caller)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if self.json {
            let records: Vec<_> = reservations.iter().map(|r| &r.reservation).collect();
            serde_json::to_writer_pretty(&mut handle, &records)?;
            writeln!(handle)?;
            return Ok(());
        }

        if let Some(profile) = reservations.first().and_then(|r| r.profile.as_ref()) {
            writeln!(handle, "{} <{}>", profile.name, profile.email)?;
        }

        writeln!(handle, "ID\tDATE\tTIME\tSERVICE\tSTATUS\tCREATED_AT")?;
        for entry in &reservations {
            let r = &entry.reservation;
            writeln!(
                handle,
                "{}\t{}\t{}\t{}\t{}\t{}",
                r.id(),
                r.date(),
                r.time(),
                r.service(),
                r.status(),
                format_timestamp(r.created_at()),
            )?;
        }

        Ok(())
    }
}
