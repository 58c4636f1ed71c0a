//! Profile command implementation.
//!
//! This module implements the `profile` command group, which maintains the
//! contact details shown next to registered users' reservations.

use crate::error::CliError;
use crate::utils::{open_engine, CallerArgs, GlobalOptions};
use clap::{Args, Subcommand};
use slotbook::{UserId, UserProfile};

/// Manage user profiles.
#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile subcommands.
#[derive(Subcommand)]
pub enum ProfileAction {
    /// Create or replace a profile
    Put {
        /// User id
        #[arg(value_name = "ID")]
        id: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        #[command(flatten)]
        caller: CallerArgs,
    },

    /// Remove a profile (reservations are kept)
    Remove {
        /// User id
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        caller: CallerArgs,
    },
}

impl ProfileCommand {
    /// Execute the profile command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.action {
            ProfileAction::Put {
                id,
                name,
                email,
                phone,
                caller,
            } => {
                let caller = caller.to_caller()?;
                let profile = UserProfile {
                    id: user_id(&id)?,
                    name,
                    email,
                    phone,
                };
                let (_config, mut engine) = open_engine(global)?;
                engine.put_profile(&caller, &profile)?;
                if !global.quiet {
                    eprintln!("Saved profile {}", profile.id);
                }
            }
            ProfileAction::Remove { id, caller } => {
                let caller = caller.to_caller()?;
                let id = user_id(&id)?;
                let (_config, mut engine) = open_engine(global)?;
                engine.remove_profile(&caller, &id)?;
                if !global.quiet {
                    eprintln!("Removed profile {id}");
                }
            }
        }
        Ok(())
    }
}

fn user_id(raw: &str) -> Result<UserId, CliError> {
    UserId::new(raw).map_err(|e| CliError::InvalidArguments(e.to_string()))
}
