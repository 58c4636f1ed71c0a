//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookCommand, BookedDatesCommand, BookedTimesCommand, CancelCommand, CompletionsCommand,
    ListCommand, MineCommand, ProfileCommand, SetStatusCommand, SlotsCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking appointment slots.
#[derive(Parser)]
#[command(name = "slotbook")]
#[command(version, about = "Book fixed-duration appointment slots", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SLOTBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "SLOTBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "SLOTBOOK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book a slot
    Book(BookCommand),

    /// List your own reservations
    Mine(MineCommand),

    /// List all reservations (admin)
    List(ListCommand),

    /// Change the status or notes of a reservation (admin)
    SetStatus(SetStatusCommand),

    /// Delete a reservation (admin)
    Cancel(CancelCommand),

    /// List fully booked dates
    BookedDates(BookedDatesCommand),

    /// List booked slot times of a date
    BookedTimes(BookedTimesCommand),

    /// List open slot times of a date
    Slots(SlotsCommand),

    /// Manage user profiles
    Profile(ProfileCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
