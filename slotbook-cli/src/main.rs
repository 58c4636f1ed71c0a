//! Main entry point for the slotbook CLI.
//!
//! This is the command-line interface for the slotbook reservation engine.
//! It provides commands for booking and managing appointment slots:
//! - `book`: Book a slot as a user or guest
//! - `mine`: List your own reservations
//! - `list`, `set-status`, `cancel`: Administrative commands
//! - `booked-dates`, `booked-times`, `slots`: Availability queries

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    slotbook::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Mine(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::SetStatus(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::BookedDates(cmd) => cmd.execute(&global),
        cli::Command::BookedTimes(cmd) => cmd.execute(&global),
        cli::Command::Slots(cmd) => cmd.execute(&global),
        cli::Command::Profile(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
