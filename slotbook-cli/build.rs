//! Build script for slotbook-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("slotbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book fixed-duration appointment slots")
        .long_about(
            "Command-line tool for booking fixed-duration appointment slots on a shared resource",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("SLOTBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("SLOTBOOK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("SLOTBOOK_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("book")
                .about("Book a slot")
                .long_about("Book one slot of the operating window as a registered user or guest"),
            Command::new("mine")
                .about("List your own reservations")
                .long_about("Display the reservations owned by the calling user"),
            Command::new("list")
                .about("List all reservations (admin)")
                .long_about("Display every reservation in table, JSON, CSV or TSV format"),
            Command::new("set-status")
                .about("Change the status or notes of a reservation (admin)")
                .long_about("Move a reservation between Pending, Confirmed and Completed"),
            Command::new("cancel")
                .about("Delete a reservation (admin)")
                .long_about("Permanently remove a reservation and free its slot"),
            Command::new("booked-dates")
                .about("List fully booked dates")
                .long_about("Display the dates on which every slot is taken"),
            Command::new("booked-times")
                .about("List booked slot times of a date")
                .long_about("Display the taken slot times of one date"),
            Command::new("slots")
                .about("List open slot times of a date")
                .long_about("Display the slot times of one date that can still be booked"),
            Command::new("profile")
                .about("Manage user profiles")
                .long_about("Create, replace or remove the contact details of a registered user"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main slotbook.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("slotbook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
