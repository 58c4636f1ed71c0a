//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `book`: Book a slot
//! - `mine`: List the caller's reservations
//! - `list`: List all reservations (admin)
//! - `set_status`: Change status or notes (admin)
//! - `cancel`: Delete a reservation (admin)
//! - `availability`: Booked dates, booked times and open slots
//! - `profile`: Maintain user profiles
//! - `completions`: Generate shell completion scripts

pub mod availability;
pub mod book;
pub mod cancel;
pub mod completions;
pub mod list;
pub mod mine;
pub mod profile;
pub mod set_status;

pub use availability::{BookedDatesCommand, BookedTimesCommand, SlotsCommand};
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use list::ListCommand;
pub use mine::MineCommand;
pub use profile::ProfileCommand;
pub use set_status::SetStatusCommand;
