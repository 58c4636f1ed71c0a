#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # slotbook
//!
//! A library for booking fixed-duration appointment slots on a single shared
//! resource.
//!
//! Each day is divided into the slots of an [`OperatingWindow`]. A slot is
//! held by at most one [`Reservation`], owned either by a registered user or
//! by a guest identified through contact details. Uniqueness is enforced by
//! the store atomically with the write, so concurrent bookings of the same
//! slot yield exactly one success.
//!
//! ## Core Types
//!
//! - [`SlotTime`] and [`OperatingWindow`]: Slot labels and the bookable day
//! - [`Reservation`], [`Owner`] and [`Status`]: Stored bookings
//! - [`ReservationEngine`]: Validation, authorization and availability
//! - [`ReservationStore`] and [`Database`]: Durable storage
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use slotbook::{OperatingWindow, SlotTime};
//!
//! let window = OperatingWindow::default();
//! assert_eq!(window.slot_count(), 10);
//!
//! let time: SlotTime = "9:00".parse().unwrap();
//! assert!(window.contains(time));
//! assert_eq!(time.to_string(), "09:00");
//! ```

pub mod config;
pub mod database;
pub mod engine;
pub mod error;
pub mod identity;
pub mod logging;
pub mod reservation;
pub mod slot;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use engine::{CreateOptions, ReservationEngine, ReservationView, UserReservation};
pub use error::{Error, Result};
pub use identity::{Caller, Identity, UserProfile};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{
    GuestInfo, NewReservation, Owner, Reservation, ReservationId, ReservationRecord, Status,
    StatusUpdate, TransitionPolicy, UserId, ValidationError,
};
pub use slot::{OperatingWindow, SlotTime};
pub use store::ReservationStore;
