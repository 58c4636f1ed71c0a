//! The reservation engine.
//!
//! [`ReservationEngine`] validates requests, applies authorization rules and
//! answers availability queries on top of a [`ReservationStore`]. Every
//! mutating operation issues at most one store write and never retries.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use slotbook::engine::{CreateOptions, ReservationEngine};
//! use slotbook::{Caller, Database, DatabaseConfig, GuestInfo, OperatingWindow, TransitionPolicy};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/slotbook.db")).unwrap();
//! let mut engine = ReservationEngine::new(db, OperatingWindow::default(), TransitionPolicy::default());
//!
//! let guest = GuestInfo::new("Ana", "ana@example.com", "555-0100").unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let options = CreateOptions::new(date, "10:00", "Haircut");
//!
//! let reservation = engine.create(&Caller::guest(guest), options).unwrap();
//! println!("booked #{}", reservation.id());
//! ```

pub mod availability;
pub mod create;
pub mod listing;
pub mod update;

pub use create::CreateOptions;
pub use listing::{ReservationView, UserReservation};

use crate::config::Config;
use crate::error::Result;
use crate::reservation::TransitionPolicy;
use crate::slot::OperatingWindow;
use crate::store::ReservationStore;

/// Booking rules applied on top of a reservation store.
#[derive(Debug)]
pub struct ReservationEngine<S> {
    store: S,
    window: OperatingWindow,
    policy: TransitionPolicy,
}

impl<S: ReservationStore> ReservationEngine<S> {
    /// Creates an engine over `store` with explicit settings.
    #[must_use]
    pub const fn new(store: S, window: OperatingWindow, policy: TransitionPolicy) -> Self {
        Self {
            store,
            window,
            policy,
        }
    }

    /// Creates an engine using the window and policy from `config`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured window is invalid.
    pub fn from_config(store: S, config: &Config) -> Result<Self> {
        Ok(Self::new(
            store,
            config.operating_window()?,
            config.transition_policy(),
        ))
    }

    /// Returns the operating window.
    #[must_use]
    pub const fn window(&self) -> &OperatingWindow {
        &self.window
    }

    /// Returns the status transition policy.
    #[must_use]
    pub const fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying store mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the engine, returning the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
