//! Creating reservations.

use chrono::NaiveDate;
use log::{info, warn};

use crate::error::{Error, Result};
use crate::identity::{Caller, Identity};
use crate::reservation::{GuestInfo, NewReservation, Owner, Reservation};
use crate::slot::SlotTime;
use crate::store::ReservationStore;

use super::ReservationEngine;

/// Options for a create operation.
///
/// The time is kept as text so that malformed input is reported as a
/// validation error on the `time` field.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slotbook::engine::CreateOptions;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let options = CreateOptions::new(date, "9:00", "Haircut")
///     .with_notes(Some("first visit".to_string()));
/// assert_eq!(options.time, "9:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    /// The requested date.
    pub date: NaiveDate,
    /// The requested slot time, `H:MM` or `HH:MM`.
    pub time: String,
    /// The service label.
    pub service: String,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

impl CreateOptions {
    /// Creates options for booking `time` on `date` without notes.
    #[must_use]
    pub fn new(date: NaiveDate, time: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            date,
            time: time.into(),
            service: service.into(),
            notes: None,
        }
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

impl<S: ReservationStore> ReservationEngine<S> {
    /// Books a slot for the caller.
    ///
    /// Guests own the reservation through their contact details; registered
    /// users own it through their id. The new reservation is `Pending`.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the time is malformed or outside the
    ///   operating window, the service is blank, or the guest details are
    ///   incomplete. Nothing is written in that case.
    /// - [`Error::SlotTaken`] if another reservation holds the slot.
    /// - [`Error::StoreUnavailable`] on any other storage failure.
    pub fn create(&mut self, caller: &Caller, options: CreateOptions) -> Result<Reservation> {
        let new = self.plan_create(caller, options)?;

        match self.store.insert(&new) {
            Ok(reservation) => {
                info!(
                    "Booked reservation #{} for {} {}",
                    reservation.id(),
                    reservation.date(),
                    reservation.time()
                );
                Ok(reservation)
            }
            Err(e) => {
                if e.is_slot_taken() {
                    warn!("Slot {} {} is already booked", new.date, new.time);
                }
                Err(e)
            }
        }
    }

    fn plan_create(&self, caller: &Caller, options: CreateOptions) -> Result<NewReservation> {
        let time: SlotTime = options.time.parse()?;
        if !self.window.contains(time) {
            return Err(Error::Validation {
                field: "time".into(),
                message: format!("{time} is not a slot of the operating window {}", self.window),
            });
        }

        let service = options.service.trim();
        if service.is_empty() {
            return Err(Error::Validation {
                field: "service".into(),
                message: "Service cannot be empty".into(),
            });
        }

        let owner = match caller.identity() {
            Identity::User(id) => Owner::RegisteredUser(id.clone()),
            Identity::Guest(info) => Owner::Guest(GuestInfo::new(
                info.name.clone(),
                info.email.clone(),
                info.phone.clone(),
            )?),
        };

        Ok(NewReservation {
            owner,
            date: options.date,
            time,
            service: service.to_string(),
            notes: options.notes,
        })
    }
}
