//! Administrative changes to existing reservations.

use log::info;

use crate::error::{Error, Result};
use crate::identity::Caller;
use crate::reservation::{Reservation, ReservationId, Status, StatusUpdate};
use crate::store::ReservationStore;

use super::ReservationEngine;

impl<S: ReservationStore> ReservationEngine<S> {
    /// Changes the status and/or notes of a reservation.
    ///
    /// The status string is parsed before the store is touched. With the
    /// forward-only policy a move to an earlier status is rejected inside the
    /// same store transaction as the write.
    ///
    /// # Errors
    ///
    /// - [`Error::Authorization`] if the caller is not an administrator.
    /// - [`Error::InvalidStatus`] if `status` is not a known status name.
    /// - [`Error::NotFound`] if no reservation has the given id.
    /// - [`Error::InvalidTransition`] if the policy rejects the change.
    pub fn update_status(
        &mut self,
        caller: &Caller,
        id: ReservationId,
        status: Option<&str>,
        notes: Option<String>,
    ) -> Result<Reservation> {
        caller.require_admin("update reservation status")?;

        let update = StatusUpdate {
            status: status.map(str::parse::<Status>).transpose()?,
            notes,
        };

        let updated = self.store.update_status(id, &update, self.policy)?;
        if let Some(status) = update.status {
            info!("Reservation #{id} is now {status}");
        }
        Ok(updated)
    }

    /// Permanently removes a reservation.
    ///
    /// # Errors
    ///
    /// - [`Error::Authorization`] if the caller is not an administrator.
    /// - [`Error::NotFound`] if no reservation has the given id.
    pub fn delete(&mut self, caller: &Caller, id: ReservationId) -> Result<()> {
        caller.require_admin("delete reservations")?;

        if self.store.delete(id)? {
            info!("Deleted reservation #{id}");
            Ok(())
        } else {
            Err(Error::NotFound {
                resource: format!("reservation {id}"),
            })
        }
    }
}
