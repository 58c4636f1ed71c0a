//! The reservation store abstraction.
//!
//! [`ReservationStore`] is the seam between the engine and durable
//! storage. The SQLite [`Database`] is the production implementation.

use chrono::{NaiveDate, NaiveDateTime};

use crate::database::Database;
use crate::error::Result;
use crate::identity::UserProfile;
use crate::reservation::{
    NewReservation, Reservation, ReservationId, StatusUpdate, TransitionPolicy, UserId,
};

/// Durable keyed storage of reservations.
///
/// Implementations must enforce (date, time) uniqueness atomically with the
/// write in [`insert`](Self::insert); a read-then-write check is not enough.
pub trait ReservationStore {
    /// Stores a new reservation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SlotTaken`] if the slot is already occupied.
    fn insert(&mut self, new: &NewReservation) -> Result<Reservation>;

    /// Looks up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns a store error if the lookup fails.
    fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>>;

    /// Returns every reservation, newest slot first.
    ///
    /// # Errors
    ///
    /// Returns a store error if the scan fails.
    fn find_all(&self) -> Result<Vec<Reservation>>;

    /// Returns the reservations owned by `user`, newest slot first.
    ///
    /// # Errors
    ///
    /// Returns a store error if the scan fails.
    fn find_by_owner(&self, user: &UserId) -> Result<Vec<Reservation>>;

    /// Returns reservations starting within `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns a store error if the scan fails.
    fn find_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Reservation>>;

    /// Returns the number of reservations on each day that has any.
    ///
    /// # Errors
    ///
    /// Returns a store error if the aggregation fails.
    fn count_by_day(&self) -> Result<Vec<(NaiveDate, u32)>>;

    /// Applies a status and notes update under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] for an unknown id and
    /// [`crate::Error::InvalidTransition`] if `policy` rejects the change.
    fn update_status(
        &mut self,
        id: ReservationId,
        update: &StatusUpdate,
        policy: TransitionPolicy,
    ) -> Result<Reservation>;

    /// Deletes a reservation, returning `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns a store error if the delete fails.
    fn delete(&mut self, id: ReservationId) -> Result<bool>;

    /// Creates or replaces a user profile.
    ///
    /// # Errors
    ///
    /// Returns a store error if the write fails.
    fn put_user_profile(&mut self, profile: &UserProfile) -> Result<()>;

    /// Removes a user profile, returning `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns a store error if the delete fails.
    fn remove_user_profile(&mut self, id: &UserId) -> Result<bool>;

    /// Looks up a user profile.
    ///
    /// # Errors
    ///
    /// Returns a store error if the lookup fails.
    fn find_user_profile(&self, id: &UserId) -> Result<Option<UserProfile>>;
}

impl ReservationStore for Database {
    fn insert(&mut self, new: &NewReservation) -> Result<Reservation> {
        self.insert_reservation(new)
    }

    fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        self.get_reservation(id)
    }

    fn find_all(&self) -> Result<Vec<Reservation>> {
        self.list_all_reservations()
    }

    fn find_by_owner(&self, user: &UserId) -> Result<Vec<Reservation>> {
        self.list_reservations_for_user(user)
    }

    fn find_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Reservation>> {
        self.list_reservations_between(start, end)
    }

    fn count_by_day(&self) -> Result<Vec<(NaiveDate, u32)>> {
        self.count_reservations_by_day()
    }

    fn update_status(
        &mut self,
        id: ReservationId,
        update: &StatusUpdate,
        policy: TransitionPolicy,
    ) -> Result<Reservation> {
        self.update_reservation_status(id, update, policy)
    }

    fn delete(&mut self, id: ReservationId) -> Result<bool> {
        self.delete_reservation(id)
    }

    fn put_user_profile(&mut self, profile: &UserProfile) -> Result<()> {
        self.upsert_user_profile(profile)
    }

    fn remove_user_profile(&mut self, id: &UserId) -> Result<bool> {
        self.delete_user_profile(id)
    }

    fn find_user_profile(&self, id: &UserId) -> Result<Option<UserProfile>> {
        self.get_user_profile(id)
    }
}
