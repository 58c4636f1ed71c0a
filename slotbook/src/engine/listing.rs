//! Listing reservations and maintaining the profiles they are joined with.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::identity::{Caller, UserProfile};
use crate::reservation::{Owner, Reservation, ReservationId, Status, UserId};
use crate::slot::SlotTime;
use crate::store::ReservationStore;

use super::ReservationEngine;

/// Placeholder for contact fields of a user whose profile no longer exists.
pub const UNKNOWN_CONTACT: &str = "unknown";

/// A reservation of the calling user, joined with their profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReservation {
    /// The reservation.
    pub reservation: Reservation,
    /// The owner's profile, if it still exists.
    pub profile: Option<UserProfile>,
}

/// A reservation normalized for administrative listings.
///
/// Guest and registered reservations share one flat shape, which is what the
/// CSV and JSON exports serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationView {
    /// Reservation id.
    pub id: ReservationId,
    /// Owner's name.
    pub name: String,
    /// Owner's email address.
    pub email: String,
    /// Owner's phone number.
    pub phone: String,
    /// Booked date.
    pub date: NaiveDate,
    /// Booked slot time.
    pub time: SlotTime,
    /// Service label.
    pub service: String,
    /// Optional notes.
    pub notes: Option<String>,
    /// Current status.
    pub status: Status,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Whether the owner is a guest.
    pub is_guest: bool,
}

impl ReservationView {
    fn new(reservation: &Reservation, profile: Option<&UserProfile>) -> Self {
        let (name, email, phone) = match (reservation.owner(), profile) {
            (Owner::Guest(info), _) => (info.name.clone(), info.email.clone(), info.phone.clone()),
            (Owner::RegisteredUser(_), Some(p)) => {
                (p.name.clone(), p.email.clone(), p.phone.clone())
            }
            (Owner::RegisteredUser(_), None) => (
                UNKNOWN_CONTACT.to_string(),
                UNKNOWN_CONTACT.to_string(),
                UNKNOWN_CONTACT.to_string(),
            ),
        };

        Self {
            id: reservation.id(),
            name,
            email,
            phone,
            date: reservation.date(),
            time: reservation.time(),
            service: reservation.service().to_string(),
            notes: reservation.notes().map(str::to_string),
            status: reservation.status(),
            created_at: reservation.created_at(),
            is_guest: reservation.is_guest(),
        }
    }
}

impl<S: ReservationStore> ReservationEngine<S> {
    /// Lists the calling user's reservations, newest slot first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authorization`] for guest callers, who have no
    /// identity to list by.
    pub fn list_for_user(&self, caller: &Caller) -> Result<Vec<UserReservation>> {
        let user = caller.user_id().ok_or_else(|| Error::Authorization {
            operation: "list reservations as a guest".into(),
        })?;

        let profile = self.store.find_user_profile(user)?;
        Ok(self
            .store
            .find_by_owner(user)?
            .into_iter()
            .map(|reservation| UserReservation {
                reservation,
                profile: profile.clone(),
            })
            .collect())
    }

    /// Lists every reservation, newest slot first.
    ///
    /// Registered owners whose profile is gone are shown as
    /// [`UNKNOWN_CONTACT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authorization`] if the caller is not an
    /// administrator.
    pub fn list_all(&self, caller: &Caller) -> Result<Vec<ReservationView>> {
        caller.require_admin("list all reservations")?;

        let reservations = self.store.find_all()?;
        let mut profiles: HashMap<UserId, Option<UserProfile>> = HashMap::new();
        let mut views = Vec::with_capacity(reservations.len());

        for reservation in &reservations {
            let profile = match reservation.owner().user_id() {
                Some(user) => self.cached_profile(&mut profiles, user)?,
                None => None,
            };
            views.push(ReservationView::new(reservation, profile.as_ref()));
        }

        debug!("Listed {} reservations", views.len());
        Ok(views)
    }

    fn cached_profile(
        &self,
        cache: &mut HashMap<UserId, Option<UserProfile>>,
        user: &UserId,
    ) -> Result<Option<UserProfile>> {
        if let Some(profile) = cache.get(user) {
            return Ok(profile.clone());
        }
        let profile = self.store.find_user_profile(user)?;
        cache.insert(user.clone(), profile.clone());
        Ok(profile)
    }

    /// Creates or replaces a user profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authorization`] unless the caller is an
    /// administrator or the user the profile belongs to.
    pub fn put_profile(&mut self, caller: &Caller, profile: &UserProfile) -> Result<()> {
        Self::require_self_or_admin(caller, &profile.id)?;
        self.store.put_user_profile(profile)
    }

    /// Removes a user profile. Reservations of that user are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authorization`] unless the caller is an
    /// administrator or the user themself, and [`Error::NotFound`] if the
    /// profile does not exist.
    pub fn remove_profile(&mut self, caller: &Caller, user: &UserId) -> Result<()> {
        Self::require_self_or_admin(caller, user)?;
        if self.store.remove_user_profile(user)? {
            Ok(())
        } else {
            Err(Error::NotFound {
                resource: format!("profile {user}"),
            })
        }
    }

    fn require_self_or_admin(caller: &Caller, user: &UserId) -> Result<()> {
        if caller.user_id() == Some(user) {
            Ok(())
        } else {
            caller.require_admin("manage another user's profile")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{date, mock_engine, store_failure, test_engine, MockStore};
    use super::*;
    use crate::database::test_util::test_profile;
    use crate::engine::CreateOptions;
    use crate::reservation::GuestInfo;

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn admin() -> Caller {
        Caller::admin(uid("boss"))
    }

    fn options(day: &str, time: &str) -> CreateOptions {
        CreateOptions::new(date(day), time, "Haircut")
    }

    #[test]
    fn test_list_for_user_joins_profile() {
        let mut engine = test_engine();
        let alice = Caller::user(uid("alice"));
        engine.put_profile(&alice, &test_profile("alice")).unwrap();
        engine.create(&alice, options("2024-06-01", "09:00")).unwrap();
        engine.create(&alice, options("2024-06-02", "09:00")).unwrap();
        engine
            .create(&Caller::user(uid("bob")), options("2024-06-01", "10:00"))
            .unwrap();

        let mine = engine.list_for_user(&alice).unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].reservation.date(), date("2024-06-02"));
        assert_eq!(mine[1].reservation.date(), date("2024-06-01"));
        assert!(mine
            .iter()
            .all(|r| r.profile.as_ref().unwrap().email == "alice@example.com"));
    }

    #[test]
    fn test_list_for_user_without_profile() {
        let mut engine = test_engine();
        let alice = Caller::user(uid("alice"));
        engine.create(&alice, options("2024-06-01", "09:00")).unwrap();

        let mine = engine.list_for_user(&alice).unwrap();
        assert_eq!(mine.len(), 1);
        assert!(mine[0].profile.is_none());
    }

    #[test]
    fn test_list_for_user_rejects_guest() {
        let engine = test_engine();
        let guest = Caller::guest(GuestInfo::new("Ana", "ana@example.com", "1").unwrap());
        assert!(matches!(
            engine.list_for_user(&guest),
            Err(Error::Authorization { .. })
        ));
    }

    #[test]
    fn test_list_all_normalizes_owners() {
        let mut engine = test_engine();
        let alice = Caller::user(uid("alice"));
        engine.put_profile(&alice, &test_profile("alice")).unwrap();
        engine.create(&alice, options("2024-06-01", "09:00")).unwrap();

        let guest = Caller::guest(GuestInfo::new("Ana", "ana@example.com", "555").unwrap());
        engine.create(&guest, options("2024-06-01", "11:00")).unwrap();

        let views = engine.list_all(&admin()).unwrap();
        assert_eq!(views.len(), 2);

        assert!(views[0].is_guest);
        assert_eq!(views[0].name, "Ana");
        assert_eq!(views[0].time.to_string(), "11:00");

        assert!(!views[1].is_guest);
        assert_eq!(views[1].name, "alice name");
        assert_eq!(views[1].email, "alice@example.com");
    }

    #[test]
    fn test_list_all_tolerates_orphans() {
        let mut engine = test_engine();
        let alice = Caller::user(uid("alice"));
        engine.put_profile(&alice, &test_profile("alice")).unwrap();
        engine.create(&alice, options("2024-06-01", "09:00")).unwrap();
        engine.remove_profile(&alice, &uid("alice")).unwrap();

        let views = engine.list_all(&admin()).unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, UNKNOWN_CONTACT);
        assert_eq!(views[0].email, UNKNOWN_CONTACT);
        assert_eq!(views[0].phone, UNKNOWN_CONTACT);
    }

    #[test]
    fn test_list_all_requires_admin() {
        let engine = test_engine();
        assert!(matches!(
            engine.list_all(&Caller::user(uid("alice"))),
            Err(Error::Authorization { .. })
        ));
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let mut engine = test_engine();
        let guest = Caller::guest(GuestInfo::new("Ana", "ana@example.com", "555").unwrap());
        engine.create(&guest, options("2024-06-01", "10:00")).unwrap();

        let views = engine.list_all(&admin()).unwrap();
        let json = serde_json::to_value(&views[0]).unwrap();
        assert_eq!(json["isGuest"], true);
        assert_eq!(json["time"], "10:00");
        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["status"], "Pending");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_profile_management_authorization() {
        let mut engine = test_engine();
        let bob = Caller::user(uid("bob"));

        let err = engine.put_profile(&bob, &test_profile("alice")).unwrap_err();
        assert!(matches!(err, Error::Authorization { .. }));

        engine.put_profile(&admin(), &test_profile("alice")).unwrap();
        let err = engine.remove_profile(&bob, &uid("alice")).unwrap_err();
        assert!(matches!(err, Error::Authorization { .. }));

        engine.remove_profile(&admin(), &uid("alice")).unwrap();
        assert!(engine
            .remove_profile(&admin(), &uid("alice"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_list_all_looks_up_each_owner_once() {
        let orphaned = |id: i64, time: &str| {
            Reservation::builder(
                ReservationId::new(id),
                Owner::RegisteredUser(uid("ghost")),
                date("2024-06-01"),
                time.parse().unwrap(),
                "Haircut",
            )
            .build()
            .unwrap()
        };
        let reservations = vec![
            orphaned(1, "09:00"),
            orphaned(2, "10:00"),
            orphaned(3, "11:00"),
        ];

        let mut store = MockStore::new();
        store
            .expect_find_all()
            .times(1)
            .returning(move || Ok(reservations.clone()));
        store
            .expect_find_user_profile()
            .times(1)
            .returning(|_| Ok(None));

        let engine = mock_engine(store);
        let views = engine.list_all(&admin()).unwrap();
        assert_eq!(views.len(), 3);
        assert!(views.iter().all(|v| v.name == UNKNOWN_CONTACT));
    }

    #[test]
    fn test_list_all_propagates_store_failure() {
        let mut store = MockStore::new();
        store
            .expect_find_all()
            .times(1)
            .returning(|| Err(store_failure()));

        let engine = mock_engine(store);
        assert!(matches!(
            engine.list_all(&admin()),
            Err(Error::StoreUnavailable(_))
        ));
    }
}
