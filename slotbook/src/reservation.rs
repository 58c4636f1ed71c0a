//! Reservation types for tracking booked slots.
//!
//! This module provides the reservation record, its owner and status
//! types, and the builder used to construct reservations from storage.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slot::SlotTime;

/// Store-assigned identifier of a reservation.
///
/// # Examples
///
/// ```
/// use slotbook::ReservationId;
///
/// let id: ReservationId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw store identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self).map_err(|_| ValidationError {
            field: "id".into(),
            message: format!("'{s}' is not a valid reservation id"),
        })
    }
}

/// Identifier of a registered user, as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Creates a user identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty after trimming whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::UserId;
    ///
    /// assert_eq!(UserId::new(" u-1 ").unwrap().as_str(), "u-1");
    /// assert!(UserId::new("   ").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "user".into(),
                message: "user id must be non-empty".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inline contact details of an anonymous caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestInfo {
    /// Display name of the guest.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

impl GuestInfo {
    /// Creates guest contact details, trimming each field.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or phone is empty, or if the email is
    /// empty or not shaped like an address.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::GuestInfo;
    ///
    /// let guest = GuestInfo::new("Ana", "ana@example.com", "555-0100").unwrap();
    /// assert_eq!(guest.name, "Ana");
    ///
    /// assert!(GuestInfo::new("Ana", "not-an-email", "555-0100").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let info = Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            phone: phone.into().trim().to_string(),
        };
        info.validate()?;
        Ok(info)
    }

    /// Validates the contact details without modifying them.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError {
                field: "guestInfo.name".into(),
                message: "guest name must be non-empty".into(),
            });
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError {
                field: "guestInfo.phone".into(),
                message: "guest phone must be non-empty".into(),
            });
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ValidationError {
                field: "guestInfo.email".into(),
                message: format!("'{}' is not a valid email address", self.email),
            });
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
}

/// Who a reservation belongs to.
///
/// A reservation is owned either by a registered user or by a guest, never
/// both and never neither.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owner {
    /// A registered user, referenced by identifier.
    RegisteredUser(UserId),
    /// An anonymous caller with inline contact details.
    Guest(GuestInfo),
}

impl Owner {
    /// Returns `true` if the owner is a guest.
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        matches!(self, Self::Guest(_))
    }

    /// Returns the user identifier for registered owners.
    #[must_use]
    pub const fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::RegisteredUser(id) => Some(id),
            Self::Guest(_) => None,
        }
    }

    /// Returns the contact details for guest owners.
    #[must_use]
    pub const fn guest_info(&self) -> Option<&GuestInfo> {
        match self {
            Self::Guest(info) => Some(info),
            Self::RegisteredUser(_) => None,
        }
    }
}

/// Lifecycle status of a reservation.
///
/// Parsing is case-insensitive and accepts only the three English names.
/// Deserialization goes through the same parser; serialization always
/// writes the canonical name.
///
/// # Examples
///
/// ```
/// use slotbook::Status;
///
/// assert_eq!("confirmed".parse::<Status>().unwrap(), Status::Confirmed);
/// assert!("Bogus".parse::<Status>().is_err());
/// assert_eq!(Status::default(), Status::Pending);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub enum Status {
    /// Newly created, awaiting confirmation.
    #[default]
    Pending,
    /// Confirmed by the business.
    Confirmed,
    /// The appointment took place.
    Completed,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Confirmed, Self::Completed];

    /// Returns the canonical name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| crate::Error::InvalidStatus {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Status {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Rule applied when a reservation's status is changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionPolicy {
    /// Any recognized status may replace any other.
    #[default]
    Passthrough,
    /// Status may only stay the same or move forward in the lifecycle.
    ForwardOnly,
}

impl TransitionPolicy {
    /// Checks whether moving from `from` to `to` is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTransition`] when the policy is
    /// forward-only and `to` precedes `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::{Status, TransitionPolicy};
    ///
    /// let policy = TransitionPolicy::ForwardOnly;
    /// assert!(policy.check(Status::Pending, Status::Completed).is_ok());
    /// assert!(policy.check(Status::Completed, Status::Pending).is_err());
    ///
    /// let policy = TransitionPolicy::Passthrough;
    /// assert!(policy.check(Status::Completed, Status::Pending).is_ok());
    /// ```
    pub fn check(self, from: Status, to: Status) -> crate::Result<()> {
        match self {
            Self::ForwardOnly if to < from => Err(crate::Error::InvalidTransition { from, to }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passthrough => f.write_str("passthrough"),
            Self::ForwardOnly => f.write_str("forward-only"),
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passthrough" => Ok(Self::Passthrough),
            "forward-only" | "forward_only" => Ok(Self::ForwardOnly),
            _ => Err(ValidationError {
                field: "transition_policy".into(),
                message: format!("unknown policy '{s}' (expected passthrough or forward-only)"),
            }),
        }
    }
}

/// A reservation request that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    /// Who the reservation belongs to.
    pub owner: Owner,
    /// The booked date.
    pub date: NaiveDate,
    /// The booked slot time.
    pub time: SlotTime,
    /// The requested service label.
    pub service: String,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

impl NewReservation {
    /// Returns the local instant the reservation starts at.
    #[must_use]
    pub fn starts_at(&self) -> NaiveDateTime {
        self.time.on(self.date)
    }
}

/// A partial update of a reservation's mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusUpdate {
    /// New status, if changing.
    pub status: Option<Status>,
    /// New notes, if changing.
    pub notes: Option<String>,
}

impl StatusUpdate {
    /// Returns `true` if the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none()
    }
}

/// A stored reservation of one slot.
///
/// Reservations are created by the store and are read-only for callers.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slotbook::{Owner, Reservation, ReservationId, SlotTime, Status, UserId};
///
/// let reservation = Reservation::builder(
///     ReservationId::new(1),
///     Owner::RegisteredUser(UserId::new("u-1").unwrap()),
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     "10:00".parse::<SlotTime>().unwrap(),
///     "Haircut",
/// )
/// .build()
/// .unwrap();
///
/// assert_eq!(reservation.status(), Status::Pending);
/// assert_eq!(reservation.starts_at().to_string(), "2024-06-01 10:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ReservationRecord", try_from = "ReservationRecord")]
pub struct Reservation {
    id: ReservationId,
    owner: Owner,
    date: NaiveDate,
    time: SlotTime,
    service: String,
    notes: Option<String>,
    status: Status,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(
        id: ReservationId,
        owner: Owner,
        date: NaiveDate,
        time: SlotTime,
        service: impl Into<String>,
    ) -> ReservationBuilder {
        ReservationBuilder {
            id,
            owner,
            date,
            time,
            service: service.into(),
            notes: None,
            status: Status::default(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the owner.
    #[must_use]
    pub const fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Returns `true` if the reservation belongs to a guest.
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        self.owner.is_guest()
    }

    /// Returns the booked date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the booked slot time.
    #[must_use]
    pub const fn time(&self) -> SlotTime {
        self.time
    }

    /// Returns the local instant the reservation starts at.
    #[must_use]
    pub fn starts_at(&self) -> NaiveDateTime {
        self.time.on(self.date)
    }

    /// Returns the service label.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the optional notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Builder for creating `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: ReservationId,
    owner: Owner,
    date: NaiveDate,
    time: SlotTime,
    service: String,
    notes: Option<String>,
    status: Status,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl ReservationBuilder {
    /// Sets the notes. Blank notes are dropped.
    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes.filter(|n| !n.trim().is_empty());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the last modification timestamp.
    #[must_use]
    pub const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the service label is empty after trimming.
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let service = self.service.trim().to_string();
        if service.is_empty() {
            return Err(ValidationError {
                field: "service".into(),
                message: "service must be non-empty".into(),
            });
        }

        let now = Utc::now();
        let created_at = self.created_at.unwrap_or(now);
        Ok(Reservation {
            id: self.id,
            owner: self.owner,
            date: self.date,
            time: self.time,
            service,
            notes: self.notes,
            status: self.status,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        })
    }
}

/// The persisted and exported shape of a reservation.
///
/// Registered owners carry `user` and `isGuest: false`; guest owners carry
/// `guestInfo` and `isGuest: true`. Conversion into a [`Reservation`]
/// rejects any other combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    /// Store-assigned identifier.
    pub id: ReservationId,
    /// Owning user, for registered owners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    /// Contact details, for guest owners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_info: Option<GuestInfo>,
    /// Whether the owner is a guest.
    pub is_guest: bool,
    /// Booked date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Booked slot time (`HH:MM`).
    pub time: SlotTime,
    /// Service label.
    pub service: String,
    /// Optional notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Lifecycle status.
    pub status: Status,
    /// Creation timestamp (RFC 3339, UTC).
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp (RFC 3339, UTC).
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationRecord {
    fn from(r: Reservation) -> Self {
        let is_guest = r.owner.is_guest();
        let (user, guest_info) = match r.owner {
            Owner::RegisteredUser(id) => (Some(id), None),
            Owner::Guest(info) => (None, Some(info)),
        };
        Self {
            id: r.id,
            user,
            guest_info,
            is_guest,
            date: r.date,
            time: r.time,
            service: r.service,
            notes: r.notes,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl TryFrom<ReservationRecord> for Reservation {
    type Error = ValidationError;

    fn try_from(record: ReservationRecord) -> Result<Self, Self::Error> {
        let owner = match (record.is_guest, record.user, record.guest_info) {
            (false, Some(user), None) => Owner::RegisteredUser(user),
            (true, None, Some(info)) => Owner::Guest(info),
            _ => {
                return Err(ValidationError {
                    field: "owner".into(),
                    message: "record must carry exactly one of user (isGuest=false) \
                              or guestInfo (isGuest=true)"
                        .into(),
                })
            }
        };

        Reservation::builder(record.id, owner, record.date, record.time, record.service)
            .notes(record.notes)
            .status(record.status)
            .created_at(record.created_at)
            .updated_at(record.updated_at)
            .build()
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
