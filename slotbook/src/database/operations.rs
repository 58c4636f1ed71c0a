//! Database CRUD operations for reservations.
//!
//! This module implements all create, read, update, and delete operations
//! for slot reservations in the database.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, TransactionBehavior};

use crate::error::{Error, Result};
use crate::reservation::{
    GuestInfo, NewReservation, Owner, Reservation, ReservationId, Status, StatusUpdate,
    TransitionPolicy, UserId,
};
use crate::slot::SlotTime;

use super::connection::Database;
use super::schema::{DELETE_RESERVATION, INSERT_RESERVATION, RESERVATION_COLUMNS};

/// Storage format of `starts_at`; sorts lexicographically in time order.
const STARTS_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Storage format of `date`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts a UTC timestamp to Unix epoch seconds for database storage.
pub(super) fn datetime_to_unix_secs(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}

/// Converts Unix epoch seconds from the database to a UTC timestamp.
pub(super) fn unix_secs_to_datetime(secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(0, secs))
}

fn conversion_error<E>(col: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in [`RESERVATION_COLUMNS`] order.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let user_id: Option<String> = row.get(1)?;
    let guest_name: Option<String> = row.get(2)?;
    let guest_email: Option<String> = row.get(3)?;
    let guest_phone: Option<String> = row.get(4)?;
    let date: String = row.get(5)?;
    let time: String = row.get(6)?;
    let service: String = row.get(7)?;
    let notes: Option<String> = row.get(8)?;
    let status: String = row.get(9)?;
    let created_secs: i64 = row.get(10)?;
    let updated_secs: i64 = row.get(11)?;

    let owner = match (user_id, guest_name) {
        (Some(user), None) => {
            Owner::RegisteredUser(UserId::new(user).map_err(|e| conversion_error(1, e))?)
        }
        (None, Some(name)) => Owner::Guest(GuestInfo {
            name,
            email: guest_email.unwrap_or_default(),
            phone: guest_phone.unwrap_or_default(),
        }),
        _ => {
            return Err(conversion_error(
                1,
                crate::reservation::ValidationError {
                    field: "owner".into(),
                    message: format!("reservation {id} has no single owner"),
                },
            ))
        }
    };

    let date =
        NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| conversion_error(5, e))?;
    let time: SlotTime = time.parse().map_err(|e| conversion_error(6, e))?;
    let status: Status = status.parse().map_err(|e| conversion_error(9, e))?;

    Reservation::builder(ReservationId::new(id), owner, date, time, service)
        .notes(notes)
        .status(status)
        .created_at(unix_secs_to_datetime(created_secs)?)
        .updated_at(unix_secs_to_datetime(updated_secs)?)
        .build()
        .map_err(|e| conversion_error(7, e))
}

/// Returns `true` if the error is a UNIQUE constraint violation.
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn select_by_id(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
    let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = ?");
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt
        .query_row(params![id.value()], row_to_reservation)
        .optional()?)
}

fn collect_reservations(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Reservation>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let reservations = stmt
        .query_map(params, row_to_reservation)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
    Ok(reservations)
}

impl Database {
    /// Inserts a new reservation and returns the stored record.
    ///
    /// The uniqueness check and the write are the same `INSERT` statement,
    /// run inside an IMMEDIATE transaction. Two concurrent inserts for the
    /// same slot therefore produce exactly one success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotTaken`] if the (date, time) slot is already
    /// reserved, or a store error if the transaction fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use slotbook::database::{Database, DatabaseConfig};
    /// use slotbook::{NewReservation, Owner, UserId};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/slotbook.db")).unwrap();
    /// let stored = db
    ///     .insert_reservation(&NewReservation {
    ///         owner: Owner::RegisteredUser(UserId::new("u-1").unwrap()),
    ///         date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ///         time: "10:00".parse().unwrap(),
    ///         service: "Haircut".into(),
    ///         notes: None,
    ///     })
    ///     .unwrap();
    /// println!("reserved #{}", stored.id());
    /// ```
    pub fn insert_reservation(&mut self, new: &NewReservation) -> Result<Reservation> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let now = datetime_to_unix_secs(Utc::now());
        let (user_id, guest) = match &new.owner {
            Owner::RegisteredUser(id) => (Some(id.as_str()), None),
            Owner::Guest(info) => (None, Some(info)),
        };
        let notes = new.notes.as_deref().filter(|n| !n.trim().is_empty());

        let inserted = tx.execute(
            INSERT_RESERVATION,
            params![
                user_id,
                guest.map(|g| g.name.as_str()),
                guest.map(|g| g.email.as_str()),
                guest.map(|g| g.phone.as_str()),
                new.date.format(DATE_FORMAT).to_string(),
                new.time.to_string(),
                new.starts_at().format(STARTS_AT_FORMAT).to_string(),
                new.service.trim(),
                notes,
                Status::Pending.as_str(),
                now,
                now,
            ],
        );

        match inserted {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                log::debug!("slot {} {} already taken", new.date, new.time);
                return Err(Error::SlotTaken {
                    date: new.date,
                    time: new.time,
                });
            }
            Err(e) => return Err(e.into()),
        }

        let id = ReservationId::new(tx.last_insert_rowid());
        let stored = select_by_id(&tx, id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {id}"),
        })?;

        tx.commit()?;
        log::debug!("inserted reservation {id} for {} {}", new.date, new.time);
        Ok(stored)
    }

    /// Retrieves a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if the reservation doesn't exist
    pub fn get_reservation(&self, id: ReservationId) -> Result<Option<Reservation>> {
        select_by_id(&self.conn, id)
    }

    /// Lists all reservations, newest slot first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any row cannot be decoded.
    pub fn list_all_reservations(&self) -> Result<Vec<Reservation>> {
        let sql = format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations ORDER BY starts_at DESC, id DESC"
        );
        collect_reservations(&self.conn, &sql, params![])
    }

    /// Lists the reservations owned by a registered user, newest slot first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any row cannot be decoded.
    pub fn list_reservations_for_user(&self, user: &UserId) -> Result<Vec<Reservation>> {
        let sql = format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations
             WHERE user_id = ?
             ORDER BY starts_at DESC, id DESC"
        );
        collect_reservations(&self.conn, &sql, params![user.as_str()])
    }

    /// Lists reservations whose start lies within `[start, end]`, earliest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any row cannot be decoded.
    pub fn list_reservations_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Reservation>> {
        let sql = format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations
             WHERE starts_at >= ? AND starts_at <= ?
             ORDER BY starts_at ASC, id ASC"
        );
        collect_reservations(
            &self.conn,
            &sql,
            params![
                start.format(STARTS_AT_FORMAT).to_string(),
                end.format(STARTS_AT_FORMAT).to_string()
            ],
        )
    }

    /// Counts reservations per calendar day, in ascending date order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored date cannot be parsed.
    pub fn count_reservations_by_day(&self) -> Result<Vec<(NaiveDate, u32)>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT date, COUNT(*) FROM reservations GROUP BY date ORDER BY date ASC",
        )?;
        let counts = stmt
            .query_map([], |row| {
                let date: String = row.get(0)?;
                let count: u32 = row.get(1)?;
                let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
                    .map_err(|e| conversion_error(0, e))?;
                Ok((date, count))
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(counts)
    }

    /// Applies a status and notes update to a reservation.
    ///
    /// The current status is read and the transition policy checked inside
    /// the same IMMEDIATE transaction as the write. An empty update returns
    /// the stored record unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has this id,
    /// [`Error::InvalidTransition`] if the policy rejects the change, or a
    /// store error if the transaction fails.
    pub fn update_reservation_status(
        &mut self,
        id: ReservationId,
        update: &StatusUpdate,
        policy: TransitionPolicy,
    ) -> Result<Reservation> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current = select_by_id(&tx, id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {id}"),
        })?;

        if update.is_empty() {
            return Ok(current);
        }

        if let Some(status) = update.status {
            policy.check(current.status(), status)?;
        }

        tx.execute(
            "UPDATE reservations
             SET status = COALESCE(?, status),
                 notes = COALESCE(?, notes),
                 updated_at = ?
             WHERE id = ?",
            params![
                update.status.map(Status::as_str),
                update.notes.as_deref(),
                datetime_to_unix_secs(Utc::now()),
                id.value(),
            ],
        )?;

        let updated = select_by_id(&tx, id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {id}"),
        })?;
        tx.commit()?;

        log::debug!(
            "reservation {id}: status {} -> {}",
            current.status(),
            updated.status()
        );
        Ok(updated)
    }

    /// Deletes a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and deleted
    /// - `Ok(false)` if the reservation was not found
    pub fn delete_reservation(&mut self, id: ReservationId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(DELETE_RESERVATION, params![id.value()])?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }
}
