//! User profile directory.
//!
//! Profiles are only used to enrich listings. Reservations reference users
//! by id without a foreign key, so a removed profile leaves its
//! reservations behind.

use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::error::Result;
use crate::identity::UserProfile;
use crate::reservation::UserId;

use super::connection::Database;

const UPSERT_PROFILE: &str = r"
    INSERT INTO users (id, name, email, phone) VALUES (?, ?, ?, ?)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        email = excluded.email,
        phone = excluded.phone
";

const SELECT_PROFILE: &str = "SELECT id, name, email, phone FROM users WHERE id = ?";

const DELETE_PROFILE: &str = "DELETE FROM users WHERE id = ?";

impl Database {
    /// Creates or replaces a user profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or write fails.
    pub fn upsert_user_profile(&mut self, profile: &UserProfile) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(
            UPSERT_PROFILE,
            params![
                profile.id.as_str(),
                profile.name,
                profile.email,
                profile.phone
            ],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Retrieves a user profile by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_user_profile(&self, id: &UserId) -> Result<Option<UserProfile>> {
        let mut stmt = self.conn.prepare_cached(SELECT_PROFILE)?;
        let profile = stmt
            .query_row(params![id.as_str()], |row| {
                let id: String = row.get(0)?;
                Ok(UserProfile {
                    id: UserId::new(id).map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(
                            0,
                            rusqlite::types::Type::Text,
                            Box::new(e),
                        )
                    })?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    phone: row.get(3)?,
                })
            })
            .optional()?;
        Ok(profile)
    }

    /// Removes a user profile.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the profile existed and was removed
    /// - `Ok(false)` if there was no such profile
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    pub fn delete_user_profile(&mut self, id: &UserId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let rows = tx.execute(DELETE_PROFILE, params![id.as_str()])?;
        tx.commit()?;
        Ok(rows > 0)
    }
}
