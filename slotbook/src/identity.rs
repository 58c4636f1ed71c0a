//! Caller identity as supplied by the external identity provider.
//!
//! The engine never issues or verifies identities. It reads the [`Caller`]
//! it is handed once per operation and trusts it verbatim.

use serde::{Deserialize, Serialize};

use crate::reservation::{GuestInfo, UserId};

/// Who is making a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// A registered user.
    User(UserId),
    /// An anonymous caller with inline contact details.
    Guest(GuestInfo),
}

/// The identity of a caller together with its capabilities.
///
/// # Examples
///
/// ```
/// use slotbook::{Caller, GuestInfo, UserId};
///
/// let user = Caller::user(UserId::new("u-1").unwrap());
/// assert!(!user.is_admin());
///
/// let admin = Caller::admin(UserId::new("root").unwrap());
/// assert!(admin.is_admin());
///
/// let guest = Caller::guest(GuestInfo::new("Ana", "ana@example.com", "555").unwrap());
/// assert!(guest.is_guest());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    identity: Identity,
    is_admin: bool,
}

impl Caller {
    /// Creates a caller with an explicit identity and admin capability.
    #[must_use]
    pub const fn new(identity: Identity, is_admin: bool) -> Self {
        Self { identity, is_admin }
    }

    /// Creates a non-privileged registered caller.
    #[must_use]
    pub const fn user(id: UserId) -> Self {
        Self::new(Identity::User(id), false)
    }

    /// Creates a registered caller holding the admin capability.
    #[must_use]
    pub const fn admin(id: UserId) -> Self {
        Self::new(Identity::User(id), true)
    }

    /// Creates an anonymous caller.
    #[must_use]
    pub const fn guest(info: GuestInfo) -> Self {
        Self::new(Identity::Guest(info), false)
    }

    /// Returns the caller's identity.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns `true` if the caller holds the admin capability.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Returns `true` if the caller is anonymous.
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        matches!(self.identity, Identity::Guest(_))
    }

    /// Returns the registered user id, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<&UserId> {
        match &self.identity {
            Identity::User(id) => Some(id),
            Identity::Guest(_) => None,
        }
    }

    /// Fails with an authorization error unless the caller is an admin.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Authorization`] naming `operation`.
    pub fn require_admin(&self, operation: &str) -> crate::Result<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(crate::Error::Authorization {
                operation: operation.to_string(),
            })
        }
    }
}

/// Profile fields of a registered user, kept for listing joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The user's identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_caller() {
        let caller = Caller::user(UserId::new("u-1").unwrap());
        assert!(!caller.is_guest());
        assert!(!caller.is_admin());
        assert_eq!(caller.user_id().unwrap().as_str(), "u-1");
    }

    #[test]
    fn test_guest_caller_has_no_user_id() {
        let info = GuestInfo::new("Ana", "ana@example.com", "555").unwrap();
        let caller = Caller::guest(info.clone());
        assert!(caller.is_guest());
        assert!(caller.user_id().is_none());
        assert_eq!(caller.identity(), &Identity::Guest(info));
    }

    #[test]
    fn test_require_admin() {
        let admin = Caller::admin(UserId::new("root").unwrap());
        assert!(admin.require_admin("delete").is_ok());

        let user = Caller::user(UserId::new("u-1").unwrap());
        let err = user.require_admin("delete reservations").unwrap_err();
        assert!(
            matches!(err, crate::Error::Authorization { ref operation } if operation == "delete reservations")
        );
    }
}
