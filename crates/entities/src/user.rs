//! User-related entity definitions.

use serde::{Deserialize, Serialize};

/// Id carried by a user that has not been persisted yet.
pub const UNASSIGNED_USER_ID: i64 = 0;

/// A user record.
///
/// Users are immutable values. Changing a user produces a new value that keeps
/// the original `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store on creation.
    #[serde(default)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address. Not validated.
    pub email: String,
}

impl User {
    /// Creates a user with the given id.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns true if the store has assigned an id to this user.
    pub fn has_assigned_id(&self) -> bool {
        self.id > UNASSIGNED_USER_ID
    }

    /// Returns the same user under a different id.
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    /// Returns a copy of this user with `name` and `email` taken from `update`.
    pub fn merged_with(&self, update: &UserUpdate) -> Self {
        Self {
            id: self.id,
            name: update.name.clone(),
            email: update.email.clone(),
        }
    }
}

/// Payload for creating a user.
///
/// An `id` field sent by a caller is accepted and ignored; the store assigns
/// the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl NewUser {
    /// Creates a new user payload.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Converts the payload into a user without an assigned id.
    pub fn into_user(self) -> User {
        User::new(UNASSIGNED_USER_ID, self.name, self.email)
    }
}

/// Payload for updating a user. Both fields are always overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New display name.
    pub name: String,
    /// New email address.
    pub email: String,
}

impl UserUpdate {
    /// Creates a new update payload.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
