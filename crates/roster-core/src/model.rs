//! User domain model.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record, the single entity in the system.
///
/// `id` and `created_at` are assigned by the persistence layer on insert and
/// are immutable thereafter. `email` uniqueness is enforced by the storage
/// layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Surrogate primary key.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Email address, unique across all users.
    pub email: String,

    /// Creation timestamp, set once by the store.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Creates a new user input.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Partial update of a user. Only the supplied fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    /// Returns `true` when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
