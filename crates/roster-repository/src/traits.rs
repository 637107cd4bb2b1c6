//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{NewUser, RosterResult, User, UserChanges, UserId};
use shaku::Interface;

/// User repository trait.
///
/// The persistence layer is the single source of truth for user records.
/// Email uniqueness is enforced here (by the unique index), not by callers.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Finds all users, ordered by ascending id.
    async fn find_all(&self) -> RosterResult<Vec<User>>;

    /// Inserts a new user; the store assigns `id` and `created_at`.
    async fn insert(&self, new_user: &NewUser) -> RosterResult<User>;

    /// Applies a partial update to the user with the given id.
    ///
    /// Returns `None` when no row matches.
    async fn update(&self, id: UserId, changes: &UserChanges) -> RosterResult<Option<User>>;

    /// Deletes a user by ID.
    ///
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: UserId) -> RosterResult<bool>;
}
