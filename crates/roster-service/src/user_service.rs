//! User service: cache-aside reads, writes with targeted invalidation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, LIST_TTL, USER_TTL};
use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use roster_core::{NewUser, RosterError, RosterResult, UserChanges, UserId, ValidateExt};
use roster_repository::UserRepository;
use shaku::{Component, Interface};
use std::sync::Arc;
use tracing::{debug, info};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Creates a new user.
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse>;

    /// Lists all users, ordered by ascending id.
    async fn list_users(&self) -> RosterResult<Vec<UserResponse>>;

    /// Applies a partial update to a user.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> RosterResult<UserResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> RosterResult<()>;
}

/// User service implementation.
///
/// Reads go cache-first and fall through to the repository on a miss or on
/// any cache failure; writes go to the repository and then invalidate the
/// affected cache keys best-effort. The cache is a performance optimization
/// only and its failures never surface to callers.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl UserServiceComponent {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            user_repository,
            cache,
        }
    }

    /// Best-effort cache invalidation; the write has already succeeded and
    /// must not be failed or rolled back here.
    async fn invalidate(&self, key: &str) {
        if let Err(e) = self.cache.delete(key).await {
            debug!("Cache invalidation failed for key '{}': {}", key, e);
        }
    }
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse> {
        debug!("Creating user: {}", request.email);

        request.validate_request()?;

        let new_user = NewUser::new(request.name, request.email);

        // Uniqueness is enforced by the store; a duplicate email surfaces
        // here as a Conflict via the error conversion.
        let created = self.user_repository.insert(&new_user).await?;
        let response = UserResponse::from(created);

        // Only the listing is stale now; the per-id key was never cached.
        self.invalidate(&cache_keys::users_all()).await;

        info!("User created: {}", response.id);
        Ok(response)
    }

    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
        debug!("Getting user: {}", id);

        let cache_key = cache_keys::user_by_id(id);

        match self.cache.get::<UserResponse>(&cache_key).await {
            Ok(Some(cached)) => {
                debug!("Cache hit for user: {}", id);
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => debug!(
                "Cache read failed for key '{}', falling back to database: {}",
                cache_key, e
            ),
        }

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("User", id))?;

        let response = UserResponse::from(user);

        let _ = self.cache.set(&cache_key, &response, USER_TTL).await;

        Ok(response)
    }

    async fn list_users(&self) -> RosterResult<Vec<UserResponse>> {
        debug!("Listing users");

        let cache_key = cache_keys::users_all();

        match self.cache.get::<Vec<UserResponse>>(&cache_key).await {
            Ok(Some(cached)) => {
                debug!("Cache hit for user listing");
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => debug!(
                "Cache read failed for key '{}', falling back to database: {}",
                cache_key, e
            ),
        }

        let users = self.user_repository.find_all().await?;
        let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

        let _ = self.cache.set(&cache_key, &response, LIST_TTL).await;

        Ok(response)
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> RosterResult<UserResponse> {
        debug!("Updating user: {}", id);

        if request.is_empty() {
            return Err(RosterError::validation("Name or email is required"));
        }
        request.validate_request()?;

        let changes = UserChanges::from(request);

        let updated = self
            .user_repository
            .update(id, &changes)
            .await?
            .ok_or_else(|| RosterError::not_found("User", id))?;

        self.invalidate(&cache_keys::users_all()).await;
        self.invalidate(&cache_keys::user_by_id(id)).await;

        info!("User updated: {}", id);
        Ok(UserResponse::from(updated))
    }

    async fn delete_user(&self, id: UserId) -> RosterResult<()> {
        debug!("Deleting user: {}", id);

        let deleted = self.user_repository.delete(id).await?;

        if !deleted {
            return Err(RosterError::not_found("User", id));
        }

        self.invalidate(&cache_keys::users_all()).await;
        self.invalidate(&cache_keys::user_by_id(id)).await;

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceComponent").finish_non_exhaustive()
    }
}
