//! User management controller.

use crate::{
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use roster_core::UserId;
use roster_service::{CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users, ordered by ascending id", body = [UserResponse]),
        (status = 500, description = "Storage unreachable", body = roster_core::ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    let response = state.user_service.list_users().await?;
    ok(response)
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user", body = UserResponse),
        (status = 400, description = "Missing fields or duplicate email", body = roster_core::ErrorResponse),
        (status = 500, description = "Storage unreachable", body = roster_core::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    debug!("Create user request: {}", request.email);

    let response = state.user_service.create_user(request).await?;
    Ok(created(response))
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "User not found", body = roster_core::ErrorResponse),
        (status = 500, description = "Storage unreachable", body = roster_core::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", id);

    let response = state.user_service.get_user(id).await?;
    ok(response)
}

/// Partially update a user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "No fields or duplicate email", body = roster_core::ErrorResponse),
        (status = 404, description = "User not found", body = roster_core::ErrorResponse),
        (status = 500, description = "Storage unreachable", body = roster_core::ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    debug!("Update user request: {}", id);

    let response = state.user_service.update_user(id, request).await?;
    ok(response)
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deletion confirmation", body = MessageResponse),
        (status = 404, description = "User not found", body = roster_core::ErrorResponse),
        (status = 500, description = "Storage unreachable", body = roster_core::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> ApiResult<MessageResponse> {
    debug!("Delete user request: {}", id);

    state.user_service.delete_user(id).await?;
    ok(MessageResponse::new("User deleted successfully"))
}
