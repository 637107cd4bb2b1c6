//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the REST API.

use roster_core::{ErrorResponse, FieldError, UserId};
use roster_service::{
    CreateUserRequest, HealthResponse, MessageResponse, ServiceHealth, UpdateUserRequest,
    UserResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = "CRUD API for user records with a Redis read-through cache",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        // Health endpoints
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            UserId,
            ErrorResponse,
            FieldError,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            MessageResponse,
            HealthResponse,
            ServiceHealth,
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
