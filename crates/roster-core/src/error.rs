//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all layers of Roster.
///
/// Every operation returns one of these variants so that the handler layer
/// can map each error kind to its HTTP status deterministically.
#[derive(Error, Debug)]
pub enum RosterError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate email)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    ///
    /// A unique-constraint conflict is reported as 400, matching the
    /// validation-style rejection the API contract specifies for duplicate
    /// emails.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::Conflict(_) => 400,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // SQLSTATE 23505: PostgreSQL unique violation
                if let Some(code) = db_err.code() {
                    if code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `RosterError`.
    #[must_use]
    pub fn from_error(error: &RosterError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&RosterError> for ErrorResponse {
    fn from(error: &RosterError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(RosterError::not_found("User", 1).status_code(), 404);
        assert_eq!(RosterError::validation("name is required").status_code(), 400);
        assert_eq!(RosterError::conflict("duplicate email").status_code(), 400);
        assert_eq!(RosterError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(RosterError::Cache("redis down".to_string()).status_code(), 500);
        assert_eq!(RosterError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RosterError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(RosterError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(RosterError::conflict("duplicate").error_code(), "CONFLICT");
        assert_eq!(RosterError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(RosterError::Cache("c".to_string()).error_code(), "CACHE_ERROR");
        assert_eq!(RosterError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_conflict_is_a_bad_request() {
        // Duplicate email must surface to callers as a 400, not a 409.
        let err = RosterError::conflict("Email already exists");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_error_constructors() {
        let not_found = RosterError::not_found("User", "123");
        assert!(not_found.to_string().contains("User"));

        let validation = RosterError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));

        let conflict = RosterError::conflict("duplicate entry");
        assert!(conflict.to_string().contains("duplicate entry"));

        let internal = RosterError::internal("panic");
        assert!(internal.to_string().contains("panic"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = RosterError::not_found("User", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = RosterError::validation("bad input");
        let details = vec![FieldError {
            field: "email".to_string(),
            message: "Email is required".to_string(),
            code: "length".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert!(response.details.is_some());
        assert_eq!(response.details.unwrap().len(), 1);
    }

    #[test]
    fn test_error_response_from_ref() {
        let err = RosterError::not_found("User", 42);
        let response: ErrorResponse = ErrorResponse::from(&err);
        assert_eq!(response.code, "NOT_FOUND");
    }
}
