//! Error types for the beer service REST API.
//!
//! Storage errors from the store layer are mapped to HTTP status codes and
//! JSON error bodies:
//!
//! | Store Error | HTTP Status |
//! |-------------|-------------|
//! | NotFound | 404 |
//! | AlreadyExists | 409 |
//! | Backend | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use taproom_store::StoreError;
use uuid::Uuid;

/// The primary error type for REST API operations.
///
/// Provides semantic error types that map cleanly to HTTP status codes.
#[derive(Debug)]
pub enum ApiError {
    /// Beer not found (HTTP 404).
    NotFound {
        /// The beer ID.
        id: Uuid,
    },

    /// Conflicting record (HTTP 409).
    Conflict {
        /// Message describing the conflict.
        message: String,
    },

    /// Bad request - malformed identifier or payload (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { id } => {
                write!(f, "Beer not found: {}", id)
            }
            ApiError::Conflict { message } => {
                write!(f, "Conflict: {}", message)
            }
            ApiError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            ApiError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            ApiError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                "not-found",
                format!("Beer {} not found", id),
            ),
            ApiError::Conflict { message } => (StatusCode::CONFLICT, "conflict", message.clone()),
            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "invalid", message.clone())
            }
            ApiError::InternalError { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "exception",
                message.clone(),
            ),
        };

        let body = serde_json::json!({
            "error": code,
            "message": details,
        });
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound { id },
            StoreError::AlreadyExists { id } => ApiError::Conflict {
                message: format!("Beer {} already exists", id),
            },
            StoreError::Backend { message } => ApiError::InternalError { message },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound { id: Uuid::nil() };
        assert_eq!(
            err.to_string(),
            "Beer not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_bad_request_display() {
        let err = ApiError::BadRequest {
            message: "id mismatch".to_string(),
        };
        assert!(err.to_string().contains("id mismatch"));
    }

    #[test]
    fn test_store_error_mapping() {
        let id = Uuid::new_v4();
        let err: ApiError = StoreError::NotFound { id }.into();
        assert!(matches!(err, ApiError::NotFound { id: e } if e == id));

        let err: ApiError = StoreError::Backend {
            message: "boom".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::InternalError { .. }));
    }

    #[test]
    fn test_json_error_mapping() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::BadRequest { .. }));
    }
}
