//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::UserServiceError;

/// Error codes carried in JSON error bodies.
pub mod error_codes {
    /// Storage or other internal failure.
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] user_store::UserStoreError),
}

impl From<UserServiceError> for ServerError {
    fn from(err: UserServiceError) -> Self {
        match err {
            e @ UserServiceError::NotFound(_) => ServerError::NotFound(e.to_string()),
            UserServiceError::Store(e) => ServerError::Database(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            // Clients only get the status for a missing user.
            ServerError::NotFound(msg) => {
                tracing::debug!(message = %msg, "Resource not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ServerError::Database(e) => {
                tracing::error!(error = %e, "Request failed");

                let body = json!({
                    "error": {
                        "code": error_codes::INTERNAL_ERROR,
                        "message": self.to_string(),
                    }
                });

                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
