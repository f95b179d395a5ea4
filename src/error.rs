use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum WorklogError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Error hashing password")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl IntoResponse for WorklogError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            WorklogError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            WorklogError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            // The raw store message goes out verbatim; the original backend
            // did the same and clients depend on nothing better.
            WorklogError::Database(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            WorklogError::Hashing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error hashing password".to_string(),
            ),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// JSON error envelope: `{"error": "..."}` on every failure path.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}
