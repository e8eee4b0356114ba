use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use registry_core::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Body of a rejected create. Clients match on this exact string.
pub const DUPLICATE_NIK_MESSAGE: &str = "Duplicate NIK Detected !!!";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Duplicate NIK: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DuplicateNik(nik) => ApiError::Duplicate(nik),
            DomainError::UserNotFound(nik) => {
                ApiError::NotFound(format!("No active user with nik '{}'", nik))
            }
            DomainError::DatabaseError(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // Logged by UserService::create
            ApiError::Duplicate(_) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(DUPLICATE_NIK_MESSAGE),
                )
                    .into_response();
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "DatabaseError", msg)
            }
            ApiError::Unavailable(msg) => {
                tracing::error!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "Unavailable", msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
