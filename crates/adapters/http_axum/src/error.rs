//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hotelhub_domain::error::{AuthError, HotelError, ValidationError};

use crate::response::ErrorEnvelope;

/// Maps [`HotelError`] and request decoding failures to an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// A use-case failed.
    Domain(HotelError),
    /// The request could not be decoded into the expected shape.
    BadRequest(String),
}

impl From<HotelError> for ApiError {
    fn from(err: HotelError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn parts(self) -> (StatusCode, &'static str, String) {
        let err = match self {
            Self::BadRequest(message) => return (StatusCode::BAD_REQUEST, "BAD_REQUEST", message),
            Self::Domain(err) => err,
        };
        match err {
            HotelError::Validation(err) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", err.to_string())
            }
            HotelError::NotFound(err) => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
            HotelError::Conflict(err) => (StatusCode::CONFLICT, "CONFLICT", err.to_string()),
            HotelError::Auth(err @ AuthError::Forbidden { .. }) => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", err.to_string())
            }
            HotelError::Auth(err) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", err.to_string()),
            HotelError::Database(err) => {
                tracing::error!(operation = err.operation, error = %err.source, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "database operation failed".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, Json(ErrorEnvelope::new(code, message))).into_response()
    }
}
