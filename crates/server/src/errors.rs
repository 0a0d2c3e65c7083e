use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::{auth::errors::AuthError, ServiceError};
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": title, "detail": detail}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            e if e.is_validation() => {
                JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(e.to_string()))
            }
            e => {
                error!(err = %e, "content operation failed");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage Error", Some(e.to_string()))
            }
        }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized => JsonApiError::unauthorized("invalid credentials"),
            AuthError::TokenError(msg) => JsonApiError::unauthorized(msg),
            AuthError::Validation(msg) => JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(msg)),
            e => {
                error!(err = %e, code = e.code(), "auth failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Auth Error", Some(e.to_string()))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database bootstrap failed: {0}")]
    Database(String),
}
