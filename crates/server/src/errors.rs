use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use common::types::Envelope;
use service::errors::ServiceError;

/// API-facing error: an HTTP status plus the client-visible message,
/// rendered as the uniform `{success:false, error}` envelope. Internal
/// detail never rides along; it belongs in the server-side log.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::error(self.message))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::Validation(_) | ServiceError::Conflict(_) | ServiceError::Model(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        Self::new(status, err.message())
    }
}
