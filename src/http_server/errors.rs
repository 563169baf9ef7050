//! # API Errors
//!
//! Error types for the HTTP surface and their status-code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::InvalidIdentifier;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No record matches the identifier
    #[error("gelataria {0} not found")]
    NotFound(String),

    /// Malformed external identifier; reported as 404, not distinguished
    /// from an absent record
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidIdentifier(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound("66b1f09e8a4c2d73a1e5b4c9".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_identifier_maps_to_404_as_well() {
        let err = ApiError::InvalidIdentifier(InvalidIdentifier("zzz".into()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = ApiError::Store(StoreError::LockPoisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_body_carries_message_and_code() {
        let body = ErrorResponse::from(ApiError::NotFound("abc".into()));
        assert_eq!(body.code, 404);
        assert!(body.error.contains("abc"));
    }
}
