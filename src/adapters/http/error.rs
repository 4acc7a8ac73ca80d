//! Shared HTTP error handling.
//!
//! Every endpoint answers failures with the same `{code, message, details?}`
//! body; `ApiError` maps domain errors and body rejections onto it.

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidInput.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(ErrorResponse),
    NotFound(ErrorResponse),
    Internal(ErrorResponse),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let mut body = ErrorResponse {
            code: err.code.to_string(),
            message: err.message,
            details: None,
        };
        if !err.details.is_empty() {
            body = body.with_details(serde_json::json!(err.details));
        }

        match err.code {
            ErrorCode::InvalidInput => ApiError::BadRequest(body),
            ErrorCode::NotFound => ApiError::NotFound(body),
            ErrorCode::InternalError => ApiError::Internal(body),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(ErrorResponse::invalid_input(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::BadRequest(body) => (StatusCode::BAD_REQUEST, body),
            ApiError::NotFound(body) => (StatusCode::NOT_FOUND, body),
            ApiError::Internal(body) => {
                error!(message = %body.message, "Internal error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Response for a handler that panicked. The panic payload is logged, never
/// returned to the caller.
pub fn internal_error_response(panic: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!(panic = %detail, "Handler panicked");

    ApiError::Internal(ErrorResponse::internal("Internal server error")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request_with_field() {
        let err = ApiError::from(DomainError::invalid_input("policy_id", "too short"));
        match &err {
            ApiError::BadRequest(body) => {
                assert_eq!(body.code, "INVALID_INPUT");
                assert_eq!(body.message, "too short");
                assert_eq!(
                    body.details,
                    Some(serde_json::json!({"field": "policy_id"}))
                );
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(DomainError::not_found("nothing here"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_maps_to_500() {
        let err = ApiError::from(DomainError::new(ErrorCode::InternalError, "boom"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn panic_payload_becomes_generic_500() {
        let response = internal_error_response(Box::new("secret state dump"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_serializes_without_details_when_none() {
        let json = serde_json::to_string(&ErrorResponse::not_found("missing")).unwrap();
        assert!(!json.contains("details"));
        assert!(json.contains("NOT_FOUND"));
    }
}
