//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use chronicle_types::error::{GatewayError, ValidationError};

/// Application-level error that maps to HTTP responses.
///
/// Every error body has the shape `{"error": "<message>"}`.
#[derive(Debug)]
pub enum AppError {
    /// A required request field was missing. 400.
    Validation(ValidationError),
    /// The model call failed and the `status` error policy is active. 502.
    Model(GatewayError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        AppError::Model(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Model(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
        };

        let body = json!({ "error": message });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
