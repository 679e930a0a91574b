//! Error types for the store API.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl
//! turns the error into a JSON body with the matching HTTP status code.
//!
//! ## Status Mapping
//! ```text
//! ProductNotFound / OrderNotFound / CustomerNotFound  → 404
//! Validation                                          → 400
//! InsufficientStock                                   → 409
//! InvalidStatusTransition                             → 409
//! anything else                                       → 500
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use grocer_core::CoreError;

/// Machine-readable error code carried in the JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    ValidationFailed,
    InsufficientStock,
    InvalidTransition,
    Internal,
}

/// API error, serialized as the response body on failure.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::InsufficientStock => StatusCode::CONFLICT,
            ErrorCode::InvalidTransition => StatusCode::CONFLICT,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let code = match error {
            CoreError::ProductNotFound(_)
            | CoreError::OrderNotFound(_)
            | CoreError::CustomerNotFound(_) => ErrorCode::NotFound,
            CoreError::Validation(_) => ErrorCode::ValidationFailed,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::InvalidStatusTransition { .. } => ErrorCode::InvalidTransition,
        };
        ApiError {
            code,
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found: ApiError = CoreError::ProductNotFound(7).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.code, ErrorCode::NotFound);

        let stock: ApiError = CoreError::InsufficientStock {
            product_id: 1,
            name: "Honeycrisp Apple".to_string(),
            available: 50,
            requested: 51,
        }
        .into();
        assert_eq!(stock.status(), StatusCode::CONFLICT);

        let transition: ApiError = CoreError::InvalidStatusTransition {
            order_id: 1001,
            from: grocer_core::OrderStatus::Completed,
            to: grocer_core::OrderStatus::Pending,
        }
        .into();
        assert_eq!(transition.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_error_body_shape() {
        let err: ApiError = CoreError::OrderNotFound(9999).into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "not_found");
        assert!(json["message"].as_str().unwrap().contains("9999"));
    }
}
